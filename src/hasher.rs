//! Hash request coordination.
//!
//! Routes a request to the digest engine or to PBKDF2, generating a salt for
//! derivations that arrive without one and handing it back to the caller.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::config::HashConfig;
use crate::crypto::{
    CryptoPrimitives, DigestAlgorithm, KeyDerivationRequest, OsRandom, RustCrypto, Salt,
    SecureRandomSource, generate_salt_with, kdf,
};
use crate::encoding;
use crate::error::{Error, Result};

/// Algorithm selector for [`Hasher::compute_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum HashAlgorithm {
    Digest(DigestAlgorithm),
    Pbkdf2,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digest(algorithm) => fmt::Display::fmt(algorithm, f),
            Self::Pbkdf2 => f.write_str("PBKDF2"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("pbkdf2") {
            return Ok(Self::Pbkdf2);
        }
        s.parse()
            .map(Self::Digest)
            .map_err(|_| Error::InvalidParameter(format!("unknown hash algorithm '{s}'")))
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.to_string()
    }
}

impl From<DigestAlgorithm> for HashAlgorithm {
    fn from(algorithm: DigestAlgorithm) -> Self {
        Self::Digest(algorithm)
    }
}

/// Output of a hash request.
///
/// For PBKDF2, `salt_used` and `iterations` are always present: without them
/// the derived key cannot be reproduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashResult {
    pub hex: String,
    pub algorithm: HashAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_used: Option<Salt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
}

pub struct Hasher<P = RustCrypto, R = OsRandom> {
    primitives: P,
    random: R,
    config: HashConfig,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

impl Hasher {
    pub fn new(config: HashConfig) -> Self {
        Self::with_backend(RustCrypto, OsRandom, config)
    }
}

impl<P: CryptoPrimitives, R: SecureRandomSource> Hasher<P, R> {
    pub fn with_backend(primitives: P, random: R, config: HashConfig) -> Self {
        Self {
            primitives,
            random,
            config,
        }
    }

    /// Hash `input` with `algorithm`.
    ///
    /// Digest requests ignore `salt` and `iterations`. PBKDF2 requests without
    /// a salt get a fresh one of the configured length; iterations fall back
    /// to the configured default.
    pub fn compute_hash(
        &self,
        input: &str,
        algorithm: HashAlgorithm,
        salt: Option<Salt>,
        iterations: Option<u32>,
    ) -> Result<HashResult> {
        match algorithm {
            HashAlgorithm::Digest(digest) => {
                debug!("computing {digest} digest");
                let hex = encoding::encode(self.primitives.digest(input.as_bytes(), digest));
                Ok(HashResult {
                    hex,
                    algorithm,
                    salt_used: None,
                    iterations: None,
                })
            }
            HashAlgorithm::Pbkdf2 => {
                let salt = match salt {
                    Some(salt) => salt,
                    None => {
                        debug!("no salt supplied, generating {} bytes", self.config.salt_len());
                        generate_salt_with(&self.random, self.config.salt_len())?
                    }
                };
                let iterations = iterations.unwrap_or(self.config.iterations());

                let request = KeyDerivationRequest::new(input, salt.as_hex(), iterations)
                    .with_output_bits(self.config.output_bits());
                if request.is_below_recommended() {
                    warn!("PBKDF2 iteration count {iterations} is below the recommended minimum");
                }

                let hex = kdf::derive_with(&self.primitives, &request)?;
                Ok(HashResult {
                    hex,
                    algorithm,
                    salt_used: Some(salt),
                    iterations: Some(iterations),
                })
            }
        }
    }

    /// Re-derive a PBKDF2 key and compare it against `expected_hex`.
    pub fn verify(
        &self,
        input: &str,
        salt: &Salt,
        iterations: Option<u32>,
        expected_hex: &str,
    ) -> Result<bool> {
        let request = KeyDerivationRequest::new(
            input,
            salt.as_hex(),
            iterations.unwrap_or(self.config.iterations()),
        )
        .with_output_bits(self.config.output_bits());
        kdf::verify_with(&self.primitives, &request, expected_hex)
    }
}

/// [`Hasher::compute_hash`] with default configuration and backends.
pub fn compute_hash(
    input: &str,
    algorithm: HashAlgorithm,
    salt: Option<Salt>,
    iterations: Option<u32>,
) -> Result<HashResult> {
    Hasher::default().compute_hash(input, algorithm, salt, iterations)
}
