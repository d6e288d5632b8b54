use std::fmt;

use log::debug;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{
    CryptoPrimitives, DEFAULT_OUTPUT_BITS, MAX_OUTPUT_BITS, RECOMMENDED_MIN_ITERATIONS, RustCrypto,
};
use crate::encoding;
use crate::error::{Error, Result};

/// Input to a PBKDF2-HMAC-SHA-256 derivation.
#[derive(Clone)]
pub struct KeyDerivationRequest {
    password: Zeroizing<String>,
    salt_hex: String,
    iterations: u32,
    output_bits: u32,
}

impl fmt::Debug for KeyDerivationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDerivationRequest")
            .field("password", &"<redacted>")
            .field("salt_hex", &self.salt_hex)
            .field("iterations", &self.iterations)
            .field("output_bits", &self.output_bits)
            .finish()
    }
}

impl KeyDerivationRequest {
    /// Build a request producing the default 256 bits of key material.
    ///
    /// Nothing is validated here; [`derive`] reports bad parameters.
    pub fn new(password: &str, salt_hex: impl Into<String>, iterations: u32) -> Self {
        Self {
            password: Zeroizing::new(password.to_owned()),
            salt_hex: salt_hex.into(),
            iterations,
            output_bits: DEFAULT_OUTPUT_BITS,
        }
    }

    pub fn with_output_bits(mut self, output_bits: u32) -> Self {
        self.output_bits = output_bits;
        self
    }

    pub fn salt_hex(&self) -> &str {
        &self.salt_hex
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn output_bits(&self) -> u32 {
        self.output_bits
    }

    /// `true` when the iteration count is accepted but below the recommended floor.
    pub fn is_below_recommended(&self) -> bool {
        self.iterations < RECOMMENDED_MIN_ITERATIONS
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(Error::InvalidParameter("iterations must be >= 1".into()));
        }
        if self.output_bits < 1 {
            return Err(Error::InvalidParameter("output bits must be >= 1".into()));
        }
        if self.output_bits % 8 != 0 {
            return Err(Error::InvalidParameter(format!(
                "output bits must be a multiple of 8, got {}",
                self.output_bits
            )));
        }
        if self.output_bits > MAX_OUTPUT_BITS {
            return Err(Error::InvalidParameter(format!(
                "output bits must be <= {MAX_OUTPUT_BITS}, got {}",
                self.output_bits
            )));
        }
        Ok(())
    }
}

/// Derive a hex-encoded key with the default backend.
pub fn derive(request: &KeyDerivationRequest) -> Result<String> {
    derive_with(&RustCrypto, request)
}

/// Derive a hex-encoded key with `primitives`.
pub fn derive_with<P: CryptoPrimitives + ?Sized>(
    primitives: &P,
    request: &KeyDerivationRequest,
) -> Result<String> {
    let key = derive_bytes(primitives, request)?;
    Ok(encoding::encode(&*key))
}

fn derive_bytes<P: CryptoPrimitives + ?Sized>(
    primitives: &P,
    request: &KeyDerivationRequest,
) -> Result<Zeroizing<Vec<u8>>> {
    request.validate()?;
    let salt = encoding::decode(&request.salt_hex)?;

    debug!(
        "deriving PBKDF2-HMAC-SHA-256 key: iterations={}, output_bits={}, salt_len={}",
        request.iterations,
        request.output_bits,
        salt.len()
    );

    let mut key = Zeroizing::new(vec![0u8; (request.output_bits / 8) as usize]);
    primitives.pbkdf2_sha256(request.password.as_bytes(), &salt, request.iterations, &mut key)?;
    Ok(key)
}

/// Re-derive and compare against `expected_hex` in constant time.
pub fn verify(request: &KeyDerivationRequest, expected_hex: &str) -> Result<bool> {
    verify_with(&RustCrypto, request, expected_hex)
}

pub fn verify_with<P: CryptoPrimitives + ?Sized>(
    primitives: &P,
    request: &KeyDerivationRequest,
    expected_hex: &str,
) -> Result<bool> {
    let expected = Zeroizing::new(encoding::decode(expected_hex)?);
    let key = derive_bytes(primitives, request)?;
    Ok(key.len() == expected.len() && bool::from(key.as_slice().ct_eq(expected.as_slice())))
}
