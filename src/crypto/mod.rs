//! Cryptographic primitives.
//!
//! Provides secure randomness and salts, SHA-2 digests and PBKDF2 key
//! derivation. The [`CryptoPrimitives`] trait is the seam the hash
//! coordinator goes through, so hosts can plug in another backend.

pub mod digest;
pub mod kdf;
pub mod random;

pub use digest::{DigestAlgorithm, digest};
pub use kdf::{KeyDerivationRequest, derive, derive_with, verify, verify_with};
pub use random::{
    OsRandom, Salt, SecureRandomSource, generate_salt, generate_salt_with,
};

use crate::error::{Error, Result};
use hmac::Hmac;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Default salt length in bytes.
pub const DEFAULT_SALT_LEN: usize = 16;
/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100_000;
/// Iteration count below which callers should warn.
pub const RECOMMENDED_MIN_ITERATIONS: u32 = 100_000;
/// Default derived key size in bits.
pub const DEFAULT_OUTPUT_BITS: u32 = 256;
/// Largest derived key size accepted, in bits (1 KiB).
pub const MAX_OUTPUT_BITS: u32 = 8192;

/// Hash and key derivation backend.
pub trait CryptoPrimitives: Send + Sync {
    /// Hash `data` with the selected algorithm.
    fn digest(&self, data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8>;

    /// Fill `out` with PBKDF2-HMAC-SHA-256 key material.
    fn pbkdf2_sha256(&self, password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8])
    -> Result<()>;
}

/// [`CryptoPrimitives`] backed by the RustCrypto `sha2` and `pbkdf2` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCrypto;

impl CryptoPrimitives for RustCrypto {
    fn digest(&self, data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
        match algorithm {
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    fn pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()> {
        if iterations == 0 {
            return Err(Error::InvalidParameter(
                "PBKDF2 iterations must be >= 1".into(),
            ));
        }

        pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, out)
            .map_err(|e| Error::InvalidParameter(format!("PBKDF2 failed: {e}")))
    }
}
