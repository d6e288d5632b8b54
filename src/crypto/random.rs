use std::fmt;
use std::str::FromStr;

use getrandom::fill;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::encoding;
use crate::error::{Error, Result};

/// Source of cryptographically secure random bytes.
pub trait SecureRandomSource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        fill(buf).map_err(|e| Error::InsufficientEntropy(format!("OS random generator: {e}")))
    }
}

/// A salt held in canonical lowercase hex form.
///
/// The hex length is always twice the byte length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Salt(String);

impl Salt {
    /// Parse a caller-supplied hex salt, lowercasing it.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.is_empty() {
            return Err(Error::MalformedEncoding("salt must not be empty".into()));
        }
        encoding::decode(hex)?;
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(encoding::encode(bytes))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encoding::decode(&self.0)
    }

    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Salt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Salt {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Salt> for String {
    fn from(salt: Salt) -> Self {
        salt.0
    }
}

/// Generate a salt of `len` bytes from the OS random source.
pub fn generate_salt(len: usize) -> Result<Salt> {
    generate_salt_with(&OsRandom, len)
}

/// Generate a salt of `len` bytes from `source`.
pub fn generate_salt_with<R: SecureRandomSource + ?Sized>(source: &R, len: usize) -> Result<Salt> {
    if len == 0 {
        return Err(Error::InvalidParameter("salt length must be >= 1".into()));
    }
    let mut buf = Zeroizing::new(vec![0u8; len]);
    source.fill(&mut buf)?;
    Ok(Salt::from_bytes(&buf))
}
