//! Lowercase hex encoding for salts, digests and derived keys.

use crate::error::{Error, Result};

/// Encode bytes as lowercase hex, two characters per byte.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// Upper-case digits are accepted. Odd-length input or any non-hex character
/// yields [`Error::MalformedEncoding`].
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex).map_err(|e| match e {
        hex::FromHexError::OddLength => {
            Error::MalformedEncoding(format!("odd number of digits ({})", hex.len()))
        }
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            Error::MalformedEncoding(format!("invalid character {c:?} at position {index}"))
        }
        other => Error::MalformedEncoding(other.to_string()),
    })
}

/// Returns `true` if `hex` is non-empty, even-length and all hex digits.
pub fn is_well_formed(hex: &str) -> bool {
    !hex.is_empty() && hex.len() % 2 == 0 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
