use thiserror::Error;

/// Errors produced by the encoding, randomness and key derivation engines.
///
/// Messages never carry the password or derived key material.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex input had odd length or contained a non-hex character.
    #[error("malformed hex encoding: {0}")]
    MalformedEncoding(String),

    /// Iteration count, output size or salt length out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The OS secure random source failed. Treat as fatal.
    #[error("secure random source unavailable: {0}")]
    InsufficientEntropy(String),

    /// A remote analysis or chat provider failed.
    #[error("provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
