//! Offline password strength estimation, SHA-2 digests and PBKDF2 key
//! derivation.
//!
//! ```
//! use passprobe::{HashAlgorithm, assess, compute_hash};
//!
//! let assessment = assess("correcthorsebatterystaple");
//! assert_eq!(assessment.verdict.label, "Strong");
//!
//! let result = compute_hash("secret", HashAlgorithm::Pbkdf2, None, Some(1_000))?;
//! assert!(result.salt_used.is_some());
//! # Ok::<(), passprobe::Error>(())
//! ```

pub mod config;
pub mod crypto;
pub mod encoding;
mod error;
pub mod hasher;
pub mod provider;
pub mod strength;

pub use crate::config::HashConfig;
pub use crate::crypto::{DigestAlgorithm, KeyDerivationRequest, Salt, digest, generate_salt};
pub use crate::error::{Error, Result};
pub use crate::hasher::{HashAlgorithm, HashResult, Hasher, compute_hash};
pub use crate::strength::{Assessment, EntropyEstimate, StrengthVerdict, assess, classify, estimate};
