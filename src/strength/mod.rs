//! Local password strength metrics.
//!
//! A closed-form entropy estimate over detected character classes, and a fixed
//! threshold ladder mapping it to a 1-5 verdict.

pub mod entropy;
pub mod verdict;

pub use entropy::{CharacterPool, EntropyEstimate, estimate};
pub use verdict::{StrengthTier, StrengthVerdict, classify};

use serde::Serialize;

/// Entropy, detected pool and verdict for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub entropy: EntropyEstimate,
    pub pool: CharacterPool,
    pub verdict: StrengthVerdict,
}

pub fn assess(password: &str) -> Assessment {
    let entropy = estimate(password);
    Assessment {
        entropy,
        pool: CharacterPool::detect(password),
        verdict: classify(entropy),
    }
}
