use std::fmt;

use serde::Serialize;

use super::entropy::EntropyEstimate;

/// Ordinal strength tier, 1 (weakest) to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthTier {
    VeryWeak = 1,
    Weak = 2,
    Reasonable = 3,
    Strong = 4,
    VeryStrong = 5,
}

impl StrengthTier {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Reasonable => "Reasonable",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthVerdict {
    pub score: u8,
    pub label: &'static str,
    pub tier: StrengthTier,
}

impl From<StrengthTier> for StrengthVerdict {
    fn from(tier: StrengthTier) -> Self {
        Self {
            score: tier.score(),
            label: tier.label(),
            tier,
        }
    }
}

impl fmt::Display for StrengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5 {}", self.score, self.label)
    }
}

/// Map entropy to a verdict. Each band excludes its upper bound.
pub fn classify(entropy: EntropyEstimate) -> StrengthVerdict {
    let tier = match entropy.bits() {
        0..28 => StrengthTier::VeryWeak,
        28..36 => StrengthTier::Weak,
        36..60 => StrengthTier::Reasonable,
        60..128 => StrengthTier::Strong,
        _ => StrengthTier::VeryStrong,
    };
    tier.into()
}
