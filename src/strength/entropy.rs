use std::fmt;

use serde::Serialize;

/// Pool contribution of ASCII lowercase letters.
pub const LOWERCASE_POOL: u32 = 26;
/// Pool contribution of ASCII uppercase letters.
pub const UPPERCASE_POOL: u32 = 26;
/// Pool contribution of ASCII digits.
pub const DIGIT_POOL: u32 = 10;
/// Fixed pool contribution for any other character. Not a count of symbols used.
pub const SYMBOL_POOL: u32 = 32;

/// Entropy estimate in whole bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct EntropyEstimate(u32);

impl EntropyEstimate {
    pub const ZERO: Self = Self(0);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntropyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Character classes detected in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharacterPool {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterPool {
    pub fn detect(password: &str) -> Self {
        let mut pool = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                pool.lowercase = true;
            } else if c.is_ascii_uppercase() {
                pool.uppercase = true;
            } else if c.is_ascii_digit() {
                pool.digits = true;
            } else {
                pool.symbols = true;
            }
        }
        pool
    }

    /// Sum of the contributions of every class present.
    pub fn size(&self) -> u32 {
        [
            (self.lowercase, LOWERCASE_POOL),
            (self.uppercase, UPPERCASE_POOL),
            (self.digits, DIGIT_POOL),
            (self.symbols, SYMBOL_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }

    pub fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.lowercase, "lowercase"),
            (self.uppercase, "uppercase"),
            (self.digits, "digits"),
            (self.symbols, "symbols"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, name)| *name)
        .collect();

        if names.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{} ({} chars)", names.join(", "), self.size())
        }
    }
}

/// Estimate entropy as `round(length * log2(pool))`.
///
/// Each character is treated as drawn independently and uniformly from the
/// detected pool. Dictionary words, repetition and patterns are not modelled,
/// so low-randomness passwords with a large pool score high: `Password123!`
/// comes out at 79 bits. Length counts UTF-16 code units, so a character
/// outside the Basic Multilingual Plane counts twice.
pub fn estimate(password: &str) -> EntropyEstimate {
    let pool = CharacterPool::detect(password).size();
    if pool == 0 {
        return EntropyEstimate::ZERO;
    }

    let length = password.encode_utf16().count() as f64;
    EntropyEstimate((length * f64::from(pool).log2()).round() as u32)
}
