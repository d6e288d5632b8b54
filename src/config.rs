use crate::crypto::{DEFAULT_ITERATIONS, DEFAULT_OUTPUT_BITS, DEFAULT_SALT_LEN, MAX_OUTPUT_BITS};
use crate::error::{Error, Result};

/// Defaults applied by the hash coordinator to PBKDF2 requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    salt_len: usize,
    iterations: u32,
    output_bits: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            // bytes of generated salt
            salt_len: DEFAULT_SALT_LEN,
            iterations: DEFAULT_ITERATIONS,
            output_bits: DEFAULT_OUTPUT_BITS,
        }
    }
}

impl HashConfig {
    pub fn new(salt_len: usize, iterations: u32, output_bits: u32) -> Result<Self> {
        let config = Self {
            salt_len,
            iterations,
            output_bits,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn output_bits(&self) -> u32 {
        self.output_bits
    }

    pub fn validate(&self) -> Result<()> {
        if self.salt_len < 1 {
            return Err(Error::InvalidParameter("salt length must be >= 1".into()));
        }
        if self.iterations < 1 {
            return Err(Error::InvalidParameter("iterations must be >= 1".into()));
        }
        if self.output_bits < 1 || self.output_bits % 8 != 0 {
            return Err(Error::InvalidParameter(
                "output bits must be a positive multiple of 8".into(),
            ));
        }
        if self.output_bits > MAX_OUTPUT_BITS {
            return Err(Error::InvalidParameter(format!(
                "output bits must be <= {MAX_OUTPUT_BITS}"
            )));
        }
        Ok(())
    }
}
