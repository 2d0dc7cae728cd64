//! Range proof configuration

use serde::{Deserialize, Serialize};
use zkp_core::{ZkpError, ZkpResult};

/// Largest supported decimal exponent; `10^18` still fits in a `u64`
pub const MAX_EXP: u8 = 18;

/// Largest supported mantissa
pub const MAX_MANTISSA: u8 = 64;

/// Parameters for classic range proof generation and rewinding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeProofConfig {
    /// Decimal exponent: the proof covers multiples of `10^exp`
    pub exp: u8,
    /// Minimum number of bits to prove, hiding the magnitude of small values
    pub min_bits: u8,
    /// Signing attempts before giving up
    pub max_attempts: u32,
}

impl Default for RangeProofConfig {
    fn default() -> Self {
        Self {
            exp: 0,
            min_bits: MAX_MANTISSA,
            max_attempts: 16,
        }
    }
}

impl RangeProofConfig {
    /// Check that every field is in range
    pub fn validate(&self) -> ZkpResult<()> {
        if self.exp > MAX_EXP {
            return Err(ZkpError::InvalidParameters(format!(
                "exponent {} exceeds {}",
                self.exp, MAX_EXP
            )));
        }
        if self.min_bits > MAX_MANTISSA {
            return Err(ZkpError::InvalidParameters(format!(
                "min_bits {} exceeds {}",
                self.min_bits, MAX_MANTISSA
            )));
        }
        if self.max_attempts == 0 {
            return Err(ZkpError::InvalidParameters(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
