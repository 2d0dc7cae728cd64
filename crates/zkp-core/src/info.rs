//! Data recovered from a range proof

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public and rewound attributes of a range proof or bulletproof.
///
/// An unsuccessful rewind carries all-zero data; callers must check
/// `success` before reading anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ProofInfo {
    /// Whether the proof could be decoded or rewound
    pub success: bool,
    /// Recovered committed value
    pub value: u64,
    /// Recovered blinding factor
    pub blind: [u8; 32],
    /// Recovered embedded message, zero padded to the proof's capacity.
    ///
    /// Proofs do not record the original length, so trailing zero bytes
    /// of a message cannot be told apart from the padding. Callers that
    /// need exact messages must frame them themselves.
    pub message: Vec<u8>,
    /// Length of `message`, i.e. the capacity: 16 for bulletproofs
    pub mlen: usize,
    /// Smallest value the proof admits
    pub min: u64,
    /// Largest value the proof admits
    pub max: u64,
    /// Decimal exponent of the proven range
    pub exp: u8,
    /// Number of bits in the proven range
    pub mantissa: u8,
}

impl ProofInfo {
    /// Result of a failed decode or rewind
    pub fn failed() -> Self {
        Self::default()
    }

    /// Public range metadata of a proof, without any secret data
    pub fn public(min: u64, max: u64, exp: u8, mantissa: u8) -> Self {
        Self {
            success: true,
            value: 0,
            blind: [0u8; 32],
            message: Vec::new(),
            mlen: 0,
            min,
            max,
            exp,
            mantissa,
        }
    }

    /// Public range metadata together with recovered secrets
    pub fn rewound(
        value: u64,
        blind: [u8; 32],
        message: Vec<u8>,
        range: (u64, u64),
        exp: u8,
        mantissa: u8,
    ) -> Self {
        Self {
            success: true,
            value,
            blind,
            mlen: message.len(),
            message,
            min: range.0,
            max: range.1,
            exp,
            mantissa,
        }
    }
}
