//! Error types shared by all secp256k1 ZKP operations

use thiserror::Error;

/// Main error type for commitment, proof and signature operations.
///
/// Every variant describes a caller or input problem. A proof or signature
/// that is well formed but does not verify is reported as `Ok(false)` (or an
/// unsuccessful `ProofInfo`), never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZkpError {
    /// Blinding factor is zero or not below the curve order
    #[error("Invalid blinding factor")]
    InvalidBlind,

    /// Secret key is zero or not below the curve order
    #[error("Invalid secret key")]
    InvalidSecretKey,

    /// Scalar encoding is not below the curve order
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// Point does not parse or is the identity
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Commitment does not parse
    #[error("Invalid commitment: {0}")]
    InvalidCommitment(String),

    /// Result of a homomorphic operation is the point at infinity
    #[error("Result is the point at infinity")]
    IdentityPoint,

    /// Buffer has the wrong size
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Vector length mismatch
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid proof format or structure
    #[error("Invalid proof format: {0}")]
    InvalidProof(String),

    /// Insufficient generators
    #[error("Insufficient generators: need {needed}, have {available}")]
    InsufficientGenerators { needed: usize, available: usize },

    /// Value below the requested minimum
    #[error("Value {value} is below the minimum {min}")]
    ValueBelowMinimum { value: u64, min: u64 },

    /// Embedded message too long
    #[error("Message of {actual} bytes exceeds the {max} byte limit")]
    MessageTooLong { max: usize, actual: usize },

    /// Secret key does not correspond to the public data
    #[error("Secret key does not match public key at row {row}")]
    KeyMismatch { row: usize },

    /// Commitment does not open to the supplied value and blind
    #[error("Commitment does not match value and blinding factor")]
    CommitmentMismatch,

    /// Probabilistic signing failed on every attempt
    #[error("Proof generation failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// Signature backend error
    #[error("Signature error: {0}")]
    SignatureError(String),
}

/// Result type for secp256k1 ZKP operations
pub type ZkpResult<T> = Result<T, ZkpError>;
