//! # Pedersen Commitments
//!
//! Homomorphic commitments over secp256k1:
//!
//! ```text
//! Commit(v, r) = r*G + v*H
//! ```
//!
//! Commitments add: `Commit(v1, r1) + Commit(v2, r2) = Commit(v1 + v2, r1 + r2)`.
//! A transaction balances when its input commitments minus its output
//! commitments is the point at infinity, which requires both the values and
//! the blinding factors to cancel. [`blind_sum`] computes the blinding factor
//! that makes a set of commitments cancel.
//!
//! ## Components
//!
//! - [`Commitment`]: the 33-byte serialized commitment
//! - [`commit`], [`blind_commit`]: commitment construction
//! - [`blind_sum`], [`commit_sum`], [`verify_commit_sum`]: homomorphic aggregation
//! - [`blind_switch`]: switch-commitment blinding factor derivation

pub mod commitment;
pub mod engine;

pub use commitment::Commitment;
pub use engine::*;

#[cfg(test)]
pub mod property_tests;
