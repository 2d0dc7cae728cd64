//! # MLSAG Ring Signatures
//!
//! Multilayer linkable spontaneous anonymous group signatures over
//! secp256k1, as used by ring confidential transactions.
//!
//! A ring is an `n_rows x n_cols` [`MlsagMatrix`]: each column is a ring
//! member, rows `0..n_rows-1` hold the member's spent public keys and the
//! last row is filled by [`prepare`] with the member's input commitments
//! minus the transaction's outputs. Only the real member knows the
//! discrete log of every cell in its column, and for the commitment row
//! that requires the transaction to balance.
//!
//! ## Components
//!
//! - [`key_image`]: the linkability tag `sk * HashToPoint(pk)`
//! - [`prepare`]: the commitment-balancing row and its blind sum
//! - [`generate`], [`verify`]: the signature itself
//!
//! ## Example
//!
//! ```rust,ignore
//! let prepared = prepare(matrix, &inputs, &outputs, &blinds, n_outs, n_blinded)?;
//! secret_keys.push(*prepared.blind_sum);
//! let sig = generate(&nonce, &preimage, signer, &secret_keys, &prepared.matrix)?;
//! assert!(verify(&preimage, &prepared.matrix, &sig)?);
//! ```

pub mod key_image;
pub mod matrix;
pub mod prepare;
pub mod sign;
pub mod signature;

#[cfg(test)]
pub mod property_tests;

pub use key_image::key_image;
pub use matrix::{Dimensions, MlsagMatrix};
pub use prepare::{prepare, Prepared};
pub use sign::{generate, verify};
pub use signature::MlsagSignature;
