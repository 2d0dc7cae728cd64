//! # Inner Product Argument (IPA)
//!
//! This crate implements the inner product argument, which is the core component
//! of Bulletproofs. The IPA allows proving knowledge of vectors `a` and `b` such that:
//!
//! ```text
//! P = <a, G> + <b, H> + <a,b>*Q
//! ```
//!
//! ## Mathematical Background
//!
//! The inner product argument uses a recursive folding approach:
//!
//! 1. **Base Case**: For vectors of length 1, the proof is just the values `a` and `b`.
//!
//! 2. **Recursive Case**: For vectors of length `n > 1`:
//!    - Split vectors: `a = (a_L, a_R)`, `b = (b_L, b_R)`
//!    - Compute cross terms:
//!      - `L = <a_L, G_R> + <b_R, H_L> + <a_L, b_R>*Q`
//!      - `R = <a_R, G_L> + <b_L, H_R> + <a_R, b_L>*Q`
//!    - Get challenge `u` from Fiat-Shamir
//!    - Fold vectors:
//!      - `a' = a_L * u + a_R * u^{-1}`
//!      - `b' = b_L * u^{-1} + b_R * u`
//!    - Fold generators:
//!      - `G' = G_L * u^{-1} + G_R * u`
//!      - `H' = H_L * u + H_R * u^{-1}`
//!    - Recurse with folded values
//!
//! The proof consists of all the L and R values from each folding round.
//! Generators are passed in explicitly so callers can run the argument over
//! rescaled bases such as `H'_i = y^{-i} * H_i`.

pub mod proof;
pub mod prover;
pub mod verifier;

pub use proof::*;
pub use prover::*;
pub use verifier::*;
