//! # Bulletproofs Range Proofs
//!
//! Logarithmic-size proofs that a Pedersen commitment `V = gamma*G + v*H`
//! opens to a value in `[min, min + 2^64)`, with a rewind channel that lets
//! the holder of a dedicated nonce recover the value, the blinding factor and
//! a 16-byte message.
//!
//! ## Mathematical Background
//!
//! A range proof for `v' = v - min` in `[0, 2^64)` works by:
//!
//! 1. **Bit Decomposition**: `a_L` holds the bits of `v'`, `a_R = a_L - 1`
//! 2. **Vector Commitment**: `A = alpha*G + <a_L, g> + <a_R, h>` and a blinding
//!    commitment `S` to random vectors `s_L, s_R`
//! 3. **Polynomial Check**: challenges `y, z` turn the bit constraints into
//!    `t(X) = <l(X), r(X)>`; `T1, T2` commit to its coefficients and `x`
//!    evaluates it
//! 4. **Inner Product Argument**: proves `t = <l, r>` in `log2(64) = 6` rounds
//!    over the bases `g` and `h'_i = y^{-i} * h_i`
//!
//! ## Rewind
//!
//! `alpha, rho, tau1, tau2` are drawn from a stream seeded by the rewind
//! nonce, and the value and message are added into `alpha`. Since
//! `mu = alpha + rho*x` and `taux = tau2*x^2 + tau1*x + z^2*gamma` are
//! published, the rewind nonce alone recovers all three secrets. The private
//! nonce only seeds `s_L, s_R`.
//!
//! ## Minimum value
//!
//! A non-zero minimum is a local extension: the proof covers `V - min*H` and
//! binds `min` into the transcript, so it only verifies under the same `min`.

pub mod config;
pub mod proof;
pub mod prover;
pub mod rewind;
pub mod verifier;


pub use config::*;
pub use proof::*;
pub use prover::*;
pub use rewind::*;
pub use verifier::*;

use zkp_core::{GeneratorSet, ZkpResult};

/// Bit width of every proof
pub const RANGE_BITS: usize = 64;

/// Deterministically derive `count` bulletproof generators
pub fn generate_generators(count: usize) -> ZkpResult<GeneratorSet> {
    GeneratorSet::new(count)
}
