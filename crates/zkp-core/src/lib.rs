//! # secp256k1 ZKP Core
//!
//! Foundational types shared by every proof and signature crate in the
//! workspace:
//!
//! - Scalar and point codecs with the byte layouts used by secp256k1-zkp
//! - The fixed generators `G`, `H` and `J` and the bulletproof vector generators
//! - Transcript management for Fiat-Shamir transforms
//! - Error types, recovered proof data and scalar vector utilities
//!
//! ## Mathematical Background
//!
//! All protocols operate over the secp256k1 group of prime order `n` with:
//! - `G`: the standard base point, used for blinding factors
//! - `H`: a nothing-up-my-sleeve point, used for committed values
//! - `J`: an auxiliary point, used to derive switch-commitment blinds
//! - `{g_i}`, `{h_i}`: vector generators for the inner product argument
//!
//! A Pedersen commitment to `v` with blinding factor `r` is
//! ```text
//! C = r*G + v*H
//! ```
//! and the discrete logarithm of `H` with respect to `G` is unknown.

pub mod constants;
pub mod errors;
pub mod generators;
pub mod group;
pub mod info;
pub mod scalar;
pub mod transcript;
pub mod utils;

pub use constants::*;
pub use errors::*;
pub use generators::*;
pub use group::*;
pub use info::ProofInfo;
pub use scalar::*;
pub use transcript::*;

/// Re-export the curve types every dependent crate works with
pub use k256::{AffinePoint, ProjectivePoint, Scalar};

/// Re-export merlin transcript
pub use merlin::Transcript;
