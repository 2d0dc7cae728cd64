//! # Borromean Range Proofs
//!
//! Classic secp256k1 range proofs: a Pedersen commitment `C = r*G + v*H` is
//! split into one commitment per base-4 digit of `(v - min) / 10^exp`, and a
//! Borromean ring signature shows each digit commitment opens to one of
//! `0, 1, 2, 3` times its place value.
//!
//! ## Rewind
//!
//! Signing randomness is derived from a nonce (the blinding factor unless
//! one is given explicitly). Whoever holds the nonce replays it to recover
//! the value, the blinding factor and a 20-byte message embedded in one of
//! the responses.
//!
//! ## Components
//!
//! - [`RangeProver`]: proof generation with bounded retries
//! - [`RangeVerifier`]: verification and header inspection
//! - [`RangeRewinder`]: recovery of the committed data
//! - [`RangeProofConfig`]: exponent, minimum bit count and retry cap

pub mod config;
pub mod proof;
pub mod prover;
pub mod rewind;
pub mod verifier;

mod borromean;


pub use config::*;
pub use proof::RangeProof;
pub use prover::RangeProver;
pub use rewind::RangeRewinder;
pub use verifier::RangeVerifier;
