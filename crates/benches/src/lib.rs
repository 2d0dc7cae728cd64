//! Benchmarks for secp256k1-zkp
//!
//! This crate contains performance benchmarks for:
//! - Pedersen commitments and balance checks
//! - Bulletproof proving, verification and rewinding
//! - Borromean range proofs across exponents
//! - MLSAG signing and verification over growing rings
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p zkp-benches
//! ```
//!
//! Or run specific benchmarks:
//! ```bash
//! cargo bench -p zkp-benches --bench bulletproofs
//! cargo bench -p zkp-benches --bench mlsag
//! ```

pub use secp256k1_zkp::*;

/// A deterministic valid blinding factor, distinct per `tag`
pub fn blind_for(tag: u64) -> [u8; 32] {
    let mut blind = [0x11u8; 32];
    blind[24..].copy_from_slice(&tag.to_be_bytes());
    blind
}
