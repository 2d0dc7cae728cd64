//! # secp256k1-zkp
//!
//! Confidential-transaction cryptography over secp256k1:
//!
//! - Pedersen commitments with homomorphic sums ([`pedersen`])
//! - Borromean range proofs with rewind ([`rangeproof`])
//! - Rewindable 64-bit Bulletproofs ([`bulletproofs`])
//! - MLSAG linkable ring signatures ([`mlsag`])
//! - Key pairs, ECDSA, BIP-340 Schnorr and ECDH ([`keys`])
//!
//! [`Secp256k1Zkp`] bundles the shared generators and configuration and
//! exposes every operation as a method.
//!
//! ## Example
//!
//! ```rust,ignore
//! use secp256k1_zkp::{ProveOptions, Secp256k1Zkp};
//!
//! let ctx = Secp256k1Zkp::new()?;
//! let commit = ctx.commit(1_000, &blind)?;
//! let proof = ctx.bulletproof_prove(1_000, &blind, &nonce, &rewind_nonce, ProveOptions::default())?;
//! assert!(ctx.bulletproof_verify(&commit, &proof, None, 0)?);
//! ```

pub mod context;

pub use context::{Secp256k1Zkp, ZkpConfig};

pub use bulletproofs::{self, BulletProof, BulletproofConfig, ProveOptions};
pub use ipa;
pub use mlsag::{self, Dimensions, MlsagMatrix, MlsagSignature, Prepared};
pub use pedersen::{self, Commitment};
pub use rangeproof::{self, RangeProof, RangeProofConfig};
pub use zkp_core::{self, ProofInfo, ZkpError, ZkpResult};
pub use zkp_keys as keys;
pub use zkp_keys::{KeyPair, PrivateKey, PublicKey};
