//! # secp256k1 Keys and Signatures
//!
//! Key management and the plain signature schemes that sit next to the
//! confidential-transaction proofs:
//!
//! - [`KeyPair`], [`PrivateKey`], [`PublicKey`]: generation, seeding and
//!   SEC1 encodings
//! - [`ecdsa`]: deterministic low-S ECDSA over message digests
//! - [`schnorr`]: BIP-340 signing, verification and batch verification
//! - [`ecdh()`]: hashed Diffie-Hellman shared secrets

pub mod ecdh;
pub mod ecdsa;
pub mod keypair;
pub mod schnorr;

#[cfg(test)]
pub mod property_tests;

pub use ecdh::ecdh;
pub use keypair::{KeyPair, PrivateKey, PublicKey};
