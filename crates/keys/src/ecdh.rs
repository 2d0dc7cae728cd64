//! Elliptic-curve Diffie-Hellman

use crate::{PrivateKey, PublicKey};
use sha2::{Digest, Sha256};
use zkp_core::ZkpResult;

/// Shared secret `SHA256(compressed(sk * pk))`
pub fn ecdh(public_key: &PublicKey, key: &PrivateKey) -> ZkpResult<[u8; 32]> {
    let shared = *public_key.point() * *key.scalar()?;
    Ok(Sha256::digest(shared.to_compressed()?).into())
}
