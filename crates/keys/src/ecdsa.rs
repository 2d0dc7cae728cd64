//! ECDSA over 32-byte message digests with 64-byte compact signatures

use crate::{PrivateKey, PublicKey};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use zkp_core::{ZkpError, ZkpResult, SIGNATURE_SIZE};

/// Sign `msg32` deterministically (RFC 6979). The signature is low-S.
pub fn sign(msg32: &[u8; 32], key: &PrivateKey) -> ZkpResult<[u8; SIGNATURE_SIZE]> {
    let signing_key = SigningKey::from_slice(key.as_bytes())
        .map_err(|e| ZkpError::SignatureError(e.to_string()))?;
    let signature: Signature = signing_key
        .sign_prehash(msg32)
        .map_err(|e| ZkpError::SignatureError(e.to_string()))?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let mut out = [0u8; SIGNATURE_SIZE];
    out.copy_from_slice(&signature.to_bytes());
    Ok(out)
}

/// Verify a compact `r || s` signature.
///
/// High-S signatures are rejected; a wrongly sized or undecodable signature
/// is an error.
pub fn verify(signature: &[u8], msg32: &[u8; 32], public_key: &PublicKey) -> ZkpResult<bool> {
    if signature.len() != SIGNATURE_SIZE {
        return Err(ZkpError::InvalidLength {
            expected: SIGNATURE_SIZE,
            actual: signature.len(),
        });
    }
    let signature =
        Signature::from_slice(signature).map_err(|e| ZkpError::SignatureError(e.to_string()))?;
    if signature.normalize_s().is_some() {
        tracing::debug!("ECDSA signature has high S");
        return Ok(false);
    }

    let verifying_key = VerifyingKey::from_sec1_bytes(&public_key.to_compressed()?)
        .map_err(|e| ZkpError::InvalidPoint(e.to_string()))?;
    Ok(verifying_key.verify_prehash(msg32, &signature).is_ok())
}
