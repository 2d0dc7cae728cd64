//! BIP-340 Schnorr signatures with x-only public keys

use crate::{PrivateKey, PublicKey};
use k256::schnorr::{Signature, SigningKey, VerifyingKey};
use zkp_core::{ZkpError, ZkpResult, SIGNATURE_SIZE};

/// Sign `msg32` with the auxiliary randomness `aux_rand`
pub fn sign(
    msg32: &[u8; 32],
    key: &PrivateKey,
    aux_rand: &[u8; 32],
) -> ZkpResult<[u8; SIGNATURE_SIZE]> {
    let signing_key = SigningKey::from_bytes(key.as_bytes())
        .map_err(|e| ZkpError::SignatureError(e.to_string()))?;
    let signature = signing_key
        .sign_raw(msg32, aux_rand)
        .map_err(|e| ZkpError::SignatureError(e.to_string()))?;
    Ok(signature.to_bytes())
}

fn verifying_key(public_key: &PublicKey) -> ZkpResult<VerifyingKey> {
    VerifyingKey::from_bytes(&public_key.x_only()?)
        .map_err(|e| ZkpError::InvalidPoint(e.to_string()))
}

/// Verify against the x coordinate of `public_key`; the parity of its `y` is
/// ignored
pub fn verify(
    signature: &[u8; SIGNATURE_SIZE],
    msg32: &[u8; 32],
    public_key: &PublicKey,
) -> ZkpResult<bool> {
    let Ok(signature) = Signature::try_from(&signature[..]) else {
        tracing::debug!("undecodable Schnorr signature");
        return Ok(false);
    };
    Ok(verifying_key(public_key)?
        .verify_raw(msg32, &signature)
        .is_ok())
}

/// Verify every `(signature, message, key)` triple; true only if all verify.
///
/// The slices must have equal lengths. An empty batch verifies.
pub fn verify_batch(
    signatures: &[[u8; SIGNATURE_SIZE]],
    messages: &[[u8; 32]],
    public_keys: &[PublicKey],
) -> ZkpResult<bool> {
    let n = signatures.len();
    if messages.len() != n {
        return Err(ZkpError::VectorLengthMismatch {
            expected: n,
            actual: messages.len(),
        });
    }
    if public_keys.len() != n {
        return Err(ZkpError::VectorLengthMismatch {
            expected: n,
            actual: public_keys.len(),
        });
    }

    for (i, ((sig, msg), pk)) in signatures.iter().zip(messages).zip(public_keys).enumerate() {
        if !verify(sig, msg, pk)? {
            tracing::debug!(index = i, "Schnorr batch member rejected");
            return Ok(false);
        }
    }
    Ok(true)
}
