//! Scalar encoding and derivation
//!
//! Scalars travel as 32-byte big-endian integers. Parsing never reduces
//! silently: an encoding at or above the curve order is rejected.

use crate::{ZkpError, ZkpResult, SECRET_KEY_SIZE};
use k256::elliptic_curve::{ops::Reduce, PrimeField};
use k256::{FieldBytes, Scalar, U256};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Parse a canonical scalar, rejecting values `>= n`
pub fn scalar_from_bytes(bytes: &[u8; 32]) -> ZkpResult<Scalar> {
    Option::from(Scalar::from_repr(FieldBytes::from(*bytes)))
        .ok_or_else(|| ZkpError::InvalidScalar("value is not below the curve order".to_string()))
}

/// Parse a scalar from an arbitrary slice, checking its length first
pub fn scalar_from_slice(bytes: &[u8]) -> ZkpResult<Scalar> {
    let array: &[u8; 32] = bytes.try_into().map_err(|_| ZkpError::InvalidLength {
        expected: SECRET_KEY_SIZE,
        actual: bytes.len(),
    })?;
    scalar_from_bytes(array)
}

/// Parse a blinding factor: non-zero and below the curve order
pub fn blind_from_bytes(bytes: &[u8; 32]) -> ZkpResult<Scalar> {
    match scalar_from_bytes(bytes) {
        Ok(s) if !bool::from(s.is_zero()) => Ok(s),
        _ => Err(ZkpError::InvalidBlind),
    }
}

/// Parse a secret key: non-zero and below the curve order
pub fn secret_key_from_bytes(bytes: &[u8; 32]) -> ZkpResult<Scalar> {
    match scalar_from_bytes(bytes) {
        Ok(s) if !bool::from(s.is_zero()) => Ok(s),
        _ => Err(ZkpError::InvalidSecretKey),
    }
}

/// Whether `bytes` is a usable secret key
pub fn is_valid_secret_key(bytes: &[u8; 32]) -> bool {
    secret_key_from_bytes(bytes).is_ok()
}

/// Big-endian encoding of a scalar
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; 32] {
    scalar.to_bytes().into()
}

/// Reduce 32 arbitrary bytes modulo the curve order
pub fn reduce_scalar(bytes: &[u8; 32]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes))
}

/// SHA-256 of the concatenated parts, reduced modulo the curve order
pub fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest: [u8; 32] = hasher.finalize().into();
    reduce_scalar(&digest)
}

/// Draw a uniformly random non-zero scalar by rejection sampling
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut bytes = Zeroizing::new([0u8; 32]);
    loop {
        rng.fill_bytes(&mut bytes[..]);
        if let Ok(s) = secret_key_from_bytes(&bytes) {
            return s;
        }
    }
}

/// Sum of `positives` minus sum of `negatives`
pub fn scalar_sum(positives: &[Scalar], negatives: &[Scalar]) -> Scalar {
    let pos = positives.iter().fold(Scalar::ZERO, |acc, s| acc + s);
    negatives.iter().fold(pos, |acc, s| acc - s)
}
