//! Commitment construction and homomorphic aggregation

use crate::Commitment;
use k256::Scalar;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;
use zkp_core::{
    blind_from_bytes, generator_g, generator_h, generator_j, reduce_scalar, scalar_from_bytes,
    scalar_sum, scalar_to_bytes, GroupElement, ZkpResult,
};

/// `blind*G + value*H` as a point
pub fn commit_point(value: &Scalar, blind: &Scalar) -> ZkpResult<GroupElement> {
    Ok(generator_g() * *blind + generator_h()? * *value)
}

/// Commit to `value` with blinding factor `blind`: `blind*G + value*H`.
///
/// The blind must be non-zero and below the curve order.
pub fn commit(value: u64, blind: &[u8; 32]) -> ZkpResult<Commitment> {
    let r = Zeroizing::new(blind_from_bytes(blind)?);
    Commitment::from_point(&commit_point(&Scalar::from(value), &r)?)
}

/// Commitment with the generator roles swapped: `value*G + blind*H`
pub fn blind_commit(value: u64, blind: &[u8; 32]) -> ZkpResult<Commitment> {
    let r = Zeroizing::new(blind_from_bytes(blind)?);
    let point = generator_g() * Scalar::from(value) + generator_h()? * *r;
    Commitment::from_point(&point)
}

/// `sum(positives) - sum(negatives) mod n`.
///
/// With no inputs the result is zero.
pub fn blind_sum(positives: &[[u8; 32]], negatives: &[[u8; 32]]) -> ZkpResult<[u8; 32]> {
    let parse = |blinds: &[[u8; 32]]| -> ZkpResult<Zeroizing<Vec<Scalar>>> {
        let mut out = Zeroizing::new(Vec::with_capacity(blinds.len()));
        for b in blinds {
            out.push(scalar_from_bytes(b)?);
        }
        Ok(out)
    };
    let pos = parse(positives)?;
    let neg = parse(negatives)?;
    let sum = Zeroizing::new(scalar_sum(&pos, &neg));
    Ok(scalar_to_bytes(&sum))
}

fn point_sum(positives: &[Commitment], negatives: &[Commitment]) -> ZkpResult<GroupElement> {
    let mut total = GroupElement::identity();
    for c in positives {
        total = total + c.to_point()?;
    }
    for c in negatives {
        total = total - c.to_point()?;
    }
    Ok(total)
}

/// `sum(positives) - sum(negatives)` as a commitment.
///
/// Fails with `IdentityPoint` when the result has no encoding.
pub fn commit_sum(positives: &[Commitment], negatives: &[Commitment]) -> ZkpResult<Commitment> {
    Commitment::from_point(&point_sum(positives, negatives)?)
}

/// Whether `sum(positives) - sum(negatives)` is the point at infinity.
///
/// Empty inputs balance trivially.
pub fn verify_commit_sum(positives: &[Commitment], negatives: &[Commitment]) -> ZkpResult<bool> {
    let balanced = point_sum(positives, negatives)?.is_identity();
    if !balanced {
        tracing::debug!(
            positives = positives.len(),
            negatives = negatives.len(),
            "commitment sum does not balance"
        );
    }
    Ok(balanced)
}

/// Switch-commitment blinding factor:
///
/// ```text
/// blind + SHA256(ser(blind*G + value*H) || ser(blind*J)) mod n
/// ```
///
/// where `ser` is the compressed SEC1 encoding.
pub fn blind_switch(value: u64, blind: &[u8; 32]) -> ZkpResult<[u8; 32]> {
    let r = Zeroizing::new(blind_from_bytes(blind)?);
    let commit = commit_point(&Scalar::from(value), &r)?;
    let switch = generator_j()? * *r;

    let mut hasher = Sha256::new();
    hasher.update(commit.to_compressed()?);
    hasher.update(switch.to_compressed()?);
    let digest: [u8; 32] = hasher.finalize().into();

    let switched = Zeroizing::new(*r + reduce_scalar(&digest));
    Ok(scalar_to_bytes(&switched))
}
