//! Borromean ring signatures over the digit rings of a range proof
//!
//! Every ring `i` closes its challenge chain into a single shared `e0`:
//!
//! ```text
//! e_{i,0}   = H(e0 || m || i || 0)
//! R_{i,j}   = s_{i,j}*G - e_{i,j}*P_{i,j}
//! e_{i,j+1} = H(R_{i,j} || m || i || j+1)
//! e0        = SHA256(R_{0,last} || ... || R_{n-1,last} || m)
//! ```
//!
//! Knowing the discrete log of one key per ring is enough to close every
//! chain.

use crate::proof::RangeParams;
use k256::Scalar;
use merlin::Transcript;
use sha2::{Digest, Sha256};
use zkp_core::{
    generator_h, scalar_from_bytes, GroupElement, TranscriptProtocol, ZkpResult, COMMITMENT_SIZE,
};

/// Challenge for position `index` of ring `ring`; `None` when the digest is
/// not a usable scalar
pub(crate) fn ring_hash(data: &[u8], m: &[u8; 32], ring: usize, index: usize) -> Option<Scalar> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.update(m);
    hasher.update((ring as u32).to_be_bytes());
    hasher.update((index as u32).to_be_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    let e = scalar_from_bytes(&digest).ok()?;
    (!bool::from(e.is_zero())).then_some(e)
}

fn close(ends: &[[u8; 33]], m: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for end in ends {
        hasher.update(end);
    }
    hasher.update(m);
    hasher.finalize().into()
}

/// Message every ring signs: the commitment, the header and the ring
/// commitments
pub(crate) fn message_hash(
    commit: &[u8; COMMITMENT_SIZE],
    header: &[u8],
    ring_commits: &[GroupElement],
) -> ZkpResult<[u8; 32]> {
    let mut transcript = Transcript::new(b"secp256k1-zkp");
    transcript.append_message(b"domain", b"rangeproof");
    transcript.append_message(b"C", commit);
    transcript.append_bytes(b"header", header);
    transcript.append_u64(b"rings", ring_commits.len() as u64 + 1);
    for point in ring_commits {
        transcript.append_point(b"Ci", point)?;
    }
    let mut m = [0u8; 32];
    transcript.challenge_bytes(b"m", &mut m);
    Ok(m)
}

/// Public keys of every ring: `P_{i,j} = C_i - j*4^i*10^exp*H`, with the
/// last ring commitment making the sum equal `commit - min*H`
pub(crate) fn ring_public_keys(
    params: &RangeParams,
    commit: &GroupElement,
    ring_commits: &[GroupElement],
) -> ZkpResult<Vec<Vec<GroupElement>>> {
    let h = generator_h()?;
    let mut last = *commit - h * Scalar::from(params.min);
    for c in ring_commits {
        last = last - *c;
    }

    Ok(ring_commits
        .iter()
        .chain(std::iter::once(&last))
        .enumerate()
        .map(|(i, c)| {
            let step = h * params.digit_multiplier(i);
            let mut key = *c;
            let mut keys = Vec::with_capacity(params.ring_size(i));
            for _ in 0..params.ring_size(i) {
                keys.push(key);
                key = key - step;
            }
            keys
        })
        .collect())
}

fn encode(point: &GroupElement) -> Option<[u8; 33]> {
    point.to_compressed().ok()
}

/// Sign all rings in place.
///
/// On entry `s[i][signers[i]]` holds the nonce `k_i` and every other slot
/// its final response; on success the signer slots hold `k_i + x_i*e`.
/// Returns `None` if a challenge or intermediate point is unusable, in which
/// case the caller retries with fresh randomness.
pub(crate) fn sign(
    keys: &[Vec<GroupElement>],
    m: &[u8; 32],
    secrets: &[Scalar],
    signers: &[usize],
    s: &mut [Vec<Scalar>],
) -> Option<[u8; 32]> {
    let g = GroupElement::generator();

    let mut ends = Vec::with_capacity(keys.len());
    for (i, ring) in keys.iter().enumerate() {
        let mut r = g * s[i][signers[i]];
        for j in signers[i] + 1..ring.len() {
            let e = ring_hash(&encode(&r)?, m, i, j)?;
            r = g * s[i][j] - ring[j] * e;
        }
        ends.push(encode(&r)?);
    }
    let e0 = close(&ends, m);

    for (i, ring) in keys.iter().enumerate() {
        let mut e = ring_hash(&e0, m, i, 0)?;
        for j in 0..signers[i] {
            let r = g * s[i][j] - ring[j] * e;
            e = ring_hash(&encode(&r)?, m, i, j + 1)?;
        }
        let k = s[i][signers[i]];
        s[i][signers[i]] = k + secrets[i] * e;
    }
    Some(e0)
}

/// Verify all rings, returning the challenge of every position when the
/// chains close into `e0`
pub(crate) fn verify(
    keys: &[Vec<GroupElement>],
    m: &[u8; 32],
    e0: &[u8; 32],
    s: &[Vec<Scalar>],
) -> Option<Vec<Vec<Scalar>>> {
    let g = GroupElement::generator();

    let mut challenges = Vec::with_capacity(keys.len());
    let mut ends = Vec::with_capacity(keys.len());
    for (i, ring) in keys.iter().enumerate() {
        if s[i].len() != ring.len() {
            return None;
        }
        let mut ring_challenges = Vec::with_capacity(ring.len());
        let mut e = ring_hash(e0, m, i, 0)?;
        for j in 0..ring.len() {
            ring_challenges.push(e);
            let r = g * s[i][j] - ring[j] * e;
            let encoded = encode(&r)?;
            if j + 1 < ring.len() {
                e = ring_hash(&encoded, m, i, j + 1)?;
            } else {
                ends.push(encoded);
            }
        }
        challenges.push(ring_challenges);
    }

    (close(&ends, m) == *e0).then_some(challenges)
}
