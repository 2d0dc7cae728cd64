//! Bulletproof wire format and shared transcript steps
//!
//! Layout of a serialized proof:
//!
//! ```text
//! taux (32) | mu (32) | t (32) | parity (2) |
//! x(A) | x(S) | x(T1) | x(T2) | x(L_0..L_5) | x(R_0..R_5)   (16 x 32) |
//! a (32) | b (32)
//! ```
//!
//! Points are stored as bare `x` coordinates; bit `i` of the little-endian
//! parity field is set when point `i` has an odd `y`.

use crate::RANGE_BITS;
use ipa::InnerProductProof;
use k256::{ProjectivePoint, Scalar};
use merlin::Transcript;
use rayon::prelude::*;
use zkp_core::{
    scalar_from_bytes, scalar_to_bytes, utils::scalar_powers, zkp_transcript, GroupElement,
    TranscriptProtocol, ZkpError, ZkpResult, COMMITMENT_SIZE, SINGLE_BULLET_PROOF_SIZE,
};

const IPA_ROUNDS: usize = RANGE_BITS.trailing_zeros() as usize;
const NUM_POINTS: usize = 4 + 2 * IPA_ROUNDS;
const PARITY_BYTES: usize = (NUM_POINTS + 7) / 8;

/// Exact length of a serialized 64-bit proof
pub const BULLET_PROOF_LEN: usize = 3 * 32 + PARITY_BYTES + NUM_POINTS * 32 + 2 * 32;

/// A serialized single-value range proof
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulletProof(Vec<u8>);

impl BulletProof {
    /// Wrap proof bytes after checking their length
    pub fn from_bytes(bytes: &[u8]) -> ZkpResult<Self> {
        if bytes.len() != BULLET_PROOF_LEN {
            return Err(ZkpError::InvalidLength {
                expected: BULLET_PROOF_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Raw proof bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Owned proof bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Proof length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed proof
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for BulletProof {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Decoded proof elements
#[derive(Debug, Clone)]
pub(crate) struct ProofParts {
    pub taux: Scalar,
    pub mu: Scalar,
    pub t: Scalar,
    pub a: GroupElement,
    pub s: GroupElement,
    pub t1: GroupElement,
    pub t2: GroupElement,
    pub ipa: InnerProductProof,
}

impl ProofParts {
    pub fn to_proof(&self) -> ZkpResult<BulletProof> {
        let mut out = Vec::with_capacity(BULLET_PROOF_LEN);
        out.extend_from_slice(&scalar_to_bytes(&self.taux));
        out.extend_from_slice(&scalar_to_bytes(&self.mu));
        out.extend_from_slice(&scalar_to_bytes(&self.t));

        let points: Vec<&GroupElement> = [&self.a, &self.s, &self.t1, &self.t2]
            .into_iter()
            .chain(self.ipa.l_vec.iter())
            .chain(self.ipa.r_vec.iter())
            .collect();
        if points.len() != NUM_POINTS {
            return Err(ZkpError::InvalidProof(format!(
                "expected {} points, got {}",
                NUM_POINTS,
                points.len()
            )));
        }

        let mut parity = [0u8; PARITY_BYTES];
        let mut xs = Vec::with_capacity(NUM_POINTS * 32);
        for (i, point) in points.iter().enumerate() {
            let (x, odd) = point.to_x()?;
            if odd {
                parity[i / 8] |= 1 << (i % 8);
            }
            xs.extend_from_slice(&x);
        }
        out.extend_from_slice(&parity);
        out.extend_from_slice(&xs);
        out.extend_from_slice(&scalar_to_bytes(&self.ipa.a));
        out.extend_from_slice(&scalar_to_bytes(&self.ipa.b));

        debug_assert!(out.len() <= SINGLE_BULLET_PROOF_SIZE);
        Ok(BulletProof(out))
    }

    pub fn from_proof(proof: &BulletProof) -> ZkpResult<Self> {
        let bytes = proof.as_bytes();
        if bytes.len() != BULLET_PROOF_LEN {
            return Err(ZkpError::InvalidLength {
                expected: BULLET_PROOF_LEN,
                actual: bytes.len(),
            });
        }

        let mut offset = 0;
        let mut next_scalar = || -> ZkpResult<Scalar> {
            let chunk: &[u8; 32] = bytes[offset..offset + 32]
                .try_into()
                .map_err(|_| ZkpError::InvalidProof("truncated scalar".to_string()))?;
            offset += 32;
            scalar_from_bytes(chunk).map_err(|_| ZkpError::InvalidProof("scalar overflow".to_string()))
        };
        let taux = next_scalar()?;
        let mu = next_scalar()?;
        let t = next_scalar()?;

        let parity_start = 96;
        let points_start = parity_start + PARITY_BYTES;
        let parity = &bytes[parity_start..points_start];
        let mut points = Vec::with_capacity(NUM_POINTS);
        for i in 0..NUM_POINTS {
            let start = points_start + i * 32;
            let x: &[u8; 32] = bytes[start..start + 32]
                .try_into()
                .map_err(|_| ZkpError::InvalidProof("truncated point".to_string()))?;
            let odd = parity[i / 8] & (1 << (i % 8)) != 0;
            let point = GroupElement::from_x(x, odd)
                .map_err(|_| ZkpError::InvalidProof(format!("point {i} is not on the curve")))?;
            points.push(point);
        }

        let scalars_start = points_start + NUM_POINTS * 32;
        let read = |at: usize| -> ZkpResult<Scalar> {
            let chunk: &[u8; 32] = bytes[at..at + 32]
                .try_into()
                .map_err(|_| ZkpError::InvalidProof("truncated scalar".to_string()))?;
            scalar_from_bytes(chunk).map_err(|_| ZkpError::InvalidProof("scalar overflow".to_string()))
        };
        let ipa_a = read(scalars_start)?;
        let ipa_b = read(scalars_start + 32)?;

        let l_vec = points[4..4 + IPA_ROUNDS].to_vec();
        let r_vec = points[4 + IPA_ROUNDS..].to_vec();
        Ok(Self {
            taux,
            mu,
            t,
            a: points[0],
            s: points[1],
            t1: points[2],
            t2: points[3],
            ipa: InnerProductProof::new(l_vec, r_vec, ipa_a, ipa_b),
        })
    }
}

/// Fiat-Shamir challenges of one proof
#[derive(Debug, Clone, Copy)]
pub(crate) struct Challenges {
    pub y: Scalar,
    pub z: Scalar,
    pub x: Scalar,
    pub w: Scalar,
}

/// Transcript bound to the commitment, minimum value and extra data
pub(crate) fn begin_transcript(
    commit: &[u8; COMMITMENT_SIZE],
    min_value: u64,
    extra_commit: &[u8],
) -> Transcript {
    let mut transcript = zkp_transcript(b"bulletproof");
    transcript.append_u64(b"n", RANGE_BITS as u64);
    transcript.append_message(b"V", commit);
    transcript.append_u64(b"min", min_value);
    transcript.append_bytes(b"extra", extra_commit);
    transcript
}

/// Re-derive all challenges from a decoded proof, leaving the transcript
/// ready for the inner product argument
pub(crate) fn replay_transcript(
    commit: &[u8; COMMITMENT_SIZE],
    min_value: u64,
    extra_commit: &[u8],
    parts: &ProofParts,
) -> ZkpResult<(Transcript, Challenges)> {
    let mut transcript = begin_transcript(commit, min_value, extra_commit);
    transcript.append_point(b"A", &parts.a)?;
    transcript.append_point(b"S", &parts.s)?;
    let y = transcript.challenge_scalar(b"y");
    let z = transcript.challenge_scalar(b"z");
    transcript.append_point(b"T1", &parts.t1)?;
    transcript.append_point(b"T2", &parts.t2)?;
    let x = transcript.challenge_scalar(b"x");
    transcript.append_scalar(b"taux", &parts.taux);
    transcript.append_scalar(b"mu", &parts.mu);
    transcript.append_scalar(b"t", &parts.t);
    let w = transcript.challenge_scalar(b"w");
    Ok((transcript, Challenges { y, z, x, w }))
}

/// `h'_i = y^{-i} * h_i`
pub(crate) fn rescale_h(h_vec: &[ProjectivePoint], y: &Scalar) -> ZkpResult<Vec<ProjectivePoint>> {
    let y_inv = Option::<Scalar>::from(y.invert())
        .ok_or_else(|| ZkpError::InvalidProof("zero challenge".to_string()))?;
    let powers = scalar_powers(&y_inv, h_vec.len());
    Ok(h_vec
        .par_iter()
        .zip(powers.par_iter())
        .map(|(h, p)| *h * *p)
        .collect())
}
