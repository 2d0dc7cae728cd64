//! Nonce-derived proof secrets and value/message recovery

use crate::proof::{replay_transcript, ProofParts};
use crate::BulletProof;
use k256::Scalar;
use pedersen::Commitment;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use zkp_core::{
    random_scalar, scalar_to_bytes, GeneratorSet, ProofInfo, ZkpResult, BULLET_PROOF_MSG_SIZE,
};

/// Offset of the message inside the 32-byte embedding
const MESSAGE_OFFSET: usize = 8;
/// Offset of the big-endian value inside the 32-byte embedding
const VALUE_OFFSET: usize = MESSAGE_OFFSET + BULLET_PROOF_MSG_SIZE;

/// The proof scalars reproducible from the rewind nonce
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct RewindSecrets {
    pub alpha: Scalar,
    pub rho: Scalar,
    pub tau1: Scalar,
    pub tau2: Scalar,
}

impl RewindSecrets {
    pub fn derive(
        rewind_nonce: &[u8; 32],
        commit: &Commitment,
        min_value: u64,
        extra_commit: &[u8],
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"secp256k1-zkp/bulletproof/rewind");
        hasher.update(rewind_nonce);
        hasher.update(commit.as_bytes());
        hasher.update(min_value.to_be_bytes());
        hasher.update((extra_commit.len() as u64).to_be_bytes());
        hasher.update(extra_commit);
        let mut seed: [u8; 32] = hasher.finalize().into();
        let mut rng = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Self {
            alpha: random_scalar(&mut rng),
            rho: random_scalar(&mut rng),
            tau1: random_scalar(&mut rng),
            tau2: random_scalar(&mut rng),
        }
    }
}

/// Pack the shifted value and a message into a scalar with eight leading
/// zero bytes
pub(crate) fn embed(value: u64, message: &[u8]) -> Zeroizing<Scalar> {
    let mut bytes = Zeroizing::new([0u8; 32]);
    bytes[MESSAGE_OFFSET..MESSAGE_OFFSET + message.len()].copy_from_slice(message);
    bytes[VALUE_OFFSET..].copy_from_slice(&value.to_be_bytes());
    // Eight zero leading bytes keep this below the curve order
    Zeroizing::new(zkp_core::reduce_scalar(&bytes))
}

fn extract(embedded: &Scalar) -> Option<(u64, Vec<u8>)> {
    let bytes = Zeroizing::new(scalar_to_bytes(embedded));
    if bytes[..MESSAGE_OFFSET].iter().any(|b| *b != 0) {
        return None;
    }
    let mut value = [0u8; 8];
    value.copy_from_slice(&bytes[VALUE_OFFSET..]);
    Some((
        u64::from_be_bytes(value),
        bytes[MESSAGE_OFFSET..VALUE_OFFSET].to_vec(),
    ))
}

/// Recovers value, blinding factor and message from bulletproofs
#[derive(Debug, Clone)]
pub struct BulletproofRewinder {
    generators: Arc<GeneratorSet>,
}

impl BulletproofRewinder {
    /// Create a rewinder over the given generators
    pub fn new(generators: Arc<GeneratorSet>) -> Self {
        Self { generators }
    }

    /// Rewind `proof` with the nonce that seeded its rewindable secrets.
    ///
    /// Never fails on untrusted input: a mismatched nonce or malformed proof
    /// yields an unsuccessful `ProofInfo` with zeroed data. The message is
    /// always returned as 16 bytes, zero padded.
    pub fn rewind(
        &self,
        commit: &Commitment,
        rewind_nonce: &[u8; 32],
        extra_data: Option<&[u8]>,
        proof: &BulletProof,
        min_value: u64,
    ) -> ZkpResult<ProofInfo> {
        let extra = extra_data.unwrap_or(&[]);
        let decoded = ProofParts::from_proof(proof).and_then(|parts| {
            let (_, ch) = replay_transcript(commit.as_bytes(), min_value, extra, &parts)?;
            Ok((parts, ch))
        });
        let (parts, ch) = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::debug!(%err, "bulletproof rewind on malformed proof");
                return Ok(ProofInfo::failed());
            }
        };
        let secrets = RewindSecrets::derive(rewind_nonce, commit, min_value, extra);

        let embedded = Zeroizing::new(parts.mu - secrets.rho * ch.x - secrets.alpha);
        let Some((shifted, message)) = extract(&embedded) else {
            tracing::debug!("bulletproof rewind nonce mismatch");
            return Ok(ProofInfo::failed());
        };
        let Some(value) = shifted.checked_add(min_value) else {
            return Ok(ProofInfo::failed());
        };

        let z_sq = ch.z * ch.z;
        let Some(z_sq_inv) = Option::<Scalar>::from(z_sq.invert()) else {
            return Ok(ProofInfo::failed());
        };
        let gamma = Zeroizing::new(
            (parts.taux - secrets.tau1 * ch.x - secrets.tau2 * ch.x * ch.x) * z_sq_inv,
        );

        let reopened = self.generators.g * *gamma + self.generators.h * Scalar::from(value);
        if reopened != commit.to_point()? {
            tracing::debug!("rewound data does not open the commitment");
            return Ok(ProofInfo::failed());
        }

        Ok(ProofInfo::rewound(
            value,
            scalar_to_bytes(&gamma),
            message,
            (min_value, u64::MAX),
            0,
            crate::RANGE_BITS as u8,
        ))
    }
}
