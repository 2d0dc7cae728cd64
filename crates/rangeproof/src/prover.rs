//! Range proof generation

use crate::borromean::{self, message_hash, ring_public_keys};
use crate::proof::{encode_proof, RangeParams};
use crate::{RangeProof, RangeProofConfig};
use k256::Scalar;
use pedersen::Commitment;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};
use zkp_core::{
    blind_from_bytes, generator_g, generator_h, random_scalar, reduce_scalar, ZkpError,
    ZkpResult, PROOF_MSG_SIZE,
};

/// Randomness for signing attempt `attempt`, reproducible by the nonce holder
pub(crate) fn signing_rng(
    nonce: &[u8; 32],
    commit: &Commitment,
    header: &[u8],
    attempt: u32,
) -> ChaCha20Rng {
    let mut hasher = Sha256::new();
    hasher.update(b"secp256k1-zkp/rangeproof");
    hasher.update(nonce);
    hasher.update(commit.as_bytes());
    hasher.update(header);
    hasher.update(attempt.to_be_bytes());
    let mut seed: [u8; 32] = hasher.finalize().into();
    let rng = ChaCha20Rng::from_seed(seed);
    seed.zeroize();
    rng
}

/// Draw the per-position values of an attempt, after the ring blinds
pub(crate) fn draw_responses(rng: &mut ChaCha20Rng, params: &RangeParams) -> Vec<Vec<Scalar>> {
    let mut s = Vec::with_capacity(params.rings());
    for ring in 0..params.rings() {
        let mut responses = Vec::with_capacity(params.ring_size(ring));
        for _ in 0..params.ring_size(ring) {
            responses.push(random_scalar(rng));
        }
        s.push(responses);
    }
    s
}

/// Scalar carrying a message: twelve zero bytes then the 20 message bytes
pub(crate) fn message_scalar(message: &[u8]) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes[32 - PROOF_MSG_SIZE..32 - PROOF_MSG_SIZE + message.len()].copy_from_slice(message);
    reduce_scalar(&bytes)
}

/// Position in ring 0 that carries the message
pub(crate) fn message_slot(params: &RangeParams, signer: usize) -> Option<usize> {
    (0..params.ring_size(0)).find(|j| *j != signer)
}

/// Generates rewindable Borromean range proofs
#[derive(Debug, Clone, Default)]
pub struct RangeProver {
    config: RangeProofConfig,
}

impl RangeProver {
    /// Create a prover with the given configuration
    pub fn new(config: RangeProofConfig) -> ZkpResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the prover configuration
    pub fn config(&self) -> &RangeProofConfig {
        &self.config
    }

    /// Prove that `commit` hides a value of at least `min`, using `blind`
    /// as the rewind nonce.
    ///
    /// Messages longer than 20 bytes are truncated.
    pub fn prove(
        &self,
        min: u64,
        value: u64,
        blind: &[u8; 32],
        commit: &Commitment,
        message: &[u8],
    ) -> ZkpResult<RangeProof> {
        self.prove_with_nonce(min, value, blind, commit, message, blind)
    }

    /// Prove with an explicit rewind nonce
    pub fn prove_with_nonce(
        &self,
        min: u64,
        value: u64,
        blind: &[u8; 32],
        commit: &Commitment,
        message: &[u8],
        nonce: &[u8; 32],
    ) -> ZkpResult<RangeProof> {
        let gamma = Zeroizing::new(blind_from_bytes(blind)?);
        if pedersen::commit(value, blind)? != *commit {
            return Err(ZkpError::CommitmentMismatch);
        }

        let (params, digits) = RangeParams::for_value(&self.config, min, value)?;
        let message = &message[..message.len().min(PROOF_MSG_SIZE)];
        if params.mantissa == 0 && !message.is_empty() {
            return Err(ZkpError::MessageTooLong {
                max: 0,
                actual: message.len(),
            });
        }

        let header = params.encode();
        for attempt in 0..self.config.max_attempts {
            let signed =
                self.attempt(&params, &header, commit, &gamma, digits, message, nonce, attempt)?;
            if let Some(proof) = signed {
                tracing::trace!(
                    attempt,
                    mantissa = params.mantissa,
                    len = proof.len(),
                    "generated range proof"
                );
                return Ok(proof);
            }
            tracing::debug!(attempt, "range proof signing attempt failed, retrying");
        }
        Err(ZkpError::RetriesExhausted {
            attempts: self.config.max_attempts,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn attempt(
        &self,
        params: &RangeParams,
        header: &[u8],
        commit: &Commitment,
        gamma: &Scalar,
        digits: u64,
        message: &[u8],
        nonce: &[u8; 32],
        attempt: u32,
    ) -> ZkpResult<Option<RangeProof>> {
        let rings = params.rings();
        let mut rng = signing_rng(nonce, commit, header, attempt);

        let mut blinds = Zeroizing::new(Vec::with_capacity(rings));
        for _ in 1..rings {
            blinds.push(random_scalar(&mut rng));
        }
        // The last ring takes whatever the others leave of gamma
        blinds.push(*gamma);
        if let Some((last, others)) = blinds.split_last_mut() {
            for b in others.iter() {
                *last -= *b;
            }
        }

        let signers: Vec<usize> = (0..rings)
            .map(|i| ((digits >> (2 * i)) & 3) as usize)
            .collect();

        let g = generator_g();
        let h = generator_h()?;
        let mut ring_commits = Vec::with_capacity(rings - 1);
        for i in 0..rings - 1 {
            let digit = Scalar::from(signers[i] as u64) * params.digit_multiplier(i);
            let c = g * blinds[i] + h * digit;
            if c.is_identity() {
                return Ok(None);
            }
            ring_commits.push(c);
        }

        let keys = ring_public_keys(params, &commit.to_point()?, &ring_commits)?;
        let m = message_hash(commit.as_bytes(), header, &ring_commits)?;

        let mut s = draw_responses(&mut rng, params);
        if !message.is_empty() {
            if let Some(slot) = message_slot(params, signers[0]) {
                s[0][slot] += message_scalar(message);
            }
        }

        let Some(e0) = borromean::sign(&keys, &m, &blinds, &signers, &mut s) else {
            s.iter_mut().for_each(|ring| ring.zeroize());
            return Ok(None);
        };
        encode_proof(header, &e0, &ring_commits, &s).map(Some)
    }
}
