//! Range proof verification

use crate::borromean::{self, message_hash, ring_public_keys};
use crate::proof::DecodedProof;
use crate::RangeProof;
use k256::Scalar;
use pedersen::Commitment;
use zkp_core::{ProofInfo, ZkpResult};

/// Verifies classic range proofs
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeVerifier;

impl RangeVerifier {
    /// Create a verifier
    pub fn new() -> Self {
        Self
    }

    /// Check that `commit` hides a value in the range the proof publishes
    pub fn verify(&self, commit: &Commitment, proof: &RangeProof) -> ZkpResult<bool> {
        Ok(self.verify_range(commit, proof)?.is_some())
    }

    /// Verify and return the proven `(min, max)`.
    ///
    /// `Ok(None)` means the proof is well formed but does not verify; bytes
    /// that do not decode are an error.
    pub fn verify_range(
        &self,
        commit: &Commitment,
        proof: &RangeProof,
    ) -> ZkpResult<Option<(u64, u64)>> {
        let decoded = DecodedProof::parse(proof)?;
        Ok(check(commit, &decoded)?.map(|_| (decoded.params.min, decoded.params.max)))
    }

    /// Public range metadata of a proof
    pub fn info(&self, proof: &RangeProof) -> ProofInfo {
        proof.info()
    }
}

/// Run the ring signature check, returning every position's challenge
pub(crate) fn check(
    commit: &Commitment,
    decoded: &DecodedProof,
) -> ZkpResult<Option<Vec<Vec<Scalar>>>> {
    let keys = ring_public_keys(&decoded.params, &commit.to_point()?, &decoded.ring_commits)?;
    let m = message_hash(commit.as_bytes(), &decoded.header, &decoded.ring_commits)?;
    let challenges = borromean::verify(&keys, &m, &decoded.e0, &decoded.s);
    if challenges.is_none() {
        tracing::debug!("range proof ring signature rejected");
    }
    Ok(challenges)
}
