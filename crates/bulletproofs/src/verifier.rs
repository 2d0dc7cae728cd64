//! Bulletproof verifier

use crate::proof::{replay_transcript, rescale_h, ProofParts};
use crate::{BulletProof, RANGE_BITS};
use ipa::InnerProductVerifier;
use k256::Scalar;
use pedersen::Commitment;
use std::sync::Arc;
use zkp_core::{utils::*, GeneratorSet, GroupElement, ZkpResult};

/// Verifier for 64-bit range proofs
#[derive(Debug, Clone)]
pub struct BulletproofVerifier {
    generators: Arc<GeneratorSet>,
}

impl BulletproofVerifier {
    /// Create a verifier (must use the prover's generators)
    pub fn new(generators: Arc<GeneratorSet>) -> ZkpResult<Self> {
        generators.ensure_capacity(RANGE_BITS)?;
        Ok(Self { generators })
    }

    /// Verify that `commit` opens to a value in `[min_value, min_value + 2^64)`.
    ///
    /// `extra_commit` and `min_value` must match the values the proof was
    /// created with. Returns `Ok(false)` for a well-formed proof that does not
    /// verify and an error for bytes that do not decode.
    pub fn verify(
        &self,
        commit: &Commitment,
        proof: &BulletProof,
        extra_commit: Option<&[u8]>,
        min_value: u64,
    ) -> ZkpResult<bool> {
        let n = RANGE_BITS;
        let extra = extra_commit.unwrap_or(&[]);
        let parts = ProofParts::from_proof(proof)?;
        let (mut transcript, ch) = replay_transcript(commit.as_bytes(), min_value, extra, &parts)?;

        let g = self.generators.g;
        let h = self.generators.h;
        let shifted_commit = commit.to_point()? - h * Scalar::from(min_value);

        let y_powers = scalar_powers(&ch.y, n);
        let two_powers = scalar_powers(&Scalar::from(2u64), n);
        let z_sq = ch.z * ch.z;
        let z_cube = z_sq * ch.z;

        // delta(y, z) = (z - z^2) * <1, y^n> - z^3 * <1, 2^n>
        let delta = (ch.z - z_sq) * sum_of_powers(&ch.y, n)
            - z_cube * sum_of_powers(&Scalar::from(2u64), n);

        // t*H + taux*G == z^2*V + delta*H + x*T1 + x^2*T2
        let lhs = h * parts.t + g * parts.taux;
        let rhs = shifted_commit * z_sq + h * delta + parts.t1 * ch.x + parts.t2 * (ch.x * ch.x);
        if lhs != rhs {
            tracing::debug!("bulletproof polynomial check failed");
            return Ok(false);
        }

        let g_vec = &self.generators.g_vec()[..n];
        let h_prime = rescale_h(&self.generators.h_vec()[..n], &ch.y)?;
        let q = h * ch.w;

        // P = A + x*S - z*<1, g> + <z*y^n + z^2*2^n, h'> - mu*G + t*Q
        let neg_z = -ch.z;
        let h_scalars = y_powers
            .iter()
            .zip(two_powers.iter())
            .map(|(yi, ti)| ch.z * *yi + z_sq * *ti);
        let vector_part = GroupElement::multiscalar_mul(
            std::iter::repeat(neg_z).take(n).chain(h_scalars),
            g_vec.iter().cloned().chain(h_prime.iter().cloned()),
        );
        let p = parts.a + parts.s * ch.x + vector_part - g * parts.mu + q * parts.t;

        let ipa_verifier = InnerProductVerifier::new(g_vec.to_vec(), h_prime, q);
        let valid = ipa_verifier.verify(&mut transcript, &parts.ipa, &p)?;
        if !valid {
            tracing::debug!("bulletproof inner product check failed");
        }
        Ok(valid)
    }
}
