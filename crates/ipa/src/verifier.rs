//! Inner Product Argument verifier implementation

use crate::InnerProductProof;
use k256::{ProjectivePoint, Scalar};
use merlin::Transcript;
use zkp_core::{utils::*, GroupElement, TranscriptProtocol, ZkpError, ZkpResult};

/// Inner Product Argument verifier
#[derive(Debug, Clone)]
pub struct InnerProductVerifier {
    g_vec: Vec<ProjectivePoint>,
    h_vec: Vec<ProjectivePoint>,
    q: GroupElement,
}

impl InnerProductVerifier {
    /// Create a new IPA verifier over the given bases
    pub fn new(g_vec: Vec<ProjectivePoint>, h_vec: Vec<ProjectivePoint>, q: GroupElement) -> Self {
        Self { g_vec, h_vec, q }
    }

    /// Verify an inner product proof
    ///
    /// Checks that the proof opens `P = <a, G> + <b, H> + <a,b>*Q` for the
    /// bases this verifier was built with. The transcript must be in the
    /// same state the prover's was when it started.
    pub fn verify(
        &self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
    ) -> ZkpResult<bool> {
        proof.validate_structure()?;

        let n = self.g_vec.len();
        if !is_power_of_two(n) || self.h_vec.len() != n {
            return Err(ZkpError::InvalidParameters(format!(
                "generator vectors must share a power-of-two length, got {} and {}",
                n,
                self.h_vec.len()
            )));
        }

        let expected_rounds = n.trailing_zeros() as usize;
        if proof.num_rounds() != expected_rounds {
            return Err(ZkpError::InvalidProof(format!(
                "Expected {} rounds for vector length {}, got {}",
                expected_rounds,
                n,
                proof.num_rounds()
            )));
        }

        let mut challenges = Vec::with_capacity(proof.num_rounds());
        for (l, r) in proof.l_vec.iter().zip(proof.r_vec.iter()) {
            transcript.append_point(b"L", l)?;
            transcript.append_point(b"R", r)?;
            challenges.push(transcript.challenge_scalar(b"u"));
        }

        let mut challenges_inv = Vec::with_capacity(challenges.len());
        for u in &challenges {
            let inv = Option::<Scalar>::from(u.invert())
                .ok_or_else(|| ZkpError::InvalidProof("zero folding challenge".to_string()))?;
            challenges_inv.push(inv);
        }

        let s_scalars = Self::compute_s_scalars(&challenges, &challenges_inv, n);

        Ok(self.verify_final_equation(p, &challenges, &challenges_inv, &s_scalars, proof))
    }

    /// Compute the s scalars expressing the folded generators in terms of
    /// the original ones
    fn compute_s_scalars(
        challenges: &[Scalar],
        challenges_inv: &[Scalar],
        n: usize,
    ) -> (Vec<Scalar>, Vec<Scalar>) {
        let mut s_g = vec![Scalar::ONE; n];
        let mut s_h = vec![Scalar::ONE; n];

        // The first round splits on the most significant index bit
        for (round, (u, u_inv)) in challenges.iter().zip(challenges_inv.iter()).enumerate() {
            let bit_position = challenges.len() - 1 - round;

            for i in 0..n {
                if (i >> bit_position) & 1 == 1 {
                    s_g[i] *= u;
                    s_h[i] *= u_inv;
                } else {
                    s_g[i] *= u_inv;
                    s_h[i] *= u;
                }
            }
        }

        (s_g, s_h)
    }

    /// Verify the final equation of the IPA
    fn verify_final_equation(
        &self,
        p: &GroupElement,
        challenges: &[Scalar],
        challenges_inv: &[Scalar],
        s_scalars: &(Vec<Scalar>, Vec<Scalar>),
        proof: &InnerProductProof,
    ) -> bool {
        let (s_g, s_h) = s_scalars;

        // P + sum(u_i^2 * L_i) + sum(u_i^{-2} * R_i)
        let mut left_side = *p;
        for (i, (l, r)) in proof.l_vec.iter().zip(proof.r_vec.iter()).enumerate() {
            let u_sq = challenges[i] * challenges[i];
            let u_inv_sq = challenges_inv[i] * challenges_inv[i];
            left_side = left_side + (*l * u_sq) + (*r * u_inv_sq);
        }

        // a*G' + b*H' + a*b*Q with G' = <s_g, G> and H' = <s_h, H>
        let right_side = GroupElement::multiscalar_mul(
            s_g.iter()
                .map(|s| s * &proof.a)
                .chain(s_h.iter().map(|s| s * &proof.b))
                .chain(std::iter::once(proof.a * proof.b)),
            self.g_vec
                .iter()
                .cloned()
                .chain(self.h_vec.iter().cloned())
                .chain(std::iter::once(self.q.0)),
        );

        let valid = left_side == right_side;
        if !valid {
            tracing::debug!("inner product final equation mismatch");
        }
        valid
    }
}
