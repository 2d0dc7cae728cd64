//! Inner Product Argument prover implementation

use crate::InnerProductProof;
use k256::{ProjectivePoint, Scalar};
use merlin::Transcript;
use rayon::prelude::*;
use zeroize::Zeroize;
use zkp_core::{utils::*, GroupElement, TranscriptProtocol, ZkpError, ZkpResult};

/// Inner Product Argument prover
#[derive(Debug, Clone)]
pub struct InnerProductProver {
    g_vec: Vec<ProjectivePoint>,
    h_vec: Vec<ProjectivePoint>,
    q: GroupElement,
}

impl InnerProductProver {
    /// Create a new IPA prover over the given bases
    pub fn new(g_vec: Vec<ProjectivePoint>, h_vec: Vec<ProjectivePoint>, q: GroupElement) -> Self {
        Self { g_vec, h_vec, q }
    }

    /// Create an inner product proof
    ///
    /// Proves knowledge of vectors `a` and `b` such that:
    /// `P = <a, G> + <b, H> + <a,b>*Q`
    pub fn prove(
        &self,
        transcript: &mut Transcript,
        a: &[Scalar],
        b: &[Scalar],
    ) -> ZkpResult<InnerProductProof> {
        if a.len() != b.len() {
            return Err(ZkpError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        let n = a.len();
        if !is_power_of_two(n) {
            return Err(ZkpError::InvalidParameters(format!(
                "vector length must be a power of two, got {n}"
            )));
        }
        if self.g_vec.len() != n || self.h_vec.len() != n {
            return Err(ZkpError::InsufficientGenerators {
                needed: n,
                available: self.g_vec.len().min(self.h_vec.len()),
            });
        }

        let mut l_vec = Vec::new();
        let mut r_vec = Vec::new();

        let mut current_a = a.to_vec();
        let mut current_b = b.to_vec();
        let mut current_g = self.g_vec.clone();
        let mut current_h = self.h_vec.clone();

        while current_a.len() > 1 {
            let m = current_a.len() / 2;

            let (a_l, a_r) = current_a.split_at(m);
            let (b_l, b_r) = current_b.split_at(m);
            let (g_l, g_r) = current_g.split_at(m);
            let (h_l, h_r) = current_h.split_at(m);

            let c_l = inner_product(a_l, b_r)?;
            let c_r = inner_product(a_r, b_l)?;

            // L = <a_L, G_R> + <b_R, H_L> + c_L*Q
            let l = GroupElement::multiscalar_mul(
                a_l.iter().cloned().chain(b_r.iter().cloned()).chain(std::iter::once(c_l)),
                g_r.iter().cloned().chain(h_l.iter().cloned()).chain(std::iter::once(self.q.0)),
            );

            // R = <a_R, G_L> + <b_L, H_R> + c_R*Q
            let r = GroupElement::multiscalar_mul(
                a_r.iter().cloned().chain(b_l.iter().cloned()).chain(std::iter::once(c_r)),
                g_l.iter().cloned().chain(h_r.iter().cloned()).chain(std::iter::once(self.q.0)),
            );

            transcript.append_point(b"L", &l)?;
            transcript.append_point(b"R", &r)?;

            l_vec.push(l);
            r_vec.push(r);

            let u = transcript.challenge_scalar(b"u");
            let u_inv = Option::<Scalar>::from(u.invert())
                .ok_or_else(|| ZkpError::InvalidProof("zero folding challenge".to_string()))?;

            let mut folded_a: Vec<Scalar> = (0..m).map(|i| a_l[i] * u + a_r[i] * u_inv).collect();
            let mut folded_b: Vec<Scalar> = (0..m).map(|i| b_l[i] * u_inv + b_r[i] * u).collect();
            let folded_g: Vec<ProjectivePoint> = g_l
                .par_iter()
                .zip(g_r.par_iter())
                .map(|(gl, gr)| *gl * u_inv + *gr * u)
                .collect();
            let folded_h: Vec<ProjectivePoint> = h_l
                .par_iter()
                .zip(h_r.par_iter())
                .map(|(hl, hr)| *hl * u + *hr * u_inv)
                .collect();

            std::mem::swap(&mut current_a, &mut folded_a);
            std::mem::swap(&mut current_b, &mut folded_b);
            folded_a.zeroize();
            folded_b.zeroize();
            current_g = folded_g;
            current_h = folded_h;
        }

        let proof = InnerProductProof::new(l_vec, r_vec, current_a[0], current_b[0]);
        current_a.zeroize();
        current_b.zeroize();
        tracing::trace!(rounds = proof.num_rounds(), "inner product proof created");
        Ok(proof)
    }
}
