//! Bulletproof prover

use crate::proof::{begin_transcript, rescale_h, ProofParts};
use crate::rewind::{embed, RewindSecrets};
use crate::{BulletProof, ProveOptions, RANGE_BITS};
use ipa::InnerProductProver;
use k256::Scalar;
use pedersen::{commit_point, Commitment};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use zeroize::{Zeroize, Zeroizing};
use zkp_core::{
    blind_from_bytes, random_scalar, utils::*, GeneratorSet, TranscriptProtocol,
    ZkpError, ZkpResult, BULLET_PROOF_MSG_SIZE,
};

/// Prover for rewindable 64-bit range proofs
#[derive(Debug, Clone)]
pub struct BulletproofProver {
    generators: Arc<GeneratorSet>,
}

impl BulletproofProver {
    /// Create a prover; the set must hold at least 64 generators per vector
    pub fn new(generators: Arc<GeneratorSet>) -> ZkpResult<Self> {
        generators.ensure_capacity(RANGE_BITS)?;
        Ok(Self { generators })
    }

    /// Get the generator set used by this prover
    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Prove that `blind*G + value*H` commits to a value in
    /// `[min_value, min_value + 2^64)`.
    ///
    /// `private_nonce` seeds the blinding vectors and `rewind_nonce` the
    /// scalars that let [`crate::BulletproofRewinder`] recover the value,
    /// the blind and up to 16 message bytes. Identical inputs produce
    /// identical proofs.
    pub fn prove(
        &self,
        value: u64,
        blind: &[u8; 32],
        private_nonce: &[u8; 32],
        rewind_nonce: &[u8; 32],
        options: ProveOptions<'_>,
    ) -> ZkpResult<BulletProof> {
        let min_value = options.min_value;
        let extra = options.extra_commit.unwrap_or(&[]);
        let message = options.message.unwrap_or(&[]);

        if value < min_value {
            return Err(ZkpError::ValueBelowMinimum {
                value,
                min: min_value,
            });
        }
        if message.len() > BULLET_PROOF_MSG_SIZE {
            return Err(ZkpError::MessageTooLong {
                max: BULLET_PROOF_MSG_SIZE,
                actual: message.len(),
            });
        }

        let gamma = Zeroizing::new(blind_from_bytes(blind)?);
        let commit = Commitment::from_point(&commit_point(&Scalar::from(value), &gamma)?)?;
        let shifted = value - min_value;
        let n = RANGE_BITS;

        let secrets = RewindSecrets::derive(rewind_nonce, &commit, min_value, extra);
        let alpha = Zeroizing::new(secrets.alpha + *embed(shifted, message));

        let mut rng = private_rng(private_nonce, &commit, blind, value, &options);
        let s_l: Zeroizing<Vec<Scalar>> =
            Zeroizing::new((0..n).map(|_| random_scalar(&mut rng)).collect());
        let s_r: Zeroizing<Vec<Scalar>> =
            Zeroizing::new((0..n).map(|_| random_scalar(&mut rng)).collect());

        let a_l = Zeroizing::new(bit_decomposition(shifted, n));
        let a_r: Zeroizing<Vec<Scalar>> =
            Zeroizing::new(a_l.iter().map(|bit| *bit - Scalar::ONE).collect());

        let g = self.generators.g;
        let h = self.generators.h;
        let a_point = g * *alpha + self.generators.vector_commit(&a_l, &a_r)?;
        let s_point = g * secrets.rho + self.generators.vector_commit(&s_l, &s_r)?;

        let mut transcript = begin_transcript(commit.as_bytes(), min_value, extra);
        transcript.append_point(b"A", &a_point)?;
        transcript.append_point(b"S", &s_point)?;
        let y = transcript.challenge_scalar(b"y");
        let z = transcript.challenge_scalar(b"z");

        let y_powers = scalar_powers(&y, n);
        let two_powers = scalar_powers(&Scalar::from(2u64), n);
        let z_sq = z * z;

        // l(X) = (a_L - z) + s_L*X
        // r(X) = y^n o (a_R + z + s_R*X) + z^2*2^n
        let l0 = Zeroizing::new(a_l.iter().map(|a| *a - z).collect::<Vec<_>>());
        let r0 = Zeroizing::new(
            a_r.iter()
                .zip(y_powers.iter())
                .zip(two_powers.iter())
                .map(|((a, yi), ti)| *yi * (*a + z) + z_sq * *ti)
                .collect::<Vec<_>>(),
        );
        let r1 = Zeroizing::new(hadamard_product(&y_powers, &s_r)?);

        let t1 = inner_product(&l0, &r1)? + inner_product(&s_l, &r0)?;
        let t2 = inner_product(&s_l, &r1)?;

        let t1_point = h * t1 + g * secrets.tau1;
        let t2_point = h * t2 + g * secrets.tau2;
        transcript.append_point(b"T1", &t1_point)?;
        transcript.append_point(b"T2", &t2_point)?;
        let x = transcript.challenge_scalar(b"x");

        let taux = secrets.tau2 * x * x + secrets.tau1 * x + z_sq * *gamma;
        let mu = *alpha + secrets.rho * x;
        let mut l_vec = vector_add(&l0, &vector_scale(&s_l, &x))?;
        let mut r_vec = vector_add(&r0, &vector_scale(&r1, &x))?;
        let t = inner_product(&l_vec, &r_vec)?;

        transcript.append_scalar(b"taux", &taux);
        transcript.append_scalar(b"mu", &mu);
        transcript.append_scalar(b"t", &t);
        let w = transcript.challenge_scalar(b"w");

        let h_prime = rescale_h(&self.generators.h_vec()[..n], &y)?;
        let ipa_prover =
            InnerProductProver::new(self.generators.g_vec()[..n].to_vec(), h_prime, h * w);
        let ipa = ipa_prover.prove(&mut transcript, &l_vec, &r_vec);
        l_vec.zeroize();
        r_vec.zeroize();

        let parts = ProofParts {
            taux,
            mu,
            t,
            a: a_point,
            s: s_point,
            t1: t1_point,
            t2: t2_point,
            ipa: ipa?,
        };
        tracing::trace!(min_value, extra_len = extra.len(), "generated bulletproof");
        parts.to_proof()
    }
}

/// Stream for the non-rewindable blinding vectors, bound to every input of
/// the proof
fn private_rng(
    private_nonce: &[u8; 32],
    commit: &Commitment,
    blind: &[u8; 32],
    value: u64,
    options: &ProveOptions<'_>,
) -> ChaCha20Rng {
    let extra = options.extra_commit.unwrap_or(&[]);
    let message = options.message.unwrap_or(&[]);

    let mut hasher = Sha256::new();
    hasher.update(b"secp256k1-zkp/bulletproof/private");
    hasher.update(private_nonce);
    hasher.update(commit.as_bytes());
    hasher.update(options.min_value.to_be_bytes());
    hasher.update((extra.len() as u64).to_be_bytes());
    hasher.update(extra);
    hasher.update(blind);
    hasher.update(value.to_be_bytes());
    hasher.update(message);
    let mut seed: [u8; 32] = hasher.finalize().into();
    let rng = ChaCha20Rng::from_seed(seed);
    seed.zeroize();
    rng
}
