//! Context object bundling generators and configuration

use bulletproofs::{
    BulletProof, BulletproofConfig, BulletproofProver, BulletproofRewinder, BulletproofVerifier,
    ProveOptions, RANGE_BITS,
};
use mlsag::{MlsagMatrix, MlsagSignature, Prepared};
use pedersen::Commitment;
use rand_core::{CryptoRng, RngCore};
use rangeproof::{RangeProof, RangeProofConfig, RangeProver, RangeRewinder, RangeVerifier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zkp_core::{GeneratorSet, ProofInfo, ZkpResult, SIGNATURE_SIZE};
use zkp_keys::{ecdsa, schnorr, KeyPair, PrivateKey, PublicKey};

/// Configuration of every engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZkpConfig {
    pub range_proof: RangeProofConfig,
    pub bulletproof: BulletproofConfig,
}

/// Entry point to every operation of the workspace.
///
/// Cloning is cheap: the bulletproof generators are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Secp256k1Zkp {
    generators: Arc<GeneratorSet>,
    config: ZkpConfig,
}

impl Secp256k1Zkp {
    /// A context with the default configuration
    pub fn new() -> ZkpResult<Self> {
        Self::with_config(ZkpConfig::default())
    }

    pub fn with_config(config: ZkpConfig) -> ZkpResult<Self> {
        config.range_proof.validate()?;
        let generators = config.bulletproof.generators()?;
        generators.ensure_capacity(RANGE_BITS)?;
        tracing::debug!(
            generators = generators.count(),
            exp = config.range_proof.exp,
            min_bits = config.range_proof.min_bits,
            "created secp256k1-zkp context"
        );
        Ok(Self { generators, config })
    }

    pub fn config(&self) -> &ZkpConfig {
        &self.config
    }

    pub fn generators(&self) -> &Arc<GeneratorSet> {
        &self.generators
    }

    // Commitments

    pub fn commit(&self, value: u64, blind: &[u8; 32]) -> ZkpResult<Commitment> {
        pedersen::commit(value, blind)
    }

    pub fn blind_commit(&self, value: u64, blind: &[u8; 32]) -> ZkpResult<Commitment> {
        pedersen::blind_commit(value, blind)
    }

    pub fn blind_sum(&self, positives: &[[u8; 32]], negatives: &[[u8; 32]]) -> ZkpResult<[u8; 32]> {
        pedersen::blind_sum(positives, negatives)
    }

    pub fn commit_sum(
        &self,
        positives: &[Commitment],
        negatives: &[Commitment],
    ) -> ZkpResult<Commitment> {
        pedersen::commit_sum(positives, negatives)
    }

    pub fn verify_commit_sum(
        &self,
        positives: &[Commitment],
        negatives: &[Commitment],
    ) -> ZkpResult<bool> {
        pedersen::verify_commit_sum(positives, negatives)
    }

    pub fn blind_switch(&self, value: u64, blind: &[u8; 32]) -> ZkpResult<[u8; 32]> {
        pedersen::blind_switch(value, blind)
    }

    /// The commitment as a public key, signable with its blind when it
    /// commits to zero
    pub fn commit_to_public_key(&self, commit: &Commitment) -> ZkpResult<PublicKey> {
        PublicKey::from_point(commit.to_public_key()?)
    }

    // Classic range proofs

    /// Prove `commit` hides `value >= min`. `nonce` seeds the rewindable
    /// randomness; pass the blind to keep the classic behaviour.
    pub fn range_proof_sign(
        &self,
        min: u64,
        commit: &Commitment,
        blind: &[u8; 32],
        nonce: &[u8; 32],
        message: &[u8],
        value: u64,
    ) -> ZkpResult<RangeProof> {
        RangeProver::new(self.config.range_proof)?
            .prove_with_nonce(min, value, blind, commit, message, nonce)
    }

    /// The proven `(min, max)`, or `None` if the proof does not verify
    pub fn range_proof_verify(
        &self,
        commit: &Commitment,
        proof: &RangeProof,
    ) -> ZkpResult<Option<(u64, u64)>> {
        RangeVerifier::new().verify_range(commit, proof)
    }

    pub fn range_proof_rewind(
        &self,
        commit: &Commitment,
        proof: &RangeProof,
        nonce: &[u8; 32],
    ) -> ZkpResult<ProofInfo> {
        RangeRewinder::new(self.config.range_proof).rewind(commit, proof, nonce)
    }

    pub fn range_proof_info(&self, proof: &RangeProof) -> ProofInfo {
        proof.info()
    }

    // Bulletproofs

    pub fn bulletproof_prove(
        &self,
        value: u64,
        blind: &[u8; 32],
        private_nonce: &[u8; 32],
        rewind_nonce: &[u8; 32],
        options: ProveOptions<'_>,
    ) -> ZkpResult<BulletProof> {
        BulletproofProver::new(Arc::clone(&self.generators))?.prove(
            value,
            blind,
            private_nonce,
            rewind_nonce,
            options,
        )
    }

    pub fn bulletproof_verify(
        &self,
        commit: &Commitment,
        proof: &BulletProof,
        extra_commit: Option<&[u8]>,
        min_value: u64,
    ) -> ZkpResult<bool> {
        BulletproofVerifier::new(Arc::clone(&self.generators))?.verify(
            commit,
            proof,
            extra_commit,
            min_value,
        )
    }

    pub fn bulletproof_rewind(
        &self,
        commit: &Commitment,
        rewind_nonce: &[u8; 32],
        extra_data: Option<&[u8]>,
        proof: &BulletProof,
        min_value: u64,
    ) -> ZkpResult<ProofInfo> {
        BulletproofRewinder::new(Arc::clone(&self.generators)).rewind(
            commit,
            rewind_nonce,
            extra_data,
            proof,
            min_value,
        )
    }

    // MLSAG

    pub fn key_image(&self, secret_key: &[u8; 32], public_key: &[u8]) -> ZkpResult<[u8; 33]> {
        mlsag::key_image(secret_key, public_key)
    }

    pub fn mlsag_prepare(
        &self,
        matrix: MlsagMatrix,
        inputs: &[Commitment],
        outputs: &[Commitment],
        blinds: &[[u8; 32]],
        n_outs: usize,
        n_blinded: usize,
    ) -> ZkpResult<Prepared> {
        mlsag::prepare(matrix, inputs, outputs, blinds, n_outs, n_blinded)
    }

    pub fn mlsag_generate(
        &self,
        nonce: &[u8; 32],
        preimage: &[u8; 32],
        signer: usize,
        secret_keys: &[[u8; 32]],
        matrix: &MlsagMatrix,
    ) -> ZkpResult<MlsagSignature> {
        mlsag::generate(nonce, preimage, signer, secret_keys, matrix)
    }

    pub fn mlsag_verify(
        &self,
        preimage: &[u8; 32],
        matrix: &MlsagMatrix,
        signature: &MlsagSignature,
    ) -> ZkpResult<bool> {
        mlsag::verify(preimage, matrix, signature)
    }

    // Keys and signatures

    pub fn generate_key_pair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> KeyPair {
        KeyPair::generate(rng)
    }

    pub fn key_pair_from_seed(&self, seed: &[u8]) -> ZkpResult<KeyPair> {
        KeyPair::from_seed(seed)
    }

    pub fn verify_secret_key(&self, bytes: &[u8]) -> bool {
        PrivateKey::verify(bytes)
    }

    pub fn ecdsa_sign(&self, msg32: &[u8; 32], key: &PrivateKey) -> ZkpResult<[u8; SIGNATURE_SIZE]> {
        ecdsa::sign(msg32, key)
    }

    pub fn ecdsa_verify(
        &self,
        signature: &[u8],
        msg32: &[u8; 32],
        public_key: &PublicKey,
    ) -> ZkpResult<bool> {
        ecdsa::verify(signature, msg32, public_key)
    }

    pub fn schnorr_sign(
        &self,
        msg32: &[u8; 32],
        key: &PrivateKey,
        aux_rand: &[u8; 32],
    ) -> ZkpResult<[u8; SIGNATURE_SIZE]> {
        schnorr::sign(msg32, key, aux_rand)
    }

    pub fn schnorr_verify(
        &self,
        signature: &[u8; SIGNATURE_SIZE],
        msg32: &[u8; 32],
        public_key: &PublicKey,
    ) -> ZkpResult<bool> {
        schnorr::verify(signature, msg32, public_key)
    }

    pub fn schnorr_verify_batch(
        &self,
        signatures: &[[u8; SIGNATURE_SIZE]],
        messages: &[[u8; 32]],
        public_keys: &[PublicKey],
    ) -> ZkpResult<bool> {
        schnorr::verify_batch(signatures, messages, public_keys)
    }

    pub fn ecdh(&self, public_key: &PublicKey, key: &PrivateKey) -> ZkpResult<[u8; 32]> {
        zkp_keys::ecdh(public_key, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkp_core::ZkpError;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_context_is_shareable() {
        assert_send_sync::<Secp256k1Zkp>();
        let ctx = Secp256k1Zkp::new().unwrap();
        let copy = ctx.clone();
        assert!(Arc::ptr_eq(ctx.generators(), copy.generators()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ZkpConfig {
            bulletproof: BulletproofConfig { generator_count: 16 },
            ..Default::default()
        };
        assert!(matches!(
            Secp256k1Zkp::with_config(config),
            Err(ZkpError::InsufficientGenerators { .. })
        ));

        let mut config = ZkpConfig::default();
        config.range_proof.exp = 40;
        assert!(Secp256k1Zkp::with_config(config).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: ZkpConfig =
            serde_json::from_str(r#"{"range_proof":{"exp":2,"min_bits":32}}"#).unwrap();
        assert_eq!(config.range_proof.exp, 2);
        assert_eq!(config.range_proof.min_bits, 32);
        assert_eq!(config.bulletproof, BulletproofConfig::default());
    }

    #[test]
    fn test_commitment_as_public_key() {
        let ctx = Secp256k1Zkp::new().unwrap();
        let blind = [9u8; 32];
        let commit = ctx.commit(0, &blind).unwrap();
        let pk = ctx.commit_to_public_key(&commit).unwrap();

        let key = PrivateKey::from_bytes(&blind).unwrap();
        assert_eq!(pk, key.public_key().unwrap());
        let sig = ctx.ecdsa_sign(&[1u8; 32], &key).unwrap();
        assert!(ctx.ecdsa_verify(&sig, &[1u8; 32], &pk).unwrap());
    }
}
