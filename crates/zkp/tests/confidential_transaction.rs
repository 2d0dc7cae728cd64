//! End-to-end confidential transaction: commitments, range proofs on the
//! outputs, balance checks and an MLSAG over the ring of inputs

use rand::{Rng, RngCore};
use secp256k1_zkp::{
    Commitment, MlsagMatrix, ProveOptions, RangeProofConfig, Secp256k1Zkp, ZkpConfig,
};

const COIN: u64 = 1_000_000;

fn blind<R: RngCore>(ctx: &Secp256k1Zkp, rng: &mut R) -> [u8; 32] {
    loop {
        let mut b = [0u8; 32];
        rng.fill_bytes(&mut b);
        if ctx.verify_secret_key(&b) {
            return b;
        }
    }
}

#[test]
fn test_ring_transaction() {
    let ctx = Secp256k1Zkp::new().unwrap();
    let mut rng = rand::thread_rng();

    let n_cols = 5;
    let signer = rng.gen_range(0..n_cols);
    let amounts = [5_690_000u64, 40 * COIN];
    let out_blinds = [blind(&ctx, &mut rng), blind(&ctx, &mut rng)];
    let outputs: Vec<Commitment> = amounts
        .iter()
        .zip(&out_blinds)
        .map(|(v, b)| ctx.commit(*v, b).unwrap())
        .collect();

    // Every output carries a bulletproof bound to the transaction
    let tx_id = b"tx:7f3a";
    for ((value, b), commit) in amounts.iter().zip(&out_blinds).zip(&outputs) {
        let options = ProveOptions {
            extra_commit: Some(tx_id.as_slice()),
            message: Some(b"change".as_slice()),
            min_value: 0,
        };
        let proof = ctx
            .bulletproof_prove(*value, b, &blind(&ctx, &mut rng), b, options)
            .unwrap();
        assert!(ctx.bulletproof_verify(commit, &proof, Some(tx_id.as_slice()), 0).unwrap());
        assert!(!ctx.bulletproof_verify(commit, &proof, Some(b"tx:7f3b".as_slice()), 0).unwrap());

        let info = ctx.bulletproof_rewind(commit, b, Some(tx_id.as_slice()), &proof, 0).unwrap();
        assert!(info.success);
        assert_eq!(info.value, *value);
        assert_eq!(&info.message[..6], b"change");
    }

    let mut matrix = MlsagMatrix::new(2, n_cols).unwrap();
    let mut inputs = Vec::new();
    let mut secret_keys = Vec::new();
    let mut in_blind = [0u8; 32];
    for col in 0..n_cols {
        let pair = ctx.generate_key_pair(&mut rng);
        matrix
            .set_cell(0, col, &pair.public_key().to_compressed().unwrap())
            .unwrap();
        let b = blind(&ctx, &mut rng);
        let value = if col == signer {
            secret_keys.push(*pair.private_key().as_bytes());
            in_blind = b;
            45_690_000
        } else {
            rng.gen_range(0..500 * COIN)
        };
        inputs.push(ctx.commit(value, &b).unwrap());
    }

    let real_input = [inputs[signer]];
    let fee_blind = ctx.blind_sum(&[in_blind], &out_blinds).unwrap();
    let excess = ctx.commit_sum(&real_input, &outputs).unwrap();
    assert_eq!(
        ctx.commit_to_public_key(&excess).unwrap(),
        secp256k1_zkp::PrivateKey::from_bytes(&fee_blind)
            .unwrap()
            .public_key()
            .unwrap()
    );

    let blinds = [in_blind, out_blinds[0], out_blinds[1]];
    let prepared = ctx.mlsag_prepare(matrix, &inputs, &outputs, &blinds, 2, 2).unwrap();
    assert_eq!(*prepared.blind_sum, fee_blind);
    secret_keys.push(*prepared.blind_sum);

    let preimage = [0x42u8; 32];
    let nonce = blind(&ctx, &mut rng);
    let sig = ctx
        .mlsag_generate(&nonce, &preimage, signer, &secret_keys, &prepared.matrix)
        .unwrap();
    assert!(ctx.mlsag_verify(&preimage, &prepared.matrix, &sig).unwrap());

    let mut forged = preimage;
    forged[7] ^= 0x10;
    assert!(!ctx.mlsag_verify(&forged, &prepared.matrix, &sig).unwrap());

    let pk = prepared.matrix.cell(0, signer).unwrap();
    assert_eq!(
        sig.key_images()[0],
        ctx.key_image(&secret_keys[0], pk).unwrap()
    );
}

#[test]
fn test_classic_range_proof_through_context() {
    let config = ZkpConfig {
        range_proof: RangeProofConfig {
            exp: 2,
            min_bits: 24,
            ..Default::default()
        },
        ..Default::default()
    };
    let ctx = Secp256k1Zkp::with_config(config).unwrap();
    let b = [0x31u8; 32];
    let commit = ctx.commit(1_234_500, &b).unwrap();
    let proof = ctx
        .range_proof_sign(1_000, &commit, &b, &b, b"invoice 88", 1_234_500)
        .unwrap();

    let (min, max) = ctx.range_proof_verify(&commit, &proof).unwrap().unwrap();
    assert!(min <= 1_234_500 && 1_234_500 <= max);

    let info = ctx.range_proof_info(&proof);
    assert_eq!(info.exp, 2);
    assert_eq!(info.mantissa, 24);

    let rewound = ctx.range_proof_rewind(&commit, &proof, &b).unwrap();
    assert!(rewound.success);
    assert_eq!(rewound.value, 1_234_500);
    assert_eq!(&rewound.message[..10], b"invoice 88");
}

#[test]
fn test_schnorr_batch_through_context() {
    let ctx = Secp256k1Zkp::new().unwrap();
    let pairs: Vec<_> = (0u8..4)
        .map(|i| ctx.key_pair_from_seed(&[i, 0xee]).unwrap())
        .collect();
    let msgs: Vec<[u8; 32]> = (0u8..4).map(|i| [i; 32]).collect();
    let sigs: Vec<[u8; 64]> = pairs
        .iter()
        .zip(&msgs)
        .map(|(p, m)| ctx.schnorr_sign(m, p.private_key(), &[0u8; 32]).unwrap())
        .collect();
    let pks: Vec<_> = pairs.iter().map(|p| *p.public_key()).collect();

    assert!(ctx.schnorr_verify_batch(&sigs, &msgs, &pks).unwrap());
    assert!(ctx.schnorr_verify(&sigs[0], &msgs[0], &pks[0]).unwrap());
    assert!(!ctx.schnorr_verify(&sigs[0], &msgs[1], &pks[0]).unwrap());

    let shared = ctx.ecdh(&pks[1], pairs[0].private_key()).unwrap();
    assert_eq!(shared, ctx.ecdh(&pks[0], pairs[1].private_key()).unwrap());
}
