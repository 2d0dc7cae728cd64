//! Property-based tests for MLSAG signing

use crate::{generate, verify, MlsagMatrix};
use proptest::prelude::*;
use zkp_core::{generator_g, secret_key_from_bytes};

/// A ring whose every cell, commitment row included, is a fresh key
fn ring(seed: u8, n_rows: usize, n_cols: usize) -> (MlsagMatrix, Vec<Vec<[u8; 32]>>) {
    let mut matrix = MlsagMatrix::new(n_rows, n_cols).unwrap();
    let mut keys = vec![Vec::new(); n_cols];
    for row in 0..n_rows {
        for (col, column_keys) in keys.iter_mut().enumerate() {
            let mut sk = [seed; 32];
            sk[0] = 0;
            sk[30] = row as u8;
            sk[31] = col as u8;
            let s = secret_key_from_bytes(&sk).unwrap();
            matrix
                .set_point(row, col, &(generator_g() * s))
                .unwrap();
            column_keys.push(sk);
        }
    }
    (matrix, keys)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Any member of any ring shape can sign, and the signature does not
    /// verify under another preimage
    #[test]
    fn test_any_signer_verifies(
        seed in 1u8..=255,
        n_rows in 2usize..=4,
        n_cols in 1usize..=6,
        signer_choice in any::<prop::sample::Index>(),
        nonce in any::<[u8; 32]>(),
        preimage in any::<[u8; 32]>(),
        flip in 0usize..32,
    ) {
        let (matrix, keys) = ring(seed, n_rows, n_cols);
        let signer = signer_choice.index(n_cols);

        let sig = generate(&nonce, &preimage, signer, &keys[signer], &matrix).unwrap();
        prop_assert!(verify(&preimage, &matrix, &sig).unwrap());

        let mut other = preimage;
        other[flip] ^= 0x80;
        prop_assert!(!verify(&other, &matrix, &sig).unwrap());
    }
}
