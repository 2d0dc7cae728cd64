//! Property-based tests for commitment homomorphism

use crate::{blind_sum, commit, verify_commit_sum};
use proptest::prelude::*;

fn blind(seed: u8, tag: u8) -> [u8; 32] {
    let mut b = [seed; 32];
    b[0] = 0;
    b[31] = tag;
    b
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_split_output_balances(
        total in any::<u32>(),
        split in any::<u32>(),
        seed in 1u8..=255,
    ) {
        let total = total as u64;
        let first = split as u64 % (total + 1);
        let b_in = blind(seed, 1);
        let b_first = blind(seed, 2);
        let b_second = blind_sum(&[b_in], &[b_first]).unwrap();

        let input = commit(total, &b_in).unwrap();
        let outputs = [
            commit(first, &b_first).unwrap(),
            commit(total - first, &b_second).unwrap(),
        ];
        prop_assert!(verify_commit_sum(&[input], &outputs).unwrap());

        let skewed = commit(total + 1, &b_in).unwrap();
        prop_assert!(!verify_commit_sum(&[skewed], &outputs).unwrap());
    }
}
