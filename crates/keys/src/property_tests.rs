//! Property-based tests for signatures and key agreement

use crate::{ecdh, ecdsa, schnorr, KeyPair};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Both signature schemes verify what they sign and nothing else
    #[test]
    fn test_signatures_bind_message(
        seed in prop::collection::vec(any::<u8>(), 1..64),
        msg in any::<[u8; 32]>(),
        aux in any::<[u8; 32]>(),
        flip in 0usize..32,
    ) {
        let pair = KeyPair::from_seed(&seed).unwrap();
        let mut other = msg;
        other[flip] ^= 0x01;

        let sig = ecdsa::sign(&msg, pair.private_key()).unwrap();
        prop_assert!(ecdsa::verify(&sig, &msg, pair.public_key()).unwrap());
        prop_assert!(!ecdsa::verify(&sig, &other, pair.public_key()).unwrap());

        let sig = schnorr::sign(&msg, pair.private_key(), &aux).unwrap();
        prop_assert!(schnorr::verify(&sig, &msg, pair.public_key()).unwrap());
        prop_assert!(!schnorr::verify(&sig, &other, pair.public_key()).unwrap());
    }

    #[test]
    fn test_ecdh_symmetric(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let alice = KeyPair::from_seed(&a).unwrap();
        let bob = KeyPair::from_seed(&b).unwrap();
        prop_assert_eq!(
            ecdh(bob.public_key(), alice.private_key()).unwrap(),
            ecdh(alice.public_key(), bob.private_key()).unwrap()
        );
    }
}
