//! Key images: the linkability tags of MLSAG signatures
//!
//! ```text
//! I = sk * HashToPoint(compressed(pk))
//! ```
//!
//! The image depends only on the key, so two signatures by the same key
//! carry the same image whatever ring they hide in.

use zeroize::Zeroizing;
use zkp_core::{
    hash_to_point, secret_key_from_bytes, GroupElement, ZkpResult, PUBLIC_KEY_COMPRESSED_SIZE,
};

/// `HashToPoint` of a compressed public key
pub(crate) fn key_hash_point(public_key: &[u8; PUBLIC_KEY_COMPRESSED_SIZE]) -> GroupElement {
    hash_to_point(public_key)
}

/// Key image of `secret_key` for `public_key`, which may be 33-byte
/// compressed or 65-byte uncompressed.
///
/// The result is a compressed point and never all zeros.
pub fn key_image(
    secret_key: &[u8; 32],
    public_key: &[u8],
) -> ZkpResult<[u8; PUBLIC_KEY_COMPRESSED_SIZE]> {
    let sk = Zeroizing::new(secret_key_from_bytes(secret_key)?);
    let compressed = GroupElement::from_sec1(public_key)?.to_compressed()?;
    (key_hash_point(&compressed) * *sk).to_compressed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::Scalar;
    use zkp_core::ZkpError;

    fn public_key(sk: &[u8; 32]) -> GroupElement {
        GroupElement::generator() * secret_key_from_bytes(sk).unwrap()
    }

    #[test]
    fn test_compressed_and_uncompressed_agree() {
        let sk = [0x11u8; 32];
        let pk = public_key(&sk);
        let a = key_image(&sk, &pk.to_compressed().unwrap()).unwrap();
        let b = key_image(&sk, &pk.to_uncompressed().unwrap()).unwrap();
        assert_eq!(a, b);
        assert!(a[0] == 0x02 || a[0] == 0x03);
    }

    #[test]
    fn test_image_is_keyed() {
        let pk = public_key(&[0x11u8; 32]).to_compressed().unwrap();
        let a = key_image(&[0x11u8; 32], &pk).unwrap();
        let b = key_image(&[0x12u8; 32], &pk).unwrap();
        assert_ne!(a, b);

        let expected = key_hash_point(&pk) * Scalar::from(2u64);
        let mut two = [0u8; 32];
        two[31] = 2;
        assert_eq!(key_image(&two, &pk).unwrap(), expected.to_compressed().unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        let pk = public_key(&[0x11u8; 32]).to_compressed().unwrap();
        assert_eq!(key_image(&[0u8; 32], &pk), Err(ZkpError::InvalidSecretKey));
        assert!(matches!(
            key_image(&[0x11u8; 32], &pk[..32]),
            Err(ZkpError::InvalidLength { .. })
        ));
        let mut bad = pk;
        bad[0] = 0x05;
        assert!(key_image(&[0x11u8; 32], &bad).is_err());
    }
}
