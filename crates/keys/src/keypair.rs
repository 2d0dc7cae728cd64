//! Secret keys, public keys and key pairs

use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use zkp_core::{
    generator_g, is_valid_secret_key, random_scalar, scalar_to_bytes, secret_key_from_bytes,
    GroupElement, Scalar, ZkpError, ZkpResult, SECRET_KEY_SIZE,
};

/// A secp256k1 secret key, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; SECRET_KEY_SIZE]);

impl PrivateKey {
    /// Parse a key: non-zero and below the curve order
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_SIZE]) -> ZkpResult<Self> {
        secret_key_from_bytes(bytes)?;
        Ok(Self(*bytes))
    }

    pub fn from_slice(bytes: &[u8]) -> ZkpResult<Self> {
        let array: &[u8; SECRET_KEY_SIZE] =
            bytes.try_into().map_err(|_| ZkpError::InvalidLength {
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            })?;
        Self::from_bytes(array)
    }

    /// Whether `bytes` is a usable secret key
    pub fn verify(bytes: &[u8]) -> bool {
        <&[u8; SECRET_KEY_SIZE]>::try_from(bytes)
            .map(is_valid_secret_key)
            .unwrap_or(false)
    }

    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let sk = Zeroizing::new(random_scalar(rng));
        Self(scalar_to_bytes(&sk))
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.0
    }

    pub(crate) fn scalar(&self) -> ZkpResult<Zeroizing<Scalar>> {
        Ok(Zeroizing::new(secret_key_from_bytes(&self.0)?))
    }

    pub fn public_key(&self) -> ZkpResult<PublicKey> {
        Ok(PublicKey(generator_g() * *self.scalar()?))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A secp256k1 public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(GroupElement);

impl PublicKey {
    /// Parse a 33-byte compressed or 65-byte uncompressed SEC1 key
    pub fn parse(bytes: &[u8]) -> ZkpResult<Self> {
        Ok(Self(GroupElement::from_sec1(bytes)?))
    }

    /// Wrap a point, e.g. a commitment to zero signed for with its blind
    pub fn from_point(point: GroupElement) -> ZkpResult<Self> {
        if point.is_identity() {
            return Err(ZkpError::IdentityPoint);
        }
        Ok(Self(point))
    }

    /// SEC1 encoding, 33 or 65 bytes
    pub fn serialize(&self, compressed: bool) -> ZkpResult<Vec<u8>> {
        if compressed {
            Ok(self.0.to_compressed()?.to_vec())
        } else {
            Ok(self.0.to_uncompressed()?.to_vec())
        }
    }

    pub fn to_compressed(&self) -> ZkpResult<[u8; 33]> {
        self.0.to_compressed()
    }

    /// BIP-340 x-only encoding
    pub fn x_only(&self) -> ZkpResult<[u8; 32]> {
        Ok(self.0.to_x()?.0)
    }

    pub fn point(&self) -> &GroupElement {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = ZkpError;

    fn try_from(bytes: &[u8]) -> ZkpResult<Self> {
        Self::parse(bytes)
    }
}

/// A secret key with its public key
#[derive(Debug, Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let sk = Zeroizing::new(random_scalar(rng));
        let public_key = PublicKey(generator_g() * *sk);
        let private_key = PrivateKey(scalar_to_bytes(&sk));
        Self {
            private_key,
            public_key,
        }
    }

    /// Derive a key pair with `sk = SHA256(seed)`.
    ///
    /// Fails if the digest is not a valid secret key.
    pub fn from_seed(seed: &[u8]) -> ZkpResult<Self> {
        let digest = Zeroizing::new(<[u8; 32]>::from(Sha256::digest(seed)));
        Self::from_secret(&digest)
    }

    pub fn from_secret(bytes: &[u8; SECRET_KEY_SIZE]) -> ZkpResult<Self> {
        let private_key = PrivateKey::from_bytes(bytes)?;
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkp_core::CURVE_ORDER;

    #[test]
    fn test_generate_is_consistent() {
        let pair = KeyPair::generate(&mut rand::thread_rng());
        assert!(PrivateKey::verify(pair.private_key().as_bytes()));
        assert_eq!(pair.private_key().public_key().unwrap(), *pair.public_key());
    }

    #[test]
    fn test_from_seed_hashes() {
        let pair = KeyPair::from_seed(b"correct horse battery staple").unwrap();
        let expected: [u8; 32] = Sha256::digest(b"correct horse battery staple").into();
        assert_eq!(pair.private_key().as_bytes(), &expected);
        assert_eq!(
            pair.public_key(),
            KeyPair::from_secret(&expected).unwrap().public_key()
        );
    }

    #[test]
    fn test_secret_key_validation() {
        let mut one = [0u8; 32];
        one[31] = 1;
        assert!(PrivateKey::verify(&one));
        assert!(!PrivateKey::verify(&[0u8; 32]));
        assert!(!PrivateKey::verify(&CURVE_ORDER));
        assert!(!PrivateKey::verify(&one[..31]));
        assert_eq!(KeyPair::from_secret(&[0u8; 32]).err(), Some(ZkpError::InvalidSecretKey));
    }

    #[test]
    fn test_known_public_key() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let pair = KeyPair::from_secret(&one).unwrap();
        assert_eq!(
            hex::encode(pair.public_key().serialize(true).unwrap()),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_serialize_parse() {
        let pair = KeyPair::from_secret(&[0x42u8; 32]).unwrap();
        let compressed = pair.public_key().serialize(true).unwrap();
        let uncompressed = pair.public_key().serialize(false).unwrap();
        assert_eq!(compressed.len(), 33);
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(PublicKey::parse(&compressed).unwrap(), *pair.public_key());
        assert_eq!(PublicKey::parse(&uncompressed).unwrap(), *pair.public_key());
        assert!(PublicKey::parse(&compressed[..32]).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
        assert_eq!(format!("{key:?}"), "PrivateKey(..)");
    }
}
