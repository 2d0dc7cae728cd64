//! Serialized commitment type

use zkp_core::{GroupElement, ZkpError, ZkpResult, COMMITMENT_SIZE};

/// A Pedersen commitment in its 33-byte wire form.
///
/// The first byte is `0x08` when the point's `y` is a quadratic residue and
/// `0x09` otherwise; the rest is the big-endian `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; COMMITMENT_SIZE]);

impl Commitment {
    /// Parse and validate a serialized commitment
    pub fn from_bytes(bytes: &[u8]) -> ZkpResult<Self> {
        let array: [u8; COMMITMENT_SIZE] = bytes.try_into().map_err(|_| ZkpError::InvalidLength {
            expected: COMMITMENT_SIZE,
            actual: bytes.len(),
        })?;
        GroupElement::from_commitment_bytes(&array)?;
        Ok(Self(array))
    }

    /// Serialize a non-identity point
    pub fn from_point(point: &GroupElement) -> ZkpResult<Self> {
        Ok(Self(point.to_commitment_bytes()?))
    }

    /// The commitment as a curve point
    pub fn to_point(&self) -> ZkpResult<GroupElement> {
        GroupElement::from_commitment_bytes(&self.0)
    }

    /// Reinterpret the commitment as a public key, e.g. for signing with
    /// the blinding factor when the committed value is zero
    pub fn to_public_key(&self) -> ZkpResult<GroupElement> {
        self.to_point()
    }

    /// Raw 33-byte encoding
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_SIZE] {
        &self.0
    }

    /// Owned 33-byte encoding
    pub fn to_bytes(&self) -> [u8; COMMITMENT_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Commitment {
    type Error = ZkpError;

    fn try_from(bytes: &[u8]) -> ZkpResult<Self> {
        Self::from_bytes(bytes)
    }
}
