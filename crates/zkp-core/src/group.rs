//! Group operations and point encodings
//!
//! Three encodings are in use:
//! - SEC1 public keys, 33 bytes compressed (`0x02`/`0x03`) or 65 bytes
//!   uncompressed (`0x04`)
//! - Pedersen commitments, 33 bytes with a `0x08`/`0x09` prefix selected by
//!   whether `y` is a quadratic residue
//! - Packed proof points, a bare 32-byte `x` with the `y` parity stored
//!   separately in a bitfield

use crate::{ZkpError, ZkpResult, COMMITMENT_SIZE, PUBLIC_KEY_COMPRESSED_SIZE, PUBLIC_KEY_UNCOMPRESSED_SIZE};
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldElement, ProjectivePoint, Scalar};
use sha2::{Digest, Sha256};

/// A point on secp256k1 with the codecs used across the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupElement(pub ProjectivePoint);

impl GroupElement {
    /// Identity element
    pub fn identity() -> Self {
        Self(ProjectivePoint::IDENTITY)
    }

    /// The standard base point `G`
    pub fn generator() -> Self {
        Self(ProjectivePoint::GENERATOR)
    }

    /// Whether this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.0 == ProjectivePoint::IDENTITY
    }

    /// Parse a 33-byte compressed or 65-byte uncompressed SEC1 public key
    pub fn from_sec1(bytes: &[u8]) -> ZkpResult<Self> {
        if bytes.len() != PUBLIC_KEY_COMPRESSED_SIZE && bytes.len() != PUBLIC_KEY_UNCOMPRESSED_SIZE {
            return Err(ZkpError::InvalidLength {
                expected: PUBLIC_KEY_COMPRESSED_SIZE,
                actual: bytes.len(),
            });
        }
        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| ZkpError::InvalidPoint("malformed SEC1 encoding".to_string()))?;
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(|p| Self(ProjectivePoint::from(p)))
            .ok_or_else(|| ZkpError::InvalidPoint("not on the curve".to_string()))
    }

    /// Lift an `x` coordinate with the given `y` parity
    pub fn from_x(x: &[u8; 32], y_is_odd: bool) -> ZkpResult<Self> {
        let mut buf = [0u8; PUBLIC_KEY_COMPRESSED_SIZE];
        buf[0] = if y_is_odd { 0x03 } else { 0x02 };
        buf[1..].copy_from_slice(x);
        Self::from_sec1(&buf)
    }

    /// 33-byte compressed SEC1 encoding
    pub fn to_compressed(&self) -> ZkpResult<[u8; PUBLIC_KEY_COMPRESSED_SIZE]> {
        let encoded = self.encoded(true)?;
        let mut out = [0u8; PUBLIC_KEY_COMPRESSED_SIZE];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }

    /// 65-byte uncompressed SEC1 encoding
    pub fn to_uncompressed(&self) -> ZkpResult<[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]> {
        let encoded = self.encoded(false)?;
        let mut out = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }

    /// Affine `x` coordinate and `y` parity
    pub fn to_x(&self) -> ZkpResult<([u8; 32], bool)> {
        if self.is_identity() {
            return Err(ZkpError::IdentityPoint);
        }
        let affine = self.0.to_affine();
        Ok((affine.x().into(), bool::from(affine.y_is_odd())))
    }

    /// Serialize as a Pedersen commitment
    pub fn to_commitment_bytes(&self) -> ZkpResult<[u8; COMMITMENT_SIZE]> {
        let encoded = self.encoded(false)?;
        let mut out = [0u8; COMMITMENT_SIZE];
        out[0] = if self.has_quad_y()? { 0x08 } else { 0x09 };
        out[1..].copy_from_slice(&encoded.as_bytes()[1..33]);
        Ok(out)
    }

    /// Parse a Pedersen commitment
    pub fn from_commitment_bytes(bytes: &[u8; COMMITMENT_SIZE]) -> ZkpResult<Self> {
        let quad = match bytes[0] {
            0x08 => true,
            0x09 => false,
            prefix => {
                return Err(ZkpError::InvalidCommitment(format!("unknown prefix {prefix:#04x}")))
            }
        };
        let mut x = [0u8; 32];
        x.copy_from_slice(&bytes[1..]);
        let candidate = Self::from_x(&x, false)
            .map_err(|_| ZkpError::InvalidCommitment("x is not on the curve".to_string()))?;
        if candidate.has_quad_y()? == quad {
            Ok(candidate)
        } else {
            Ok(-candidate)
        }
    }

    /// Whether the affine `y` coordinate is a square in the base field
    pub fn has_quad_y(&self) -> ZkpResult<bool> {
        let encoded = self.encoded(false)?;
        let y = encoded
            .y()
            .ok_or_else(|| ZkpError::InvalidPoint("missing y coordinate".to_string()))?;
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(y))
            .ok_or_else(|| ZkpError::InvalidPoint("y out of range".to_string()))?;
        Ok(bool::from(y.sqrt().is_some()))
    }

    /// Perform multi-scalar multiplication
    pub fn multiscalar_mul<I, J>(scalars: I, points: J) -> Self
    where
        I: IntoIterator<Item = Scalar>,
        J: IntoIterator<Item = ProjectivePoint>,
    {
        Self(
            scalars
                .into_iter()
                .zip(points)
                .fold(ProjectivePoint::IDENTITY, |acc, (s, p)| acc + p * s),
        )
    }

    fn encoded(&self, compress: bool) -> ZkpResult<EncodedPoint> {
        if self.is_identity() {
            return Err(ZkpError::IdentityPoint);
        }
        Ok(self.0.to_affine().to_encoded_point(compress))
    }
}

/// Map arbitrary bytes onto an even-`y` curve point of unknown discrete log.
///
/// `x = SHA256(data)`, rehashed until it lies on the curve.
pub fn hash_to_point(data: &[u8]) -> GroupElement {
    let mut x: [u8; 32] = Sha256::digest(data).into();
    loop {
        if let Ok(point) = GroupElement::from_x(&x, false) {
            return point;
        }
        x = Sha256::digest(x).into();
    }
}

impl std::ops::Add for GroupElement {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for GroupElement {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<Scalar> for GroupElement {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar)
    }
}

impl std::ops::Neg for GroupElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::ops::AddAssign for GroupElement {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for GroupElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + p)
    }
}

impl From<ProjectivePoint> for GroupElement {
    fn from(point: ProjectivePoint) -> Self {
        Self(point)
    }
}

impl From<GroupElement> for ProjectivePoint {
    fn from(element: GroupElement) -> Self {
        element.0
    }
}
