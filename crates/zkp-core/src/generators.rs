//! Fixed generators and the bulletproof generator vectors

use crate::{
    hash_to_point, ZkpError, ZkpResult, GroupElement, GENERATOR_H, GENERATOR_J,
};
use k256::{ProjectivePoint, Scalar};
use std::sync::{Arc, OnceLock};

/// Number of generators in the shared set: one `g_i` and one `h_i` per bit
/// of a 64-bit range proof
pub const DEFAULT_GENERATOR_COUNT: usize = 128;

const GENERATOR_DOMAIN: &[u8] = b"secp256k1-zkp/bulletproof-generator";

static SHARED: OnceLock<Arc<GeneratorSet>> = OnceLock::new();

/// Blinding generator `G`, the secp256k1 base point
pub fn generator_g() -> GroupElement {
    GroupElement::generator()
}

/// Value generator `H`
pub fn generator_h() -> ZkpResult<GroupElement> {
    GroupElement::from_sec1(&GENERATOR_H)
}

/// Switch-commitment generator `J`
pub fn generator_j() -> ZkpResult<GroupElement> {
    GroupElement::from_sec1(&GENERATOR_J)
}

/// Generator set for bulletproof operations
#[derive(Debug, Clone)]
pub struct GeneratorSet {
    /// Blinding generator G
    pub g: GroupElement,
    /// Value generator H
    pub h: GroupElement,
    /// Vector generators for the left side
    pub g_vec: Vec<ProjectivePoint>,
    /// Vector generators for the right side
    pub h_vec: Vec<ProjectivePoint>,
}

impl GeneratorSet {
    /// Derive `count` generators from the fixed seed point `G`.
    ///
    /// Generator `i` is `hash_to_point(domain || G || i)`. Even indices feed
    /// `g_vec` and odd indices `h_vec`, so every smaller set is a prefix of a
    /// larger one.
    pub fn new(count: usize) -> ZkpResult<Self> {
        if count == 0 || count % 2 != 0 {
            return Err(ZkpError::InvalidParameters(format!(
                "generator count must be even and non-zero, got {count}"
            )));
        }
        let seed = generator_g().to_compressed()?;
        let mut g_vec = Vec::with_capacity(count / 2);
        let mut h_vec = Vec::with_capacity(count / 2);
        for i in 0..count {
            let point = Self::derive(&seed, i as u32);
            if i % 2 == 0 {
                g_vec.push(point);
            } else {
                h_vec.push(point);
            }
        }
        tracing::debug!(count, "derived bulletproof generators");
        Ok(Self {
            g: generator_g(),
            h: generator_h()?,
            g_vec,
            h_vec,
        })
    }

    /// Process-wide set of `DEFAULT_GENERATOR_COUNT` generators, derived once
    pub fn shared() -> ZkpResult<Arc<Self>> {
        if let Some(set) = SHARED.get() {
            return Ok(Arc::clone(set));
        }
        // Concurrent first callers may both derive; the loser's copy is dropped.
        let set = Arc::new(Self::new(DEFAULT_GENERATOR_COUNT)?);
        Ok(Arc::clone(SHARED.get_or_init(|| set)))
    }

    fn derive(seed: &[u8], index: u32) -> ProjectivePoint {
        let mut data = Vec::with_capacity(GENERATOR_DOMAIN.len() + seed.len() + 4);
        data.extend_from_slice(GENERATOR_DOMAIN);
        data.extend_from_slice(seed);
        data.extend_from_slice(&index.to_be_bytes());
        hash_to_point(&data).0
    }

    /// Total number of derived generators
    pub fn count(&self) -> usize {
        self.g_vec.len() + self.h_vec.len()
    }

    /// Length of each generator vector
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Get a slice of the G vector generators
    pub fn g_vec(&self) -> &[ProjectivePoint] {
        &self.g_vec
    }

    /// Get a slice of the H vector generators
    pub fn h_vec(&self) -> &[ProjectivePoint] {
        &self.h_vec
    }

    /// Fail unless each vector holds at least `length` generators
    pub fn ensure_capacity(&self, length: usize) -> ZkpResult<()> {
        if self.vector_length() < length {
            return Err(ZkpError::InsufficientGenerators {
                needed: length,
                available: self.vector_length(),
            });
        }
        Ok(())
    }

    /// Compute the vector commitment `<a, g_vec> + <b, h_vec>`
    pub fn vector_commit(&self, a: &[Scalar], b: &[Scalar]) -> ZkpResult<GroupElement> {
        if a.len() != b.len() {
            return Err(ZkpError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }
        self.ensure_capacity(a.len())?;

        let scalars = a.iter().chain(b.iter()).cloned();
        let points = self.g_vec[..a.len()].iter().chain(self.h_vec[..b.len()].iter()).cloned();

        Ok(GroupElement::multiscalar_mul(scalars, points))
    }
}
