//! Inner product proof: one `(L, R)` pair per halving round plus the folded scalars

use k256::Scalar;
use zkp_core::{GroupElement, ZkpError, ZkpResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerProductProof {
    /// Left cross terms, `log2(n)` of them
    pub l_vec: Vec<GroupElement>,
    pub r_vec: Vec<GroupElement>,
    /// The fully folded `a` and `b`
    pub a: Scalar,
    pub b: Scalar,
}

impl InnerProductProof {
    pub fn new(l_vec: Vec<GroupElement>, r_vec: Vec<GroupElement>, a: Scalar, b: Scalar) -> Self {
        Self { l_vec, r_vec, a, b }
    }

    pub fn num_rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Reject unequal round counts and identity cross terms
    pub fn validate_structure(&self) -> ZkpResult<()> {
        if self.l_vec.len() != self.r_vec.len() {
            return Err(ZkpError::InvalidProof(format!(
                "{} L terms but {} R terms",
                self.l_vec.len(),
                self.r_vec.len()
            )));
        }
        if self.l_vec.iter().chain(self.r_vec.iter()).any(|p| p.is_identity()) {
            return Err(ZkpError::InvalidProof("L or R is the point at infinity".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_structure() {
        let g = GroupElement::generator();
        let proof = InnerProductProof::new(vec![g, g], vec![g], Scalar::ONE, Scalar::ONE);
        assert!(proof.validate_structure().is_err());

        let proof = InnerProductProof::new(vec![g], vec![GroupElement::identity()], Scalar::ONE, Scalar::ONE);
        assert!(proof.validate_structure().is_err());

        let proof = InnerProductProof::new(vec![g], vec![g], Scalar::ONE, Scalar::ONE);
        assert!(proof.validate_structure().is_ok());
        assert_eq!(proof.num_rounds(), 1);
    }
}
