//! Scalar vector helpers for the inner product and range arguments

use crate::{ZkpError, ZkpResult};
use k256::Scalar;

fn check_lengths(a: &[Scalar], b: &[Scalar]) -> ZkpResult<()> {
    if a.len() != b.len() {
        return Err(ZkpError::VectorLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// `[1, x, x^2, ..., x^(n-1)]`
pub fn scalar_powers(x: &Scalar, n: usize) -> Vec<Scalar> {
    std::iter::successors(Some(Scalar::ONE), |p| Some(p * x))
        .take(n)
        .collect()
}

/// Sum of the first `n` powers of `x`
pub fn sum_of_powers(x: &Scalar, n: usize) -> Scalar {
    scalar_powers(x, n).iter().sum()
}

/// `<a, b>`; the vectors must have equal length
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> ZkpResult<Scalar> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Element-wise `a ∘ b`
pub fn hadamard_product(a: &[Scalar], b: &[Scalar]) -> ZkpResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

pub fn vector_add(a: &[Scalar], b: &[Scalar]) -> ZkpResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

pub fn vector_scale(v: &[Scalar], k: &Scalar) -> Vec<Scalar> {
    v.iter().map(|x| x * k).collect()
}

/// Little-endian bit decomposition of a value
pub fn bit_decomposition(value: u64, bits: usize) -> Vec<Scalar> {
    (0..bits)
        .map(|i| {
            if i < 64 && (value >> i) & 1 == 1 {
                Scalar::ONE
            } else {
                Scalar::ZERO
            }
        })
        .collect()
}

pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}
