//! Commitment balancing row
//!
//! For ring member `j` the last matrix row becomes
//!
//! ```text
//! M[n_rows-1][j] = sum_i C_in[i][j] - sum_k C_out[k]
//! ```
//!
//! For the real member the values cancel and the cell is `blind_sum * G`,
//! so signing that row with the blind sum proves the transaction balances.

use crate::MlsagMatrix;
use pedersen::Commitment;
use zeroize::Zeroizing;
use zkp_core::{scalar_from_bytes, scalar_sum, scalar_to_bytes, GroupElement, ZkpError, ZkpResult};

/// Result of [`prepare`]
pub struct Prepared {
    /// The matrix with its commitment row filled in
    pub matrix: MlsagMatrix,
    /// Secret key of the real member's commitment-row cell
    pub blind_sum: Zeroizing<[u8; 32]>,
}

/// Fill the commitment row of `matrix` and compute the blind sum.
///
/// `inputs` holds one commitment per linkable cell, indexed like the matrix
/// (`col + row * n_cols`). `blinds` is either empty, giving a zero blind
/// sum, or the real member's input blinds followed by the blinds of the
/// first `n_blinded` outputs.
///
/// A column whose inputs exactly cancel the outputs gets an all-zero
/// commitment cell; signing and verification read it as the identity.
pub fn prepare(
    mut matrix: MlsagMatrix,
    inputs: &[Commitment],
    outputs: &[Commitment],
    blinds: &[[u8; 32]],
    n_outs: usize,
    n_blinded: usize,
) -> ZkpResult<Prepared> {
    let dims = matrix.dimensions();
    let n_ins = dims.linkable_rows();

    if n_outs == 0 {
        return Err(ZkpError::InvalidParameters(
            "at least one output commitment is required".to_string(),
        ));
    }
    if outputs.len() != n_outs {
        return Err(ZkpError::VectorLengthMismatch {
            expected: n_outs,
            actual: outputs.len(),
        });
    }
    if n_blinded > n_outs {
        return Err(ZkpError::InvalidParameters(format!(
            "{n_blinded} blinded outputs but only {n_outs} outputs"
        )));
    }
    if inputs.len() != n_ins * dims.n_cols {
        return Err(ZkpError::VectorLengthMismatch {
            expected: n_ins * dims.n_cols,
            actual: inputs.len(),
        });
    }
    if !blinds.is_empty() && blinds.len() != n_ins + n_blinded {
        return Err(ZkpError::VectorLengthMismatch {
            expected: n_ins + n_blinded,
            actual: blinds.len(),
        });
    }

    let mut outputs_total = GroupElement::identity();
    for c in outputs {
        outputs_total += c.to_point()?;
    }

    let row = dims.commitment_row();
    for col in 0..dims.n_cols {
        let mut total = -outputs_total;
        for input_row in 0..n_ins {
            total += inputs[dims.index(input_row, col)?].to_point()?;
        }
        matrix.set_point(row, col, &total)?;
    }

    let blind_sum = if blinds.is_empty() {
        Zeroizing::new([0u8; 32])
    } else {
        let mut parsed = Zeroizing::new(Vec::with_capacity(blinds.len()));
        for b in blinds {
            parsed.push(scalar_from_bytes(b)?);
        }
        let sum = Zeroizing::new(scalar_sum(&parsed[..n_ins], &parsed[n_ins..]));
        Zeroizing::new(scalar_to_bytes(&sum))
    };

    tracing::trace!(
        n_rows = dims.n_rows,
        n_cols = dims.n_cols,
        n_outs,
        n_blinded,
        "prepared MLSAG commitment row"
    );
    Ok(Prepared { matrix, blind_sum })
}
