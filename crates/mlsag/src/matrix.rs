//! Row-major public key matrix shared by prepare, generate and verify

use serde::{Deserialize, Serialize};
use zkp_core::{
    GroupElement, ZkpError, ZkpResult, MAX_MLSAG_ROWS, PUBLIC_KEY_COMPRESSED_SIZE,
};

/// Shape of an MLSAG ring: `n_cols` ring members, each with `n_rows - 1`
/// linkable keys and one commitment-row key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub n_rows: usize,
    pub n_cols: usize,
}

impl Dimensions {
    /// Validate a shape: at least one linkable row plus the commitment row,
    /// at most `MAX_MLSAG_ROWS` rows, at least one column
    pub fn new(n_rows: usize, n_cols: usize) -> ZkpResult<Self> {
        if n_rows < 2 || n_rows > MAX_MLSAG_ROWS {
            return Err(ZkpError::InvalidParameters(format!(
                "MLSAG needs 2..={MAX_MLSAG_ROWS} rows, got {n_rows}"
            )));
        }
        if n_cols == 0 {
            return Err(ZkpError::InvalidParameters(
                "MLSAG needs at least one column".to_string(),
            ));
        }
        Ok(Self { n_rows, n_cols })
    }

    /// Total number of cells
    pub fn cells(&self) -> usize {
        self.n_rows * self.n_cols
    }

    /// Rows that carry a key image
    pub fn linkable_rows(&self) -> usize {
        self.n_rows - 1
    }

    /// The balancing row filled in by prepare
    pub fn commitment_row(&self) -> usize {
        self.n_rows - 1
    }

    /// Flat index of `(row, col)`: `col + row * n_cols`
    pub fn index(&self, row: usize, col: usize) -> ZkpResult<usize> {
        if row >= self.n_rows {
            return Err(ZkpError::IndexOutOfBounds {
                index: row,
                len: self.n_rows,
            });
        }
        if col >= self.n_cols {
            return Err(ZkpError::IndexOutOfBounds {
                index: col,
                len: self.n_cols,
            });
        }
        Ok(col + row * self.n_cols)
    }
}

/// `n_rows x n_cols` matrix of 33-byte compressed points.
///
/// An all-zero cell stands for the point at infinity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlsagMatrix {
    dims: Dimensions,
    data: Vec<u8>,
}

impl MlsagMatrix {
    /// An all-zero matrix of the given shape
    pub fn new(n_rows: usize, n_cols: usize) -> ZkpResult<Self> {
        let dims = Dimensions::new(n_rows, n_cols)?;
        Ok(Self {
            dims,
            data: vec![0u8; dims.cells() * PUBLIC_KEY_COMPRESSED_SIZE],
        })
    }

    /// Wrap a flat row-major buffer
    pub fn from_bytes(n_rows: usize, n_cols: usize, bytes: &[u8]) -> ZkpResult<Self> {
        let dims = Dimensions::new(n_rows, n_cols)?;
        let expected = dims.cells() * PUBLIC_KEY_COMPRESSED_SIZE;
        if bytes.len() != expected {
            return Err(ZkpError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            dims,
            data: bytes.to_vec(),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn n_rows(&self) -> usize {
        self.dims.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.dims.n_cols
    }

    /// Flat row-major encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn range(&self, row: usize, col: usize) -> ZkpResult<std::ops::Range<usize>> {
        let start = self.dims.index(row, col)? * PUBLIC_KEY_COMPRESSED_SIZE;
        let end = start + PUBLIC_KEY_COMPRESSED_SIZE;
        if end > self.data.len() {
            return Err(ZkpError::InvalidLength {
                expected: self.dims.cells() * PUBLIC_KEY_COMPRESSED_SIZE,
                actual: self.data.len(),
            });
        }
        Ok(start..end)
    }

    /// Raw bytes of cell `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> ZkpResult<&[u8; PUBLIC_KEY_COMPRESSED_SIZE]> {
        let range = self.range(row, col)?;
        self.data[range]
            .try_into()
            .map_err(|_| ZkpError::IndexOutOfBounds { index: row, len: self.dims.n_rows })
    }

    /// Overwrite cell `(row, col)`
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        bytes: &[u8; PUBLIC_KEY_COMPRESSED_SIZE],
    ) -> ZkpResult<()> {
        let range = self.range(row, col)?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Parse cell `(row, col)` as a compressed public key.
    ///
    /// Only `0x02`/`0x03` encodings are accepted; an all-zero cell is
    /// `IdentityPoint`.
    pub fn point(&self, row: usize, col: usize) -> ZkpResult<GroupElement> {
        let cell = self.cell(row, col)?;
        if cell.iter().all(|b| *b == 0) {
            return Err(ZkpError::IdentityPoint);
        }
        if cell[0] != 0x02 && cell[0] != 0x03 {
            return Err(ZkpError::InvalidPoint(format!(
                "cell ({row}, {col}) has prefix {:#04x}",
                cell[0]
            )));
        }
        GroupElement::from_sec1(cell)
    }

    /// Store `point` compressed, or all zeros for the identity
    pub fn set_point(&mut self, row: usize, col: usize, point: &GroupElement) -> ZkpResult<()> {
        let bytes = if point.is_identity() {
            [0u8; PUBLIC_KEY_COMPRESSED_SIZE]
        } else {
            point.to_compressed()?
        };
        self.set_cell(row, col, &bytes)
    }
}
