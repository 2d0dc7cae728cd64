//! MLSAG signature container and wire format

use crate::Dimensions;
use zkp_core::{ZkpError, ZkpResult, PUBLIC_KEY_COMPRESSED_SIZE};

/// Key images, the challenge entering column 0, and one response per cell.
///
/// Wire format: `key_images (33 * (n_rows - 1)) || c0 (32) || responses
/// (32 * n_rows * n_cols)`, responses indexed like the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlsagSignature {
    pub(crate) dims: Dimensions,
    pub(crate) key_images: Vec<[u8; PUBLIC_KEY_COMPRESSED_SIZE]>,
    pub(crate) c0: [u8; 32],
    pub(crate) responses: Vec<[u8; 32]>,
}

impl MlsagSignature {
    /// Encoded size for a ring of the given shape
    pub fn encoded_len(dims: &Dimensions) -> usize {
        dims.linkable_rows() * PUBLIC_KEY_COMPRESSED_SIZE + 32 + dims.cells() * 32
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// One key image per linkable row
    pub fn key_images(&self) -> &[[u8; PUBLIC_KEY_COMPRESSED_SIZE]] {
        &self.key_images
    }

    pub fn c0(&self) -> &[u8; 32] {
        &self.c0
    }

    /// Response of cell `(row, col)`
    pub fn response(&self, row: usize, col: usize) -> ZkpResult<&[u8; 32]> {
        let index = self.dims.index(row, col)?;
        self.responses.get(index).ok_or(ZkpError::IndexOutOfBounds {
            index,
            len: self.responses.len(),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_len(&self.dims));
        for image in &self.key_images {
            out.extend_from_slice(image);
        }
        out.extend_from_slice(&self.c0);
        for s in &self.responses {
            out.extend_from_slice(s);
        }
        out
    }

    /// Split an encoded signature for a ring of `n_rows x n_cols`
    pub fn from_bytes(n_rows: usize, n_cols: usize, bytes: &[u8]) -> ZkpResult<Self> {
        let dims = Dimensions::new(n_rows, n_cols)?;
        let expected = Self::encoded_len(&dims);
        if bytes.len() != expected {
            return Err(ZkpError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        let (images, rest) = bytes.split_at(dims.linkable_rows() * PUBLIC_KEY_COMPRESSED_SIZE);
        let (c0, responses) = rest.split_at(32);
        let key_images = images
            .chunks_exact(PUBLIC_KEY_COMPRESSED_SIZE)
            .filter_map(|chunk| chunk.try_into().ok())
            .collect();
        let responses = responses
            .chunks_exact(32)
            .filter_map(|chunk| chunk.try_into().ok())
            .collect();
        let mut c0_bytes = [0u8; 32];
        c0_bytes.copy_from_slice(c0);

        Ok(Self {
            dims,
            key_images,
            c0: c0_bytes,
            responses,
        })
    }
}
