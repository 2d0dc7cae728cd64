//! MLSAG generation and verification
//!
//! Every column `j` hashes, after the preimage, for each row `k`:
//!
//! ```text
//! L = s[k][j]*G + c_j*P[k][j]
//! R = s[k][j]*Hp(P[k][j]) + c_j*I[k]      (linkable rows only)
//! c_{j+1} = SHA256(preimage || P[k][j] || L || R || ...)
//! ```
//!
//! The signer's column opens with `alpha*G`, `alpha*Hp(P)` and closes the
//! ring with `s = alpha - c*sk`. The signature publishes the challenge
//! entering column 0.

use crate::key_image::key_hash_point;
use crate::{MlsagMatrix, MlsagSignature};
use k256::Scalar;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};
use zkp_core::{
    generator_g, random_scalar, scalar_from_bytes, scalar_to_bytes, secret_key_from_bytes,
    GroupElement, ZkpError, ZkpResult,
};

/// Parsed public data of a ring
struct Ring<'a> {
    matrix: &'a MlsagMatrix,
    preimage: &'a [u8; 32],
    keys: Vec<GroupElement>,
    key_hashes: Vec<GroupElement>,
}

impl<'a> Ring<'a> {
    fn new(matrix: &'a MlsagMatrix, preimage: &'a [u8; 32]) -> ZkpResult<Self> {
        let dims = matrix.dimensions();
        let mut keys = Vec::with_capacity(dims.cells());
        let mut key_hashes = Vec::with_capacity(dims.linkable_rows() * dims.n_cols);
        for row in 0..dims.n_rows {
            for col in 0..dims.n_cols {
                // A decoy whose inputs exactly cancel the outputs leaves the
                // identity in the commitment row
                let key = match matrix.point(row, col) {
                    Err(ZkpError::IdentityPoint) if row == dims.commitment_row() => {
                        GroupElement::identity()
                    }
                    other => other?,
                };
                keys.push(key);
                if row < dims.linkable_rows() {
                    key_hashes.push(key_hash_point(matrix.cell(row, col)?));
                }
            }
        }
        Ok(Self {
            matrix,
            preimage,
            keys,
            key_hashes,
        })
    }

    fn key(&self, row: usize, col: usize) -> ZkpResult<GroupElement> {
        Ok(self.keys[self.matrix.dimensions().index(row, col)?])
    }

    fn key_hash(&self, row: usize, col: usize) -> ZkpResult<GroupElement> {
        Ok(self.key_hashes[self.matrix.dimensions().index(row, col)?])
    }

    /// Hash one column's `(L, R)` pairs into the next challenge
    fn column_challenge(
        &self,
        col: usize,
        points: &[(GroupElement, Option<GroupElement>)],
    ) -> ZkpResult<Scalar> {
        let mut hasher = Sha256::new();
        hasher.update(self.preimage);
        for (row, (l, r)) in points.iter().enumerate() {
            hasher.update(self.matrix.cell(row, col)?);
            hasher.update(l.to_compressed()?);
            if let Some(r) = r {
                hasher.update(r.to_compressed()?);
            }
        }
        let digest: [u8; 32] = hasher.finalize().into();
        let c = scalar_from_bytes(&digest)?;
        if bool::from(c.is_zero()) {
            return Err(ZkpError::InvalidScalar("zero challenge".to_string()));
        }
        Ok(c)
    }

    /// Challenge after a column with responses `s` entered with challenge `c`
    fn step(
        &self,
        col: usize,
        s: &[Scalar],
        c: &Scalar,
        images: &[GroupElement],
    ) -> ZkpResult<Scalar> {
        let g = generator_g();
        let mut points = Vec::with_capacity(s.len());
        for (row, s) in s.iter().enumerate() {
            let l = g * *s + self.key(row, col)? * *c;
            let r = match images.get(row) {
                Some(image) => Some(self.key_hash(row, col)? * *s + *image * *c),
                None => None,
            };
            points.push((l, r));
        }
        self.column_challenge(col, &points)
    }
}

fn signing_rng(nonce: &[u8; 32], preimage: &[u8; 32], matrix: &MlsagMatrix) -> ChaCha20Rng {
    let mut hasher = Sha256::new();
    hasher.update(b"secp256k1-zkp/mlsag");
    hasher.update(nonce);
    hasher.update(preimage);
    hasher.update(matrix.as_bytes());
    let mut seed: [u8; 32] = hasher.finalize().into();
    let rng = ChaCha20Rng::from_seed(seed);
    seed.zeroize();
    rng
}

/// Sign `preimage` as ring member `signer` of `matrix`.
///
/// `secret_keys` holds one key per row: the linkable keys followed by the
/// blind sum from prepare. Each must match the signer's matrix cell.
/// Signing is deterministic in `nonce`.
pub fn generate(
    nonce: &[u8; 32],
    preimage: &[u8; 32],
    signer: usize,
    secret_keys: &[[u8; 32]],
    matrix: &MlsagMatrix,
) -> ZkpResult<MlsagSignature> {
    let dims = matrix.dimensions();
    if signer >= dims.n_cols {
        return Err(ZkpError::IndexOutOfBounds {
            index: signer,
            len: dims.n_cols,
        });
    }
    if secret_keys.len() != dims.n_rows {
        return Err(ZkpError::VectorLengthMismatch {
            expected: dims.n_rows,
            actual: secret_keys.len(),
        });
    }

    let g = generator_g();
    let mut sks = Zeroizing::new(Vec::with_capacity(dims.n_rows));
    for (row, bytes) in secret_keys.iter().enumerate() {
        let sk = secret_key_from_bytes(bytes)?;
        let matches = matrix.point(row, signer).map(|pk| pk == g * sk).unwrap_or(false);
        if !matches {
            return Err(ZkpError::KeyMismatch { row });
        }
        sks.push(sk);
    }

    let ring = Ring::new(matrix, preimage)?;
    let images: Vec<GroupElement> = (0..dims.linkable_rows())
        .map(|row| Ok(ring.key_hash(row, signer)? * sks[row]))
        .collect::<ZkpResult<_>>()?;

    let mut rng = signing_rng(nonce, preimage, matrix);
    let mut alphas = Zeroizing::new(Vec::with_capacity(dims.n_rows));
    let mut opening = Vec::with_capacity(dims.n_rows);
    for row in 0..dims.n_rows {
        let alpha = random_scalar(&mut rng);
        let r = if row < dims.linkable_rows() {
            Some(ring.key_hash(row, signer)? * alpha)
        } else {
            None
        };
        opening.push((g * alpha, r));
        alphas.push(alpha);
    }

    let mut responses = vec![Scalar::ZERO; dims.cells()];
    let mut c0 = Scalar::ZERO;
    let mut c = ring.column_challenge(signer, &opening)?;
    let mut col = (signer + 1) % dims.n_cols;
    if col == 0 {
        c0 = c;
    }
    while col != signer {
        let mut s = Vec::with_capacity(dims.n_rows);
        for row in 0..dims.n_rows {
            let value = random_scalar(&mut rng);
            responses[dims.index(row, col)?] = value;
            s.push(value);
        }
        c = ring.step(col, &s, &c, &images)?;
        col = (col + 1) % dims.n_cols;
        if col == 0 {
            c0 = c;
        }
    }

    for row in 0..dims.n_rows {
        responses[dims.index(row, signer)?] = alphas[row] - c * sks[row];
    }

    let key_images = images
        .iter()
        .map(|image| image.to_compressed())
        .collect::<ZkpResult<_>>()?;
    tracing::trace!(n_rows = dims.n_rows, n_cols = dims.n_cols, "generated MLSAG signature");
    Ok(MlsagSignature {
        dims,
        key_images,
        c0: scalar_to_bytes(&c0),
        responses: responses.iter().map(scalar_to_bytes).collect(),
    })
}

/// Verify `signature` over `preimage` and `matrix`.
///
/// Undecodable points and mismatched shapes are errors. Out-of-range
/// challenge or response bytes and a chain that does not close are
/// `Ok(false)`.
pub fn verify(
    preimage: &[u8; 32],
    matrix: &MlsagMatrix,
    signature: &MlsagSignature,
) -> ZkpResult<bool> {
    let dims = matrix.dimensions();
    if signature.dims != dims {
        return Err(ZkpError::InvalidParameters(format!(
            "signature is for a {}x{} ring, matrix is {}x{}",
            signature.dims.n_rows, signature.dims.n_cols, dims.n_rows, dims.n_cols
        )));
    }
    if signature.key_images.len() != dims.linkable_rows() {
        return Err(ZkpError::VectorLengthMismatch {
            expected: dims.linkable_rows(),
            actual: signature.key_images.len(),
        });
    }
    if signature.responses.len() != dims.cells() {
        return Err(ZkpError::VectorLengthMismatch {
            expected: dims.cells(),
            actual: signature.responses.len(),
        });
    }

    let ring = Ring::new(matrix, preimage)?;
    let images = signature
        .key_images
        .iter()
        .map(|image| GroupElement::from_sec1(image))
        .collect::<ZkpResult<Vec<_>>>()?;
    let Ok(c0) = scalar_from_bytes(&signature.c0) else {
        tracing::debug!("MLSAG challenge is not a canonical scalar");
        return Ok(false);
    };

    let mut c = c0;
    for col in 0..dims.n_cols {
        let mut s = Vec::with_capacity(dims.n_rows);
        for row in 0..dims.n_rows {
            let Ok(response) = scalar_from_bytes(signature.response(row, col)?) else {
                tracing::debug!(row, col, "MLSAG response is not a canonical scalar");
                return Ok(false);
            };
            s.push(response);
        }
        c = ring.step(col, &s, &c, &images)?;
    }

    let closed = c == c0;
    if !closed {
        tracing::debug!(n_rows = dims.n_rows, n_cols = dims.n_cols, "MLSAG ring does not close");
    }
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{key_image, prepare};
    use rand::{Rng, RngCore};

    const COIN: u64 = 1_000_000;

    struct Transaction {
        matrix: MlsagMatrix,
        secret_keys: Vec<[u8; 32]>,
        signer: usize,
    }

    fn random_key<R: RngCore>(rng: &mut R) -> ([u8; 32], [u8; 33]) {
        let mut sk = [0u8; 32];
        loop {
            rng.fill_bytes(&mut sk);
            if let Ok(s) = secret_key_from_bytes(&sk) {
                return (sk, (generator_g() * s).to_compressed().unwrap());
            }
        }
    }

    fn random_blind<R: RngCore>(rng: &mut R) -> [u8; 32] {
        random_key(rng).0
    }

    /// One real input of 45.69 spent into outputs of 5.69 and 40, hidden
    /// among `n_cols - 1` decoys
    fn transaction(n_cols: usize, n_ins: usize) -> Transaction {
        let mut rng = rand::thread_rng();
        let n_rows = n_ins + 1;
        let signer = rng.gen_range(0..n_cols);

        let out_blinds = [random_blind(&mut rng), random_blind(&mut rng)];
        let outputs = [
            pedersen::commit(5_690_000, &out_blinds[0]).unwrap(),
            pedersen::commit(40 * COIN, &out_blinds[1]).unwrap(),
        ];

        let mut matrix = MlsagMatrix::new(n_rows, n_cols).unwrap();
        let mut inputs = Vec::with_capacity(n_ins * n_cols);
        let mut secret_keys = Vec::new();
        let mut in_blinds = Vec::new();
        for row in 0..n_ins {
            for col in 0..n_cols {
                let (sk, pk) = random_key(&mut rng);
                matrix.set_cell(row, col, &pk).unwrap();
                let blind = random_blind(&mut rng);
                let value = if col == signer {
                    secret_keys.push(sk);
                    in_blinds.push(blind);
                    if row == 0 { 45_690_000 } else { 0 }
                } else {
                    rng.gen_range(0..500 * COIN)
                };
                inputs.push(pedersen::commit(value, &blind).unwrap());
            }
        }

        let blinds: Vec<[u8; 32]> = in_blinds.into_iter().chain(out_blinds).collect();
        let prepared = prepare(matrix, &inputs, &outputs, &blinds, 2, 2).unwrap();
        secret_keys.push(*prepared.blind_sum);

        Transaction {
            matrix: prepared.matrix,
            secret_keys,
            signer,
        }
    }

    #[test]
    fn test_generate_verify() {
        for n_cols in [1, 2, 5, 11] {
            let tx = transaction(n_cols, 1);
            let preimage = [0x5au8; 32];
            let sig = generate(&[7u8; 32], &preimage, tx.signer, &tx.secret_keys, &tx.matrix)
                .unwrap();
            assert!(verify(&preimage, &tx.matrix, &sig).unwrap(), "n_cols = {n_cols}");
        }
    }

    #[test]
    fn test_multiple_inputs() {
        let tx = transaction(4, 3);
        let preimage = [1u8; 32];
        let sig =
            generate(&[2u8; 32], &preimage, tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        assert_eq!(sig.key_images().len(), 3);
        assert!(verify(&preimage, &tx.matrix, &sig).unwrap());
    }

    #[test]
    fn test_bad_preimage_or_c0_fails() {
        let tx = transaction(6, 1);
        let preimage = [0x33u8; 32];
        let sig =
            generate(&[9u8; 32], &preimage, tx.signer, &tx.secret_keys, &tx.matrix).unwrap();

        let mut other = preimage;
        other[0] ^= 0x01;
        assert!(!verify(&other, &tx.matrix, &sig).unwrap());

        let mut tampered = sig.clone();
        tampered.c0[31] ^= 0x01;
        assert!(!verify(&preimage, &tx.matrix, &tampered).unwrap());

        let mut tampered = sig;
        tampered.responses[0][31] ^= 0x01;
        assert!(!verify(&preimage, &tx.matrix, &tampered).unwrap());
    }

    #[test]
    fn test_out_of_range_scalars_fail() {
        let tx = transaction(3, 1);
        let preimage = [0x44u8; 32];
        let sig =
            generate(&[6u8; 32], &preimage, tx.signer, &tx.secret_keys, &tx.matrix).unwrap();

        let mut tampered = sig.clone();
        tampered.c0 = [0xff; 32];
        assert_eq!(verify(&preimage, &tx.matrix, &tampered), Ok(false));

        let mut tampered = sig;
        tampered.responses[2][0] = 0xff;
        tampered.responses[2][1..].fill(0xff);
        assert_eq!(verify(&preimage, &tx.matrix, &tampered), Ok(false));
    }

    #[test]
    fn test_cancelling_decoy_column() {
        let mut rng = rand::thread_rng();
        let out_blinds = [random_blind(&mut rng), random_blind(&mut rng)];
        let outputs = [
            pedersen::commit(5_690_000, &out_blinds[0]).unwrap(),
            pedersen::commit(40 * COIN, &out_blinds[1]).unwrap(),
        ];
        // Column 0 spends exactly the outputs' value and blind
        let decoy_blind = pedersen::blind_sum(&out_blinds, &[]).unwrap();
        let in_blind = random_blind(&mut rng);

        let mut matrix = MlsagMatrix::new(2, 2).unwrap();
        let (_, decoy_pk) = random_key(&mut rng);
        let (sk, pk) = random_key(&mut rng);
        matrix.set_cell(0, 0, &decoy_pk).unwrap();
        matrix.set_cell(0, 1, &pk).unwrap();
        let inputs = [
            pedersen::commit(45_690_000, &decoy_blind).unwrap(),
            pedersen::commit(45_690_000, &in_blind).unwrap(),
        ];
        let blinds = [in_blind, out_blinds[0], out_blinds[1]];
        let prepared = prepare(matrix, &inputs, &outputs, &blinds, 2, 2).unwrap();
        assert_eq!(prepared.matrix.cell(1, 0).unwrap(), &[0u8; 33]);

        let secret_keys = [sk, *prepared.blind_sum];
        let preimage = [0x21u8; 32];
        let sig = generate(&[3u8; 32], &preimage, 1, &secret_keys, &prepared.matrix).unwrap();
        assert!(verify(&preimage, &prepared.matrix, &sig).unwrap());
    }

    #[test]
    fn test_key_image_links_signatures() {
        let tx = transaction(3, 1);
        let a = generate(&[1u8; 32], &[1u8; 32], tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        let b = generate(&[2u8; 32], &[2u8; 32], tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        assert_eq!(a.key_images(), b.key_images());
        assert_ne!(a.c0(), b.c0());

        let pk = tx.matrix.cell(0, tx.signer).unwrap();
        assert_eq!(a.key_images()[0], key_image(&tx.secret_keys[0], pk).unwrap());
    }

    #[test]
    fn test_deterministic_in_nonce() {
        let tx = transaction(3, 1);
        let a = generate(&[4u8; 32], &[8u8; 32], tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        let b = generate(&[4u8; 32], &[8u8; 32], tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wire_round_trip_verifies() {
        let tx = transaction(4, 2);
        let preimage = [3u8; 32];
        let sig =
            generate(&[5u8; 32], &preimage, tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        let decoded = MlsagSignature::from_bytes(3, 4, &sig.to_bytes()).unwrap();
        assert!(verify(&preimage, &tx.matrix, &decoded).unwrap());
    }

    #[test]
    fn test_signer_out_of_range() {
        let tx = transaction(3, 1);
        assert_eq!(
            generate(&[1u8; 32], &[1u8; 32], 3, &tx.secret_keys, &tx.matrix),
            Err(ZkpError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_key_mismatch() {
        let tx = transaction(3, 1);
        let wrong_column = (tx.signer + 1) % 3;
        assert_eq!(
            generate(&[1u8; 32], &[1u8; 32], wrong_column, &tx.secret_keys, &tx.matrix),
            Err(ZkpError::KeyMismatch { row: 0 })
        );

        let mut keys = tx.secret_keys.clone();
        keys[1] = [0x77u8; 32];
        assert_eq!(
            generate(&[1u8; 32], &[1u8; 32], tx.signer, &keys, &tx.matrix),
            Err(ZkpError::KeyMismatch { row: 1 })
        );
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        let tx = transaction(3, 1);
        let sig =
            generate(&[1u8; 32], &[1u8; 32], tx.signer, &tx.secret_keys, &tx.matrix).unwrap();
        let other = transaction(4, 1);
        assert!(verify(&[1u8; 32], &other.matrix, &sig).is_err());
    }
}
