//! Range proof parameters and wire format
//!
//! ```text
//! flags (1) | mantissa - 1 (1, ranged proofs only) | min (8, when flagged) |
//! e0 (32) | parity | x(C_0..C_{rings-2}) (32 each) | s values (32 each)
//! ```
//!
//! The flags byte is `0x40 | exp` for a ranged proof and `0x20` is set when
//! the published minimum is non-zero. An exact-value proof has a single ring
//! of one key and no mantissa byte.

use crate::config::{RangeProofConfig, MAX_EXP, MAX_MANTISSA};
use k256::Scalar;
use zkp_core::{
    scalar_from_bytes, scalar_to_bytes, GroupElement, ProofInfo, ZkpError, ZkpResult,
    MAX_PROOF_SIZE,
};

const FLAG_RANGE: u8 = 0x40;
const FLAG_MIN: u8 = 0x20;
const EXP_MASK: u8 = 0x1f;

/// A serialized classic range proof
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeProof(Vec<u8>);

impl RangeProof {
    /// Wrap proof bytes after checking the size bound
    pub fn from_bytes(bytes: &[u8]) -> ZkpResult<Self> {
        if bytes.is_empty() || bytes.len() > MAX_PROOF_SIZE {
            return Err(ZkpError::InvalidLength {
                expected: MAX_PROOF_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Raw proof bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Owned proof bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Proof length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed proof
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Public range metadata, or an unsuccessful `ProofInfo` when the
    /// header does not decode
    pub fn info(&self) -> ProofInfo {
        match RangeParams::decode(&self.0) {
            Ok((params, _)) => ProofInfo::public(params.min, params.max, params.exp, params.mantissa),
            Err(err) => {
                tracing::debug!(%err, "undecodable range proof header");
                ProofInfo::failed()
            }
        }
    }
}

impl AsRef<[u8]> for RangeProof {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Published range of a proof
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RangeParams {
    pub exp: u8,
    pub mantissa: u8,
    pub min: u64,
    pub max: u64,
}

fn max_for(min: u64, mantissa: u8, scale: u64) -> Option<u64> {
    let span = ((1u128 << mantissa) - 1) * u128::from(scale);
    u64::try_from(u128::from(min) + span).ok()
}

impl RangeParams {
    /// Choose the published range for `value`, returning it with the digits
    /// value `(value - min) / 10^exp`
    pub fn for_value(config: &RangeProofConfig, min: u64, value: u64) -> ZkpResult<(Self, u64)> {
        config.validate()?;
        if value < min {
            return Err(ZkpError::ValueBelowMinimum { value, min });
        }

        let scale = 10u64.pow(u32::from(config.exp));
        let diff = value - min;
        let digits = diff / scale;
        // The remainder moves into the published minimum
        let min = min + diff % scale;

        let bits = (u64::BITS - digits.leading_zeros()) as u8;
        let mut mantissa = bits.max(config.min_bits);
        while mantissa > bits && max_for(min, mantissa, scale).is_none() {
            mantissa -= 1;
        }
        let max = max_for(min, mantissa, scale).ok_or_else(|| {
            ZkpError::InvalidParameters(format!(
                "value {} cannot be proven with exponent {}",
                value, config.exp
            ))
        })?;

        let exp = if mantissa == 0 { 0 } else { config.exp };
        Ok((
            Self {
                exp,
                mantissa,
                min,
                max,
            },
            digits,
        ))
    }

    /// `10^exp`
    pub fn scale(&self) -> u64 {
        10u64.pow(u32::from(self.exp))
    }

    /// Number of base-4 digit rings, one for an exact proof
    pub fn rings(&self) -> usize {
        if self.mantissa == 0 {
            1
        } else {
            (usize::from(self.mantissa) + 1) / 2
        }
    }

    /// Keys in ring `i`; the top ring holds a single bit for odd mantissas
    pub fn ring_size(&self, ring: usize) -> usize {
        if self.mantissa == 0 {
            1
        } else if ring + 1 == self.rings() && self.mantissa % 2 == 1 {
            2
        } else {
            4
        }
    }

    /// Total number of ring members
    pub fn positions(&self) -> usize {
        (0..self.rings()).map(|i| self.ring_size(i)).sum()
    }

    /// Value carried by one unit of digit `ring`: `4^ring * 10^exp`
    pub fn digit_multiplier(&self, ring: usize) -> Scalar {
        Scalar::from(1u64 << (2 * ring)) * Scalar::from(self.scale())
    }

    /// Serialized header
    pub fn encode(&self) -> Vec<u8> {
        let mut flags = 0u8;
        if self.mantissa > 0 {
            flags |= FLAG_RANGE | self.exp;
        }
        if self.min != 0 {
            flags |= FLAG_MIN;
        }
        let mut out = vec![flags];
        if self.mantissa > 0 {
            out.push(self.mantissa - 1);
        }
        if self.min != 0 {
            out.extend_from_slice(&self.min.to_be_bytes());
        }
        out
    }

    /// Parse a header, returning it with its encoded length
    pub fn decode(bytes: &[u8]) -> ZkpResult<(Self, usize)> {
        let invalid = |what: &str| ZkpError::InvalidProof(format!("range proof header: {what}"));

        let flags = *bytes.first().ok_or_else(|| invalid("empty"))?;
        if flags & 0x80 != 0 {
            return Err(invalid("reserved flag set"));
        }
        let exp = flags & EXP_MASK;
        let mut offset = 1;

        let mantissa = if flags & FLAG_RANGE != 0 {
            let byte = *bytes.get(offset).ok_or_else(|| invalid("missing mantissa"))?;
            offset += 1;
            if exp > MAX_EXP || byte >= MAX_MANTISSA {
                return Err(invalid("range out of bounds"));
            }
            byte + 1
        } else {
            if exp != 0 {
                return Err(invalid("exponent on exact proof"));
            }
            0
        };

        let min = if flags & FLAG_MIN != 0 {
            let raw: [u8; 8] = bytes
                .get(offset..offset + 8)
                .and_then(|b| b.try_into().ok())
                .ok_or_else(|| invalid("truncated minimum"))?;
            offset += 8;
            let min = u64::from_be_bytes(raw);
            if min == 0 {
                return Err(invalid("non-canonical minimum"));
            }
            min
        } else {
            0
        };

        let scale = 10u64.pow(u32::from(exp));
        let max = max_for(min, mantissa, scale).ok_or_else(|| invalid("maximum overflows"))?;
        Ok((
            Self {
                exp,
                mantissa,
                min,
                max,
            },
            offset,
        ))
    }

    fn parity_len(&self) -> usize {
        (self.rings() - 1 + 7) / 8
    }

    /// Full serialized length for a header of `header_len` bytes
    pub fn proof_len(&self, header_len: usize) -> usize {
        header_len + 32 + self.parity_len() + (self.rings() - 1) * 32 + self.positions() * 32
    }
}

/// A parsed range proof
#[derive(Debug, Clone)]
pub(crate) struct DecodedProof {
    pub params: RangeParams,
    pub header: Vec<u8>,
    pub e0: [u8; 32],
    /// Commitments of every ring but the last
    pub ring_commits: Vec<GroupElement>,
    /// Responses, one vector per ring
    pub s: Vec<Vec<Scalar>>,
}

impl DecodedProof {
    pub fn parse(proof: &RangeProof) -> ZkpResult<Self> {
        let bytes = proof.as_bytes();
        let (params, header_len) = RangeParams::decode(bytes)?;
        let expected = params.proof_len(header_len);
        if bytes.len() != expected {
            return Err(ZkpError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        let chunk = |at: usize| -> [u8; 32] {
            let mut out = [0u8; 32];
            out.copy_from_slice(&bytes[at..at + 32]);
            out
        };

        let mut offset = header_len;
        let e0 = chunk(offset);
        offset += 32;

        let stored = params.rings() - 1;
        let parity = &bytes[offset..offset + params.parity_len()];
        offset += params.parity_len();
        let mut ring_commits = Vec::with_capacity(stored);
        for i in 0..stored {
            let odd = parity[i / 8] & (1 << (i % 8)) != 0;
            let point = GroupElement::from_x(&chunk(offset), odd).map_err(|_| {
                ZkpError::InvalidProof(format!("ring commitment {i} is not on the curve"))
            })?;
            ring_commits.push(point);
            offset += 32;
        }

        let mut s = Vec::with_capacity(params.rings());
        for ring in 0..params.rings() {
            let mut responses = Vec::with_capacity(params.ring_size(ring));
            for _ in 0..params.ring_size(ring) {
                let scalar = scalar_from_bytes(&chunk(offset))
                    .map_err(|_| ZkpError::InvalidProof("response overflow".to_string()))?;
                responses.push(scalar);
                offset += 32;
            }
            s.push(responses);
        }

        Ok(Self {
            params,
            header: bytes[..header_len].to_vec(),
            e0,
            ring_commits,
            s,
        })
    }
}

/// Serialize a signed proof
pub(crate) fn encode_proof(
    header: &[u8],
    e0: &[u8; 32],
    ring_commits: &[GroupElement],
    s: &[Vec<Scalar>],
) -> ZkpResult<RangeProof> {
    let mut out = Vec::with_capacity(MAX_PROOF_SIZE);
    out.extend_from_slice(header);
    out.extend_from_slice(e0);

    let mut parity = vec![0u8; (ring_commits.len() + 7) / 8];
    let mut xs = Vec::with_capacity(ring_commits.len() * 32);
    for (i, point) in ring_commits.iter().enumerate() {
        let (x, odd) = point.to_x()?;
        if odd {
            parity[i / 8] |= 1 << (i % 8);
        }
        xs.extend_from_slice(&x);
    }
    out.extend_from_slice(&parity);
    out.extend_from_slice(&xs);

    for scalar in s.iter().flatten() {
        out.extend_from_slice(&scalar_to_bytes(scalar));
    }
    RangeProof::from_bytes(&out)
}
