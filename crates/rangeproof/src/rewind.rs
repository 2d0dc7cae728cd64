//! Value, blind and message recovery from range proofs
//!
//! The nonce holder can replay every signing attempt. At each ring position
//! the replayed value equals the published response, except at the signer's
//! position where the response is `k + x*e` and at the message slot of ring
//! 0. Solving `x = (s - k) / e` and checking `x*G` against the ring's keys
//! recovers each digit and its blind.

use crate::borromean::ring_public_keys;
use crate::proof::{DecodedProof, RangeParams};
use crate::prover::{draw_responses, message_slot, signing_rng};
use crate::verifier::check;
use crate::{RangeProof, RangeProofConfig};
use k256::Scalar;
use pedersen::Commitment;
use zeroize::Zeroizing;
use zkp_core::{
    generator_g, generator_h, random_scalar, scalar_to_bytes, GroupElement, ProofInfo, ZkpResult,
    PROOF_MSG_SIZE,
};

/// Recovers the data embedded in range proofs by their nonce holder
#[derive(Debug, Clone, Default)]
pub struct RangeRewinder {
    config: RangeProofConfig,
}

impl RangeRewinder {
    /// Create a rewinder; `max_attempts` must match the prover's
    pub fn new(config: RangeProofConfig) -> Self {
        Self { config }
    }

    /// Verify `proof` and recover its value, blind and message with `nonce`.
    ///
    /// Never fails on untrusted input: an invalid proof or a nonce that does
    /// not match gives an unsuccessful `ProofInfo` with zeroed data.
    pub fn rewind(
        &self,
        commit: &Commitment,
        proof: &RangeProof,
        nonce: &[u8; 32],
    ) -> ZkpResult<ProofInfo> {
        let decoded = match DecodedProof::parse(proof) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::debug!(%err, "range proof rewind on malformed proof");
                return Ok(ProofInfo::failed());
            }
        };
        let Some(challenges) = check(commit, &decoded)? else {
            return Ok(ProofInfo::failed());
        };
        let keys = ring_public_keys(&decoded.params, &commit.to_point()?, &decoded.ring_commits)?;

        let params = &decoded.params;
        let positions = params.positions();
        for attempt in 0..self.config.max_attempts {
            let mut rng = signing_rng(nonce, commit, &decoded.header, attempt);
            for _ in 1..params.rings() {
                let _ = random_scalar(&mut rng);
            }
            let replayed = Zeroizing::new(draw_responses(&mut rng, params).concat());

            // Only the signer slots and the message slot may differ
            let matches = decoded
                .s
                .iter()
                .flatten()
                .zip(replayed.iter())
                .filter(|(a, b)| a == b)
                .count();
            if matches + params.rings() + 1 < positions {
                continue;
            }

            let mut offset = 0;
            let mut nonces = Vec::with_capacity(params.rings());
            for ring in 0..params.rings() {
                let size = params.ring_size(ring);
                nonces.push(&replayed[offset..offset + size]);
                offset += size;
            }

            if let Some(info) = recover(commit, &decoded, &keys, &challenges, &nonces)? {
                tracing::trace!(attempt, "rewound range proof");
                return Ok(info);
            }
        }

        tracing::debug!("range proof rewind nonce mismatch");
        Ok(ProofInfo::failed())
    }
}

fn recover(
    commit: &Commitment,
    decoded: &DecodedProof,
    keys: &[Vec<GroupElement>],
    challenges: &[Vec<Scalar>],
    nonces: &[&[Scalar]],
) -> ZkpResult<Option<ProofInfo>> {
    let params: &RangeParams = &decoded.params;
    let g = generator_g();

    let mut digits = Vec::with_capacity(params.rings());
    let mut blind = Zeroizing::new(Scalar::ZERO);
    for ring in 0..params.rings() {
        let mut found = None;
        for j in 0..params.ring_size(ring) {
            let s = decoded.s[ring][j];
            let k = nonces[ring][j];
            if s == k {
                continue;
            }
            let Some(e_inv) = Option::<Scalar>::from(challenges[ring][j].invert()) else {
                continue;
            };
            let x = Zeroizing::new((s - k) * e_inv);
            if g * *x == keys[ring][j] {
                found = Some((j, x));
                break;
            }
        }
        let Some((digit, x)) = found else {
            return Ok(None);
        };
        digits.push(digit);
        *blind += *x;
    }

    let message = match message_slot(params, digits[0]) {
        Some(slot) => {
            let embedded = scalar_to_bytes(&(decoded.s[0][slot] - nonces[0][slot]));
            if embedded[..32 - PROOF_MSG_SIZE].iter().any(|b| *b != 0) {
                return Ok(None);
            }
            embedded[32 - PROOF_MSG_SIZE..].to_vec()
        }
        None => Vec::new(),
    };

    let digits_value = digits
        .iter()
        .enumerate()
        .fold(0u128, |acc, (i, d)| acc + ((*d as u128) << (2 * i)));
    let value = u128::from(params.min) + digits_value * u128::from(params.scale());
    let Ok(value) = u64::try_from(value) else {
        return Ok(None);
    };

    let reopened = g * *blind + generator_h()? * Scalar::from(value);
    if reopened != commit.to_point()? {
        return Ok(None);
    }

    Ok(Some(ProofInfo::rewound(
        value,
        scalar_to_bytes(&blind),
        message,
        (params.min, params.max),
        params.exp,
        params.mantissa,
    )))
}
