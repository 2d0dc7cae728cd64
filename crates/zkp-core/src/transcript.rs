//! Transcript management for Fiat-Shamir heuristic

use crate::{reduce_scalar, scalar_to_bytes, GroupElement, ZkpResult};
use k256::Scalar;
use merlin::Transcript;

/// Extension trait for Transcript to add secp256k1-specific methods
pub trait TranscriptProtocol {
    /// Append a group element to the transcript in compressed form
    fn append_point(&mut self, label: &'static [u8], point: &GroupElement) -> ZkpResult<()>;

    /// Append a scalar to the transcript
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Append a vector of scalars to the transcript
    fn append_scalar_vector(&mut self, label: &'static [u8], scalars: &[Scalar]);

    /// Append a length-prefixed byte string
    fn append_bytes(&mut self, label: &'static [u8], bytes: &[u8]);

    /// Challenge scalar from transcript, never zero
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn append_point(&mut self, label: &'static [u8], point: &GroupElement) -> ZkpResult<()> {
        self.append_message(label, &point.to_compressed()?);
        Ok(())
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, &scalar_to_bytes(scalar));
    }

    fn append_scalar_vector(&mut self, label: &'static [u8], scalars: &[Scalar]) {
        self.append_u64(b"vector_length", scalars.len() as u64);
        self.append_message(label, b"vector_start");
        for scalar in scalars.iter() {
            self.append_message(b"element", &scalar_to_bytes(scalar));
        }
        self.append_message(label, b"vector_end");
    }

    fn append_bytes(&mut self, label: &'static [u8], bytes: &[u8]) {
        self.append_u64(b"length", bytes.len() as u64);
        self.append_message(label, bytes);
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 32];
        loop {
            self.challenge_bytes(label, &mut buf);
            let challenge = reduce_scalar(&buf);
            if !bool::from(challenge.is_zero()) {
                return challenge;
            }
        }
    }
}

/// Create a new transcript with domain separation
pub fn zkp_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"secp256k1-zkp");
    transcript.append_message(b"domain", domain_label);
    transcript
}
