use merlin::Transcript as MerlinTranscript;
use num_bigint::BigUint;

use super::CommitmentPair;
use crate::GroupParameters;

/// Protocol label for transcript initialization.
const PROTOCOL_LABEL: &[u8] = b"Chaum-Pedersen ZKP v1.0.0";

/// Domain separation tag for protocol name.
const PROTOCOL_DST: &[u8] = b"chaum-pedersen-modp";

/// Domain separation tag for challenge generation.
const CHALLENGE_DST: &[u8] = b"challenge";

/// Number of extra bits for statistical security in challenge generation (128 bits).
const EXTRA_SECURITY_BITS: u64 = 128;

/// Transcript wrapper for Fiat-Shamir transformation.
///
/// Provides domain-separated, transcript-based challenge generation using Merlin.
pub struct Transcript(MerlinTranscript);

impl Transcript {
    /// Creates a new transcript for the Chaum-Pedersen protocol.
    pub fn new() -> Self {
        let mut transcript = MerlinTranscript::new(PROTOCOL_LABEL);
        transcript.append_message(b"protocol", PROTOCOL_DST);
        Self(transcript)
    }

    /// Appends application-specific context to prevent cross-protocol attacks.
    ///
    /// # Security
    ///
    /// Proofs made under one context do not verify under another. Use a
    /// session ID, username or purpose string.
    pub fn append_context(&mut self, context: &[u8]) {
        self.0.append_message(b"context", context);
    }

    /// Appends the full group description.
    pub fn append_parameters(&mut self, params: &GroupParameters) {
        self.0.append_message(b"p", &params.p().to_bytes_be());
        self.0.append_message(b"q", &params.q().to_bytes_be());
        self.0.append_message(b"alpha", &params.alpha().to_bytes_be());
        self.0.append_message(b"beta", &params.beta().to_bytes_be());
    }

    /// Appends the statement `(y1, y2)`.
    pub fn append_statement(&mut self, statement: &CommitmentPair) {
        self.0.append_message(b"y1", &statement.p1().to_bytes_be());
        self.0.append_message(b"y2", &statement.p2().to_bytes_be());
    }

    /// Appends the commitment `(r1, r2)`.
    pub fn append_commitment(&mut self, commitment: &CommitmentPair) {
        self.0.append_message(b"r1", &commitment.p1().to_bytes_be());
        self.0.append_message(b"r2", &commitment.p2().to_bytes_be());
    }

    /// Generates a challenge in `[0, q)`.
    ///
    /// Squeezes 128 bits beyond the size of `q` before reducing, keeping the
    /// bias of the reduction negligible.
    pub fn challenge_scalar(&mut self, q: &BigUint) -> BigUint {
        let byte_len = (q.bits() + EXTRA_SECURITY_BITS).div_ceil(8) as usize;
        let mut buf = vec![0u8; byte_len];
        self.0.challenge_bytes(CHALLENGE_DST, &mut buf);
        BigUint::from_bytes_be(&buf) % q
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
