//! Protocol gadgets for Chaum-Pedersen proofs.
//!
//! This module contains the values exchanged by the protocol: commitment
//! pairs, single-use nonces and proof transcripts.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::primitives::encoding::serde_hex;
use crate::{Error, Result};

/// Protocol version for serialization compatibility.
const PROTOCOL_VERSION: u8 = 1;

/// Upper bound on the encoded length of any single value.
const MAX_VALUE_SIZE: usize = 1024;

/// A pair `(alpha^e mod p, beta^e mod p)` for some exponent `e`.
///
/// Used both as the long-term public key `(y1, y2)` and as the per-session
/// commitment `(r1, r2)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentPair {
    #[serde(with = "serde_hex")]
    p1: BigUint,
    #[serde(with = "serde_hex")]
    p2: BigUint,
}

impl CommitmentPair {
    /// Creates a pair from its two components.
    pub fn new(p1: BigUint, p2: BigUint) -> Self {
        Self { p1, p2 }
    }

    /// Returns the component computed from `alpha`.
    pub fn p1(&self) -> &BigUint {
        &self.p1
    }

    /// Returns the component computed from `beta`.
    pub fn p2(&self) -> &BigUint {
        &self.p2
    }

    /// Splits the pair into its components.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.p1, self.p2)
    }
}

/// Secret nonce used in the commitment phase.
///
/// Not `Clone`: [`Prover::respond`](crate::Prover::respond) consumes it, so a
/// nonce answers exactly one challenge.
#[derive(Debug)]
pub struct Nonce {
    k: BigUint,
}

impl Nonce {
    pub(crate) fn new(k: BigUint) -> Self {
        Self { k }
    }

    pub(crate) fn into_inner(self) -> BigUint {
        self.k
    }
}

/// Values exchanged during one proof instance: `(r1, r2, c, s)`.
///
/// # Serialization
///
/// Transcripts serialize through serde with hex-encoded integers, or to a
/// compact binary form via [`ProofTranscript::to_bytes`]. The binary format
/// is versioned for forward compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofTranscript {
    commitment: CommitmentPair,
    #[serde(with = "serde_hex")]
    c: BigUint,
    #[serde(with = "serde_hex")]
    s: BigUint,
}

impl ProofTranscript {
    /// Creates a transcript from a commitment, challenge and response.
    pub fn new(commitment: CommitmentPair, c: BigUint, s: BigUint) -> Self {
        Self { commitment, c, s }
    }

    /// Returns the commitment `(r1, r2)`.
    pub fn commitment(&self) -> &CommitmentPair {
        &self.commitment
    }

    /// Returns `r1`.
    pub fn r1(&self) -> &BigUint {
        self.commitment.p1()
    }

    /// Returns `r2`.
    pub fn r2(&self) -> &BigUint {
        self.commitment.p2()
    }

    /// Returns the challenge `c`.
    pub fn c(&self) -> &BigUint {
        &self.c
    }

    /// Returns the response `s`.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Serializes the transcript to bytes.
    ///
    /// Format: `[version (1 byte)]` then, for each of `r1, r2, c, s`,
    /// `[len (4 bytes, big-endian)][big-endian magnitude]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = vec![PROTOCOL_VERSION];
        for value in [self.r1(), self.r2(), &self.c, &self.s] {
            let bytes = value.to_bytes_be();
            result.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            result.extend_from_slice(&bytes);
        }
        result
    }

    /// Deserializes a transcript from bytes.
    ///
    /// Values are decoded structurally only; range checks happen during
    /// verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (&version, mut rest) = bytes
            .split_first()
            .ok_or_else(|| Error::MalformedProof("empty input".to_string()))?;

        if version != PROTOCOL_VERSION {
            return Err(Error::MalformedProof(format!(
                "unsupported proof version: {version}"
            )));
        }

        let mut values = Vec::with_capacity(4);
        for label in ["r1", "r2", "c", "s"] {
            let (value, remaining) = read_value(label, rest)?;
            values.push(value);
            rest = remaining;
        }

        if !rest.is_empty() {
            return Err(Error::MalformedProof(format!(
                "{} trailing bytes",
                rest.len()
            )));
        }

        let [r1, r2, c, s]: [BigUint; 4] = values
            .try_into()
            .unwrap_or_else(|_| unreachable!("exactly four values decoded"));

        Ok(Self::new(CommitmentPair::new(r1, r2), c, s))
    }
}

fn read_value<'a>(label: &str, bytes: &'a [u8]) -> Result<(BigUint, &'a [u8])> {
    if bytes.len() < 4 {
        return Err(Error::MalformedProof(format!(
            "truncated proof: missing {label} length"
        )));
    }
    let (len_bytes, rest) = bytes.split_at(4);
    let len = u32::from_be_bytes(
        len_bytes
            .try_into()
            .unwrap_or_else(|_| unreachable!("Slice is exactly 4 bytes")),
    ) as usize;

    if len == 0 || len > MAX_VALUE_SIZE {
        return Err(Error::MalformedProof(format!("invalid {label} length: {len}")));
    }
    if rest.len() < len {
        return Err(Error::MalformedProof(format!(
            "truncated proof: incomplete {label} data"
        )));
    }

    let (value, rest) = rest.split_at(len);
    Ok((BigUint::from_bytes_be(value), rest))
}
