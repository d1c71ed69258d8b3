//! Age-threshold claims proven with the Chaum-Pedersen engine.
//!
//! The prover publishes the pair for `d = age - threshold` together with a
//! non-interactive proof that it knows `d`. An age below the threshold has
//! no non-negative `d`, so no claim can be produced for it. This shows the
//! engine in use; it is not a range proof, and a dishonest prover could
//! commit to any exponent.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CommitmentPair, Error, GroupParameters, ProofTranscript, Prover, Result, Transcript, Verifier,
};

/// Age that must be reached for the default claim.
pub const ADULT_AGE: u32 = 18;

/// Parses a decimal age.
///
/// # Errors
///
/// Returns [`Error::ScalarParse`] for empty, signed, non-numeric or
/// overflowing input instead of defaulting to zero.
pub fn parse_age(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::ScalarParse(format!(
            "'{trimmed}' is not a non-negative integer"
        )));
    }
    trimmed
        .parse::<u32>()
        .map_err(|e| Error::ScalarParse(format!("'{trimmed}': {e}")))
}

/// A published claim that an age reaches `threshold`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeClaim {
    threshold: u32,
    statement: CommitmentPair,
    proof: ProofTranscript,
}

impl AgeClaim {
    /// Returns the threshold this claim is about.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the public pair for `age - threshold`.
    pub fn statement(&self) -> &CommitmentPair {
        &self.statement
    }

    /// Returns the proof of knowledge.
    pub fn proof(&self) -> &ProofTranscript {
        &self.proof
    }
}

fn claim_transcript(threshold: u32) -> Transcript {
    let mut transcript = Transcript::new();
    transcript.append_context(b"age-threshold");
    transcript.append_context(&threshold.to_be_bytes());
    transcript
}

/// Produces [`AgeClaim`]s.
pub struct AgeProver {
    prover: Prover,
}

impl AgeProver {
    /// Creates a prover over `params`.
    pub fn new(params: GroupParameters) -> Self {
        Self {
            prover: Prover::new(params),
        }
    }

    /// Proves that `age >= threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BelowThreshold`] if `age < threshold`, or
    /// [`Error::InvalidScalarRange`] if the difference is not below `q`.
    pub fn prove_over<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        age: u32,
        threshold: u32,
    ) -> Result<AgeClaim> {
        let surplus = age.checked_sub(threshold).ok_or(Error::BelowThreshold)?;
        let d = BigUint::from(surplus);
        if !self.prover.params().is_scalar(&d) {
            return Err(Error::InvalidScalarRange(
                "age surplus must be below q".to_string(),
            ));
        }

        let statement = self.prover.compute_pair(&d);
        let proof = self
            .prover
            .prove(rng, &d, &mut claim_transcript(threshold))?;

        Ok(AgeClaim {
            threshold,
            statement,
            proof,
        })
    }
}

/// Checks [`AgeClaim`]s.
pub struct AgeVerifier {
    verifier: Verifier,
}

impl AgeVerifier {
    /// Creates a verifier over `params`.
    pub fn new(params: GroupParameters) -> Self {
        Self {
            verifier: Verifier::new(params),
        }
    }

    /// Returns true if the claim's proof verifies for its threshold.
    pub fn verify(&self, claim: &AgeClaim) -> bool {
        let ok = self.verifier.verify_proof(
            &claim.statement,
            &claim.proof,
            &mut claim_transcript(claim.threshold),
        );
        debug!(threshold = claim.threshold, ok, "age claim checked");
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantsProvider, SecureRng};

    fn setup() -> (AgeProver, AgeVerifier) {
        let params = ConstantsProvider::generate().unwrap();
        (AgeProver::new(params.clone()), AgeVerifier::new(params))
    }

    #[test]
    fn parse_age_accepts_digits() {
        assert_eq!(parse_age("42").unwrap(), 42);
        assert_eq!(parse_age("  18\n").unwrap(), 18);
        assert_eq!(parse_age("0").unwrap(), 0);
    }

    #[test]
    fn parse_age_rejects_garbage() {
        for input in ["", "abc", "-3", "+3", "1.5", "99999999999"] {
            assert!(
                matches!(parse_age(input), Err(Error::ScalarParse(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn adult_claim_verifies() {
        let mut rng = SecureRng::new();
        let (prover, verifier) = setup();
        let claim = prover.prove_over(&mut rng, 30, ADULT_AGE).unwrap();
        assert_eq!(claim.threshold(), ADULT_AGE);
        assert!(verifier.verify(&claim));
    }

    #[test]
    fn exact_threshold_verifies() {
        let mut rng = SecureRng::new();
        let (prover, verifier) = setup();
        let claim = prover.prove_over(&mut rng, 18, ADULT_AGE).unwrap();
        assert!(verifier.verify(&claim));
    }

    #[test]
    fn minor_cannot_claim() {
        let mut rng = SecureRng::new();
        let (prover, _) = setup();
        assert!(matches!(
            prover.prove_over(&mut rng, 17, ADULT_AGE),
            Err(Error::BelowThreshold)
        ));
    }

    #[test]
    fn claim_bound_to_threshold() {
        let mut rng = SecureRng::new();
        let (prover, verifier) = setup();
        let mut claim = prover.prove_over(&mut rng, 30, ADULT_AGE).unwrap();
        claim.threshold = 21;
        assert!(!verifier.verify(&claim));
    }

    #[test]
    fn toy_group_surplus_out_of_range() {
        let mut rng = SecureRng::new();
        let prover = AgeProver::new(GroupParameters::toy());
        assert!(matches!(
            prover.prove_over(&mut rng, 40, ADULT_AGE),
            Err(Error::InvalidScalarRange(_))
        ));
    }
}
