use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{CommitmentPair, ProofTranscript, Transcript};
use crate::primitives::rng::random_below;
use crate::GroupParameters;

/// Verifier for the Chaum-Pedersen zero-knowledge protocol.
///
/// Validates proofs of discrete logarithm equality. A rejected proof is an
/// expected outcome and is reported as `false`, never as an error.
#[derive(Clone, Debug)]
pub struct Verifier {
    params: GroupParameters,
}

impl Verifier {
    /// Creates a new verifier over the given parameters.
    pub fn new(params: GroupParameters) -> Self {
        Self { params }
    }

    /// Returns the group parameters.
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Interactive protocol: draws a fresh challenge uniformly from `[0, q)`.
    pub fn challenge<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        random_below(rng, self.params.q())
    }

    /// Checks `r1 = alpha^s * y1^c` and `r2 = beta^s * y2^c` (mod p).
    ///
    /// Both equalities must hold. Inputs outside their domains (`c` or `s`
    /// not below `q`, elements not in `[1, p)`) fail the proof.
    pub fn verify(
        &self,
        r1: &BigUint,
        r2: &BigUint,
        y1: &BigUint,
        y2: &BigUint,
        c: &BigUint,
        s: &BigUint,
    ) -> bool {
        if !self.params.is_scalar(c) || !self.params.is_scalar(s) {
            debug!("rejecting proof: challenge or response out of range");
            return false;
        }
        if ![r1, r2, y1, y2].iter().all(|e| self.params.is_element(e)) {
            debug!("rejecting proof: group element out of range");
            return false;
        }

        let p = self.params.p();

        // cond1: r1 == (alpha^s * y1^c) (mod p)
        let cond1 = *r1 == (self.params.alpha().modpow(s, p) * y1.modpow(c, p)) % p;

        // cond2: r2 == (beta^s * y2^c) (mod p)
        let cond2 = *r2 == (self.params.beta().modpow(s, p) * y2.modpow(c, p)) % p;

        if !(cond1 && cond2) {
            debug!(cond1, cond2, "rejecting proof: verification equation failed");
        }
        cond1 && cond2
    }

    /// Verifies a transcript against the statement `(y1, y2)`.
    pub fn verify_transcript(&self, statement: &CommitmentPair, proof: &ProofTranscript) -> bool {
        self.verify(
            proof.r1(),
            proof.r2(),
            statement.p1(),
            statement.p2(),
            proof.c(),
            proof.s(),
        )
    }

    /// Verifies a non-interactive proof.
    ///
    /// The transcript must carry the same context the prover used. The
    /// challenge is recomputed and must match the one in the proof.
    pub fn verify_proof(
        &self,
        statement: &CommitmentPair,
        proof: &ProofTranscript,
        transcript: &mut Transcript,
    ) -> bool {
        transcript.append_parameters(&self.params);
        transcript.append_statement(statement);
        transcript.append_commitment(proof.commitment());
        let expected = transcript.challenge_scalar(self.params.q());

        if &expected != proof.c() {
            debug!("rejecting proof: challenge does not match transcript");
            return false;
        }
        self.verify_transcript(statement, proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Prover, SecureRng};

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn accepts_toy_proof() {
        let verifier = Verifier::new(GroupParameters::toy());
        assert!(verifier.verify(&n(8), &n(4), &n(2), &n(3), &n(4), &n(5)));
    }

    #[test]
    fn rejects_forged_secret() {
        let params = GroupParameters::toy();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params);

        let forged_s = prover.solve(&n(7), &n(4), &n(7)).unwrap();
        assert!(!verifier.verify(&n(8), &n(4), &n(2), &n(3), &n(4), &forged_s));
    }

    #[test]
    fn one_failing_equation_fails_everything() {
        let verifier = Verifier::new(GroupParameters::toy());
        // Correct r1, wrong r2.
        assert!(!verifier.verify(&n(8), &n(5), &n(2), &n(3), &n(4), &n(5)));
        // Wrong r1, correct r2.
        assert!(!verifier.verify(&n(9), &n(4), &n(2), &n(3), &n(4), &n(5)));
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        let verifier = Verifier::new(GroupParameters::toy());
        // s + q is congruent but outside [0, q).
        assert!(!verifier.verify(&n(8), &n(4), &n(2), &n(3), &n(4), &n(16)));
        assert!(!verifier.verify(&n(8), &n(4), &n(2), &n(3), &n(15), &n(5)));
        assert!(!verifier.verify(&n(31), &n(4), &n(2), &n(3), &n(4), &n(5)));
        assert!(!verifier.verify(&n(8), &n(4), &n(0), &n(3), &n(4), &n(5)));
    }

    #[test]
    fn interactive_round() {
        let mut rng = SecureRng::new();
        let params = GroupParameters::toy();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params);

        let x = n(6);
        let statement = prover.compute_pair(&x);
        let (commitment, nonce) = prover.commit(&mut rng);
        let c = verifier.challenge(&mut rng);
        let s = prover.respond(nonce, &c, &x).unwrap();

        let proof = ProofTranscript::new(commitment, c, s);
        assert!(verifier.verify_transcript(&statement, &proof));
    }

    #[test]
    fn non_interactive_round() {
        let mut rng = SecureRng::new();
        let params = GroupParameters::toy();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params);

        let x = n(3);
        let statement = prover.compute_pair(&x);
        let proof = prover.prove(&mut rng, &x, &mut Transcript::new()).unwrap();
        assert!(verifier.verify_proof(&statement, &proof, &mut Transcript::new()));
    }
}
