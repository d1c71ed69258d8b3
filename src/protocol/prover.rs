use num_bigint::{BigInt, BigUint, Sign};
use rand::{CryptoRng, RngCore};

use super::{CommitmentPair, Nonce, ProofTranscript, Transcript};
use crate::primitives::rng::random_below;
use crate::{Error, GroupParameters, Result};

/// Prover for the Chaum-Pedersen zero-knowledge protocol.
///
/// Demonstrates knowledge of `x` such that `y1 = alpha^x` and `y2 = beta^x`
/// without revealing `x`. Holds only the public parameters; secrets are
/// passed per call and never stored.
///
/// # Security
///
/// - Always use [`SecureRng`](crate::SecureRng) for nonces
/// - Never answer two challenges with the same nonce; [`Nonce`] is consumed
///   by [`Prover::respond`] to enforce this
/// - Bind non-interactive proofs to a context with
///   [`Transcript::append_context`]
#[derive(Clone, Debug)]
pub struct Prover {
    params: GroupParameters,
}

impl Prover {
    /// Creates a new prover over the given parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaum_pedersen_modp::{GroupParameters, Prover};
    ///
    /// let prover = Prover::new(GroupParameters::toy());
    /// ```
    pub fn new(params: GroupParameters) -> Self {
        Self { params }
    }

    /// Returns the group parameters.
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Computes `(alpha^exponent mod p, beta^exponent mod p)`.
    ///
    /// With the secret this yields the public key `(y1, y2)`; with a nonce it
    /// yields the commitment `(r1, r2)`.
    pub fn compute_pair(&self, exponent: &BigUint) -> CommitmentPair {
        let p = self.params.p();
        // p1 = alpha^e (mod p)
        let p1 = self.params.alpha().modpow(exponent, p);
        // p2 = beta^e (mod p)
        let p2 = self.params.beta().modpow(exponent, p);
        CommitmentPair::new(p1, p2)
    }

    /// Computes the response `s = (k - c * x) mod q`, always in `[0, q)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalarRange`] if the nonce `k` or challenge `c`
    /// is not below `q`. The secret `x` may be any non-negative integer.
    pub fn solve(&self, k: &BigUint, c: &BigUint, x: &BigUint) -> Result<BigUint> {
        self.ensure_scalar("nonce", k)?;
        self.ensure_scalar("challenge", c)?;

        let q = BigInt::from(self.params.q().clone());
        let k = BigInt::from(k.clone());
        let cx = BigInt::from(c * x);

        // s = ((k - c*x) mod q + q) mod q
        let s = ((k - cx) % &q + &q) % &q;
        let (sign, magnitude) = s.into_parts();
        debug_assert_ne!(sign, Sign::Minus);
        Ok(magnitude)
    }

    /// Interactive protocol: draws a fresh nonce and commits to it.
    ///
    /// Returns the commitment `(r1, r2)` and the secret nonce.
    pub fn commit<R: RngCore + CryptoRng>(&self, rng: &mut R) -> (CommitmentPair, Nonce) {
        let k = random_below(rng, self.params.q());
        (self.compute_pair(&k), Nonce::new(k))
    }

    /// Interactive protocol: answers the verifier's challenge.
    ///
    /// Consumes the nonce so it cannot be reused.
    pub fn respond(&self, nonce: Nonce, c: &BigUint, x: &BigUint) -> Result<BigUint> {
        self.solve(&nonce.into_inner(), c, x)
    }

    /// Generates a non-interactive proof for secret `x` using Fiat-Shamir.
    ///
    /// The challenge is derived from the transcript after appending the
    /// parameters, the statement `(y1, y2)` and the commitment `(r1, r2)`.
    /// Any context must already be appended by the caller.
    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        x: &BigUint,
        transcript: &mut Transcript,
    ) -> Result<ProofTranscript> {
        let statement = self.compute_pair(x);
        let (commitment, nonce) = self.commit(rng);

        transcript.append_parameters(&self.params);
        transcript.append_statement(&statement);
        transcript.append_commitment(&commitment);
        let c = transcript.challenge_scalar(self.params.q());

        let s = self.respond(nonce, &c, x)?;
        Ok(ProofTranscript::new(commitment, c, s))
    }

    fn ensure_scalar(&self, name: &str, value: &BigUint) -> Result<()> {
        if self.params.is_scalar(value) {
            Ok(())
        } else {
            Err(Error::InvalidScalarRange(format!("{name} must be below q")))
        }
    }
}
