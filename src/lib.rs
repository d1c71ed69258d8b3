//! Chaum-Pedersen zero-knowledge proofs of discrete-log equality over `Z*_p`.
//!
//! A prover convinces a verifier that it knows `x` with `y1 = alpha^x mod p`
//! and `y2 = beta^x mod p`, without revealing `x`.
//!
//! # Example
//!
//! ```rust
//! use chaum_pedersen_modp::{ConstantsProvider, Prover, SecureRng, Verifier};
//! use chaum_pedersen_modp::primitives::rng::random_below;
//!
//! let params = ConstantsProvider::generate().unwrap();
//! let prover = Prover::new(params.clone());
//! let verifier = Verifier::new(params.clone());
//! let mut rng = SecureRng::new();
//!
//! let x = random_below(&mut rng, params.q());
//! let key = prover.compute_pair(&x);
//!
//! let (commitment, nonce) = prover.commit(&mut rng);
//! let c = verifier.challenge(&mut rng);
//! let s = prover.respond(nonce, &c, &x).unwrap();
//!
//! assert!(verifier.verify(commitment.p1(), commitment.p2(), key.p1(), key.p2(), &c, &s));
//! ```

/// Age-threshold claims.
pub mod age;
/// Password authentication use-case.
pub mod auth;
/// Shell configuration.
pub mod config;
/// Error types.
pub mod error;
/// Group parameters, constants and randomness.
pub mod primitives;
/// Prover, verifier and transcripts.
pub mod protocol;
/// Console helpers for the bundled binaries.
pub mod shell;

pub use error::{Error, Result};
pub use primitives::{ConstantsProvider, GroupParameters, SecureRng};
pub use protocol::{CommitmentPair, Nonce, ProofTranscript, Prover, Transcript, Verifier};
