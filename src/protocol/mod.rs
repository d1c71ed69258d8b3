/// Protocol values (commitment pairs, nonces, transcripts).
pub mod gadgets;
/// Prover implementation for generating proofs.
pub mod prover;
/// Merlin transcript wrapper for Fiat-Shamir transformation.
pub mod transcript;
/// Verifier implementation for validating proofs.
pub mod verifier;

pub use gadgets::{CommitmentPair, Nonce, ProofTranscript};
pub use prover::Prover;
pub use transcript::Transcript;
pub use verifier::Verifier;
