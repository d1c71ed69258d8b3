//! Core primitives for the Chaum-Pedersen protocol.
//!
//! - **group**: validated public group parameters
//! - **constants**: the embedded 1024-bit group
//! - **encoding**: big-endian hex codec for big integers
//! - **rng**: secure randomness and uniform scalar sampling

/// Embedded group constants.
pub mod constants;
/// Hex encoding helpers.
pub mod encoding;
/// Group parameters.
pub mod group;
/// Cryptographically secure random number generation.
pub mod rng;

pub use constants::ConstantsProvider;
pub use group::GroupParameters;
pub use rng::SecureRng;
