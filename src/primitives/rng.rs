//! Cryptographically secure random number generation.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library. Entropy failures
/// abort inside `OsRng`; there is no deterministic fallback.
#[derive(Clone, Copy, Debug)]
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Draws a scalar uniformly from `[0, bound)`.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn random_below<R: RngCore + CryptoRng>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

/// Draws a scalar uniformly from `[low, high)`.
///
/// # Panics
///
/// Panics if `low >= high`.
pub fn random_in_range<R: RngCore + CryptoRng>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> BigUint {
    rng.gen_biguint_range(low, high)
}

/// Draws a non-zero scalar uniformly from `[1, bound)`.
pub fn random_nonzero_below<R: RngCore + CryptoRng>(rng: &mut R, bound: &BigUint) -> BigUint {
    random_in_range(rng, &BigUint::one(), bound)
}
