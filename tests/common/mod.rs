//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use chaum_pedersen_modp::{ConstantsProvider, GroupParameters, SecureRng};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Only logs from the library are shown. Subsequent calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("chaum_pedersen_modp=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// The embedded 1024-bit group with the fixed second generator.
pub fn modp_params() -> GroupParameters {
    ConstantsProvider::generate().expect("embedded constants decode")
}

/// The embedded 1024-bit group with a freshly derived second generator.
pub fn random_modp_params() -> GroupParameters {
    ConstantsProvider::generate_with_rng(&mut SecureRng::new()).expect("embedded constants decode")
}
