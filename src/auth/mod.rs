//! Password authentication on top of the Chaum-Pedersen engine.
//!
//! Registration stores the public key `(y1, y2)` derived from the password;
//! login runs one interactive proof round against it.

/// Credential storage abstraction.
pub mod store;

use std::fmt;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

pub use store::{CredentialStore, InMemoryStore};

use crate::{GroupParameters, Prover, Result, SecureRng, Verifier};

/// Domain separation prefix for password-derived secrets.
const PASSWORD_DST: &[u8] = b"chaum-pedersen-modp-v1-password";

/// Derives the secret exponent for a password, reduced into `[0, q)`.
///
/// The username acts as a salt so equal passwords give distinct keys.
pub fn password_secret(params: &GroupParameters, username: &str, password: &str) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(PASSWORD_DST);
    hasher.update((username.len() as u64).to_be_bytes());
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    BigUint::from_bytes_be(&hasher.finalize()) % params.q()
}

/// Result of a login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The proof verified against the registered key.
    Success,
    /// The proof did not verify.
    IncorrectPassword,
    /// No key is registered for the username.
    UnknownUser,
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LoginOutcome::Success => "Login successful!",
            LoginOutcome::IncorrectPassword => "Incorrect password!",
            LoginOutcome::UnknownUser => "Username not found!",
        };
        f.write_str(message)
    }
}

/// Registers users and checks logins against an injected store.
pub struct Authenticator<S: CredentialStore> {
    prover: Prover,
    verifier: Verifier,
    store: S,
}

impl<S: CredentialStore> Authenticator<S> {
    /// Creates an authenticator over `params` backed by `store`.
    pub fn new(params: GroupParameters, store: S) -> Self {
        Self {
            prover: Prover::new(params.clone()),
            verifier: Verifier::new(params),
            store,
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns true if `username` has registered credentials.
    pub fn is_registered(&self, username: &str) -> bool {
        self.store.get(username).is_some()
    }

    /// Registers `username` with the key derived from `password`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRegistered`](crate::Error::AlreadyRegistered)
    /// if the username is taken.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let x = password_secret(self.prover.params(), username, password);
        let key = self.prover.compute_pair(&x);
        self.store.put(username, key)?;
        info!(username, "user registered");
        Ok(())
    }

    /// Runs one interactive proof round for `username`.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let Some(key) = self.store.get(username) else {
            debug!(username, "login for unknown user");
            return Ok(LoginOutcome::UnknownUser);
        };

        let mut rng = SecureRng::new();
        let x = password_secret(self.prover.params(), username, password);

        let (commitment, nonce) = self.prover.commit(&mut rng);
        let c = self.verifier.challenge(&mut rng);
        let s = self.prover.respond(nonce, &c, &x)?;

        let verified = self.verifier.verify(
            commitment.p1(),
            commitment.p2(),
            key.p1(),
            key.p2(),
            &c,
            &s,
        );

        let outcome = if verified {
            LoginOutcome::Success
        } else {
            LoginOutcome::IncorrectPassword
        };
        info!(username, ?outcome, "login attempt");
        Ok(outcome)
    }
}
