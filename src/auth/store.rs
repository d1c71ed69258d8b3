use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::{CommitmentPair, Error, Result};

/// Storage for registered public keys `(y1, y2)` keyed by username.
///
/// Implementations must make `put` atomic per username so concurrent
/// registrations cannot overwrite each other.
pub trait CredentialStore: Send + Sync {
    /// Looks up the public key registered for `username`.
    fn get(&self, username: &str) -> Option<CommitmentPair>;

    /// Registers a public key for a new username.
    ///
    /// Returns [`Error::AlreadyRegistered`] if the username is taken.
    fn put(&self, username: &str, key: CommitmentPair) -> Result<()>;
}

/// Process-local credential store, lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, CommitmentPair>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if no user is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for InMemoryStore {
    fn get(&self, username: &str) -> Option<CommitmentPair> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(username).cloned()
    }

    fn put(&self, username: &str, key: CommitmentPair) -> Result<()> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.contains_key(username) {
            return Err(Error::AlreadyRegistered(username.to_string()));
        }

        users.insert(username.to_string(), key);
        Ok(())
    }
}
