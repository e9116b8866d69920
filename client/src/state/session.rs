//! Session context holding the single bearer credential.
//!
//! ARCHITECTURE
//! ============
//! One `Session` is created per process and cloned into the gateway and
//! anything else that needs the credential. Clones share storage and
//! lifecycle state, so a 401 observed by any caller is visible to all.
//!
//! LIFECYCLE
//! =========
//! `Anonymous` --set--> `Authenticated` --expire--> `Expired` --set--> ...
//! `clear` (logout) always returns to `Anonymous`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::storage::{StorageError, TokenStorage};

/// Fixed storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No credential and no rejected credential.
    Anonymous,
    /// A credential is stored.
    Authenticated,
    /// The server rejected the last credential; it has been discarded.
    Expired,
}

#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    storage: Arc<dyn TokenStorage>,
    key: String,
    expired: AtomicBool,
}

impl Session {
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self::with_key(storage, TOKEN_KEY)
    }

    #[must_use]
    pub fn with_key(storage: Arc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionInner { storage, key: key.into(), expired: AtomicBool::new(false) }),
        }
    }

    /// Store `token`, overwriting any previous credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be written.
    pub fn set(&self, token: &str) -> Result<(), StorageError> {
        self.inner.storage.set_item(&self.inner.key, token)?;
        self.inner.expired.store(false, Ordering::SeqCst);
        tracing::debug!("session credential stored");
        Ok(())
    }

    /// Current credential, if any. No shape or expiry validation.
    ///
    /// Nothing is returned after `expire` until the next `set`, even if the
    /// rejected token could not be removed from storage. A storage read
    /// failure is logged and reported as absence, which makes the gateway
    /// fail with `Unauthenticated` rather than send a bad header.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        if self.inner.expired.load(Ordering::SeqCst) {
            return None;
        }
        match self.inner.storage.get_item(&self.inner.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "session storage read failed");
                None
            }
        }
    }

    /// Remove the credential (logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.inner.storage.remove_item(&self.inner.key)?;
        self.inner.expired.store(false, Ordering::SeqCst);
        tracing::debug!("session credential cleared");
        Ok(())
    }

    /// Discard the credential after the server rejected it.
    ///
    /// Never fails: the expired flag is set first and hides the token from
    /// `get`, so a storage removal failure cannot bring it back.
    pub fn expire(&self) {
        self.inner.expired.store(true, Ordering::SeqCst);
        if let Err(e) = self.inner.storage.remove_item(&self.inner.key) {
            tracing::error!(error = %e, "failed to remove expired credential");
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.get().is_some() {
            SessionState::Authenticated
        } else if self.inner.expired.load(Ordering::SeqCst) {
            SessionState::Expired
        } else {
            SessionState::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.inner.key)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
