//! Authentication context threaded through navigation and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard never touches `localStorage` directly; it asks an
//! [`AuthContext`], which wraps whichever [`SessionStore`] the bootstrap
//! installed. Tests swap in a `MemorySessionStore` or a failing store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::session::{SessionStore, StorageError};

/// Shared handle to the session store, provided via Leptos context.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext").finish_non_exhaustive()
    }
}

impl AuthContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Current session token.
    ///
    /// A storage failure is logged and reported as "no token", so a browser
    /// with storage disabled behaves like a signed-out one instead of
    /// blocking every navigation.
    pub fn token(&self) -> Option<String> {
        match self.store.read_token() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("session token unreadable, treating as signed out: {e}");
                None
            }
        }
    }

    /// Whether a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued session token.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure.
    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.store.write_token(token)?;
        log::info!("session started");
        Ok(())
    }

    /// Drop the session token.
    ///
    /// # Errors
    ///
    /// Propagates the store's removal failure.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear_token()?;
        log::info!("session ended");
        Ok(())
    }
}
