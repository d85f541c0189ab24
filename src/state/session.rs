//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is an opaque string kept in `localStorage` under
//! [`SESSION_TOKEN_KEY`]. Presence is the only authentication signal; the
//! login page writes it and the header's logout action clears it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "ID";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

/// Backing store for the session token.
pub trait SessionStore: Send + Sync {
    /// Read the stored token, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying storage cannot be read.
    fn read_token(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying storage rejects the write.
    fn write_token(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying storage rejects the removal.
    fn clear_token(&self) -> Result<(), StorageError>;
}

/// Browser `localStorage` store. Looks the storage object up on every call
/// so the struct itself stays `Send + Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl SessionStore for BrowserSessionStore {
    fn read_token(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(SESSION_TOKEN_KEY)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn write_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(SESSION_TOKEN_KEY, token)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("dropping token of {} bytes: no browser storage", token.len());
            Err(StorageError::Unavailable)
        }
    }

    fn clear_token(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(SESSION_TOKEN_KEY)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StorageError> {
        self.token
            .lock()
            .map_err(|_| StorageError::Access("session store lock poisoned".to_owned()))
    }
}

impl SessionStore for MemorySessionStore {
    fn read_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot()?.clone())
    }

    fn write_token(&self, token: &str) -> Result<(), StorageError> {
        *self.slot()? = Some(token.to_owned());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}
