//! Application-level error type shared by bootstrap, API and page code.
//!
//! ERROR HANDLING
//! ==============
//! Everything that can fail at runtime returns `Result<_, AppError>` so pages
//! can render a message instead of aborting the WASM module.

use crate::state::session::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("mount anchor `#{0}` not found in document")]
    MissingAnchor(String),
    #[error("no browser document available")]
    NoDocument,
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("response error: {0}")]
    Parse(String),
    #[error("not available outside the browser")]
    Unavailable,
    #[error("{0}")]
    Validation(String),
}
