//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns persistence of the token; `auth` is the handle the rest of
//! the app depends on, so storage can be swapped out in tests.

pub mod auth;
pub mod session;
