//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per named route. Access control is not repeated here; the
//! navigation gate only mounts a page once the guard has allowed it.

pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
