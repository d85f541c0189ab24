//! Network access to the photo-sharing service.

pub mod api;
pub mod types;
