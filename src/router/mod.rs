//! Client-side routing.
//!
//! ARCHITECTURE
//! ============
//! `routes` is the route table, `guard` the access policy, `navigator` the
//! pipeline tying them together, and `gate` the Leptos component that runs
//! the pipeline on every location change.

pub mod gate;
pub mod guard;
pub mod navigator;
pub mod routes;
