//! Networking modules for the research HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the search and chat calls, and `types` defines the shared
//! wire schema also used by the SSR host when relaying to the backend.

pub mod api;
pub mod types;
