//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the root container the page orchestrates; `papers`, `chat`,
//! and `query` are its focused parts. `ui` holds presentation preferences.

pub mod chat;
pub mod papers;
pub mod query;
pub mod session;
pub mod ui;
