//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are driven by props and callbacks from the home page; only
//! input drafts and expand/collapse state live inside them.

pub mod chat_panel;
pub mod error_banner;
pub mod navbar;
pub mod papers_list;
pub mod search_bar;
