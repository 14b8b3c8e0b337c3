//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the research session so a new
//! search or a cleared transcript never touches them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI preferences shared across the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}
