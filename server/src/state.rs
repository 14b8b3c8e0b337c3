//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user data; it only shares the backend client.

use std::sync::Arc;

use crate::upstream::ResearchBackend;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<ResearchBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: ResearchBackend) -> Self {
        Self { backend: Arc::new(backend) }
    }
}
