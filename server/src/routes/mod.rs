//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the relay API endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Compiled WASM/CSS assets are
//! served from the site root's `/pkg` directory.

pub mod research;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Relay endpoints called by the browser client.
///
/// Same-origin only; no CORS headers are emitted.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/research/{topic}", post(research::search))
        .route("/api/chat/{topic}", post(research::chat))
        .route("/api/health", get(research::health))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host: API routes + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
