//! Relay handlers for the research backend endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are logged with their detail and answered with the
//! mapped status plus a `{ "detail": ... }` body. Backend error bodies are
//! never forwarded to the browser.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use client::net::types::{ChatRequest, SearchRequest};

use crate::state::AppState;
use crate::upstream::UpstreamError;

/// `POST /api/research/{topic}`
pub async fn search(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Json(body): Json<SearchRequest>,
) -> Response {
    match state.backend.search(&topic, &body).await {
        Ok(resp) => {
            tracing::info!(%topic, papers = resp.papers.len(), "research search relayed");
            Json(resp).into_response()
        }
        Err(e) => upstream_failure("research", &topic, e),
    }
}

/// `POST /api/chat/{topic}`
pub async fn chat(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Json(body): Json<ChatRequest>,
) -> Response {
    match state.backend.chat(&topic, &body).await {
        Ok(resp) => {
            tracing::info!(%topic, status = %resp.status, "chat reply relayed");
            Json(resp).into_response()
        }
        Err(e) => upstream_failure("chat", &topic, e),
    }
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Response {
    match state.backend.health().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "backend health check failed");
            let body = serde_json::json!({ "status": "unhealthy", "error": e.to_string() });
            (e.status_code(), Json(body)).into_response()
        }
    }
}

fn upstream_failure(call: &str, topic: &str, err: UpstreamError) -> Response {
    match &err {
        UpstreamError::Status { status, body } => {
            tracing::warn!(call, %topic, status, body = %body, "backend rejected request");
        }
        other => tracing::warn!(call, %topic, error = %other, "backend request failed"),
    }
    let body = serde_json::json!({ "detail": err.to_string() });
    (err.status_code(), Json(body)).into_response()
}
