//! REST helpers for the research endpoints exposed by the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that always fail, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx replies collapse into one generic
//! [`ApiError`] per call. The detail goes to the console log and is then
//! dropped; the orchestrator only ever shows the generic text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatResponse, SearchResponse};
#[cfg(feature = "hydrate")]
use super::types::{ChatRequest, SearchRequest};

/// Generic failure of one API call. `Display` is the user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to fetch papers. Please try again.")]
    Search,
    #[error("Failed to send message. Please try again.")]
    Chat,
}

#[cfg(any(test, feature = "hydrate"))]
fn research_endpoint(topic: &str) -> String {
    format!("/api/research/{}", urlencoding::encode(topic))
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(topic: &str) -> String {
    format!("/api/chat/{}", urlencoding::encode(topic))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Search papers for `topic` via `POST /api/research/{topic}`.
///
/// # Errors
///
/// Returns [`ApiError::Search`] on any transport, status, or decode failure.
pub async fn search_papers(topic: &str, max_results: u32, years: u32) -> Result<SearchResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = SearchRequest { topic: topic.to_owned(), max_results, years };
        post_json(&research_endpoint(topic), &body).await.map_err(|e| {
            log::warn!("search request error: {e}");
            ApiError::Search
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (topic, max_results, years);
        Err(ApiError::Search)
    }
}

/// Ask the assistant about `topic` via `POST /api/chat/{topic}`.
///
/// # Errors
///
/// Returns [`ApiError::Chat`] on any transport, status, or decode failure.
pub async fn chat_with_assistant(topic: &str, message: &str) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { message: message.to_owned() };
        post_json(&chat_endpoint(topic), &body).await.map_err(|e| {
            log::warn!("chat request error: {e}");
            ApiError::Chat
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (topic, message);
        Err(ApiError::Chat)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(endpoint: &str, body: &B) -> Result<R, String>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(endpoint, resp.status()));
    }
    resp.json::<R>().await.map_err(|e| e.to_string())
}
