//! HTTP client for the research backend.
//!
//! DESIGN
//! ======
//! The host relays the browser's search and chat calls to the backend and
//! parses replies into the shared `client::net::types` DTOs, so a malformed
//! backend reply is caught here instead of in the browser. Failures keep
//! enough detail for logs and map onto a gateway status for the caller.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;

use std::time::Duration;

use axum::http::StatusCode;
use client::net::types::{ChatRequest, ChatResponse, SearchRequest, SearchResponse};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::UpstreamTimeouts;

/// Errors produced while talking to the research backend.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The backend base URL cannot carry path segments.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend did not answer within the request timeout.
    #[error("backend request timed out")]
    Timeout,

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Status { status: u16, body: String },

    /// The backend reply body did not match the expected schema.
    #[error("backend response parse failed: {0}")]
    Parse(String),
}

impl UpstreamError {
    /// HTTP status the host answers with for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpClientBuild(_) | Self::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Request(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Status { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
        }
    }
}

pub struct ResearchBackend {
    http: reqwest::Client,
    base_url: Url,
}

impl ResearchBackend {
    /// Build a backend client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is unusable or the HTTP client fails to build.
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Relay a paper search for `topic`.
    pub async fn search(&self, topic: &str, body: &SearchRequest) -> Result<SearchResponse, UpstreamError> {
        let url = self.endpoint(&["api", "research", topic])?;
        self.send(self.http.post(url).json(body)).await
    }

    /// Relay a chat message about `topic`.
    pub async fn chat(&self, topic: &str, body: &ChatRequest) -> Result<ChatResponse, UpstreamError> {
        let url = self.endpoint(&["api", "chat", topic])?;
        self.send(self.http.post(url).json(body)).await
    }

    /// Fetch the backend's own health report.
    pub async fn health(&self) -> Result<serde_json::Value, UpstreamError> {
        let url = self.endpoint(&["health"])?;
        self.send(self.http.get(url)).await
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<R: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<R, UpstreamError> {
        let response = request.send().await.map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(classify_send_error)?;
        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

fn classify_send_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() { UpstreamError::Timeout } else { UpstreamError::Request(err.to_string()) }
}
