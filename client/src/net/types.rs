//! Wire DTOs shared by the browser client and the SSR host.
//!
//! DESIGN
//! ======
//! These types mirror the research backend's JSON payloads so the host can
//! relay them without reshaping and the client can render them directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A research paper as returned by the search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,
    /// Author names in publication order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication date label (e.g. `"2024-03-01"`).
    #[serde(default)]
    pub published: String,
    /// External link to the paper (usually a PDF).
    #[serde(default)]
    pub url: String,
    /// Paper abstract, when the backend has one.
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Local file path on the backend. Never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Body of `POST /api/research/{topic}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub topic: String,
    pub max_results: u32,
    pub years: u32,
}

/// Reply of `POST /api/research/{topic}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub papers: Vec<Paper>,
    #[serde(default)]
    pub total_papers: usize,
}

/// Body of `POST /api/chat/{topic}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply of `POST /api/chat/{topic}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: String,
    pub response: String,
}

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    #[default]
    User,
    Assistant,
}

/// A single chat transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::User }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::Assistant }
    }
}
