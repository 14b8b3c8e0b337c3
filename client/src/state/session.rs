//! Root session state and its request lifecycle.
//!
//! DESIGN
//! ======
//! `Session` is the single container for cross-cutting state: the active
//! topic, listed papers and selection, the chat transcript, loading flags, and
//! the error banner. It is provided to the page as one `RwSignal<Session>`.
//!
//! Every network call is split into `begin_*` (synchronous, returns a ticket)
//! and `finish_*` (applies the result). Tickets carry sequence numbers so a
//! late response can never overwrite newer state:
//! - a search result applies only if it belongs to the latest search;
//! - a chat reply applies only if the transcript was not reset meanwhile.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatResponse, Message, SearchResponse};

use super::chat::ChatState;
use super::papers::{PaperKey, PapersState};
use super::query::SearchQuery;

pub const NO_TOPIC_MESSAGE: &str = "Please search for papers first.";

/// A visible, dismissible error message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub seq: u64,
}

/// Handle for one in-flight search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: SearchQuery,
}

/// Handle for one in-flight chat request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTicket {
    pub epoch: u64,
    pub topic: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Topic of the last successful search.
    pub topic: Option<String>,
    pub papers: PapersState,
    pub chat: ChatState,
    pub searching: bool,
    pub error: Option<Banner>,
    search_seq: u64,
    banner_seq: u64,
}

impl Session {
    /// Start a search. The returned ticket supersedes any earlier one.
    pub fn begin_search(&mut self, query: SearchQuery) -> SearchTicket {
        self.search_seq += 1;
        self.searching = true;
        SearchTicket { seq: self.search_seq, query }
    }

    /// Apply a search result. Returns `false` if the ticket is stale.
    pub fn finish_search(&mut self, ticket: &SearchTicket, result: Result<SearchResponse, ApiError>) -> bool {
        if ticket.seq != self.search_seq {
            return false;
        }
        self.searching = false;
        match result {
            Ok(resp) => {
                self.papers.replace(resp.papers);
                self.topic = Some(ticket.query.topic.clone());
                self.chat.reset();
            }
            Err(err) => {
                self.show_error(err.to_string());
            }
        }
        true
    }

    /// Start a chat request for `text`.
    ///
    /// Blank text and sends while a reply is pending are ignored. Without an
    /// active topic the validation banner is shown and no ticket is issued.
    /// Otherwise the user message is appended right away.
    pub fn begin_chat(&mut self, text: &str) -> Option<ChatTicket> {
        if text.trim().is_empty() || self.chat.loading {
            return None;
        }
        let Some(topic) = self.topic.clone().filter(|t| !t.is_empty()) else {
            self.show_error(NO_TOPIC_MESSAGE);
            return None;
        };
        self.chat.messages.push(Message::user(text));
        self.chat.loading = true;
        Some(ChatTicket { epoch: self.chat.epoch, topic, message: text.to_owned() })
    }

    /// Apply a chat reply. Returns `false` if the transcript was reset since
    /// the ticket was issued.
    pub fn finish_chat(&mut self, ticket: &ChatTicket, result: Result<ChatResponse, ApiError>) -> bool {
        if ticket.epoch != self.chat.epoch {
            return false;
        }
        self.chat.loading = false;
        match result {
            Ok(resp) => self.chat.messages.push(Message::assistant(resp.response)),
            Err(err) => {
                self.show_error(err.to_string());
            }
        }
        true
    }

    /// Empty the transcript in place. Any pending reply is discarded.
    pub fn clear_chat(&mut self) {
        self.chat.reset();
    }

    pub fn toggle_selection(&mut self, key: &PaperKey) -> bool {
        self.papers.toggle(key)
    }

    /// Show `message` in the banner and return its sequence number.
    pub fn show_error(&mut self, message: impl Into<String>) -> u64 {
        self.banner_seq += 1;
        self.error = Some(Banner { message: message.into(), seq: self.banner_seq });
        self.banner_seq
    }

    /// Hide the banner if it is still the one numbered `seq`.
    pub fn dismiss_error(&mut self, seq: u64) {
        if self.error.as_ref().is_some_and(|b| b.seq == seq) {
            self.error = None;
        }
    }
}
