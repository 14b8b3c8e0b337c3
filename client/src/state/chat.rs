//! Chat transcript state for the research assistant panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Message;

/// Transcript plus the in-flight flag.
///
/// `epoch` advances on every reset so replies to requests issued before the
/// reset can be recognized and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub epoch: u64,
}

impl ChatState {
    /// Empty the transcript and forget any pending reply.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.epoch += 1;
    }
}
