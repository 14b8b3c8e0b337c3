use super::*;
use crate::net::types::{Paper, Sender};

// =============================================================
// Helpers
// =============================================================

fn paper(title: &str, url: &str) -> Paper {
    Paper {
        title: title.to_owned(),
        authors: vec!["Ada Lovelace".to_owned()],
        published: "2023-11-20".to_owned(),
        url: url.to_owned(),
        summary: Some("abstract".to_owned()),
        file_path: None,
    }
}

fn query(topic: &str) -> SearchQuery {
    SearchQuery { topic: topic.to_owned(), max_results: 10, years: 5 }
}

fn search_ok(papers: Vec<Paper>) -> Result<SearchResponse, ApiError> {
    let total_papers = papers.len();
    Ok(SearchResponse { status: "success".to_owned(), papers, total_papers })
}

fn chat_ok(text: &str) -> Result<ChatResponse, ApiError> {
    Ok(ChatResponse { status: "success".to_owned(), response: text.to_owned() })
}

fn searched(topic: &str, papers: Vec<Paper>) -> Session {
    let mut session = Session::default();
    let ticket = session.begin_search(query(topic));
    assert!(session.finish_search(&ticket, search_ok(papers)));
    session
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_returning_three_papers_populates_list() {
    let session = searched("transformers", vec![paper("A", "1"), paper("B", "2"), paper("C", "3")]);
    assert_eq!(session.papers.len(), 3);
    assert!(session.papers.selected_keys().is_empty());
    assert!(session.chat.messages.is_empty());
    assert_eq!(session.topic.as_deref(), Some("transformers"));
    assert!(!session.searching);
    assert!(session.error.is_none());
}

#[test]
fn begin_search_sets_searching_flag() {
    let mut session = Session::default();
    let _ticket = session.begin_search(query("t"));
    assert!(session.searching);
}

#[test]
fn successful_search_resets_topic_transcript_and_selection() {
    let mut session = searched("old", vec![paper("A", "1")]);
    let key = session.papers.items[0].key.clone();
    session.toggle_selection(&key);
    let chat = session.begin_chat("question").unwrap();
    session.finish_chat(&chat, chat_ok("answer"));

    let ticket = session.begin_search(query("new"));
    assert!(session.finish_search(&ticket, search_ok(vec![paper("A", "1")])));

    assert_eq!(session.topic.as_deref(), Some("new"));
    assert!(session.chat.messages.is_empty());
    assert!(session.papers.selected_keys().is_empty());
}

#[test]
fn failed_search_keeps_previous_results_and_shows_banner() {
    let mut session = searched("old", vec![paper("A", "1")]);
    let ticket = session.begin_search(query("new"));
    assert!(session.finish_search(&ticket, Err(ApiError::Search)));

    assert!(!session.searching);
    assert_eq!(session.topic.as_deref(), Some("old"));
    assert_eq!(session.papers.len(), 1);
    assert_eq!(
        session.error.as_ref().map(|b| b.message.as_str()),
        Some("Failed to fetch papers. Please try again.")
    );
}

#[test]
fn stale_search_result_is_dropped() {
    let mut session = Session::default();
    let first = session.begin_search(query("first"));
    let second = session.begin_search(query("second"));

    assert!(session.finish_search(&second, search_ok(vec![paper("S", "2")])));
    assert!(!session.finish_search(&first, search_ok(vec![paper("F", "1")])));

    assert_eq!(session.topic.as_deref(), Some("second"));
    assert_eq!(session.papers.items[0].paper.title, "S");
}

#[test]
fn stale_search_does_not_clear_searching_flag() {
    let mut session = Session::default();
    let first = session.begin_search(query("first"));
    let _second = session.begin_search(query("second"));
    assert!(!session.finish_search(&first, Err(ApiError::Search)));
    assert!(session.searching);
    assert!(session.error.is_none());
}

// =============================================================
// Chat
// =============================================================

#[test]
fn chat_without_topic_issues_no_ticket_and_shows_validation_error() {
    let mut session = Session::default();
    assert_eq!(session.begin_chat("hello"), None);
    assert!(session.chat.messages.is_empty());
    assert!(!session.chat.loading);
    assert_eq!(session.error.as_ref().map(|b| b.message.as_str()), Some(NO_TOPIC_MESSAGE));
}

#[test]
fn chat_with_empty_topic_string_is_rejected() {
    let mut session = Session { topic: Some(String::new()), ..Session::default() };
    assert_eq!(session.begin_chat("hello"), None);
    assert!(session.error.is_some());
}

#[test]
fn blank_chat_text_is_ignored_silently() {
    let mut session = searched("t", vec![]);
    assert_eq!(session.begin_chat("   \n"), None);
    assert!(session.chat.messages.is_empty());
    assert!(session.error.is_none());
}

#[test]
fn begin_chat_appends_user_message_optimistically() {
    let mut session = searched("transformers", vec![]);
    let ticket = session.begin_chat("hello").unwrap();
    assert_eq!(ticket.topic, "transformers");
    assert_eq!(ticket.message, "hello");
    assert!(session.chat.loading);
    assert_eq!(session.chat.messages, vec![Message::user("hello")]);
}

#[test]
fn successful_chat_appends_exactly_one_assistant_reply() {
    let mut session = searched("transformers", vec![]);
    for (question, answer) in [("q1", "a1"), ("q2", "a2")] {
        let ticket = session.begin_chat(question).unwrap();
        assert!(session.finish_chat(&ticket, chat_ok(answer)));
    }
    let senders: Vec<Sender> = session.chat.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Assistant, Sender::User, Sender::Assistant]);
    assert_eq!(session.chat.messages[3].content, "a2");
    assert!(!session.chat.loading);
}

#[test]
fn failed_chat_keeps_user_message_and_shows_banner() {
    let mut session = searched("transformers", vec![]);
    let ticket = session.begin_chat("hello").unwrap();
    assert!(session.finish_chat(&ticket, Err(ApiError::Chat)));

    assert_eq!(session.chat.messages, vec![Message::user("hello")]);
    assert!(!session.chat.loading);
    assert_eq!(
        session.error.as_ref().map(|b| b.message.as_str()),
        Some("Failed to send message. Please try again.")
    );
}

#[test]
fn second_send_while_pending_is_refused() {
    let mut session = searched("t", vec![]);
    let _ticket = session.begin_chat("first").unwrap();
    assert_eq!(session.begin_chat("second"), None);
    assert_eq!(session.chat.messages.len(), 1);
}

#[test]
fn reply_after_clear_chat_is_dropped() {
    let mut session = searched("t", vec![]);
    let ticket = session.begin_chat("hello").unwrap();
    session.clear_chat();

    assert!(!session.finish_chat(&ticket, chat_ok("late")));
    assert!(session.chat.messages.is_empty());
    assert!(!session.chat.loading);
}

#[test]
fn reply_after_new_search_is_dropped() {
    let mut session = searched("old", vec![]);
    let chat = session.begin_chat("hello").unwrap();
    let search = session.begin_search(query("new"));
    session.finish_search(&search, search_ok(vec![]));

    assert!(!session.finish_chat(&chat, Err(ApiError::Chat)));
    assert!(session.chat.messages.is_empty());
    assert!(session.error.is_none());
}

#[test]
fn clear_chat_keeps_topic_and_papers() {
    let mut session = searched("t", vec![paper("A", "1")]);
    let ticket = session.begin_chat("hello").unwrap();
    session.finish_chat(&ticket, chat_ok("hi"));
    session.clear_chat();

    assert!(session.chat.messages.is_empty());
    assert_eq!(session.topic.as_deref(), Some("t"));
    assert_eq!(session.papers.len(), 1);
    assert!(session.begin_chat("again").is_some());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_selection_twice_is_identity() {
    let mut session = searched("t", vec![paper("X", "1"), paper("Y", "2")]);
    let key = session.papers.items[1].key.clone();
    let before = session.clone();
    assert!(session.toggle_selection(&key));
    assert!(!session.toggle_selection(&key));
    assert_eq!(session, before);
}

#[test]
fn same_title_papers_do_not_share_selection() {
    let mut session = searched("t", vec![paper("X", "https://a"), paper("X", "https://b")]);
    let first = session.papers.items[0].key.clone();
    let second = session.papers.items[1].key.clone();
    session.toggle_selection(&first);
    assert!(session.papers.is_selected(&first));
    assert!(!session.papers.is_selected(&second));
}

// =============================================================
// Banner
// =============================================================

#[test]
fn dismiss_error_clears_matching_banner() {
    let mut session = Session::default();
    let seq = session.show_error("boom");
    session.dismiss_error(seq);
    assert!(session.error.is_none());
}

#[test]
fn dismiss_error_keeps_newer_banner() {
    let mut session = Session::default();
    let old = session.show_error("first");
    let new = session.show_error("second");
    assert!(new > old);

    session.dismiss_error(old);
    assert_eq!(session.error, Some(Banner { message: "second".to_owned(), seq: new }));
}
