use super::*;

#[test]
fn research_endpoint_formats_expected_path() {
    assert_eq!(research_endpoint("transformers"), "/api/research/transformers");
}

#[test]
fn research_endpoint_encodes_topic_as_one_segment() {
    assert_eq!(
        research_endpoint("graph neural nets/GNN?"),
        "/api/research/graph%20neural%20nets%2FGNN%3F"
    );
}

#[test]
fn chat_endpoint_formats_expected_path() {
    assert_eq!(chat_endpoint("large language models"), "/api/chat/large%20language%20models");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("/api/chat/x", 503), "/api/chat/x failed: 503");
}

#[test]
fn api_error_display_is_user_facing_text() {
    assert_eq!(ApiError::Search.to_string(), "Failed to fetch papers. Please try again.");
    assert_eq!(ApiError::Chat.to_string(), "Failed to send message. Please try again.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_generically_outside_the_browser() {
    let search = block_on_ready(search_papers("t", 10, 5));
    assert_eq!(search, Err(ApiError::Search));
    let chat = block_on_ready(chat_with_assistant("t", "hello"));
    assert_eq!(chat, Err(ApiError::Chat));
}

/// Polls a future that never suspends to completion.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}
