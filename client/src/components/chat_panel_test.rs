use super::*;

#[test]
fn enter_without_shift_submits() {
    assert!(submits_on_key("Enter", false));
}

#[test]
fn shift_enter_and_other_keys_do_not_submit() {
    assert!(!submits_on_key("Enter", true));
    assert!(!submits_on_key("a", false));
    assert!(!submits_on_key("Tab", false));
}

#[test]
fn can_send_requires_text_and_idle() {
    assert!(can_send("hello", false));
    assert!(!can_send("hello", true));
    assert!(!can_send("   ", false));
    assert!(!can_send("", false));
}

#[test]
fn submit_draft_clears_only_accepted_sends() {
    let mut sent = Vec::new();
    assert!(submit_draft("hello", false, |text| {
        sent.push(text);
        true
    }));
    assert_eq!(sent, vec!["hello".to_owned()]);

    assert!(!submit_draft("what about GNNs?", false, |_| false));
}

#[test]
fn submit_draft_skips_send_when_not_allowed() {
    let mut called = false;
    assert!(!submit_draft("  ", false, |_| {
        called = true;
        true
    }));
    assert!(!submit_draft("hello", true, |_| {
        called = true;
        true
    }));
    assert!(!called);
}
