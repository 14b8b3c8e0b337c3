//! Research assistant chat panel: transcript, loading bubble, and composer.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::net::types::{Message, Sender};
use crate::util::markdown;

/// Chat panel. The draft lives here; sends and clears go to the parent.
///
/// `on_send` returns whether the message was accepted. A refused send keeps
/// the draft so the user can retry after searching.
#[component]
pub fn ChatPanel(
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(into)] loading: Signal<bool>,
    on_send: Callback<String, bool>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = loading.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_send = move || {
        if submit_draft(&draft.get(), loading.get_untracked(), |text| on_send.run(text)) {
            draft.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Research Assistant"</span>
                <button
                    class="btn chat-panel__clear"
                    type="button"
                    title="Clear chat"
                    on:click=move |_| on_clear.run(())
                >
                    "Clear chat"
                </button>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = messages.get();
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                "Start by asking a question about the research papers."
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.sender == Sender::User;
                            let is_assistant = !is_user;
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                    class:chat-panel__message--assistant=is_assistant
                                >
                                    {if is_user {
                                        view! { <div class="chat-panel__text">{msg.content}</div> }.into_any()
                                    } else {
                                        let rendered = markdown::render_html(&msg.content);
                                        view! { <div class="chat-panel__markdown" inner_html=rendered></div> }
                                            .into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="chat-panel__message chat-panel__message--assistant chat-panel__loading">
                                    "Thinking..."
                                </div>
                            }
                        })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <textarea
                    class="chat-panel__input"
                    rows="1"
                    placeholder="Type your message..."
                    node_ref=input_ref
                    disabled=move || loading.get()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    disabled=move || !can_send(&draft.get(), loading.get())
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// Enter sends; Shift+Enter inserts a newline.
fn submits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

fn can_send(draft: &str, loading: bool) -> bool {
    !draft.trim().is_empty() && !loading
}

/// Hand `draft` to `send` if it may be sent. Returns whether the draft should
/// be cleared.
fn submit_draft(draft: &str, loading: bool, send: impl FnOnce(String) -> bool) -> bool {
    can_send(draft, loading) && send(draft.to_owned())
}
