//! Home page: the search, results, and chat workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the orchestrator. Children report user intent through
//! callbacks; the page turns each intent into a `Session` transition and, for
//! search and chat, a spawned API call whose result is applied through the
//! ticket returned by the transition.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::error_banner::ErrorBanner;
use crate::components::navbar::Navbar;
use crate::components::papers_list::PapersList;
use crate::components::search_bar::SearchBar;
use crate::state::papers::PaperKey;
use crate::state::query::SearchQuery;
use crate::state::session::{ChatTicket, SearchTicket, Session};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let on_search = Callback::new(move |query: SearchQuery| {
        if let Some(ticket) = session.try_update(|s| s.begin_search(query)) {
            spawn_search(session, ticket);
        }
    });

    let on_send = Callback::new(move |text: String| {
        let Some(ticket) = session.try_update(|s| s.begin_chat(&text)).flatten() else {
            return false;
        };
        spawn_chat(session, ticket);
        true
    });

    let on_clear = Callback::new(move |()| session.update(Session::clear_chat));
    let on_toggle = Callback::new(move |key: PaperKey| {
        session.update(|s| {
            s.toggle_selection(&key);
        });
    });
    let on_dismiss = Callback::new(move |seq: u64| session.update(|s| s.dismiss_error(seq)));

    let searching = Memo::new(move |_| session.with(|s| s.searching));
    let papers = Memo::new(move |_| session.with(|s| s.papers.clone()));
    let messages = Memo::new(move |_| session.with(|s| s.chat.messages.clone()));
    let chatting = Memo::new(move |_| session.with(|s| s.chat.loading));
    let banner = Memo::new(move |_| session.with(|s| s.error.clone()));

    view! {
        <div class="home-page">
            <Navbar/>
            <main class="home-page__main">
                <SearchBar on_search=on_search searching=searching/>
                <div class="home-page__grid">
                    <section class="home-page__papers">
                        <PapersList papers=papers on_toggle=on_toggle/>
                    </section>
                    <section class="home-page__chat">
                        <h2 class="home-page__heading">"Chat"</h2>
                        <ChatPanel messages=messages loading=chatting on_send=on_send on_clear=on_clear/>
                    </section>
                </div>
            </main>
            <ErrorBanner banner=banner on_dismiss=on_dismiss/>
        </div>
    }
}

fn spawn_search(session: RwSignal<Session>, ticket: SearchTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let query = &ticket.query;
        let result = crate::net::api::search_papers(&query.topic, query.max_results, query.years).await;
        if let Ok(resp) = &result {
            log::debug!("search '{}' returned {} papers", query.topic, resp.total_papers);
        }
        let applied = session.try_update(|s| s.finish_search(&ticket, result)).unwrap_or(false);
        if !applied {
            log::debug!("dropped stale search result #{}", ticket.seq);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, ticket);
}

fn spawn_chat(session: RwSignal<Session>, ticket: ChatTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::chat_with_assistant(&ticket.topic, &ticket.message).await;
        let applied = session.try_update(|s| s.finish_chat(&ticket, result)).unwrap_or(false);
        if !applied {
            log::debug!("dropped chat reply from transcript epoch {}", ticket.epoch);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, ticket);
}
