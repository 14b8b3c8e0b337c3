//! Search results rendered as selectable, expandable paper cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are keyed by list position plus [`PaperKey`], so selection changes
//! re-style existing cards instead of rebuilding them and each card keeps its
//! own expand/collapse state.

#[cfg(test)]
#[path = "papers_list_test.rs"]
mod papers_list_test;

use leptos::prelude::*;

use crate::state::papers::{ListedPaper, PaperKey, PapersState};

/// Results column: heading plus one card per paper.
#[component]
pub fn PapersList(#[prop(into)] papers: Signal<PapersState>, on_toggle: Callback<PaperKey>) -> impl IntoView {
    view! {
        <div class="papers-list">
            <h2 class="papers-list__heading">{move || papers_heading(papers.with(PapersState::len))}</h2>
            <Show
                when=move || !papers.with(PapersState::is_empty)
                fallback=|| view! { <p class="papers-list__empty">"Search for a topic to see papers."</p> }
            >
                <div class="papers-list__items">
                    <For
                        each={move || indexed_items(&papers.get())}
                        key={|(index, item): &(usize, ListedPaper)| (*index, item.key.clone())}
                        children={move |(_, item): (usize, ListedPaper)| {
                            let key = item.key.clone();
                            let selected = Signal::derive(move || papers.with(|p| p.is_selected(&key)));
                            view! { <PaperCard item=item selected=selected on_toggle=on_toggle/> }
                        }}
                    />
                </div>
            </Show>
        </div>
    }
}

/// One paper card. Clicking the card toggles selection; the abstract toggle
/// and the external link do not.
#[component]
fn PaperCard(item: ListedPaper, #[prop(into)] selected: Signal<bool>, on_toggle: Callback<PaperKey>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let ListedPaper { key, paper } = item;
    let authors = authors_label(&paper.authors);
    let published = published_label(&paper.published);
    let summary = abstract_text(paper.summary.as_deref()).to_owned();

    view! {
        <article
            class="paper-card"
            class:paper-card--selected=move || selected.get()
            on:click=move |_| on_toggle.run(key.clone())
        >
            <h3 class="paper-card__title">{paper.title}</h3>
            <p class="paper-card__authors">{authors}</p>
            <span class="paper-card__chip">{published}</span>
            <div class="paper-card__abstract">
                <button
                    class="paper-card__expand"
                    type="button"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        expanded.update(|open| *open = !*open);
                    }
                >
                    "Abstract"
                    <span class="paper-card__chevron">{move || if expanded.get() { "▴" } else { "▾" }}</span>
                </button>
                <Show when=move || expanded.get()>
                    <p class="paper-card__abstract-body">{summary.clone()}</p>
                </Show>
            </div>
            <a
                class="paper-card__link"
                href=paper.url
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev| ev.stop_propagation()
            >
                "View Paper"
            </a>
        </article>
    }
}

/// Cards paired with their list position, so repeated keys stay distinct.
fn indexed_items(papers: &PapersState) -> Vec<(usize, ListedPaper)> {
    papers.items.iter().cloned().enumerate().collect()
}

fn papers_heading(count: usize) -> String {
    if count == 0 { "Papers".to_owned() } else { format!("Papers ({count})") }
}

fn authors_label(authors: &[String]) -> String {
    authors.join(", ")
}

fn published_label(published: &str) -> String {
    format!("Published: {published}")
}

fn abstract_text(summary: Option<&str>) -> &str {
    match summary.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "No abstract available",
    }
}
