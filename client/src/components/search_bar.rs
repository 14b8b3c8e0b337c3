//! Topic search form with bounded result and age limits.
//!
//! The form keeps raw input text locally and only normalizes it on submit,
//! so a half-typed number is never rewritten under the cursor.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::state::query::{
    DEFAULT_MAX_RESULTS, DEFAULT_YEARS, MAX_RESULTS_RANGE, SearchQuery, YEARS_RANGE, parse_bounded,
};

/// Search form. Calls `on_search` with a normalized query on submit.
#[component]
pub fn SearchBar(on_search: Callback<SearchQuery>, #[prop(into)] searching: Signal<bool>) -> impl IntoView {
    let topic = RwSignal::new(String::new());
    let max_results = RwSignal::new(DEFAULT_MAX_RESULTS.to_string());
    let years = RwSignal::new(DEFAULT_YEARS.to_string());
    let last_submitted = StoredValue::new(SearchQuery::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let previous = last_submitted.get_value();
        let Some(query) = build_query(&topic.get(), &max_results.get(), &years.get(), &previous) else {
            return;
        };
        max_results.set(query.max_results.to_string());
        years.set(query.years.to_string());
        last_submitted.set_value(query.clone());
        on_search.run(query);
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <label class="search-bar__field search-bar__field--topic">
                "Research Topic"
                <input
                    class="search-bar__input"
                    type="text"
                    required=true
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
            </label>
            <div class="search-bar__limits">
                <label class="search-bar__field">
                    "Max Results"
                    <input
                        class="search-bar__input"
                        type="number"
                        min=MAX_RESULTS_RANGE.start().to_string()
                        max=MAX_RESULTS_RANGE.end().to_string()
                        prop:value=move || max_results.get()
                        on:input=move |ev| max_results.set(event_target_value(&ev))
                    />
                </label>
                <label class="search-bar__field">
                    "Years Back"
                    <input
                        class="search-bar__input"
                        type="number"
                        min=YEARS_RANGE.start().to_string()
                        max=YEARS_RANGE.end().to_string()
                        prop:value=move || years.get()
                        on:input=move |ev| years.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <button class="btn btn--primary search-bar__submit" type="submit" disabled=move || searching.get()>
                {move || submit_label(searching.get())}
            </button>
        </form>
    }
}

/// Normalize raw form text. Limits that are not numbers keep the values of
/// `previous`, the last submitted query (form defaults before the first one).
fn build_query(topic: &str, max_results: &str, years: &str, previous: &SearchQuery) -> Option<SearchQuery> {
    let max_results = parse_bounded(max_results, &MAX_RESULTS_RANGE, previous.max_results);
    let years = parse_bounded(years, &YEARS_RANGE, previous.years);
    SearchQuery::from_form(topic, max_results, years)
}

fn submit_label(searching: bool) -> &'static str {
    if searching { "Searching..." } else { "Search Papers" }
}
