//! Fixed top bar with the application title and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="navbar">
            <h1 class="navbar__title">"Research Assistant"</h1>
            <button
                class="btn navbar__dark-toggle"
                title="Toggle theme"
                on:click=move |_| {
                    let next = ui.get_untracked().theme.toggled();
                    theme::switch_to(next);
                    ui.update(|u| u.theme = next);
                }
            >
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
        </header>
    }
}
