//! Transient error banner with manual and timed dismissal.
//!
//! Dismissals carry the banner's sequence number so a timer started for an
//! older error never hides a newer one.

use leptos::prelude::*;

use crate::state::session::Banner;

/// How long a banner stays up without interaction.
pub const BANNER_TIMEOUT_MS: u64 = 6_000;

#[component]
pub fn ErrorBanner(#[prop(into)] banner: Signal<Option<Banner>>, on_dismiss: Callback<u64>) -> impl IntoView {
    Effect::new(move || {
        let Some(current) = banner.get() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(BANNER_TIMEOUT_MS)).await;
            on_dismiss.run(current.seq);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    });

    view! {
        {move || {
            banner
                .get()
                .map(|b| {
                    let seq = b.seq;
                    view! {
                        <div class="error-banner" role="alert">
                            <span class="error-banner__message">{b.message}</span>
                            <button
                                class="error-banner__dismiss"
                                type="button"
                                title="Dismiss"
                                on:click=move |_| on_dismiss.run(seq)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
