//! Debounced search input for list screens.

use leptos::prelude::*;

/// Delay between the last keystroke and the search callback.
#[cfg(feature = "hydrate")]
const DEBOUNCE_MS: u64 = 300;

/// Search field that reports trimmed text after typing pauses or on Enter.
#[component]
pub fn SearchBox(on_search: Callback<String>, #[prop(default = "Search...")] placeholder: &'static str) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let seq = RwSignal::new(0_u64);

    let on_input = move |ev: leptos::ev::Event| {
        text.set(event_target_value(&ev));
        seq.update(|s| *s += 1);

        #[cfg(feature = "hydrate")]
        {
            let issued = seq.get_untracked();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS)).await;
                if seq.get_untracked() == issued {
                    on_search.run(text.get_untracked().trim().to_owned());
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        seq.update(|s| *s += 1);
        on_search.run(text.get_untracked().trim().to_owned());
    };

    view! {
        <form class="search-box" role="search" on:submit=on_submit>
            <input
                class="search-box__input"
                type="search"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=on_input
            />
        </form>
    }
}
