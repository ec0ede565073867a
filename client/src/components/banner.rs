//! Inline banner and per-field error rendering.

use leptos::prelude::*;

use crate::state::banner::Banner;
use crate::util::validation::FormErrors;

/// Dismissable success/error banner.
#[component]
pub fn BannerView(banner: RwSignal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            view! {
                <div class=b.kind.css_class() role="status">
                    <span class="banner__message">{b.message}</span>
                    <button class="banner__close" title="Dismiss" on:click=move |_| banner.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Message for one form field, if validation flagged it.
#[component]
pub fn FieldError(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="field__error">{message.to_owned()}</p> })
    }
}
