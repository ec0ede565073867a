//! Headline number tile used on dashboards and analytics pages.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
        </div>
    }
}
