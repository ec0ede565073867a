//! Portal chrome: sidebar navigation, signed-in name, and logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Segment, SessionState};
use crate::util::auth::sign_out;

/// Sidebar entries `(label, href)` for a segment.
#[must_use]
pub fn nav_links(segment: Segment) -> &'static [(&'static str, &'static str)] {
    match segment {
        Segment::School => &[
            ("Dashboard", "/school"),
            ("Subjects", "/school/subjects"),
            ("Classes", "/school/classes"),
            ("Staff", "/school/staff"),
            ("Students", "/school/students"),
            ("Fees", "/school/fees"),
            ("Class Analytics", "/school/analytics/classes"),
            ("Subject Analytics", "/school/analytics/subjects"),
        ],
        Segment::Staff => &[("My Classes", "/staff"), ("Class Analytics", "/staff/analytics")],
        Segment::Parent => &[("My Children", "/parent")],
    }
}

#[component]
pub fn Layout(segment: Segment, title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .get(segment)
            .map_or_else(|| segment.label().to_owned(), |s| s.display_name.clone())
    };

    let on_logout = move |_| sign_out(session, segment, navigate.clone());

    view! {
        <div class="portal">
            <aside class="portal__sidebar">
                <a class="portal__brand" href=segment.home_path()>
                    "SchoolHub"
                    <span class="portal__segment">{segment.label()}</span>
                </a>
                <nav class="portal__nav">
                    {nav_links(segment)
                        .iter()
                        .map(|(label, href)| view! { <A href=*href exact=true>{*label}</A> })
                        .collect_view()}
                </nav>
            </aside>
            <main class="portal__main">
                <header class="portal__header">
                    <h1>{title}</h1>
                    <span class="portal__spacer"></span>
                    <span class="portal__user">{display_name}</span>
                    <button class="btn portal__logout" on:click=on_logout>"Logout"</button>
                </header>
                <section class="portal__content">{children()}</section>
            </main>
        </div>
    }
}
