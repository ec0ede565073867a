//! Public landing page with entry points into each portal.

use leptos::prelude::*;

use crate::state::session::{Segment, SessionState};

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let portal_href = move |segment: Segment| {
        if session.get().is_authenticated(segment) { segment.home_path() } else { segment.login_path() }
    };

    view! {
        <div class="landing">
            <header class="landing__hero">
                <h1>"SchoolHub"</h1>
                <p>"One place for school administrators, staff, and parents."</p>
                <a class="btn btn--primary" href="/school/register">"Register a school"</a>
            </header>
            <div class="landing__portals">
                {Segment::ALL
                    .into_iter()
                    .map(|segment| {
                        view! {
                            <a class="landing__portal" href=move || portal_href(segment)>
                                <h2>{format!("{} Portal", segment.label())}</h2>
                                <span>
                                    {move || {
                                        if session.get().is_authenticated(segment) { "Continue" } else { "Log in" }
                                    }}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
