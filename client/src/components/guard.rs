//! Route guard for segment-protected pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Segment, SessionState};
use crate::util::auth::install_unauth_redirect;

/// Render `children` only when `segment` has a session.
///
/// While sessions are being restored a loading view is shown; once restored,
/// a missing token redirects to the segment's login page.
#[component]
pub fn RequireSegment(segment: Segment, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, segment, use_navigate());

    view! {
        <Show
            when=move || {
                let state = session.get();
                !state.loading && state.is_authenticated(segment)
            }
            fallback=move || {
                view! {
                    <div class="guard">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
