//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every portal route applies identical unauthenticated redirect behavior.
//! These are UX guards only; the backend still validates every token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Segment, SessionState};

/// True when sessions are restored and `segment` has no token.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState, segment: Segment) -> bool {
    !state.loading && !state.is_authenticated(segment)
}

/// True when a login page for `segment` should bounce to the portal home.
#[must_use]
pub fn should_skip_login(state: &SessionState, segment: Segment) -> bool {
    !state.loading && state.is_authenticated(segment)
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to the segment login whenever sessions have loaded and `segment`
/// has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, segment: Segment, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get(), segment) {
            navigate(segment.login_path(), replace_options());
        }
    });
}

/// Redirect an already-authenticated segment from its login page to its home.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, segment: Segment, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_skip_login(&session.get(), segment) {
            navigate(segment.home_path(), replace_options());
        }
    });
}

/// Log `segment` out locally and return to its login page.
pub fn sign_out<F>(session: RwSignal<SessionState>, segment: Segment, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    crate::net::api::logout(segment);
    session.update(|s| s.set(segment, None));
    navigate(segment.login_path(), replace_options());
}
