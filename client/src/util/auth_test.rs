use super::*;
use crate::state::session::Session;

fn restored(staff: bool) -> SessionState {
    let mut state = SessionState { loading: false, ..SessionState::default() };
    if staff {
        state.set(Segment::Staff, Some(Session { token: "t".to_owned(), display_name: "Ada".to_owned() }));
    }
    state
}

#[test]
fn should_redirect_unauth_when_restored_and_token_missing() {
    assert!(should_redirect_unauth(&restored(false), Segment::Staff));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    for segment in Segment::ALL {
        assert!(!should_redirect_unauth(&state, segment));
        assert!(!should_skip_login(&state, segment));
    }
}

#[test]
fn segments_are_guarded_independently() {
    let state = restored(true);
    assert!(!should_redirect_unauth(&state, Segment::Staff));
    assert!(should_redirect_unauth(&state, Segment::School));
    assert!(should_redirect_unauth(&state, Segment::Parent));
}

#[test]
fn login_page_skipped_only_for_authenticated_segment() {
    let state = restored(true);
    assert!(should_skip_login(&state, Segment::Staff));
    assert!(!should_skip_login(&state, Segment::Parent));
}
