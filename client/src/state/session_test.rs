use super::*;

// =============================================================
// Segment keys and routes
// =============================================================

#[test]
fn segment_storage_keys_match_backend_conventions() {
    assert_eq!(Segment::School.token_key(), "access_token");
    assert_eq!(Segment::Staff.token_key(), "staff_access_token");
    assert_eq!(Segment::Parent.token_key(), "parent_access_token");
    assert_eq!(Segment::Staff.info_key(), "staff_info");
}

#[test]
fn segment_routes_are_distinct() {
    let logins: Vec<_> = Segment::ALL.iter().map(|s| s.login_path()).collect();
    assert_eq!(logins, vec!["/school/login", "/staff/login", "/parent/login"]);
    for segment in Segment::ALL {
        assert!(segment.login_path().starts_with(segment.home_path()));
        assert!(segment.login_endpoint().starts_with("/api/"));
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading_without_sessions() {
    let state = SessionState::default();
    assert!(state.loading);
    for segment in Segment::ALL {
        assert!(!state.is_authenticated(segment));
    }
}

#[test]
fn set_and_get_are_per_segment() {
    let mut state = SessionState::default();
    state.set(
        Segment::Staff,
        Some(Session { token: "t".to_owned(), display_name: "Mrs Bello".to_owned() }),
    );
    assert!(state.is_authenticated(Segment::Staff));
    assert!(!state.is_authenticated(Segment::School));
    assert!(!state.is_authenticated(Segment::Parent));
    state.set(Segment::Staff, None);
    assert!(!state.is_authenticated(Segment::Staff));
}

#[test]
fn from_stored_reads_tokens_and_display_names() {
    let state = SessionState::from_stored(|segment| match segment {
        Segment::School => (
            Some("school-token".to_owned()),
            Some(r#"{"display_name":"Green Hills","profile":{"id":1}}"#.to_owned()),
        ),
        Segment::Staff => (Some("staff-token".to_owned()), None),
        Segment::Parent => (None, Some(r#"{"display_name":"Mr Ade"}"#.to_owned())),
    });
    assert!(!state.loading);
    assert_eq!(
        state.school,
        Some(Session { token: "school-token".to_owned(), display_name: "Green Hills".to_owned() })
    );
    assert_eq!(state.staff.as_ref().map(|s| s.display_name.as_str()), Some("Staff"));
    assert!(state.parent.is_none());
}

#[test]
fn from_stored_ignores_blank_tokens_and_corrupt_info() {
    let state = SessionState::from_stored(|segment| match segment {
        Segment::School => (Some("   ".to_owned()), None),
        Segment::Staff => (Some("tok".to_owned()), Some("not json".to_owned())),
        Segment::Parent => (Some("tok".to_owned()), Some(r#"{"display_name":"  "}"#.to_owned())),
    });
    assert!(state.school.is_none());
    assert_eq!(state.staff.unwrap().display_name, "Staff");
    assert_eq!(state.parent.unwrap().display_name, "Parent");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_has_no_sessions() {
    let state = SessionState::restore();
    assert!(!state.loading);
    assert!(state.school.is_none() && state.staff.is_none() && state.parent.is_none());
    assert_eq!(stored_token(Segment::School), None);
}
