use super::*;

// =============================================================================
// Resource paths
// =============================================================================

#[test]
fn resource_paths_follow_backend_routes() {
    assert_eq!(Resource::Subjects.collection_path(), "/api/subjects/");
    assert_eq!(Resource::Classes.item_path(12), "/api/classes/12/");
    assert_eq!(Resource::Staff.item_path(3), "/api/schools/staff/3/");
    assert_eq!(Resource::Students.collection_path(), "/api/students/");
}

#[test]
fn only_subjects_and_classes_accept_csv() {
    assert_eq!(Resource::Subjects.upload_path().as_deref(), Some("/api/subjects/upload/"));
    assert_eq!(Resource::Classes.upload_path().as_deref(), Some("/api/classes/upload/"));
    assert_eq!(Resource::Staff.upload_path(), None);
    assert_eq!(Resource::Students.upload_path(), None);
}

#[test]
fn analytics_and_fee_endpoints() {
    assert_eq!(class_analytics_endpoint(4), "/api/analytics/classes/4/");
    assert_eq!(subject_analytics_endpoint(9), "/api/analytics/subjects/9/");
    assert_eq!(fee_instructions_endpoint(Segment::School), "/api/schools/fee-instructions/");
    assert_eq!(fee_instructions_endpoint(Segment::Parent), "/api/parents/fee-instructions/");
}

#[test]
fn bearer_header_trims_token() {
    assert_eq!(bearer_header(" abc.def \n"), "Bearer abc.def");
}

// =============================================================================
// Query building
// =============================================================================

#[test]
fn default_list_query_only_paginates() {
    let pairs = ListQuery::default().pairs();
    assert_eq!(pairs, vec![("page", "1".to_owned()), ("page_size", DEFAULT_PAGE_SIZE.to_string())]);
}

#[test]
fn list_query_includes_trimmed_search_and_filters() {
    let query = ListQuery {
        page: 3,
        page_size: 25,
        search: "  math ".to_owned(),
        active: Some(false),
        class_id: Some(7),
    };
    assert_eq!(
        query.pairs(),
        vec![
            ("page", "3".to_owned()),
            ("page_size", "25".to_owned()),
            ("search", "math".to_owned()),
            ("is_active", "false".to_owned()),
            ("class_id", "7".to_owned()),
        ]
    );
}

#[test]
fn list_query_never_sends_page_zero() {
    let query = ListQuery { page: 0, page_size: 0, ..ListQuery::default() };
    let pairs = query.pairs();
    assert_eq!(pairs[0], ("page", "1".to_owned()));
    assert_eq!(pairs[1], ("page_size", "1".to_owned()));
}

#[test]
fn analytics_filter_skips_blank_values() {
    let filter = AnalyticsFilter { term: Some("  ".to_owned()), exam: Some("Mid-term".to_owned()), class_id: None };
    assert_eq!(filter.pairs(), vec![("exam", "Mid-term".to_owned())]);
    assert!(AnalyticsFilter::default().pairs().is_empty());
}

// =============================================================================
// Login display names
// =============================================================================

fn login_response(display_name: Option<&str>, profile: serde_json::Value) -> LoginResponse {
    LoginResponse {
        access: "tok".to_owned(),
        refresh: None,
        display_name: display_name.map(str::to_owned),
        profile,
    }
}

#[test]
fn display_name_prefers_explicit_field() {
    let resp = login_response(Some("Green Hills"), serde_json::json!({ "name": "ignored" }));
    assert_eq!(login_display_name(Segment::School, &resp), "Green Hills");
}

#[test]
fn display_name_falls_back_to_profile_names() {
    let school = login_response(None, serde_json::json!({ "name": "Bright Stars" }));
    assert_eq!(login_display_name(Segment::School, &school), "Bright Stars");

    let staff = login_response(Some("  "), serde_json::json!({ "first_name": "Ada", "last_name": "Obi" }));
    assert_eq!(login_display_name(Segment::Staff, &staff), "Ada Obi");
}

#[test]
fn display_name_falls_back_to_segment_label() {
    let resp = login_response(None, serde_json::Value::Null);
    assert_eq!(login_display_name(Segment::Parent, &resp), "Parent");
}

// =============================================================================
// SSR behavior
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let result = futures::executor::block_on(list_subjects(&ListQuery::default()));
    assert_eq!(result.unwrap_err(), ApiError::Unavailable);
    let result = futures::executor::block_on(fetch_fee_instructions(Segment::Parent));
    assert_eq!(result.unwrap_err(), ApiError::Unavailable);
}
