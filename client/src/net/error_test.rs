use super::*;

#[test]
fn from_status_maps_auth_statuses() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);
}

#[test]
fn from_status_maps_server_failures() {
    assert_eq!(ApiError::from_status(500, "boom"), ApiError::Server { status: 500 });
    assert_eq!(ApiError::from_status(502, ""), ApiError::Server { status: 502 });
}

#[test]
fn validation_uses_detail_when_present() {
    let err = ApiError::from_status(400, r#"{"detail": "Subject code already exists."}"#);
    assert_eq!(err, ApiError::Validation { message: "Subject code already exists.".to_owned() });
}

#[test]
fn validation_flattens_field_errors_sorted() {
    let body = r#"{"name": ["This field may not be blank."], "code": ["Ensure this field has no more than 20 characters."]}"#;
    assert_eq!(
        validation_message(body),
        "code: Ensure this field has no more than 20 characters.; name: This field may not be blank."
    );
}

#[test]
fn validation_non_field_errors_have_no_prefix() {
    let body = r#"{"non_field_errors": ["Invalid credentials."]}"#;
    assert_eq!(validation_message(body), "Invalid credentials.");
}

#[test]
fn validation_falls_back_for_unparseable_body() {
    assert_eq!(validation_message("<html>"), "Please check the form and try again.");
    assert_eq!(validation_message("[1,2]"), "Please check the form and try again.");
    assert_eq!(validation_message("{}"), "Please check the form and try again.");
}

#[test]
fn conflict_is_validation() {
    let err = ApiError::from_status(409, r#"{"code": "duplicate"}"#);
    assert_eq!(err.user_message(), "code: duplicate");
}

#[test]
fn user_message_includes_status_for_server_errors() {
    assert_eq!(
        ApiError::Server { status: 503 }.user_message(),
        "The server could not complete the request (503)."
    );
}

#[test]
fn display_is_terse() {
    assert_eq!(ApiError::Network("timeout".to_owned()).to_string(), "network error: timeout");
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
}
