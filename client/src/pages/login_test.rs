use super::*;

#[test]
fn login_copy_is_distinct_per_segment() {
    let titles: Vec<&str> = Segment::ALL.into_iter().map(|s| login_copy(s).0).collect();
    assert_eq!(titles, vec!["School Login", "Staff Login", "Parent Login"]);
}

#[test]
fn rejected_credentials_use_generic_message() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid email or password.");
    assert_eq!(
        login_error_message(&ApiError::Validation { message: "No active account found with the given credentials".to_owned() }),
        "Invalid email or password."
    );
}

#[test]
fn other_failures_keep_their_message() {
    let err = ApiError::Validation { message: "email: Enter a valid email address.".to_owned() };
    assert_eq!(login_error_message(&err), err.user_message());
    assert_eq!(login_error_message(&ApiError::Network("offline".to_owned())), ApiError::Network("offline".to_owned()).user_message());
}
