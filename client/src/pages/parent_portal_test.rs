use super::*;

#[test]
fn missing_instructions_read_as_unpublished() {
    let fees = unpublished_as_empty(Err(ApiError::NotFound)).expect("404 maps to empty");
    assert!(fees.bank_name.is_empty());
    assert!(fees.instructions.is_empty());
}

#[test]
fn other_errors_still_surface() {
    assert!(matches!(unpublished_as_empty(Err(ApiError::Forbidden)), Err(ApiError::Forbidden)));
    let published = FeeInstructions { bank_name: "First Bank".to_owned(), ..FeeInstructions::default() };
    assert_eq!(unpublished_as_empty(Ok(published.clone())).expect("ok"), published);
}
