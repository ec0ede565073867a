use super::*;

fn subject_form(name: &str, code: &str) -> SubjectForm {
    SubjectForm { name: name.to_owned(), code: code.to_owned(), description: String::new(), is_active: true }
}

// =============================================================================
// Subjects
// =============================================================================

#[test]
fn subject_trims_and_uppercases_code() {
    let payload = validate_subject(&subject_form("  Mathematics ", " mth101 ")).unwrap();
    assert_eq!(payload.name, "Mathematics");
    assert_eq!(payload.code, "MTH101");
    assert_eq!(payload.description, None);
    assert!(payload.is_active);
}

#[test]
fn subject_rejects_empty_name_and_code() {
    let errors = validate_subject(&subject_form("   ", "")).unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required."));
    assert_eq!(errors.get("code"), Some("Code is required."));
    assert_eq!(errors.len(), 2);
}

#[test]
fn subject_code_length_limit_is_twenty() {
    assert!(validate_subject(&subject_form("Physics", &"P".repeat(CODE_MAX_LEN))).is_ok());
    let errors = validate_subject(&subject_form("Physics", &"P".repeat(CODE_MAX_LEN + 1))).unwrap_err();
    assert_eq!(errors.get("code"), Some("Code must be at most 20 characters."));
}

#[test]
fn subject_description_limit_counts_chars_not_bytes() {
    let mut form = subject_form("French", "FRN");
    form.description = "é".repeat(DESCRIPTION_MAX_LEN);
    assert!(validate_subject(&form).is_ok());
    form.description.push('é');
    assert!(validate_subject(&form).unwrap_err().get("description").is_some());
}

// =============================================================================
// Classes
// =============================================================================

fn class_form(capacity: &str) -> ClassForm {
    ClassForm { name: "JSS 1A".to_owned(), code: "j1a".to_owned(), capacity: capacity.to_owned(), ..ClassForm::default() }
}

#[test]
fn class_capacity_bounds_are_inclusive() {
    assert_eq!(validate_class(&class_form("1")).unwrap().capacity, 1);
    assert_eq!(validate_class(&class_form(" 200 ")).unwrap().capacity, 200);
}

#[test]
fn class_capacity_out_of_range_or_not_numeric() {
    for raw in ["0", "201", "-5", "12.5", "forty", "99999999999"] {
        let errors = validate_class(&class_form(raw)).unwrap_err();
        assert_eq!(
            errors.get("capacity"),
            Some("Capacity must be a whole number between 1 and 200."),
            "capacity {raw:?}"
        );
    }
    assert_eq!(validate_class(&class_form("")).unwrap_err().get("capacity"), Some("Capacity is required."));
}

#[test]
fn class_teacher_select_value_parses() {
    let mut form = class_form("30");
    assert_eq!(validate_class(&form).unwrap().class_teacher, None);
    form.class_teacher = "14".to_owned();
    assert_eq!(validate_class(&form).unwrap().class_teacher, Some(14));
    form.class_teacher = "abc".to_owned();
    assert!(validate_class(&form).unwrap_err().get("class_teacher").is_some());
}

#[test]
fn class_default_form_is_active_with_sensible_capacity() {
    let form = ClassForm::default();
    assert!(form.is_active);
    assert_eq!(parse_capacity(&form.capacity), Ok(40));
}

// =============================================================================
// Staff
// =============================================================================

#[test]
fn staff_normalizes_email_and_optional_phone() {
    let form = StaffForm {
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: " Ada.Obi@School.NG ".to_owned(),
        phone: String::new(),
        role: StaffRole::Admin,
        is_active: true,
    };
    let payload = validate_staff(&form).unwrap();
    assert_eq!(payload.email, "ada.obi@school.ng");
    assert_eq!(payload.phone, None);
    assert_eq!(payload.role, StaffRole::Admin);
}

#[test]
fn staff_reports_each_invalid_field() {
    let form = StaffForm { email: "not-an-email".to_owned(), phone: "12ab".to_owned(), ..StaffForm::default() };
    let errors = validate_staff(&form).unwrap_err();
    assert_eq!(errors.get("first_name"), Some("First name is required."));
    assert_eq!(errors.get("last_name"), Some("Last name is required."));
    assert_eq!(errors.get("email"), Some("Enter a valid email address."));
    assert!(errors.get("phone").is_some());
}

#[test]
fn email_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b..co"));
}

#[test]
fn phone_rules() {
    assert!(is_valid_phone("+234 803-555-1234"));
    assert!(is_valid_phone("0803555"));
    assert!(!is_valid_phone("123456"));
    assert!(!is_valid_phone("+1234567890123456"));
    assert!(!is_valid_phone("++2348035551234"));
}

// =============================================================================
// Registration and login
// =============================================================================

fn registration() -> RegistrationForm {
    RegistrationForm {
        name: "Green Hills Academy".to_owned(),
        email: "admin@greenhills.edu.ng".to_owned(),
        phone: "+2348035551234".to_owned(),
        address: "  ".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
    }
}

#[test]
fn registration_accepts_valid_form() {
    let body = validate_registration(&registration()).unwrap();
    assert_eq!(body.address, None);
    assert_eq!(body.phone.as_deref(), Some("+2348035551234"));
}

#[test]
fn registration_requires_matching_long_password() {
    let mut form = registration();
    form.password = "short".to_owned();
    form.confirm_password = "shorter".to_owned();
    let errors = validate_registration(&form).unwrap_err();
    assert_eq!(errors.get("password"), Some("Password must be at least 8 characters."));
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match."));
}

#[test]
fn login_requires_both_fields() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required."));
    assert_eq!(errors.get("password"), Some("Password is required."));
    assert_eq!(validate_login(" Head@School.ng ", "pw").unwrap().email, "head@school.ng");
}

// =============================================================================
// Fees
// =============================================================================

#[test]
fn fee_account_number_strips_spaces_and_requires_digits() {
    let form = FeeForm {
        bank_name: "First Bank".to_owned(),
        account_name: "Green Hills Academy".to_owned(),
        account_number: "0123 4567 89".to_owned(),
        instructions: "  Use the pupil's admission number as reference.  ".to_owned(),
    };
    let payload = validate_fee_instructions(&form).unwrap();
    assert_eq!(payload.account_number, "0123456789");
    assert_eq!(payload.instructions, "Use the pupil's admission number as reference.");

    let bad = FeeForm { account_number: "12-34".to_owned(), ..form.clone() };
    assert!(validate_fee_instructions(&bad).unwrap_err().get("account_number").is_some());
    let long = FeeForm { instructions: "x".repeat(INSTRUCTIONS_MAX_LEN + 1), ..form };
    assert!(validate_fee_instructions(&long).unwrap_err().get("instructions").is_some());
}

// =============================================================================
// Prefill
// =============================================================================

#[test]
fn edit_forms_prefill_from_records_and_revalidate() {
    let class = ClassRoom {
        id: 4,
        name: "JSS 1A".to_owned(),
        code: "JSS1A".to_owned(),
        description: None,
        capacity: 35,
        is_active: false,
        class_teacher: Some(12),
        student_count: None,
        created_at: None,
        updated_at: None,
    };
    let form = ClassForm::from(&class);
    assert_eq!(form.capacity, "35");
    assert_eq!(form.class_teacher, "12");
    assert_eq!(form.description, "");
    let payload = validate_class(&form).unwrap();
    assert_eq!(payload.class_teacher, Some(12));
    assert!(!payload.is_active);

    let staff = Staff {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@school.ng".to_owned(),
        phone: None,
        role: StaffRole::Accountant,
        is_active: true,
        created_at: None,
    };
    let payload = validate_staff(&StaffForm::from(&staff)).unwrap();
    assert_eq!(payload.role, StaffRole::Accountant);
    assert!(payload.phone.is_none());
}
