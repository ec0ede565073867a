//! Client-side form validation mirroring backend constraints.
//!
//! DESIGN
//! ======
//! Validators take raw form strings and return either a trimmed, typed
//! payload ready to submit or a `FormErrors` map keyed by field name. The
//! backend remains authoritative; these checks exist so obvious mistakes are
//! reported inline without a round trip.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{
    ClassPayload, ClassRoom, FeeInstructions, FeeInstructionsPayload, LoginRequest, SchoolRegistration, Staff,
    StaffPayload, StaffRole, Subject, SubjectPayload,
};

pub const NAME_MAX_LEN: usize = 100;
pub const CODE_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const PERSON_NAME_MAX_LEN: usize = 50;
pub const CAPACITY_MIN: u32 = 1;
pub const CAPACITY_MAX: u32 = 200;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const ACCOUNT_NUMBER_MIN_LEN: usize = 6;
pub const ACCOUNT_NUMBER_MAX_LEN: usize = 20;
pub const INSTRUCTIONS_MAX_LEN: usize = 2000;

/// Field name -> message. Ordered so rendering is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keep the first error reported for a field.
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

// =============================================================================
// FIELD RULES
// =============================================================================

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn required(errors: &mut FormErrors, field: &'static str, label: &str, value: &str, max: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} is required."));
    } else if char_len(trimmed) > max {
        errors.add(field, format!("{label} must be at most {max} characters."));
    }
    trimmed.to_owned()
}

fn optional(errors: &mut FormErrors, field: &'static str, label: &str, value: &str, max: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if char_len(trimmed) > max {
        errors.add(field, format!("{label} must be at most {max} characters."));
    }
    Some(trimmed.to_owned())
}

/// `local@domain.tld` with exactly one `@`, no whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

fn email(errors: &mut FormErrors, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add("email", "Email is required.");
    } else if !is_valid_email(trimmed) {
        errors.add("email", "Enter a valid email address.");
    }
    trimmed.to_ascii_lowercase()
}

/// Digits with an optional leading `+`; spaces and dashes are ignored.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.trim().chars().filter(|c| *c != ' ' && *c != '-').collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
}

fn phone(errors: &mut FormErrors, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !is_valid_phone(trimmed) {
        errors.add(
            "phone",
            format!("Phone must contain {PHONE_MIN_DIGITS}-{PHONE_MAX_DIGITS} digits, optionally starting with +."),
        );
    }
    Some(trimmed.to_owned())
}

/// Parse a class capacity and enforce the allowed range.
///
/// # Errors
///
/// Returns the message to show under the capacity field.
pub fn parse_capacity(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Capacity is required.".to_owned());
    }
    let range_msg = || format!("Capacity must be a whole number between {CAPACITY_MIN} and {CAPACITY_MAX}.");
    let parsed = trimmed.parse::<i64>().map_err(|_| range_msg())?;
    u32::try_from(parsed)
        .ok()
        .filter(|c| (CAPACITY_MIN..=CAPACITY_MAX).contains(c))
        .ok_or_else(range_msg)
}

// =============================================================================
// FORMS
// =============================================================================

/// Raw subject form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
}

/// Validate the subject form.
///
/// # Errors
///
/// Returns per-field errors when any rule fails.
pub fn validate_subject(form: &SubjectForm) -> Result<SubjectPayload, FormErrors> {
    let mut errors = FormErrors::default();
    let name = required(&mut errors, "name", "Name", &form.name, NAME_MAX_LEN);
    let code = required(&mut errors, "code", "Code", &form.code, CODE_MAX_LEN).to_ascii_uppercase();
    let description = optional(&mut errors, "description", "Description", &form.description, DESCRIPTION_MAX_LEN);
    errors.into_result(|| SubjectPayload { name, code, description, is_active: form.is_active })
}

impl From<&Subject> for SubjectForm {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            code: subject.code.clone(),
            description: subject.description.clone().unwrap_or_default(),
            is_active: subject.is_active,
        }
    }
}

/// Raw class form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub capacity: String,
    pub is_active: bool,
    /// Selected staff id as the raw `<select>` value (empty for none).
    pub class_teacher: String,
}

impl Default for ClassForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            description: String::new(),
            capacity: "40".to_owned(),
            is_active: true,
            class_teacher: String::new(),
        }
    }
}

impl From<&ClassRoom> for ClassForm {
    fn from(class: &ClassRoom) -> Self {
        Self {
            name: class.name.clone(),
            code: class.code.clone(),
            description: class.description.clone().unwrap_or_default(),
            capacity: class.capacity.to_string(),
            is_active: class.is_active,
            class_teacher: class.class_teacher.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

/// Validate the class form.
///
/// # Errors
///
/// Returns per-field errors when any rule fails.
pub fn validate_class(form: &ClassForm) -> Result<ClassPayload, FormErrors> {
    let mut errors = FormErrors::default();
    let name = required(&mut errors, "name", "Name", &form.name, NAME_MAX_LEN);
    let code = required(&mut errors, "code", "Code", &form.code, CODE_MAX_LEN).to_ascii_uppercase();
    let description = optional(&mut errors, "description", "Description", &form.description, DESCRIPTION_MAX_LEN);
    let capacity = parse_capacity(&form.capacity).unwrap_or_else(|msg| {
        errors.add("capacity", msg);
        0
    });
    let class_teacher = match form.class_teacher.trim() {
        "" => None,
        raw => raw.parse::<i64>().map_or_else(
            |_| {
                errors.add("class_teacher", "Select a class teacher from the list.");
                None
            },
            Some,
        ),
    };
    errors.into_result(|| ClassPayload {
        name,
        code,
        description,
        capacity,
        is_active: form.is_active,
        class_teacher,
    })
}

/// Raw staff form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    pub is_active: bool,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: StaffRole::Teacher,
            is_active: true,
        }
    }
}

impl From<&Staff> for StaffForm {
    fn from(staff: &Staff) -> Self {
        Self {
            first_name: staff.first_name.clone(),
            last_name: staff.last_name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone().unwrap_or_default(),
            role: staff.role,
            is_active: staff.is_active,
        }
    }
}

/// Validate the staff form.
///
/// # Errors
///
/// Returns per-field errors when any rule fails.
pub fn validate_staff(form: &StaffForm) -> Result<StaffPayload, FormErrors> {
    let mut errors = FormErrors::default();
    let first_name = required(&mut errors, "first_name", "First name", &form.first_name, PERSON_NAME_MAX_LEN);
    let last_name = required(&mut errors, "last_name", "Last name", &form.last_name, PERSON_NAME_MAX_LEN);
    let email = email(&mut errors, &form.email);
    let phone = phone(&mut errors, &form.phone);
    errors.into_result(|| StaffPayload { first_name, last_name, email, phone, role: form.role, is_active: form.is_active })
}

/// Raw school registration form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the school registration form.
///
/// # Errors
///
/// Returns per-field errors when any rule fails.
pub fn validate_registration(form: &RegistrationForm) -> Result<SchoolRegistration, FormErrors> {
    let mut errors = FormErrors::default();
    let name = required(&mut errors, "name", "School name", &form.name, NAME_MAX_LEN);
    let email = email(&mut errors, &form.email);
    let phone = phone(&mut errors, &form.phone);
    let address = optional(&mut errors, "address", "Address", &form.address, DESCRIPTION_MAX_LEN);
    if char_len(&form.password) < PASSWORD_MIN_LEN {
        errors.add("password", format!("Password must be at least {PASSWORD_MIN_LEN} characters."));
    }
    if form.password != form.confirm_password {
        errors.add("confirm_password", "Passwords do not match.");
    }
    let password = form.password.clone();
    errors.into_result(|| SchoolRegistration { name, email, phone, address, password })
}

/// Validate a login form.
///
/// # Errors
///
/// Returns per-field errors when either field is missing or the email is malformed.
pub fn validate_login(email_raw: &str, password: &str) -> Result<LoginRequest, FormErrors> {
    let mut errors = FormErrors::default();
    let email = email(&mut errors, email_raw);
    if password.is_empty() {
        errors.add("password", "Password is required.");
    }
    errors.into_result(|| LoginRequest { email, password: password.to_owned() })
}

/// Raw fee-instructions form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeeForm {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub instructions: String,
}

impl From<&FeeInstructions> for FeeForm {
    fn from(fees: &FeeInstructions) -> Self {
        Self {
            bank_name: fees.bank_name.clone(),
            account_name: fees.account_name.clone(),
            account_number: fees.account_number.clone(),
            instructions: fees.instructions.clone(),
        }
    }
}

/// Validate the fee-instructions form.
///
/// # Errors
///
/// Returns per-field errors when any rule fails.
pub fn validate_fee_instructions(form: &FeeForm) -> Result<FeeInstructionsPayload, FormErrors> {
    let mut errors = FormErrors::default();
    let bank_name = required(&mut errors, "bank_name", "Bank name", &form.bank_name, NAME_MAX_LEN);
    let account_name = required(&mut errors, "account_name", "Account name", &form.account_name, NAME_MAX_LEN);
    let account_number: String = form.account_number.chars().filter(|c| !c.is_whitespace()).collect();
    if account_number.is_empty() {
        errors.add("account_number", "Account number is required.");
    } else if !account_number.chars().all(|c| c.is_ascii_digit())
        || !(ACCOUNT_NUMBER_MIN_LEN..=ACCOUNT_NUMBER_MAX_LEN).contains(&account_number.len())
    {
        errors.add(
            "account_number",
            format!("Account number must be {ACCOUNT_NUMBER_MIN_LEN}-{ACCOUNT_NUMBER_MAX_LEN} digits."),
        );
    }
    let instructions = form.instructions.trim().to_owned();
    if char_len(&instructions) > INSTRUCTIONS_MAX_LEN {
        errors.add("instructions", format!("Instructions must be at most {INSTRUCTIONS_MAX_LEN} characters."));
    }
    errors.into_result(|| FeeInstructionsPayload { bank_name, account_name, account_number, instructions })
}
