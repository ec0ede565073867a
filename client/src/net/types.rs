//! Shared wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. Read models carry defaults for
//! optional columns so older backend versions still deserialize; write models
//! (`*Payload`) only contain fields the forms submit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PAGINATION ENVELOPE
// =============================================================================

/// Paginated list envelope returned by every list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of matching rows across all pages.
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { count: 0, next: None, previous: None, results: Vec::new() }
    }
}

// =============================================================================
// SCHOOL
// =============================================================================

/// A registered school (tenant).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Short school code shown to staff and parents at login.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /api/schools/register/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchoolRegistration {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub password: String,
}

/// Headline counts for the school dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolSummary {
    #[serde(default)]
    pub students: u64,
    #[serde(default)]
    pub staff: u64,
    #[serde(default)]
    pub classes: u64,
    #[serde(default)]
    pub subjects: u64,
}

// =============================================================================
// AUTH
// =============================================================================

/// Body for every segment login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response shared by the school, staff, and parent login endpoints.
///
/// The profile object differs per segment; it is stored verbatim under the
/// segment's info key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile: serde_json::Value,
}

// =============================================================================
// STAFF
// =============================================================================

/// Staff role within a school.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StaffRole {
    #[default]
    Teacher,
    Admin,
    Accountant,
    Other,
}

impl From<String> for StaffRole {
    fn from(raw: String) -> Self {
        Self::from_value(&raw)
    }
}

impl StaffRole {
    pub const ALL: [Self; 4] = [Self::Teacher, Self::Admin, Self::Accountant, Self::Other];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Admin => "admin",
            Self::Accountant => "accountant",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::Admin => "Administrator",
            Self::Accountant => "Accountant",
            Self::Other => "Other",
        }
    }

    /// Parse the value of a `<select>` option; unknown values map to `Other`.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        match raw {
            "teacher" => Self::Teacher,
            "admin" => Self::Admin,
            "accountant" => Self::Accountant,
            _ => Self::Other,
        }
    }
}

/// A staff member of the current school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: StaffRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Staff {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Create/update body for staff.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StaffPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub is_active: bool,
}

// =============================================================================
// CLASSES
// =============================================================================

/// A class (form/grade group) of the current school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRoom {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub capacity: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Staff id of the class teacher, if assigned.
    #[serde(default)]
    pub class_teacher: Option<i64>,
    #[serde(default)]
    pub student_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update body for classes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassPayload {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub capacity: u32,
    pub is_active: bool,
    pub class_teacher: Option<i64>,
}

// =============================================================================
// SUBJECTS
// =============================================================================

/// A subject taught at the current school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update body for subjects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubjectPayload {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
}

// =============================================================================
// STUDENTS
// =============================================================================

/// A student enrolled at the current school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub admission_number: String,
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

// =============================================================================
// FEES
// =============================================================================

/// Fee-payment instructions published by a school to parents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeInstructions {
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub account_number: String,
    /// Free-form markdown shown to parents below the account details.
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Update body for fee instructions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeeInstructionsPayload {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub instructions: String,
}

// =============================================================================
// CSV IMPORT
// =============================================================================

/// Result of a CSV bulk import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvUploadResult {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub errors: Vec<CsvRowError>,
}

/// A rejected CSV row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CsvRowError {
    pub row: u32,
    pub message: String,
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Term and exam names available for analytics filters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsFilters {
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub exams: Vec<String>,
}

/// Average score for one subject within a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectAverage {
    pub subject: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
}

/// Average score for one class within a subject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassAverage {
    pub class_name: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
}

/// Number of results in one grade bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeCount {
    pub grade: String,
    pub count: u32,
}

/// A ranked student within a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentScore {
    pub name: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
}

/// One point of a subject's average over successive terms/exams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
}

/// Pre-aggregated exam performance for a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassPerformance {
    pub class_id: i64,
    pub class_name: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub exam: Option<String>,
    #[serde(default)]
    pub student_count: u32,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub highest: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub lowest: f64,
    /// Share of students at or above the pass mark, in percent.
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub pass_rate: f64,
    #[serde(default)]
    pub subject_averages: Vec<SubjectAverage>,
    #[serde(default)]
    pub grade_distribution: Vec<GradeCount>,
    #[serde(default)]
    pub top_students: Vec<StudentScore>,
}

/// Pre-aggregated exam performance for a subject across classes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub subject_id: i64,
    pub subject_name: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub average: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub highest: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub lowest: f64,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub pass_rate: f64,
    #[serde(default)]
    pub class_averages: Vec<ClassAverage>,
    #[serde(default)]
    pub grade_distribution: Vec<GradeCount>,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

// =============================================================================
// PORTAL VIEWS
// =============================================================================

/// A class as seen by a staff member (their assignments).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffClass {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub is_class_teacher: bool,
    #[serde(default)]
    pub student_count: Option<u32>,
}

/// A child linked to the current parent account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParentChild {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub admission_number: String,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub latest_average: Option<f64>,
}

// =============================================================================
// DESERIALIZE HELPERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn f64_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<f64, E> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| E::custom("expected finite number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected numeric string, got {s:?}"))),
        _ => Err(E::custom("expected number or numeric string")),
    }
}

/// Accept either a JSON number or a numeric string (decimal fields are often
/// serialized as strings by the backend).
fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    f64_from_value(&value)
}

fn deserialize_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    f64_from_value(&value).map(Some)
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let raw = f64_from_value::<D::Error>(&value)?;
    if raw.fract() != 0.0 || raw < 0.0 || raw > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!("expected non-negative integer, got {raw}")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(raw as u32)
}
