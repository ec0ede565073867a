//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer token
//! of the calling segment attached.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since the
//! tokens only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A `401` clears the segment's stored token and profile and sends the browser
//! to that segment's login page; the caller still receives
//! `ApiError::Unauthorized` so it can stop its busy state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::LoginResponse;
use super::types::{
    AnalyticsFilters, ClassPayload, ClassPerformance, ClassRoom, FeeInstructions, FeeInstructionsPayload, LoginRequest,
    Page, ParentChild, School, SchoolRegistration, SchoolSummary, Staff, StaffClass, StaffPayload, Student, Subject,
    SubjectPayload, SubjectPerformance,
};
use crate::state::session::Segment;

/// Default rows per page for list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound used when a page needs every row (e.g. select options).
pub const ALL_ROWS_PAGE_SIZE: u32 = 200;

// =============================================================================
// RESOURCES AND QUERIES
// =============================================================================

/// School-scoped CRUD collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Subjects,
    Classes,
    Staff,
    Students,
}

impl Resource {
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Subjects => "/api/subjects/",
            Self::Classes => "/api/classes/",
            Self::Staff => "/api/schools/staff/",
            Self::Students => "/api/students/",
        }
    }

    #[must_use]
    pub fn item_path(self, id: i64) -> String {
        format!("{}{id}/", self.collection_path())
    }

    /// Bulk CSV import endpoint, for resources that support it.
    #[must_use]
    pub fn upload_path(self) -> Option<String> {
        match self {
            Self::Subjects | Self::Classes => Some(format!("{}upload/", self.collection_path())),
            Self::Staff | Self::Students => None,
        }
    }
}

/// Pagination, search, and filter parameters for list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub active: Option<bool>,
    pub class_id: Option<i64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE, search: String::new(), active: None, class_id: None }
    }
}

impl ListQuery {
    /// Query-string pairs; empty/absent filters are omitted.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string()), ("page_size", self.page_size.max(1).to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(active) = self.active {
            pairs.push(("is_active", active.to_string()));
        }
        if let Some(class_id) = self.class_id {
            pairs.push(("class_id", class_id.to_string()));
        }
        pairs
    }
}

/// Term/exam/class filter for analytics endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsFilter {
    pub term: Option<String>,
    pub exam: Option<String>,
    pub class_id: Option<i64>,
}

impl AnalyticsFilter {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = self.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("term", term.to_owned()));
        }
        if let Some(exam) = self.exam.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            pairs.push(("exam", exam.to_owned()));
        }
        if let Some(class_id) = self.class_id {
            pairs.push(("class_id", class_id.to_string()));
        }
        pairs
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

const REGISTER_ENDPOINT: &str = "/api/schools/register/";
const SCHOOL_PROFILE_ENDPOINT: &str = "/api/schools/me/";
const SCHOOL_SUMMARY_ENDPOINT: &str = "/api/schools/summary/";
const STAFF_CLASSES_ENDPOINT: &str = "/api/staff/classes/";
const PARENT_CHILDREN_ENDPOINT: &str = "/api/parents/children/";
const ANALYTICS_FILTERS_ENDPOINT: &str = "/api/analytics/filters/";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Fee instructions are edited by the school and read by parents.
fn fee_instructions_endpoint(segment: Segment) -> &'static str {
    match segment {
        Segment::Parent => "/api/parents/fee-instructions/",
        Segment::School | Segment::Staff => "/api/schools/fee-instructions/",
    }
}

fn class_analytics_endpoint(class_id: i64) -> String {
    format!("/api/analytics/classes/{class_id}/")
}

fn subject_analytics_endpoint(subject_id: i64) -> String {
    format!("/api/analytics/subjects/{subject_id}/")
}

/// Display name for a freshly logged-in segment.
#[cfg(any(test, feature = "hydrate"))]
fn login_display_name(segment: Segment, resp: &LoginResponse) -> String {
    if let Some(name) = resp.display_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    let profile = &resp.profile;
    if let Some(name) = profile.get("name").and_then(serde_json::Value::as_str) {
        return name.to_owned();
    }
    let first = profile.get("first_name").and_then(serde_json::Value::as_str).unwrap_or_default();
    let last = profile.get("last_name").and_then(serde_json::Value::as_str).unwrap_or_default();
    let full = format!("{first} {last}").trim().to_owned();
    if full.is_empty() { segment.label().to_owned() } else { full }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::bearer_header;
    use crate::net::error::ApiError;
    use crate::state::session::{self, Segment};

    #[derive(Clone, Copy)]
    pub(super) enum Method {
        Get,
        Post,
        Put,
        Patch,
        Delete,
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn authorized(segment: Option<Segment>, method: Method, url: &str) -> RequestBuilder {
        let req = builder(method, url).header("Accept", "application/json");
        match segment.and_then(session::stored_token) {
            Some(token) => req.header("Authorization", &bearer_header(&token)),
            None => req,
        }
    }

    fn redirect_to_login(segment: Segment) {
        session::clear_segment(segment);
        log::warn!("{} session rejected; redirecting to login", segment.label());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(segment.login_path());
        }
    }

    async fn check(segment: Option<Segment>, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        if let (ApiError::Unauthorized, Some(segment)) = (&err, segment) {
            redirect_to_login(segment);
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get<T: DeserializeOwned>(
        segment: Option<Segment>,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let resp = authorized(segment, Method::Get, url)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(segment, resp).await?).await
    }

    pub(super) async fn send<B: Serialize, T: DeserializeOwned>(
        segment: Option<Segment>,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = authorized(segment, method, url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(segment, resp).await?).await
    }

    pub(super) async fn delete(segment: Segment, url: &str) -> Result<(), ApiError> {
        let resp = authorized(Some(segment), Method::Delete, url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(Some(segment), resp).await.map(|_| ())
    }

    pub(super) async fn upload<T: DeserializeOwned>(
        segment: Segment,
        url: &str,
        file: &web_sys::File,
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        let resp = authorized(Some(segment), Method::Post, url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(Some(segment), resp).await?).await
    }
}

#[cfg(feature = "hydrate")]
use transport::Method;

// =============================================================================
// AUTH
// =============================================================================

/// Register a new school via `POST /api/schools/register/`.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the backend rejects the registration.
pub async fn register_school(body: &SchoolRegistration) -> Result<School, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(None, Method::Post, REGISTER_ENDPOINT, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (body, REGISTER_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Log in to `segment` and persist the returned token and profile.
///
/// Returns the display name of the new session.
///
/// # Errors
///
/// Returns an error if the credentials are rejected or the request fails.
pub async fn login(segment: Segment, email: &str, password: &str) -> Result<String, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        let resp: LoginResponse = transport::send(None, Method::Post, segment.login_endpoint(), &body).await?;
        let display_name = login_display_name(segment, &resp);
        let info = crate::state::session::StoredInfo { display_name: display_name.clone(), profile: resp.profile.clone() };
        crate::state::session::persist_login(segment, &resp.access, &info);
        log::info!("{} login succeeded", segment.label());
        Ok(display_name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, body);
        Err(ApiError::Unavailable)
    }
}

/// Forget the stored session of `segment`. Tokens are stateless on the
/// backend, so no request is made.
pub fn logout(segment: Segment) {
    crate::state::session::clear_segment(segment);
}

/// Fetch the logged-in school's profile from `/api/schools/me/`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_school_profile() -> Result<School, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(Segment::School), SCHOOL_PROFILE_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = SCHOOL_PROFILE_ENDPOINT;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// GENERIC CRUD
// =============================================================================

async fn list<T: DeserializeOwned>(resource: Resource, query: &ListQuery) -> Result<Page<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(Segment::School), resource.collection_path(), &query.pairs()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, query);
        Err(ApiError::Unavailable)
    }
}

async fn create<B: Serialize, T: DeserializeOwned>(resource: Resource, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(Some(Segment::School), Method::Post, resource.collection_path(), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

async fn update<B: Serialize, T: DeserializeOwned>(resource: Resource, id: i64, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(Some(Segment::School), Method::Patch, &resource.item_path(id), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

async fn remove(resource: Resource, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::delete(Segment::School, &resource.item_path(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id);
        Err(ApiError::Unavailable)
    }
}

/// Upload a CSV file for bulk creation of subjects or classes.
///
/// # Errors
///
/// Returns `ApiError::NotFound` for resources without a bulk import endpoint,
/// or any transport/backend error.
#[cfg(feature = "hydrate")]
pub async fn upload_csv(
    resource: Resource,
    file: &web_sys::File,
) -> Result<super::types::CsvUploadResult, ApiError> {
    let Some(url) = resource.upload_path() else {
        return Err(ApiError::NotFound);
    };
    let result: super::types::CsvUploadResult = transport::upload(Segment::School, &url, file).await?;
    log::info!("csv import into {url}: {} created, {} rejected", result.created, result.errors.len());
    Ok(result)
}

// =============================================================================
// SUBJECTS
// =============================================================================

/// `GET /api/subjects/`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_subjects(query: &ListQuery) -> Result<Page<Subject>, ApiError> {
    list(Resource::Subjects, query).await
}

/// `POST /api/subjects/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the subject.
pub async fn create_subject(body: &SubjectPayload) -> Result<Subject, ApiError> {
    create(Resource::Subjects, body).await
}

/// `PATCH /api/subjects/{id}/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the update.
pub async fn update_subject(id: i64, body: &SubjectPayload) -> Result<Subject, ApiError> {
    update(Resource::Subjects, id, body).await
}

/// `DELETE /api/subjects/{id}/`.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_subject(id: i64) -> Result<(), ApiError> {
    remove(Resource::Subjects, id).await
}

/// `POST /api/subjects/upload/`.
///
/// # Errors
///
/// Returns an error if the upload fails.
#[cfg(feature = "hydrate")]
pub async fn upload_subjects_csv(file: &web_sys::File) -> Result<super::types::CsvUploadResult, ApiError> {
    upload_csv(Resource::Subjects, file).await
}

// =============================================================================
// CLASSES
// =============================================================================

/// `GET /api/classes/`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_classes(query: &ListQuery) -> Result<Page<ClassRoom>, ApiError> {
    list(Resource::Classes, query).await
}

/// Every class of the school, for filter and assignment selects.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_all_classes(segment: Segment) -> Result<Vec<ClassRoom>, ApiError> {
    let query = ListQuery { page_size: ALL_ROWS_PAGE_SIZE, ..ListQuery::default() };
    #[cfg(feature = "hydrate")]
    {
        let page: Page<ClassRoom> =
            transport::get(Some(segment), Resource::Classes.collection_path(), &query.pairs()).await?;
        Ok(page.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, query);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/classes/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the class.
pub async fn create_class(body: &ClassPayload) -> Result<ClassRoom, ApiError> {
    create(Resource::Classes, body).await
}

/// `PATCH /api/classes/{id}/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the update.
pub async fn update_class(id: i64, body: &ClassPayload) -> Result<ClassRoom, ApiError> {
    update(Resource::Classes, id, body).await
}

/// `DELETE /api/classes/{id}/`.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_class(id: i64) -> Result<(), ApiError> {
    remove(Resource::Classes, id).await
}

/// `POST /api/classes/upload/`.
///
/// # Errors
///
/// Returns an error if the upload fails.
#[cfg(feature = "hydrate")]
pub async fn upload_classes_csv(file: &web_sys::File) -> Result<super::types::CsvUploadResult, ApiError> {
    upload_csv(Resource::Classes, file).await
}

// =============================================================================
// STAFF
// =============================================================================

/// `GET /api/schools/staff/`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_staff(query: &ListQuery) -> Result<Page<Staff>, ApiError> {
    list(Resource::Staff, query).await
}

/// `POST /api/schools/staff/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the staff member.
pub async fn create_staff(body: &StaffPayload) -> Result<Staff, ApiError> {
    create(Resource::Staff, body).await
}

/// `PATCH /api/schools/staff/{id}/`.
///
/// # Errors
///
/// Returns an error if the backend rejects the update.
pub async fn update_staff(id: i64, body: &StaffPayload) -> Result<Staff, ApiError> {
    update(Resource::Staff, id, body).await
}

/// `DELETE /api/schools/staff/{id}/`.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_staff(id: i64) -> Result<(), ApiError> {
    remove(Resource::Staff, id).await
}

// =============================================================================
// STUDENTS
// =============================================================================

/// `GET /api/students/` (read-only in this frontend).
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_students(query: &ListQuery) -> Result<Page<Student>, ApiError> {
    list(Resource::Students, query).await
}

// =============================================================================
// FEES
// =============================================================================

/// Fetch fee-payment instructions as `segment` sees them.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_fee_instructions(segment: Segment) -> Result<FeeInstructions, ApiError> {
    let url = fee_instructions_endpoint(segment);
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(segment), url, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Replace the school's fee-payment instructions.
///
/// # Errors
///
/// Returns an error if the backend rejects the update.
pub async fn update_fee_instructions(body: &FeeInstructionsPayload) -> Result<FeeInstructions, ApiError> {
    let url = fee_instructions_endpoint(Segment::School);
    #[cfg(feature = "hydrate")]
    {
        transport::send(Some(Segment::School), Method::Put, url, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// DASHBOARDS
// =============================================================================

/// Headline counts for the school dashboard.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_school_summary() -> Result<SchoolSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(Segment::School), SCHOOL_SUMMARY_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = SCHOOL_SUMMARY_ENDPOINT;
        Err(ApiError::Unavailable)
    }
}

/// Classes assigned to the logged-in staff member.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_staff_classes() -> Result<Vec<StaffClass>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(Segment::Staff), STAFF_CLASSES_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = STAFF_CLASSES_ENDPOINT;
        Err(ApiError::Unavailable)
    }
}

/// Children linked to the logged-in parent.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_parent_children() -> Result<Vec<ParentChild>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(Segment::Parent), PARENT_CHILDREN_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = PARENT_CHILDREN_ENDPOINT;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Available terms and exams.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_analytics_filters(segment: Segment) -> Result<AnalyticsFilters, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(segment), ANALYTICS_FILTERS_ENDPOINT, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, ANALYTICS_FILTERS_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Pre-aggregated performance of one class.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_class_performance(
    segment: Segment,
    class_id: i64,
    filter: &AnalyticsFilter,
) -> Result<ClassPerformance, ApiError> {
    let url = class_analytics_endpoint(class_id);
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(segment), &url, &filter.pairs()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, url, filter);
        Err(ApiError::Unavailable)
    }
}

/// Pre-aggregated performance of one subject across classes.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn fetch_subject_performance(
    segment: Segment,
    subject_id: i64,
    filter: &AnalyticsFilter,
) -> Result<SubjectPerformance, ApiError> {
    let url = subject_analytics_endpoint(subject_id);
    #[cfg(feature = "hydrate")]
    {
        transport::get(Some(segment), &url, &filter.pairs()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, url, filter);
        Err(ApiError::Unavailable)
    }
}

/// Every active subject, for analytics selects.
///
/// # Errors
///
/// Returns an error if the request fails or the session is rejected.
pub async fn list_all_subjects(segment: Segment) -> Result<Vec<Subject>, ApiError> {
    let query = ListQuery { page_size: ALL_ROWS_PAGE_SIZE, active: Some(true), ..ListQuery::default() };
    #[cfg(feature = "hydrate")]
    {
        let page: Page<Subject> =
            transport::get(Some(segment), Resource::Subjects.collection_path(), &query.pairs()).await?;
        Ok(page.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (segment, query);
        Err(ApiError::Unavailable)
    }
}
