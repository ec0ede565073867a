//! Selection and loaded data for analytics views.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::api::AnalyticsFilter;

/// Which backend filter a select controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Term,
    Exam,
}

impl FilterKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Term => "Term",
            Self::Exam => "Exam",
        }
    }

    /// Placeholder option meaning "no filter".
    #[must_use]
    pub fn any_label(self) -> &'static str {
        match self {
            Self::Term => "All terms",
            Self::Exam => "All exams",
        }
    }
}

/// Target and filter a fetch was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsRequest {
    pub target: i64,
    pub filter: AnalyticsFilter,
}

/// What an analytics page is looking at and what it has loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsState<T> {
    /// Class or subject id being charted.
    pub target: Option<i64>,
    pub term: String,
    pub exam: String,
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Request whose response will be accepted; anything else is dropped.
    pending: Option<AnalyticsRequest>,
}

impl<T> Default for AnalyticsState<T> {
    fn default() -> Self {
        Self {
            target: None,
            term: String::new(),
            exam: String::new(),
            data: None,
            loading: false,
            error: None,
            pending: None,
        }
    }
}

impl<T> AnalyticsState<T> {
    /// Backend filter for the current term/exam selection.
    #[must_use]
    pub fn filter(&self) -> AnalyticsFilter {
        AnalyticsFilter {
            term: Some(self.term.clone()).filter(|t| !t.trim().is_empty()),
            exam: Some(self.exam.clone()).filter(|e| !e.trim().is_empty()),
            class_id: None,
        }
    }

    /// Request matching the current selection, if a target is chosen.
    #[must_use]
    pub fn request(&self) -> Option<AnalyticsRequest> {
        self.target.map(|target| AnalyticsRequest { target, filter: self.filter() })
    }

    /// Forget loaded data and any in-flight request after a selection change.
    fn reset(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
        self.pending = None;
    }

    /// Select a new target; stale data is dropped.
    pub fn select(&mut self, target: Option<i64>) {
        if target != self.target {
            self.target = target;
            self.reset();
        }
    }

    /// Parse a `<select>` value into a target id; blank or invalid clears it.
    pub fn select_raw(&mut self, raw: &str) {
        self.select(raw.trim().parse::<i64>().ok());
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.term {
            self.term = term;
            self.reset();
        }
    }

    pub fn set_exam(&mut self, exam: impl Into<String>) {
        let exam = exam.into();
        if exam != self.exam {
            self.exam = exam;
            self.reset();
        }
    }

    #[must_use]
    pub fn filter_value(&self, kind: FilterKind) -> &str {
        match kind {
            FilterKind::Term => &self.term,
            FilterKind::Exam => &self.exam,
        }
    }

    pub fn set_filter(&mut self, kind: FilterKind, value: impl Into<String>) {
        match kind {
            FilterKind::Term => self.set_term(value),
            FilterKind::Exam => self.set_exam(value),
        }
    }

    /// True when a target is selected and nothing is loaded or in flight.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.target.is_some() && self.data.is_none() && !self.loading && self.error.is_none()
    }

    /// Mark the current selection as in flight and return what to fetch.
    pub fn begin_load(&mut self) -> Option<AnalyticsRequest> {
        let request = self.request()?;
        self.loading = true;
        self.error = None;
        self.pending = Some(request.clone());
        Some(request)
    }

    /// Store a response if it answers the request still pending.
    pub fn finish(&mut self, request: &AnalyticsRequest, result: Result<T, String>) {
        if self.pending.as_ref() != Some(request) {
            return;
        }
        self.pending = None;
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(message) => self.error = Some(message),
        }
    }
}
