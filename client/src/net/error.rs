//! HTTP failure interpretation for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect raw statuses. Every failed call becomes an `ApiError`
//! and pages render `user_message()` in an inline error banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by REST client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The segment token is missing, expired, or rejected (401).
    #[error("session expired")]
    Unauthorized,

    /// The token is valid but lacks access to the resource (403).
    #[error("forbidden")]
    Forbidden,

    /// The resource does not exist (404).
    #[error("not found")]
    NotFound,

    /// The backend rejected the submitted data (400/409/422).
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Any other non-success status.
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Interpret a non-success HTTP status and its (possibly empty) body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 409 | 422 => Self::Validation { message: validation_message(body) },
            _ => Self::Server { status },
        }
    }

    /// Text shown to the user in an error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please log in again.".to_owned(),
            Self::Forbidden => "You do not have permission to do that.".to_owned(),
            Self::NotFound => "The requested record no longer exists.".to_owned(),
            Self::Validation { message } => message.clone(),
            Self::Server { status } => format!("The server could not complete the request ({status})."),
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

/// Flatten a backend validation body into one line.
///
/// Accepts `{"detail": "..."}`, `{"field": ["msg", ...], ...}` and
/// `{"non_field_errors": [...]}` shapes. Field keys are sorted so the message
/// is stable. Unparseable bodies fall back to a generic message.
pub(crate) fn validation_message(body: &str) -> String {
    const FALLBACK: &str = "Please check the form and try again.";

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return FALLBACK.to_owned();
    };
    if let Some(detail) = value.get("detail").and_then(serde_json::Value::as_str) {
        return detail.to_owned();
    }
    let Some(map) = value.as_object() else {
        return FALLBACK.to_owned();
    };

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut parts = Vec::new();
    for key in keys {
        let messages = match &map[key] {
            serde_json::Value::String(s) => vec![s.clone()],
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };
        if messages.is_empty() {
            continue;
        }
        let joined = messages.join(" ");
        if key == "non_field_errors" {
            parts.push(joined);
        } else {
            parts.push(format!("{key}: {joined}"));
        }
    }

    if parts.is_empty() { FALLBACK.to_owned() } else { parts.join("; ") }
}
