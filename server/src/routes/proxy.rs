//! Same-origin REST proxy to the school-management backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Every `/api/...` request is replayed
//! against `BACKEND_URL` with the caller's bearer token, so the backend never
//! needs CORS and tokens never leave the origin they were issued for.
//!
//! ERROR HANDLING
//! ==============
//! Backend responses (including 4xx/5xx) are mirrored unchanged. Only
//! transport failures are reported by the proxy itself: `502` when the
//! backend is unreachable, `504` when it times out.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

use crate::config::ServerConfig;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request headers passed through to the backend.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

/// Response headers copied back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CONTENT_DISPOSITION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid API path: {0}")]
    BadPath(String),
    #[error("backend timed out")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadPath(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::ClientBuild(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the browser; transport details stay in the logs.
    fn public_detail(&self) -> &'static str {
        match self {
            Self::BadPath(_) => "Invalid API path.",
            Self::Timeout => "The school server took too long to respond.",
            Self::Unreachable(_) | Self::ClientBuild(_) => "The school server is unavailable.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.public_detail() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Shared HTTP client and backend origin.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: Arc<str>,
}

impl ProxyState {
    /// Build the shared backend client from config.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::ClientBuild` if the TLS backend cannot initialize.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { client, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}

/// Backend URL for `/api/{path}?{query}`.
///
/// # Errors
///
/// Returns `ProxyError::BadPath` for empty, dot, or absolute segments, and for
/// decoded `?`/`#` that would change the upstream query or fragment.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let bad = path.is_empty()
        || path.starts_with('/')
        || path.contains(['\\', '?', '#'])
        || path.split('/').any(|seg| seg == "." || seg == "..");
    if bad {
        return Err(ProxyError::BadPath(path.to_owned()));
    }
    let mut url = format!("{}/api/{path}", backend_url.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

/// Subset of `incoming` the backend should see, plus the request id.
#[must_use]
pub fn forward_request_headers(incoming: &HeaderMap, request_id: &HeaderValue) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out.insert(HeaderName::from_static(REQUEST_ID_HEADER), request_id.clone());
    out
}

/// Subset of backend response headers mirrored to the browser.
#[must_use]
pub fn forward_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_RESPONSE_HEADERS {
        if let Some(value) = upstream.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request_id_raw = uuid::Uuid::new_v4().to_string();
    let request_id = HeaderValue::from_str(&request_id_raw).map_err(|e| ProxyError::Unreachable(e.to_string()))?;
    let span = tracing::info_span!("proxy", request_id = %request_id_raw, %method, path = %path);

    async move {
        let url = upstream_url(&state.backend_url, &path, query.as_deref())?;
        let mut request = state.client.request(method, &url).headers(forward_request_headers(&headers, &request_id));
        if !body.is_empty() {
            request = request.body(body);
        }

        let upstream = request.send().await.map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(error = %e, status = %err.status(), "backend request failed");
            err
        })?;

        let status = upstream.status();
        let mut response_headers = forward_response_headers(upstream.headers());
        response_headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), request_id.clone());
        let bytes = upstream.bytes().await.map_err(|e| ProxyError::from_reqwest(&e))?;

        if status.is_server_error() {
            tracing::warn!(%status, "backend error");
        } else {
            tracing::debug!(%status, bytes = bytes.len(), "proxied");
        }
        Ok((status, response_headers, bytes).into_response())
    }
    .instrument(span)
    .await
}
