use super::*;
use crate::config::{BackendTimeouts, ServerConfig};
use axum::Router;
use axum::routing::any;

fn config(backend_url: &str) -> ServerConfig {
    ServerConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 1 },
    }
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Fake backend that echoes what it received as JSON.
async fn echo(method: Method, uri: axum::http::Uri, headers: HeaderMap, body: Bytes) -> Response {
    let get = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let payload = serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": get("authorization"),
        "cookie": get("cookie"),
        "request_id": get(REQUEST_ID_HEADER),
        "body": String::from_utf8_lossy(&body),
    });
    let status = if uri.path().ends_with("/missing/") { StatusCode::NOT_FOUND } else { StatusCode::OK };
    (status, [(header::CONTENT_DISPOSITION, "inline")], axum::Json(payload)).into_response()
}

fn proxy_router(state: ProxyState) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(state)
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    let url = upstream_url("http://backend:8000", "subjects/", Some("page=2&search=math")).expect("url");
    assert_eq!(url, "http://backend:8000/api/subjects/?page=2&search=math");
}

#[test]
fn upstream_url_omits_empty_query() {
    assert_eq!(upstream_url("http://b/", "classes/4/", Some("")).expect("url"), "http://b/api/classes/4/");
    assert_eq!(upstream_url("http://b", "classes/4/", None).expect("url"), "http://b/api/classes/4/");
}

#[test]
fn upstream_url_rejects_decoded_query_and_fragment() {
    // `/api/foo%3Fx=1` arrives percent-decoded as `foo?x=1`.
    for path in ["foo?x=1", "subjects/#frag"] {
        assert!(matches!(upstream_url("http://b", path, None), Err(ProxyError::BadPath(_))), "{path}");
    }
}

#[test]
fn upstream_url_rejects_traversal() {
    for path in ["", "../admin/", "subjects/../../etc", "./x", "/abs", "a\\b"] {
        assert!(matches!(upstream_url("http://b", path, None), Err(ProxyError::BadPath(_))), "{path}");
    }
}

// =============================================================================
// Header filtering
// =============================================================================

#[test]
fn request_headers_keep_allow_list_and_add_request_id() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let id = HeaderValue::from_static("req-1");
    let out = forward_request_headers(&incoming, &id);

    assert_eq!(out.get(header::AUTHORIZATION).expect("auth"), "Bearer abc");
    assert_eq!(out.get(header::CONTENT_TYPE).expect("ct"), "application/json");
    assert_eq!(out.get(REQUEST_ID_HEADER).expect("id"), "req-1");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn response_headers_keep_content_type_and_disposition_only() {
    let mut upstream = HeaderMap::new();
    upstream.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    upstream.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("attachment; filename=x.csv"));
    upstream.insert(header::SET_COOKIE, HeaderValue::from_static("sid=2"));

    let out = forward_response_headers(&upstream);
    assert_eq!(out.len(), 2);
    assert!(out.get(header::SET_COOKIE).is_none());
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::BadPath("..".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forward_replays_request_against_backend() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let state = ProxyState::new(&config(&backend)).expect("state");
    let host = spawn(proxy_router(state)).await;

    let res = reqwest::Client::new()
        .post(format!("{host}/api/subjects/?page=3"))
        .header("authorization", "Bearer school-token")
        .header("cookie", "sid=1")
        .body(r#"{"name":"Maths"}"#)
        .send()
        .await
        .expect("send");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.headers().get("content-disposition").expect("disposition"), "inline");
    let request_id = res.headers().get(REQUEST_ID_HEADER).expect("request id").to_str().expect("ascii").to_owned();

    let echoed: serde_json::Value = res.json().await.expect("json");
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["uri"], "/api/subjects/?page=3");
    assert_eq!(echoed["authorization"], "Bearer school-token");
    assert_eq!(echoed["cookie"], serde_json::Value::Null);
    assert_eq!(echoed["request_id"], request_id.as_str());
    assert_eq!(echoed["body"], r#"{"name":"Maths"}"#);
}

#[tokio::test]
async fn forward_mirrors_backend_error_status() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let state = ProxyState::new(&config(&backend)).expect("state");
    let host = spawn(proxy_router(state)).await;

    let res = reqwest::get(format!("{host}/api/classes/missing/")).await.expect("send");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forward_reports_bad_gateway_when_backend_is_down() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let state = ProxyState::new(&config(&format!("http://{addr}"))).expect("state");
    let host = spawn(proxy_router(state)).await;

    let res = reqwest::get(format!("{host}/api/schools/me/")).await.expect("send");
    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = res.json().await.expect("json");
    assert_eq!(body["detail"], "The school server is unavailable.");
}

#[tokio::test]
async fn forward_refuses_encoded_query_in_path() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let state = ProxyState::new(&config(&backend)).expect("state");
    let host = spawn(proxy_router(state)).await;

    let res = reqwest::get(format!("{host}/api/subjects%3Fis_active=false")).await.expect("send");
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}
