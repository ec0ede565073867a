use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn from_lookup_parses_overrides_and_trims_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.school.test/"),
        ("BACKEND_TIMEOUT_SECS", "12"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 3 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.school.test");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 12, connect_secs: 3 });
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".to_owned(), reason: "expected 1-65535" });
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])).is_err());
}

#[test]
fn backend_url_requires_http_scheme() {
    assert!(ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8000")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://")])).is_err());
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "ftp://x")])).unwrap_err();
    assert!(err.to_string().contains("BACKEND_URL"));
}

#[test]
fn zero_or_text_timeouts_are_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("BACKEND_CONNECT_TIMEOUT_SECS", "soon")])).is_err());
}
