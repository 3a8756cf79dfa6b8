use tinyserve::http::request::{Method, Protocol, RequestLine};

#[test]
fn test_method_accepts_exact_get() {
    assert_eq!(Method::from_token("GET"), Some(Method::GET));
}

#[test]
fn test_method_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), None);
    assert_eq!(Method::from_token("Get"), None);
}

#[test]
fn test_method_rejects_other_verbs() {
    assert_eq!(Method::from_token("POST"), None);
    assert_eq!(Method::from_token("HEAD"), None);
    assert_eq!(Method::from_token(""), None);
}

#[test]
fn test_method_rejects_trailing_characters() {
    assert_eq!(Method::from_token("GETX"), None);
    assert_eq!(Method::from_token("GET "), None);
}

#[test]
fn test_protocol_accepts_both_versions() {
    assert_eq!(Protocol::from_token("HTTP/1.0"), Some(Protocol::Http10));
    assert_eq!(Protocol::from_token("HTTP/1.1"), Some(Protocol::Http11));
}

#[test]
fn test_protocol_requires_exact_literal() {
    assert_eq!(Protocol::from_token("HTTP/1.2"), None);
    assert_eq!(Protocol::from_token("HTTP/1.10"), None);
    assert_eq!(Protocol::from_token("HTTP/1.0x"), None);
    assert_eq!(Protocol::from_token("http/1.0"), None);
    assert_eq!(Protocol::from_token(""), None);
}

#[test]
fn test_request_line_validation_helpers() {
    let line = RequestLine {
        method: "GET".to_string(),
        target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
    };

    assert_eq!(line.method(), Some(Method::GET));
    assert_eq!(line.protocol(), Some(Protocol::Http11));
}

#[test]
fn test_request_line_invalid_tokens() {
    let line = RequestLine {
        method: "DELETE".to_string(),
        target: "/".to_string(),
        version: "SPDY/3".to_string(),
    };

    assert_eq!(line.method(), None);
    assert_eq!(line.protocol(), None);
}
