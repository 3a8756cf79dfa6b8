use tinyserve::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.0\r\n\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.target, "/index.html");
    assert_eq!(line.version, "HTTP/1.0");
}

#[test]
fn test_parse_strips_carriage_return() {
    let req = b"GET / HTTP/1.1\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.version, "HTTP/1.1");
}

#[test]
fn test_parse_bare_newline_terminator() {
    let req = b"GET / HTTP/1.0\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.version, "HTTP/1.0");
}

#[test]
fn test_parse_collapses_whitespace_runs() {
    let req = b"GET   \t /file.txt  \tHTTP/1.0\r\n";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.target, "/file.txt");
    assert_eq!(line.version, "HTTP/1.0");
}

#[test]
fn test_parse_ignores_everything_after_first_line() {
    let req = b"GET /a HTTP/1.1\r\nHost: example.com\r\nX-Garbage\r\n\r\nbody bytes";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.target, "/a");
}

#[test]
fn test_parse_no_trailing_newline() {
    let req = b"GET /a HTTP/1.0";
    let line = parse_request_line(req).unwrap();

    assert_eq!(line.target, "/a");
    assert_eq!(line.version, "HTTP/1.0");
}

#[test]
fn test_parse_missing_protocol_token() {
    let req = b"GET /\r\n\r\n";
    let result = parse_request_line(req);

    assert_eq!(result.unwrap_err(), ParseError::MissingTokens);
}

#[test]
fn test_parse_single_token() {
    let req = b"GET\r\n";
    let result = parse_request_line(req);

    assert_eq!(result.unwrap_err(), ParseError::MissingTokens);
}

#[test]
fn test_parse_empty_line() {
    let req = b"\r\n";
    let result = parse_request_line(req);

    assert_eq!(result.unwrap_err(), ParseError::MissingTokens);
}

#[test]
fn test_parse_rejects_invalid_utf8() {
    let req = b"GET /\xff\xfe HTTP/1.0\r\n";
    let result = parse_request_line(req);

    assert_eq!(result.unwrap_err(), ParseError::InvalidEncoding);
}

#[test]
fn test_parse_owned_tokens_outlive_buffer() {
    let line = {
        let req = b"GET /owned HTTP/1.1\r\n".to_vec();
        parse_request_line(&req).unwrap()
    };

    assert_eq!(line.target, "/owned");
}
