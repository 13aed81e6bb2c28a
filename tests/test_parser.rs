use fileserve::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /foo.txt HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target.encoded_path(), b"foo.txt");
    assert_eq!(&req[target.span()], b"foo.txt");
}

#[test]
fn test_parse_post_is_no_match() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    assert_eq!(parse_request_line(req), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_root_path_is_empty() {
    let target = parse_request_line(b"GET / HTTP/1.1\r\n\r\n").unwrap();

    assert!(target.is_empty());
    assert_eq!(target.encoded_path(), b"");
}

#[test]
fn test_parse_keeps_encoded_path() {
    let target = parse_request_line(b"GET /my%20file.html HTTP/1.0\r\n\r\n").unwrap();
    assert_eq!(target.encoded_path(), b"my%20file.html");
}

#[test]
fn test_parse_nested_path_and_query() {
    let target = parse_request_line(b"GET /docs/a.txt?x=1 HTTP/1.1\r\n").unwrap();
    assert_eq!(target.encoded_path(), b"docs/a.txt?x=1");
}

#[test]
fn test_parse_accepts_any_http1_minor() {
    assert!(parse_request_line(b"GET /a HTTP/1.0\r\n").is_ok());
    assert!(parse_request_line(b"GET /a HTTP/1.1\r\n").is_ok());
    // Only the "HTTP/1" prefix is checked
    assert!(parse_request_line(b"GET /a HTTP/1").is_ok());
}

#[test]
fn test_parse_rejects_other_versions() {
    assert_eq!(parse_request_line(b"GET /a HTTP/2\r\n"), Err(ParseError::NoMatch));
    assert_eq!(parse_request_line(b"GET /a FOO/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_rejects_lowercase_method() {
    assert_eq!(parse_request_line(b"get /a HTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_requires_leading_slash() {
    assert_eq!(parse_request_line(b"GET a HTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_rejects_double_space() {
    assert_eq!(parse_request_line(b"GET /a  HTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_rejects_path_with_space() {
    assert_eq!(parse_request_line(b"GET /a b HTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_line_break_inside_path_is_no_match() {
    assert_eq!(parse_request_line(b"GET /a\r\nHTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_must_match_at_start() {
    assert_eq!(parse_request_line(b" GET /a HTTP/1.1\r\n"), Err(ParseError::NoMatch));
}

#[test]
fn test_parse_incomplete_prefixes() {
    for partial in [&b""[..], b"G", b"GET", b"GET /", b"GET /index", b"GET /index ", b"GET /index HTTP/"] {
        assert_eq!(parse_request_line(partial), Err(ParseError::Incomplete), "{:?}", partial);
    }
}

#[test]
fn test_parse_ignores_rest_of_request() {
    let req = b"GET /x.png HTTP/1.1\r\nHost: h\r\nX-Junk: GET /other HTTP/1.1\r\n\r\nbody";
    assert_eq!(parse_request_line(req).unwrap().encoded_path(), b"x.png");
}
