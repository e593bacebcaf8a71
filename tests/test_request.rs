use webserver::http::headers::Headers;
use webserver::http::request::{Method, Request, RequestBuilder};
use webserver::http::request_line::RequestLine;

fn request_with_headers(method: Method, target: &str, headers: &[(&str, &str)]) -> Request {
    let mut builder = RequestBuilder::new().method(method).target(target);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    builder.build().unwrap()
}

#[test]
fn test_request_header_retrieval() {
    let req = request_with_headers(
        Method::GET,
        "/",
        &[("Host", "example.com"), ("Content-Type", "application/json")],
    );

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_case_sensitive() {
    let req = request_with_headers(Method::GET, "/", &[("Host", "example.com")]);

    assert_eq!(req.header("host"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = request_with_headers(Method::POST, "/api", &[("Content-Length", "42")]);

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = request_with_headers(Method::GET, "/", &[]);

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let req = request_with_headers(Method::POST, "/api", &[("Content-Length", "not-a-number")]);

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_builder_splits_query_from_target() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/user/login?userId=javajigi&password=pass")
        .build()
        .unwrap();

    assert_eq!(req.path(), "/user/login");
    assert_eq!(req.query_string().get("userId"), Some("javajigi"));
    assert_eq!(req.request_line.protocol, "HTTP");
    assert_eq!(req.request_line.version, "1.1");
}

#[test]
fn test_request_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_form_body() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/user/create")
        .body(b"userId=javajigi&password=password&name=JaeSung".to_vec())
        .build()
        .unwrap();

    let form = req.form();
    assert_eq!(form.get("userId"), Some("javajigi"));
    assert_eq!(form.get("name"), Some("JaeSung"));
}

#[test]
fn test_request_form_non_utf8_body_is_empty() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/upload")
        .body(vec![0xff, 0xfe, 0x3d])
        .build()
        .unwrap();

    assert!(req.form().is_empty());
}

#[test]
fn test_request_struct_literal() {
    let req = Request {
        request_line: RequestLine::parse("DELETE /users/1 HTTP/1.0").unwrap(),
        headers: Headers::new(),
        body: vec![],
    };

    assert_eq!(req.method(), Method::DELETE);
    assert_eq!(req.path(), "/users/1");
    assert_eq!(req.request_line.version, "1.0");
}

#[test]
fn test_request_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

#[test]
fn test_request_method_from_string() {
    assert_eq!("GET".parse::<Method>().unwrap(), Method::GET);
    assert_eq!("POST".parse::<Method>().unwrap(), Method::POST);
    assert!("INVALID".parse::<Method>().is_err());
    assert!("get".parse::<Method>().is_err()); // Case-sensitive
}

#[test]
fn test_request_method_display_matches_token() {
    for token in ["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS", "PATCH", "CONNECT", "TRACE"] {
        assert_eq!(token.parse::<Method>().unwrap().to_string(), token);
    }
}
