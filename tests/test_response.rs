use std::path::PathBuf;

use bytes::Bytes;
use webserver::files::DirectoryProvider;
use webserver::http::headers::Headers;
use webserver::http::response::{HTML_UTF8, Response, ResponseBuilder};
use webserver::http::status::{StatusCode, StatusLine};

fn fixtures() -> DirectoryProvider {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    DirectoryProvider::new([base.join("templates"), base.join("static")])
}

/// Splits serialized bytes into (head, body) at the first blank line.
fn split_wire(bytes: &[u8]) -> (String, Vec<u8>) {
    let pos = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header terminator");
    let head = String::from_utf8(bytes[..pos].to_vec()).unwrap();
    (head, bytes[pos + 4..].to_vec())
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NoContent.as_u16(), 204);
    assert_eq!(StatusCode::Found.as_u16(), 302);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Found.reason_phrase(), "Found");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_status_line_display() {
    let line = StatusLine::new(StatusCode::NotFound);

    assert_eq!(line.to_string(), "HTTP/1.1 404 Not Found");
    assert_eq!(line.protocol(), "HTTP");
    assert_eq!(line.version(), "1.1");
    assert_eq!(line.code(), "404");
    assert_eq!(line.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_content_sets_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content("text/plain", body.clone())
        .build();

    assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
    assert_eq!(response.headers.get("Content-Length"), Some(body.len().to_string().as_str()));
    assert_eq!(response.body, Bytes::from(body));
}

#[test]
fn test_response_builder_header_replaces() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-Custom", "one")
        .header("X-Custom", "two")
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.headers.get("X-Custom"), Some("two"));
}

#[test]
fn test_response_builder_body_leaves_headers_alone() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"raw".to_vec())
        .build();

    assert!(response.headers.is_empty());
    assert_eq!(response.body.as_ref(), b"raw");
}

#[test]
fn test_from_bytes_is_html() {
    let response = Response::from_bytes(StatusCode::Ok, b"<h1>hi</h1>".to_vec());

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers.get("Content-Type"), Some(HTML_UTF8));
    assert_eq!(response.headers.get("Content-Length"), Some("11"));
}

#[test]
fn test_redirect_with_cookie() {
    let response = Response::redirect("/index.html", [("Set-Cookie", "logined=true; Path=/")]);

    assert_eq!(response.status(), 302);
    assert_eq!(response.status_line.reason_phrase(), "Found");
    assert_eq!(response.headers.get("Location"), Some("/index.html"));
    assert_eq!(response.headers.get("Set-Cookie"), Some("logined=true; Path=/"));
    assert!(response.body.is_empty());
}

#[test]
fn test_redirect_extra_location_overwrites() {
    let response = Response::redirect("/a.html", [("Location", "/b.html")]);

    assert_eq!(response.headers.get("Location"), Some("/b.html"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_found_has_only_location() {
    let response = Response::found("/index.html");

    assert_eq!(response.status(), 302);
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_with_status_only_is_bare() {
    let response = Response::with_status_only(StatusCode::NoContent);

    assert_eq!(response.status(), 204);
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
    assert_eq!(response.serialize(), b"HTTP/1.1 204 No Content\r\n\r\n".to_vec());
}

#[test]
fn test_from_parts_defaults() {
    let response = Response::from_parts(None, None, None);

    assert_eq!(response.status(), 400);
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());

    let mut headers = Headers::new();
    headers.insert("X-Kept", "yes");
    let response = Response::from_parts(
        Some(StatusLine::new(StatusCode::Ok)),
        Some(headers),
        Some(Bytes::from_static(b"ok")),
    );
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers.get("X-Kept"), Some("yes"));
    assert_eq!(response.body.as_ref(), b"ok");
}

#[test]
fn test_serialize_exact_bytes() {
    let response = Response::redirect("/index.html", [("Set-Cookie", "logined=true; Path=/")]);

    assert_eq!(
        response.serialize(),
        b"HTTP/1.1 302 Found\r\nLocation: /index.html\r\nSet-Cookie: logined=true; Path=/\r\n\r\n"
            .to_vec()
    );
}

#[test]
fn test_serialize_keeps_binary_body() {
    let body = vec![0u8, 159, 146, 150, 255];
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content("image/png", body.clone())
        .build();

    let (head, wire_body) = split_wire(&response.serialize());
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(wire_body, body);
}

#[test]
fn test_from_file_content_length_matches_wire_body() {
    let response = Response::from_file(&fixtures(), "/index.html", StatusCode::Ok);

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers.get("Content-Type"), Some("text/html"));

    let (head, body) = split_wire(&response.serialize());
    let declared: usize = head
        .lines()
        .find_map(|l| l.strip_prefix("Content-Length: "))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(declared, body.len());

    let on_disk = std::fs::read(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/templates/index.html"),
    )
    .unwrap();
    assert_eq!(body, on_disk);
}

#[test]
fn test_from_file_searches_roots_in_order() {
    let response = Response::from_file(&fixtures(), "/css/styles.css", StatusCode::Ok);

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers.get("Content-Type"), Some("text/css"));
}

#[test]
fn test_from_file_missing_is_internal_error() {
    let response = Response::from_file(&fixtures(), "/nope.html", StatusCode::Ok);

    assert_eq!(response, Response::internal_error());
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_from_file_unsupported_mime_is_internal_error() {
    let response = Response::from_file(&fixtures(), "/data.xyz", StatusCode::Ok);

    assert_eq!(response.status(), 500);
}
