use bytes::Bytes;

use crate::files::FileProvider;
use crate::http::headers::{CONTENT_LENGTH, CONTENT_TYPE, Headers, LOCATION};
use crate::http::mime;
use crate::http::status::{StatusCode, StatusLine};

/// Content type used for in-memory HTML bodies.
pub const HTML_UTF8: &str = "text/html;charset=utf-8";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Contains the status line, headers, and response body. Every component is
/// always present; see [`Response::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status line
    pub status_line: StatusLine,
    /// HTTP headers in the order they were set
    pub headers: Headers,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use webserver::http::response::ResponseBuilder;
/// # use webserver::http::status::StatusCode;
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content("application/json", b"{}".to_vec())
///     .build();
/// assert_eq!(response.headers.get("Content-Length"), Some("2"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Headers,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// Adds or replaces a header. Names are case-sensitive.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Merges every pair from `headers`, later values replacing earlier ones.
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in headers {
            self.headers.insert(k, v);
        }
        self
    }

    /// Sets the body together with matching Content-Type and Content-Length.
    pub fn content(self, content_type: &str, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(body)
    }

    /// Sets the raw body without touching any header.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status_line: StatusLine::new(self.status),
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Assembles a response from optional parts.
    ///
    /// A missing status line becomes `400 Bad Request`; missing headers or
    /// body become empty.
    pub fn from_parts(
        status_line: Option<StatusLine>,
        headers: Option<Headers>,
        body: Option<Bytes>,
    ) -> Self {
        Self {
            status_line: status_line.unwrap_or_else(|| StatusLine::new(StatusCode::BadRequest)),
            headers: headers.unwrap_or_default(),
            body: body.unwrap_or_default(),
        }
    }

    /// Loads `path` from the serving root and wraps it with its MIME type.
    ///
    /// Any failure, whether the file is missing, unreadable or has an
    /// unsupported extension, yields [`Response::internal_error`].
    pub fn from_file(provider: &dyn FileProvider, path: &str, status: StatusCode) -> Self {
        match provider.load(path) {
            Ok(bytes) => Self::from_file_contents(path, bytes, status),
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to load file for response");
                Self::internal_error()
            }
        }
    }

    /// Wraps already loaded file contents, labelled by the MIME type of `path`.
    ///
    /// An unsupported extension yields [`Response::internal_error`].
    pub fn from_file_contents(path: &str, bytes: impl Into<Bytes>, status: StatusCode) -> Self {
        match mime::content_type_for(path) {
            Ok(content_type) => ResponseBuilder::new(status)
                .content(content_type, bytes)
                .build(),
            Err(e) => {
                tracing::warn!(path, error = %e, "Cannot resolve content type");
                Self::internal_error()
            }
        }
    }

    /// An HTML response (`text/html;charset=utf-8`) with the given body.
    pub fn from_bytes(status: StatusCode, bytes: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(status).content(HTML_UTF8, bytes).build()
    }

    /// A `302 Found` redirect to `location` with an empty body.
    ///
    /// `Location` is set first, then `extra_headers` are merged in order, so an
    /// extra `Location` entry replaces the argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserver::http::response::Response;
    /// let response = Response::redirect("/index.html", [("Set-Cookie", "logined=true; Path=/")]);
    /// assert_eq!(response.status_line.code(), "302");
    /// assert_eq!(response.headers.get("Location"), Some("/index.html"));
    /// assert!(response.body.is_empty());
    /// ```
    pub fn redirect<K, V>(location: &str, extra_headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ResponseBuilder::new(StatusCode::Found)
            .header(LOCATION, location)
            .headers(extra_headers)
            .build()
    }

    /// A redirect carrying only the `Location` header.
    pub fn found(location: &str) -> Self {
        Self::redirect(location, std::iter::empty::<(String, String)>())
    }

    /// Status line only: no headers, no body.
    pub fn with_status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::with_status_only(StatusCode::NotFound)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::with_status_only(StatusCode::BadRequest)
    }

    /// The fixed 500 Internal Server Error response, with empty headers and body.
    pub fn internal_error() -> Self {
        Self::with_status_only(StatusCode::InternalServerError)
    }

    /// Numeric status code, e.g. `302`.
    pub fn status(&self) -> u16 {
        self.status_line.code().parse().unwrap_or(0)
    }

    /// Serializes the response to its exact wire form.
    ///
    /// ```text
    /// HTTP/1.1 302 Found\r\n
    /// Location: /index.html\r\n
    /// \r\n
    /// <body bytes>
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128 + self.body.len());

        // Status line
        buf.extend_from_slice(self.status_line.to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");

        // Headers
        self.headers.write_to(&mut buf);

        // Header/body separator
        buf.extend_from_slice(b"\r\n");

        // Body
        buf.extend_from_slice(&self.body);

        buf
    }
}
