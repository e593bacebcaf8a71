use std::fmt;
use std::str::FromStr;

use crate::http::headers::{CONTENT_LENGTH, Headers};
use crate::http::parser::ParseError;
use crate::http::query::QueryString;
use crate::http::request_line::RequestLine;

/// HTTP request methods.
///
/// Matching is case-sensitive: `get` is not a recognized method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    CONNECT,
    TRACE,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::CONNECT => "CONNECT",
            Method::TRACE => "TRACE",
        }
    }
}

impl FromStr for Method {
    type Err = ParseError;

    /// Parses an HTTP method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserver::http::request::Method;
    /// assert_eq!("GET".parse::<Method>().unwrap(), Method::GET);
    /// assert!("get".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "OPTIONS" => Ok(Method::OPTIONS),
            "PATCH" => Ok(Method::PATCH),
            "CONNECT" => Ok(Method::CONNECT),
            "TRACE" => Ok(Method::TRACE),
            other => Err(ParseError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Built once by the wire parser and handed to exactly one handler. The body
/// holds exactly `Content-Length` bytes (empty when the header is absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Method, path, query string, protocol and version
    pub request_line: RequestLine,
    /// Request headers as key-value pairs, names as sent
    pub headers: Headers,
    /// Raw request body
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the request target, optionally including a `?query` suffix.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the trailing `PROTOCOL/VERSION` token, `HTTP/1.1` by default.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the request by running the assembled request line through
    /// [`RequestLine::parse`], so builder and wire parser agree on every field.
    pub fn build(self) -> Result<Request, ParseError> {
        let method = self
            .method
            .ok_or_else(|| ParseError::MalformedRequestLine("method missing".to_string()))?;
        let target = self
            .target
            .ok_or_else(|| ParseError::MalformedRequestLine("target missing".to_string()))?;
        let version = self.version.unwrap_or_else(|| "HTTP/1.1".to_string());

        let request_line = RequestLine::parse(&format!("{method} {target} {version}"))?;

        Ok(Request {
            request_line,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    pub fn method(&self) -> Method {
        self.request_line.method
    }

    /// The request path without its query fragment (e.g. `/user/login`).
    pub fn path(&self) -> &str {
        &self.request_line.path
    }

    pub fn query_string(&self) -> &QueryString {
        &self.request_line.query_string
    }

    /// Retrieves a header value by its exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header(CONTENT_LENGTH)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Decodes a `application/x-www-form-urlencoded` body.
    ///
    /// A body that is not valid UTF-8 decodes to an empty mapping.
    pub fn form(&self) -> QueryString {
        std::str::from_utf8(&self.body)
            .map(QueryString::parse)
            .unwrap_or_default()
    }
}
