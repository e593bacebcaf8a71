//! Request line tokenizing: `METHOD SP REQUEST-TARGET SP PROTOCOL/VERSION`.

use std::str::FromStr;

use crate::http::parser::ParseError;
use crate::http::query::QueryString;
use crate::http::request::Method;

/// The first line of an HTTP request, split into its parts.
///
/// `path` never contains the query fragment and always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub query_string: QueryString,
    pub protocol: String,
    pub version: String,
}

impl RequestLine {
    /// Parses a single request line (without its trailing CRLF).
    ///
    /// # Example
    ///
    /// ```
    /// # use webserver::http::request_line::RequestLine;
    /// # use webserver::http::request::Method;
    /// let line = RequestLine::parse("GET /users HTTP/1.1").unwrap();
    /// assert_eq!(line.method, Method::GET);
    /// assert_eq!(line.path, "/users");
    /// assert_eq!(line.protocol, "HTTP");
    /// assert_eq!(line.version, "1.1");
    /// ```
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [method, target, protocol_version] = parts[..] else {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        };

        let method = method.parse::<Method>()?;

        let (path, query_string) = match target.split_once('?') {
            Some((path, raw)) => (path, QueryString::parse(raw)),
            None => (target, QueryString::default()),
        };
        if !path.starts_with('/') {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        }

        let (protocol, version) = protocol_version
            .split_once('/')
            .ok_or_else(|| ParseError::MalformedRequestLine(line.to_string()))?;

        Ok(Self {
            method,
            path: path.to_string(),
            query_string,
            protocol: protocol.to_string(),
            version: version.to_string(),
        })
    }
}

impl FromStr for RequestLine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
