//! Header block shared by requests and responses.
//!
//! Headers are stored in an ordered map so that responses serialize them in the
//! order they were set. Names are compared exactly as given: `Content-Type` and
//! `content-type` are different keys. Setting an existing name replaces its
//! value and keeps its original position.

use indexmap::IndexMap;

use crate::http::parser::ParseError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const LOCATION: &str = "Location";
pub const SET_COOKIE: &str = "Set-Cookie";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses header lines up to (not including) the first blank line.
    ///
    /// Each line is split on its first `:`, and both halves are trimmed.
    /// Lines after the blank terminator are ignored.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, ParseError> {
        let mut headers = Self::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;

            headers.insert(key.trim(), value.trim());
        }

        Ok(headers)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends `Key: Value\r\n` for every header, in insertion order.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        for (k, v) in &self.entries {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_blank_line() {
        let headers = Headers::parse(["Host: localhost", "", "Ignored: yes"]).unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Host"), Some("localhost"));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let headers = Headers::parse(["Host: localhost:8080"]).unwrap();

        assert_eq!(headers.get("Host"), Some("localhost:8080"));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut headers = Headers::new();
        headers.insert("B", "2");
        headers.insert("A", "1");
        headers.insert("B", "3");

        let mut buf = Vec::new();
        headers.write_to(&mut buf);

        assert_eq!(buf, b"B: 3\r\nA: 1\r\n".to_vec());
    }
}
