//! Query string decoding.
//!
//! Both request targets (`/users?userId=a&name=b`) and form-encoded bodies use
//! the same `key=value&key=value` grammar, so both go through [`QueryString`].
//!
//! Values are taken verbatim: no percent-decoding and no `+` to space
//! translation is performed.

use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// Ordered `key -> value` mapping decoded from a raw query string.
///
/// Equality is structural and ignores insertion order, so two parses of the
/// same raw string always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: IndexMap<String, String>,
}

impl QueryString {
    /// Parses a raw `key=value&key=value` fragment.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserver::http::query::QueryString;
    /// let qs = QueryString::parse("userId=javajigi&password=pass");
    /// assert_eq!(qs.get("userId"), Some("javajigi"));
    /// assert!(QueryString::parse("").is_empty());
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut params = IndexMap::new();

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            // Last write wins, first position kept
            params.insert(key.to_string(), value.to_string());
        }

        Self { params }
    }

    /// Parses the query portion of a full request target.
    ///
    /// Everything after the first `?` is decoded; a target without `?` has an
    /// empty query string.
    pub fn from_target(target: &str) -> Self {
        match target.split_once('?') {
            Some((_, raw)) => Self::parse(raw),
            None => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Hash for QueryString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the order-independent PartialEq
        let mut entries: Vec<_> = self.params.iter().collect();
        entries.sort();
        entries.hash(state);
    }
}
