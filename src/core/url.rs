//! Route path and query string types.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use rustc_hash::FxHashMap;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decoded route path of a page.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root
/// - No query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// Create from a browser request URL (strip query/fragment, decode).
    pub fn from_browser(encoded: &str) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| path.to_string());
        Self::normalized(&decoded)
    }

    /// Create from an unencoded path that may carry a query or fragment.
    pub fn new(path: &str) -> Self {
        Self::normalized(path.split(['?', '#']).next().unwrap_or(path))
    }

    /// Collapse slashes. `?` and `#` here are part of the path.
    fn normalized(path: &str) -> Self {
        let path = path.trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Self("/".into());
        }
        Self(format!("/{}", segments.join("/")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments without the leading slash (`/blogs/x` → `["blogs", "x"]`).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Percent-encode each segment for use in an absolute URL.
    pub fn to_encoded(&self) -> String {
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, COMPONENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode a single query value the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build `key=value&...` from pairs, skipping nothing and preserving order.
pub fn build_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Query string parse failure (value was not valid UTF-8 after decoding).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("query parameter `{0}` is not valid UTF-8")]
pub struct QueryError(pub String);

/// Decoded query parameters. Later duplicates win, `+` decodes to space.
#[derive(Debug, Clone, Default)]
pub struct Query(FxHashMap<String, String>);

impl Query {
    /// Parse the query part of a request URL (anything after `?`).
    pub fn from_url(url: &str) -> Result<Self, QueryError> {
        match url.split_once('?') {
            Some((_, qs)) => Self::parse(qs.split('#').next().unwrap_or(qs)),
            None => Ok(Self::default()),
        }
    }

    /// Parse a raw `a=1&b=2` query string.
    pub fn parse(qs: &str) -> Result<Self, QueryError> {
        let mut map = FxHashMap::default();
        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_form(key).map_err(|_| QueryError(key.to_string()))?;
            let value = decode_form(value).map_err(|_| QueryError(key.clone()))?;
            map.insert(key, value);
        }
        Ok(Self(map))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get a parameter, treating empty/whitespace-only values as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }
}

fn decode_form(s: &str) -> Result<String, std::str::Utf8Error> {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8().map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_normalization() {
        assert_eq!(RoutePath::new("").as_str(), "/");
        assert_eq!(RoutePath::new("/").as_str(), "/");
        assert_eq!(RoutePath::new("blogs").as_str(), "/blogs");
        assert_eq!(RoutePath::new("/blogs/").as_str(), "/blogs");
        assert_eq!(RoutePath::new("//blogs//abc/").as_str(), "/blogs/abc");
        assert_eq!(RoutePath::new("/blogs?page=2#top").as_str(), "/blogs");
    }

    #[test]
    fn test_route_path_from_browser() {
        let path = RoutePath::from_browser("/blogs/hello%20world?ref=x");
        assert_eq!(path.as_str(), "/blogs/hello world");
        assert_eq!(path.to_encoded(), "/blogs/hello%20world");
    }

    #[test]
    fn test_encoded_delimiters_stay_in_path() {
        let path = RoutePath::from_browser("/blogs/what%3F?ref=x");
        assert_eq!(path.as_str(), "/blogs/what?");
        assert_eq!(path.to_encoded(), "/blogs/what%3F");

        let path = RoutePath::from_browser("/projects/c%23-tools#top");
        assert_eq!(path.as_str(), "/projects/c#-tools");
        assert_eq!(path.segments().last(), Some("c#-tools"));
    }

    #[test]
    fn test_segments() {
        let path = RoutePath::new("/study-material/42");
        assert_eq!(path.segments().collect::<Vec<_>>(), ["study-material", "42"]);
        assert!(RoutePath::new("/").segments().next().is_none());
    }

    #[test]
    fn test_encode_component_matches_js() {
        assert_eq!(encode_component("a b&c/d"), "a%20b%26c%2Fd");
        assert_eq!(encode_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_component("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_query_roundtrip() {
        let qs = build_query([("title", "Rust & You"), ("path", "/blogs/1")]);
        let query = Query::parse(&qs).unwrap();
        assert_eq!(query.get("title"), Some("Rust & You"));
        assert_eq!(query.get("path"), Some("/blogs/1"));
    }

    #[test]
    fn test_query_from_url() {
        let query = Query::from_url("/api/og?title=Hello+World&type=blog&path=").unwrap();
        assert_eq!(query.get("title"), Some("Hello World"));
        assert_eq!(query.get("type"), Some("blog"));
        assert_eq!(query.get("path"), Some(""));
        assert_eq!(query.get_non_empty("path"), None);
        assert_eq!(query.get("missing"), None);

        assert!(Query::from_url("/api/og").unwrap().get("title").is_none());
    }

    #[test]
    fn test_query_invalid_utf8() {
        let err = Query::parse("title=%FF").unwrap_err();
        assert_eq!(err, QueryError("title".into()));
    }
}
