//! Request-side view consumed by the extractors.
//!
//! Extraction never touches a live HTTP request directly. It works against
//! the [`TokenSource`] capability -- case-insensitive header lookup plus
//! parsed form and query parameters -- so the core stays independent of any
//! particular server framework. [`RequestParts`] is the concrete view the
//! middleware builds from an incoming request; tests construct it directly
//! with the `with_*` builders.

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::HeaderMap;

/// The slice of a request that bearer extraction can see.
///
/// Implementations expose three read-only lookups, all per RFC 6750:
/// the first value of a named header, a parsed form-body field, and a
/// parsed query parameter. Form fields are only present when the request
/// body was `application/x-www-form-urlencoded` -- populating them for any
/// other content type is the caller's bug, not something this trait can
/// detect.
pub trait TokenSource {
    /// First value of the named header, if present and valid UTF-8.
    /// Lookup is case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;

    /// Value of a parsed form-body field.
    fn form_param(&self, name: &str) -> Option<&str>;

    /// Value of a parsed query-string parameter.
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// Owned request view: headers, parsed query pairs, and (for form-encoded
/// bodies) parsed form pairs.
///
/// Built from [`http::request::Parts`] via [`from_http`](Self::from_http),
/// or assembled by hand:
///
/// ```rust
/// use tower_bearer::{Authenticator, RequestParts};
///
/// let request = RequestParts::new()
///     .with_header("Authorization", "Bearer mF_9.B5f-4.1JqM");
///
/// let token = Authenticator::new().authenticate(&request).unwrap();
/// assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    headers: HeaderMap,
    query: Vec<(String, String)>,
    form: Option<Vec<(String, String)>>,
}

impl RequestParts {
    /// An empty view: no headers, no query, no form body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view from decomposed request head and, when the body was
    /// form-encoded, the raw body bytes.
    ///
    /// The query string is always parsed. `body` is parsed into form
    /// fields only when the `Content-Type` media type is
    /// `application/x-www-form-urlencoded` -- pass `None` when the body was
    /// not buffered.
    pub fn from_http(parts: &http::request::Parts, body: Option<&[u8]>) -> Self {
        let query = parts
            .uri
            .query()
            .map(|q| parse_pairs(q.as_bytes()))
            .unwrap_or_default();

        let form = match body {
            Some(bytes) if is_form_content_type(&parts.headers) => Some(parse_pairs(bytes)),
            _ => None,
        };

        Self {
            headers: parts.headers.clone(),
            query,
            form,
        }
    }

    /// Append a header. Names and values that are not valid HTTP are
    /// ignored.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Append a parsed query parameter.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a parsed form-body field.
    pub fn with_form_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }
}

impl TokenSource for RequestParts {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn form_param(&self, name: &str) -> Option<&str> {
        lookup(self.form.as_deref().unwrap_or_default(), name)
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        lookup(&self.query, name)
    }
}

/// Whether the `Content-Type` media type is form-urlencoded.
///
/// Parameters (`; charset=...`) are ignored here: this decides whether a
/// body *parses* as a form. The extractor's own content-type check is
/// stricter and compares the raw header value.
pub fn is_form_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim())
        .is_some_and(|media_type| {
            media_type.eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

fn parse_pairs(input: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(input).into_owned().collect()
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
