//! RFC 6750 §3 `WWW-Authenticate` challenge construction.
//!
//! When a protected resource request fails authentication, the resource
//! server answers with a `WWW-Authenticate: Bearer ...` header telling the
//! client how to authenticate. [`Challenge`] assembles that header value
//! from a scope list and an optional structured error; it is a pure value
//! object and never touches the response itself.
//!
//! For example, without any authentication information:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! WWW-Authenticate: Bearer
//! ```
//!
//! And after an attempt with an expired token:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! WWW-Authenticate: Bearer error="invalid_token", error_description="The access token expired"
//! ```

use http::StatusCode;
use serde::Serialize;

/// RFC 6750 §3.1 error code registry.
///
/// Each code maps to the HTTP status the RFC recommends for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request is malformed -- missing parameters, repeated
    /// parameters, or more than one token-carrying method. HTTP 400.
    InvalidRequest,
    /// The access token is expired, revoked, malformed, or otherwise
    /// invalid. HTTP 401; the client may obtain a new token and retry.
    InvalidToken,
    /// The token's scopes do not cover the requested resource. HTTP 403.
    InsufficientScope,
}

impl ErrorKind {
    /// The registered error-code string, as it appears in the `error`
    /// auth-param.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::InsufficientScope => "insufficient_scope",
        }
    }

    /// HTTP status code recommended by RFC 6750 §3.1 for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorKind::InsufficientScope => StatusCode::FORBIDDEN,
        }
    }
}

/// Structured challenge error: an [`ErrorKind`] plus the optional
/// human-readable `error_description` and `error_uri` attributes.
///
/// Serializes to the ordered attribute mapping used both for header
/// construction and for JSON error bodies:
///
/// ```rust
/// use tower_bearer::ChallengeError;
///
/// let error = ChallengeError::invalid_token().description("expired");
/// let json = serde_json::to_string(&error).unwrap();
/// assert_eq!(json, r#"{"error":"invalid_token","error_description":"expired"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeError {
    #[serde(rename = "error")]
    kind: ErrorKind,
    #[serde(rename = "error_description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "error_uri", skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

impl ChallengeError {
    /// Create a challenge error with the given kind and no attributes.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            description: None,
            uri: None,
        }
    }

    /// Shorthand for an `invalid_request` error.
    pub fn invalid_request() -> Self {
        Self::new(ErrorKind::InvalidRequest)
    }

    /// Shorthand for an `invalid_token` error.
    pub fn invalid_token() -> Self {
        Self::new(ErrorKind::InvalidToken)
    }

    /// Shorthand for an `insufficient_scope` error.
    pub fn insufficient_scope() -> Self {
        Self::new(ErrorKind::InsufficientScope)
    }

    /// Attach a human-readable `error_description`. Developer-facing, not
    /// meant for display to end users.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an `error_uri` pointing at a human-readable explanation.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// The error code.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The `error_description` attribute, if set.
    pub fn error_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The `error_uri` attribute, if set.
    pub fn error_uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// A `WWW-Authenticate` challenge: scope list plus optional structured
/// error.
///
/// # Example
///
/// ```rust
/// use tower_bearer::{Challenge, ChallengeError};
///
/// assert_eq!(Challenge::new().header_value(), "Bearer");
///
/// let header = Challenge::new()
///     .scope("openid")
///     .scope("profile")
///     .error(ChallengeError::invalid_token().description("expired"))
///     .header_value();
/// assert_eq!(
///     header,
///     r#"Bearer realm="openid profile", error="invalid_token", error_description="expired""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Challenge {
    scopes: Vec<String>,
    error: Option<ChallengeError>,
}

impl Challenge {
    /// An empty challenge: bare `Bearer`, no auth-params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scope value. Scope tokens are case-sensitive and ordered.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Append several scope values.
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Attach a structured error.
    pub fn error(mut self, error: ChallengeError) -> Self {
        self.error = Some(error);
        self
    }

    /// The scope list.
    pub fn scope_values(&self) -> &[String] {
        &self.scopes
    }

    /// The structured error, if any.
    pub fn challenge_error(&self) -> Option<&ChallengeError> {
        self.error.as_ref()
    }

    /// Build the `WWW-Authenticate` header value.
    ///
    /// A non-empty scope list becomes a `realm` auth-param carrying the
    /// space-joined scopes. This repurposes `realm` to carry scope values
    /// (the RFC defines them as distinct attributes); existing clients
    /// depend on this shape, so it is kept as-is. Error attributes follow
    /// in fixed order: `error`, `error_description`, `error_uri`.
    pub fn header_value(&self) -> String {
        let mut params = Vec::new();

        if !self.scopes.is_empty() {
            params.push(format!("realm=\"{}\"", self.scopes.join(" ")));
        }

        if let Some(error) = &self.error {
            params.push(format!("error=\"{}\"", error.kind.as_str()));
            if let Some(description) = &error.description {
                params.push(format!("error_description=\"{}\"", description));
            }
            if let Some(uri) = &error.uri {
                params.push(format!("error_uri=\"{}\"", uri));
            }
        }

        if params.is_empty() {
            "Bearer".to_string()
        } else {
            format!("Bearer {}", params.join(", "))
        }
    }
}
