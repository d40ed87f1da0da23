//! RFC 6750 token extraction strategies.
//!
//! A bearer token can ride in one of three request locations (RFC 6750
//! §2.1, §2.2, §2.3): the `Authorization` header, a form-encoded body field, or a
//! URI query parameter. Each location knows how to *detect* a credential
//! ([`supports`](TokenLocation::supports)) and how to *retrieve* it
//! ([`extract`](TokenLocation::extract)).
//!
//! The set is closed on purpose: the RFC defines exactly these three
//! methods, so the locations are enum variants dispatched through
//! exhaustive `match` rather than an open trait. Adding a variant forces
//! every dispatch site to handle it.

use std::fmt;

use http::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::{Error, Result};
use crate::request::TokenSource;
use crate::token::BearerToken;

/// Form field / query parameter that carries the credential (RFC 6750
/// §2.2, §2.3).
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Content type required for form-body extraction (RFC 6750 §2.2).
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Authorization scheme token. Case-sensitive per the RFC grammar.
const BEARER_SCHEME: &str = "Bearer";

/// One of the three RFC 6750 token-carrying request locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenLocation {
    /// `Authorization: Bearer <token>` request header (§2.1).
    AuthorizationHeader,
    /// `access_token` field in a form-encoded request body (§2.2).
    FormEncodedBody,
    /// `access_token` URI query parameter (§2.3).
    UriQuery,
}

impl TokenLocation {
    /// All locations in priority order: header first, then form body,
    /// then query. The order is a deterministic tie-break for
    /// diagnostics -- exclusivity enforcement makes it irrelevant for
    /// correctness.
    pub const ALL: [TokenLocation; 3] = [
        TokenLocation::AuthorizationHeader,
        TokenLocation::FormEncodedBody,
        TokenLocation::UriQuery,
    ];

    /// Whether this location carries a credential in the given request.
    ///
    /// Header presence alone counts for the Authorization location -- the
    /// value is not parsed until [`extract`](Self::extract). The body and
    /// query locations require a non-empty `access_token` value.
    pub fn supports<S: TokenSource>(&self, source: &S) -> bool {
        match self {
            TokenLocation::AuthorizationHeader => source.header(AUTHORIZATION.as_str()).is_some(),
            TokenLocation::FormEncodedBody => source
                .form_param(ACCESS_TOKEN_PARAM)
                .is_some_and(|v| !v.is_empty()),
            TokenLocation::UriQuery => source
                .query_param(ACCESS_TOKEN_PARAM)
                .is_some_and(|v| !v.is_empty()),
        }
    }

    /// Retrieve the credential from this location.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedCredential`] if the Authorization header does
    ///   not split into exactly `Bearer <token>`.
    /// - [`Error::InvalidContentType`] if form extraction is attempted on
    ///   a request whose `Content-Type` is not exactly
    ///   `application/x-www-form-urlencoded`.
    pub fn extract<S: TokenSource>(&self, source: &S) -> Result<BearerToken> {
        match self {
            TokenLocation::AuthorizationHeader => extract_from_header(source),
            TokenLocation::FormEncodedBody => extract_from_form(source),
            TokenLocation::UriQuery => extract_from_query(source),
        }
    }
}

impl fmt::Display for TokenLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenLocation::AuthorizationHeader => "Authorization header",
            TokenLocation::FormEncodedBody => "form-encoded body",
            TokenLocation::UriQuery => "URI query",
        };
        f.write_str(name)
    }
}

/// §2.1: `credentials = "Bearer" 1*SP b64token`.
///
/// The scheme comparison is case-sensitive, matching the RFC's quoted
/// grammar rather than the generic HTTP auth framework. Splitting on a
/// single space means `"Bearer a b"` is malformed, not a token with a
/// space in it.
fn extract_from_header<S: TokenSource>(source: &S) -> Result<BearerToken> {
    let value = source
        .header(AUTHORIZATION.as_str())
        .ok_or(Error::MalformedCredential)?;

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 {
        return Err(Error::MalformedCredential);
    }
    if parts[0] != BEARER_SCHEME {
        return Err(Error::MalformedCredential);
    }

    Ok(BearerToken::new(parts[1]))
}

/// §2.2: the `Content-Type` header's first value must be exactly
/// `application/x-www-form-urlencoded` -- a `; charset=` suffix fails the
/// check. The field value is returned as-is; the RFC's ASCII-only
/// constraint is not enforced here.
fn extract_from_form<S: TokenSource>(source: &S) -> Result<BearerToken> {
    if source.header(CONTENT_TYPE.as_str()) != Some(FORM_CONTENT_TYPE) {
        return Err(Error::InvalidContentType);
    }

    let value = source
        .form_param(ACCESS_TOKEN_PARAM)
        .ok_or(Error::MalformedCredential)?;
    Ok(BearerToken::new(value))
}

/// §2.3: the parameter value is returned directly. Transport-security
/// enforcement (the RFC's TLS recommendation) belongs to the transport
/// layer, not here.
fn extract_from_query<S: TokenSource>(source: &S) -> Result<BearerToken> {
    let value = source
        .query_param(ACCESS_TOKEN_PARAM)
        .ok_or(Error::MalformedCredential)?;
    Ok(BearerToken::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestParts;

    #[test]
    fn test_header_supports_any_value() {
        let parts = RequestParts::new().with_header("Authorization", "Basic xyz");
        assert!(TokenLocation::AuthorizationHeader.supports(&parts));

        let empty = RequestParts::new();
        assert!(!TokenLocation::AuthorizationHeader.supports(&empty));
    }

    #[test]
    fn test_header_extract_well_formed() {
        let parts = RequestParts::new().with_header("Authorization", "Bearer mF_9.B5f-4.1JqM");
        let token = TokenLocation::AuthorizationHeader.extract(&parts).unwrap();
        assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
    }

    #[test]
    fn test_header_extract_wrong_scheme() {
        let parts = RequestParts::new().with_header("Authorization", "Basic xyz");
        let err = TokenLocation::AuthorizationHeader
            .extract(&parts)
            .unwrap_err();
        assert_eq!(err, Error::MalformedCredential);
    }

    #[test]
    fn test_header_extract_scheme_case_sensitive() {
        let parts = RequestParts::new().with_header("Authorization", "bearer abc");
        assert_eq!(
            TokenLocation::AuthorizationHeader.extract(&parts),
            Err(Error::MalformedCredential)
        );
    }

    #[test]
    fn test_header_extract_too_many_parts() {
        let parts = RequestParts::new().with_header("Authorization", "Bearer a b");
        assert_eq!(
            TokenLocation::AuthorizationHeader.extract(&parts),
            Err(Error::MalformedCredential)
        );
    }

    #[test]
    fn test_header_extract_scheme_only() {
        let parts = RequestParts::new().with_header("Authorization", "Bearer");
        assert_eq!(
            TokenLocation::AuthorizationHeader.extract(&parts),
            Err(Error::MalformedCredential)
        );
    }

    #[test]
    fn test_form_supports_requires_non_empty() {
        let parts = RequestParts::new().with_form_param("access_token", "tok");
        assert!(TokenLocation::FormEncodedBody.supports(&parts));

        let empty_value = RequestParts::new().with_form_param("access_token", "");
        assert!(!TokenLocation::FormEncodedBody.supports(&empty_value));
    }

    #[test]
    fn test_form_extract_requires_exact_content_type() {
        let parts = RequestParts::new()
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_form_param("access_token", "tok");
        let token = TokenLocation::FormEncodedBody.extract(&parts).unwrap();
        assert_eq!(token.value(), "tok");

        // Charset suffix fails the exact comparison
        let with_charset = RequestParts::new()
            .with_header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .with_form_param("access_token", "tok");
        assert_eq!(
            TokenLocation::FormEncodedBody.extract(&with_charset),
            Err(Error::InvalidContentType)
        );

        let wrong = RequestParts::new()
            .with_header("Content-Type", "application/json")
            .with_form_param("access_token", "tok");
        assert_eq!(
            TokenLocation::FormEncodedBody.extract(&wrong),
            Err(Error::InvalidContentType)
        );
    }

    #[test]
    fn test_query_supports_requires_non_empty() {
        let parts = RequestParts::new().with_query_param("access_token", "tok");
        assert!(TokenLocation::UriQuery.supports(&parts));

        let empty_value = RequestParts::new().with_query_param("access_token", "");
        assert!(!TokenLocation::UriQuery.supports(&empty_value));
    }

    #[test]
    fn test_query_extract() {
        let parts = RequestParts::new().with_query_param("access_token", "mF_9.B5f-4.1JqM");
        let token = TokenLocation::UriQuery.extract(&parts).unwrap();
        assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            TokenLocation::ALL,
            [
                TokenLocation::AuthorizationHeader,
                TokenLocation::FormEncodedBody,
                TokenLocation::UriQuery,
            ]
        );
    }
}
