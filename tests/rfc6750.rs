//! RFC 6750 conformance tests for the extraction core.
//!
//! Exercises the public API end-to-end: the three token locations, the
//! one-method-per-request rule, and challenge header construction.

use tower_bearer::{
    Authenticator, Challenge, ChallengeError, Error, ErrorKind, RequestParts, TokenLocation,
};

// =============================================================================
// Test fixtures
// =============================================================================

fn header_request(value: &str) -> RequestParts {
    RequestParts::new().with_header("Authorization", value)
}

fn form_request(token: &str) -> RequestParts {
    RequestParts::new()
        .with_header("Content-Type", "application/x-www-form-urlencoded")
        .with_form_param("access_token", token)
}

// =============================================================================
// §2.1 Authorization request header field
// =============================================================================

#[test]
fn header_token_is_returned_unmodified() {
    let token = Authenticator::new()
        .authenticate(&header_request("Bearer mF_9.B5f-4.1JqM"))
        .unwrap();
    assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
}

#[test]
fn base64ish_tokens_survive_round_trip() {
    // b64token grammar: ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" / "="
    for raw in ["abc123", "a-b.c_d~e+f/g==", "0", "mF_9.B5f-4.1JqM"] {
        let token = Authenticator::new()
            .authenticate(&header_request(&format!("Bearer {raw}")))
            .unwrap();
        assert_eq!(token.value(), raw);
    }
}

#[test]
fn basic_scheme_is_rejected() {
    let err = Authenticator::new()
        .authenticate(&header_request("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="))
        .unwrap_err();
    assert_eq!(err, Error::MalformedCredential);
}

#[test]
fn lowercase_bearer_is_rejected() {
    let err = Authenticator::new()
        .authenticate(&header_request("bearer abc"))
        .unwrap_err();
    assert_eq!(err, Error::MalformedCredential);
}

#[test]
fn header_without_token_part_is_rejected() {
    let err = Authenticator::new()
        .authenticate(&header_request("Bearer"))
        .unwrap_err();
    assert_eq!(err, Error::MalformedCredential);
}

// =============================================================================
// §2.2 Form-encoded body parameter
// =============================================================================

#[test]
fn form_token_is_returned_unmodified() {
    let token = Authenticator::new()
        .authenticate(&form_request("mF_9.B5f-4.1JqM"))
        .unwrap();
    assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
}

#[test]
fn form_extraction_requires_exact_content_type() {
    let request = RequestParts::new()
        .with_header("Content-Type", "text/plain")
        .with_form_param("access_token", "tok");
    let err = Authenticator::new().authenticate(&request).unwrap_err();
    assert_eq!(err, Error::InvalidContentType);
}

// =============================================================================
// §2.3 URI query parameter
// =============================================================================

#[test]
fn query_token_is_returned_unmodified() {
    let request = RequestParts::new().with_query_param("access_token", "mF_9.B5f-4.1JqM");
    let token = Authenticator::new().authenticate(&request).unwrap();
    assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
}

#[test]
fn other_query_parameters_are_ignored() {
    let request = RequestParts::new()
        .with_query_param("p", "q")
        .with_query_param("access_token", "tok")
        .with_query_param("r", "s");
    let token = Authenticator::new().authenticate(&request).unwrap();
    assert_eq!(token.value(), "tok");
}

// =============================================================================
// §2 one-method-per-request rule
// =============================================================================

#[test]
fn no_location_populated_is_no_credential() {
    let err = Authenticator::new()
        .authenticate(&RequestParts::new())
        .unwrap_err();
    assert_eq!(err, Error::NoCredential);
}

#[test]
fn header_plus_query_is_ambiguous() {
    let request = header_request("Bearer abc").with_query_param("access_token", "def");
    let err = Authenticator::new().authenticate(&request).unwrap_err();
    assert_eq!(
        err,
        Error::AmbiguousCredential {
            first: TokenLocation::AuthorizationHeader,
            second: TokenLocation::UriQuery,
        }
    );
}

#[test]
fn ambiguity_wins_over_malformedness() {
    // Even a malformed header plus a query token is "more than one
    // method" -- exclusivity is checked before any extraction
    let request = header_request("Basic xyz").with_query_param("access_token", "def");
    let err = Authenticator::new().authenticate(&request).unwrap_err();
    assert!(matches!(err, Error::AmbiguousCredential { .. }));
}

#[test]
fn ambiguous_maps_to_invalid_request() {
    let request = header_request("Bearer abc").with_query_param("access_token", "def");
    let err = Authenticator::new().authenticate(&request).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidRequest));
    assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
}

// =============================================================================
// §3 WWW-Authenticate challenge
// =============================================================================

#[test]
fn bare_challenge() {
    assert_eq!(Challenge::new().header_value(), "Bearer");
}

#[test]
fn scope_list_challenge() {
    let header = Challenge::new().scopes(["openid", "profile"]).header_value();
    assert_eq!(header, "Bearer realm=\"openid profile\"");
}

#[test]
fn expired_token_challenge() {
    let header = Challenge::new()
        .error(ChallengeError::invalid_token().description("expired"))
        .header_value();
    assert_eq!(
        header,
        "Bearer error=\"invalid_token\", error_description=\"expired\""
    );
}

#[test]
fn full_challenge_attribute_order() {
    let header = Challenge::new()
        .scope("openid")
        .error(
            ChallengeError::insufficient_scope()
                .description("admin scope required")
                .uri("https://example.com/errors"),
        )
        .header_value();
    assert_eq!(
        header,
        "Bearer realm=\"openid\", error=\"insufficient_scope\", \
         error_description=\"admin scope required\", error_uri=\"https://example.com/errors\""
    );
}

#[test]
fn error_kind_status_mapping() {
    assert_eq!(
        ErrorKind::InvalidRequest.status_code(),
        http::StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ErrorKind::InvalidToken.status_code(),
        http::StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        ErrorKind::InsufficientScope.status_code(),
        http::StatusCode::FORBIDDEN
    );
}
