//! # tower-bearer
//!
//! Tower-native OAuth2 bearer token extraction for Rust, per RFC 6750.
//!
//! This crate pulls bearer tokens out of incoming HTTP resource requests --
//! from the `Authorization` header, a form-encoded body, or the URI query --
//! enforces the RFC's one-method-per-request rule, and builds compliant
//! `WWW-Authenticate` challenge headers on failure.
//!
//! ## Philosophy
//!
//! Extraction and validation are different jobs. This crate answers one
//! question: *did the client present exactly one syntactically-valid
//! bearer credential, and what is it?* Everything downstream of that --
//! signature checks, introspection, expiry, scope enforcement -- belongs to
//! a validator, which receives the extracted [`BearerToken`] and nothing
//! else.
//!
//! The core is framework-free: extractors work against the [`TokenSource`]
//! capability, so anything that can expose headers and parsed parameters
//! can authenticate. The `http` feature (on by default) adds a Tower
//! layer for axum-style services.
//!
//! ## Quick Start: Core
//!
//! ```rust
//! use tower_bearer::{Authenticator, Error, RequestParts};
//!
//! let authenticator = Authenticator::new();
//!
//! // One credential, in the Authorization header
//! let request = RequestParts::new()
//!     .with_header("Authorization", "Bearer mF_9.B5f-4.1JqM");
//! let token = authenticator.authenticate(&request).unwrap();
//! assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
//!
//! // Two credentials is a protocol violation
//! let ambiguous = RequestParts::new()
//!     .with_header("Authorization", "Bearer abc")
//!     .with_query_param("access_token", "def");
//! let error = authenticator.authenticate(&ambiguous).unwrap_err();
//! assert!(matches!(error, Error::AmbiguousCredential { .. }));
//!
//! // Failures map straight to a challenge header
//! let header = error.to_challenge(&["openid".to_string()]).header_value();
//! assert!(header.starts_with("Bearer realm=\"openid\", error=\"invalid_request\""));
//! ```
//!
//! ## Quick Start: Middleware
//!
//! ```rust
//! use tower_bearer::BearerAuthLayer;
//!
//! let layer = BearerAuthLayer::new()
//!     .scope("openid")
//!     .public_path("/health");
//! ```
//!
//! Apply the layer to any axum-style service, e.g. via
//! `ServiceBuilder::new().layer(layer)` or `Router::layer`.
//!
//! On success the layer injects the [`BearerToken`] into request
//! extensions; on failure it answers with the mapped status code (400 for
//! malformed or ambiguous presentations, 401 when nothing was presented)
//! and the `WWW-Authenticate` challenge.
//!
//! ## Key Types
//!
//! - [`Authenticator`] -- dispatch across the three token locations with
//!   mutual-exclusivity enforcement
//! - [`TokenLocation`] -- the closed set of RFC 6750 §2 locations
//! - [`BearerToken`] -- opaque, log-redacted credential carrier
//! - [`Challenge`] / [`ChallengeError`] -- RFC 6750 §3 `WWW-Authenticate`
//!   header construction
//! - [`RequestParts`] / [`TokenSource`] -- the request-side view extraction
//!   runs against
//! - [`BearerAuthLayer`] -- Tower middleware tying it all together
//!
//! ## Feature Flags
//!
//! - `http` *(default)* - axum/tower middleware integration
//! - `full` - everything
//!
//! ## RFC Compliance
//!
//! Implements RFC 6750 §2.1 (Authorization header), §2.2 (form-encoded
//! body), §2.3 (URI query), and §3 (challenge attributes). One deliberate
//! deviation is kept for compatibility: the challenge builder emits the
//! scope list as a `realm` auth-param rather than a separate `scope`
//! attribute. See [`Challenge::header_value`].

pub mod authenticate;
pub mod challenge;
pub mod error;
pub mod extract;
#[cfg(feature = "http")]
pub mod middleware;
pub mod request;
pub mod token;

// Re-exports
pub use authenticate::Authenticator;
pub use challenge::{Challenge, ChallengeError, ErrorKind};
pub use error::{BoxError, Error, Result};
pub use extract::{TokenLocation, ACCESS_TOKEN_PARAM, FORM_CONTENT_TYPE};
pub use request::{RequestParts, TokenSource};
pub use token::BearerToken;

#[cfg(feature = "http")]
pub use middleware::{BearerAuthLayer, BearerAuthService};
