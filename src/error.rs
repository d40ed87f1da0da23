//! Error types for tower-bearer.

use http::StatusCode;

use crate::challenge::{Challenge, ChallengeError, ErrorKind};
use crate::extract::TokenLocation;

/// Boxed error type for middleware bounds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Authentication failure.
///
/// Every variant is terminal for the current attempt: there is no retry or
/// recovery, and nothing is logged here. The caller maps the error to an
/// HTTP status ([`status_code`](Error::status_code)) and a challenge
/// header ([`to_challenge`](Error::to_challenge)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The Authorization header is present but does not parse as
    /// `Bearer <token>`, or carries a different scheme.
    #[error("malformed credential in Authorization header")]
    MalformedCredential,

    /// Form-body extraction was attempted on a request whose content type
    /// is not `application/x-www-form-urlencoded`.
    #[error("form-encoded token requires content type application/x-www-form-urlencoded")]
    InvalidContentType,

    /// None of the three token locations carried a credential.
    #[error("no bearer credential presented")]
    NoCredential,

    /// More than one token location carried a credential. RFC 6750 §2
    /// forbids using more than one method per request.
    #[error("bearer credential presented via both {first} and {second}")]
    AmbiguousCredential {
        /// First matching location, in priority order.
        first: TokenLocation,
        /// Second matching location.
        second: TokenLocation,
    },
}

impl Error {
    /// The RFC 6750 error code for this failure.
    ///
    /// `NoCredential` maps to `None`: a request without any authentication
    /// information gets a bare challenge, no error code (§3). Everything
    /// else is a malformed request, `invalid_request`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::NoCredential => None,
            Error::MalformedCredential
            | Error::InvalidContentType
            | Error::AmbiguousCredential { .. } => Some(ErrorKind::InvalidRequest),
        }
    }

    /// The HTTP status for this failure: 401 when no credential was
    /// presented, 400 for every malformed presentation.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            Some(kind) => kind.status_code(),
            None => StatusCode::UNAUTHORIZED,
        }
    }

    /// Build the `WWW-Authenticate` challenge for this failure,
    /// advertising the given scopes.
    pub fn to_challenge(&self, scopes: &[String]) -> Challenge {
        let challenge = Challenge::new().scopes(scopes.iter().cloned());
        match self.kind() {
            Some(kind) => {
                challenge.error(ChallengeError::new(kind).description(self.to_string()))
            }
            None => challenge,
        }
    }
}

/// Result type alias for tower-bearer.
pub type Result<T> = std::result::Result<T, Error>;
