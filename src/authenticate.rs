//! Multi-location dispatch with RFC 6750 mutual exclusivity.
//!
//! RFC 6750 §2 allows a client to present a token via the Authorization
//! header, a form-encoded body field, or a URI query parameter -- but MUST
//! NOT use more than one method per request. [`Authenticator`] enforces
//! that rule: it scans all three locations, requires exactly one match,
//! and delegates extraction to the matching location.

use crate::error::{Error, Result};
use crate::extract::TokenLocation;
use crate::request::TokenSource;
use crate::token::BearerToken;

/// Bearer-token authenticator over the three RFC 6750 locations.
///
/// A plain value object: stateless after construction and safe to share
/// across concurrent requests. Construct one and reuse it.
///
/// # Example
///
/// ```rust
/// use tower_bearer::{Authenticator, RequestParts};
///
/// let authenticator = Authenticator::new();
/// let request = RequestParts::new()
///     .with_header("Authorization", "Bearer mF_9.B5f-4.1JqM");
///
/// let token = authenticator.authenticate(&request).unwrap();
/// assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
/// ```
#[derive(Debug, Clone)]
pub struct Authenticator {
    locations: [TokenLocation; 3],
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator {
    /// Create an authenticator over the fixed location list, in priority
    /// order (header, form body, query).
    pub fn new() -> Self {
        Self {
            locations: TokenLocation::ALL,
        }
    }

    /// Extract the bearer token from the request.
    ///
    /// A single linear pass accumulates which locations carry a
    /// credential, exiting early once a second match makes the request
    /// ambiguous.
    ///
    /// # Errors
    ///
    /// - [`Error::NoCredential`] if no location matched.
    /// - [`Error::AmbiguousCredential`] if more than one matched (the
    ///   RFC's "more than one method" case).
    /// - Whatever the matching location's extraction fails with
    ///   ([`Error::MalformedCredential`], [`Error::InvalidContentType`]).
    pub fn authenticate<S: TokenSource>(&self, source: &S) -> Result<BearerToken> {
        let mut matched: Option<TokenLocation> = None;

        for location in self.locations {
            if location.supports(source) {
                if let Some(first) = matched {
                    return Err(Error::AmbiguousCredential {
                        first,
                        second: location,
                    });
                }
                matched = Some(location);
            }
        }

        match matched {
            Some(location) => location.extract(source),
            None => Err(Error::NoCredential),
        }
    }
}
