//! Bearer token value type.
//!
//! This module provides [`BearerToken`], the opaque credential carrier
//! produced by extraction. The wrapper prevents accidental exposure of the
//! credential in logs, debug output, and error messages.
//!
//! # Example
//!
//! ```rust
//! use tower_bearer::BearerToken;
//!
//! let token = BearerToken::new("mF_9.B5f-4.1JqM");
//!
//! // Debug output shows "[REDACTED]" for the credential
//! assert_eq!(format!("{:?}", token), "BearerToken([REDACTED])");
//!
//! // Explicitly read the value when handing it to a validator
//! assert_eq!(token.value(), "mF_9.B5f-4.1JqM");
//! ```

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// An opaque bearer credential extracted from a request.
///
/// A bearer token is usable by any party in possession of it, so the value
/// is treated as a secret: `Debug` and `Display` output is redacted. Use
/// [`value()`](BearerToken::value) to read the credential when passing it
/// to a downstream validator.
///
/// The carrier holds nothing but the string: expiry, scopes, and subject
/// belong to whatever validates the token, not to extraction.
///
/// # Serialization
///
/// `BearerToken` serializes and deserializes transparently as a plain
/// string.
///
/// # Round-trip
///
/// The accessor returns exactly the string that was read from the request --
/// no trimming, re-encoding, or other transformation is applied.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw credential string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The credential value, byte-for-byte as extracted.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consume the carrier and return the owned credential.
    pub fn into_value(self) -> String {
        self.0
    }
}

impl Debug for BearerToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl Display for BearerToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for BearerToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BearerToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
