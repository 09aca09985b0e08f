//! # Identity Newtypes
//!
//! Domain-primitive newtype for the caller-supplied user identifier.
//!
//! The sandbox accepts whatever identifier the wallet developer sends —
//! there is no registration step and no format constraint. The newtype
//! exists so a `UserId` cannot be confused with any other string flowing
//! through the API (currency codes, destination addresses, intent ids).

use serde::{Deserialize, Serialize};

/// A caller-supplied user identifier.
///
/// Accepted verbatim: the sandbox performs no format validation and no
/// existence check. An identifier that has never been seen simply maps to
/// a user whose KYC status is [`KycStatus::None`](crate::KycStatus::None).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user identifier from any string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
