//! Redacting wrapper for credential strings.
//!
//! Connection strings and similar values travel through settings and
//! resolved variants as [`Secret`]. Formatting or serializing one prints a
//! placeholder; only [`Secret::expose`] hands out the raw text, and only the
//! pipeline builder that opens the connection should call it.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Placeholder printed in place of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A credential string that never appears in logs or debug output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a raw credential.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the credential is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(REDACTED)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
