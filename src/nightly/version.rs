//! Version signatures.

use serde::Serialize;
use std::fmt;

/// An opaque version string, compared only by byte equality.
///
/// The empty signature means "unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionSignature(String);

impl VersionSignature {
    /// Wrap a version string as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The "unknown version" signature.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Whether no version could be determined.
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("<unknown>")
        } else {
            f.write_str(&self.0)
        }
    }
}
