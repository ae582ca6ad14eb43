//! Model candidate identifiers.

use std::fmt;

/// Namespace prefix the upstream provider requires on model identifiers.
const NAMESPACE_PREFIX: &str = "models/";

/// One upstream-addressable model identifier eligible for a generation
/// attempt.
///
/// Candidates are either configured statically at startup or discovered at
/// runtime from the provider's model listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidate {
    identifier: String,
}

impl ModelCandidate {
    /// Create a candidate from a raw identifier, prefixed or not.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The identifier as supplied.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifier with the provider's namespace prefix.
    ///
    /// Idempotent: an already-prefixed identifier is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> String {
        if self.identifier.starts_with(NAMESPACE_PREFIX) {
            self.identifier.clone()
        } else {
            format!("{NAMESPACE_PREFIX}{}", self.identifier)
        }
    }
}

impl fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
