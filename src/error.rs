//! Unified error handling for linkway.
//!
//! Resolution distinguishes three outcomes: a URL nobody claims (not an
//! error), a handler that declines eligibility (a resolved `false`, not an
//! error), and a collaborator lookup that itself fails. Only the last one
//! is represented here.

use thiserror::Error;

/// Errors surfaced by the account/capability collaborators during an
/// eligibility check.
///
/// A failed lookup is never coerced into an eligibility answer: the handler
/// cannot safely assume either way, so the error propagates to the caller
/// of [`Registry::resolve`](crate::handlers::Registry::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("capability lookup failed: {0}")]
    Capability(String),

    #[error("identity lookup failed: {0}")]
    Identity(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl LookupError {
    /// Get a static error code string for diagnostic labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Capability(_) => "capability_lookup",
            Self::Identity(_) => "identity_lookup",
            Self::Unavailable(_) => "backend_unavailable",
        }
    }
}

/// Result type for collaborator lookups.
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LookupError::Capability("x".into()).error_code(), "capability_lookup");
        assert_eq!(LookupError::Identity("x".into()).error_code(), "identity_lookup");
        assert_eq!(LookupError::Unavailable("x".into()).error_code(), "backend_unavailable");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = LookupError::Capability("timeout after 5s".into());
        assert!(err.to_string().contains("timeout after 5s"));
    }
}
