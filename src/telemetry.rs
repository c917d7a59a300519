//! Telemetry utilities for link resolution tracing.

/// Standardized span constructors for resolution observability.
pub mod spans {
    use crate::accounts::AccountId;
    use tracing::{Span, info_span};

    /// Create a span covering one full resolution of an inbound URL.
    pub fn resolution(url: &str) -> Span {
        info_span!("resolve", url = %url)
    }

    /// Create a span for one handler's eligibility check against an account.
    pub fn handler(name: &str, account: &AccountId) -> Span {
        info_span!("handler", name = %name, account = %account)
    }
}
