//! Account context and the collaborator seams consulted during eligibility
//! checks.
//!
//! Handlers never reach into a global session store; the invoking account is
//! threaded through every call explicitly and resolved against these traits.

use crate::error::LookupResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a logged-in account/session.
///
/// A single inbound URL may be checked against several candidate accounts;
/// eligibility and navigation are always evaluated per account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Resolves an account to its attributes, notably the owning user identity.
///
/// Implementations live outside this crate (session store, account cache).
/// Lookups are async and carry whatever timeout/retry policy the backing
/// store provides; this crate adds none of its own.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Numeric user id of the identity that owns `account`.
    async fn user_id(&self, account: &AccountId) -> LookupResult<i64>;
}

/// Answers whether the messaging capability is enabled for an account.
///
/// Checked before any identity lookup: the capability gate is the cheaper
/// of the two and short-circuits the rest of the eligibility chain.
#[async_trait]
pub trait MessagingCapability: Send + Sync {
    async fn messaging_enabled(&self, account: &AccountId) -> LookupResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display_and_eq() {
        let a = AccountId::new("site-1");
        assert_eq!(a.to_string(), "site-1");
        assert_eq!(a, AccountId::from("site-1"));
        assert_eq!(a.as_str(), "site-1");
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let a = AccountId::new("site-1");
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"site-1\"");
    }
}
