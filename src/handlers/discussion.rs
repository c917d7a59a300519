//! Link handler for a private-message discussion.
//!
//! Matches the message index URL with params `id`, `user1` or `user2`, e.g.
//! `https://site.example/message/index.php?id=42`, and resolves it to the
//! discussion screen for the counterpart user.

use super::LinkHandler;
use crate::accounts::{AccountDirectory, AccountId, MessagingCapability};
use crate::error::LookupResult;
use crate::nav::{NavigationAction, NavigationMode, NavigationRequest, Navigator};
use crate::params::QueryParams;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Screen identifier the discussion action navigates to.
pub const DISCUSSION_SCREEN: &str = "messages/discussion";

lazy_static! {
    /// Message index path plus at least one numeric `id`/`user1`/`user2`
    /// query parameter, tested in a single pass over the raw URL.
    static ref DISCUSSION_PATTERN: Regex =
        Regex::new(r"/message/index\.php.*[?&](id|user1|user2)=\d+").expect("valid pattern");
}

/// Handler for discussion deep links.
///
/// Eligibility requires the messaging capability for the account and, when
/// the URL declares its first participant via `user1`, that the participant
/// is the account's own user. The app only supports acting as the current
/// identity; a mismatch is plain ineligibility, not an error.
pub struct DiscussionLinkHandler {
    messaging: Arc<dyn MessagingCapability>,
    directory: Arc<dyn AccountDirectory>,
    navigator: Arc<dyn Navigator>,
}

impl DiscussionLinkHandler {
    pub fn new(
        messaging: Arc<dyn MessagingCapability>,
        directory: Arc<dyn AccountDirectory>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { messaging, directory, navigator }
    }
}

#[async_trait]
impl LinkHandler for DiscussionLinkHandler {
    fn name(&self) -> &'static str {
        "messages.discussion"
    }

    fn pattern(&self) -> &Regex {
        &DISCUSSION_PATTERN
    }

    async fn is_enabled(
        &self,
        account: &AccountId,
        _url: &str,
        params: &QueryParams,
        _course_id: Option<i64>,
    ) -> LookupResult<bool> {
        if !params.contains("id") && !params.contains("user2") {
            // Counterpart user not identified; nothing to act on and no
            // lookup is spent finding that out.
            return Ok(false);
        }

        if !self.messaging.messaging_enabled(account).await? {
            return Ok(false);
        }

        if params.contains("user1") {
            // The URL declares its first participant; only actionable when
            // that participant is the account's own user. The capability
            // gate above must run before this lookup.
            let current = self.directory.user_id(account).await?;
            return Ok(params.int("user1") == Some(current));
        }

        Ok(true)
    }

    async fn actions(
        &self,
        _accounts: &[AccountId],
        _url: &str,
        params: &QueryParams,
        _course_id: Option<i64>,
    ) -> Vec<NavigationAction> {
        let target = params.int("id").or_else(|| params.int("user2"));
        let navigator = Arc::clone(&self.navigator);

        vec![NavigationAction::new("messages.discussion", move |account| {
            let navigator = Arc::clone(&navigator);
            Box::pin(async move {
                let Some(user_id) = target else {
                    warn!(account = %account, "discussion link carries no numeric counterpart");
                    return;
                };

                // Always replace history so chained resolutions cannot loop.
                navigator
                    .go(NavigationRequest {
                        account,
                        screen: DISCUSSION_SCREEN,
                        params: json!({ "userId": user_id }),
                        mode: NavigationMode::Replace,
                    })
                    .await;
            })
        })]
    }
}
