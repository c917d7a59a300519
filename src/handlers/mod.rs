//! Link handlers.
//!
//! This module contains the [`LinkHandler`] trait and the [`Registry`] that
//! dispatches inbound URLs to the handler willing to act on them.
//!
//! Dispatch is precedence-free: every handler tests the raw URL against its
//! own compiled pattern, eligible candidates are discovered by awaiting
//! `is_enabled` per (handler, account) pair, and the first eligible pair in
//! registration order wins.

mod discussion;

pub use discussion::{DISCUSSION_SCREEN, DiscussionLinkHandler};

use crate::accounts::AccountId;
use crate::error::LookupResult;
use crate::nav::NavigationAction;
use crate::params::QueryParams;
use crate::telemetry;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Instrument, debug, trace};

/// Trait implemented by all link handlers.
///
/// Handlers are stateless bundles over external state: constructed once at
/// startup, immutable afterwards, and shared across concurrent resolutions.
/// Matching is pure and synchronous; eligibility may require async lookups.
#[async_trait]
pub trait LinkHandler: Send + Sync {
    /// Stable unique name, used for logging and resolution stats.
    fn name(&self) -> &'static str;

    /// Compiled pattern describing the URLs this handler claims.
    fn pattern(&self) -> &Regex;

    /// Test a raw URL string against the handler's pattern.
    fn matches(&self, url: &str) -> bool {
        self.pattern().is_match(url)
    }

    /// Whether the handler can act on `url` for `account`.
    ///
    /// `Ok(false)` means ineligible, never an error; a failed collaborator
    /// lookup propagates as `Err` and must not be coerced to either answer.
    /// Defaults to eligible.
    async fn is_enabled(
        &self,
        account: &AccountId,
        url: &str,
        params: &QueryParams,
        course_id: Option<i64>,
    ) -> LookupResult<bool> {
        let _ = (account, url, params, course_id);
        Ok(true)
    }

    /// Produce the navigation actions for a URL this handler owns.
    ///
    /// Performs no eligibility re-check; the registry is responsible for
    /// calling `is_enabled` first. `accounts` lists every candidate account,
    /// but each action binds to one account only when executed.
    async fn actions(
        &self,
        accounts: &[AccountId],
        url: &str,
        params: &QueryParams,
        course_id: Option<i64>,
    ) -> Vec<NavigationAction>;
}

/// A navigation action selected by dispatch, bound to the handler and
/// account that won.
#[derive(Debug)]
pub struct RoutedAction {
    pub handler: &'static str,
    pub account: AccountId,
    pub action: NavigationAction,
}

/// Registry of link handlers.
///
/// Registration order is the tie-break among simultaneously eligible
/// handlers. The registry is immutable once built and safe to share.
#[derive(Default)]
pub struct Registry {
    handlers: Vec<Arc<dyn LinkHandler>>,
    /// Per-handler resolution counters for diagnostics.
    resolve_counts: HashMap<&'static str, Arc<AtomicU64>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Later registrations rank lower in the tie-break.
    pub fn register(&mut self, handler: Arc<dyn LinkHandler>) {
        self.resolve_counts.insert(handler.name(), Arc::new(AtomicU64::new(0)));
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolution counts per handler, most used first. Unused handlers are
    /// omitted.
    pub fn resolution_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .resolve_counts
            .iter()
            .map(|(name, count)| (*name, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }

    /// Resolve an inbound URL to at most one navigation action.
    ///
    /// Walks handlers in registration order, skipping those whose pattern
    /// does not match, then awaits `is_enabled` for each candidate account
    /// in order. The first eligible (handler, account) pair wins and its
    /// first action is returned. `Ok(None)` means no handler claimed the
    /// URL; a lookup failure aborts the walk with `Err`.
    pub async fn resolve(
        &self,
        accounts: &[AccountId],
        url: &str,
        course_id: Option<i64>,
    ) -> LookupResult<Option<RoutedAction>> {
        let span = telemetry::spans::resolution(url);
        async {
            let params = QueryParams::from_url(url);

            for handler in &self.handlers {
                if !handler.matches(url) {
                    trace!(handler = handler.name(), "pattern did not match");
                    continue;
                }

                for account in accounts {
                    let enabled = handler
                        .is_enabled(account, url, &params, course_id)
                        .instrument(telemetry::spans::handler(handler.name(), account))
                        .await?;

                    if !enabled {
                        debug!(handler = handler.name(), account = %account, "handler ineligible");
                        continue;
                    }

                    let mut actions = handler.actions(accounts, url, &params, course_id).await;
                    if actions.is_empty() {
                        debug!(handler = handler.name(), "eligible handler produced no actions");
                        continue;
                    }

                    // Only a handler that actually produced the action counts
                    // as a resolution. Counters are created in register().
                    if let Some(counter) = self.resolve_counts.get(handler.name()) {
                        counter.fetch_add(1, Ordering::Relaxed);
                    }

                    debug!(handler = handler.name(), account = %account, "link resolved");
                    return Ok(Some(RoutedAction {
                        handler: handler.name(),
                        account: account.clone(),
                        action: actions.swap_remove(0),
                    }));
                }
            }

            debug!("no handler claimed the URL");
            Ok(None)
        }
        .instrument(span)
        .await
    }
}
