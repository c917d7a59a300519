//! Navigation types: the requests handlers emit and the deferred actions
//! the registry hands back to its caller.

use crate::accounts::AccountId;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use std::fmt;

/// How a navigation request interacts with the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Append a new history entry.
    Push,
    /// Replace the current history entry. Link resolutions always use this
    /// mode so that chained resolutions cannot build a back-navigation loop.
    Replace,
}

/// A fully resolved request to move the UI to a target screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    /// Account the navigation is scoped to.
    pub account: AccountId,
    /// Stable identifier of the target screen.
    pub screen: &'static str,
    /// Route state passed to the screen, e.g. `{"userId": 42}`.
    pub params: serde_json::Value,
    pub mode: NavigationMode,
}

/// Executes navigation requests.
///
/// Effectful, no result: navigation is fire-and-forget from the handler's
/// perspective. Implementations report their own failures through their own
/// channel rather than back through this call.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn go(&self, request: NavigationRequest);
}

/// Future returned by a deferred navigation callback.
pub type ActionFuture = BoxFuture<'static, ()>;

/// A named, deferred navigation action produced by a link handler.
///
/// The callback is bound to one account only at execution time: the handler
/// constructs the action without knowing which candidate account the
/// dispatcher will settle on.
pub struct NavigationAction {
    name: &'static str,
    perform: Box<dyn Fn(AccountId) -> ActionFuture + Send + Sync>,
}

impl NavigationAction {
    pub fn new<F>(name: &'static str, perform: F) -> Self
    where
        F: Fn(AccountId) -> ActionFuture + Send + Sync + 'static,
    {
        Self { name, perform: Box::new(perform) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Execute the deferred callback for `account`.
    pub async fn run(&self, account: AccountId) {
        (self.perform)(account).await
    }
}

impl fmt::Debug for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationAction").field("name", &self.name).finish_non_exhaustive()
    }
}
