//! linkway - account-scoped deep-link resolution for messaging clients.
//!
//! Given an inbound URL (opened from an external link or deep link), the
//! [`Registry`] walks its set of [`LinkHandler`]s, tests each handler's
//! compiled pattern against the raw URL, awaits per-account eligibility, and
//! returns a deferred [`NavigationAction`] from the first eligible handler.
//!
//! Handlers are stateless and shared: pattern matching is pure and
//! synchronous, while eligibility may consult external state (capability
//! flags, account identity) through the async collaborator traits in
//! [`accounts`]. Actions navigate in replace mode so that chained link
//! resolutions never build a history loop.
//!
//! ```no_run
//! use linkway::{AccountId, DiscussionLinkHandler, Registry};
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     messaging: Arc<dyn linkway::MessagingCapability>,
//! #     directory: Arc<dyn linkway::AccountDirectory>,
//! #     navigator: Arc<dyn linkway::Navigator>,
//! # ) -> Result<(), linkway::LookupError> {
//! let mut registry = Registry::new();
//! registry.register(Arc::new(DiscussionLinkHandler::new(messaging, directory, navigator)));
//!
//! let accounts = [AccountId::new("site-1")];
//! if let Some(routed) = registry
//!     .resolve(&accounts, "https://site.example/message/index.php?id=42", None)
//!     .await?
//! {
//!     routed.action.run(routed.account).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod error;
pub mod handlers;
pub mod nav;
pub mod params;
pub mod telemetry;

pub use accounts::{AccountDirectory, AccountId, MessagingCapability};
pub use error::{LookupError, LookupResult};
pub use handlers::{DISCUSSION_SCREEN, DiscussionLinkHandler, LinkHandler, Registry, RoutedAction};
pub use nav::{ActionFuture, NavigationAction, NavigationMode, NavigationRequest, Navigator};
pub use params::QueryParams;
