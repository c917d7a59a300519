//! Shared in-memory doubles for the resolution integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use linkway::{
    AccountDirectory, AccountId, LookupError, LookupResult, MessagingCapability,
    NavigationRequest, Navigator,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Install a subscriber honoring `RUST_LOG` for test debugging. Safe to
/// call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Capability probe backed by a fixed flag, counting lookups.
pub struct CapabilityFlag {
    enabled: bool,
    calls: AtomicUsize,
}

impl CapabilityFlag {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessagingCapability for CapabilityFlag {
    async fn messaging_enabled(&self, _account: &AccountId) -> LookupResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.enabled)
    }
}

/// Capability probe whose backend is down.
pub struct FailingCapability;

#[async_trait]
impl MessagingCapability for FailingCapability {
    async fn messaging_enabled(&self, _account: &AccountId) -> LookupResult<bool> {
        Err(LookupError::Capability("capability backend down".into()))
    }
}

/// Account directory backed by a fixed account -> user id map, counting
/// lookups.
pub struct DirectoryStub {
    users: HashMap<String, i64>,
    calls: AtomicUsize,
}

impl DirectoryStub {
    pub fn new(users: impl IntoIterator<Item = (&'static str, i64)>) -> Self {
        Self {
            users: users.into_iter().map(|(a, u)| (a.to_string(), u)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn single(account: &'static str, user_id: i64) -> Self {
        Self::new([(account, user_id)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountDirectory for DirectoryStub {
    async fn user_id(&self, account: &AccountId) -> LookupResult<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(account.as_str())
            .copied()
            .ok_or_else(|| LookupError::Identity(format!("unknown account {account}")))
    }
}

/// Navigator that records every request it receives.
#[derive(Default)]
pub struct RecordingNavigator {
    sent: Mutex<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.sent.lock().expect("navigator lock poisoned").clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn go(&self, request: NavigationRequest) {
        self.sent.lock().expect("navigator lock poisoned").push(request);
    }
}
