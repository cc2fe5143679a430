//! Mock remote config implementation for testing.
//!
//! `MockRemoteConfig` implements the `RemoteConfig` trait and captures all
//! interactions for later assertion. It can be configured with scripted
//! values and a simulated fetch failure.
//!
//! # Example
//!
//! ```
//! use update_gate::remote::{MockRemoteConfig, RemoteConfig};
//!
//! let mut remote = MockRemoteConfig::new();
//! remote.set_value("min_supported_version", "2.0.0");
//!
//! // Use remote in code under test...
//! remote.fetch_and_activate();
//!
//! // Assert on captured interactions
//! assert_eq!(remote.fetch_calls(), 1);
//! assert_eq!(remote.get_string("min_supported_version"), "2.0.0");
//! ```

use std::collections::HashMap;

use super::{FetchPolicy, RemoteConfig};

/// Mock remote config implementation for testing.
///
/// Values set via [`set_value`](Self::set_value) are served immediately;
/// values set via [`set_pending_value`](Self::set_pending_value) only become
/// visible after a successful `fetch_and_activate`, mirroring the
/// fetch-then-activate lifecycle of a real source.
#[derive(Debug, Default)]
pub struct MockRemoteConfig {
    activated: HashMap<String, String>,
    pending: HashMap<String, String>,
    fail_fetch: bool,
    fetch_calls: usize,
    policy: Option<FetchPolicy>,
}

impl MockRemoteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value that is immediately readable.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.activated.insert(key.into(), value.into());
    }

    /// Set a value that only appears after the next successful fetch.
    pub fn set_pending_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pending.insert(key.into(), value.into());
    }

    /// Make subsequent fetches fail; activated values stay live.
    pub fn fail_fetches(&mut self) {
        self.fail_fetch = true;
    }

    /// Number of `fetch_and_activate` calls observed.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls
    }

    /// The last policy passed to `set_fetch_policy`, if any.
    pub fn recorded_policy(&self) -> Option<FetchPolicy> {
        self.policy
    }
}

impl RemoteConfig for MockRemoteConfig {
    fn set_fetch_policy(&mut self, policy: FetchPolicy) {
        self.policy = Some(policy);
    }

    fn fetch_and_activate(&mut self) {
        self.fetch_calls += 1;
        if !self.fail_fetch {
            self.activated.extend(self.pending.drain());
        }
    }

    fn get_string(&self, key: &str) -> String {
        self.activated.get(key).cloned().unwrap_or_default()
    }
}
