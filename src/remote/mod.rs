//! Remote configuration collaborator.
//!
//! The gate reads its minimum-version threshold from a key/value store fetched
//! from a server, so the threshold can change without shipping a new build.
//! [`RemoteConfig`] is the seam; [`HttpRemoteConfig`] is the shipped
//! implementation and [`MockRemoteConfig`] the test double.

pub mod http;
pub mod mock;

pub use http::HttpRemoteConfig;
pub use mock::MockRemoteConfig;

use std::time::Duration;

/// Fetch behavior for a remote config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// How long a single fetch may take before it is abandoned.
    pub timeout: Duration,
    /// Minimum age of the last successful fetch before the network is hit
    /// again. Zero means every `fetch_and_activate` attempts a fresh fetch.
    pub min_interval: Duration,
}

impl FetchPolicy {
    /// Policy that always fetches fresh, with the given timeout.
    pub fn immediate(timeout: Duration) -> Self {
        Self {
            timeout,
            min_interval: Duration::ZERO,
        }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::immediate(Duration::from_secs(10))
    }
}

/// Trait for remote key/value configuration sources.
///
/// This trait allows mocking the config source in tests.
pub trait RemoteConfig {
    /// Set the fetch timeout and minimum fetch interval.
    fn set_fetch_policy(&mut self, policy: FetchPolicy);

    /// Refresh and activate values, best effort.
    ///
    /// A failed fetch must never surface to the caller: the previously
    /// activated (or default) values stay live instead.
    fn fetch_and_activate(&mut self);

    /// Read the activated string value for `key`.
    ///
    /// Returns the empty string when the key is absent.
    fn get_string(&self, key: &str) -> String;
}
