//! Gate orchestration: resolve the threshold, compare versions, decide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::Result;
use crate::platform::PlatformInfo;
use crate::remote::{FetchPolicy, RemoteConfig};
use crate::version::is_update_required;

/// Timeout for the single remote-config fetch per check.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait reporting the version of the running application.
///
/// This trait allows mocking the version lookup in tests.
pub trait VersionSource {
    fn current_version(&self) -> Result<String>;
}

/// A version string supplied by the caller, typically the host application's
/// own `CARGO_PKG_VERSION`.
#[derive(Debug, Clone)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionSource for StaticVersion {
    fn current_version(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Outcome of one gate check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDecision {
    /// Whether the current version is strictly below the threshold.
    pub update_required: bool,
    /// The running version, when the lookup succeeded.
    pub current: Option<String>,
    /// The resolved minimum-version threshold, when one was configured.
    pub required: Option<String>,
    /// When this check was performed.
    pub checked_at: DateTime<Utc>,
}

impl GateDecision {
    /// A passing decision with no threshold involved.
    fn pass() -> Self {
        Self {
            update_required: false,
            current: None,
            required: None,
            checked_at: Utc::now(),
        }
    }
}

/// Orchestrates the version gate against its three collaborators.
///
/// Every check is an independent linear flow: one fetch, one read, one
/// comparison. Nothing is cached across calls and any internal failure
/// resolves to "no update required".
///
/// # Example
///
/// ```
/// use update_gate::checker::{StaticVersion, UpdateGateChecker};
/// use update_gate::platform::Platform;
/// use update_gate::remote::MockRemoteConfig;
///
/// let mut remote = MockRemoteConfig::new();
/// remote.set_value("min_supported_version", "3.0.0");
///
/// let mut checker =
///     UpdateGateChecker::new(remote, Platform::Ios, StaticVersion::new("2.9.0"));
/// assert!(checker.check_for_update("min_supported_version", None));
/// ```
pub struct UpdateGateChecker<R, P, V> {
    remote: R,
    platform: P,
    version: V,
}

impl<R, P, V> UpdateGateChecker<R, P, V>
where
    R: RemoteConfig,
    P: PlatformInfo,
    V: VersionSource,
{
    pub fn new(remote: R, platform: P, version: V) -> Self {
        Self {
            remote,
            platform,
            version,
        }
    }

    /// Check whether the running version is below the configured minimum.
    ///
    /// The threshold is the remote value for `remote_key` when non-empty,
    /// otherwise `override_version` when non-empty, otherwise no threshold
    /// (no update). Returns `false` on unsupported platforms without
    /// touching the network, and `false` on any internal error.
    pub fn check_for_update(&mut self, remote_key: &str, override_version: Option<&str>) -> bool {
        self.evaluate(remote_key, override_version).update_required
    }

    /// Run the gate check and return the detailed outcome.
    ///
    /// Same semantics as [`check_for_update`](Self::check_for_update); the
    /// decision additionally carries the resolved threshold and the running
    /// version for logging or reporting.
    pub fn evaluate(&mut self, remote_key: &str, override_version: Option<&str>) -> GateDecision {
        if !self.platform.is_supported_mobile_platform() {
            debug!("unsupported platform, skipping update gate");
            return GateDecision::pass();
        }

        match self.try_evaluate(remote_key, override_version) {
            Ok(decision) => decision,
            Err(e) => {
                warn!(remote_key, error = %e, "update check failed, failing open");
                GateDecision::pass()
            }
        }
    }

    fn try_evaluate(
        &mut self,
        remote_key: &str,
        override_version: Option<&str>,
    ) -> Result<GateDecision> {
        self.remote.set_fetch_policy(FetchPolicy::immediate(FETCH_TIMEOUT));
        self.remote.fetch_and_activate();

        let remote_value = self.remote.get_string(remote_key);
        let required = resolve_threshold(&remote_value, override_version);

        let required = match required {
            Some(required) => required,
            None => {
                debug!(remote_key, "no version threshold configured");
                return Ok(GateDecision::pass());
            }
        };

        let current = self.version.current_version()?;

        let update_required = is_update_required(&current, &required);
        debug!(current = %current, required = %required, update_required, "update gate decided");

        Ok(GateDecision {
            update_required,
            current: Some(current),
            required: Some(required),
            checked_at: Utc::now(),
        })
    }
}

/// Pick the effective threshold: remote value first, then the override.
fn resolve_threshold(remote_value: &str, override_version: Option<&str>) -> Option<String> {
    if !remote_value.is_empty() {
        return Some(remote_value.to_string());
    }
    match override_version {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => None,
    }
}
