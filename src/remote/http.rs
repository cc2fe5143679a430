//! HTTP-backed remote configuration.
//!
//! Fetches a JSON object of key/value pairs from a single URL and activates it
//! as the live config. Fetch failures keep the last activated values (or the
//! in-code defaults) live, so a flaky network can never break callers.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use super::{FetchPolicy, RemoteConfig};
use crate::error::{GateError, Result};

/// Remote config source backed by a JSON endpoint.
///
/// # Example
///
/// ```no_run
/// use update_gate::remote::{HttpRemoteConfig, RemoteConfig};
///
/// let mut config = HttpRemoteConfig::new("https://config.example.com/app.json");
/// config.fetch_and_activate();
/// let min_version = config.get_string("min_supported_version");
/// ```
pub struct HttpRemoteConfig {
    /// Endpoint serving the config as a flat JSON object.
    url: String,
    policy: FetchPolicy,
    /// HTTP client, rebuilt when the policy timeout changes.
    client: reqwest::blocking::Client,
    /// Values from the last successful fetch.
    activated: Option<HashMap<String, String>>,
    /// In-code fallbacks consulted when a key was never activated.
    defaults: HashMap<String, String>,
    /// When the last successful fetch completed.
    last_fetch: Option<DateTime<Utc>>,
}

impl HttpRemoteConfig {
    /// Create a source for the given endpoint with the default fetch policy.
    pub fn new(url: impl Into<String>) -> Self {
        let policy = FetchPolicy::default();
        Self {
            url: url.into(),
            policy,
            client: build_client(policy.timeout),
            activated: None,
            defaults: HashMap::new(),
            last_fetch: None,
        }
    }

    /// Create a source with in-code default values.
    pub fn with_defaults(
        url: impl Into<String>,
        defaults: HashMap<String, String>,
    ) -> Self {
        let mut source = Self::new(url);
        source.defaults = defaults;
        source
    }

    /// The configured endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The current fetch policy.
    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Whether the last successful fetch is still fresh under `min_interval`.
    fn within_min_interval(&self) -> bool {
        match self.last_fetch {
            Some(last) => {
                let age = Utc::now().signed_duration_since(last);
                age.to_std()
                    .map(|age| age < self.policy.min_interval)
                    .unwrap_or(false)
            }
            None => false,
        }
    }

    /// Fetch the config payload and flatten it to string values.
    fn fetch_values(&self) -> Result<HashMap<String, String>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| GateError::RemoteFetch {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(GateError::RemoteFetch {
                url: self.url.clone(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let payload: Value = response
            .json()
            .with_context(|| format!("Failed to parse config from {}", self.url))?;

        let object = payload
            .as_object()
            .ok_or_else(|| anyhow!("Config payload from {} is not a JSON object", self.url))?;

        let mut values = HashMap::new();
        for (key, value) in object {
            match value {
                Value::String(s) => {
                    values.insert(key.clone(), s.clone());
                }
                // Numbers and booleans read back as their literal text
                Value::Number(_) | Value::Bool(_) => {
                    values.insert(key.clone(), value.to_string());
                }
                Value::Null | Value::Array(_) | Value::Object(_) => {}
            }
        }

        Ok(values)
    }
}

impl RemoteConfig for HttpRemoteConfig {
    fn set_fetch_policy(&mut self, policy: FetchPolicy) {
        if policy.timeout != self.policy.timeout {
            self.client = build_client(policy.timeout);
        }
        self.policy = policy;
    }

    fn fetch_and_activate(&mut self) {
        if self.within_min_interval() {
            debug!(url = %self.url, "last fetch still fresh, keeping activated values");
            return;
        }

        match self.fetch_values() {
            Ok(values) => {
                debug!(url = %self.url, keys = values.len(), "remote config activated");
                self.activated = Some(values);
                self.last_fetch = Some(Utc::now());
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "remote config fetch failed, keeping previous values");
            }
        }
    }

    fn get_string(&self, key: &str) -> String {
        self.activated
            .as_ref()
            .and_then(|values| values.get(key))
            .or_else(|| self.defaults.get(key))
            .cloned()
            .unwrap_or_default()
    }
}

fn build_client(timeout: Duration) -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}
