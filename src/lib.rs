//! Update gate - remote-configured minimum-version enforcement.
//!
//! This crate decides whether a running application's version falls below a
//! remotely-configured minimum and, when it does, drives a blocking or
//! dismissible prompt that sends the user to the platform's app store.
//!
//! # Modules
//!
//! - [`checker`] - Gate orchestration: resolve the threshold, compare, decide
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform predicate (iOS / Android / other)
//! - [`prompt`] - Update prompt model and store launching
//! - [`remote`] - Remote-config collaborator and HTTP implementation
//! - [`ui`] - Terminal and mock prompt renderers
//! - [`version`] - Dotted-numeric version comparison
//!
//! # Example
//!
//! ```
//! use update_gate::checker::{StaticVersion, UpdateGateChecker};
//! use update_gate::platform::Platform;
//! use update_gate::remote::MockRemoteConfig;
//!
//! let mut remote = MockRemoteConfig::new();
//! remote.set_value("min_supported_version", "2.0.0");
//!
//! let mut checker =
//!     UpdateGateChecker::new(remote, Platform::Android, StaticVersion::new("1.4.2"));
//! assert!(checker.check_for_update("min_supported_version", None));
//! ```
//!
//! The gate fails open: any fetch, parse, or collaborator error resolves to
//! "no update required" rather than blocking the user.

pub mod checker;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod remote;
pub mod ui;
pub mod version;

pub use error::{GateError, Result};
