//! Error types for update-gate operations.
//!
//! This module defines [`GateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors
//! - The gate check itself never surfaces errors to its caller: every failure
//!   inside the check resolves to "no update required" (fail open), with the
//!   error emitted as a diagnostic only. `GateError` travels between the
//!   internal collaborators and out of the prompt path.

use thiserror::Error;

/// Core error type for update-gate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// A version string contained a non-numeric or empty segment.
    #[error("Invalid version string: {value:?}")]
    VersionParse { value: String },

    /// Fetching the remote configuration failed.
    #[error("Failed to fetch remote config from {url}: {message}")]
    RemoteFetch { url: String, message: String },

    /// The version-source collaborator could not report the running version.
    #[error("Failed to look up current version: {message}")]
    VersionLookup { message: String },

    /// Opening the store page failed.
    #[error("Failed to open {url}: {message}")]
    LaunchFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_parse_displays_value() {
        let err = GateError::VersionParse {
            value: "1.x.0".into(),
        };
        assert!(err.to_string().contains("1.x.0"));
    }

    #[test]
    fn remote_fetch_displays_url_and_message() {
        let err = GateError::RemoteFetch {
            url: "https://config.example.com/app".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://config.example.com/app"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn version_lookup_displays_message() {
        let err = GateError::VersionLookup {
            message: "package info unavailable".into(),
        };
        assert!(err.to_string().contains("package info unavailable"));
    }

    #[test]
    fn launch_failed_displays_url() {
        let err = GateError::LaunchFailed {
            url: "https://apps.example.com/id123".into(),
            message: "no handler".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://apps.example.com/id123"));
        assert!(msg.contains("no handler"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GateError::VersionLookup {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
