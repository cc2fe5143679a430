//! Platform predicate for the update gate.
//!
//! The gate only applies on the two mobile store platforms; everywhere else it
//! is a no-op. The [`PlatformInfo`] trait keeps the decision injectable so
//! tests (and hosts that embed their own platform detection) can supply it.

/// The platforms the gate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    /// Desktop, web, or anything else without an app store to point at.
    Other,
}

impl Platform {
    /// Whether this platform has a store the gate can direct users to.
    pub fn is_supported_mobile(self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }

    pub fn is_ios(self) -> bool {
        self == Platform::Ios
    }
}

/// Trait reporting which platform the host application runs on.
///
/// This trait allows mocking the platform in tests.
pub trait PlatformInfo {
    fn platform(&self) -> Platform;

    /// Whether the update gate applies at all.
    fn is_supported_mobile_platform(&self) -> bool {
        self.platform().is_supported_mobile()
    }

    /// Used to pick between the two store URLs when prompting.
    fn is_ios(&self) -> bool {
        self.platform().is_ios()
    }
}

/// A fixed platform is its own `PlatformInfo`.
impl PlatformInfo for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}

/// Platform detection from the compilation target.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformInfo for HostPlatform {
    fn platform(&self) -> Platform {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}
