//! Update prompting and store navigation.
//!
//! Turns a gate decision into a user-facing prompt and, on confirmation,
//! opens the platform's store page. Rendering goes through a single
//! [`PromptRenderer`] seam: a hard update is simply a prompt with no dismiss
//! action, there is no separate code path per presentation style.

use tracing::debug;

use crate::checker::GateDecision;
use crate::error::{GateError, Result};
use crate::platform::PlatformInfo;

/// Configuration for the update prompt.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Store page for iOS devices.
    pub ios_store_url: String,
    /// Store page for Android devices.
    pub android_store_url: String,
    /// Whether the user may postpone the update (soft update).
    pub dismissible: bool,
    pub title: String,
    pub message: String,
    pub update_label: String,
    pub later_label: String,
}

impl PromptConfig {
    /// Config with default texts and a hard (non-dismissible) prompt.
    pub fn new(ios_store_url: impl Into<String>, android_store_url: impl Into<String>) -> Self {
        Self {
            ios_store_url: ios_store_url.into(),
            android_store_url: android_store_url.into(),
            dismissible: false,
            title: "Update required".to_string(),
            message: "A newer version of this app is required to continue.".to_string(),
            update_label: "Update now".to_string(),
            later_label: "Later".to_string(),
        }
    }

    /// Allow the user to postpone the update.
    pub fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    /// The prompt this config renders as.
    fn to_prompt(&self) -> UpdatePrompt {
        UpdatePrompt {
            title: self.title.clone(),
            message: self.message.clone(),
            confirm_label: self.update_label.clone(),
            dismiss_label: self.dismissible.then(|| self.later_label.clone()),
        }
    }
}

/// A rendered update prompt: title, message, a confirm action, and an
/// optional dismiss action.
#[derive(Debug, Clone)]
pub struct UpdatePrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// `None` renders a hard prompt whose only way out is the confirm action.
    pub dismiss_label: Option<String>,
}

/// What the user chose on the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Update,
    Later,
}

/// Trait for rendering the update prompt.
///
/// This trait allows mocking the prompt in tests. When the prompt carries no
/// dismiss action, implementations must not return [`PromptChoice::Later`].
pub trait PromptRenderer {
    fn render(&mut self, prompt: &UpdatePrompt) -> Result<PromptChoice>;
}

/// Trait for opening an external URL (the store page).
pub trait StoreLauncher {
    fn open_external(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl StoreLauncher for SystemLauncher {
    fn open_external(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| GateError::LaunchFailed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Present the update prompt for a gate decision.
///
/// Does nothing when the decision does not require an update. Otherwise
/// renders the prompt and, on confirmation, opens the store page for the
/// current platform. Returns whether the store page was opened. The caller
/// guards against presenting the same decision twice.
pub fn present_update_prompt(
    decision: &GateDecision,
    config: &PromptConfig,
    platform: &dyn PlatformInfo,
    renderer: &mut dyn PromptRenderer,
    launcher: &dyn StoreLauncher,
) -> Result<bool> {
    if !decision.update_required {
        return Ok(false);
    }

    match renderer.render(&config.to_prompt())? {
        PromptChoice::Update => {
            let url = if platform.is_ios() {
                &config.ios_store_url
            } else {
                &config.android_store_url
            };
            launcher.open_external(url)?;
            Ok(true)
        }
        PromptChoice::Later => {
            debug!("update postponed by user");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::ui::{MockLauncher, MockRenderer};
    use chrono::Utc;

    fn update_decision() -> GateDecision {
        GateDecision {
            update_required: true,
            current: Some("1.0.0".to_string()),
            required: Some("2.0.0".to_string()),
            checked_at: Utc::now(),
        }
    }

    fn pass_decision() -> GateDecision {
        GateDecision {
            update_required: false,
            current: None,
            required: None,
            checked_at: Utc::now(),
        }
    }

    fn config() -> PromptConfig {
        PromptConfig::new(
            "https://apps.example.com/id123",
            "https://play.example.com/details?id=com.example",
        )
    }

    #[test]
    fn passing_decision_renders_nothing() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        let launcher = MockLauncher::new();

        let opened = present_update_prompt(
            &pass_decision(),
            &config(),
            &Platform::Ios,
            &mut renderer,
            &launcher,
        )
        .unwrap();

        assert!(!opened);
        assert!(renderer.rendered().is_empty());
        assert!(launcher.opened().is_empty());
    }

    #[test]
    fn confirm_opens_ios_store_on_ios() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        let launcher = MockLauncher::new();

        let opened = present_update_prompt(
            &update_decision(),
            &config(),
            &Platform::Ios,
            &mut renderer,
            &launcher,
        )
        .unwrap();

        assert!(opened);
        assert_eq!(launcher.opened(), vec!["https://apps.example.com/id123"]);
    }

    #[test]
    fn confirm_opens_play_store_on_android() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        let launcher = MockLauncher::new();

        let opened = present_update_prompt(
            &update_decision(),
            &config(),
            &Platform::Android,
            &mut renderer,
            &launcher,
        )
        .unwrap();

        assert!(opened);
        assert_eq!(
            launcher.opened(),
            vec!["https://play.example.com/details?id=com.example"]
        );
    }

    #[test]
    fn later_leaves_store_closed() {
        let mut renderer = MockRenderer::new(PromptChoice::Later);
        let launcher = MockLauncher::new();

        let opened = present_update_prompt(
            &update_decision(),
            &config().dismissible(),
            &Platform::Android,
            &mut renderer,
            &launcher,
        )
        .unwrap();

        assert!(!opened);
        assert!(launcher.opened().is_empty());
    }

    #[test]
    fn hard_prompt_has_no_dismiss_action() {
        let prompt = config().to_prompt();
        assert_eq!(prompt.confirm_label, "Update now");
        assert!(prompt.dismiss_label.is_none());
    }

    #[test]
    fn soft_prompt_carries_later_label() {
        let prompt = config().dismissible().to_prompt();
        assert_eq!(prompt.dismiss_label.as_deref(), Some("Later"));
    }

    #[test]
    fn custom_texts_flow_into_prompt() {
        let mut cfg = config();
        cfg.title = "Hold on".to_string();
        cfg.message = "Please update.".to_string();
        cfg.update_label = "Go".to_string();

        let prompt = cfg.to_prompt();
        assert_eq!(prompt.title, "Hold on");
        assert_eq!(prompt.message, "Please update.");
        assert_eq!(prompt.confirm_label, "Go");
    }

    #[test]
    fn renderer_sees_the_prompt_once() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        let launcher = MockLauncher::new();

        present_update_prompt(
            &update_decision(),
            &config(),
            &Platform::Ios,
            &mut renderer,
            &launcher,
        )
        .unwrap();

        assert_eq!(renderer.rendered().len(), 1);
        assert_eq!(renderer.rendered()[0].title, "Update required");
    }

    #[test]
    fn launcher_failure_propagates() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        let launcher = MockLauncher::failing();

        let result = present_update_prompt(
            &update_decision(),
            &config(),
            &Platform::Ios,
            &mut renderer,
            &launcher,
        );

        assert!(matches!(result, Err(GateError::LaunchFailed { .. })));
    }
}
