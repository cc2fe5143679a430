//! Mock renderer and launcher implementations for testing.
//!
//! `MockRenderer` implements the `PromptRenderer` trait with a scripted
//! choice and captures every prompt it is asked to render. `MockLauncher`
//! records opened URLs instead of touching the operating system.
//!
//! # Example
//!
//! ```
//! use update_gate::prompt::{PromptChoice, PromptRenderer, UpdatePrompt};
//! use update_gate::ui::MockRenderer;
//!
//! let mut renderer = MockRenderer::new(PromptChoice::Update);
//!
//! // Use renderer in code under test...
//! let prompt = UpdatePrompt {
//!     title: "Update required".into(),
//!     message: "Please update.".into(),
//!     confirm_label: "Update now".into(),
//!     dismiss_label: None,
//! };
//! assert_eq!(renderer.render(&prompt).unwrap(), PromptChoice::Update);
//!
//! // Assert on captured interactions
//! assert_eq!(renderer.rendered().len(), 1);
//! ```

use std::cell::RefCell;

use crate::error::{GateError, Result};
use crate::prompt::{PromptChoice, PromptRenderer, StoreLauncher, UpdatePrompt};

/// Mock prompt renderer that returns a scripted choice.
#[derive(Debug)]
pub struct MockRenderer {
    choice: PromptChoice,
    rendered: Vec<UpdatePrompt>,
}

impl MockRenderer {
    pub fn new(choice: PromptChoice) -> Self {
        Self {
            choice,
            rendered: Vec::new(),
        }
    }

    /// Prompts rendered so far, in order.
    pub fn rendered(&self) -> &[UpdatePrompt] {
        &self.rendered
    }
}

impl PromptRenderer for MockRenderer {
    fn render(&mut self, prompt: &UpdatePrompt) -> Result<PromptChoice> {
        self.rendered.push(prompt.clone());
        // A hard prompt has no dismiss action to script
        if prompt.dismiss_label.is_none() {
            return Ok(PromptChoice::Update);
        }
        Ok(self.choice)
    }
}

/// Mock store launcher that records opened URLs.
#[derive(Debug, Default)]
pub struct MockLauncher {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose `open_external` always fails.
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// URLs opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl StoreLauncher for MockLauncher {
    fn open_external(&self, url: &str) -> Result<()> {
        if self.fail {
            return Err(GateError::LaunchFailed {
                url: url.to_string(),
                message: "mock launcher configured to fail".to_string(),
            });
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft_prompt() -> UpdatePrompt {
        UpdatePrompt {
            title: "t".into(),
            message: "m".into(),
            confirm_label: "Update now".into(),
            dismiss_label: Some("Later".into()),
        }
    }

    #[test]
    fn renderer_returns_scripted_choice() {
        let mut renderer = MockRenderer::new(PromptChoice::Later);
        assert_eq!(renderer.render(&soft_prompt()).unwrap(), PromptChoice::Later);
    }

    #[test]
    fn renderer_captures_prompts() {
        let mut renderer = MockRenderer::new(PromptChoice::Update);
        renderer.render(&soft_prompt()).unwrap();
        renderer.render(&soft_prompt()).unwrap();
        assert_eq!(renderer.rendered().len(), 2);
    }

    #[test]
    fn hard_prompt_always_confirms() {
        let mut renderer = MockRenderer::new(PromptChoice::Later);
        let prompt = UpdatePrompt {
            dismiss_label: None,
            ..soft_prompt()
        };
        assert_eq!(renderer.render(&prompt).unwrap(), PromptChoice::Update);
    }

    #[test]
    fn launcher_records_urls() {
        let launcher = MockLauncher::new();
        launcher.open_external("https://example.com/a").unwrap();
        launcher.open_external("https://example.com/b").unwrap();
        assert_eq!(
            launcher.opened(),
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn failing_launcher_errors() {
        let launcher = MockLauncher::failing();
        let result = launcher.open_external("https://example.com");
        assert!(matches!(result, Err(GateError::LaunchFailed { .. })));
        assert!(launcher.opened().is_empty());
    }
}
