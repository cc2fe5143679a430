//! Prompt renderer implementations.
//!
//! - [`ConsoleRenderer`] for interactive terminal usage
//! - [`MockRenderer`] / [`MockLauncher`] for tests

pub mod mock;

pub use mock::{MockLauncher, MockRenderer};

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{GateError, Result};
use crate::prompt::{PromptChoice, PromptRenderer, UpdatePrompt};

/// Convert dialoguer errors to GateError.
fn map_dialoguer_err(e: dialoguer::Error) -> GateError {
    GateError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Renders the update prompt on the terminal.
///
/// A dismissible prompt is a two-item select (update / later); a hard prompt
/// offers only the update action.
pub struct ConsoleRenderer {
    term: Term,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer for ConsoleRenderer {
    fn render(&mut self, prompt: &UpdatePrompt) -> Result<PromptChoice> {
        self.term
            .write_line(&format!("{}", style(&prompt.title).bold()))?;
        self.term.write_line(&prompt.message)?;

        let mut items = vec![prompt.confirm_label.as_str()];
        if let Some(later) = &prompt.dismiss_label {
            items.push(later.as_str());
        }

        let selection = Select::with_theme(&prompt_theme())
            .items(&items)
            .default(0)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)?;

        // Index 0 is always the confirm action
        if selection == 0 {
            Ok(PromptChoice::Update)
        } else {
            Ok(PromptChoice::Later)
        }
    }
}
