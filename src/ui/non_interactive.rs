//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{NevirallerError, Result};

use super::theme::InstallerTheme;
use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Environment variable prefix for scripted prompt answers.
pub const PROMPT_ENV_PREFIX: &str = "NEVIRALLER_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `NEVIRALLER_PROMPT_<KEY>` environment
/// variables, then from the prompt's default. A prompt with neither fails,
/// which every caller treats as a decline.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

fn parse_answer(prompt_type: &PromptType, value: &str) -> PromptResult {
    match prompt_type {
        PromptType::Confirm => PromptResult::Bool(matches!(
            value.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        )),
        PromptType::Select { .. } => PromptResult::String(value.trim().to_string()),
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            tracing::debug!("Answering '{}' from {}", prompt.key, env_key);
            return Ok(parse_answer(&prompt.prompt_type, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(parse_answer(&prompt.prompt_type, default));
        }

        Err(NevirallerError::Prompt {
            message: format!(
                "Cannot ask '{}' in non-interactive mode (set {} to answer)",
                prompt.key, env_key
            ),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final status line.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", InstallerTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", InstallerTheme::plain().format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", InstallerTheme::plain().format_skipped(msg));
        }
    }
}
