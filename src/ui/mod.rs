//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - Prompts, spinners, and the dependency table
//!
//! # Example
//!
//! ```
//! use neviraller::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("NEVIRALLER");
//! ui.success("Done");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, InstallerTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no question without a default answer.
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        }
    }

    /// A single-choice question over `(value, label)` pairs.
    pub fn select(key: &str, question: &str, options: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select {
                options: options
                    .iter()
                    .map(|(value, label)| PromptOption {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            },
            default: None,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// Value of the chosen select option.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Ask a yes/no question.
///
/// Anything other than an explicit yes (including a prompt failure) is a no.
pub fn confirm(ui: &mut dyn UserInterface, key: &str, question: &str) -> bool {
    let prompt = Prompt::confirm(key, question);
    match ui.prompt(&prompt) {
        Ok(result) => result.as_bool().unwrap_or(false),
        Err(e) => {
            tracing::debug!("Prompt '{}' failed: {}", key, e);
            false
        }
    }
}

/// Ask a single-choice question and return the chosen option's value.
///
/// Returns `None` when the prompt fails or the answer is not one of the
/// offered values.
pub fn select(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    options: &[(&str, &str)],
) -> Option<String> {
    let prompt = Prompt::select(key, question, options);
    match ui.prompt(&prompt) {
        Ok(PromptResult::String(value)) if options.iter().any(|(v, _)| *v == value) => {
            Some(value)
        }
        Ok(other) => {
            tracing::debug!("Prompt '{}' got unrecognized answer {:?}", key, other);
            None
        }
        Err(e) => {
            tracing::debug!("Prompt '{}' failed: {}", key, e);
            None
        }
    }
}
