//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use neviraller::ui::{confirm, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("replace_binary", "yes");
//!
//! assert!(confirm(&mut ui, "replace_binary", "Replace?"));
//! ui.success("Done!");
//!
//! assert_eq!(ui.prompts_shown(), &["replace_binary".to_string()]);
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{NevirallerError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked more than once.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    failing_prompts: HashSet<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Make every prompt with this key fail, as a closed terminal would.
    pub fn set_prompt_error(&mut self, key: &str) {
        self.failing_prompts.insert(key.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.spinners.clear();
        self.prompts_shown.clear();
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

fn to_result(prompt_type: &PromptType, response: String) -> PromptResult {
    match prompt_type {
        PromptType::Confirm => {
            PromptResult::Bool(matches!(response.as_str(), "true" | "yes" | "y" | "1"))
        }
        PromptType::Select { .. } => PromptResult::String(response),
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if self.failing_prompts.contains(&prompt.key) {
            return Err(NevirallerError::Prompt {
                message: format!("scripted failure for '{}'", prompt.key),
            });
        }

        if let Some(response) = self.next_response(&prompt.key) {
            return Ok(to_result(&prompt.prompt_type, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(to_result(&prompt.prompt_type, default.clone()));
        }

        // Type-appropriate empty answer
        Ok(to_result(&prompt.prompt_type, String::new()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
    /// Finished as skipped.
    Skipped,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the finish status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Broken");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Careful"]);
        assert_eq!(ui.errors(), &["Broken"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();
        ui.message("Cloning configuration");
        ui.error("Failed to clone");

        assert!(ui.has_message("Cloning"));
        assert!(ui.has_error("clone"));
        assert!(!ui.has_success("anything"));
        assert!(!ui.has_warning("anything"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();
        ui.message("x");
        ui.show_header("h");
        ui.start_spinner("s");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.headers().is_empty());
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn mock_ui_output_mode() {
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
        assert_eq!(
            MockUI::with_mode(OutputMode::Quiet).output_mode(),
            OutputMode::Quiet
        );
    }

    #[test]
    fn mock_ui_interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_ui_confirm_parses_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("yes_key", "y");
        ui.set_prompt_response("no_key", "no");

        let yes = ui.prompt(&Prompt::confirm("yes_key", "?")).unwrap();
        let no = ui.prompt(&Prompt::confirm("no_key", "?")).unwrap();
        assert_eq!(yes, PromptResult::Bool(true));
        assert_eq!(no, PromptResult::Bool(false));
    }

    #[test]
    fn mock_ui_confirm_uses_default() {
        let mut ui = MockUI::new();
        let mut prompt = Prompt::confirm("k", "?");
        prompt.default = Some("true".to_string());
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn mock_ui_confirm_without_response_is_false() {
        let mut ui = MockUI::new();
        let result = ui.prompt(&Prompt::confirm("k", "?")).unwrap();
        assert_eq!(result, PromptResult::Bool(false));
    }

    #[test]
    fn mock_ui_select_returns_value() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("pick", "remove");
        let prompt = Prompt::select("pick", "?", &[("rename", "Rename"), ("remove", "Remove")]);
        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("remove".to_string())
        );
    }

    #[test]
    fn mock_ui_queued_responses_returned_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("menu", vec!["check", "exit"]);
        ui.set_prompt_response("menu", "update");
        let prompt = Prompt::select("menu", "?", &[]);

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "check");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "exit");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "update");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn mock_ui_prompt_error_is_recorded() {
        let mut ui = MockUI::new();
        ui.set_prompt_error("k");
        assert!(ui.prompt(&Prompt::confirm("k", "?")).is_err());
        assert_eq!(ui.prompts_shown(), &["k".to_string()]);
    }

    #[test]
    fn mock_spinner_captures_finish() {
        let mut spinner = MockSpinner::new();
        spinner.set_message("Downloading");
        spinner.finish_success("Downloaded");

        assert_eq!(spinner.messages(), &["Downloading"]);
        assert_eq!(spinner.finish_message(), Some("Downloaded"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Success));
    }

    #[test]
    fn mock_spinner_error_and_skipped_status() {
        let mut spinner = MockSpinner::new();
        spinner.finish_error("Failed");
        assert_eq!(spinner.status(), Some(SpinnerStatus::Error));

        let mut spinner = MockSpinner::new();
        spinner.finish_skipped("Skipped");
        assert_eq!(spinner.status(), Some(SpinnerStatus::Skipped));
    }
}
