//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{NevirallerError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to NevirallerError.
fn map_dialoguer_err(e: dialoguer::Error) -> NevirallerError {
    NevirallerError::Prompt {
        message: e.to_string(),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn confirm_default(prompt: &Prompt) -> bool {
    prompt
        .default
        .as_ref()
        .map(|s| matches!(s.to_lowercase().as_str(), "true" | "y" | "yes"))
        .unwrap_or(false)
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(confirm_default(prompt))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn select_default(prompt: &Prompt, options: &[PromptOption]) -> usize {
    prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0)
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(NevirallerError::Prompt {
            message: format!("'{}' has no options to choose from", prompt.key),
        });
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(select_default(prompt, options))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_defaults_to_no() {
        let prompt = Prompt::confirm("k", "?");
        assert!(!confirm_default(&prompt));
    }

    #[test]
    fn confirm_default_parses_yes() {
        let mut prompt = Prompt::confirm("k", "?");
        prompt.default = Some("Yes".to_string());
        assert!(confirm_default(&prompt));
    }

    #[test]
    fn select_default_finds_value() {
        let mut prompt = Prompt::select("k", "?", &[("a", "A"), ("b", "B")]);
        prompt.default = Some("b".to_string());
        if let PromptType::Select { options } = &prompt.prompt_type {
            assert_eq!(select_default(&prompt, options), 1);
        }
    }

    #[test]
    fn select_default_falls_back_to_first() {
        let prompt = Prompt::select("k", "?", &[("a", "A")]);
        if let PromptType::Select { options } = &prompt.prompt_type {
            assert_eq!(select_default(&prompt, options), 0);
        }
    }

    #[test]
    fn empty_select_is_an_error() {
        let prompt = Prompt::select("k", "?", &[]);
        let result = prompt_user(&prompt, &Term::stdout());
        assert!(matches!(result, Err(NevirallerError::Prompt { .. })));
    }
}
