//! Update command implementation.
//!
//! The `neviraller update` command brings the installed Neovim Nightly in
//! line with the latest published build.

use crate::error::Result;
use crate::nightly::{reconcile, report_outcome, ReconcileOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Backends, Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand<'a> {
    backends: &'a Backends<'a>,
}

impl<'a> UpdateCommand<'a> {
    /// Create a new update command.
    pub fn new(backends: &'a Backends<'a>) -> Self {
        Self { backends }
    }

    /// Reconcile and report, returning the outcome for callers that chain on it.
    pub fn run(&self, ui: &mut dyn UserInterface) -> ReconcileOutcome {
        ui.show_header("Neovim Nightly");
        let outcome = reconcile(
            self.backends.host,
            self.backends.probe,
            ui,
            &self.backends.settings.replacement_targets,
        );
        tracing::debug!("Reconcile outcome: {:?}", outcome);
        report_outcome(ui, &outcome);
        outcome
    }
}

impl Command for UpdateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.run(ui);
        Ok(if outcome.is_failure() {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        })
    }
}
