//! All command implementation.
//!
//! The `neviraller all` command updates Neovim Nightly and then installs
//! NEVIRAIDE. A failed update skips the installation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Backends, Command, CommandResult};
use super::install::InstallCommand;
use super::update::UpdateCommand;

/// The all command implementation.
pub struct AllCommand<'a> {
    backends: &'a Backends<'a>,
}

impl<'a> AllCommand<'a> {
    /// Create a new all command.
    pub fn new(backends: &'a Backends<'a>) -> Self {
        Self { backends }
    }
}

impl Command for AllCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = UpdateCommand::new(self.backends).run(ui);
        if outcome.is_failure() {
            ui.warning("Skipping NEVIRAIDE installation because the update failed.");
            return Ok(CommandResult::failure(1));
        }
        InstallCommand::new(self.backends).execute(ui)
    }
}
