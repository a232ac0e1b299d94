//! Install command implementation.
//!
//! The `neviraller install` command deploys the NEVIRAIDE configuration.

use crate::deploy::DeployOutcome;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Backends, Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    backends: &'a Backends<'a>,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(backends: &'a Backends<'a>) -> Self {
        Self { backends }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("NEVIRAIDE");
        match self.backends.deployer().deploy(ui)? {
            DeployOutcome::Deployed(path) => {
                ui.success(&format!(
                    "NEVIRAIDE was successfully installed to {}",
                    path.display()
                ));
            }
            DeployOutcome::Aborted => ui.message("Installation aborted."),
        }
        Ok(CommandResult::success())
    }
}
