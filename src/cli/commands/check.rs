//! Check command implementation.
//!
//! The `neviraller check` command shows which external tools are present and
//! installs the missing ones.

use crate::cli::args::CheckArgs;
use crate::error::{NevirallerError, Result};
use crate::requirements::{catalog, install_missing, missing, presence_table, resolve};
use crate::ui::{confirm, should_use_colors, InstallerTheme, UserInterface};

use super::dispatcher::{Backends, Command, CommandResult};

/// Prompt key for installing missing tools.
pub const INSTALL_KEY: &str = "install_missing";

/// The check command implementation.
pub struct CheckCommand<'a> {
    backends: &'a Backends<'a>,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(backends: &'a Backends<'a>, args: CheckArgs) -> Self {
        Self { backends, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let deps = resolve(&catalog(), self.backends.probe);
        let absent: Vec<String> = missing(&deps).iter().map(|d| d.name.clone()).collect();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&deps).map_err(|e| NevirallerError::Other(e.into()))?;
            ui.message(&json);
            return Ok(if absent.is_empty() {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        let theme = if should_use_colors() {
            InstallerTheme::new()
        } else {
            InstallerTheme::plain()
        };
        ui.show_header("Dependencies");
        ui.message(&presence_table(&deps, &theme).render());

        if absent.is_empty() {
            return Ok(CommandResult::success());
        }

        let wanted = self.args.install
            || confirm(
                ui,
                INSTALL_KEY,
                &format!("Install missing dependencies ({})?", absent.join(", ")),
            );
        if !wanted {
            ui.message("Missing dependencies were not installed.");
            return Ok(CommandResult::success());
        }

        let mut spinner = ui.start_spinner(&format!("Installing {}...", absent.join(", ")));
        let failures = match install_missing(&deps, self.backends.installer) {
            Ok(failures) => failures,
            Err(e) => {
                spinner.finish_error("Could not obtain privileges");
                return Err(e);
            }
        };

        if failures.is_empty() {
            spinner.finish_success(&format!("Installed {}", absent.join(", ")));
            return Ok(CommandResult::success());
        }

        spinner.finish_error(&format!(
            "{} of {} packages failed to install",
            failures.len(),
            absent.len()
        ));
        for failure in &failures {
            ui.error(&failure.error.to_string());
        }
        Ok(CommandResult::failure(1))
    }
}
