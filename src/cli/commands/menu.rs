//! Interactive main menu.
//!
//! Shown when `neviraller` runs without a subcommand. Loops until the user
//! confirms *Exit* or the menu prompt cannot be answered.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::{confirm, select, UserInterface};

use super::all::AllCommand;
use super::check::CheckCommand;
use super::dispatcher::{Backends, Command, CommandResult};
use super::install::InstallCommand;
use super::update::UpdateCommand;

/// Prompt key for the menu choice.
pub const MENU_KEY: &str = "menu";

/// Prompt key for the exit confirmation.
pub const EXIT_KEY: &str = "confirm_exit";

const ENTRIES: &[(&str, &str)] = &[
    ("check", "Check all dependencies"),
    ("update", "Check latest release Neovim Nightly and install it"),
    ("install", "Install NEVIRAIDE"),
    ("all", "Install Neovim and NEVIRAIDE"),
    ("exit", "Quit from installation program"),
];

/// The menu command implementation.
pub struct MenuCommand<'a> {
    backends: &'a Backends<'a>,
}

impl<'a> MenuCommand<'a> {
    /// Create a new menu command.
    pub fn new(backends: &'a Backends<'a>) -> Self {
        Self { backends }
    }

    fn run_entry(&self, choice: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match choice {
            "check" => CheckCommand::new(self.backends, CheckArgs::default()).execute(ui),
            "update" => UpdateCommand::new(self.backends).execute(ui),
            "install" => InstallCommand::new(self.backends).execute(ui),
            "all" => AllCommand::new(self.backends).execute(ui),
            _ => Ok(CommandResult::success()),
        }
    }
}

impl Command for MenuCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("NEVIRALLER");

        loop {
            let Some(choice) = select(ui, MENU_KEY, "What would you like to do?", ENTRIES) else {
                tracing::debug!("Menu prompt unanswered; leaving");
                break;
            };

            if choice == "exit" {
                if confirm(ui, EXIT_KEY, "Exit from installation?") {
                    break;
                }
                continue;
            }

            // A failing entry is reported and the menu stays open.
            if let Err(e) = self.run_entry(&choice, ui) {
                ui.error(&format!("Error: {}", e));
            }
        }

        Ok(CommandResult::success())
    }
}
