//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Backends`] bundling the side-effect seams commands run against
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::deploy::{Deployer, GitCli, RepoCloner};
use crate::error::Result;
use crate::nightly::{NightlyHost, SystemHost};
use crate::requirements::{CommandProbe, PackageInstaller, Pacman, PathProbe};
use crate::ui::UserInterface;

use super::all::AllCommand;
use super::check::CheckCommand;
use super::completions::CompletionsCommand;
use super::install::InstallCommand;
use super::menu::MenuCommand;
use super::update::UpdateCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The collaborators every command reaches the outside world through.
pub struct Backends<'a> {
    pub settings: &'a Settings,
    pub probe: &'a dyn CommandProbe,
    pub installer: &'a dyn PackageInstaller,
    pub host: &'a dyn NightlyHost,
    pub cloner: &'a dyn RepoCloner,
    /// Home directory override; `None` resolves it at deploy time.
    pub home: Option<PathBuf>,
}

impl<'a> Backends<'a> {
    /// A deployer wired to these backends.
    pub fn deployer(&self) -> Deployer<'a> {
        let deployer = Deployer::new(self.settings, self.cloner);
        match &self.home {
            Some(home) => deployer.with_home(home.clone()),
            None => deployer,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the settings commands run with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command against the real system.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = PathProbe::from_env();
        let installer = Pacman::new(self.settings.package_manager.clone());
        let host = SystemHost::new(&self.settings);
        let cloner = GitCli;

        let backends = Backends {
            settings: &self.settings,
            probe: &probe,
            installer: &installer,
            host: &host,
            cloner: &cloner,
            home: None,
        };
        dispatch_with(&backends, cli.command.as_ref(), ui)
    }
}

/// Route a subcommand to its implementation. No subcommand opens the menu.
pub fn dispatch_with(
    backends: &Backends<'_>,
    command: Option<&Commands>,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match command {
        Some(Commands::Check(args)) => CheckCommand::new(backends, args.clone()).execute(ui),
        Some(Commands::Update) => UpdateCommand::new(backends).execute(ui),
        Some(Commands::Install) => InstallCommand::new(backends).execute(ui),
        Some(Commands::All) => AllCommand::new(backends).execute(ui),
        Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
        Some(Commands::Menu) | None => MenuCommand::new(backends).execute(ui),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::CheckArgs;
    use crate::cli::commands::testing::Harness;
    use crate::ui::MockUI;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_settings() {
        let settings = Settings {
            fetch_timeout_secs: 3,
            ..Settings::default()
        };
        let dispatcher = CommandDispatcher::new(settings);
        assert_eq!(dispatcher.settings().fetch_timeout_secs, 3);
    }

    #[test]
    fn no_subcommand_opens_menu() {
        let harness = Harness::new();
        let mut ui = MockUI::new();

        let result = dispatch_with(&harness.backends(), None, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["NEVIRALLER".to_string()]);
    }

    #[test]
    fn check_routes_to_check_command() {
        let harness = Harness::new();
        let mut ui = MockUI::new();
        let command = Commands::Check(CheckArgs::default());

        dispatch_with(&harness.backends(), Some(&command), &mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.contains("Required by")));
    }
}
