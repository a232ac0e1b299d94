//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Neviraller - Neovim Nightly updater and NEVIRAIDE installer.
#[derive(Debug, Parser)]
#[command(name = "neviraller")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ~/.config/neviraller/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; use NEVIRALLER_PROMPT_<KEY> overrides or fail the prompt
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive main menu (default if no command specified)
    Menu,

    /// Check external tools and install missing ones
    Check(CheckArgs),

    /// Update Neovim Nightly if a newer build exists
    Update,

    /// Install the NEVIRAIDE configuration
    Install,

    /// Update Neovim Nightly, then install NEVIRAIDE
    All,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Install missing tools without asking
    #[arg(long)]
    pub install: bool,

    /// Output the presence snapshot as JSON (never prompts)
    #[arg(long, conflicts_with = "install")]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
