//! Command-line interface for neviraller.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and the interactive menu

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs};
pub use commands::{dispatch_with, Backends, Command, CommandDispatcher, CommandResult};
