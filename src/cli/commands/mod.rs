//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command reaches the system
//! through [`Backends`], so the menu, `all`, and tests can share one set of
//! collaborators.

pub mod all;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod menu;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{dispatch_with, Backends, Command, CommandDispatcher, CommandResult};
