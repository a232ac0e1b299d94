//! External process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{command_line, execute, execute_quiet, CommandOptions, CommandResult};
pub use platform::{is_ci, is_elevated};
