//! Neviraller - Neovim Nightly updater and NEVIRAIDE installer.
//!
//! Neviraller checks that the command-line tools an editor setup relies on
//! are installed, replaces the local Neovim binary when a newer nightly build
//! is published, and deploys the NEVIRAIDE configuration into the home
//! directory without silently clobbering an existing one.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, subcommands and the main menu
//! - [`config`] - Settings file loading with built-in defaults
//! - [`deploy`] - Configuration clone, conflict resolution and copy
//! - [`error`] - Error types and result aliases
//! - [`nightly`] - Version lookup, reconciliation and binary replacement
//! - [`requirements`] - Dependency catalog, PATH probing and installation
//! - [`shell`] - External command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use neviraller::nightly::remote::extract_version;
//!
//! let html = r#"<meta name="twitter:description" content="NVIM v0.11.0-dev-abc1234">"#;
//! assert_eq!(extract_version(html).as_str(), "NVIM v0.11.0-dev-abc1234");
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod nightly;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{NevirallerError, Result};
