//! External tool requirements.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup for executables
//! - [`catalog`] - The fixed list of tools the editor setup needs
//! - [`resolver`] - Presence snapshot, installation of missing tools, table
//! - [`installer`] - Package manager backend and privilege gate

pub mod catalog;
pub mod installer;
pub mod probe;
pub mod resolver;

pub use catalog::{catalog, Dependency};
pub use installer::{ensure_privileges, PackageInstaller, Pacman};
pub use probe::{missing_tools, CommandProbe, PathProbe};
pub use resolver::{install_missing, missing, presence_table, resolve, summary_line, InstallFailure};
