//! The fixed dependency catalog.

use serde::Serialize;

/// An external tool the installer expects to find.
///
/// `present` is derived by each resolution pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Human label, also the package name handed to the package manager.
    pub name: String,
    /// Executable looked up on PATH.
    pub probe_command: String,
    /// What needs this tool.
    pub required_by: String,
    /// Whether the last resolution pass found the tool.
    pub present: bool,
}

impl Dependency {
    /// A catalog entry not yet probed.
    pub fn new(name: &str, probe_command: &str, required_by: &str) -> Self {
        Self {
            name: name.to_string(),
            probe_command: probe_command.to_string(),
            required_by: required_by.to_string(),
            present: false,
        }
    }
}

const ENTRIES: &[(&str, &str, &str)] = &[
    ("curl", "curl", "Mason.nvim"),
    ("fd", "fd", "Telescope.nvim"),
    ("git", "git", "Work with git"),
    ("npm", "npm", "Mason.nvim"),
    ("ripgrep", "rg", "Telescope.nvim"),
    ("tar", "tar", "Mason.nvim"),
    ("unzip", "unzip", "Mason.nvim"),
    ("wget", "wget", "Neovim Nightly updater"),
];

/// The built-in catalog, in display order.
pub fn catalog() -> Vec<Dependency> {
    ENTRIES
        .iter()
        .map(|(name, probe, required_by)| Dependency::new(name, probe, required_by))
        .collect()
}
