//! Settings schema.
//!
//! Every field defaults to the fixed value the installer ships with, so an
//! empty (or absent) settings file reproduces the stock behavior exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Release page scraped for the nightly version token.
pub const DEFAULT_RELEASE_PAGE_URL: &str = "https://github.com/neovim/neovim/releases/tag/nightly";

/// Nightly binary artifact.
pub const DEFAULT_BINARY_URL: &str =
    "https://github.com/neovim/neovim/releases/download/nightly/nvim.appimage";

/// Configuration repository deployed by `install`.
pub const DEFAULT_CONFIG_REPO_URL: &str = "https://github.com/RAprogramm/NEVIRAIDE.git";

/// Runtime settings for neviraller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Page whose `twitter:description` meta tag carries the nightly version.
    pub release_page_url: String,

    /// URL of the nightly binary.
    pub binary_url: String,

    /// Executable name of the editor (probed, terminated, replaced).
    pub binary_name: String,

    /// Scratch file the nightly binary is downloaded to.
    pub scratch_binary: PathBuf,

    /// Locations the binary is installed at, in replacement order.
    pub replacement_targets: Vec<PathBuf>,

    /// Upper bound for the release page request, in seconds.
    pub fetch_timeout_secs: u64,

    /// Git URL of the configuration tree.
    pub config_repo_url: String,

    /// Scratch directory the configuration repository is cloned into.
    pub scratch_clone_dir: PathBuf,

    /// Configuration destination, relative to the home directory.
    pub config_destination: PathBuf,

    /// Package manager used to install missing dependencies.
    pub package_manager: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            release_page_url: DEFAULT_RELEASE_PAGE_URL.to_string(),
            binary_url: DEFAULT_BINARY_URL.to_string(),
            binary_name: "nvim".to_string(),
            scratch_binary: PathBuf::from("/tmp/nvim"),
            replacement_targets: vec![
                PathBuf::from("/usr/local/bin/nvim"),
                PathBuf::from("/usr/bin/nvim"),
            ],
            fetch_timeout_secs: 10,
            config_repo_url: DEFAULT_CONFIG_REPO_URL.to_string(),
            scratch_clone_dir: PathBuf::from("/tmp/neovim-config"),
            config_destination: PathBuf::from(".config/nvim"),
            package_manager: "pacman".to_string(),
        }
    }
}

impl Settings {
    /// Timeout applied to the release page request.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Resolve the configuration destination against a home directory.
    ///
    /// Absolute destinations are returned unchanged.
    pub fn destination_in(&self, home: &Path) -> PathBuf {
        if self.config_destination.is_absolute() {
            self.config_destination.clone()
        } else {
            home.join(&self.config_destination)
        }
    }
}
