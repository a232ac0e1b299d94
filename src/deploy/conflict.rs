//! Handling of an existing configuration directory at the destination.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NevirallerError, Result};
use crate::ui::{select, UserInterface};

/// Prompt key for the conflict choice.
pub const CONFLICT_KEY: &str = "existing_config";

/// What to do with an existing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Move it aside to `<destination>.old`.
    Rename,
    /// Delete it recursively.
    Remove,
    /// Stop the deployment and leave it alone.
    Abort,
}

impl Resolution {
    fn from_value(value: &str) -> Self {
        match value {
            "rename" => Self::Rename,
            "remove" => Self::Remove,
            _ => Self::Abort,
        }
    }
}

/// An existing destination and the chosen resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConflict {
    pub path: PathBuf,
    pub resolution: Resolution,
}

impl DirectoryConflict {
    /// Carry out the resolution.
    ///
    /// Returns `false` when the deployment must stop. A rename whose
    /// `.old` sibling already exists fails instead of overwriting it.
    pub fn apply(&self) -> Result<bool> {
        match self.resolution {
            Resolution::Abort => Ok(false),
            Resolution::Rename => {
                let backup = backup_path(&self.path);
                if fs::symlink_metadata(&backup).is_ok() {
                    return Err(NevirallerError::filesystem(
                        "rename",
                        &self.path,
                        format!("{} already exists", backup.display()),
                    ));
                }
                fs::rename(&self.path, &backup)
                    .map_err(|e| NevirallerError::filesystem("rename", &self.path, e))?;
                tracing::info!("Renamed {} to {}", self.path.display(), backup.display());
                Ok(true)
            }
            Resolution::Remove => {
                let removed = match fs::symlink_metadata(&self.path) {
                    Ok(meta) if meta.is_dir() => fs::remove_dir_all(&self.path),
                    Ok(_) => fs::remove_file(&self.path),
                    Err(e) => Err(e),
                };
                removed.map_err(|e| NevirallerError::filesystem("remove", &self.path, e))?;
                tracing::info!("Removed {}", self.path.display());
                Ok(true)
            }
        }
    }
}

/// `<path>.old`, next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".old");
    PathBuf::from(name)
}

/// Ask the user how to handle an existing destination.
///
/// An interrupted or unanswerable prompt resolves to [`Resolution::Abort`].
pub fn resolve_conflict(ui: &mut dyn UserInterface, path: &Path) -> DirectoryConflict {
    let question = format!("{} already exists. What should be done?", path.display());
    let choice = select(
        ui,
        CONFLICT_KEY,
        &question,
        &[
            ("rename", "Rename existing \"nvim\" directory to \"nvim.old\""),
            ("remove", "Remove existing \"nvim\" directory"),
            ("abort", "Abort installation"),
        ],
    );

    let resolution = choice
        .as_deref()
        .map(Resolution::from_value)
        .unwrap_or(Resolution::Abort);
    tracing::debug!("Conflict at {} resolved as {:?}", path.display(), resolution);

    DirectoryConflict {
        path: path.to_path_buf(),
        resolution,
    }
}
