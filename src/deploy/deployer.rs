//! Clone the configuration repository and copy it into place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{NevirallerError, Result};
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

use super::conflict::resolve_conflict;

/// Fetches a repository into a local directory.
pub trait RepoCloner {
    /// Clone `url` into `dest`, which must not exist yet.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Shallow clone through the `git` CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl RepoCloner for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| NevirallerError::filesystem("create", parent, e))?;
        }

        let dest_arg = dest.to_string_lossy().into_owned();
        let result = execute(
            "git",
            &["clone", "--depth", "1", url, dest_arg.as_str()],
            &CommandOptions::captured(),
        )
        .map_err(|e| NevirallerError::Clone {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !result.success {
            return Err(NevirallerError::Clone {
                url: url.to_string(),
                message: result.stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The configuration now lives at this path.
    Deployed(PathBuf),
    /// The user chose to keep the existing destination.
    Aborted,
}

/// Deploys the configuration tree into the user's home.
pub struct Deployer<'a> {
    settings: &'a Settings,
    cloner: &'a dyn RepoCloner,
    home: Option<PathBuf>,
}

impl<'a> Deployer<'a> {
    /// Create a deployer that resolves the home directory at deploy time.
    pub fn new(settings: &'a Settings, cloner: &'a dyn RepoCloner) -> Self {
        Self {
            settings,
            cloner,
            home: None,
        }
    }

    /// Use an explicit home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    fn home(&self) -> Result<PathBuf> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => dirs::home_dir().ok_or(NevirallerError::HomeDirUnavailable),
        }
    }

    /// Clone, resolve any conflict at the destination, then copy.
    ///
    /// The scratch clone is cleared before cloning and removed only after a
    /// successful copy.
    pub fn deploy(&self, ui: &mut dyn UserInterface) -> Result<DeployOutcome> {
        let scratch = &self.settings.scratch_clone_dir;
        clear_path(scratch)?;

        let mut spinner = ui.start_spinner("Cloning NEVIRAIDE repository...");
        if let Err(e) = self
            .cloner
            .clone_repo(&self.settings.config_repo_url, scratch)
        {
            spinner.finish_error("Clone failed");
            return Err(e);
        }
        spinner.finish_success("Repository cloned successfully!");

        let destination = self.settings.destination_in(&self.home()?);
        if fs::symlink_metadata(&destination).is_ok() {
            let conflict = resolve_conflict(ui, &destination);
            if !conflict.apply()? {
                tracing::info!("Deployment aborted; {} left in place", destination.display());
                return Ok(DeployOutcome::Aborted);
            }
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| NevirallerError::filesystem("create", parent, e))?;
        }
        copy_dir_all(scratch, &destination)?;
        tracing::info!("Copied {} to {}", scratch.display(), destination.display());

        if let Err(e) = fs::remove_dir_all(scratch) {
            tracing::warn!("Could not remove {}: {}", scratch.display(), e);
        }

        Ok(DeployOutcome::Deployed(destination))
    }
}

/// Remove a leftover file or directory, if any.
fn clear_path(path: &Path) -> Result<()> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => return Ok(()),
    };
    tracing::debug!("Clearing leftover {}", path.display());
    removed.map_err(|e| NevirallerError::filesystem("clear", path, e))
}

/// Recursively copy `src` to `dest`, preserving symlinks.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| NevirallerError::filesystem("create", dest, e))?;

    let entries = fs::read_dir(src).map_err(|e| NevirallerError::filesystem("read", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| NevirallerError::filesystem("read", src, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| NevirallerError::filesystem("read", &from, e))?;

        if file_type.is_dir() {
            copy_dir_all(&from, &to)?;
        } else if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| NevirallerError::filesystem("copy", &from, e))?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let link = fs::read_link(from).map_err(|e| NevirallerError::filesystem("read", from, e))?;
    std::os::unix::fs::symlink(&link, to).map_err(|e| NevirallerError::filesystem("copy", from, e))
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| NevirallerError::filesystem("copy", from, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::conflict::CONFLICT_KEY;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Writes a tiny configuration tree instead of cloning.
    #[derive(Default)]
    struct FakeCloner {
        fail: bool,
        cloned: RefCell<Vec<String>>,
    }

    impl RepoCloner for FakeCloner {
        fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
            self.cloned.borrow_mut().push(url.to_string());
            assert!(!dest.exists(), "scratch must be cleared before cloning");
            if self.fail {
                return Err(NevirallerError::Clone {
                    url: url.to_string(),
                    message: "repository not found".to_string(),
                });
            }
            fs::create_dir_all(dest.join("lua/plugins")).unwrap();
            fs::write(dest.join("init.lua"), "require('core')").unwrap();
            fs::write(dest.join("lua/plugins/init.lua"), "return {}").unwrap();
            Ok(())
        }
    }

    fn settings_in(temp: &TempDir) -> Settings {
        Settings {
            scratch_clone_dir: temp.path().join("scratch"),
            ..Settings::default()
        }
    }

    #[test]
    fn deploys_into_fresh_home_without_prompting() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let cloner = FakeCloner::default();
        let home = temp.path().join("home");
        let mut ui = MockUI::new();

        let outcome = Deployer::new(&settings, &cloner)
            .with_home(&home)
            .deploy(&mut ui)
            .unwrap();

        let dest = home.join(".config/nvim");
        assert_eq!(outcome, DeployOutcome::Deployed(dest.clone()));
        assert_eq!(
            fs::read_to_string(dest.join("lua/plugins/init.lua")).unwrap(),
            "return {}"
        );
        assert!(ui.prompts_shown().is_empty());
        assert!(!settings.scratch_clone_dir.exists());
        assert_eq!(cloner.cloned.borrow().as_slice(), &[settings.config_repo_url.clone()]);
    }

    #[test]
    fn leftover_scratch_is_cleared_first() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        fs::create_dir_all(settings.scratch_clone_dir.join("stale")).unwrap();
        let cloner = FakeCloner::default();
        let mut ui = MockUI::new();

        Deployer::new(&settings, &cloner)
            .with_home(temp.path().join("home"))
            .deploy(&mut ui)
            .unwrap();

        assert!(!temp.path().join("home/.config/nvim/stale").exists());
    }

    #[test]
    fn existing_destination_renamed_on_request() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let home = temp.path().join("home");
        let dest = home.join(".config/nvim");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("init.vim"), "old").unwrap();
        let cloner = FakeCloner::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFLICT_KEY, "rename");

        Deployer::new(&settings, &cloner)
            .with_home(&home)
            .deploy(&mut ui)
            .unwrap();

        assert!(home.join(".config/nvim.old/init.vim").exists());
        assert!(dest.join("init.lua").exists());
        assert!(!dest.join("init.vim").exists());
    }

    #[test]
    fn abort_keeps_destination_and_scratch() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let home = temp.path().join("home");
        let dest = home.join(".config/nvim");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("init.vim"), "old").unwrap();
        let cloner = FakeCloner::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFLICT_KEY, "abort");

        let outcome = Deployer::new(&settings, &cloner)
            .with_home(&home)
            .deploy(&mut ui)
            .unwrap();

        assert_eq!(outcome, DeployOutcome::Aborted);
        assert_eq!(fs::read_to_string(dest.join("init.vim")).unwrap(), "old");
        assert!(!dest.join("init.lua").exists());
        assert!(settings.scratch_clone_dir.join("init.lua").exists());
    }

    #[test]
    fn clone_failure_stops_before_destination() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let home = temp.path().join("home");
        let cloner = FakeCloner {
            fail: true,
            ..FakeCloner::default()
        };
        let mut ui = MockUI::new();

        let err = Deployer::new(&settings, &cloner)
            .with_home(&home)
            .deploy(&mut ui)
            .unwrap_err();

        assert!(matches!(err, NevirallerError::Clone { .. }));
        assert!(!home.exists());
    }

    #[test]
    fn copy_failure_keeps_scratch() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(&temp);
        let home = temp.path().join("home");
        fs::create_dir_all(&home).unwrap();
        fs::write(home.join(".config"), "not a directory").unwrap();
        let cloner = FakeCloner::default();
        let mut ui = MockUI::new();

        let err = Deployer::new(&settings, &cloner)
            .with_home(&home)
            .deploy(&mut ui)
            .unwrap_err();

        assert!(matches!(err, NevirallerError::Filesystem { .. }));
        assert!(settings.scratch_clone_dir.join("init.lua").exists());
        assert!(ui.prompts_shown().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn copy_preserves_symlinks() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("real.lua"), "x").unwrap();
        std::os::unix::fs::symlink("real.lua", src.join("link.lua")).unwrap();

        let dest = temp.path().join("dest");
        copy_dir_all(&src, &dest).unwrap();

        let link = dest.join("link.lua");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(link).unwrap(), "x");
    }
}
