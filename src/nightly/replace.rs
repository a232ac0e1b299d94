//! Download, process termination, and per-target binary replacement.

use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{NevirallerError, Result};
use crate::shell::{execute, execute_quiet, CommandOptions};

/// Download `url` to `dest` and mark it executable.
///
/// No overall timeout applies; the artifact is large and the transfer is
/// shown with a spinner. A partial file is removed on failure.
pub fn download(url: &str, dest: &Path) -> Result<u64> {
    let fetch_error = |message: String| NevirallerError::Fetch {
        url: url.to_string(),
        message,
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("neviraller/", env!("CARGO_PKG_VERSION")))
        .timeout(Option::<std::time::Duration>::None)
        .build()
        .map_err(|e| fetch_error(e.to_string()))?;

    tracing::info!("Downloading {} to {}", url, dest.display());
    let mut response = client
        .get(url)
        .send()
        .map_err(|e| fetch_error(e.to_string()))?;

    if !response.status().is_success() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let mut file =
        File::create(dest).map_err(|e| NevirallerError::filesystem("create", dest, e))?;
    let written = match response.copy_to(&mut file) {
        Ok(n) => n,
        Err(e) => {
            drop(file);
            let _ = fs::remove_file(dest);
            return Err(fetch_error(e.to_string()));
        }
    };

    make_executable(dest)?;
    tracing::debug!("Downloaded {} bytes", written);
    Ok(written)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| NevirallerError::filesystem("chmod", path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Outcome of terminating running editor instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// At least one process was signalled.
    Terminated,
    /// No matching process was running.
    NotRunning,
    /// `pkill` failed or could not be run.
    Failed(String),
}

impl Termination {
    /// Map a `pkill` exit code.
    pub fn from_exit_code(code: Option<i32>, stderr: &str) -> Self {
        match code {
            Some(0) => Self::Terminated,
            Some(1) => Self::NotRunning,
            other => Self::Failed(format!("pkill exited with {:?}: {}", other, stderr.trim())),
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminated => f.write_str("terminated"),
            Self::NotRunning => f.write_str("not-running"),
            Self::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

/// Terminate running instances of `name`. Never fails.
pub fn terminate(name: &str) -> Termination {
    let outcome = match execute_quiet("pkill", &[name]) {
        Ok(result) => Termination::from_exit_code(result.exit_code, &result.stderr),
        Err(e) => Termination::Failed(e.to_string()),
    };
    tracing::info!("Terminating '{}': {}", name, outcome);
    outcome
}

/// Staging path next to `target`: `<dir>/.<name>.new`.
pub fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = format!(".{}.new", name);
    match target.parent() {
        Some(dir) => dir.join(staging),
        None => PathBuf::from(staging),
    }
}

/// Install `scratch` at `target`.
///
/// The file is first installed to a staging path in the target's directory
/// and then renamed over the target, so the target is either the old or the
/// new binary, never a partial one.
pub fn install_binary(scratch: &Path, target: &Path, options: &CommandOptions) -> Result<()> {
    let staging = staging_path(target);
    let scratch_arg = scratch.to_string_lossy().into_owned();
    let staging_arg = staging.to_string_lossy().into_owned();
    let target_arg = target.to_string_lossy().into_owned();

    let staged = execute(
        "install",
        &["-m", "0755", scratch_arg.as_str(), staging_arg.as_str()],
        options,
    )?;
    if !staged.success {
        return Err(NevirallerError::filesystem(
            "stage",
            &staging,
            staged.stderr.trim(),
        ));
    }

    let moved = execute(
        "mv",
        &["-f", staging_arg.as_str(), target_arg.as_str()],
        options,
    )?;
    if !moved.success {
        if let Err(e) = execute("rm", &["-f", staging_arg.as_str()], options) {
            tracing::warn!("Could not remove {}: {}", staging.display(), e);
        }
        return Err(NevirallerError::filesystem(
            "replace",
            target,
            moved.stderr.trim(),
        ));
    }

    tracing::info!("Replaced {}", target.display());
    Ok(())
}
