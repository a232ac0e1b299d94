//! Command probe: is an executable resolvable on PATH?
//!
//! Lookups walk the PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use neviraller::requirements::probe::{CommandProbe, PathProbe};
//!
//! let probe = PathProbe::from_env();
//! if !probe.is_available("git") {
//!     println!("git is not installed");
//! }
//! ```

use std::path::{Path, PathBuf};

/// Answers whether a command can be resolved.
pub trait CommandProbe {
    /// Returns `true` if `command` is resolvable as an executable.
    fn is_available(&self, command: &str) -> bool;
}

/// Probe backed by a list of PATH directories.
#[derive(Debug, Clone)]
pub struct PathProbe {
    path_entries: Vec<PathBuf>,
}

impl PathProbe {
    /// Probe the current process PATH.
    pub fn from_env() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Probe an explicit list of directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Full path of `tool`, if found.
    pub fn locate(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path_entries)
    }
}

impl CommandProbe for PathProbe {
    fn is_available(&self, command: &str) -> bool {
        let found = self.locate(command);
        match &found {
            Some(path) => tracing::debug!("Probe: {} -> {}", command, path.display()),
            None => tracing::debug!("Probe: {} not found", command),
        }
        found.is_some()
    }
}

/// Names from `tools` that `probe` cannot resolve, in input order.
pub fn missing_tools(probe: &dyn CommandProbe, tools: &[&str]) -> Vec<String> {
    tools
        .iter()
        .filter(|tool| !probe.is_available(tool))
        .map(|tool| tool.to_string())
        .collect()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("rg"));
        create_fake_binary(&dir_b.join("rg"));

        let result = resolve_tool_path("rg", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("rg")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("rg", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("fd"));
        create_fake_binary(&dir_b.join("fd"));

        let result = resolve_tool_path("fd", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("fd")));
    }

    #[test]
    fn resolve_tool_path_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("git")).unwrap();

        assert!(resolve_tool_path("git", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_checks_mode_bits() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("exe");
        let plain = temp.path().join("plain");
        create_fake_binary(&exe);
        create_non_executable_file(&plain);

        assert!(is_executable(&exe));
        assert!(!is_executable(&plain));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    fn path_probe_uses_given_entries() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("curl"));

        let probe = PathProbe::with_path(vec![temp.path().to_path_buf()]);
        assert!(probe.is_available("curl"));
        assert!(!probe.is_available("wget"));
        assert_eq!(probe.locate("curl"), Some(temp.path().join("curl")));
    }

    #[test]
    fn missing_tools_keeps_input_order() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("mv"));

        let probe = PathProbe::with_path(vec![temp.path().to_path_buf()]);
        let missing = missing_tools(&probe, &["sudo", "mv", "pkill"]);
        assert_eq!(missing, vec!["sudo", "pkill"]);
    }
}
