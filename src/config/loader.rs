//! Settings file discovery and loading.

use crate::config::schema::Settings;
use crate::error::{NevirallerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the user settings file: `~/.config/neviraller/config.yml` on
/// every platform.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("neviraller").join("config.yml"))
}

/// Load settings.
///
/// An explicit path must exist. Without one, the user settings file is read
/// when present; otherwise the built-in defaults apply.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    match user_settings_path() {
        Some(path) if path.exists() => load_settings_file(&path),
        _ => {
            tracing::debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load and parse a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| NevirallerError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| NevirallerError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_file_is_parsed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "binary_name: nvim-nightly\nfetch_timeout_secs: 5\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.binary_name, "nvim-nightly");
        assert_eq!(settings.fetch_timeout_secs, 5);
    }

    #[test]
    fn user_settings_live_under_dot_config() {
        if let Some(path) = user_settings_path() {
            assert!(path.ends_with(".config/neviraller/config.yml"));
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_settings(Some(Path::new("/nonexistent/neviraller.yml")));
        assert!(matches!(
            result,
            Err(NevirallerError::ConfigParse { .. })
        ));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let settings = parse_settings("   \n", Path::new("config.yml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let err = parse_settings("replacement_targets: [", Path::new("/etc/nv.yml")).unwrap_err();
        assert!(err.to_string().contains("/etc/nv.yml"));
    }

    #[test]
    fn targets_override_replaces_list() {
        let settings = parse_settings(
            "replacement_targets:\n  - /opt/bin/nvim\n",
            Path::new("config.yml"),
        )
        .unwrap();
        assert_eq!(settings.replacement_targets, vec![PathBuf::from("/opt/bin/nvim")]);
    }
}
