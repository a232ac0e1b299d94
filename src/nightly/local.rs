//! Version of the locally installed editor.

use crate::error::{NevirallerError, Result};
use crate::shell::execute_quiet;

use super::version::VersionSignature;

/// First non-blank line of `--version` output, stdout before stderr,
/// trailing whitespace removed.
pub fn first_line(stdout: &str, stderr: &str) -> Option<String> {
    stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim_end)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Run `<binary> --version` and take its first output line.
pub fn probe_local_version(binary: &str) -> Result<VersionSignature> {
    let result = execute_quiet(binary, &["--version"]).map_err(|e| NevirallerError::LocalProbe {
        binary: binary.to_string(),
        message: e.to_string(),
    })?;

    if !result.success {
        return Err(NevirallerError::LocalProbe {
            binary: binary.to_string(),
            message: format!(
                "exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            ),
        });
    }

    let line = first_line(&result.stdout, &result.stderr).ok_or_else(|| {
        NevirallerError::LocalProbe {
            binary: binary.to_string(),
            message: "no version output".to_string(),
        }
    })?;

    tracing::debug!("Local version: {}", line);
    Ok(VersionSignature::new(line))
}
