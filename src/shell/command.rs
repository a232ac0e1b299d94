//! External process execution.
//!
//! Every external tool is invoked directly (no intermediate shell) and
//! blocks until it exits; the exit status and captured stderr are the only
//! feedback channel.

use crate::error::{NevirallerError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::is_elevated;

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,

    /// Run through `sudo` unless the process is already elevated.
    pub privileged: bool,
}

impl CommandOptions {
    /// Capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            privileged: false,
        }
    }

    /// Run elevated, showing stdout live and capturing stderr for reporting.
    pub fn privileged() -> Self {
        Self {
            capture_stdout: false,
            capture_stderr: true,
            privileged: true,
        }
    }
}

/// Build the argv actually executed, prefixing `sudo` when required.
pub fn command_line(program: &str, args: &[&str], options: &CommandOptions) -> Vec<String> {
    let mut argv = Vec::with_capacity(args.len() + 2);
    if options.privileged && !is_elevated() {
        argv.push("sudo".to_string());
    }
    argv.push(program.to_string());
    argv.extend(args.iter().map(|a| a.to_string()));
    argv
}

/// Execute a program and wait for it to exit.
///
/// A program that cannot be spawned at all is an `Io` error; a program that
/// runs and exits non-zero is reported through [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let argv = command_line(program, args, options);

    tracing::debug!("Executing: {}", argv.join(" "));

    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]);
    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| {
        NevirallerError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to run '{}': {}", argv[0], e),
        ))
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        argv[0],
        output.status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Execute a program with both streams captured.
pub fn execute_quiet(program: &str, args: &[&str]) -> Result<CommandResult> {
    execute(program, args, &CommandOptions::captured())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprivileged_command_line_is_unchanged() {
        let argv = command_line("git", &["clone", "--depth", "1"], &CommandOptions::captured());
        assert_eq!(argv, vec!["git", "clone", "--depth", "1"]);
    }

    #[test]
    fn privileged_command_line_uses_sudo_when_not_root() {
        let argv = command_line("pacman", &["-S", "git"], &CommandOptions::privileged());
        if is_elevated() {
            assert_eq!(argv[0], "pacman");
        } else {
            assert_eq!(argv, vec!["sudo", "pacman", "-S", "git"]);
        }
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let result = execute_quiet("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_non_zero_exit() {
        let result = execute_quiet("sh", &["-c", "echo oops >&2; exit 3"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stderr.trim(), "oops");
    }

    #[test]
    fn missing_program_is_io_error() {
        let result = execute_quiet("definitely-not-a-real-program-xyz", &[]);
        assert!(matches!(result, Err(NevirallerError::Io(_))));
    }
}
