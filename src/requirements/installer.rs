//! Package installation through the system package manager.

use crate::error::{NevirallerError, Result};
use crate::shell::{execute, is_elevated, CommandOptions};

/// Installs one package at a time.
pub trait PackageInstaller {
    /// Run once before the first install of a pass.
    ///
    /// A failure here means no package should be attempted.
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Install a single package, blocking until the package manager exits.
    fn install(&self, package: &str) -> Result<()>;
}

/// `pacman -S --noconfirm <package>`, elevated.
#[derive(Debug, Clone)]
pub struct Pacman {
    program: String,
}

impl Pacman {
    /// Use the given package manager executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the package manager for `package`.
    pub fn install_args(package: &str) -> [&str; 3] {
        ["-S", "--noconfirm", package]
    }
}

impl Default for Pacman {
    fn default() -> Self {
        Self::new("pacman")
    }
}

impl PackageInstaller for Pacman {
    fn prepare(&self) -> Result<()> {
        ensure_privileges()
    }

    fn install(&self, package: &str) -> Result<()> {
        tracing::info!("Installing package '{}' with {}", package, self.program);
        let result = execute(
            &self.program,
            &Self::install_args(package),
            &CommandOptions::privileged(),
        )?;

        if result.success {
            tracing::debug!("Installed '{}' in {:?}", package, result.duration);
            Ok(())
        } else {
            Err(NevirallerError::Install {
                package: package.to_string(),
                code: result.exit_code,
                stderr: result.stderr.trim().to_string(),
            })
        }
    }
}

/// Refresh sudo credentials so later privileged calls do not stop to ask.
///
/// Does nothing when the process is already elevated.
pub fn ensure_privileges() -> Result<()> {
    if is_elevated() {
        return Ok(());
    }

    tracing::debug!("Validating sudo credentials");
    let result = execute(
        "sudo",
        &["-v"],
        &CommandOptions {
            capture_stderr: true,
            ..CommandOptions::default()
        },
    )?;

    if result.success {
        Ok(())
    } else {
        Err(NevirallerError::Install {
            package: "sudo -v".to_string(),
            code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        })
    }
}
