//! Dependency resolution and installation of missing entries.
//!
//! Resolution returns a fresh snapshot per call; nothing is shared between
//! passes.

use crate::error::{NevirallerError, Result};
use crate::requirements::catalog::Dependency;
use crate::requirements::installer::PackageInstaller;
use crate::requirements::probe::CommandProbe;
use crate::ui::{InstallerTheme, Table};

/// A dependency whose installation failed, with the reason.
#[derive(Debug)]
pub struct InstallFailure {
    /// The dependency that is still missing.
    pub dependency: Dependency,
    /// Why the package manager failed.
    pub error: NevirallerError,
}

/// Probe every catalog entry.
///
/// All entries are probed regardless of earlier results, and the snapshot
/// keeps catalog order.
pub fn resolve(catalog: &[Dependency], probe: &dyn CommandProbe) -> Vec<Dependency> {
    catalog
        .iter()
        .map(|dep| Dependency {
            present: probe.is_available(&dep.probe_command),
            ..dep.clone()
        })
        .collect()
}

/// Entries of a snapshot that were not found.
pub fn missing(deps: &[Dependency]) -> Vec<&Dependency> {
    deps.iter().filter(|d| !d.present).collect()
}

/// Install every absent entry, one package at a time.
///
/// An individual failure does not stop the loop; every failure is returned.
/// A failed [`PackageInstaller::prepare`] aborts before any package is
/// attempted.
pub fn install_missing(
    deps: &[Dependency],
    installer: &dyn PackageInstaller,
) -> Result<Vec<InstallFailure>> {
    let absent = missing(deps);
    if absent.is_empty() {
        return Ok(Vec::new());
    }

    installer.prepare()?;

    let mut failures = Vec::new();
    for dep in absent {
        if let Err(error) = installer.install(&dep.name) {
            tracing::warn!("Installing '{}' failed: {}", dep.name, error);
            failures.push(InstallFailure {
                dependency: dep.clone(),
                error,
            });
        }
    }
    Ok(failures)
}

/// Footer under the presence table.
pub fn summary_line(deps: &[Dependency]) -> String {
    let absent = missing(deps).len();
    if absent == 0 {
        "All dependencies are present".to_string()
    } else {
        format!("{} out of {} is missing", absent, deps.len())
    }
}

/// Presence table: status icon, name, command, required-by.
pub fn presence_table(deps: &[Dependency], theme: &InstallerTheme) -> Table {
    let mut table = Table::new(vec!["", "Name", "Command", "Required by"]);
    for dep in deps {
        let icon = theme.presence_icon(dep.present);
        table.add_row(vec![
            icon.as_str(),
            dep.name.as_str(),
            dep.probe_command.as_str(),
            dep.required_by.as_str(),
        ]);
    }
    table.set_footer(&summary_line(deps));
    table
}
