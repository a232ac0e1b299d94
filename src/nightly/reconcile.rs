//! Version reconciliation: compare local and remote nightly, replace on consent.
//!
//! Every side effect goes through [`NightlyHost`], so the state machine can
//! be driven by a scripted host in tests. The only suspension point is the
//! confirmation prompt, which is shown before anything is mutated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{NevirallerError, Result};
use crate::requirements::probe::{missing_tools, CommandProbe};
use crate::shell::{is_elevated, CommandOptions};
use crate::ui::{confirm, UserInterface};

use super::local::probe_local_version;
use super::remote::ReleasePage;
use super::replace::{download, install_binary, terminate, Termination};
use super::version::VersionSignature;

/// Prompt key for the update confirmation.
pub const CONFIRM_KEY: &str = "update_nightly";

/// Side effects of a reconciliation.
pub trait NightlyHost {
    /// Version advertised by the release page.
    fn remote_version(&self) -> Result<VersionSignature>;

    /// Version of the installed binary.
    fn local_version(&self) -> Result<VersionSignature>;

    /// Download the new binary to the scratch file.
    fn download(&self) -> Result<()>;

    /// Stop running instances of the old binary.
    fn terminate(&self) -> Termination;

    /// Install the scratch file at one target.
    fn install_target(&self, target: &Path) -> Result<()>;

    /// Remove the scratch file.
    fn discard_scratch(&self);
}

/// What happened at one replacement target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// The target path.
    pub target: PathBuf,
    /// `None` when replaced, otherwise the failure message.
    pub error: Option<String>,
}

impl TargetReport {
    /// Whether the target now holds the new binary.
    pub fn replaced(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of [`reconcile`].
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// Local and remote signatures are identical.
    AlreadyCurrent(VersionSignature),
    /// Every target now holds the new binary.
    Updated {
        from: VersionSignature,
        to: VersionSignature,
        targets: Vec<TargetReport>,
    },
    /// The user said no; nothing was touched.
    DeclinedByUser,
    /// The release page carried no version token; nothing was touched.
    RemoteUnknown,
    /// Something failed. `targets` lists the replacement attempts made, if any.
    Failed {
        reason: NevirallerError,
        targets: Vec<TargetReport>,
    },
}

impl ReconcileOutcome {
    fn failed(reason: NevirallerError) -> Self {
        Self::Failed {
            reason,
            targets: Vec::new(),
        }
    }

    /// Whether the outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Tools the replacement shells out to.
pub fn reconcile_tools(elevated: bool) -> Vec<&'static str> {
    let mut tools = vec!["pkill", "install", "mv"];
    if !elevated {
        tools.insert(0, "sudo");
    }
    tools
}

/// Bring the installed binary in line with the remote nightly.
pub fn reconcile(
    host: &dyn NightlyHost,
    probe: &dyn CommandProbe,
    ui: &mut dyn UserInterface,
    targets: &[PathBuf],
) -> ReconcileOutcome {
    let missing = missing_tools(probe, &reconcile_tools(is_elevated()));
    if !missing.is_empty() {
        return ReconcileOutcome::failed(NevirallerError::ProbeUnavailable { tools: missing });
    }

    let remote = match host.remote_version() {
        Ok(v) => v,
        Err(e) => return ReconcileOutcome::failed(e),
    };
    if remote.is_unknown() {
        return ReconcileOutcome::RemoteUnknown;
    }

    let local = match host.local_version() {
        Ok(v) => v,
        Err(e) => return ReconcileOutcome::failed(e),
    };
    if local == remote {
        return ReconcileOutcome::AlreadyCurrent(local);
    }

    ui.message("New Neovim Nightly version found!");
    ui.message(&format!("{} -> {}", local, remote));
    if !confirm(ui, CONFIRM_KEY, "Do you wish to update neovim?") {
        return ReconcileOutcome::DeclinedByUser;
    }

    let mut spinner = ui.start_spinner("Downloading Neovim Nightly...");
    if let Err(e) = host.download() {
        spinner.finish_error("Download failed");
        return ReconcileOutcome::failed(e);
    }
    spinner.finish_success("Downloaded Neovim Nightly");

    if let Termination::Failed(reason) = host.terminate() {
        ui.warning(&format!("Could not stop running editors: {}", reason));
    }

    let reports: Vec<TargetReport> = targets
        .iter()
        .map(|target| TargetReport {
            target: target.clone(),
            error: host.install_target(target).err().map(|e| e.to_string()),
        })
        .collect();
    host.discard_scratch();

    let first_failure = reports
        .iter()
        .find_map(|r| r.error.as_ref().map(|e| (r.target.clone(), e.clone())));

    match first_failure {
        None => ReconcileOutcome::Updated {
            from: local,
            to: remote,
            targets: reports,
        },
        Some((path, message)) => ReconcileOutcome::Failed {
            reason: NevirallerError::Filesystem {
                action: "replace".to_string(),
                path,
                message,
            },
            targets: reports,
        },
    }
}

/// Report an outcome to the user.
pub fn report_outcome(ui: &mut dyn UserInterface, outcome: &ReconcileOutcome) {
    match outcome {
        ReconcileOutcome::AlreadyCurrent(version) => {
            ui.success(&format!("You already have the latest version: {}", version));
        }
        ReconcileOutcome::Updated { to, .. } => {
            ui.success(&format!("Neovim Nightly has been updated to {}", to));
        }
        ReconcileOutcome::DeclinedByUser => ui.message("Update cancelled."),
        ReconcileOutcome::RemoteUnknown => {
            ui.warning("Could not determine the latest nightly version; nothing was changed.");
        }
        ReconcileOutcome::Failed { reason, targets } => {
            ui.error(&reason.to_string());
            for report in targets {
                match &report.error {
                    None => ui.message(&format!("  replaced: {}", report.target.display())),
                    Some(e) => ui.message(&format!("  failed:   {} ({})", report.target.display(), e)),
                }
            }
        }
    }
}

/// Host backed by the network, `pkill`, and the real filesystem.
pub struct SystemHost<'a> {
    settings: &'a Settings,
}

impl<'a> SystemHost<'a> {
    /// Create a host for the given settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl NightlyHost for SystemHost<'_> {
    fn remote_version(&self) -> Result<VersionSignature> {
        ReleasePage::new(&self.settings.release_page_url, self.settings.fetch_timeout())?
            .fetch_version()
    }

    fn local_version(&self) -> Result<VersionSignature> {
        probe_local_version(&self.settings.binary_name)
    }

    fn download(&self) -> Result<()> {
        download(&self.settings.binary_url, &self.settings.scratch_binary).map(|_| ())
    }

    fn terminate(&self) -> Termination {
        terminate(&self.settings.binary_name)
    }

    fn install_target(&self, target: &Path) -> Result<()> {
        install_binary(
            &self.settings.scratch_binary,
            target,
            &CommandOptions::privileged(),
        )
    }

    fn discard_scratch(&self) {
        let scratch = &self.settings.scratch_binary;
        if let Err(e) = fs::remove_file(scratch) {
            tracing::warn!("Could not remove {}: {}", scratch.display(), e);
        }
    }
}
