//! Neovim Nightly: version lookup and binary replacement.
//!
//! - [`version`] - opaque version signatures
//! - [`remote`] - release page fetch and version extraction
//! - [`local`] - `--version` probe of the installed binary
//! - [`replace`] - download, `pkill`, staged per-target install
//! - [`reconcile`] - the compare / confirm / replace state machine

pub mod local;
pub mod reconcile;
pub mod remote;
pub mod replace;
pub mod version;

pub use reconcile::{
    reconcile, report_outcome, NightlyHost, ReconcileOutcome, SystemHost, TargetReport,
};
pub use replace::Termination;
pub use version::VersionSignature;
