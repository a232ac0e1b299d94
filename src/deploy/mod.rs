//! Configuration deployment.
//!
//! Clones the configuration repository to a scratch directory and copies it
//! to the destination under the home directory, asking what to do with an
//! existing destination first.

pub mod conflict;
pub mod deployer;

pub use conflict::{resolve_conflict, DirectoryConflict, Resolution};
pub use deployer::{copy_dir_all, DeployOutcome, Deployer, GitCli, RepoCloner};
