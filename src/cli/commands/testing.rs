//! Recording fakes shared by command tests.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Settings;
use crate::deploy::RepoCloner;
use crate::error::{NevirallerError, Result};
use crate::nightly::{NightlyHost, Termination, VersionSignature};
use crate::requirements::{CommandProbe, PackageInstaller};

use super::dispatcher::Backends;

pub const CURRENT: &str = "NVIM v0.11.0-dev-abc1234";
pub const OLDER: &str = "NVIM v0.11.0-dev-0000000";

/// Everything on PATH except the listed commands.
#[derive(Default)]
pub struct FakeProbe {
    pub missing: Vec<String>,
}

impl CommandProbe for FakeProbe {
    fn is_available(&self, command: &str) -> bool {
        !self.missing.iter().any(|m| m == command)
    }
}

#[derive(Default)]
pub struct RecordingInstaller {
    pub failing: Vec<String>,
    pub installed: RefCell<Vec<String>>,
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, package: &str) -> Result<()> {
        self.installed.borrow_mut().push(package.to_string());
        if self.failing.iter().any(|f| f == package) {
            return Err(NevirallerError::Install {
                package: package.to_string(),
                code: Some(1),
                stderr: "target not found".to_string(),
            });
        }
        Ok(())
    }
}

pub struct ScriptedHost {
    pub remote: Option<&'static str>,
    pub local: &'static str,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedHost {
    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl NightlyHost for ScriptedHost {
    fn remote_version(&self) -> Result<VersionSignature> {
        self.record("remote");
        self.remote
            .map(VersionSignature::new)
            .ok_or_else(|| NevirallerError::Fetch {
                url: "http://release".to_string(),
                message: "timed out after 10s".to_string(),
            })
    }

    fn local_version(&self) -> Result<VersionSignature> {
        self.record("local");
        Ok(VersionSignature::new(self.local))
    }

    fn download(&self) -> Result<()> {
        self.record("download");
        Ok(())
    }

    fn terminate(&self) -> Termination {
        self.record("terminate");
        Termination::NotRunning
    }

    fn install_target(&self, target: &Path) -> Result<()> {
        self.record(&format!("install {}", target.display()));
        Ok(())
    }

    fn discard_scratch(&self) {
        self.record("discard");
    }
}

/// Writes a one-file configuration tree instead of cloning.
#[derive(Default)]
pub struct WritingCloner {
    pub fail: bool,
}

impl RepoCloner for WritingCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        if self.fail {
            return Err(NevirallerError::Clone {
                url: url.to_string(),
                message: "repository not found".to_string(),
            });
        }
        fs::create_dir_all(dest)?;
        fs::write(dest.join("init.lua"), "require('core')")?;
        Ok(())
    }
}

/// Fakes plus a temporary home, ready to hand out [`Backends`].
pub struct Harness {
    pub temp: TempDir,
    pub settings: Settings,
    pub probe: FakeProbe,
    pub installer: RecordingInstaller,
    pub host: ScriptedHost,
    pub cloner: WritingCloner,
}

impl Harness {
    /// Everything present, nightly up to date, clone succeeds.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            scratch_binary: temp.path().join("nvim-scratch"),
            scratch_clone_dir: temp.path().join("clone"),
            ..Settings::default()
        };
        Self {
            temp,
            settings,
            probe: FakeProbe::default(),
            installer: RecordingInstaller::default(),
            host: ScriptedHost {
                remote: Some(CURRENT),
                local: CURRENT,
                calls: RefCell::new(Vec::new()),
            },
            cloner: WritingCloner::default(),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    pub fn destination(&self) -> PathBuf {
        self.settings.destination_in(&self.home())
    }

    pub fn host_calls(&self) -> Vec<String> {
        self.host.calls.borrow().clone()
    }

    pub fn backends(&self) -> Backends<'_> {
        Backends {
            settings: &self.settings,
            probe: &self.probe,
            installer: &self.installer,
            host: &self.host,
            cloner: &self.cloner,
            home: Some(self.home()),
        }
    }
}
