//! Installer fakes that record calls or fail on command.

use crate::core::package_spec::PackageSpec;
use crate::install::{InstallError, Installer};

/// Installer that records every identifier it is asked to install.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    log: Vec<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers received so far, in dispatch order.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Installer for RecordingInstaller {
    fn name(&self) -> &str {
        "recording"
    }

    fn install(&mut self, spec: &PackageSpec) -> Result<(), InstallError> {
        self.log.push(spec.to_string());
        Ok(())
    }
}

/// Installer that fails on a configured call position.
///
/// Every received call is recorded, including the failing one, so tests
/// can assert exactly which dispatches happened.
#[derive(Debug)]
pub struct FailingInstaller {
    fail_at: usize,
    log: Vec<String>,
}

impl FailingInstaller {
    /// Fail on the `fail_at`-th received call (zero-based).
    pub fn fail_at(fail_at: usize) -> Self {
        FailingInstaller {
            fail_at,
            log: Vec::new(),
        }
    }

    /// Identifiers received so far, in dispatch order.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Installer for FailingInstaller {
    fn name(&self) -> &str {
        "failing"
    }

    fn install(&mut self, spec: &PackageSpec) -> Result<(), InstallError> {
        self.log.push(spec.to_string());

        if self.log.len() - 1 == self.fail_at {
            return Err(InstallError::Failed {
                package: spec.to_string(),
                command: format!("fake install {}", spec),
                code: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }

        Ok(())
    }
}
