//! No-op installer backing `--dry-run`.

use crate::core::package_spec::PackageSpec;
use crate::install::{InstallError, Installer};
use crate::util::shell::{Shell, Status};

/// Installer that reports what would be installed and touches nothing.
///
/// Dry runs still exercise the real sequencing path, so ordering and
/// fail-fast behavior match a live run.
pub struct DryRunInstaller<'a> {
    shell: &'a Shell,
}

impl<'a> DryRunInstaller<'a> {
    pub fn new(shell: &'a Shell) -> Self {
        DryRunInstaller { shell }
    }
}

impl Installer for DryRunInstaller<'_> {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn install(&mut self, spec: &PackageSpec) -> Result<(), InstallError> {
        self.shell
            .status(Status::Info, format!("Would install {}", spec));
        Ok(())
    }
}
