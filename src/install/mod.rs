//! Installer capability - the boundary that performs package installs.
//!
//! The sequencer never touches the environment itself; it only issues
//! ordered calls against an [`Installer`]. Backends decide how a package
//! actually gets installed.

pub mod dry_run;
pub mod error;
pub mod pip;

pub use dry_run::DryRunInstaller;
pub use error::InstallError;
pub use pip::PipInstaller;

use crate::core::package_spec::PackageSpec;

/// A capability that installs packages.
pub trait Installer {
    /// Get the installer name for display.
    fn name(&self) -> &str;

    /// Install a single package.
    fn install(&mut self, spec: &PackageSpec) -> Result<(), InstallError>;
}
