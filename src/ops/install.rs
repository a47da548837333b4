//! Sequential dispatch of an install plan against an installer.

use tracing::{debug, error};

use crate::core::plan::InstallPlan;
use crate::install::{InstallError, Installer};

/// Summary of a completed install pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Number of install calls that completed.
    pub installed: usize,
}

/// Install every package in the plan, in declaration order.
///
/// Dispatch is a single linear pass: each call is issued only after the
/// previous one returned. The first failure stops the pass and propagates
/// unmodified; no retry, no rollback, no partial-success bookkeeping
/// beyond the count of calls already completed.
pub fn install_all(
    plan: &InstallPlan,
    installer: &mut dyn Installer,
) -> Result<InstallReport, InstallError> {
    let mut installed = 0;

    for spec in plan {
        debug!("dispatching `{}` to {}", spec, installer.name());
        if let Err(e) = installer.install(spec) {
            error!("failed to install `{}`", spec);
            return Err(e);
        }
        installed += 1;
    }

    Ok(InstallReport { installed })
}
