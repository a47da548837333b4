//! `stevedore install` command

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::cli::InstallArgs;
use crate::GlobalOptions;
use stevedore::core::manifest::{find_manifest, Manifest};
use stevedore::install::{DryRunInstaller, PipInstaller};
use stevedore::ops::install_all;
use stevedore::util::Status;

pub fn execute(args: InstallArgs, global: &GlobalOptions) -> Result<()> {
    let shell = &global.shell;

    let manifest_path = resolve_manifest_path(args.manifest)?;
    let manifest = Manifest::load(&manifest_path)?;

    if manifest.plan.is_empty() {
        shell.status(Status::Finished, "nothing to install");
        return Ok(());
    }

    let started = Instant::now();
    let report = if args.dry_run {
        let mut installer = DryRunInstaller::new(shell);
        install_all(&manifest.plan, &mut installer)?
    } else {
        let mut installer = PipInstaller::from_config(&manifest.installer, shell)?;
        install_all(&manifest.plan, &mut installer)?
    };

    if args.dry_run {
        shell.status(
            Status::Finished,
            format!("{} package(s) planned", report.installed),
        );
    } else {
        shell.status(
            Status::Finished,
            format!(
                "{} package(s) in {:.2}s",
                report.installed,
                started.elapsed().as_secs_f64()
            ),
        );
    }

    Ok(())
}

/// Use the explicit manifest path, or search upward from the current
/// directory.
pub fn resolve_manifest_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => {
            let cwd = std::env::current_dir().context("failed to get current directory")?;
            Ok(find_manifest(&cwd)?)
        }
    }
}
