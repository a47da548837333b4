//! `stevedore init` command

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use crate::GlobalOptions;
use stevedore::ops::init_manifest;
use stevedore::util::Status;

pub fn execute(args: InitArgs, global: &GlobalOptions) -> Result<()> {
    let dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let path = init_manifest(&dir)?;
    global.shell.status(Status::Created, path.display());

    Ok(())
}
