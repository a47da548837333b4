//! Stevedore CLI - a declarative package installation sequencer

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use stevedore::util::Shell;

/// Options shared by every command.
pub struct GlobalOptions {
    pub shell: Shell,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("stevedore=debug")
    } else {
        EnvFilter::new("stevedore=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let global = GlobalOptions {
        shell: Shell::from_flags(cli.quiet, cli.verbose, cli.color),
    };

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &global),
        Commands::Install(args) => commands::install::execute(args, &global),
        Commands::List(args) => commands::list::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
