//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use stevedore::util::ColorChoice;

/// Stevedore - a declarative package installation sequencer
#[derive(Parser)]
#[command(name = "stevedore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Control colored output
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter Stevedore.toml
    Init(InitArgs),

    /// Install every package in the plan, in declaration order
    Install(InstallArgs),

    /// Print the parsed install plan
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct InstallArgs {
    /// Path to the manifest (defaults to searching upward for Stevedore.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Show what would be installed without running the installer
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Path to the manifest (defaults to searching upward for Stevedore.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
