//! Centralized shell output for the CLI.
//!
//! All human-facing status lines go through Shell, so commands never
//! format, align, or color anything themselves. Status output goes to
//! stderr; stdout is reserved for machine-readable listings.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::str::FromStr;
use std::time::Duration;

use indicatif::ProgressBar;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    /// Default: status messages + spinners
    #[default]
    Normal,
    /// --verbose: immediate status lines, no spinners
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
///
/// Shell handles all formatting - callers just specify the semantic status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Created,
    Installed,
    Finished,

    // In-progress statuses (cyan)
    Installing,

    // Info statuses (blue)
    Info,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Installed => "Installed",
            Status::Finished => "Finished",
            Status::Installing => "Installing",
            Status::Info => "Info",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            // Success: bold green
            Status::Created | Status::Installed | Status::Finished => "\x1b[1;32m",
            // In-progress: bold cyan
            Status::Installing => "\x1b[1;36m",
            // Info: bold blue
            Status::Info => "\x1b[1;34m",
            // Error: bold red
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Shell::new(verbosity, color)
    }

    /// Check if shell is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Check if shell is in verbose mode.
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Check if colors are enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status line.
    ///
    /// Format: `{status:>12} {message}`. Suppressed in quiet mode unless
    /// the status is an error.
    pub fn status(&self, status: Status, message: impl Display) {
        if self.is_quiet() && status != Status::Error {
            return;
        }

        let header = status.as_str();
        if self.use_color {
            eprintln!("{}{:>12}\x1b[0m {}", status.color_code(), header, message);
        } else {
            eprintln!("{:>12} {}", header, message);
        }
    }

    /// Print an error message.
    pub fn error(&self, message: impl Display) {
        self.status(Status::Error, message);
    }

    /// Start a spinner for long-running subprocess work.
    ///
    /// Returns None when spinners would garble output: quiet or verbose
    /// mode, or stderr not a terminal.
    pub fn spinner(&self, message: impl Into<String>) -> Option<ProgressBar> {
        if self.verbosity != Verbosity::Normal || !io::stderr().is_terminal() {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}
