//! Installation error types.

use std::io;

use thiserror::Error;

/// Error raised by an installer backend.
///
/// Failures propagate unmodified to the caller of the sequencer; nothing
/// retries or rolls back on its behalf.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("installer `{program}` not found on PATH")]
    ProgramNotFound { program: String },

    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with exit code {code:?} while installing `{package}`\n{stderr}")]
    Failed {
        package: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}
