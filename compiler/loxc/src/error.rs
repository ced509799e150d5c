//! Driver-level failures. Each one ends the process with exit code 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: loxc tokenize <filename>")]
    Usage,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing token or diagnostic output failed (e.g. a closed pipe).
    #[error("error writing output: {0}")]
    Write(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for driver failures.
    pub const EXIT_CODE: u8 = 1;
}
