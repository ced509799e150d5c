//! Command handlers for the `loxc` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

use std::io::ErrorKind;

use crate::CliError;

mod tokenize;

pub use tokenize::tokenize;

/// Read a whole source file into memory.
///
/// The bytes are returned as-is; invalid UTF-8 is the scanner's concern.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::NotFound {
            path: path.to_string(),
        },
        ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_string(),
        },
        _ => CliError::Read {
            path: path.to_string(),
            source: e,
        },
    })
}
