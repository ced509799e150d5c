//! `loxc`: command-line driver for the Lox scanner.
//!
//! ```text
//! loxc tokenize <filename>
//! ```
//!
//! Tokens are written to stdout and lexical errors to stderr. The exit code
//! is 0 on success, 65 if any lexical error occurred, and 1 for driver
//! failures (bad usage, unreadable file).
//!
//! # Tracing
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=lox_lexer=debug`) to enable tracing output
//! on stderr. Without it no subscriber is installed.

pub mod commands;
mod error;

use std::io::Write;
use std::sync::Once;

pub use error::CliError;
use lox_lexer::ExitStatus;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, and always writes to stderr so stdout stays the token stream.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run the CLI with `args` (including the program name at index 0).
pub fn run(
    args: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitStatus, CliError> {
    let Some(command) = args.get(1) else {
        return Err(CliError::Usage);
    };

    match command.as_str() {
        "tokenize" => {
            let Some(path) = args.get(2) else {
                return Err(CliError::Usage);
            };
            tracing::debug!(%path, "tokenizing file");
            let source = commands::read_file(path)?;
            Ok(commands::tokenize(&source, out, err)?)
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}
