//! `tokenize`: print one line per token and one line per lexical error.

use std::io::Write;

use lox_lexer::ExitStatus;

/// Scan `source` and write the results.
///
/// Diagnostics go to `err` and tokens to `out`, each in scan order. The
/// returned status is `LexError` if any diagnostic was written.
pub fn tokenize(
    source: &[u8],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<ExitStatus> {
    let output = lox_lexer::scan(source);

    for error in &output.errors {
        writeln!(err, "{error}")?;
    }
    for token in &output.tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;
    err.flush()?;

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "tokenize finished"
    );
    Ok(output.exit_status())
}
