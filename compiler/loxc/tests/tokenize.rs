// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `tokenize` command.
//!
//! Output is captured in in-memory buffers so stdout and stderr can be
//! checked separately.

use std::io::Write as _;

use lox_lexer::ExitStatus;
use loxc::commands::tokenize;
use loxc::{run, CliError};
use pretty_assertions::assert_eq;

struct Captured {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

fn tokenize_str(source: &str) -> Captured {
    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();
    let status = tokenize(source.as_bytes(), &mut out, &mut err).unwrap();
    Captured {
        status,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn args(rest: &[&str]) -> Vec<String> {
    std::iter::once("loxc")
        .chain(rest.iter().copied())
        .map(String::from)
        .collect()
}

// === tokenize ===

#[test]
fn empty_file() {
    let c = tokenize_str("");
    assert_eq!(c.stdout, "EOF  null\n");
    assert_eq!(c.stderr, "");
    assert_eq!(c.status.code(), 0);
}

#[test]
fn parentheses() {
    let c = tokenize_str("(()");
    assert_eq!(
        c.stdout,
        "LEFT_PAREN ( null\nLEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n"
    );
    assert_eq!(c.status, ExitStatus::Success);
}

#[test]
fn lexical_errors_go_to_stderr() {
    let c = tokenize_str(",.$(#");
    assert_eq!(
        c.stdout,
        "COMMA , null\nDOT . null\nLEFT_PAREN ( null\nEOF  null\n"
    );
    assert_eq!(
        c.stderr,
        "[line 1] Error: Unexpected character: $\n[line 1] Error: Unexpected character: #\n"
    );
    assert_eq!(c.status.code(), 65);
}

#[test]
fn unterminated_string() {
    let c = tokenize_str("\"bar\" \"unterminated");
    assert_eq!(c.stdout, "STRING \"bar\" bar\nEOF  null\n");
    assert_eq!(c.stderr, "[line 1] Error: Unterminated string.\n");
    assert_eq!(c.status, ExitStatus::LexError);
}

#[test]
fn numbers() {
    let c = tokenize_str("42 1234.1234 200.00 0.0");
    assert_eq!(
        c.stdout,
        "NUMBER 42 42.0\nNUMBER 1234.1234 1234.1234\nNUMBER 200.00 200.0\nNUMBER 0.0 0.0\nEOF  null\n"
    );
}

#[test]
fn multiline_program_with_errors() {
    let c = tokenize_str("// header\nvar x = 1;\n@\nprint x;\n");
    assert_eq!(
        c.stdout,
        "VAR var null\nIDENTIFIER x null\nEQUAL = null\nNUMBER 1 1.0\nSEMICOLON ; null\n\
         PRINT print null\nIDENTIFIER x null\nSEMICOLON ; null\nEOF  null\n"
    );
    assert_eq!(c.stderr, "[line 3] Error: Unexpected character: @\n");
    assert_eq!(c.status.code(), 65);
}

#[test]
fn repeated_runs_are_identical() {
    let source = "fun add(a, b) { return a + b; } \"x\n@";
    let first = tokenize_str(source);
    let second = tokenize_str(source);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
    assert_eq!(first.status, second.status);
}

// === run ===

#[test]
fn run_tokenizes_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(1 <= 2)").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();
    let status = run(&args(&["tokenize", &path]), &mut out, &mut err).unwrap();

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "LEFT_PAREN ( null\nNUMBER 1 1.0\nLESS_EQUAL <= null\nNUMBER 2 2.0\nRIGHT_PAREN ) null\nEOF  null\n"
    );
    assert!(err.is_empty());
}

#[test]
fn run_reports_lex_error_status() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\"open\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();
    let status = run(&args(&["tokenize", &path]), &mut out, &mut err).unwrap();

    assert_eq!(status.code(), 65);
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "[line 1] Error: Unterminated string.\n"
    );
}

#[test]
fn run_without_command_is_usage_error() {
    let result = run(&args(&[]), &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
    assert!(matches!(result, Err(CliError::Usage)));
}

#[test]
fn run_without_file_is_usage_error() {
    let result = run(&args(&["tokenize"]), &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
    assert!(matches!(result, Err(CliError::Usage)));
}

#[test]
fn run_rejects_unknown_command() {
    let result = run(&args(&["parse", "x.lox"]), &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
    match result {
        Err(e @ CliError::UnknownCommand(_)) => {
            assert_eq!(e.to_string(), "Unknown command: parse");
        }
        other => panic!("expected UnknownCommand, got {other:?}"),
    }
}

#[test]
fn run_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lox");
    let path = path.to_str().unwrap().to_string();

    let result = run(&args(&["tokenize", &path]), &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
    match result {
        Err(e @ CliError::NotFound { .. }) => {
            assert_eq!(e.to_string(), format!("cannot find file '{path}'"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(CliError::EXIT_CODE, 1);
}
