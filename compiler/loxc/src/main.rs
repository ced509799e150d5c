//! Lox scanner CLI.

use std::process::ExitCode;

use loxc::CliError;

fn main() -> ExitCode {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let result = loxc::run(
        &args,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    match result {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(CliError::EXIT_CODE)
        }
    }
}
