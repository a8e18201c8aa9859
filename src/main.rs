//! Binary entrypoint for the `taskwiz` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    taskwiz::init_logging();
    match taskwiz::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
