mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
