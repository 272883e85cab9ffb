mod builder;
mod cli;
mod config;
mod error;
mod logging;
mod runner;
mod scaffold;
mod templates;
mod util;

use std::process::ExitCode;

fn main() -> ExitCode {
    let app = cli::parse();
    logging::init(app.verbose);
    match runner::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
