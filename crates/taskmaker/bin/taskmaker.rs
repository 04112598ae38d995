//! taskmaker command-line tool

use std::io;
use std::process::ExitCode;

use clap::Parser;
use taskmaker::{Args, logging, run};

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_logging(args.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
