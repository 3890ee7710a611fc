// src/main.rs

use std::process::ExitCode;

use loadconfig::{cli, logging, run};

fn main() -> ExitCode {
    match run_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("loadconfig error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run_main() -> anyhow::Result<ExitCode> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
