// src/main.rs
use std::process::ExitCode;

use clap::Parser;

use verstamp::args::Args;
use verstamp::config::RunPlan;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    let plan = RunPlan::from(args);

    match verstamp::run::run(&plan) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
