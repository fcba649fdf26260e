mod cli;
mod error;
mod fetch;
mod render;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
