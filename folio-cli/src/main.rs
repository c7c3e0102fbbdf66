mod cli;
mod commands;
mod error;
mod models;
mod util;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Tags(tags) => tags.run(),
        Commands::Profile { subcommand } => subcommand.run(),
        Commands::Project { subcommand } => subcommand.run(),
        Commands::Views { subcommand } => subcommand.run(),
    }
}
