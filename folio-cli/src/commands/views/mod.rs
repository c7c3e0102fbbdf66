use clap::Subcommand;

use crate::error::AppError;

mod get;
mod reset;

/// Available commands for the `views` subcommand
#[derive(Subcommand, Debug)]
pub enum Views {
    Get(get::Get),
    Reset(reset::Reset),
}

impl Views {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Views::Get(get) => get.run(),
            Views::Reset(reset) => reset.run(),
        }
    }
}
