use clap::Subcommand;

use crate::error::AppError;

mod edit;
mod show;
mod skills;

/// Available commands for the `profile` subcommand
#[derive(Subcommand, Debug)]
pub enum Profile {
    Show(show::Show),
    Edit(edit::Edit),
    Skills(skills::Skills),
}

impl Profile {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Profile::Show(show) => show.run(),
            Profile::Edit(edit) => edit.run(),
            Profile::Skills(skills) => skills.run(),
        }
    }
}
