use clap::Subcommand;

use crate::error::AppError;

mod add;
mod list;
mod remove;
mod update;
mod utils;
mod view;

/// Available commands for the `project` subcommand
#[derive(Subcommand, Debug)]
pub enum Project {
    Add(add::Add),
    Update(update::Update),
    Remove(remove::Remove),
    List(list::List),
    View(view::View),
}

impl Project {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Project::Add(add) => add.run(),
            Project::Update(update) => update.run(),
            Project::Remove(remove) => remove.run(),
            Project::List(list) => list.run(),
            Project::View(view) => view.run(),
        }
    }
}
