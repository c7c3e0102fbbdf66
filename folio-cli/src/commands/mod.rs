use clap::Subcommand;

pub mod profile;
pub mod project;
mod tags;
pub mod views;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Tags(tags::Tags),
    #[command(about = "Manage the profile record")]
    Profile {
        #[clap(subcommand)]
        subcommand: profile::Profile,
    },
    #[command(about = "Manage portfolio projects")]
    Project {
        #[clap(subcommand)]
        subcommand: project::Project,
    },
    #[command(about = "Inspect and reset view counters")]
    Views {
        #[clap(subcommand)]
        subcommand: views::Views,
    },
}
