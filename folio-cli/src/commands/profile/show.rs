use std::path::PathBuf;

use data_error::FolioError;

use crate::{
    error::AppError, models::format::Format, util::provide_session,
};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show the stored profile")]
pub struct Show {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(short, long, default_value = "plain", help = "Output format")]
    format: Format,
}

impl Show {
    pub fn run(&self) -> Result<(), AppError> {
        let session = provide_session(&self.root_dir)?;
        let profile = session.profile_store().profile();

        match self.format {
            Format::Json => {
                let output = serde_json::to_string_pretty(profile)
                    .map_err(FolioError::from)?;
                println!("{}", output);
            }
            Format::Plain => {
                println!("Name:     {}", profile.name);
                println!("Title:    {}", profile.title);
                println!("Bio:      {}", profile.bio);

                let contacts = [
                    ("Location", &profile.location),
                    ("Email", &profile.email),
                    ("Website", &profile.website),
                    ("GitHub", &profile.github),
                    ("Twitter", &profile.twitter),
                    ("LinkedIn", &profile.linkedin),
                    ("Telegram", &profile.telegram),
                    ("Slack", &profile.slack),
                    ("Discord", &profile.discord),
                ];
                for (field, value) in contacts {
                    if !value.is_empty() {
                        println!("{}: {}", field, value);
                    }
                }

                println!("Skills:   {}", profile.skills.join(", "));
                println!("Projects: {}", profile.projects.len());
            }
        }

        Ok(())
    }
}
