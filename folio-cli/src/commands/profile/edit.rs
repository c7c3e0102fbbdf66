use std::path::PathBuf;

use url::Url;

use data_portfolio::ProfilePatch;

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "edit", about = "Update fields of the stored profile")]
pub struct Edit {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(long, help = "Display name")]
    name: Option<String>,
    #[clap(long, help = "Professional title")]
    title: Option<String>,
    #[clap(long, help = "Short biography")]
    bio: Option<String>,
    #[clap(long, help = "Avatar image reference")]
    avatar: Option<String>,
    #[clap(long, help = "Location")]
    location: Option<String>,
    #[clap(long, help = "Contact email")]
    email: Option<String>,
    #[clap(long, help = "Personal website URL")]
    website: Option<String>,
    #[clap(long, help = "GitHub handle")]
    github: Option<String>,
    #[clap(long, help = "Twitter handle")]
    twitter: Option<String>,
    #[clap(long, help = "LinkedIn handle")]
    linkedin: Option<String>,
    #[clap(long, help = "Telegram handle")]
    telegram: Option<String>,
    #[clap(long, help = "Slack handle")]
    slack: Option<String>,
    #[clap(long, help = "Discord handle")]
    discord: Option<String>,
    #[clap(long, help = "JSON object with profile fields, flags win over it")]
    json: Option<String>,
}

impl Edit {
    pub fn run(&self) -> Result<(), AppError> {
        let mut patch = match &self.json {
            Some(json) => ProfilePatch::from_json(json).map_err(|_| {
                AppError::InvalidInput(
                    "JSON patch could not be parsed".to_owned(),
                )
            })?,
            None => ProfilePatch::default(),
        };
        self.overlay_flags(&mut patch);

        if let Some(website) = &patch.website {
            if !website.is_empty() && Url::parse(website).is_err() {
                return Err(AppError::InvalidUrl(
                    "website URL".to_owned(),
                    website.to_owned(),
                ));
            }
        }
        if let Some(email) = &patch.email {
            if !email.is_empty() && !email.contains('@') {
                return Err(AppError::InvalidInput(format!(
                    "Email {} has no '@'",
                    email
                )));
            }
        }

        if patch.is_empty() {
            println!("Provide at least one field to update");
            return Ok(());
        }

        let mut session = provide_session(&self.root_dir)?;
        session.profile_store_mut().update_profile(patch)?;

        println!("Profile updated");
        Ok(())
    }

    fn overlay_flags(&self, patch: &mut ProfilePatch) {
        let flags = [
            (&self.name, &mut patch.name),
            (&self.title, &mut patch.title),
            (&self.bio, &mut patch.bio),
            (&self.avatar, &mut patch.avatar),
            (&self.location, &mut patch.location),
            (&self.email, &mut patch.email),
            (&self.website, &mut patch.website),
            (&self.github, &mut patch.github),
            (&self.twitter, &mut patch.twitter),
            (&self.linkedin, &mut patch.linkedin),
            (&self.telegram, &mut patch.telegram),
            (&self.slack, &mut patch.slack),
            (&self.discord, &mut patch.discord),
        ];
        for (flag, field) in flags {
            if let Some(value) = flag {
                *field = Some(value.clone());
            }
        }
    }
}
