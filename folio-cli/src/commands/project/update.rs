use std::path::PathBuf;

use data_portfolio::{ProjectId, ProjectPatch};

use crate::{
    commands::project::utils::{
        parse_categories, parse_link, parse_technologies, require_text,
    },
    error::AppError,
    util::provide_session,
};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "update", about = "Update fields of a project")]
pub struct Update {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(help = "Identifier of the project")]
    id: Option<ProjectId>,
    #[clap(long, help = "Project title")]
    title: Option<String>,
    #[clap(long, help = "Short description")]
    description: Option<String>,
    #[clap(
        long = "category",
        help = "Replacement categories, can be repeated"
    )]
    categories: Vec<String>,
    #[clap(
        long = "technology",
        help = "Replacement technologies, can be repeated"
    )]
    technologies: Vec<String>,
    #[clap(long, help = "Image reference, a URL or an emoji")]
    image: Option<String>,
    #[clap(long, help = "Live demo URL")]
    demo_url: Option<String>,
    #[clap(long, help = "Source repository URL")]
    repo_url: Option<String>,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Drop the image")]
    clear_image: bool,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Drop the demo URL")]
    clear_demo_url: bool,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Drop the repository URL")]
    clear_repo_url: bool,
}

impl Update {
    pub fn run(&self) -> Result<(), AppError> {
        let id = self.id.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Project id was not provided".to_owned())
        })?;

        let patch = self.build_patch()?;
        if patch.is_empty() {
            println!("Provide at least one field to update");
            return Ok(());
        }

        let mut session = provide_session(&self.root_dir)?;
        session.profile_store_mut().update_project(id, patch)?;

        println!("Project {} updated", id);
        Ok(())
    }

    fn build_patch(&self) -> Result<ProjectPatch, AppError> {
        let mut patch = ProjectPatch::default();

        patch.title = self
            .title
            .as_deref()
            .map(|title| require_text("Title", title))
            .transpose()?;
        patch.description = self
            .description
            .as_deref()
            .map(|description| require_text("Description", description))
            .transpose()?;

        if !self.categories.is_empty() {
            patch.categories = Some(parse_categories(&self.categories)?);
        }
        if !self.technologies.is_empty() {
            patch.technologies = Some(parse_technologies(&self.technologies)?);
        }

        patch.image = field_change(
            "image",
            self.clear_image,
            self.image.clone(),
        )?;
        patch.demo_url = field_change(
            "demo URL",
            self.clear_demo_url,
            self.demo_url
                .as_deref()
                .map(|url| parse_link("demo URL", url))
                .transpose()?,
        )?;
        patch.repo_url = field_change(
            "repository URL",
            self.clear_repo_url,
            self.repo_url
                .as_deref()
                .map(|url| parse_link("repository URL", url))
                .transpose()?,
        )?;

        Ok(patch)
    }
}

/// Turn a clear flag and a replacement value into one field change.
fn field_change(
    field: &str,
    clear: bool,
    value: Option<String>,
) -> Result<Option<Option<String>>, AppError> {
    match (clear, value) {
        (true, Some(_)) => Err(AppError::InvalidInput(format!(
            "Cannot both set and clear the {}",
            field
        ))),
        (true, None) => Ok(Some(None)),
        (false, Some(value)) => Ok(Some(Some(value))),
        (false, None) => Ok(None),
    }
}
