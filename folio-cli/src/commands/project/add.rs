use std::path::PathBuf;

use data_portfolio::Project;

use crate::{
    commands::project::utils::{
        parse_categories, parse_link, parse_technologies, require_text,
    },
    error::AppError,
    util::provide_session,
};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a project to the portfolio")]
pub struct Add {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(long, help = "Project title")]
    title: Option<String>,
    #[clap(long, help = "Short description")]
    description: Option<String>,
    #[clap(
        long = "category",
        help = "Category from the published vocabulary, can be repeated"
    )]
    categories: Vec<String>,
    #[clap(
        long = "technology",
        help = "Technology from the published vocabulary, can be repeated"
    )]
    technologies: Vec<String>,
    #[clap(long, help = "Image reference, a URL or an emoji")]
    image: Option<String>,
    #[clap(long, help = "Live demo URL")]
    demo_url: Option<String>,
    #[clap(long, help = "Source repository URL")]
    repo_url: Option<String>,
}

impl Add {
    pub fn run(&self) -> Result<(), AppError> {
        let title = self.title.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Title was not provided".to_owned())
        })?;
        let description = self.description.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Description was not provided".to_owned())
        })?;

        if self.categories.is_empty() {
            return Err(AppError::InvalidInput(
                "Provide at least one category".to_owned(),
            ));
        }
        if self.technologies.is_empty() {
            return Err(AppError::InvalidInput(
                "Provide at least one technology".to_owned(),
            ));
        }

        let mut project = Project::new(
            require_text("Title", title)?,
            require_text("Description", description)?,
        );
        project.categories = parse_categories(&self.categories)?;
        project.technologies = parse_technologies(&self.technologies)?;
        project.image = self.image.clone();
        project.demo_url = self
            .demo_url
            .as_deref()
            .map(|url| parse_link("demo URL", url))
            .transpose()?;
        project.repo_url = self
            .repo_url
            .as_deref()
            .map(|url| parse_link("repository URL", url))
            .transpose()?;

        let id = project.id.clone();

        let mut session = provide_session(&self.root_dir)?;
        session.profile_store_mut().add_project(project)?;

        println!("Project {} added", id);
        Ok(())
    }
}
