use std::path::PathBuf;

use data_portfolio::ProjectId;

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Remove a project from the portfolio")]
pub struct Remove {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(help = "Identifier of the project")]
    id: Option<ProjectId>,
}

impl Remove {
    pub fn run(&self) -> Result<(), AppError> {
        let id = self.id.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Project id was not provided".to_owned())
        })?;

        let mut session = provide_session(&self.root_dir)?;
        let removed = session.profile_store_mut().remove_project(id)?;

        println!("Project {} ({}) removed", id, removed.title);
        Ok(())
    }
}
