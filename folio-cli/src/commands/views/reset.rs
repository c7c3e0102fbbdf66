use std::path::PathBuf;

use data_portfolio::ProjectId;

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "reset", about = "Reset the view counter of a project")]
pub struct Reset {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(help = "Identifier of the project")]
    id: Option<ProjectId>,
}

impl Reset {
    pub fn run(&self) -> Result<(), AppError> {
        let id = self.id.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Project id was not provided".to_owned())
        })?;

        let session = provide_session(&self.root_dir)?;
        session.view_counter().reset(id);

        println!("View counter of project {} reset", id);
        Ok(())
    }
}
