use std::path::PathBuf;

use data_portfolio::ProjectId;

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "get", about = "Show view counts")]
pub struct Get {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(help = "Identifier of the project, all counters when omitted")]
    id: Option<ProjectId>,
}

impl Get {
    pub fn run(&self) -> Result<(), AppError> {
        let session = provide_session(&self.root_dir)?;

        match &self.id {
            Some(id) => {
                println!("{}", session.view_counter().count(id));
            }
            None => {
                let counts = session.view_counter().all()?;
                if counts.is_empty() {
                    println!("No view counters recorded");
                }
                for (project_id, count) in counts {
                    println!("{}\t{}", project_id, count);
                }
            }
        }

        Ok(())
    }
}
