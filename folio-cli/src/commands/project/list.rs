use std::path::PathBuf;

use data_error::FolioError;
use data_portfolio::Project;

use crate::{
    error::AppError, models::format::Format, util::provide_session,
};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List the projects in the portfolio")]
pub struct List {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(short, long, default_value = "plain", help = "Output format")]
    format: Format,
    #[clap(short, long, action = clap::ArgAction::SetTrue, help = "Include view counts")]
    views: bool,
}

impl List {
    pub fn run(&self) -> Result<(), AppError> {
        let session = provide_session(&self.root_dir)?;
        let projects = session.profile_store().projects();

        match self.format {
            Format::Json => {
                let output = serde_json::to_string_pretty(projects)
                    .map_err(FolioError::from)?;
                println!("{}", output);
            }
            Format::Plain => {
                for project in projects {
                    let mut line = format_line(project);
                    if self.views {
                        let count =
                            session.view_counter().count(&project.id);
                        line.push_str(&format!("  views: {}", count));
                    }
                    println!("{}", line);
                }
            }
        }

        Ok(())
    }
}

fn format_line(project: &Project) -> String {
    let categories: Vec<&str> = project
        .categories
        .iter()
        .map(String::as_str)
        .collect();

    format!(
        "{}  {}  {}  [{}]",
        project.id,
        project.created_at.format("%Y-%m-%d"),
        project.title,
        categories.join(", ")
    )
}
