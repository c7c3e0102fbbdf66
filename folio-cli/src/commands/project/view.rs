use std::path::PathBuf;

use data_portfolio::{Project, ProjectId};

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "view", about = "Show a project and record the view")]
pub struct View {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(help = "Identifier of the project")]
    id: Option<ProjectId>,
}

impl View {
    pub fn run(&self) -> Result<(), AppError> {
        let id = self.id.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Project id was not provided".to_owned())
        })?;

        let session = provide_session(&self.root_dir)?;
        let project = session.profile_store().project(id).ok_or_else(|| {
            AppError::InvalidInput(format!("Unknown project: {}", id))
        })?;
        print_detail(project);

        let count = session.view_counter().increment(id);
        println!("Views:        {}", count);
        Ok(())
    }
}

fn print_detail(project: &Project) {
    println!("Id:           {}", project.id);
    println!("Title:        {}", project.title);
    println!("Description:  {}", project.description);

    let links = [
        ("Image", &project.image),
        ("Demo", &project.demo_url),
        ("Repository", &project.repo_url),
    ];
    for (field, value) in links {
        if let Some(value) = value {
            println!("{}: {}", field, value);
        }
    }

    let categories: Vec<&str> =
        project.categories.iter().map(String::as_str).collect();
    let technologies: Vec<&str> =
        project.technologies.iter().map(String::as_str).collect();
    println!("Categories:   {}", categories.join(", "));
    println!("Technologies: {}", technologies.join(", "));
    println!(
        "Created:      {}",
        project.created_at.format("%Y-%m-%d %H:%M")
    );
}
