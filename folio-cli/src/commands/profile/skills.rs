use std::path::PathBuf;

use data_portfolio::ProfilePatch;

use crate::{error::AppError, util::provide_session};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "skills", about = "List or edit the skill list")]
pub struct Skills {
    #[clap(value_parser, help = "Root directory of the portfolio")]
    root_dir: Option<PathBuf>,
    #[clap(short, long, help = "Skill to add, can be repeated")]
    add: Vec<String>,
    #[clap(short, long, help = "Skill to remove, can be repeated")]
    remove: Vec<String>,
}

impl Skills {
    pub fn run(&self) -> Result<(), AppError> {
        let mut session = provide_session(&self.root_dir)?;

        if self.add.is_empty() && self.remove.is_empty() {
            for skill in &session.profile_store().profile().skills {
                println!("{}", skill);
            }
            return Ok(());
        }

        let mut skills = session.profile_store().profile().skills.clone();
        for skill in &self.add {
            if !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }
        skills.retain(|skill| !self.remove.contains(skill));

        session
            .profile_store_mut()
            .update_profile(ProfilePatch {
                skills: Some(skills.clone()),
                ..Default::default()
            })?;

        println!("Skills: {}", skills.join(", "));
        Ok(())
    }
}
