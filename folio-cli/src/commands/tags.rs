use data_portfolio::tags::{CATEGORIES, TECHNOLOGIES};

use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "tags", about = "Show the category and technology vocabularies")]
pub struct Tags {}

impl Tags {
    pub fn run(&self) -> Result<(), AppError> {
        println!("Categories:");
        for category in CATEGORIES {
            println!("\t{}", category);
        }

        println!("Technologies:");
        for technology in TECHNOLOGIES {
            println!("\t{}", technology);
        }

        Ok(())
    }
}
