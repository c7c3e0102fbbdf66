use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "folio-cli")]
#[clap(about = "Manage portfolio profiles and view counters", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
