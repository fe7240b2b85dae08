use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "intellicode")]
#[clap(about = "Demo code analysis tool with simulated findings", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
