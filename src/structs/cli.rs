use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "vertexpoint")]
#[clap(about = "Audit dashboard with simulated site reports", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
