use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "replygen")]
#[command(about = "AI email reply drafting with persisted company settings")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
