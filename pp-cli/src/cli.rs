use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pp")]
#[command(about = "Profile Plus CLI - author, browse and present professional profiles")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Profile service URL (overrides the configured base URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
