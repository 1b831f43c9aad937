use crate::profile_commands::ProfileCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Aggregated statistics over all profiles
    Dashboard,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Check that the profile service is reachable
    Health,
}
