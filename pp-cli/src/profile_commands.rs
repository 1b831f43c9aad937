use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// List profiles, optionally filtered
    List {
        /// Case-insensitive search over name, email, job title and company
        #[arg(long)]
        search: Option<String>,

        /// Keep only profiles with this exact skill
        #[arg(long)]
        skill: Option<String>,
    },

    /// Get a single profile by id
    Get { id: String },

    /// Create a new profile
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        /// Years of experience; blank or non-numeric input is treated as
        /// unspecified
        #[arg(long)]
        experience: Option<String>,
        /// May be given multiple times; order is kept
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        website: Option<String>,
        /// Path to an image file, inlined into the profile (5 MB max)
        #[arg(long)]
        image: Option<String>,
    },

    /// Update fields of an existing profile; omitted flags are left untouched
    Update {
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        experience: Option<u32>,
        /// Replaces the whole skill list when given
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },

    /// Delete a profile. Irreversible; requires --yes
    Delete {
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
