//! pp - Profile Plus CLI
//!
//! A command-line interface for authoring, browsing and presenting
//! professional profiles backed by the remote profile service.
//!
//! # Examples
//!
//! ```bash
//! # Dashboard statistics
//! pp dashboard --pretty
//!
//! # Browse profiles
//! pp profile list --search ada --skill Rust
//!
//! # Create a profile
//! pp profile create --first-name Ada --last-name Lovelace --email ada@x.com \
//!     --skill Mathematics --skill Programming
//!
//! # Delete a profile (irreversible)
//! pp profile delete <uuid> --yes
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod profile_commands;

use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    profile_commands::ProfileCommands,
};

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use pp_client::Client;
use pp_config::Config;
use pp_core::{CoreError, ProfileUpdate, SkillSet};
use pp_form::{FormField, ProfileForm};
use pp_store::{ProfileStore, ViewCoordinator};
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Explicit flag wins over the configured base URL
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let client = match Client::with_timeout(
        &server_url,
        Duration::from_secs(config.api.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, client).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

async fn run(command: Commands, client: Client) -> CliResult<Value> {
    match command {
        Commands::Health => {
            client.health().await?;
            Ok(json!({"status": "ok"}))
        }

        Commands::Dashboard => {
            let store = ProfileStore::new(client);
            store.reload().await?;

            let coordinator = ViewCoordinator::new(store.subscribe());
            Ok(serde_json::to_value(coordinator.dashboard(Utc::now()))?)
        }

        Commands::Profile { action } => {
            let store = ProfileStore::new(client);
            profile_command(&store, action).await
        }
    }
}

async fn profile_command(store: &ProfileStore, action: ProfileCommands) -> CliResult<Value> {
    match action {
        ProfileCommands::List { search, skill } => {
            store.reload().await?;

            let coordinator = ViewCoordinator::new(store.subscribe());
            let view = coordinator.profile_list(
                search.as_deref().unwrap_or(""),
                skill.as_deref().unwrap_or(""),
            );
            Ok(serde_json::to_value(view)?)
        }

        ProfileCommands::Get { id } => {
            let id = parse_id(&id)?;
            let profile = store.fetch_one(id).await?;
            Ok(serde_json::to_value(profile)?)
        }

        ProfileCommands::Create {
            first_name,
            last_name,
            email,
            phone,
            bio,
            job_title,
            company,
            industry,
            experience,
            skills,
            linkedin,
            twitter,
            github,
            website,
            image,
        } => {
            let mut form = ProfileForm::new();
            form.set_field(FormField::FirstName, first_name);
            form.set_field(FormField::LastName, last_name);
            form.set_field(FormField::Email, email);
            set_optional(&mut form, FormField::Phone, phone);
            set_optional(&mut form, FormField::Bio, bio);
            set_optional(&mut form, FormField::JobTitle, job_title);
            set_optional(&mut form, FormField::Company, company);
            set_optional(&mut form, FormField::Industry, industry);
            set_optional(&mut form, FormField::YearsOfExperience, experience);
            set_optional(&mut form, FormField::LinkedinUrl, linkedin);
            set_optional(&mut form, FormField::TwitterUrl, twitter);
            set_optional(&mut form, FormField::GithubUrl, github);
            set_optional(&mut form, FormField::WebsiteUrl, website);

            for skill in &skills {
                form.add_skill(skill);
            }

            if let Some(path) = image {
                form.set_image(Path::new(&path)).await?;
            }

            // The surrounding surface blocks submission until the
            // required fields are present
            form.build_submission().validate()?;

            let id = form.submit(store).await?;
            Ok(json!({ "created_id": id }))
        }

        ProfileCommands::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            bio,
            job_title,
            company,
            industry,
            experience,
            skills,
            linkedin,
            twitter,
            github,
            website,
        } => {
            let id = parse_id(&id)?;

            let update = ProfileUpdate {
                first_name,
                last_name,
                email,
                phone,
                bio,
                job_title,
                company,
                industry,
                years_of_experience: experience,
                skills: (!skills.is_empty()).then(|| SkillSet::from(skills)),
                linkedin_url: linkedin,
                twitter_url: twitter,
                github_url: github,
                website_url: website,
                profile_image: None,
            };

            if update.is_empty() {
                return Err(CliError::Aborted {
                    message: "Nothing to update; pass at least one field flag".to_string(),
                });
            }

            let profile = store.update(id, &update).await?;
            Ok(serde_json::to_value(profile)?)
        }

        ProfileCommands::Delete { id, yes } => {
            if !yes {
                return Err(CliError::Aborted {
                    message: "Deletion is irreversible; pass --yes to confirm".to_string(),
                });
            }

            let id = parse_id(&id)?;
            store.delete(id).await?;
            Ok(json!({ "deleted_id": id }))
        }
    }
}

fn set_optional(form: &mut ProfileForm, field: FormField, value: Option<String>) {
    if let Some(value) = value {
        form.set_field(field, value);
    }
}

fn parse_id(raw: &str) -> CliResult<Uuid> {
    Ok(Uuid::parse_str(raw).map_err(CoreError::from)?)
}
