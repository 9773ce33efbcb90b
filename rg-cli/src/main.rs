//! replygen - AI email reply drafting CLI
//!
//! # Examples
//!
//! ```bash
//! # Show the persisted company settings
//! replygen settings show
//!
//! # Update the mission, keep name and email as they are
//! replygen settings save --mission "We build widgets."
//!
//! # Draft a reply to an email held in a file
//! replygen generate inbound.txt
//!
//! # Or pipe the email in on stdin
//! cat inbound.txt | replygen generate
//! ```

mod cli;
mod commands;
mod error;
mod logger;

use crate::{
    cli::Cli,
    commands::{Commands, SettingsCommands},
    error::Result as CliResult,
};

use rg_auth::RestIdentityProvider;
use rg_config::Config;
use rg_gen::HttpGenerationClient;
use rg_session::{ReplyOrchestrator, SessionController, SyncPhase};
use rg_store::SqliteProfileStore;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting replygen v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the profile database
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Opening profile database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    let store = Arc::new(SqliteProfileStore::new(pool).await?);
    let provider = Arc::new(RestIdentityProvider::new(
        &config.identity.endpoint,
        &config.identity.api_key,
    ));

    let controller = SessionController::new(
        provider,
        store,
        &config.store.app_id,
        config.identity.credential.clone(),
    );

    let signed_in = controller.initialize().await?;
    info!(
        "Signed in as {} ({:?})",
        signed_in.identity, signed_in.mode
    );

    if controller.wait_until_synced().await? == SyncPhase::SubscriptionFailed {
        warn!("Settings subscription failed; using last known settings");
    }

    match cli.command {
        Commands::Settings { action } => match action {
            SettingsCommands::Show => {
                let settings = controller.current_settings()?;
                println!("mission:      {}", settings.mission);
                println!("sender name:  {}", settings.sender_name);
                println!("sender email: {}", settings.sender_email);
            }

            SettingsCommands::Save {
                mission,
                name,
                email,
            } => {
                let mut settings = controller.current_settings()?;
                if let Some(mission) = mission {
                    settings.mission = mission;
                }
                if let Some(name) = name {
                    settings.sender_name = name;
                }
                if let Some(email) = email {
                    settings.sender_email = email;
                }

                controller.save_settings(settings).await?;
                println!("Settings saved.");
            }
        },

        Commands::Generate { file } => {
            let inbound = read_inbound(file.as_deref())?;

            let service = Arc::new(HttpGenerationClient::new(
                &config.generation.endpoint,
                &config.generation.api_key,
                &config.generation.model,
                Duration::from_secs(config.generation.timeout_secs),
            )?);

            let settings = controller.current_settings()?;
            let orchestrator = ReplyOrchestrator::new(service);

            let reply = orchestrator.generate(&inbound, &settings).await?;
            println!("{}", reply);
        }
    }

    controller.shutdown();

    Ok(())
}

/// Read the inbound email from a file, or from stdin when no file is given.
fn read_inbound(file: Option<&str>) -> CliResult<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
