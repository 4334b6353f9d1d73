// ABOUTME: NutriCare CLI - compute nutrition assessments and manage stored visit snapshots
// ABOUTME: Reads patient profiles from JSON files and prints human or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute a full assessment from a profile file
//! nutricare-cli compute --profile patient.json
//!
//! # Same, as JSON, with IOM as the required-kcal source
//! nutricare-cli compute --profile patient.json --json --source iom
//!
//! # Override the profile's amputation percentage from segment codes
//! nutricare-cli compute --profile patient.json --amputation below_knee --amputation hand
//!
//! # Store a visit snapshot
//! nutricare-cli snapshot save --visit-id visit-42 --profile patient.json
//!
//! # Show, list, and delete snapshots
//! nutricare-cli snapshot show --visit-id visit-42
//! nutricare-cli snapshot list
//! nutricare-cli snapshot delete --visit-id visit-42
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutricare::{
    config::environment::ServerConfig,
    database::SqliteSnapshotStore,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutricare-cli",
    about = "NutriCare clinical nutrition CLI",
    long_about = "Compute energy requirements and body composition from patient profiles, and manage stored visit snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a full assessment from a profile file
    Compute {
        /// Path to a JSON patient profile
        #[arg(long)]
        profile: PathBuf,

        /// Print the result set as JSON
        #[arg(long)]
        json: bool,

        /// Amputated segment (hand, forearm, entire_arm, foot, lower_leg, entire_leg); repeatable
        #[arg(long = "amputation", value_name = "SEGMENT")]
        amputations: Vec<String>,

        /// Required-kcal source (predictive equation name or "iom")
        #[arg(long, default_value = "mifflin_st_jeor")]
        source: String,
    },

    /// Visit snapshot management
    Snapshot {
        #[command(subcommand)]
        action: SnapshotCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SnapshotCommand {
    /// Compute and store a snapshot for a visit
    Save {
        /// Visit identifier
        #[arg(long)]
        visit_id: String,

        /// Path to a JSON patient profile
        #[arg(long)]
        profile: PathBuf,

        /// Amputated segment (hand, forearm, entire_arm, foot, lower_leg, entire_leg); repeatable
        #[arg(long = "amputation", value_name = "SEGMENT")]
        amputations: Vec<String>,
    },

    /// Show a stored snapshot
    Show {
        /// Visit identifier
        #[arg(long)]
        visit_id: String,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored visit ids
    List,

    /// Delete a stored snapshot
    Delete {
        /// Visit identifier
        #[arg(long)]
        visit_id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config = config.with_database_url(url)?;
    }

    match cli.command {
        Command::Compute {
            profile,
            json,
            amputations,
            source,
        } => {
            let source = source.parse()?;
            commands::compute::run(&config.engine, &profile, &amputations, json, source).await?;
        }
        Command::Snapshot { action } => {
            info!("Opening snapshot database: {}", config.database.url);
            let store =
                SqliteSnapshotStore::new(&config.database.url.to_connection_string()).await?;
            match action {
                SnapshotCommand::Save {
                    visit_id,
                    profile,
                    amputations,
                } => {
                    commands::snapshot::save(
                        &store,
                        &config.engine,
                        visit_id,
                        &profile,
                        &amputations,
                    )
                    .await?;
                }
                SnapshotCommand::Show { visit_id, json } => {
                    commands::snapshot::show(&store, &config.engine, &visit_id, json).await?;
                }
                SnapshotCommand::List => {
                    commands::snapshot::list(&store).await?;
                }
                SnapshotCommand::Delete { visit_id } => {
                    commands::snapshot::delete(&store, &visit_id).await?;
                }
            }
        }
    }

    Ok(())
}
