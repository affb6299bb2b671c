// ABOUTME: bjj-cli - command-line front end for the BJJ technique recommender
// ABOUTME: Handles registration, ratings, recommendations, and training plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
//!
//! Usage:
//! ```bash
//! # Register a user
//! bjj-cli register --username alice --password secret --skill guard --level beginner
//!
//! # Rate a technique (1-5); the model retrains before the command returns
//! bjj-cli rate --username alice --password secret --technique "Gi: Armbar" --rating 5
//!
//! # Top 5 unrated techniques
//! bjj-cli recommend --username alice --password secret
//!
//! # Full training report with weaknesses and an S&C method
//! bjj-cli plan --username alice --password secret --weaknesses "escapes, takedowns" --method conjugate
//!
//! # Machine-readable output
//! bjj-cli --json recommend --username alice --password secret --top-k 3
//! ```

mod commands;
mod helpers;

use bjj_recommender::{
    config::AppConfig,
    database::Database,
    errors::{AppError, AppResult},
    intelligence::plans::StrengthMethod,
    logging::LoggingConfig,
    models::SkillLevel,
    services::RecommenderService,
};
use clap::{Parser, Subcommand};
use commands::Credentials;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "bjj-cli",
    about = "BJJ Technique Recommender CLI",
    long_about = "Rate Brazilian Jiu-Jitsu techniques, get collaborative-filtering recommendations, and generate training plans."
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

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Register a new user
    Register {
        #[command(flatten)]
        credentials: Credentials,

        /// Primary skill focus (e.g. "guard")
        #[arg(long)]
        skill: String,

        /// Experience level: beginner, intermediate, or advanced
        #[arg(long)]
        level: SkillLevel,
    },

    /// Show or update your skill focus and level
    Profile {
        #[command(flatten)]
        credentials: Credentials,

        /// New skill focus
        #[arg(long)]
        skill: Option<String>,

        /// New experience level
        #[arg(long)]
        level: Option<SkillLevel>,
    },

    /// Rate a technique from 1 to 5
    Rate {
        #[command(flatten)]
        credentials: Credentials,

        /// Technique name exactly as listed by `techniques`
        #[arg(long)]
        technique: String,

        /// Rating value (1-5)
        #[arg(long, allow_negative_numbers = true)]
        rating: i64,
    },

    /// Recommend techniques you have not rated yet
    Recommend {
        #[command(flatten)]
        credentials: Credentials,

        /// Number of techniques (default: BJJ_DEFAULT_TOP_K or 5)
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Generate the full training report
    Plan {
        #[command(flatten)]
        credentials: Credentials,

        /// Comma-separated weaknesses to work into the plans
        #[arg(long)]
        weaknesses: Option<String>,

        /// Strength & conditioning method (see `methods`)
        #[arg(long, default_value = "dynamic-effort")]
        method: StrengthMethod,

        /// Number of recommended techniques
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Generate a strength & conditioning plan only
    ScPlan {
        #[command(flatten)]
        credentials: Credentials,

        /// Strength & conditioning method (see `methods`)
        #[arg(long)]
        method: StrengthMethod,
    },

    /// List the technique catalog by category
    Techniques,

    /// List the strength & conditioning methods
    Methods,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging not initialized: {e}");
    }

    let json = cli.json;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::display_error(&error, json);
            ExitCode::from(error.code.exit_code())
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Load configuration
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    debug!("{}", config.summary());

    let catalog = Arc::new(config.load_catalog()?);

    // Catalog listings never touch the database
    match cli.command {
        Command::Techniques => return commands::catalog::techniques(&catalog, cli.json),
        Command::Methods => return commands::catalog::methods(cli.json),
        _ => {}
    }

    config.ensure_database_dir().map_err(|e| {
        AppError::config(format!("Cannot create database directory: {e}")).with_source(e)
    })?;

    info!("Connecting to database: {}", config.database_url);
    let database = Database::new(&config.database_url, catalog).await?;
    let mut service = RecommenderService::new(database, &config).await?;

    // Execute command
    match cli.command {
        Command::Register {
            credentials,
            skill,
            level,
        } => commands::account::register(&service, &credentials, skill, level, cli.json).await,
        Command::Profile {
            credentials,
            skill,
            level,
        } => commands::account::profile(&service, &credentials, skill, level, cli.json).await,
        Command::Rate {
            credentials,
            technique,
            rating,
        } => {
            commands::ratings::rate(&mut service, &credentials, &technique, rating, cli.json).await
        }
        Command::Recommend { credentials, top_k } => {
            commands::ratings::recommend(&mut service, &credentials, top_k, cli.json).await
        }
        Command::Plan {
            credentials,
            weaknesses,
            method,
            top_k,
        } => {
            commands::plans::training_report(
                &mut service,
                &credentials,
                weaknesses.as_deref(),
                method,
                top_k,
                cli.json,
            )
            .await
        }
        Command::ScPlan {
            credentials,
            method,
        } => commands::plans::sc_plan(&mut service, &credentials, method, cli.json).await,
        Command::Techniques | Command::Methods => Ok(()),
    }
}
