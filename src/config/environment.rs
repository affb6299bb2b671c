// ABOUTME: Environment-based configuration for the recommender application
// ABOUTME: Parses DATABASE_URL, catalog path, seed, bcrypt cost, and model hyper-parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Environment-based configuration management

use bjj_core::constants::{auth, env_config, storage};
use bjj_core::errors::{CatalogError, ConfigError};
use bjj_core::TechniqueCatalog;
use bjj_intelligence::{LatentFactorConfig, RecommenderConfig};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Application configuration loaded once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// JSON catalog file; `None` uses the built-in table
    pub catalog_path: Option<PathBuf>,
    /// Engine configuration (hyper-parameters, default list size, seed)
    pub recommender: RecommenderConfig,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            catalog_path: None,
            recommender: RecommenderConfig::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or a
    /// value outside its accepted range
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults_model = LatentFactorConfig::default();
        let defaults_recommender = RecommenderConfig::default();

        let config = Self {
            database_url: env::var(env_config::DATABASE_URL)
                .unwrap_or_else(|_| default_database_url()),
            catalog_path: env::var_os(env_config::CATALOG_PATH)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            recommender: RecommenderConfig {
                model: LatentFactorConfig {
                    factors: env_parse_or(env_config::MODEL_FACTORS, defaults_model.factors)?,
                    epochs: env_parse_or(env_config::MODEL_EPOCHS, defaults_model.epochs)?,
                    learning_rate: env_parse_or(
                        env_config::MODEL_LEARNING_RATE,
                        defaults_model.learning_rate,
                    )?,
                    regularization: env_parse_or(
                        env_config::MODEL_REGULARIZATION,
                        defaults_model.regularization,
                    )?,
                    ..defaults_model
                },
                default_top_k: env_parse_or(
                    env_config::DEFAULT_TOP_K,
                    defaults_recommender.default_top_k,
                )?,
                seed: env_parse_optional(env_config::RECOMMENDER_SEED)?,
            },
            bcrypt_cost: env_parse_or(env_config::BCRYPT_COST, bcrypt::DEFAULT_COST)?,
        };

        config.validate()?;
        info!("Configuration loaded from environment");
        debug!("{}", config.summary());
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the bcrypt cost or any model parameter is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(auth::MIN_BCRYPT_COST..=auth::MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidRange("bcrypt cost must be between 4 and 31"));
        }
        self.recommender.validate()
    }

    /// Build the technique catalog this configuration names
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog file cannot be loaded
    pub fn load_catalog(&self) -> Result<TechniqueCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => TechniqueCatalog::from_json_file(path),
            None => Ok(TechniqueCatalog::default()),
        }
    }

    /// Create the parent directory of a file-backed database
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn ensure_database_dir(&self) -> std::io::Result<()> {
        match database_file(&self.database_url).and_then(Path::parent) {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Human-readable summary for debug logs
    #[must_use]
    pub fn summary(&self) -> String {
        let model = &self.recommender.model;
        format!(
            "BJJ Recommender Configuration:\n\
             - Database: {}\n\
             - Catalog: {}\n\
             - Seed: {}\n\
             - Default top-k: {}\n\
             - Model: {} factors, {} epochs, lr {}, reg {}",
            self.database_url,
            self.catalog_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.recommender
                .seed
                .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string()),
            self.recommender.default_top_k,
            model.factors,
            model.epochs,
            model.learning_rate,
            model.regularization,
        )
    }
}

/// `sqlite:` URL for the database file in the platform data directory
#[must_use]
pub fn default_database_url() -> String {
    let path = dirs::data_dir().map_or_else(
        || PathBuf::from(storage::DATABASE_FILE),
        |dir| dir.join(storage::DATA_DIR_NAME).join(storage::DATABASE_FILE),
    );
    format!("sqlite:{}", path.display())
}

/// File path behind a `sqlite:` URL, if it names a file
fn database_file(url: &str) -> Option<&Path> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

fn env_parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    Ok(env_parse_optional(key)?.unwrap_or(default))
}

fn env_parse_optional<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { key, value: raw }),
        _ => Ok(None),
    }
}
