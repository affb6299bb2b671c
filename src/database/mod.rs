// ABOUTME: SQLite persistence for users, techniques, and ratings
// ABOUTME: Owns the connection pool, runs migrations, and seeds the technique table from the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! # Database Management
//!
//! Three tables: `users`, `techniques` (seeded from the catalog on startup)
//! and `ratings` keyed by `(user_id, technique_id)`. The [`Database`]
//! implements [`bjj_intelligence::RatingsStore`] so the engine can train
//! directly from it.

mod ratings;
mod techniques;
mod users;

use bjj_core::errors::{AppError, AppResult};
use bjj_core::TechniqueCatalog;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Database manager for users, techniques, and ratings
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
    catalog: Arc<TechniqueCatalog>,
}

impl Database {
    /// Open (creating if missing) the database at `database_url`, migrate the
    /// schema, and seed the technique table from `catalog`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration statement fails
    pub async fn new(database_url: &str, catalog: Arc<TechniqueCatalog>) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL '{database_url}': {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives only as long as its connection
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool, catalog };
        db.migrate().await?;
        db.seed_techniques().await?;

        info!(
            techniques = db.catalog.len(),
            "Database ready at {database_url}"
        );
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// The catalog ratings are validated against
    #[must_use]
    pub const fn catalog(&self) -> &Arc<TechniqueCatalog> {
        &self.catalog
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_techniques().await?;
        self.migrate_ratings().await?;
        Ok(())
    }
}
