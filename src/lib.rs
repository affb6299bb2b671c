// ABOUTME: Main library entry point for the BJJ technique recommender
// ABOUTME: Wires configuration, SQLite persistence, credentials, and the recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![deny(unsafe_code)]

//! # BJJ Technique Recommender
//!
//! Recommends Brazilian Jiu-Jitsu techniques from a collaborative-filtering
//! model fit over user ratings, and renders training plans around the
//! recommendations.
//!
//! ## Architecture
//!
//! - **`bjj-core`**: models, the technique catalog, constants, and errors
//! - **`bjj-intelligence`**: the latent-factor engine, the ratings store
//!   trait, and the plan generators
//! - **this crate**: environment configuration, logging, the SQLite
//!   database, bcrypt credentials, and the [`services::RecommenderService`]
//!   that the `bjj-cli` binary drives
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bjj_recommender::config::AppConfig;
//! use bjj_recommender::database::Database;
//! use bjj_recommender::errors::AppResult;
//! use bjj_recommender::services::RecommenderService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let catalog = Arc::new(config.load_catalog()?);
//!     let database = Database::new(&config.database_url, catalog).await?;
//!     let mut service = RecommenderService::new(database, &config).await?;
//!
//!     let session = service.login("alice", "hunter2").await?;
//!     for technique in service.recommend(&session, None).await? {
//!         println!("{technique}");
//!     }
//!     Ok(())
//! }
//! ```

/// bcrypt credentials and sessions
pub mod auth;

/// Environment configuration
pub mod config;

/// SQLite persistence for users, techniques, and ratings
pub mod database;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain services used by the CLI
pub mod services;

pub use bjj_core::models;
pub use bjj_core::TechniqueCatalog;
pub use bjj_intelligence as intelligence;
