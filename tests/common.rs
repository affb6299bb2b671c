// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, service, and user registration helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `bjj_recommender`

use anyhow::Result;
use bjj_recommender::{
    auth::hash_password,
    config::AppConfig,
    database::Database,
    intelligence::RecommenderConfig,
    models::{Session, SkillLevel, UserProfile},
    services::RecommenderService,
    TechniqueCatalog,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Lowest bcrypt cost bcrypt accepts, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Fixed seed so engine and plan output are reproducible
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration for an in-memory database with a seeded engine
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_owned(),
        catalog_path: None,
        recommender: RecommenderConfig {
            seed: Some(TEST_SEED),
            ..RecommenderConfig::default()
        },
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

/// Standard test database setup with the built-in catalog
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let catalog = Arc::new(TechniqueCatalog::default());
    Ok(Database::new("sqlite::memory:", catalog).await?)
}

/// Standard recommender service over a fresh in-memory database
pub async fn create_test_service() -> Result<RecommenderService> {
    let database = create_test_database().await?;
    Ok(RecommenderService::new(database, &test_config()).await?)
}

/// Default profile used by test users
pub fn test_profile() -> UserProfile {
    UserProfile {
        skill: "guard".to_owned(),
        level: SkillLevel::Intermediate,
    }
}

/// Insert a user row directly and return its id
pub async fn create_test_user(database: &Database, username: &str) -> Result<i64> {
    let hash = hash_password("password123", TEST_BCRYPT_COST).await?;
    Ok(database.add_user(username, &hash, &test_profile()).await?)
}

/// Register through the service and log in
pub async fn register_and_login(service: &RecommenderService, username: &str) -> Result<Session> {
    service
        .register(username, "password123", &test_profile())
        .await?;
    Ok(service.login(username, "password123").await?)
}
