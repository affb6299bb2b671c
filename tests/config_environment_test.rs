// ABOUTME: Tests for environment-driven configuration loading
// ABOUTME: Validates defaults, overrides, parse errors, and range checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bjj_recommender::{
    config::{default_database_url, AppConfig},
    errors::ConfigError,
};
use serial_test::serial;
use std::env;
use std::io::Write;

const VARS: [&str; 9] = [
    "DATABASE_URL",
    "BJJ_CATALOG_PATH",
    "BJJ_RECOMMENDER_SEED",
    "BJJ_DEFAULT_TOP_K",
    "BJJ_BCRYPT_COST",
    "BJJ_MODEL_FACTORS",
    "BJJ_MODEL_EPOCHS",
    "BJJ_MODEL_LEARNING_RATE",
    "BJJ_MODEL_REGULARIZATION",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.database_url, default_database_url());
    assert!(config.catalog_path.is_none());
    assert_eq!(config.recommender.default_top_k, 5);
    assert_eq!(config.recommender.seed, None);
    assert_eq!(config.recommender.model.factors, 20);
    assert_eq!(config.recommender.model.epochs, 20);
    assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
}

#[test]
#[serial]
fn test_overrides_applied() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("BJJ_RECOMMENDER_SEED", "7");
    env::set_var("BJJ_DEFAULT_TOP_K", "3");
    env::set_var("BJJ_BCRYPT_COST", "4");
    env::set_var("BJJ_MODEL_FACTORS", "8");
    env::set_var("BJJ_MODEL_LEARNING_RATE", "0.01");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.recommender.seed, Some(7));
    assert_eq!(config.recommender.default_top_k, 3);
    assert_eq!(config.bcrypt_cost, 4);
    assert_eq!(config.recommender.model.factors, 8);
    assert!((config.recommender.model.learning_rate - 0.01).abs() < f64::EPSILON);
    assert_eq!(config.recommender.model.epochs, 20);
}

#[test]
#[serial]
fn test_unparseable_value_names_variable() {
    clear_env();
    env::set_var("BJJ_MODEL_EPOCHS", "lots");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    match err {
        ConfigError::Parse { key, value } => {
            assert_eq!(key, "BJJ_MODEL_EPOCHS");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_values_rejected() {
    clear_env();
    env::set_var("BJJ_BCRYPT_COST", "40");
    assert!(matches!(
        AppConfig::from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
    env::set_var("BJJ_MODEL_REGULARIZATION", "-1");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_catalog_file_loaded() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"Upper Body": ["Gi: Armbar"], "Guard": ["Gi: Closed Guard", "No-Gi: X-Guard"]}}"#
    )
    .unwrap();
    env::set_var("BJJ_CATALOG_PATH", file.path());

    let config = AppConfig::from_env().unwrap();
    clear_env();

    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.contains("No-Gi: X-Guard"));
}

#[test]
fn test_ensure_database_dir_creates_parent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("bjj.db");
    let config = AppConfig {
        database_url: format!("sqlite:{}", db_path.display()),
        ..AppConfig::default()
    };

    config.ensure_database_dir().unwrap();
    assert!(dir.path().join("nested").is_dir());
}
