// ABOUTME: Configuration error types for environment parsing and validation
// ABOUTME: Defines error variants for invalid ranges and unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error for {key}: {value:?}")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}
