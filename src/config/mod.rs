// ABOUTME: Configuration management module for the recommender application
// ABOUTME: Re-exports the environment-driven AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
//! Configuration module
//!
//! Configuration is read from the environment only, once, at startup. The
//! resulting [`AppConfig`] is passed down explicitly; nothing reads the
//! environment after that.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{default_database_url, AppConfig};
