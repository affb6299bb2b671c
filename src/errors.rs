// ABOUTME: Re-exports the unified error types from the core crate
// ABOUTME: Lets binaries and tests import errors from the application crate root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! # Unified Error Handling System
//!
//! The types live in `bjj-core` so the intelligence crate can use them
//! without depending on the application crate.

pub use bjj_core::errors::{
    AppError, AppResult, CatalogError, ConfigError, ErrorCode, ErrorResponse, RecommenderError,
};
