// ABOUTME: Core types and constants for the BJJ technique recommender
// ABOUTME: Foundation crate with error handling, domain models, and the technique catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![deny(unsafe_code)]

//! # BJJ Core
//!
//! Foundation crate providing shared types for the BJJ technique recommender.
//! Both the intelligence crate and the application crate depend on it, so it
//! is kept free of storage and runtime concerns.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Default catalog table, rating bounds, and model defaults
//! - **models**: Techniques, users, sessions, and ratings
//! - **catalog**: The read-only technique catalog injected into the engine

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Technique, User, Rating, etc.)
pub mod models;

/// Read-only technique catalog grouped by category
pub mod catalog;

pub use catalog::TechniqueCatalog;
