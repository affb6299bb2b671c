// ABOUTME: Domain service layer orchestrating one user action at a time
// ABOUTME: Session checks, store writes, retraining, recommendation, and plan rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Domain service layer
//!
//! Front ends (the CLI today) call into this layer; it owns the engine and
//! sequences store, engine, and plan generators for each action.

/// Recommend-and-retrain workflow and plan generation for logged-in users
pub mod recommender;

pub use recommender::RecommenderService;
