// ABOUTME: Technique recommendation engine and training plan generation
// ABOUTME: Latent-factor fitting, the ratings store seam, and templated plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![deny(unsafe_code)]

//! # BJJ Intelligence
//!
//! The recommend-and-retrain workflow:
//!
//! 1. A [`store::RatingsStore`] holds every `(user, technique, score)` triple.
//! 2. [`recommendation_engine::RecommendationEngine::retrain`] reads the whole
//!    store and fits a fresh [`factorization::LatentFactorModel`].
//! 3. [`recommendation_engine::RecommendationEngine::recommend`] ranks the
//!    techniques a user has not rated yet.
//! 4. [`plans`] turns a recommendation list into training plans.

/// Recommender configuration (model hyper-parameters, defaults)
pub mod config;

/// Latent-factor model trait and the biased matrix factorization
pub mod factorization;

/// Recommendation engine with retrain/recommend
pub mod recommendation_engine;

/// Ratings store trait and in-memory implementation
pub mod store;

/// Templated training plan generators
pub mod plans;

pub use config::{LatentFactorConfig, RecommenderConfig};
pub use factorization::{BiasedMatrixFactorization, FactorizationModel, LatentFactorModel};
pub use recommendation_engine::{EngineState, RecommendationEngine};
pub use store::{InMemoryRatingsStore, RatingsStore};
