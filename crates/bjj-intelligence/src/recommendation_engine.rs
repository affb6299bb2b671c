// ABOUTME: Technique recommendation engine with explicit full retraining
// ABOUTME: Ranks unrated techniques by predicted affinity, random fallback when untrained
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Recommendation engine
//!
//! The engine holds at most one trained model. [`RecommendationEngine::retrain`]
//! rebuilds it from the complete ratings store; nothing retrains implicitly,
//! so a recommendation reflects the ratings present at the last retrain.
//!
//! Retraining is all-or-nothing: a failed fit leaves the previous model (or
//! the untrained state) in place.

use crate::config::RecommenderConfig;
use crate::factorization::{BiasedMatrixFactorization, LatentFactorModel};
use crate::store::RatingsStore;
use bjj_core::errors::{AppResult, RecommenderError};
use bjj_core::models::Rating;
use bjj_core::TechniqueCatalog;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the engine currently predicts from
#[derive(Debug)]
pub enum EngineState<M> {
    /// No ratings existed at the last retrain; recommendations are uniform random
    Untrained,
    /// A model fit on `rating_count` ratings
    Trained {
        /// The fitted model
        model: M,
        /// Size of the training snapshot
        rating_count: usize,
    },
}

/// Recommends unrated techniques ranked by a latent-factor model
pub struct RecommendationEngine<F: LatentFactorModel = BiasedMatrixFactorization> {
    catalog: Arc<TechniqueCatalog>,
    factorization: F,
    rng: ChaCha8Rng,
    state: EngineState<F::Model>,
}

impl RecommendationEngine {
    /// Create an untrained engine with the default factorization
    ///
    /// A configured seed makes fallback sampling and factor initialization
    /// reproducible; otherwise the random source is seeded from OS entropy.
    #[must_use]
    pub fn new(catalog: Arc<TechniqueCatalog>, config: &RecommenderConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self::with_factorization(catalog, BiasedMatrixFactorization::new(config.model), rng)
    }
}

impl<F: LatentFactorModel> RecommendationEngine<F> {
    /// Create an untrained engine around a custom factorization and random source
    #[must_use]
    pub fn with_factorization(
        catalog: Arc<TechniqueCatalog>,
        factorization: F,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            catalog,
            factorization,
            rng,
            state: EngineState::Untrained,
        }
    }

    /// The injected catalog
    #[must_use]
    pub fn catalog(&self) -> &TechniqueCatalog {
        &self.catalog
    }

    /// Current model state
    #[must_use]
    pub const fn state(&self) -> &EngineState<F::Model> {
        &self.state
    }

    /// Whether a model is available
    #[must_use]
    pub const fn is_trained(&self) -> bool {
        matches!(self.state, EngineState::Trained { .. })
    }

    /// Rebuild the model from every rating in `store`
    ///
    /// Blocks the caller until the fit completes. An empty store resets the
    /// engine to the untrained state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, or a
    /// `ModelTrainingFailed` error if the fit fails. In both cases the
    /// previous state is kept.
    pub async fn retrain<S>(&mut self, store: &S) -> AppResult<()>
    where
        S: RatingsStore + ?Sized,
    {
        let ratings = store.all_ratings().await?;
        self.retrain_from(&ratings)?;
        Ok(())
    }

    /// Rebuild the model from an explicit rating snapshot
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ModelTrainingFailure`] if the fit fails;
    /// the previous state is kept.
    pub fn retrain_from(&mut self, ratings: &[Rating]) -> Result<(), RecommenderError> {
        if ratings.is_empty() {
            info!("no ratings stored, recommendation engine is untrained");
            self.state = EngineState::Untrained;
            return Ok(());
        }

        match self.factorization.fit(ratings, &mut self.rng) {
            Ok(model) => {
                info!(rating_count = ratings.len(), "recommendation model retrained");
                self.state = EngineState::Trained {
                    model,
                    rating_count: ratings.len(),
                };
                Ok(())
            }
            Err(error) => {
                warn!(%error, "model training failed, keeping previous model");
                Err(error)
            }
        }
    }

    /// Recommend up to `k` techniques `user_id` has not rated
    ///
    /// Untrained engines ignore the user and sample `k` distinct techniques
    /// uniformly from the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the user's ratings cannot be read from `store`
    pub async fn recommend<S>(
        &mut self,
        store: &S,
        user_id: i64,
        k: usize,
    ) -> AppResult<Vec<String>>
    where
        S: RatingsStore + ?Sized,
    {
        if !self.is_trained() {
            return Ok(self.sample_catalog(k));
        }

        let rated: HashSet<String> = store
            .user_ratings(user_id)
            .await?
            .into_iter()
            .map(|(technique, _)| technique)
            .collect();
        Ok(self.recommend_excluding(user_id, &rated, k))
    }

    /// Rank catalog techniques not in `rated` and return the top `k`
    ///
    /// Equal predicted scores are ordered by technique name.
    pub fn recommend_excluding(
        &mut self,
        user_id: i64,
        rated: &HashSet<String>,
        k: usize,
    ) -> Vec<String> {
        let model = match &self.state {
            EngineState::Trained { model, .. } => model,
            EngineState::Untrained => return self.sample_catalog(k),
        };

        let mut scored: Vec<(&str, f64)> = self
            .catalog
            .names()
            .filter(|name| !rated.contains(*name))
            .map(|name| (name, self.factorization.predict(model, user_id, name)))
            .collect();

        scored.sort_by(|(left_name, left), (right_name, right)| {
            right
                .partial_cmp(left)
                .unwrap_or(Ordering::Equal)
                .then_with(|| left_name.cmp(right_name))
        });

        let picks: Vec<String> = scored
            .into_iter()
            .take(k)
            .map(|(name, _)| name.to_owned())
            .collect();
        debug!(user_id, excluded = rated.len(), ?picks, "ranked recommendations");
        picks
    }

    fn sample_catalog(&mut self, k: usize) -> Vec<String> {
        let mut picks: Vec<String> = self
            .catalog
            .names()
            .choose_multiple(&mut self.rng, k)
            .into_iter()
            .map(str::to_owned)
            .collect();
        picks.shuffle(&mut self.rng);
        debug!(requested = k, returned = picks.len(), "untrained fallback sample");
        picks
    }
}
