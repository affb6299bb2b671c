// ABOUTME: Latent-factor model trait and a biased matrix factorization trained with SGD
// ABOUTME: Fits user/technique biases and factor vectors on explicit 1-5 ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Latent-factor fitting
//!
//! The engine only depends on [`LatentFactorModel`]: `fit` turns a rating
//! snapshot into a model, `predict` scores a `(user, technique)` pair. The
//! bundled [`BiasedMatrixFactorization`] is the classic SVD-style model:
//!
//! ```text
//! r̂(u, i) = μ + b_u + b_i + p_u · q_i
//! ```
//!
//! trained by stochastic gradient descent over every observed rating per
//! epoch. Users or techniques absent from the training set contribute no bias
//! or factor term, so their predictions fall back towards the global mean.

use crate::config::LatentFactorConfig;
use bjj_core::constants::ratings::{MAX_RATING, MIN_RATING};
use bjj_core::errors::RecommenderError;
use bjj_core::models::Rating;
use ndarray::{Array1, Array2};
use rand::RngCore;
use rand_distr::{Distribution, Normal};
use std::collections::HashMap;
use tracing::debug;

/// A fit/predict capability over explicit ratings
pub trait LatentFactorModel: Send + Sync {
    /// The trained artifact
    type Model: Send + Sync;

    /// Fit a fresh model on the full rating snapshot
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ModelTrainingFailure`] if the ratings or the
    /// configuration cannot produce a usable model.
    fn fit(&self, ratings: &[Rating], rng: &mut dyn RngCore)
        -> Result<Self::Model, RecommenderError>;

    /// Predicted affinity of `user_id` for `technique`
    fn predict(&self, model: &Self::Model, user_id: i64, technique: &str) -> f64;
}

/// Trained parameters of a biased matrix factorization
#[derive(Debug, Clone)]
pub struct FactorizationModel {
    global_mean: f64,
    user_index: HashMap<i64, usize>,
    item_index: HashMap<String, usize>,
    user_bias: Array1<f64>,
    item_bias: Array1<f64>,
    user_factors: Array2<f64>,
    item_factors: Array2<f64>,
}

impl FactorizationModel {
    /// Mean of all training ratings
    #[must_use]
    pub const fn global_mean(&self) -> f64 {
        self.global_mean
    }

    /// Number of distinct users seen during training
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.user_index.len()
    }

    /// Number of distinct techniques seen during training
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_index.len()
    }

    fn is_finite(&self) -> bool {
        self.user_bias
            .iter()
            .chain(self.item_bias.iter())
            .chain(self.user_factors.iter())
            .chain(self.item_factors.iter())
            .all(|value| value.is_finite())
    }

    fn interaction(&self, u: usize, i: usize) -> f64 {
        self.user_factors.row(u).dot(&self.item_factors.row(i))
    }

    fn estimate(&self, user_id: i64, technique: &str) -> f64 {
        let user = self.user_index.get(&user_id).copied();
        let item = self.item_index.get(technique).copied();

        let mut estimate = self.global_mean;
        if let Some(u) = user {
            estimate += self.user_bias[u];
        }
        if let Some(i) = item {
            estimate += self.item_bias[i];
        }
        if let (Some(u), Some(i)) = (user, item) {
            estimate += self.interaction(u, i);
        }

        estimate.clamp(f64::from(MIN_RATING), f64::from(MAX_RATING))
    }
}

/// SVD-style matrix factorization with user and technique biases
#[derive(Debug, Clone, Default)]
pub struct BiasedMatrixFactorization {
    config: LatentFactorConfig,
}

impl BiasedMatrixFactorization {
    /// Create a factorization with the given hyper-parameters
    #[must_use]
    pub const fn new(config: LatentFactorConfig) -> Self {
        Self { config }
    }

    /// Hyper-parameters in use
    #[must_use]
    pub const fn config(&self) -> &LatentFactorConfig {
        &self.config
    }
}

/// Ratings mapped to dense indices
struct TrainingSet {
    user_index: HashMap<i64, usize>,
    item_index: HashMap<String, usize>,
    entries: Vec<(usize, usize, f64)>,
    global_mean: f64,
}

impl TrainingSet {
    fn build(ratings: &[Rating]) -> Result<Self, RecommenderError> {
        if ratings.is_empty() {
            return Err(RecommenderError::training("no ratings to fit"));
        }

        let mut user_index = HashMap::new();
        let mut item_index = HashMap::new();
        let mut entries = Vec::with_capacity(ratings.len());
        let mut total = 0.0;

        for rating in ratings {
            let next_user = user_index.len();
            let u = *user_index.entry(rating.user_id).or_insert(next_user);
            let next_item = item_index.len();
            let i = *item_index
                .entry(rating.technique.clone())
                .or_insert(next_item);
            let value = rating.score.as_f64();
            total += value;
            entries.push((u, i, value));
        }

        let global_mean = total / entries.len() as f64;
        Ok(Self {
            user_index,
            item_index,
            entries,
            global_mean,
        })
    }
}

impl LatentFactorModel for BiasedMatrixFactorization {
    type Model = FactorizationModel;

    fn fit(
        &self,
        ratings: &[Rating],
        rng: &mut dyn RngCore,
    ) -> Result<FactorizationModel, RecommenderError> {
        self.config
            .validate()
            .map_err(|e| RecommenderError::training(e.to_string()))?;

        let training = TrainingSet::build(ratings)?;
        let normal = Normal::new(self.config.init_mean, self.config.init_std_dev)
            .map_err(|e| RecommenderError::training(e.to_string()))?;

        let factors = self.config.factors;
        let user_factors = init_factors(training.user_index.len(), factors, &normal, rng);
        let item_factors = init_factors(training.item_index.len(), factors, &normal, rng);

        let mut model = FactorizationModel {
            global_mean: training.global_mean,
            user_bias: Array1::zeros(training.user_index.len()),
            item_bias: Array1::zeros(training.item_index.len()),
            user_factors,
            item_factors,
            user_index: training.user_index,
            item_index: training.item_index,
        };

        let lr = self.config.learning_rate;
        let reg = self.config.regularization;

        for epoch in 0..self.config.epochs {
            let mut squared_error = 0.0;
            for &(u, i, rating) in &training.entries {
                let prediction = model.global_mean
                    + model.user_bias[u]
                    + model.item_bias[i]
                    + model.interaction(u, i);
                let err = rating - prediction;
                squared_error += err * err;

                model.user_bias[u] += lr * (err - reg * model.user_bias[u]);
                model.item_bias[i] += lr * (err - reg * model.item_bias[i]);

                for f in 0..factors {
                    let puf = model.user_factors[[u, f]];
                    let qif = model.item_factors[[i, f]];
                    model.user_factors[[u, f]] += lr * err.mul_add(qif, -reg * puf);
                    model.item_factors[[i, f]] += lr * err.mul_add(puf, -reg * qif);
                }
            }

            if !model.is_finite() {
                return Err(RecommenderError::training(format!(
                    "parameters diverged during epoch {}",
                    epoch + 1
                )));
            }

            debug!(
                epoch = epoch + 1,
                rmse = (squared_error / training.entries.len() as f64).sqrt(),
                "latent factor epoch complete"
            );
        }

        Ok(model)
    }

    fn predict(&self, model: &FactorizationModel, user_id: i64, technique: &str) -> f64 {
        model.estimate(user_id, technique)
    }
}

fn init_factors(
    count: usize,
    factors: usize,
    normal: &Normal<f64>,
    rng: &mut dyn RngCore,
) -> Array2<f64> {
    Array2::from_shape_fn((count, factors), |_| normal.sample(&mut *rng))
}
