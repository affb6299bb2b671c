// ABOUTME: Recommendation engine configuration with validated defaults
// ABOUTME: Latent-factor hyper-parameters, default list size, and optional RNG seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Recommender Configuration
//!
//! Defaults reproduce the fixed configuration of the original recommender:
//! 20 factors, 20 epochs, learning rate 0.005, regularization 0.02.

use bjj_core::constants::{model, recommendation};
use bjj_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Hyper-parameters for the latent-factor fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatentFactorConfig {
    /// Number of latent factors per user and technique
    pub factors: usize,
    /// Number of SGD passes over the rating set
    pub epochs: usize,
    /// SGD step size
    pub learning_rate: f64,
    /// L2 regularization strength
    pub regularization: f64,
    /// Mean of the factor initialization distribution
    pub init_mean: f64,
    /// Standard deviation of the factor initialization distribution
    pub init_std_dev: f64,
}

impl Default for LatentFactorConfig {
    fn default() -> Self {
        Self {
            factors: model::DEFAULT_FACTORS,
            epochs: model::DEFAULT_EPOCHS,
            learning_rate: model::DEFAULT_LEARNING_RATE,
            regularization: model::DEFAULT_REGULARIZATION,
            init_mean: model::INIT_MEAN,
            init_std_dev: model::INIT_STD_DEV,
        }
    }
}

impl LatentFactorConfig {
    /// Validate hyper-parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or outside its usable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factors == 0 {
            return Err(ConfigError::InvalidRange("factors must be at least 1"));
        }
        if self.epochs == 0 {
            return Err(ConfigError::InvalidRange("epochs must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::InvalidRange(
                "learning_rate must be a positive finite number",
            ));
        }
        if !(self.regularization.is_finite() && self.regularization >= 0.0) {
            return Err(ConfigError::InvalidRange(
                "regularization must be a non-negative finite number",
            ));
        }
        if !(self.init_mean.is_finite() && self.init_std_dev.is_finite() && self.init_std_dev >= 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "init_std_dev must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Top-level recommender configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Latent-factor fit parameters
    pub model: LatentFactorConfig,
    /// List size used when the caller does not pass one
    pub default_top_k: usize,
    /// Seed for the engine's random source; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            model: LatentFactorConfig::default(),
            default_top_k: recommendation::DEFAULT_TOP_K,
            seed: None,
        }
    }
}

impl RecommenderConfig {
    /// Validate the nested model configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the model configuration is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()
    }
}
