// ABOUTME: Error types raised by the rating pipeline and the recommendation engine
// ABOUTME: Covers training failures, unknown techniques, and out-of-range ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use crate::constants::ratings::{MAX_RATING, MIN_RATING};
use thiserror::Error;

/// Errors from rating writes and model training.
///
/// Falling back to random recommendations when no ratings exist is a
/// defined engine state, not an error, so it has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommenderError {
    /// The latent-factor fit failed; the previous model is still in place
    #[error("model training failed: {reason}")]
    ModelTrainingFailure {
        /// Why the fit was rejected
        reason: String,
    },

    /// A rating referenced a technique missing from the catalog
    #[error("unknown technique: {name}")]
    UnknownTechnique {
        /// The rejected technique name
        name: String,
    },

    /// A rating value fell outside the accepted scale
    #[error(
        "rating {value} is outside the accepted range {min}..={max}",
        min = MIN_RATING,
        max = MAX_RATING
    )]
    InvalidRatingValue {
        /// The rejected value
        value: i64,
    },
}

impl RecommenderError {
    /// Create a training failure with the given reason
    pub fn training(reason: impl Into<String>) -> Self {
        Self::ModelTrainingFailure {
            reason: reason.into(),
        }
    }

    /// Create an unknown technique error
    pub fn unknown_technique(name: impl Into<String>) -> Self {
        Self::UnknownTechnique { name: name.into() }
    }
}
