// ABOUTME: Rating model and the validated 1-5 rating score
// ABOUTME: Out-of-range values are rejected before they reach any store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use crate::constants::ratings::{MAX_RATING, MIN_RATING};
use crate::errors::RecommenderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rating value guaranteed to lie in `1..=5`
///
/// # Examples
///
/// ```rust
/// use bjj_core::models::RatingScore;
///
/// let score = RatingScore::try_from(4).unwrap();
/// assert_eq!(score.value(), 4);
/// assert!(RatingScore::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RatingScore(u8);

impl RatingScore {
    /// The raw value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The value as a float for model training
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for RatingScore {
    type Error = RecommenderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RecommenderError::InvalidRatingValue { value })
        }
    }
}

impl From<RatingScore> for i64 {
    fn from(score: RatingScore) -> Self {
        Self::from(score.0)
    }
}

impl fmt::Display for RatingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's rating of one technique
///
/// `(user_id, technique)` is the identity; a later write with the same pair
/// replaces the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating user
    pub user_id: i64,
    /// Rated technique name
    pub technique: String,
    /// Score in `1..=5`
    pub score: RatingScore,
}

impl Rating {
    /// Create a rating from already-validated parts
    pub fn new(user_id: i64, technique: impl Into<String>, score: RatingScore) -> Self {
        Self {
            user_id,
            technique: technique.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_score_bounds() {
        assert!(RatingScore::try_from(0).is_err());
        assert!(RatingScore::try_from(1).is_ok());
        assert!(RatingScore::try_from(5).is_ok());
        assert_eq!(
            RatingScore::try_from(-3),
            Err(RecommenderError::InvalidRatingValue { value: -3 })
        );
    }

    #[test]
    fn test_rating_score_deserialization_validates() {
        let score: RatingScore = serde_json::from_str("3").unwrap();
        assert_eq!(score.value(), 3);
        assert!(serde_json::from_str::<RatingScore>("7").is_err());
    }
}
