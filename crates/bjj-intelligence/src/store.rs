// ABOUTME: Ratings store abstraction consumed by the recommendation engine
// ABOUTME: Async upsert/scan trait plus an in-memory implementation backed by a BTreeMap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Ratings store
//!
//! The relation `(user_id, technique) → score` with upsert semantics. The
//! SQLite database in the application crate implements the same trait; the
//! in-memory store here is used by tests and by callers that do not need
//! persistence.

use async_trait::async_trait;
use bjj_core::errors::{AppError, AppResult, RecommenderError};
use bjj_core::models::{Rating, RatingScore};
use bjj_core::TechniqueCatalog;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use tracing::warn;

/// Persistent `(user, technique) → score` relation
#[async_trait]
pub trait RatingsStore: Send + Sync {
    /// Insert or replace the rating for `(user_id, technique)`
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error wrapping
    /// [`RecommenderError::UnknownTechnique`] when `technique` is not in the
    /// catalog (nothing is written), or a storage error.
    async fn upsert_rating(
        &self,
        user_id: i64,
        technique: &str,
        score: RatingScore,
    ) -> AppResult<()>;

    /// Every rating currently stored
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    async fn all_ratings(&self) -> AppResult<Vec<Rating>>;

    /// `(technique, score)` pairs rated by one user
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    async fn user_ratings(&self, user_id: i64) -> AppResult<Vec<(String, RatingScore)>>;
}

type RatingTable = BTreeMap<(i64, String), RatingScore>;

/// Ratings kept in process memory
///
/// Iteration order is `(user_id, technique)` ascending, which keeps model
/// training reproducible under a fixed seed.
#[derive(Debug)]
pub struct InMemoryRatingsStore {
    catalog: Arc<TechniqueCatalog>,
    ratings: RwLock<RatingTable>,
}

impl InMemoryRatingsStore {
    /// Create an empty store validating against `catalog`
    #[must_use]
    pub fn new(catalog: Arc<TechniqueCatalog>) -> Self {
        Self {
            catalog,
            ratings: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored ratings
    ///
    /// # Errors
    ///
    /// Returns an error if the lock was poisoned
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether no ratings are stored
    ///
    /// # Errors
    ///
    /// Returns an error if the lock was poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, RatingTable>> {
        self.ratings
            .read()
            .map_err(|_| AppError::internal("ratings lock poisoned"))
    }
}

#[async_trait]
impl RatingsStore for InMemoryRatingsStore {
    async fn upsert_rating(
        &self,
        user_id: i64,
        technique: &str,
        score: RatingScore,
    ) -> AppResult<()> {
        if !self.catalog.contains(technique) {
            warn!(user_id, technique, "rejected rating for unknown technique");
            return Err(RecommenderError::unknown_technique(technique).into());
        }

        self.ratings
            .write()
            .map_err(|_| AppError::internal("ratings lock poisoned"))?
            .insert((user_id, technique.to_owned()), score);
        Ok(())
    }

    async fn all_ratings(&self) -> AppResult<Vec<Rating>> {
        Ok(self
            .read()?
            .iter()
            .map(|((user_id, technique), score)| Rating::new(*user_id, technique.clone(), *score))
            .collect())
    }

    async fn user_ratings(&self, user_id: i64) -> AppResult<Vec<(String, RatingScore)>> {
        Ok(self
            .read()?
            .range((user_id, String::new())..)
            .take_while(|((owner, _), _)| *owner == user_id)
            .map(|((_, technique), score)| (technique.clone(), *score))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjj_core::errors::ErrorCode;

    fn score(value: i64) -> RatingScore {
        RatingScore::try_from(value).unwrap()
    }

    fn store() -> InMemoryRatingsStore {
        InMemoryRatingsStore::new(Arc::new(TechniqueCatalog::default()))
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_rating() {
        let store = store();
        store.upsert_rating(1, "Gi: Armbar", score(3)).await.unwrap();
        store.upsert_rating(1, "Gi: Armbar", score(5)).await.unwrap();

        let all = store.all_ratings().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], Rating::new(1, "Gi: Armbar", score(5)));
    }

    #[tokio::test]
    async fn test_unknown_technique_rejected_without_write() {
        let store = store();
        let error = store
            .upsert_rating(1, "Gi: Made-Up Move", score(4))
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_user_ratings_scoped_to_user() {
        let store = store();
        store.upsert_rating(1, "Gi: Armbar", score(5)).await.unwrap();
        store.upsert_rating(2, "Gi: Footlock", score(2)).await.unwrap();
        store.upsert_rating(2, "No-Gi: Kimura", score(4)).await.unwrap();
        store.upsert_rating(3, "Gi: Armbar", score(1)).await.unwrap();

        let rated = store.user_ratings(2).await.unwrap();
        assert_eq!(
            rated,
            vec![
                ("Gi: Footlock".to_owned(), score(2)),
                ("No-Gi: Kimura".to_owned(), score(4)),
            ]
        );
        assert!(store.user_ratings(42).await.unwrap().is_empty());
        assert_eq!(store.len().unwrap(), 4);
    }
}
