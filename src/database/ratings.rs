// ABOUTME: Rating table operations and the RatingsStore implementation
// ABOUTME: Last-write-wins upsert keyed by (user_id, technique_id) plus bulk scans for retraining

use super::Database;
use async_trait::async_trait;
use bjj_core::errors::{AppResult, RecommenderError};
use bjj_core::models::{Rating, RatingScore};
use bjj_intelligence::RatingsStore;
use sqlx::Row;
use tracing::{debug, warn};

impl Database {
    /// Create the ratings table
    pub(super) async fn migrate_ratings(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ratings (
                user_id INTEGER NOT NULL REFERENCES users(id),
                technique_id INTEGER NOT NULL REFERENCES techniques(id),
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                PRIMARY KEY (user_id, technique_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ratings_technique ON ratings(technique_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert or replace a user's rating for a catalog technique
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if `technique` is not in the catalog
    /// (nothing is written), or a database error (including an unknown user)
    pub async fn add_rating(
        &self,
        user_id: i64,
        technique: &str,
        score: RatingScore,
    ) -> AppResult<()> {
        if !self.catalog.contains(technique) {
            warn!(user_id, technique, "rejected rating for unknown technique");
            return Err(RecommenderError::unknown_technique(technique).into());
        }
        let technique_id = self
            .get_technique_id(technique)
            .await?
            .ok_or_else(|| RecommenderError::unknown_technique(technique))?;

        sqlx::query(
            r"
            INSERT INTO ratings (user_id, technique_id, rating) VALUES ($1, $2, $3)
            ON CONFLICT (user_id, technique_id) DO UPDATE SET rating = excluded.rating
            ",
        )
        .bind(user_id)
        .bind(technique_id)
        .bind(i64::from(score))
        .execute(&self.pool)
        .await?;

        debug!(user_id, technique, score = %score, "rating stored");
        Ok(())
    }

    /// `(technique, score)` pairs rated by one user, by technique name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is out of range
    pub async fn get_user_ratings(&self, user_id: i64) -> AppResult<Vec<(String, RatingScore)>> {
        let rows = sqlx::query(
            r"
            SELECT t.name, r.rating
            FROM ratings r
            JOIN techniques t ON r.technique_id = t.id
            WHERE r.user_id = $1
            ORDER BY t.name
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<(String, RatingScore)> {
                let score = RatingScore::try_from(row.get::<i64, _>("rating"))?;
                Ok((row.get("name"), score))
            })
            .collect()
    }

    /// Every stored rating, ordered by user then technique name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is out of range
    pub async fn get_all_ratings(&self) -> AppResult<Vec<Rating>> {
        let rows = sqlx::query(
            r"
            SELECT r.user_id, t.name, r.rating
            FROM ratings r
            JOIN techniques t ON r.technique_id = t.id
            ORDER BY r.user_id, t.name
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<Rating> {
                let score = RatingScore::try_from(row.get::<i64, _>("rating"))?;
                Ok(Rating::new(
                    row.get::<i64, _>("user_id"),
                    row.get::<String, _>("name"),
                    score,
                ))
            })
            .collect()
    }
}

#[async_trait]
impl RatingsStore for Database {
    async fn upsert_rating(
        &self,
        user_id: i64,
        technique: &str,
        score: RatingScore,
    ) -> AppResult<()> {
        self.add_rating(user_id, technique, score).await
    }

    async fn all_ratings(&self) -> AppResult<Vec<Rating>> {
        self.get_all_ratings().await
    }

    async fn user_ratings(&self, user_id: i64) -> AppResult<Vec<(String, RatingScore)>> {
        self.get_user_ratings(user_id).await
    }
}
