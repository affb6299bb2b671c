// ABOUTME: Technique table operations
// ABOUTME: Seeds catalog techniques idempotently and resolves technique names to row ids

use super::Database;
use bjj_core::errors::{AppError, AppResult};
use bjj_core::models::{Technique, TechniqueCategory};
use sqlx::Row;
use tracing::debug;

impl Database {
    /// Create the techniques table
    pub(super) async fn migrate_techniques(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS techniques (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                category TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert every catalog technique not already present
    pub(super) async fn seed_techniques(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        for technique in self.catalog.all() {
            sqlx::query("INSERT OR IGNORE INTO techniques (name, category) VALUES ($1, $2)")
                .bind(&technique.name)
                .bind(technique.category.display_name())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        debug!(count = self.catalog.len(), "technique table seeded");
        Ok(())
    }

    /// Insert a technique if absent and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or lookup fails
    pub async fn add_technique(&self, name: &str, category: TechniqueCategory) -> AppResult<i64> {
        sqlx::query("INSERT OR IGNORE INTO techniques (name, category) VALUES ($1, $2)")
            .bind(name)
            .bind(category.display_name())
            .execute(&self.pool)
            .await?;

        self.get_technique_id(name)
            .await?
            .ok_or_else(|| AppError::internal(format!("Technique '{name}' missing after insert")))
    }

    /// Row id of a technique by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_technique_id(&self, name: &str) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM techniques WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    /// Every stored technique, by category then name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored category is unknown
    pub async fn list_techniques(&self) -> AppResult<Vec<Technique>> {
        let rows = sqlx::query("SELECT name, category FROM techniques ORDER BY category, name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> AppResult<Technique> {
                let category: &str = row.get("category");
                Ok(Technique {
                    name: row.get("name"),
                    category: category.parse().map_err(|e: String| {
                        AppError::database(format!("Corrupt category column: {e}"))
                    })?,
                })
            })
            .collect()
    }
}
