// ABOUTME: User management database operations
// ABOUTME: Handles registration rows, credential lookup, and profile updates

use super::Database;
use crate::auth::verify_password;
use bjj_core::errors::{AppError, AppResult};
use bjj_core::models::{SkillLevel, User, UserProfile};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                skill TEXT NOT NULL DEFAULT '',
                level TEXT NOT NULL DEFAULT 'beginner'
                    CHECK (level IN ('beginner', 'intermediate', 'advanced'))
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a user with an already-hashed password
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the username is taken, or a
    /// database error
    pub async fn add_user(
        &self,
        username: &str,
        password_hash: &str,
        profile: &UserProfile,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, password, skill, level) VALUES ($1, $2, $3, $4)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(&profile.skill)
        .bind(profile.level.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db_error| db_error.is_unique_violation());
            if duplicate {
                AppError::already_exists(format!("User '{username}'"))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Look up a user by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored level is unreadable
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password, skill, level FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Check a username/password pair, returning the user id on success
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the hash verification itself fails
    pub async fn verify_user(&self, username: &str, password: &str) -> AppResult<Option<i64>> {
        let Some(user) = self.get_user_by_username(username).await? else {
            return Ok(None);
        };

        let valid = verify_password(password, &user.password_hash).await?;
        Ok(valid.then_some(user.id))
    }

    /// Skill focus and level for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn get_user_info(&self, user_id: i64) -> AppResult<UserProfile> {
        let row = sqlx::query("SELECT skill, level FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;

        Ok(UserProfile {
            skill: row.get("skill"),
            level: parse_level(row.get("level"))?,
        })
    }

    /// Replace a user's skill focus and level
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn update_user_profile(&self, user_id: i64, profile: &UserProfile) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET skill = $1, level = $2 WHERE id = $3")
            .bind(&profile.skill)
            .bind(profile.level.as_str())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password"),
        profile: UserProfile {
            skill: row.get("skill"),
            level: parse_level(row.get("level"))?,
        },
    })
}

fn parse_level(raw: &str) -> AppResult<SkillLevel> {
    raw.parse()
        .map_err(|e: String| AppError::database(format!("Corrupt level column: {e}")))
}
