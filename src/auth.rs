// ABOUTME: Username/password credentials backed by bcrypt hashes in the users table
// ABOUTME: Registration, login into a Session, and blocking-safe hash helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! # Credentials
//!
//! bcrypt is CPU-bound, so hashing and verification run on tokio's blocking
//! pool. A failed login never reveals whether the username or the password
//! was wrong.

use crate::database::Database;
use bjj_core::constants::auth::INVALID_CREDENTIALS;
use bjj_core::errors::{AppError, AppResult};
use bjj_core::models::{Session, UserProfile};
use tracing::{info, warn};

/// Hash `password` with bcrypt at `cost`
///
/// # Errors
///
/// Returns an internal error if hashing fails or the blocking task panics
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
}

/// Check `password` against a stored bcrypt hash
///
/// # Errors
///
/// Returns an internal error if the hash is malformed or the blocking task panics
pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password verification error: {e}")))
}

/// Registration and login against the users table
#[derive(Clone)]
pub struct CredentialService {
    database: Database,
    bcrypt_cost: u32,
}

impl CredentialService {
    /// Create a credential service hashing at `bcrypt_cost`
    #[must_use]
    pub const fn new(database: Database, bcrypt_cost: u32) -> Self {
        Self {
            database,
            bcrypt_cost,
        }
    }

    /// Register a new user and return their id
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty username or password,
    /// `ResourceAlreadyExists` if the username is taken, or a storage error
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        profile: &UserProfile,
    ) -> AppResult<i64> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::missing_field("Username"));
        }
        if password.is_empty() {
            return Err(AppError::missing_field("Password"));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let user_id = self
            .database
            .add_user(username, &password_hash, profile)
            .await?;

        info!(user_id, username, level = %profile.level, "User registered");
        Ok(user_id)
    }

    /// Verify credentials and open a session
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` ("Invalid username or password") on any
    /// credential mismatch, or a storage error
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let username = username.trim();
        match self.database.verify_user(username, password).await? {
            Some(user_id) => {
                info!(user_id, username, "User logged in");
                Ok(Session {
                    user_id,
                    username: username.to_owned(),
                })
            }
            None => {
                warn!(username, "Login failed");
                Err(AppError::auth_invalid(INVALID_CREDENTIALS))
            }
        }
    }
}
