// ABOUTME: Conversion from sqlx errors into the unified AppError
// ABOUTME: Maps unique-constraint violations to ResourceAlreadyExists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let code = match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                ErrorCode::ResourceAlreadyExists
            }
            sqlx::Error::RowNotFound => ErrorCode::ResourceNotFound,
            _ => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
