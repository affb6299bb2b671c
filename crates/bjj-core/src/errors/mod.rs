// ABOUTME: Unified error handling with standard error codes for the BJJ recommender
// ABOUTME: AppError wraps domain errors (recommender, catalog, config, database) for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! # Unified Error Handling System
//!
//! Domain modules raise their own `thiserror` enums ([`RecommenderError`],
//! [`CatalogError`], [`ConfigError`]). Everything that reaches the
//! interactive layer is converted into an [`AppError`] carrying an
//! [`ErrorCode`], which the CLI maps to a message and an exit status.

mod catalog;
mod config;
#[cfg(feature = "database-errors")]
mod database;
mod recommender;

pub use catalog::CatalogError;
pub use config::ConfigError;
pub use recommender::RecommenderError;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// Username or password did not verify
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Value outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Referenced resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Resource with this identifier already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Model (7000-7999)
    /// Latent-factor model could not be fit
    #[serde(rename = "MODEL_TRAINING_FAILED")]
    ModelTrainingFailed = 7000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Storage layer failure
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// Data serialization/deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status used by the CLI for this error class
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::AuthInvalid => 3,
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::ValueOutOfRange
            | Self::ResourceNotFound
            | Self::ResourceAlreadyExists => 2,
            Self::ConfigError | Self::ConfigInvalid => 78,
            Self::ModelTrainingFailed
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthInvalid => "The provided credentials are invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ModelTrainingFailed => "The recommendation model could not be trained",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid credentials
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{} is required", field.into()),
        )
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body for `--json` output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
        }
    }
}

impl From<RecommenderError> for AppError {
    fn from(error: RecommenderError) -> Self {
        let code = match &error {
            RecommenderError::ModelTrainingFailure { .. } => ErrorCode::ModelTrainingFailed,
            RecommenderError::UnknownTechnique { .. } => ErrorCode::InvalidInput,
            RecommenderError::InvalidRatingValue { .. } => ErrorCode::ValueOutOfRange,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Io { .. } | CatalogError::Json(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::AuthInvalid.exit_code(), 3);
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 2);
        assert_eq!(ErrorCode::ModelTrainingFailed.exit_code(), 1);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
    }

    #[test]
    fn test_recommender_error_mapping() {
        let error: AppError = RecommenderError::UnknownTechnique {
            name: "Gi: Made-Up Move".into(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("Gi: Made-Up Move"));
        assert!(error.source().is_some());

        let error: AppError = RecommenderError::InvalidRatingValue { value: 9 }.into();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::auth_invalid("Invalid username or password");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert!(json.contains("AUTH_INVALID"));
        assert!(json.contains("Invalid username or password"));
    }

    #[test]
    fn test_every_code_has_exit_status_and_description() {
        let codes = [
            ErrorCode::AuthInvalid,
            ErrorCode::InvalidInput,
            ErrorCode::MissingRequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::ResourceNotFound,
            ErrorCode::ResourceAlreadyExists,
            ErrorCode::ConfigError,
            ErrorCode::ConfigInvalid,
            ErrorCode::ModelTrainingFailed,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::SerializationError,
        ];
        for code in codes {
            assert_ne!(code.exit_code(), 0);
            assert!(!code.description().is_empty());
        }
        // Sessions are required by type, so there is no "log in first" code
        assert!(serde_json::from_str::<ErrorCode>("\"AUTH_REQUIRED\"").is_err());
    }
}
