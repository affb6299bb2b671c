// ABOUTME: Error types for building and loading the technique catalog
// ABOUTME: Reports duplicate or empty technique names and unreadable catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A technique name appears more than once
    #[error("technique '{name}' is listed more than once")]
    DuplicateTechnique {
        /// The repeated name
        name: String,
    },

    /// A technique name was blank
    #[error("category '{category}' contains an empty technique name")]
    EmptyName {
        /// Category holding the blank entry
        category: String,
    },

    /// The catalog had no techniques at all
    #[error("technique catalog is empty")]
    Empty,

    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catalog file was not valid JSON for the expected shape
    #[error("invalid catalog file: {0}")]
    Json(#[from] serde_json::Error),
}
