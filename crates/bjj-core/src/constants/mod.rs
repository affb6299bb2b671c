// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for ratings, the default catalog, and model hyper-parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Rating scale bounds
pub mod ratings {
    /// Lowest accepted rating value
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating value
    pub const MAX_RATING: u8 = 5;
}

/// Latent-factor model defaults
pub mod model {
    /// Number of latent factors per user and technique
    pub const DEFAULT_FACTORS: usize = 20;
    /// Number of passes over the full rating set
    pub const DEFAULT_EPOCHS: usize = 20;
    /// SGD learning rate shared by biases and factors
    pub const DEFAULT_LEARNING_RATE: f64 = 0.005;
    /// L2 regularization shared by biases and factors
    pub const DEFAULT_REGULARIZATION: f64 = 0.02;
    /// Mean of the normal distribution used to initialize factors
    pub const INIT_MEAN: f64 = 0.0;
    /// Standard deviation of the normal distribution used to initialize factors
    pub const INIT_STD_DEV: f64 = 0.1;
}

/// Recommendation defaults
pub mod recommendation {
    /// Number of techniques returned when the caller does not ask for a specific count
    pub const DEFAULT_TOP_K: usize = 5;
}

/// Service names used for structured logging
pub mod service_names {
    /// Name reported by the CLI and logging setup
    pub const BJJ_RECOMMENDER: &str = "bjj-recommender";
}

/// Environment variable names read at startup
pub mod env_config {
    /// SQLite connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Optional JSON catalog file replacing the built-in table
    pub const CATALOG_PATH: &str = "BJJ_CATALOG_PATH";
    /// Fixed seed for recommendation and plan randomness
    pub const RECOMMENDER_SEED: &str = "BJJ_RECOMMENDER_SEED";
    /// List size used when `--top-k` is not given
    pub const DEFAULT_TOP_K: &str = "BJJ_DEFAULT_TOP_K";
    /// bcrypt work factor for new password hashes
    pub const BCRYPT_COST: &str = "BJJ_BCRYPT_COST";
    /// Latent factors per user and technique
    pub const MODEL_FACTORS: &str = "BJJ_MODEL_FACTORS";
    /// SGD passes per retrain
    pub const MODEL_EPOCHS: &str = "BJJ_MODEL_EPOCHS";
    /// SGD learning rate
    pub const MODEL_LEARNING_RATE: &str = "BJJ_MODEL_LEARNING_RATE";
    /// L2 regularization
    pub const MODEL_REGULARIZATION: &str = "BJJ_MODEL_REGULARIZATION";
}

/// On-disk storage defaults
pub mod storage {
    /// Directory created under the platform data dir
    pub const DATA_DIR_NAME: &str = "bjj-recommender";
    /// SQLite file name
    pub const DATABASE_FILE: &str = "bjj_recommender.db";
}

/// Credential rules
pub mod auth {
    /// Lowest bcrypt cost the hashing library accepts
    pub const MIN_BCRYPT_COST: u32 = 4;
    /// Highest bcrypt cost the hashing library accepts
    pub const MAX_BCRYPT_COST: u32 = 31;
    /// Message for every failed login, whether the username or password was wrong
    pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
}

/// Default technique table, in category order
pub mod catalog {
    /// Upper body techniques
    pub const UPPER_BODY: &[&str] = &[
        "Gi: Armbar",
        "Gi: Triangle Choke",
        "No-Gi: Kimura",
        "No-Gi: Rear Naked Choke",
    ];

    /// Lower body techniques
    pub const LOWER_BODY: &[&str] = &[
        "Gi: Kneebar",
        "Gi: Footlock",
        "No-Gi: Heelhook",
        "No-Gi: Ankle Lock",
    ];

    /// Submission techniques
    pub const SUBMISSIONS: &[&str] = &[
        "Gi: Ezekiel Choke",
        "Gi: Bow and Arrow Choke",
        "No-Gi: Guillotine",
        "No-Gi: D'Arce Choke",
    ];

    /// Takedown techniques
    pub const TAKEDOWNS: &[&str] = &[
        "Gi: Double Leg",
        "Gi: Single Leg",
        "No-Gi: Ankle Pick",
        "No-Gi: Blast Double",
    ];

    /// Guard techniques
    pub const GUARD: &[&str] = &[
        "Gi: Closed Guard",
        "Gi: Spider Guard",
        "No-Gi: Butterfly Guard",
        "No-Gi: X-Guard",
    ];
}
