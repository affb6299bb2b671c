// ABOUTME: User, profile, and session models
// ABOUTME: SkillLevel drives the level-dependent sections of generated training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experience level of a practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// New to the sport
    #[default]
    Beginner,
    /// Comfortable with fundamentals
    Intermediate,
    /// Competition-level experience
    Advanced,
}

impl SkillLevel {
    /// Lowercase name as stored in the database
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized name used in plan headers
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown level '{other}' (expected beginner, intermediate, or advanced)"
            )),
        }
    }
}

/// Training focus and level set at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Primary skill focus, free text (e.g. "guard")
    pub skill: String,
    /// Experience level
    pub level: SkillLevel,
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Database identifier
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Skill focus and level
    pub profile: UserProfile,
}

/// Proof of a successful login, required by every per-user operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated user id
    pub user_id: i64,
    /// Authenticated username
    pub username: String,
}
