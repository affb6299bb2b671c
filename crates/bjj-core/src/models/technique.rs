// ABOUTME: Technique and category models for the catalog
// ABOUTME: TechniqueCategory carries the display names used in storage and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Technique category
///
/// Declaration order is the canonical catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechniqueCategory {
    /// Arm, shoulder, and neck attacks
    #[serde(rename = "Upper Body")]
    UpperBody,
    /// Leg locks and lower body control
    #[serde(rename = "Lower Body")]
    LowerBody,
    /// Chokes and finishing techniques
    #[serde(rename = "Submissions")]
    Submissions,
    /// Techniques that bring the fight to the ground
    #[serde(rename = "Takedowns")]
    Takedowns,
    /// Guard retention, recovery, and attacks
    #[serde(rename = "Guard")]
    Guard,
}

impl TechniqueCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 5] = [
        Self::UpperBody,
        Self::LowerBody,
        Self::Submissions,
        Self::Takedowns,
        Self::Guard,
    ];

    /// Human-readable category name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::Submissions => "Submissions",
            Self::Takedowns => "Takedowns",
            Self::Guard => "Guard",
        }
    }
}

impl fmt::Display for TechniqueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TechniqueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|category| category.display_name().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown technique category: {s}"))
    }
}

/// A named technique and the category it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Technique {
    /// Unique technique name, e.g. `"Gi: Armbar"`
    pub name: String,
    /// The single category this technique belongs to
    pub category: TechniqueCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "upper body".parse::<TechniqueCategory>(),
            Ok(TechniqueCategory::UpperBody)
        );
        assert_eq!(
            "LOWER_BODY".parse::<TechniqueCategory>(),
            Ok(TechniqueCategory::LowerBody)
        );
        assert!("Sweeps".parse::<TechniqueCategory>().is_err());
    }

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&TechniqueCategory::Takedowns).unwrap();
        assert_eq!(json, "\"Takedowns\"");
        let parsed: TechniqueCategory = serde_json::from_str("\"Upper Body\"").unwrap();
        assert_eq!(parsed, TechniqueCategory::UpperBody);
    }
}
