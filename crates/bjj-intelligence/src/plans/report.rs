// ABOUTME: Combined training report rendered from a recommendation list
// ABOUTME: Recommended techniques followed by periodized, weekly, and S&C plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use super::{create_periodized_plan, create_sc_plan, create_weekly_plan, StrengthMethod};
use bjj_core::models::UserProfile;
use bjj_core::TechniqueCatalog;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Everything generated for one recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingReport {
    /// Top-K technique names, best first
    pub recommended: Vec<String>,
    /// Periodized plan lines
    pub periodized_plan: Vec<String>,
    /// Weekly plan lines
    pub weekly_plan: Vec<String>,
    /// Strength & conditioning method used for `sc_plan`
    pub method: StrengthMethod,
    /// Rendered strength & conditioning plan
    pub sc_plan: String,
}

impl TrainingReport {
    /// Generate every plan for `profile` from the recommendation list
    pub fn generate<R>(
        catalog: &TechniqueCatalog,
        profile: &UserProfile,
        recommended: Vec<String>,
        weaknesses: &[String],
        method: StrengthMethod,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let periodized_plan = create_periodized_plan(profile.level, weaknesses, rng);
        let weekly_plan = create_weekly_plan(catalog, &recommended, weaknesses, rng);
        let sc_plan = create_sc_plan(method, profile, rng);
        Self {
            recommended,
            periodized_plan,
            weekly_plan,
            method,
            sc_plan,
        }
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recommended techniques:")?;
        for technique in &self.recommended {
            writeln!(f, "- {technique}")?;
        }

        writeln!(f, "\nPeriodized Training Plan:")?;
        for line in &self.periodized_plan {
            writeln!(f, "{line}")?;
        }

        writeln!(f, "\nWeekly Training Plan:")?;
        for line in &self.weekly_plan {
            writeln!(f, "{line}")?;
        }

        writeln!(f, "\nStrength & Conditioning Plan ({}):", self.method)?;
        f.write_str(&self.sc_plan)
    }
}
