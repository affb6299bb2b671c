// ABOUTME: Templated training plan generators fed by the recommendation list
// ABOUTME: Periodized schedule, weekly schedule, strength & conditioning plan, combined report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! # Training Plans
//!
//! Pure text rendering. Generators never feed back into the engine; every
//! random choice (weakness emphasis, exercise picks, catalog top-ups) is
//! drawn from the RNG passed in, so output is reproducible under a seed.

/// Multi-week mat schedule
pub mod periodized;
/// Combined report
pub mod report;
/// Strength & conditioning methods and plan rendering
pub mod strength;
/// One-week mat schedule built around recommended techniques
pub mod weekly;

pub use periodized::{create_periodized_plan, periodized_weeks};
pub use report::TrainingReport;
pub use strength::{create_sc_plan, StrengthMethod};
pub use weekly::create_weekly_plan;

use rand::seq::SliceRandom;
use rand::Rng;

/// Split a comma-separated weakness list, trimming entries and dropping blanks
#[must_use]
pub fn parse_weaknesses(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Uniform pick from a fixed option list
fn pick<'a, R>(options: &[&'a str], rng: &mut R) -> &'a str
where
    R: Rng + ?Sized,
{
    options.choose(rng).copied().unwrap_or_default()
}

/// Uniform pick from the user's weaknesses, if any were given
fn pick_weakness<'a, R>(weaknesses: &'a [String], rng: &mut R) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    weaknesses.choose(rng).map(String::as_str)
}
