// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
// ABOUTME: Output formatting helpers for bjj-cli
// ABOUTME: Provides consistent text and JSON display for results and errors

use bjj_recommender::{
    errors::{AppError, AppResult, ErrorResponse},
    intelligence::plans::StrengthMethod,
    models::{TechniqueCategory, UserProfile},
    TechniqueCatalog,
};
use serde::Serialize;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a failed command on stderr
pub fn display_error(error: &AppError, json: bool) {
    if json {
        let body = ErrorResponse::from(error);
        match serde_json::to_string_pretty(&body) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(_) => eprintln!("Error: {error}"),
        }
        return;
    }
    eprintln!("Error: {error}");
}

/// Display user registration success
pub fn display_registered(username: &str, user_id: i64, profile: &UserProfile) {
    println!("\nUser Registered Successfully!");
    println!("{}", "=".repeat(50));
    println!("   Username: {username}");
    println!("   User ID: {user_id}");
    println!("   Skill Focus: {}", profile.skill);
    println!("   Level: {}", profile.level.title());

    println!("\nNEXT STEPS:");
    println!("1. List the catalog: bjj-cli techniques");
    println!("2. Rate techniques you know: bjj-cli rate --technique \"Gi: Armbar\" --rating 4 ...");
    println!("3. Ask for recommendations: bjj-cli recommend ...");
}

/// Display a user's profile
pub fn display_profile(username: &str, profile: &UserProfile, updated: bool) {
    if updated {
        println!("\nProfile Updated!");
    } else {
        println!("\nProfile");
    }
    println!("{}", "=".repeat(50));
    println!("   Username: {username}");
    println!("   Skill Focus: {}", profile.skill);
    println!("   Level: {}", profile.level.title());
}

/// Confirm a stored rating
pub fn display_rating_saved(technique: &str, rating: i64) {
    println!("Rated '{technique}' {rating}/5. Recommendations updated.");
}

/// Display a recommendation list with each technique's category
pub fn display_recommendations(catalog: &TechniqueCatalog, picks: &[String], trained: bool) {
    println!("\nRecommended techniques:");
    println!("{}", "=".repeat(50));
    if picks.is_empty() {
        println!("   You have rated every technique in the catalog.");
        return;
    }
    for (index, technique) in picks.iter().enumerate() {
        let category = catalog
            .category_of(technique)
            .map_or("", TechniqueCategory::display_name);
        println!("{:>3}. {technique} ({category})", index + 1);
    }
    if !trained {
        println!("\nNo ratings yet: these are random picks. Rate techniques to personalize them.");
    }
}

/// Display the catalog grouped by category
pub fn display_catalog(catalog: &TechniqueCatalog) {
    println!("\nTechnique Catalog ({} techniques)", catalog.len());
    println!("{}", "=".repeat(50));
    for category in TechniqueCategory::ALL {
        println!("{category}:");
        for name in catalog.techniques_in(category) {
            println!("   - {name}");
        }
    }
}

/// Display the strength & conditioning methods
pub fn display_methods() {
    println!("\nStrength & Conditioning Methods");
    println!("{}", "=".repeat(50));
    for method in StrengthMethod::ALL {
        println!("{:<16} {}", method.slug(), method.name());
        println!("{:<16} {}", "", method.description());
    }
}
