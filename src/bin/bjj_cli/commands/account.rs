// ABOUTME: Account commands for bjj-cli
// ABOUTME: Handles user registration and profile display or update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use bjj_recommender::{
    errors::AppResult,
    models::{SkillLevel, UserProfile},
    services::RecommenderService,
};
use serde_json::json;
use tracing::info;

use super::{login, Credentials};
use crate::helpers::display::{display_profile, display_registered, print_json};

/// Register a new user
pub async fn register(
    service: &RecommenderService,
    credentials: &Credentials,
    skill: String,
    level: SkillLevel,
    json: bool,
) -> AppResult<()> {
    let profile = UserProfile { skill, level };
    let user_id = service
        .register(&credentials.username, &credentials.password, &profile)
        .await?;

    if json {
        return print_json(&json!({
            "user_id": user_id,
            "username": credentials.username.trim(),
            "profile": profile,
        }));
    }
    display_registered(credentials.username.trim(), user_id, &profile);
    Ok(())
}

/// Show the stored profile, or update whichever fields were given
pub async fn profile(
    service: &RecommenderService,
    credentials: &Credentials,
    skill: Option<String>,
    level: Option<SkillLevel>,
    json: bool,
) -> AppResult<()> {
    let session = login(service, credentials).await?;
    let mut profile = service.profile(&session).await?;

    let updated = skill.is_some() || level.is_some();
    if updated {
        if let Some(skill) = skill {
            profile.skill = skill;
        }
        if let Some(level) = level {
            profile.level = level;
        }
        service.update_profile(&session, &profile).await?;
        info!(username = %session.username, "Profile updated");
    }

    if json {
        return print_json(&profile);
    }
    display_profile(&session.username, &profile, updated);
    Ok(())
}
