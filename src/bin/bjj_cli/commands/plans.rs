// ABOUTME: Training plan commands for bjj-cli
// ABOUTME: Renders the full training report or a standalone strength & conditioning plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use bjj_recommender::{
    errors::AppResult,
    intelligence::plans::{parse_weaknesses, StrengthMethod},
    services::RecommenderService,
};
use serde_json::json;

use super::{login, Credentials};
use crate::helpers::display::print_json;

/// Recommendations plus periodized, weekly, and S&C plans
pub async fn training_report(
    service: &mut RecommenderService,
    credentials: &Credentials,
    weaknesses: Option<&str>,
    method: StrengthMethod,
    top_k: Option<usize>,
    json: bool,
) -> AppResult<()> {
    let session = login(service, credentials).await?;
    let weaknesses = weaknesses.map(parse_weaknesses).unwrap_or_default();
    let report = service
        .training_report(&session, &weaknesses, method, top_k)
        .await?;

    if json {
        return print_json(&report);
    }
    println!("{report}");
    Ok(())
}

/// Strength & conditioning plan for the user's profile
pub async fn sc_plan(
    service: &mut RecommenderService,
    credentials: &Credentials,
    method: StrengthMethod,
    json: bool,
) -> AppResult<()> {
    let session = login(service, credentials).await?;
    let plan = service.sc_plan(&session, method).await?;

    if json {
        return print_json(&json!({ "method": method, "plan": plan }));
    }
    println!("{plan}");
    Ok(())
}
