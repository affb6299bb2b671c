// ABOUTME: Rating and recommendation commands for bjj-cli
// ABOUTME: A rating write retrains the model before the command reports success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use bjj_recommender::{errors::AppResult, services::RecommenderService};
use serde_json::json;

use super::{login, Credentials};
use crate::helpers::display::{display_rating_saved, display_recommendations, print_json};

/// Store a rating and retrain
pub async fn rate(
    service: &mut RecommenderService,
    credentials: &Credentials,
    technique: &str,
    rating: i64,
    json: bool,
) -> AppResult<()> {
    let session = login(service, credentials).await?;
    service.rate(&session, technique, rating).await?;

    if json {
        return print_json(&json!({
            "username": session.username,
            "technique": technique,
            "rating": rating,
            "trained": service.engine().is_trained(),
        }));
    }
    display_rating_saved(technique, rating);
    Ok(())
}

/// Print the top unrated techniques for the user
pub async fn recommend(
    service: &mut RecommenderService,
    credentials: &Credentials,
    top_k: Option<usize>,
    json: bool,
) -> AppResult<()> {
    let session = login(service, credentials).await?;
    let picks = service.recommend(&session, top_k).await?;

    if json {
        return print_json(&picks);
    }
    display_recommendations(service.catalog(), &picks, service.engine().is_trained());
    Ok(())
}
