// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
// ABOUTME: Command modules for bjj-cli and the shared credential arguments
// ABOUTME: Every per-user command logs in first and runs against the resulting session

pub mod account;
pub mod catalog;
pub mod plans;
pub mod ratings;

use bjj_recommender::{errors::AppResult, models::Session, services::RecommenderService};
use clap::Args;

/// Username and password accepted by every per-user command
#[derive(Args)]
pub struct Credentials {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

/// Open a session for `credentials`
pub async fn login(service: &RecommenderService, credentials: &Credentials) -> AppResult<Session> {
    service
        .login(&credentials.username, &credentials.password)
        .await
}
