// ABOUTME: End-to-end tests for the recommender service over SQLite
// ABOUTME: Covers login, rating validation, retraining, recommendations, and training reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bjj_recommender::{
    errors::ErrorCode,
    intelligence::{plans::StrengthMethod, RatingsStore},
    models::SkillLevel,
    services::RecommenderService,
};
use std::collections::HashSet;

#[tokio::test]
async fn test_register_and_login() {
    let service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();
    assert_eq!(session.username, "alice");

    let err = service.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.message, "Invalid username or password");

    let err = service.login("nobody", "password123").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_register_rejects_empty_credentials() {
    let service = common::create_test_service().await.unwrap();
    let profile = common::test_profile();

    let err = service.register("  ", "pw", &profile).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    let err = service.register("alice", "", &profile).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_out_of_range_rating_not_written() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    let err = service.rate(&session, "Gi: Armbar", 9).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    let err = service.rate(&session, "Gi: Armbar", 0).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    assert!(service.database().all_ratings().await.unwrap().is_empty());
    assert!(!service.engine().is_trained());
}

#[tokio::test]
async fn test_rate_retrains_and_excludes_rated() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    service.rate(&session, "Gi: Armbar", 5).await.unwrap();
    service.rate(&session, "Gi: Footlock", 5).await.unwrap();
    assert!(service.engine().is_trained());

    let picks = service.recommend(&session, Some(5)).await.unwrap();
    assert_eq!(picks.len(), 5);
    assert!(!picks.contains(&"Gi: Armbar".to_owned()));
    assert!(!picks.contains(&"Gi: Footlock".to_owned()));
    let distinct: HashSet<&String> = picks.iter().collect();
    assert_eq!(distinct.len(), 5);
    for pick in &picks {
        assert!(service.catalog().contains(pick));
    }
}

#[tokio::test]
async fn test_failed_startup_fit_keeps_service_untrained() {
    let mut seeded = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&seeded, "alice").await.unwrap();
    seeded.rate(&session, "Gi: Armbar", 5).await.unwrap();
    seeded.rate(&session, "Gi: Kneebar", 2).await.unwrap();

    let mut config = common::test_config();
    config.recommender.model.factors = 0;
    let mut service = RecommenderService::new(seeded.database().clone(), &config)
        .await
        .unwrap();
    assert!(!service.engine().is_trained());

    let session = service.login("alice", "password123").await.unwrap();
    assert_eq!(service.profile(&session).await.unwrap().level, SkillLevel::Intermediate);
    let picks = service.recommend(&session, Some(5)).await.unwrap();
    assert_eq!(picks.len(), 5);
    assert!(!picks.iter().any(|p| p == "Gi: Armbar" || p == "Gi: Kneebar"));

    let err = service.rate(&session, "Gi: Triangle Choke", 4).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ModelTrainingFailed);
    assert_eq!(service.database().all_ratings().await.unwrap().len(), 3);
    assert!(!service.engine().is_trained());
}

#[tokio::test]
async fn test_recommend_never_exceeds_unrated_count() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    let names: Vec<String> = service.catalog().names().map(str::to_owned).collect();
    for name in names.iter().take(17) {
        service.rate(&session, name, 3).await.unwrap();
    }

    let picks = service.recommend(&session, Some(10)).await.unwrap();
    assert_eq!(picks.len(), 3);
    for pick in &picks {
        assert!(!names[..17].contains(pick));
    }
}

#[tokio::test]
async fn test_untrained_recommendations_are_random_catalog_picks() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    for _ in 0..2 {
        let picks = service.recommend(&session, Some(3)).await.unwrap();
        let distinct: HashSet<&String> = picks.iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(picks.iter().all(|pick| service.catalog().contains(pick)));
    }

    // Default list size
    assert_eq!(service.recommend(&session, None).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_profile_update_changes_plan_length() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    let mut profile = service.profile(&session).await.unwrap();
    assert_eq!(profile.level, SkillLevel::Intermediate);
    profile.level = SkillLevel::Advanced;
    service.update_profile(&session, &profile).await.unwrap();

    let report = service
        .training_report(&session, &[], StrengthMethod::LinearPeriodization, None)
        .await
        .unwrap();
    assert_eq!(report.periodized_plan.len(), 8 * 8);
    assert!(report
        .sc_plan
        .starts_with("Linear Periodization Plan for Guard focused Advanced BJJ practitioner:"));
}

#[tokio::test]
async fn test_training_report_renders_every_section() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();
    service.rate(&session, "No-Gi: Heelhook", 4).await.unwrap();

    let weaknesses = vec!["escapes".to_owned()];
    let report = service
        .training_report(&session, &weaknesses, StrengthMethod::Conjugate, Some(4))
        .await
        .unwrap();

    assert_eq!(report.recommended.len(), 4);
    assert!(!report.recommended.contains(&"No-Gi: Heelhook".to_owned()));
    assert!(report
        .periodized_plan
        .iter()
        .any(|line| line == "  Weakness Focus: escapes"));

    let rendered = report.to_string();
    assert!(rendered.starts_with("Recommended techniques:\n"));
    assert!(rendered.contains("\nPeriodized Training Plan:"));
    assert!(rendered.contains("\nWeekly Training Plan:"));
    assert!(rendered.contains("Strength & Conditioning Plan (Conjugate Method (Westside Barbell)):"));
}

#[tokio::test]
async fn test_sc_plan_uses_profile() {
    let mut service = common::create_test_service().await.unwrap();
    let session = common::register_and_login(&service, "alice").await.unwrap();

    let plan = service
        .sc_plan(&session, StrengthMethod::BlockPeriodization)
        .await
        .unwrap();
    assert!(plan.starts_with(
        "Block Periodization Plan for Guard focused Intermediate BJJ practitioner:\n\n"
    ));
    assert!(plan.contains("Consult with a certified strength and conditioning coach"));
}
