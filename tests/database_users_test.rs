// ABOUTME: Integration tests for user storage and credential checks
// ABOUTME: Covers duplicate usernames, password verification, and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bjj_recommender::{
    errors::ErrorCode,
    models::{SkillLevel, UserProfile},
};

#[tokio::test]
async fn test_create_and_get_user() {
    let db = common::create_test_database().await.unwrap();
    let user_id = common::create_test_user(&db, "alice").await.unwrap();

    let user = db
        .get_user_by_username("alice")
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(user.id, user_id);
    assert_eq!(user.profile, common::test_profile());
    assert_ne!(user.password_hash, "password123");

    assert!(db.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = common::create_test_database().await.unwrap();
    common::create_test_user(&db, "alice").await.unwrap();

    let err = common::create_test_user(&db, "alice").await.unwrap_err();
    let app_error = err
        .downcast_ref::<bjj_recommender::errors::AppError>()
        .expect("AppError");
    assert_eq!(app_error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_verify_user() {
    let db = common::create_test_database().await.unwrap();
    let user_id = common::create_test_user(&db, "alice").await.unwrap();

    assert_eq!(
        db.verify_user("alice", "password123").await.unwrap(),
        Some(user_id)
    );
    assert_eq!(db.verify_user("alice", "wrong").await.unwrap(), None);
    assert_eq!(db.verify_user("bob", "password123").await.unwrap(), None);
}

#[tokio::test]
async fn test_profile_update() {
    let db = common::create_test_database().await.unwrap();
    let user_id = common::create_test_user(&db, "alice").await.unwrap();

    let profile = UserProfile {
        skill: "leg locks".to_owned(),
        level: SkillLevel::Advanced,
    };
    db.update_user_profile(user_id, &profile).await.unwrap();
    assert_eq!(db.get_user_info(user_id).await.unwrap(), profile);

    let err = db.update_user_profile(999, &profile).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = db.get_user_info(999).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
