// ABOUTME: Recommender service tying credentials, the ratings database, and the engine together
// ABOUTME: Every rating write triggers a full retrain before the call returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use crate::auth::CredentialService;
use crate::config::AppConfig;
use crate::database::Database;
use bjj_core::errors::AppResult;
use bjj_core::models::{RatingScore, Session, UserProfile};
use bjj_core::TechniqueCatalog;
use bjj_intelligence::plans::{create_sc_plan, StrengthMethod, TrainingReport};
use bjj_intelligence::{RatingsStore, RecommendationEngine, RecommenderConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Offset applied to the configured seed for the plan RNG, so plan picks and
/// engine sampling draw from different streams
const PLAN_SEED_OFFSET: u64 = 0x5eed;

/// One process's view of the recommender
///
/// Owns the engine exclusively; every mutating call takes `&mut self`, so a
/// call chain runs to completion before the next begins.
pub struct RecommenderService {
    database: Database,
    credentials: CredentialService,
    engine: RecommendationEngine,
    config: RecommenderConfig,
    plan_rng: ChaCha8Rng,
}

impl RecommenderService {
    /// Build the service and train the engine on whatever ratings are stored
    ///
    /// A failed initial fit is logged and the engine stays untrained, so
    /// accounts and random recommendations keep working. The next `rate`
    /// retrains and reports any failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial ratings scan fails
    pub async fn new(database: Database, config: &AppConfig) -> AppResult<Self> {
        let catalog = Arc::clone(database.catalog());
        let recommender = config.recommender.clone();
        let engine = RecommendationEngine::new(catalog, &recommender);
        let plan_rng = recommender.seed.map_or_else(ChaCha8Rng::from_entropy, |seed| {
            ChaCha8Rng::seed_from_u64(seed.wrapping_add(PLAN_SEED_OFFSET))
        });

        let mut service = Self {
            credentials: CredentialService::new(database.clone(), config.bcrypt_cost),
            database,
            engine,
            config: recommender,
            plan_rng,
        };
        let ratings = service.database.all_ratings().await?;
        if let Err(e) = service.engine.retrain_from(&ratings) {
            warn!(
                error = %e,
                rating_count = ratings.len(),
                "initial model training failed, serving untrained recommendations"
            );
        }
        Ok(service)
    }

    /// Technique catalog in use
    #[must_use]
    pub fn catalog(&self) -> &TechniqueCatalog {
        self.engine.catalog()
    }

    /// The underlying database
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// The recommendation engine
    #[must_use]
    pub const fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns an error for empty credentials or a taken username
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        profile: &UserProfile,
    ) -> AppResult<i64> {
        self.credentials.register(username, password, profile).await
    }

    /// Log in and obtain a session
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` on a credential mismatch
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        self.credentials.login(username, password).await
    }

    /// Current skill focus and level of the session's user
    ///
    /// # Errors
    ///
    /// Returns an error if the user no longer exists
    pub async fn profile(&self, session: &Session) -> AppResult<UserProfile> {
        self.database.get_user_info(session.user_id).await
    }

    /// Replace the session user's skill focus and level
    ///
    /// # Errors
    ///
    /// Returns an error if the user no longer exists
    pub async fn update_profile(&self, session: &Session, profile: &UserProfile) -> AppResult<()> {
        self.database
            .update_user_profile(session.user_id, profile)
            .await?;
        info!(user_id = session.user_id, level = %profile.level, "profile updated");
        Ok(())
    }

    /// Validate and store a rating, then retrain the engine on the full store
    ///
    /// The rating value is checked before anything touches the store. When
    /// the write succeeds but the fit fails, the rating stays stored and the
    /// previous model keeps serving.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a value outside 1..=5, `InvalidInput`
    /// for a technique not in the catalog, a storage error, or
    /// `ModelTrainingFailed`
    pub async fn rate(&mut self, session: &Session, technique: &str, value: i64) -> AppResult<()> {
        let score = RatingScore::try_from(value)?;
        self.database
            .upsert_rating(session.user_id, technique, score)
            .await?;
        info!(user_id = session.user_id, technique, score = %score, "rating saved");

        self.engine.retrain(&self.database).await
    }

    /// Top-`k` unrated techniques for the session user
    ///
    /// `None` uses the configured default list size.
    ///
    /// # Errors
    ///
    /// Returns an error if the user's ratings cannot be read
    pub async fn recommend(&mut self, session: &Session, k: Option<usize>) -> AppResult<Vec<String>> {
        let k = k.unwrap_or(self.config.default_top_k);
        let picks = self
            .engine
            .recommend(&self.database, session.user_id, k)
            .await?;
        debug!(user_id = session.user_id, count = picks.len(), "recommendations served");
        Ok(picks)
    }

    /// Recommendations plus periodized, weekly, and S&C plans in one report
    ///
    /// # Errors
    ///
    /// Returns an error if the profile or ratings cannot be read
    pub async fn training_report(
        &mut self,
        session: &Session,
        weaknesses: &[String],
        method: StrengthMethod,
        k: Option<usize>,
    ) -> AppResult<TrainingReport> {
        let profile = self.profile(session).await?;
        let recommended = self.recommend(session, k).await?;
        Ok(TrainingReport::generate(
            self.engine.catalog(),
            &profile,
            recommended,
            weaknesses,
            method,
            &mut self.plan_rng,
        ))
    }

    /// Strength & conditioning plan for the session user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read
    pub async fn sc_plan(&mut self, session: &Session, method: StrengthMethod) -> AppResult<String> {
        let profile = self.profile(session).await?;
        Ok(create_sc_plan(method, &profile, &mut self.plan_rng))
    }
}
