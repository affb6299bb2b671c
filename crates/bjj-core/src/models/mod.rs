// ABOUTME: Core data models for techniques, users, sessions, and ratings
// ABOUTME: Re-exports the model types used by storage, engine, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

mod rating;
mod technique;
mod user;

pub use rating::{Rating, RatingScore};
pub use technique::{Technique, TechniqueCategory};
pub use user::{Session, SkillLevel, User, UserProfile};
