// ABOUTME: Criterion benchmarks for the recommendation engine
// ABOUTME: Measures full retrain cost and top-k ranking over synthetic rating sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Criterion benchmarks for the recommendation engine.
//!
//! Every rating write triggers a full retrain, so retrain latency at
//! realistic store sizes is the number that matters.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use bjj_recommender::intelligence::{RecommendationEngine, RecommenderConfig};
use bjj_recommender::models::{Rating, RatingScore};
use bjj_recommender::TechniqueCatalog;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::sync::Arc;

/// Ratings each synthetic user leaves
const RATINGS_PER_USER: usize = 8;

#[allow(clippy::cast_possible_wrap)]
fn generate_ratings(catalog: &TechniqueCatalog, users: usize) -> Vec<Rating> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..users)
        .flat_map(|user| {
            let picks = catalog
                .names()
                .choose_multiple(&mut rng, RATINGS_PER_USER);
            picks
                .into_iter()
                .filter_map(|name| {
                    let score = RatingScore::try_from(rng.gen_range(1..=5_i64)).ok()?;
                    Some(Rating::new(user as i64 + 1, name, score))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn engine(catalog: &Arc<TechniqueCatalog>) -> RecommendationEngine {
    let config = RecommenderConfig {
        seed: Some(42),
        ..RecommenderConfig::default()
    };
    RecommendationEngine::new(Arc::clone(catalog), &config)
}

fn bench_retrain(c: &mut Criterion) {
    let catalog = Arc::new(TechniqueCatalog::default());
    let mut group = c.benchmark_group("retrain");

    for users in [10, 100, 1000] {
        let ratings = generate_ratings(&catalog, users);
        group.throughput(Throughput::Elements(ratings.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(users), &ratings, |b, ratings| {
            let mut engine = engine(&catalog);
            b.iter(|| engine.retrain_from(black_box(ratings)));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = Arc::new(TechniqueCatalog::default());
    let ratings = generate_ratings(&catalog, 100);
    let rated: HashSet<String> = ratings
        .iter()
        .filter(|rating| rating.user_id == 1)
        .map(|rating| rating.technique.clone())
        .collect();

    let mut group = c.benchmark_group("recommend");

    group.bench_function("trained_top_5", |b| {
        let mut engine = engine(&catalog);
        let _ = engine.retrain_from(&ratings);
        b.iter(|| engine.recommend_excluding(black_box(1), &rated, 5));
    });

    group.bench_function("untrained_fallback_top_5", |b| {
        let mut engine = engine(&catalog);
        b.iter(|| engine.recommend_excluding(black_box(1), &HashSet::new(), 5));
    });

    group.finish();
}

criterion_group!(benches, bench_retrain, bench_recommend);
criterion_main!(benches);
