// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors
// ABOUTME: Helper modules for bjj-cli
// ABOUTME: Provides text and JSON output formatting

pub mod display;
