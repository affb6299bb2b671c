// ABOUTME: Catalog listing commands for bjj-cli
// ABOUTME: Techniques by category and the available strength & conditioning methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use bjj_recommender::{
    errors::AppResult, intelligence::plans::StrengthMethod, models::TechniqueCategory,
    TechniqueCatalog,
};
use serde_json::{json, Map, Value};

use crate::helpers::display::{display_catalog, display_methods, print_json};

/// List every technique grouped by category
pub fn techniques(catalog: &TechniqueCatalog, json: bool) -> AppResult<()> {
    if json {
        let grouped: Map<String, Value> = TechniqueCategory::ALL
            .into_iter()
            .map(|category| {
                let names: Vec<&str> = catalog.techniques_in(category).collect();
                (category.display_name().to_owned(), json!(names))
            })
            .collect();
        return print_json(&grouped);
    }
    display_catalog(catalog);
    Ok(())
}

/// List the strength & conditioning methods and their CLI names
pub fn methods(json: bool) -> AppResult<()> {
    if json {
        let methods: Vec<Value> = StrengthMethod::ALL
            .into_iter()
            .map(|method| {
                json!({
                    "slug": method.slug(),
                    "name": method.name(),
                    "description": method.description(),
                })
            })
            .collect();
        return print_json(&methods);
    }
    display_methods();
    Ok(())
}
