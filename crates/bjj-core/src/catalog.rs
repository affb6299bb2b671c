// ABOUTME: Read-only technique catalog grouped by category
// ABOUTME: Built once at startup (default table or JSON file) and injected into the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

//! Technique catalog
//!
//! The catalog is reference data: it is validated on construction and never
//! mutated afterwards. Adding a technique means building a new catalog and
//! restarting.

use crate::constants::catalog::{GUARD, LOWER_BODY, SUBMISSIONS, TAKEDOWNS, UPPER_BODY};
use crate::errors::CatalogError;
use crate::models::{Technique, TechniqueCategory};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Category → ordered technique names, the on-disk catalog shape
pub type CatalogTable = BTreeMap<TechniqueCategory, Vec<String>>;

/// Validated, immutable set of techniques
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueCatalog {
    techniques: Vec<Technique>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TechniqueCatalog {
    /// Build a catalog from a category table
    ///
    /// # Errors
    ///
    /// Returns an error if a name is blank, a name appears twice (in the same
    /// or a different category), or the table holds no techniques.
    pub fn from_table(table: CatalogTable) -> Result<Self, CatalogError> {
        let mut techniques = Vec::new();
        let mut index = HashMap::new();

        for (category, names) in table {
            for name in names {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(CatalogError::EmptyName {
                        category: category.to_string(),
                    });
                }
                if index.contains_key(&name) {
                    return Err(CatalogError::DuplicateTechnique { name });
                }
                index.insert(name.clone(), techniques.len());
                techniques.push(Technique { name, category });
            }
        }

        if techniques.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { techniques, index })
    }

    /// Load a catalog from a JSON object of `{"Category": ["name", ...]}`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON of
    /// that shape, or fails the same validation as [`Self::from_table`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table: CatalogTable = serde_json::from_str(&raw)?;
        Self::from_table(table)
    }

    /// Whether `name` is a known technique
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a technique by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Technique> {
        self.index.get(name).map(|&position| &self.techniques[position])
    }

    /// Category of a technique, if known
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<TechniqueCategory> {
        self.get(name).map(|technique| technique.category)
    }

    /// Technique names in one category, in listed order
    pub fn techniques_in(&self, category: TechniqueCategory) -> impl Iterator<Item = &str> {
        self.techniques
            .iter()
            .filter(move |technique| technique.category == category)
            .map(|technique| technique.name.as_str())
    }

    /// Every technique, in category order then listed order
    #[must_use]
    pub fn all(&self) -> &[Technique] {
        &self.techniques
    }

    /// Every technique name, in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.techniques.iter().map(|technique| technique.name.as_str())
    }

    /// Number of techniques
    #[must_use]
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Always false for a constructed catalog; present for API symmetry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

impl Default for TechniqueCatalog {
    /// The built-in 20-technique table (5 categories × 4 techniques)
    fn default() -> Self {
        let techniques: Vec<Technique> = [
            (TechniqueCategory::UpperBody, UPPER_BODY),
            (TechniqueCategory::LowerBody, LOWER_BODY),
            (TechniqueCategory::Submissions, SUBMISSIONS),
            (TechniqueCategory::Takedowns, TAKEDOWNS),
            (TechniqueCategory::Guard, GUARD),
        ]
        .into_iter()
        .flat_map(|(category, names)| {
            names.iter().map(move |name| Technique {
                name: (*name).to_owned(),
                category,
            })
        })
        .collect();

        let index = techniques
            .iter()
            .enumerate()
            .map(|(position, technique)| (technique.name.clone(), position))
            .collect();

        Self { techniques, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = TechniqueCatalog::default();
        assert_eq!(catalog.len(), 20);
        for category in TechniqueCategory::ALL {
            assert_eq!(catalog.techniques_in(category).count(), 4);
        }
        assert_eq!(
            catalog.category_of("No-Gi: Heelhook"),
            Some(TechniqueCategory::LowerBody)
        );
        assert!(!catalog.contains("Gi: Made-Up Move"));
        assert_eq!(catalog.names().next(), Some("Gi: Armbar"));
    }

    #[test]
    fn test_serializes_techniques_without_index() {
        let json = serde_json::to_value(TechniqueCatalog::default()).unwrap();
        let techniques = json["techniques"].as_array().unwrap();
        assert_eq!(techniques.len(), 20);
        assert_eq!(techniques[0]["name"], "Gi: Armbar");
        assert_eq!(techniques[0]["category"], "Upper Body");
        assert!(json.get("index").is_none());
    }

    #[test]
    fn test_duplicate_across_categories_rejected() {
        let mut table = CatalogTable::new();
        table.insert(TechniqueCategory::UpperBody, vec!["Triangle".into()]);
        table.insert(TechniqueCategory::Submissions, vec!["Triangle".into()]);

        let result = TechniqueCatalog::from_table(table);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateTechnique { name }) if name == "Triangle"
        ));
    }

    #[test]
    fn test_blank_and_empty_tables_rejected() {
        let mut table = CatalogTable::new();
        table.insert(TechniqueCategory::Guard, vec!["  ".into()]);
        assert!(matches!(
            TechniqueCatalog::from_table(table),
            Err(CatalogError::EmptyName { .. })
        ));
        assert!(matches!(
            TechniqueCatalog::from_table(CatalogTable::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Guard": ["Gi: De La Riva", "No-Gi: Half Guard"], "Takedowns": ["Gi: Osoto Gari"]}}"#
        )
        .unwrap();

        let catalog = TechniqueCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        // BTreeMap keys follow category declaration order
        assert_eq!(catalog.all()[0].name, "Gi: Osoto Gari");
        assert_eq!(
            catalog.category_of("No-Gi: Half Guard"),
            Some(TechniqueCategory::Guard)
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = TechniqueCatalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/catalog.json"));
    }
}
