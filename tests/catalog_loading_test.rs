// ABOUTME: Integration tests for catalog lookups and collaborator-side loading
// ABOUTME: Built-in data, JSON parsing, file loading, and the shared instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use prakriti_advisor::errors::ErrorCode;
use prakriti_advisor::models::{Catalog, Dosha, FoodCategory, SuitabilityRating};
use prakriti_advisor::{catalog, catalog_store};
use std::io::Write;

const CATALOG_JSON: &str = r#"{
  "foods": [
    {
      "name": "Barley",
      "category": "grains",
      "calories_per_100g": 354.0,
      "protein_g": 12.5,
      "carbohydrates_g": 73.5,
      "fat_g": 2.3,
      "fiber_g": 17.3,
      "dosha_effects": { "vata": "moderate", "pitta": "good", "kapha": "excellent" },
      "micronutrients": { "iron": 3.6, "magnesium": 133.0 }
    }
  ],
  "recipes": []
}"#;

#[test]
fn test_builtin_catalog_lookups() {
    let catalog = catalog::builtin();
    assert!(!catalog.is_empty());

    let rice = catalog.food_named("BASMATI RICE").unwrap();
    assert_eq!(rice.category, FoodCategory::Grains);
    assert!((rice.calories_per_100g - 356.0).abs() < 1e-9);
    assert_eq!(
        rice.dosha_effects.for_dosha(Dosha::Kapha),
        SuitabilityRating::Moderate
    );

    assert!(catalog.food_named("Chocolate").is_none());
    assert!(!catalog.foods_in(FoodCategory::Pulses).is_empty());
}

#[test]
fn test_favorable_foods_are_filtered_and_ordered() {
    let catalog = catalog::builtin();
    let for_kapha = catalog.foods_favorable_for(Dosha::Kapha);
    assert!(!for_kapha.is_empty());

    // Excellent entries lead, and nothing below Good appears.
    let ratings: Vec<SuitabilityRating> = for_kapha
        .iter()
        .map(|food| food.dosha_effects.for_dosha(Dosha::Kapha))
        .collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(ratings.iter().all(|rating| rating.is_favorable()));
    assert_eq!(for_kapha[0].name, "Cumin");
}

#[test]
fn test_catalog_parses_from_json() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    assert_eq!(catalog.foods.len(), 1);
    let barley = &catalog.foods[0];
    assert_eq!(barley.name, "Barley");
    assert_eq!(
        barley.dosha_effects.for_dosha(Dosha::Kapha),
        SuitabilityRating::Excellent
    );
    assert!((barley.micronutrients["magnesium"] - 133.0).abs() < 1e-9);
}

#[test]
fn test_load_from_path_reads_a_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = catalog_store::load_from_path(file.path()).unwrap();
    assert_eq!(catalog.foods.len(), 1);
    assert!(catalog.recipes.is_empty());
}

#[test]
fn test_load_from_path_reports_missing_file_as_config_error() {
    let error =
        catalog_store::load_from_path(std::path::Path::new("/nonexistent/catalog.json"))
            .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_load_from_path_reports_schema_mismatch_as_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"foods\": \"nope\"}").unwrap();

    let error = catalog_store::load_from_path(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_shared_catalog_is_stable_and_populated() {
    let shared = catalog_store::shared();
    assert!(!shared.is_empty());
    assert_eq!(shared.foods.len(), catalog::builtin().foods.len());
    assert!(std::ptr::eq(shared, catalog_store::shared()));
}
