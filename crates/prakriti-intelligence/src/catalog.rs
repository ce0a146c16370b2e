// ABOUTME: Built-in food and recipe reference catalog
// ABOUTME: Curated Indian staples with nutrient profiles and dosha-suitability ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Embedded reference catalog.
//!
//! The collaborator may load a catalog from any persistent source; this
//! module provides the curated default. Per-100g figures follow standard
//! food-composition tables.

use prakriti_core::models::{
    Catalog, Difficulty, DoshaSuitability, FoodCategory, FoodItem, Recipe, RecipeIngredient,
    RecipeNutrition, SuitabilityRating,
};
use std::collections::BTreeMap;

use SuitabilityRating::{Excellent, Good, Moderate, Poor};

/// Build the built-in reference catalog. Intended to be constructed once at
/// process start and shared read-only thereafter.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog {
        foods: builtin_foods(),
        recipes: builtin_recipes(),
    }
}

const fn effects(
    vata: SuitabilityRating,
    pitta: SuitabilityRating,
    kapha: SuitabilityRating,
) -> DoshaSuitability {
    DoshaSuitability { vata, pitta, kapha }
}

fn micros(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|&(name, amount)| (name.to_owned(), amount))
        .collect()
}

#[allow(clippy::too_many_arguments)] // Flat food-composition row
fn food(
    name: &str,
    category: FoodCategory,
    calories_per_100g: f64,
    protein_g: f64,
    carbohydrates_g: f64,
    fat_g: f64,
    fiber_g: f64,
    dosha_effects: DoshaSuitability,
    micronutrients: &[(&str, f64)],
) -> FoodItem {
    FoodItem {
        name: name.to_owned(),
        category,
        calories_per_100g,
        protein_g,
        carbohydrates_g,
        fat_g,
        fiber_g,
        dosha_effects,
        micronutrients: micros(micronutrients),
    }
}

fn ingredient(name: &str, quantity: f64, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
    }
}

fn steps(list: &[&str]) -> Vec<String> {
    list.iter().map(|&step| step.to_owned()).collect()
}

fn builtin_foods() -> Vec<FoodItem> {
    vec![
        food(
            "Basmati Rice",
            FoodCategory::Grains,
            356.0,
            7.9,
            78.2,
            0.9,
            1.3,
            effects(Good, Good, Moderate),
            &[
                ("iron", 1.5),
                ("calcium", 23.0),
                ("vitamin_b1", 0.4),
                ("magnesium", 25.0),
            ],
        ),
        food(
            "Brown Rice",
            FoodCategory::Grains,
            362.0,
            7.2,
            72.9,
            2.9,
            3.4,
            effects(Good, Good, Good),
            &[
                ("iron", 2.2),
                ("calcium", 33.0),
                ("vitamin_b1", 0.4),
                ("magnesium", 44.0),
            ],
        ),
        food(
            "Oats",
            FoodCategory::Grains,
            389.0,
            16.9,
            66.3,
            6.9,
            10.6,
            effects(Good, Good, Moderate),
            &[("iron", 4.7), ("magnesium", 177.0), ("zinc", 4.0)],
        ),
        food(
            "Moong Dal",
            FoodCategory::Pulses,
            347.0,
            24.5,
            56.7,
            1.2,
            16.3,
            effects(Good, Good, Good),
            &[
                ("iron", 4.4),
                ("calcium", 124.0),
                ("vitamin_b1", 0.5),
                ("folate", 625.0),
            ],
        ),
        food(
            "Chana Dal",
            FoodCategory::Pulses,
            335.0,
            22.5,
            57.2,
            1.5,
            12.2,
            effects(Moderate, Good, Good),
            &[("iron", 3.9), ("calcium", 56.0), ("phosphorus", 324.0)],
        ),
        food(
            "Masoor Dal",
            FoodCategory::Pulses,
            352.0,
            24.6,
            63.4,
            1.1,
            10.7,
            effects(Moderate, Good, Good),
            &[("iron", 6.5), ("folate", 479.0), ("potassium", 677.0)],
        ),
        food(
            "Spinach",
            FoodCategory::Vegetables,
            23.0,
            2.9,
            3.6,
            0.4,
            2.2,
            effects(Moderate, Good, Good),
            &[
                ("iron", 2.7),
                ("calcium", 99.0),
                ("vitamin_a", 469.0),
                ("folate", 194.0),
            ],
        ),
        food(
            "Carrots",
            FoodCategory::Vegetables,
            41.0,
            0.9,
            9.6,
            0.2,
            2.8,
            effects(Good, Good, Good),
            &[
                ("vitamin_a", 835.0),
                ("potassium", 320.0),
                ("vitamin_k", 13.2),
            ],
        ),
        food(
            "Tomatoes",
            FoodCategory::Vegetables,
            18.0,
            0.9,
            3.9,
            0.2,
            1.2,
            effects(Moderate, Poor, Good),
            &[
                ("vitamin_c", 13.7),
                ("potassium", 237.0),
                ("vitamin_a", 42.0),
            ],
        ),
        food(
            "Turmeric",
            FoodCategory::Spices,
            312.0,
            9.7,
            67.1,
            3.2,
            22.7,
            effects(Good, Moderate, Excellent),
            &[
                ("curcumin", 3000.0),
                ("iron", 55.0),
                ("potassium", 2080.0),
            ],
        ),
        food(
            "Ginger",
            FoodCategory::Spices,
            80.0,
            1.8,
            17.8,
            0.8,
            2.0,
            effects(Good, Moderate, Good),
            &[
                ("vitamin_c", 5.0),
                ("magnesium", 43.0),
                ("potassium", 415.0),
            ],
        ),
        food(
            "Cumin",
            FoodCategory::Spices,
            375.0,
            17.8,
            44.2,
            22.3,
            10.5,
            effects(Good, Moderate, Excellent),
            &[
                ("iron", 66.4),
                ("calcium", 931.0),
                ("magnesium", 366.0),
            ],
        ),
    ]
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Khichdi".to_owned(),
            ingredients: vec![
                ingredient("Basmati Rice", 1.0, "cup"),
                ingredient("Moong Dal", 0.5, "cup"),
                ingredient("Turmeric", 0.5, "tsp"),
                ingredient("Ginger", 1.0, "inch piece"),
                ingredient("Ghee", 1.0, "tbsp"),
            ],
            instructions: steps(&[
                "Wash rice and dal together until water runs clear",
                "Heat ghee in pressure cooker",
                "Add ginger and saute for 1 minute",
                "Add rice, dal, turmeric and salt",
                "Add 4 cups water and pressure cook for 3 whistles",
                "Let pressure release naturally",
                "Serve hot with ghee",
            ]),
            cooking_time_minutes: 25,
            difficulty: Difficulty::Easy,
            serves: 4,
            dosha_suitability: effects(Excellent, Good, Good),
            nutritional_info: RecipeNutrition {
                calories_per_serving: 280.0,
                protein_g: 12.0,
                carbohydrates_g: 52.0,
                fat_g: 4.0,
            },
        },
        Recipe {
            name: "Dal Tadka".to_owned(),
            ingredients: vec![
                ingredient("Moong Dal", 1.0, "cup"),
                ingredient("Turmeric", 0.5, "tsp"),
                ingredient("Ginger", 1.0, "inch piece"),
                ingredient("Cumin", 1.0, "tsp"),
            ],
            instructions: steps(&[
                "Wash and cook dal with turmeric until soft",
                "Heat oil in pan for tadka",
                "Add cumin seeds and ginger",
                "Pour over cooked dal",
                "Garnish with cilantro",
            ]),
            cooking_time_minutes: 30,
            difficulty: Difficulty::Medium,
            serves: 4,
            dosha_suitability: effects(Good, Good, Excellent),
            nutritional_info: RecipeNutrition {
                calories_per_serving: 220.0,
                protein_g: 16.0,
                carbohydrates_g: 35.0,
                fat_g: 3.0,
            },
        },
        Recipe {
            name: "Coconut Rice".to_owned(),
            ingredients: vec![
                ingredient("Basmati Rice", 1.0, "cup"),
                ingredient("Grated coconut", 0.5, "cup"),
                ingredient("Curry leaves", 8.0, "leaves"),
                ingredient("Coconut oil", 1.0, "tbsp"),
            ],
            instructions: steps(&[
                "Cook rice and let it cool slightly",
                "Warm coconut oil on low heat",
                "Add curry leaves and grated coconut, toast gently",
                "Fold the coconut mixture into the rice",
                "Serve at room temperature",
            ]),
            cooking_time_minutes: 20,
            difficulty: Difficulty::Easy,
            serves: 3,
            dosha_suitability: effects(Good, Excellent, Moderate),
            nutritional_info: RecipeNutrition {
                calories_per_serving: 310.0,
                protein_g: 6.0,
                carbohydrates_g: 48.0,
                fat_g: 10.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriti_core::models::Dosha;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = builtin();
        assert!(catalog.foods.len() >= 8);
        assert!(catalog.recipes.len() >= 2);
        assert!(catalog.food_named("basmati rice").is_some());
    }

    #[test]
    fn test_every_category_is_represented() {
        let catalog = builtin();
        for category in [
            FoodCategory::Grains,
            FoodCategory::Pulses,
            FoodCategory::Vegetables,
            FoodCategory::Spices,
        ] {
            assert!(!catalog.foods_in(category).is_empty(), "no {category} foods");
        }
    }

    #[test]
    fn test_favorable_recipes_order_rating_then_name() {
        let catalog = builtin();
        let for_kapha: Vec<&str> = catalog
            .recipes_favorable_for(Dosha::Kapha)
            .iter()
            .map(|recipe| recipe.name.as_str())
            .collect();
        // Dal Tadka is excellent for Kapha; Khichdi is good; Coconut Rice is
        // only moderate and drops out.
        assert_eq!(for_kapha, vec!["Dal Tadka", "Khichdi"]);
    }
}
