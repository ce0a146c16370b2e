// ABOUTME: Static food and recipe reference catalog types
// ABOUTME: Nutrient profiles, dosha-suitability tiers, and catalog lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

use super::dosha::Dosha;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Suitability tier of a food or recipe for one dosha.
///
/// Tiers are ordered, so `Excellent > Good > Moderate > Poor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityRating {
    /// Best avoided for this dosha
    Poor,
    /// Acceptable in moderation
    Moderate,
    /// Suits this dosha
    Good,
    /// Especially recommended for this dosha
    Excellent,
}

impl SuitabilityRating {
    /// Whether the tier is good or excellent
    #[must_use]
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Good | Self::Excellent)
    }
}

/// Per-dosha suitability ratings for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaSuitability {
    /// Rating for Vata
    pub vata: SuitabilityRating,
    /// Rating for Pitta
    pub pitta: SuitabilityRating,
    /// Rating for Kapha
    pub kapha: SuitabilityRating,
}

impl DoshaSuitability {
    /// Rating for one dosha
    #[must_use]
    pub const fn for_dosha(self, dosha: Dosha) -> SuitabilityRating {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

/// Catalog grouping for food items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Rice, oats, and other cereals
    Grains,
    /// Dals and legumes
    Pulses,
    /// Fresh vegetables
    Vegetables,
    /// Culinary and medicinal spices
    Spices,
    /// Fats, sweeteners, and everything else
    Others,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Grains => "Grains",
            Self::Pulses => "Pulses",
            Self::Vegetables => "Vegetables",
            Self::Spices => "Spices",
            Self::Others => "Others",
        };
        f.write_str(label)
    }
}

/// Reference food item with a per-100g nutrient profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Catalog grouping
    pub category: FoodCategory,
    /// Energy per 100 g (kcal)
    pub calories_per_100g: f64,
    /// Protein per 100 g (g)
    pub protein_g: f64,
    /// Carbohydrates per 100 g (g)
    pub carbohydrates_g: f64,
    /// Fat per 100 g (g)
    pub fat_g: f64,
    /// Fiber per 100 g (g)
    pub fiber_g: f64,
    /// Per-dosha suitability ratings
    pub dosha_effects: DoshaSuitability,
    /// Notable micronutrients per 100 g; keys vary by food
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub micronutrients: BTreeMap<String, f64>,
}

/// Recipe difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Minimal technique required
    Easy,
    /// Some technique required
    Medium,
    /// Involved preparation
    Hard,
}

/// Single recipe ingredient referencing a catalog food by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name, matching a catalog food where one exists
    pub name: String,
    /// Quantity in the given unit
    pub quantity: f64,
    /// Measurement unit (cup, tsp, tbsp, ...)
    pub unit: String,
}

/// Per-serving nutrition summary for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Energy per serving (kcal)
    pub calories_per_serving: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbohydrates_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
}

/// Reference recipe with ordered ingredients and instruction steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name
    pub name: String,
    /// Ingredients in preparation order
    pub ingredients: Vec<RecipeIngredient>,
    /// Instruction steps in order
    pub instructions: Vec<String>,
    /// Total cooking time (minutes)
    pub cooking_time_minutes: u32,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Number of servings the recipe yields
    pub serves: u32,
    /// Per-dosha suitability ratings
    pub dosha_suitability: DoshaSuitability,
    /// Per-serving nutrition summary
    pub nutritional_info: RecipeNutrition,
}

/// Static reference set of food items and recipes.
///
/// Loaded once at process start from whatever source the collaborator
/// chooses (embedded data, JSON file, database) and treated as read-only for
/// the remainder of the process lifetime, so it may be shared across
/// arbitrarily many concurrent calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Food items with nutrient profiles
    pub foods: Vec<FoodItem>,
    /// Recipes with ingredients and instructions
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a serialization `AppError` when the JSON does not match the
    /// catalog schema.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the catalog carries no reference data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.recipes.is_empty()
    }

    /// Look up a food by name, case-insensitively
    #[must_use]
    pub fn food_named(&self, name: &str) -> Option<&FoodItem> {
        self.foods
            .iter()
            .find(|food| food.name.eq_ignore_ascii_case(name))
    }

    /// Foods in one catalog grouping, in catalog order
    #[must_use]
    pub fn foods_in(&self, category: FoodCategory) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|food| food.category == category)
            .collect()
    }

    /// Foods rated good or excellent for the given dosha, ordered by rating
    /// descending then name ascending
    #[must_use]
    pub fn foods_favorable_for(&self, dosha: Dosha) -> Vec<&FoodItem> {
        let mut foods: Vec<&FoodItem> = self
            .foods
            .iter()
            .filter(|food| food.dosha_effects.for_dosha(dosha).is_favorable())
            .collect();
        foods.sort_by(|a, b| {
            b.dosha_effects
                .for_dosha(dosha)
                .cmp(&a.dosha_effects.for_dosha(dosha))
                .then_with(|| a.name.cmp(&b.name))
        });
        foods
    }

    /// Recipes rated good or excellent for the given dosha, ordered by
    /// rating descending then name ascending
    #[must_use]
    pub fn recipes_favorable_for(&self, dosha: Dosha) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.dosha_suitability.for_dosha(dosha).is_favorable())
            .collect();
        recipes.sort_by(|a, b| {
            b.dosha_suitability
                .for_dosha(dosha)
                .cmp(&a.dosha_suitability.for_dosha(dosha))
                .then_with(|| a.name.cmp(&b.name))
        });
        recipes
    }
}
