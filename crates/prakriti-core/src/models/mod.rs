// ABOUTME: Core data models for the advisory engine
// ABOUTME: Assessment, dosha, nutrition, catalog, and diet plan contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Data contracts shared between the engines and their collaborators.
//!
//! Everything here is JSON-serializable; the persistence/report layer owns
//! storage and rendering of these structures.

/// Patient assessment snapshot
pub mod assessment;
/// Food and recipe reference catalog types
pub mod catalog;
/// Dosha labels, scores, confidence, and classification result
pub mod dosha;
/// Demographics and nutritional requirement types
pub mod nutrition;
/// Weekly diet plan structures
pub mod plan;

pub use assessment::AssessmentRecord;
pub use catalog::{
    Catalog, Difficulty, DoshaSuitability, FoodCategory, FoodItem, Recipe, RecipeIngredient,
    RecipeNutrition, SuitabilityRating,
};
pub use dosha::{ClassificationResult, ConfidenceScores, Dosha, DoshaScores};
pub use nutrition::{
    Demographics, MacronutrientTargets, MicronutrientTargets, NutritionalRequirement,
};
pub use plan::{DailyMeals, DailyNutritionTargets, WeeklyDietPlan, WeeklyMeals, WEEKDAYS};
