// ABOUTME: Structured weekly diet plan models
// ABOUTME: WeeklyMeals fixes the seven canonical weekday keys at the type level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

use super::catalog::Recipe;
use super::dosha::Dosha;
use super::nutrition::NutritionalRequirement;
use serde::{Deserialize, Serialize};

/// Canonical weekday names, in plan order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Meals for a single day of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMeals {
    /// Breakfast selection
    pub breakfast: String,
    /// Lunch selection
    pub lunch: String,
    /// Dinner selection
    pub dinner: String,
    /// Snack selection
    pub snacks: String,
}

/// The seven days of a weekly plan.
///
/// A field per weekday keeps the seven-key shape fixed at the type level and
/// serializes in canonical Monday-to-Sunday order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyMeals {
    /// Monday meals
    pub monday: DailyMeals,
    /// Tuesday meals
    pub tuesday: DailyMeals,
    /// Wednesday meals
    pub wednesday: DailyMeals,
    /// Thursday meals
    pub thursday: DailyMeals,
    /// Friday meals
    pub friday: DailyMeals,
    /// Saturday meals
    pub saturday: DailyMeals,
    /// Sunday meals
    pub sunday: DailyMeals,
}

impl WeeklyMeals {
    /// Build from a per-day constructor, day 0 = Monday.
    #[must_use]
    pub fn from_fn(mut day_meals: impl FnMut(usize) -> DailyMeals) -> Self {
        Self {
            monday: day_meals(0),
            tuesday: day_meals(1),
            wednesday: day_meals(2),
            thursday: day_meals(3),
            friday: day_meals(4),
            saturday: day_meals(5),
            sunday: day_meals(6),
        }
    }

    /// Days with their canonical names, Monday first.
    #[must_use]
    pub fn days(&self) -> [(&'static str, &DailyMeals); 7] {
        [
            ("Monday", &self.monday),
            ("Tuesday", &self.tuesday),
            ("Wednesday", &self.wednesday),
            ("Thursday", &self.thursday),
            ("Friday", &self.friday),
            ("Saturday", &self.saturday),
            ("Sunday", &self.sunday),
        ]
    }
}

/// Calorie and macro targets echoed into the plan.
///
/// Mirrors the caller-supplied requirement without re-derivation, so the
/// generator never disagrees with the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNutritionTargets {
    /// Daily calories (kcal)
    pub calories: u32,
    /// Protein target (g)
    pub protein_g: u32,
    /// Carbohydrate target (g)
    pub carbohydrates_g: u32,
    /// Fat target (g)
    pub fat_g: u32,
}

impl From<&NutritionalRequirement> for DailyNutritionTargets {
    fn from(requirement: &NutritionalRequirement) -> Self {
        Self {
            calories: requirement.daily_calories,
            protein_g: requirement.macronutrients.protein_g,
            carbohydrates_g: requirement.macronutrients.carbohydrates_g,
            fat_g: requirement.macronutrients.fat_g,
        }
    }
}

/// Structured weekly diet plan. Built fresh per generation call; no shared
/// mutable state across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDietPlan {
    /// Dosha the plan was generated for
    pub dosha: Dosha,
    /// Dietary principles, in template order
    pub principles: Vec<String>,
    /// Foods to avoid, in template order
    pub foods_to_avoid: Vec<String>,
    /// The seven-day meal schedule
    pub weekly_meals: WeeklyMeals,
    /// Targets echoed from the supplied requirement
    pub daily_nutritional_targets: DailyNutritionTargets,
    /// Weekly staples list, independent of the selected meals
    pub shopping_list: Vec<String>,
    /// Dosha-specific cooking tips
    pub cooking_tips: Vec<String>,
    /// Catalog recipes rated favorable for the dosha
    pub recipe_suggestions: Vec<Recipe>,
}
