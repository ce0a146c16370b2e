// ABOUTME: Demographics subset and derived daily nutrition targets
// ABOUTME: NutritionalRequirement with macro and micronutrient target structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

use super::assessment::AssessmentRecord;
use serde::{Deserialize, Serialize};

/// Demographic subset consumed by the nutrition calculator.
///
/// All fields optional; the calculator applies the documented defaults from
/// [`crate::constants::defaults`] when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender label as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Exercise-frequency label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<String>,
}

impl From<&AssessmentRecord> for Demographics {
    fn from(record: &AssessmentRecord) -> Self {
        Self {
            age: record.age,
            gender: record.gender.clone(),
            weight_kg: record.weight_kg,
            height_cm: record.height_cm,
            exercise_frequency: record.exercise_frequency.clone(),
        }
    }
}

/// Daily macronutrient targets in grams, rounded at the public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacronutrientTargets {
    /// Protein target (g/day)
    pub protein_g: u32,
    /// Carbohydrate target (g/day)
    pub carbohydrates_g: u32,
    /// Fat target (g/day)
    pub fat_g: u32,
    /// Fiber target (g/day)
    pub fiber_g: u32,
}

/// Daily micronutrient targets. RDA constants keyed by gender, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientTargets {
    /// Iron (mg/day)
    pub iron_mg: f64,
    /// Calcium (mg/day)
    pub calcium_mg: f64,
    /// Vitamin C (mg/day)
    pub vitamin_c_mg: f64,
    /// Vitamin A (mcg RAE/day)
    pub vitamin_a_mcg: f64,
    /// Folate (mcg DFE/day)
    pub folate_mcg: f64,
    /// Vitamin D (mcg/day)
    pub vitamin_d_mcg: f64,
    /// Magnesium (mg/day)
    pub magnesium_mg: f64,
    /// Potassium (mg/day)
    pub potassium_mg: f64,
}

/// Personalized daily nutrition targets. Derived per call from demographics
/// only; stateless and always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionalRequirement {
    /// Total daily caloric need (kcal/day), activity-adjusted
    pub daily_calories: u32,
    /// Macronutrient gram targets
    pub macronutrients: MacronutrientTargets,
    /// Micronutrient RDA targets
    pub micronutrients: MicronutrientTargets,
}
