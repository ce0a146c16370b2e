// ABOUTME: Daily nutrition requirement calculator from demographic data
// ABOUTME: Gender-branched BMR, activity factors, macro split, and RDA micronutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Caloric and nutrient requirement calculation.
//!
//! Independent of the dosha classification: requirements derive from
//! demographics only. All arithmetic runs in full precision; rounding to
//! integers happens once at the public boundary.

use prakriti_core::constants::{bmr, defaults, macronutrients, rda};
use prakriti_core::errors::{AppError, AppResult};
use prakriti_core::models::{
    Demographics, MacronutrientTargets, MicronutrientTargets, NutritionalRequirement,
};
use tracing::debug;

/// Activity-factor table keyed by the assessment's exercise-frequency label.
/// Unlisted labels resolve to [`bmr::DEFAULT_ACTIVITY_FACTOR`].
pub const ACTIVITY_FACTORS: &[(&str, f64)] = &[
    ("None", 1.2),
    ("1-2 days/week", 1.375),
    ("3-4 days/week", 1.55),
    ("5+ days/week", 1.725),
];

/// Derives daily caloric and nutrient targets from demographics.
///
/// Stateless; every call computes a fresh, fully populated requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionCalculator;

impl NutritionCalculator {
    /// Create a calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculate daily requirements.
    ///
    /// Absent fields take the documented defaults (age 30, gender "Male",
    /// weight 70 kg, height 170 cm, exercise "Moderate").
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when a supplied weight or height is
    /// zero, negative, or non-finite. Absent fields are never an error.
    pub fn calculate_requirements(
        &self,
        demographics: &Demographics,
    ) -> AppResult<NutritionalRequirement> {
        let weight_kg = demographics.weight_kg.unwrap_or(defaults::WEIGHT_KG);
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight {weight_kg}kg must be a positive number"
            )));
        }

        let height_cm = demographics.height_cm.unwrap_or(defaults::HEIGHT_CM);
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height {height_cm}cm must be a positive number"
            )));
        }

        let age = demographics.age.unwrap_or(defaults::AGE);
        let gender = demographics.gender.as_deref().unwrap_or(defaults::GENDER);
        let exercise = demographics
            .exercise_frequency
            .as_deref()
            .unwrap_or(defaults::EXERCISE_FREQUENCY);

        let basal = Self::basal_metabolic_rate(gender, weight_kg, height_cm, age);
        let factor = Self::activity_factor(exercise);
        // Full-precision daily calories feed the macro split; the u32 fields
        // of the returned requirement are the rounded boundary values.
        let daily_calories = basal * factor;
        debug!(
            bmr = basal,
            activity_factor = factor,
            daily_calories,
            "caloric requirement derived"
        );

        let female = gender.eq_ignore_ascii_case("female");
        let macros = MacronutrientTargets {
            protein_g: to_grams(
                daily_calories * macronutrients::PROTEIN_CALORIE_SHARE,
                macronutrients::KCAL_PER_GRAM_PROTEIN,
            ),
            carbohydrates_g: to_grams(
                daily_calories * macronutrients::CARB_CALORIE_SHARE,
                macronutrients::KCAL_PER_GRAM_CARB,
            ),
            fat_g: to_grams(
                daily_calories * macronutrients::FAT_CALORIE_SHARE,
                macronutrients::KCAL_PER_GRAM_FAT,
            ),
            fiber_g: if female {
                macronutrients::FIBER_G_FEMALE
            } else {
                macronutrients::FIBER_G_DEFAULT
            },
        };

        Ok(NutritionalRequirement {
            daily_calories: daily_calories.round() as u32,
            macronutrients: macros,
            micronutrients: Self::micronutrient_targets(gender),
        })
    }

    /// Basal metabolic rate (kcal/day), full precision.
    ///
    /// The gender comparison is a case-insensitive match against "male"; any
    /// other value takes the non-male branch. Binary by design.
    #[must_use]
    pub fn basal_metabolic_rate(gender: &str, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
        let age = f64::from(age);
        if gender.eq_ignore_ascii_case("male") {
            bmr::MALE_BASE + bmr::MALE_WEIGHT_COEFF * weight_kg
                + bmr::MALE_HEIGHT_COEFF * height_cm
                - bmr::MALE_AGE_COEFF * age
        } else {
            bmr::FEMALE_BASE + bmr::FEMALE_WEIGHT_COEFF * weight_kg
                + bmr::FEMALE_HEIGHT_COEFF * height_cm
                - bmr::FEMALE_AGE_COEFF * age
        }
    }

    /// Activity multiplier for an exercise-frequency label.
    #[must_use]
    pub fn activity_factor(label: &str) -> f64 {
        ACTIVITY_FACTORS
            .iter()
            .find(|(name, _)| *name == label)
            .map_or(bmr::DEFAULT_ACTIVITY_FACTOR, |&(_, factor)| factor)
    }

    /// Fixed RDA lookup, keyed by a case-insensitive "female" gender match.
    fn micronutrient_targets(gender: &str) -> MicronutrientTargets {
        let female = gender.eq_ignore_ascii_case("female");
        MicronutrientTargets {
            iron_mg: if female {
                rda::IRON_FEMALE_MG
            } else {
                rda::IRON_MALE_MG
            },
            calcium_mg: rda::CALCIUM_MG,
            vitamin_c_mg: rda::VITAMIN_C_MG,
            vitamin_a_mcg: if female {
                rda::VITAMIN_A_FEMALE_MCG
            } else {
                rda::VITAMIN_A_MALE_MCG
            },
            folate_mcg: rda::FOLATE_MCG,
            vitamin_d_mcg: rda::VITAMIN_D_MCG,
            magnesium_mg: if female {
                rda::MAGNESIUM_FEMALE_MG
            } else {
                rda::MAGNESIUM_MALE_MG
            },
            potassium_mg: rda::POTASSIUM_MG,
        }
    }
}

/// Convert a calorie share to grams, rounding at the boundary.
fn to_grams(calories: f64, kcal_per_gram: f64) -> u32 {
    (calories / kcal_per_gram).round() as u32
}
