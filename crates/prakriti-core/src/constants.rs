// ABOUTME: Domain constants for constitution scoring and nutrition calculation
// ABOUTME: Rule point values, BMR coefficients, macro ratios, and RDA tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Application constants organized by domain.
//!
//! Every number the engines use is named here so the scoring and calculation
//! code reads as rules, not magic values.

/// Rule point values and cutoffs for the constitution classifier.
pub mod scoring {
    /// Points awarded by the body-frame rule (the strongest single signal)
    pub const BODY_FRAME_POINTS: u32 = 3;
    /// Points awarded by the skin-type rule
    pub const SKIN_TYPE_POINTS: u32 = 2;
    /// Points awarded by the digestion rule
    pub const DIGESTION_POINTS: u32 = 2;
    /// Points awarded by the matching heart-rate band
    pub const HEART_RATE_POINTS: u32 = 2;
    /// Points awarded by the mental-state rule
    pub const MENTAL_STATE_POINTS: u32 = 2;
    /// Points awarded by the sleep-pattern rule
    pub const SLEEP_PATTERN_POINTS: u32 = 1;
    /// Points awarded to each of Pitta and Vata by the hypertension rule
    pub const HYPERTENSION_POINTS: u32 = 1;

    /// Systolic pressure (mmHg) above which the hypertension rule fires
    pub const HYPERTENSION_SYSTOLIC_MMHG: u32 = 140;

    /// Floor of the Vata heart-rate band (bpm); the band is open-ended above
    pub const VATA_HR_FLOOR_BPM: u32 = 80;
    /// Floor of the Pitta heart-rate band (bpm)
    pub const PITTA_HR_FLOOR_BPM: u32 = 70;
    /// Floor of the Kapha heart-rate band (bpm); below this no band matches
    pub const KAPHA_HR_FLOOR_BPM: u32 = 60;

    /// Top-two confidence gap below which the runner-up dosha is disclosed
    /// in the narrative. Fixed design constant, not configurable per call.
    pub const DUAL_DOSHA_GAP: f64 = 0.20;
}

/// Gender-branched basal metabolic rate coefficients and activity factors.
///
/// The linear BMR model is `base + w_coeff*weight_kg + h_coeff*height_cm -
/// a_coeff*age`, branched on a case-insensitive match against "male".
pub mod bmr {
    /// Male branch intercept (kcal/day)
    pub const MALE_BASE: f64 = 66.0;
    /// Male branch weight coefficient (kcal per kg)
    pub const MALE_WEIGHT_COEFF: f64 = 13.7;
    /// Male branch height coefficient (kcal per cm)
    pub const MALE_HEIGHT_COEFF: f64 = 5.0;
    /// Male branch age coefficient (kcal per year, subtracted)
    pub const MALE_AGE_COEFF: f64 = 6.8;

    /// Non-male branch intercept (kcal/day)
    pub const FEMALE_BASE: f64 = 655.0;
    /// Non-male branch weight coefficient (kcal per kg)
    pub const FEMALE_WEIGHT_COEFF: f64 = 9.6;
    /// Non-male branch height coefficient (kcal per cm)
    pub const FEMALE_HEIGHT_COEFF: f64 = 1.8;
    /// Non-male branch age coefficient (kcal per year, subtracted)
    pub const FEMALE_AGE_COEFF: f64 = 4.7;

    /// Activity multiplier applied when the exercise label is unrecognized
    pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.55;
}

/// Macronutrient calorie split and gram conversion constants.
pub mod macronutrients {
    /// Share of daily calories allotted to protein
    pub const PROTEIN_CALORIE_SHARE: f64 = 0.15;
    /// Share of daily calories allotted to carbohydrates
    pub const CARB_CALORIE_SHARE: f64 = 0.60;
    /// Share of daily calories allotted to fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;

    /// Energy density of protein (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy density of carbohydrates (kcal per gram)
    pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
    /// Energy density of fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Flat daily fiber target for a recorded "female" gender (grams)
    pub const FIBER_G_FEMALE: u32 = 25;
    /// Flat daily fiber target otherwise (grams)
    pub const FIBER_G_DEFAULT: u32 = 30;
}

/// Recommended daily allowances for the micronutrient table.
///
/// RDA constants, not computed values; gender-keyed entries match on a
/// case-insensitive "female".
pub mod rda {
    /// Iron for a recorded "female" gender (mg)
    pub const IRON_FEMALE_MG: f64 = 18.0;
    /// Iron otherwise (mg)
    pub const IRON_MALE_MG: f64 = 10.0;
    /// Calcium (mg)
    pub const CALCIUM_MG: f64 = 1000.0;
    /// Vitamin C (mg)
    pub const VITAMIN_C_MG: f64 = 65.0;
    /// Vitamin A for a recorded "female" gender (mcg RAE)
    pub const VITAMIN_A_FEMALE_MCG: f64 = 700.0;
    /// Vitamin A otherwise (mcg RAE)
    pub const VITAMIN_A_MALE_MCG: f64 = 900.0;
    /// Folate (mcg DFE)
    pub const FOLATE_MCG: f64 = 400.0;
    /// Vitamin D (mcg)
    pub const VITAMIN_D_MCG: f64 = 15.0;
    /// Magnesium for a recorded "female" gender (mg)
    pub const MAGNESIUM_FEMALE_MG: f64 = 320.0;
    /// Magnesium otherwise (mg)
    pub const MAGNESIUM_MALE_MG: f64 = 420.0;
    /// Potassium (mg)
    pub const POTASSIUM_MG: f64 = 4700.0;
}

/// Documented defaults applied when demographic fields are absent.
pub mod defaults {
    /// Default age in years
    pub const AGE: u32 = 30;
    /// Default gender label
    pub const GENDER: &str = "Male";
    /// Default body weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 170.0;
    /// Default exercise-frequency label. Not an activity-table entry, so it
    /// resolves to [`super::bmr::DEFAULT_ACTIVITY_FACTOR`].
    pub const EXERCISE_FREQUENCY: &str = "Moderate";
}
