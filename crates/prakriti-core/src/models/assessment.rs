// ABOUTME: Immutable patient assessment snapshot supplied by the records collaborator
// ABOUTME: Demographics, vitals, blood panel, lifestyle flags, and constitutional observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable input snapshot of a patient assessment.
///
/// Owned by the caller; the engines never mutate it. Every clinical field is
/// optional: the classifier treats absent values as non-matching and the
/// nutrition calculator applies documented defaults, so an empty record still
/// classifies and calculates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Stable identity assigned by the records collaborator
    #[serde(default)]
    pub id: Uuid,
    /// When the assessment was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,

    // Demographics
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender label as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Occupation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    // Vital signs
    /// Systolic blood pressure (mmHg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic_bp: Option<u32>,
    /// Diastolic blood pressure (mmHg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic_bp: Option<u32>,
    /// Resting heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Body temperature (degrees Fahrenheit)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Respiratory rate (breaths per minute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<u32>,
    /// Oxygen saturation (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<f64>,

    // Blood panel
    /// Fasting glucose (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fasting_glucose: Option<f64>,
    /// Post-meal glucose (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_meal_glucose: Option<f64>,
    /// Total cholesterol (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cholesterol: Option<f64>,
    /// HDL cholesterol (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl_cholesterol: Option<f64>,
    /// LDL cholesterol (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldl_cholesterol: Option<f64>,

    // Lifestyle
    /// Smoking habit as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    /// Alcohol habit as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
    /// Exercise-frequency label (e.g. "3-4 days/week")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<String>,
    /// Sleep quality as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<String>,
    /// Stress level as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<String>,
    /// Caffeine intake as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_intake: Option<String>,

    // Constitutional observations
    /// Body frame (Thin, Medium, Heavy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_frame: Option<String>,
    /// Skin type (Dry, Oily, Normal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
    /// Hair type as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_type: Option<String>,
    /// Appetite as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appetite: Option<String>,
    /// Digestion (Quick, Strong, Slow)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digestion: Option<String>,
    /// Bowel movements as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowel_movements: Option<String>,
    /// Sleep pattern ("Light sleeper", "Sound sleeper")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_pattern: Option<String>,
    /// Mental state (Anxious, Irritable, Calm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_state: Option<String>,
}

impl AssessmentRecord {
    /// Body-mass index from the recorded height and weight.
    ///
    /// Returns `None` when either measurement is absent or not a positive
    /// finite number, so consumers never divide by a zero or near-zero
    /// height.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight_kg = self.weight_kg?;
        let height_cm = self.height_cm?;
        if !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    }
}
