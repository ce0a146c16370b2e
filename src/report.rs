// ABOUTME: Clinician-facing report assembly from engine outputs
// ABOUTME: Pure formatting; no derivation beyond BMI and date arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Clinician-facing summary assembly.
//!
//! Pure formatting of an assessment, its classification, and its nutrition
//! requirement into a serializable report object. The generation timestamp
//! is a parameter so reports are deterministic and testable;
//! [`ReportAssembler::assemble_now`] is the convenience wrapper.

use chrono::{DateTime, Duration, Utc};
use prakriti_core::models::{
    AssessmentRecord, ClassificationResult, Dosha, NutritionalRequirement,
};
use serde::{Deserialize, Serialize};

/// Days until the recommended follow-up visit
const FOLLOWUP_INTERVAL_DAYS: i64 = 30;

/// Placeholder for values absent from the assessment
const NOT_AVAILABLE: &str = "N/A";

/// Condensed assessment vitals for the report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    /// Age in years, when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender label as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Body-mass index to one decimal, or "N/A"
    pub bmi: String,
    /// "systolic/diastolic" blood pressure, or "N/A"
    pub blood_pressure: String,
    /// "<rate> bpm" heart rate, or "N/A"
    pub heart_rate: String,
    /// Diagnosed primary dosha
    pub primary_dosha: Dosha,
}

/// Clinician-facing summary of one assessment cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalReport {
    /// Report identifier, "AYU-<assessment-id>-<yyyymmdd>"
    pub report_id: String,
    /// Long-form generation date, e.g. "August 07, 2026"
    pub generated_date: String,
    /// Condensed vitals
    pub assessment_summary: AssessmentSummary,
    /// Classification narrative
    pub narrative: String,
    /// Daily caloric target (kcal)
    pub daily_calories: u32,
    /// Standing recommendation line
    pub recommendations: String,
    /// Long-form follow-up date, 30 days out
    pub next_followup: String,
}

/// Assembles engine outputs into a [`ClinicalReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler;

impl ReportAssembler {
    /// Create an assembler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Assemble a report for the given generation timestamp.
    #[must_use]
    pub fn assemble(
        &self,
        record: &AssessmentRecord,
        classification: &ClassificationResult,
        requirement: &NutritionalRequirement,
        generated_at: DateTime<Utc>,
    ) -> ClinicalReport {
        let followup = generated_at + Duration::days(FOLLOWUP_INTERVAL_DAYS);

        ClinicalReport {
            report_id: format!(
                "AYU-{}-{}",
                record.id.simple(),
                generated_at.format("%Y%m%d")
            ),
            generated_date: generated_at.format("%B %d, %Y").to_string(),
            assessment_summary: AssessmentSummary {
                age: record.age,
                gender: record.gender.clone(),
                bmi: format_bmi(record.bmi()),
                blood_pressure: format_blood_pressure(record.systolic_bp, record.diastolic_bp),
                heart_rate: format_heart_rate(record.heart_rate),
                primary_dosha: classification.primary_dosha,
            },
            narrative: classification.narrative.clone(),
            daily_calories: requirement.daily_calories,
            recommendations:
                "Follow prescribed Ayurvedic diet plan and lifestyle recommendations.".to_owned(),
            next_followup: followup.format("%B %d, %Y").to_string(),
        }
    }

    /// Assemble a report stamped with the current time.
    #[must_use]
    pub fn assemble_now(
        &self,
        record: &AssessmentRecord,
        classification: &ClassificationResult,
        requirement: &NutritionalRequirement,
    ) -> ClinicalReport {
        self.assemble(record, classification, requirement, Utc::now())
    }
}

fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map_or_else(|| NOT_AVAILABLE.to_owned(), |value| format!("{value:.1}"))
}

fn format_blood_pressure(systolic: Option<u32>, diastolic: Option<u32>) -> String {
    match (systolic, diastolic) {
        (Some(systolic), Some(diastolic)) => format!("{systolic}/{diastolic}"),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

fn format_heart_rate(heart_rate: Option<u32>) -> String {
    heart_rate.map_or_else(|| NOT_AVAILABLE.to_owned(), |rate| format!("{rate} bpm"))
}
