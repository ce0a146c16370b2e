// ABOUTME: End-to-end advisory flow test: assessment to classification to plan to report
// ABOUTME: Mirrors the collaborator's call sequence over the public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use prakriti_advisor::models::{AssessmentRecord, Demographics, Dosha};
use prakriti_advisor::report::ReportAssembler;
use prakriti_advisor::{
    catalog_store, DietPlanGenerator, DoshaClassifier, NutritionCalculator, RuleBasedClassifier,
};

#[test]
fn test_full_advisory_flow() {
    // The worked example: a calm 32-year-old with strong digestion and a
    // 72 bpm resting rate presents as Pitta-leaning with Kapha traits.
    let record = AssessmentRecord {
        age: Some(32),
        gender: Some("Female".to_owned()),
        height_cm: Some(165.0),
        weight_kg: Some(58.0),
        systolic_bp: Some(120),
        diastolic_bp: Some(80),
        heart_rate: Some(72),
        body_frame: Some("Medium".to_owned()),
        skin_type: Some("Normal".to_owned()),
        digestion: Some("Strong".to_owned()),
        mental_state: Some("Calm".to_owned()),
        exercise_frequency: Some("3-4 days/week".to_owned()),
        stress_level: Some("Low".to_owned()),
        ..AssessmentRecord::default()
    };

    let classification = RuleBasedClassifier::new().classify(&record);
    // Pitta: frame 3 + digestion 2 + heart rate 2 = 7; Kapha: skin 2 +
    // mental state 2 = 4.
    assert_eq!(classification.primary_dosha, Dosha::Pitta);
    assert!((classification.confidence_scores.total() - 1.0).abs() < 1e-9);

    let requirement = NutritionCalculator::new()
        .calculate_requirements(&Demographics::from(&record))
        .unwrap();
    assert!(requirement.daily_calories > 0);
    assert_eq!(requirement.macronutrients.fiber_g, 25);

    let plan = DietPlanGenerator::new().generate_plan(
        classification.primary_dosha.name(),
        &requirement,
        catalog_store::shared(),
    );
    assert_eq!(plan.dosha, Dosha::Pitta);
    assert_eq!(plan.weekly_meals.days().len(), 7);
    assert_eq!(
        plan.daily_nutritional_targets.calories,
        requirement.daily_calories
    );
    assert!(!plan.recipe_suggestions.is_empty());

    let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let report =
        ReportAssembler::new().assemble(&record, &classification, &requirement, generated_at);
    assert_eq!(report.assessment_summary.primary_dosha, Dosha::Pitta);
    assert_eq!(report.daily_calories, requirement.daily_calories);
    assert_eq!(report.next_followup, "July 01, 2025");

    // Everything the collaborator persists is JSON-serializable.
    serde_json::to_string(&classification).unwrap();
    serde_json::to_string(&requirement).unwrap();
    serde_json::to_string(&plan).unwrap();
    serde_json::to_string(&report).unwrap();
}
