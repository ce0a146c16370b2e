// ABOUTME: Integration tests for the rule-based dosha classifier
// ABOUTME: Covers scoring scenarios, normalization, tie-breaks, and the uniform fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use prakriti_advisor::classifier::RuleBasedClassifier;
use prakriti_advisor::models::{AssessmentRecord, ConfidenceScores, Dosha};
use prakriti_advisor::DoshaClassifier;

fn record() -> AssessmentRecord {
    AssessmentRecord::default()
}

#[test]
fn test_pure_vata_scenario_scores_eleven_points() {
    let assessment = AssessmentRecord {
        body_frame: Some("Thin".to_owned()),
        skin_type: Some("Dry".to_owned()),
        digestion: Some("Quick".to_owned()),
        heart_rate: Some(85),
        mental_state: Some("Anxious".to_owned()),
        ..record()
    };

    let scores = RuleBasedClassifier::score(&assessment);
    assert_eq!(scores.vata, 11, "3 + 2 + 2 + 2 + 2");
    assert_eq!(scores.pitta, 0);
    assert_eq!(scores.kapha, 0);

    let result = RuleBasedClassifier::new().classify(&assessment);
    assert_eq!(result.primary_dosha, Dosha::Vata);
    assert!((result.confidence_scores.vata - 1.0).abs() < 1e-9);
    assert!(result.narrative.ends_with("Confidence: 100.0%"));
}

#[test]
fn test_heart_rate_only_scenario_is_pure_pitta() {
    // 72 bpm falls in the Pitta band; 120 mmHg is below the hypertension
    // cutoff, so nothing else fires.
    let assessment = AssessmentRecord {
        heart_rate: Some(72),
        systolic_bp: Some(120),
        ..record()
    };

    let result = RuleBasedClassifier::new().classify(&assessment);
    assert_eq!(result.primary_dosha, Dosha::Pitta);
    assert!(result.confidence_scores.vata.abs() < 1e-9);
    assert!((result.confidence_scores.pitta - 1.0).abs() < 1e-9);
    assert!(result.confidence_scores.kapha.abs() < 1e-9);
}

#[test]
fn test_empty_assessment_returns_uniform_fallback() {
    let result = RuleBasedClassifier::new().classify(&record());
    assert_eq!(result.primary_dosha, Dosha::Vata);
    assert_eq!(result.confidence_scores, ConfidenceScores::UNIFORM_FALLBACK);
    assert!((result.confidence_scores.total() - 1.0).abs() < 1e-9);
}

#[test]
fn test_confidence_sums_to_one_for_mixed_assessments() {
    let assessment = AssessmentRecord {
        body_frame: Some("Heavy".to_owned()),
        skin_type: Some("Dry".to_owned()),
        digestion: Some("Strong".to_owned()),
        heart_rate: Some(64),
        systolic_bp: Some(150),
        mental_state: Some("Calm".to_owned()),
        sleep_pattern: Some("Sound sleeper".to_owned()),
        ..record()
    };

    let result = RuleBasedClassifier::new().classify(&assessment);
    assert!((result.confidence_scores.total() - 1.0).abs() < 1e-9);
    for dosha in Dosha::ALL {
        let confidence = result.confidence_scores.get(dosha);
        assert!((0.0..=1.0).contains(&confidence));
    }
}

#[test]
fn test_classification_is_deterministic() {
    let assessment = AssessmentRecord {
        body_frame: Some("Medium".to_owned()),
        skin_type: Some("Oily".to_owned()),
        heart_rate: Some(75),
        sleep_pattern: Some("Light sleeper".to_owned()),
        ..record()
    };

    let classifier = RuleBasedClassifier::new();
    let first = classifier.classify(&assessment);
    let second = classifier.classify(&assessment);
    assert_eq!(first, second);
}

#[test]
fn test_ties_resolve_in_declaration_order() {
    // Vata and Pitta tied at 2 points each resolves to Vata.
    let assessment = AssessmentRecord {
        skin_type: Some("Dry".to_owned()),
        digestion: Some("Strong".to_owned()),
        ..record()
    };
    let result = RuleBasedClassifier::new().classify(&assessment);
    assert_eq!(result.primary_dosha, Dosha::Vata);

    // Pitta and Kapha tied resolves to Pitta.
    let assessment = AssessmentRecord {
        skin_type: Some("Normal".to_owned()),
        digestion: Some("Strong".to_owned()),
        ..record()
    };
    let result = RuleBasedClassifier::new().classify(&assessment);
    assert_eq!(result.primary_dosha, Dosha::Pitta);
}

#[test]
fn test_hypertension_awards_pitta_and_vata_together() {
    let assessment = AssessmentRecord {
        systolic_bp: Some(150),
        ..record()
    };

    let scores = RuleBasedClassifier::score(&assessment);
    assert_eq!(scores.vata, 1);
    assert_eq!(scores.pitta, 1);
    assert_eq!(scores.kapha, 0);

    // The resulting 50/50 split ties back to Vata and discloses Pitta as
    // the close runner-up.
    let result = RuleBasedClassifier::new().classify(&assessment);
    assert_eq!(result.primary_dosha, Dosha::Vata);
    assert!((result.confidence_scores.pitta - 0.5).abs() < 1e-9);
    assert!(result
        .narrative
        .contains("significant Pitta characteristics"));
}

#[test]
fn test_heart_rate_band_boundaries() {
    for (bpm, expected) in [
        (80, Some(Dosha::Vata)),
        (79, Some(Dosha::Pitta)),
        (70, Some(Dosha::Pitta)),
        (69, Some(Dosha::Kapha)),
        (60, Some(Dosha::Kapha)),
        (59, None),
    ] {
        let assessment = AssessmentRecord {
            heart_rate: Some(bpm),
            ..record()
        };
        let scores = RuleBasedClassifier::score(&assessment);
        match expected {
            Some(dosha) => {
                assert_eq!(scores.get(dosha), 2, "{bpm} bpm should award {dosha}");
                assert_eq!(scores.total(), 2);
            }
            None => assert_eq!(scores.total(), 0, "{bpm} bpm should award nothing"),
        }
    }
}

#[test]
fn test_unmatched_attribute_values_contribute_nothing() {
    let assessment = AssessmentRecord {
        body_frame: Some("Athletic".to_owned()),
        skin_type: Some("Combination".to_owned()),
        mental_state: Some("Content".to_owned()),
        ..record()
    };
    assert_eq!(RuleBasedClassifier::score(&assessment).total(), 0);
}
