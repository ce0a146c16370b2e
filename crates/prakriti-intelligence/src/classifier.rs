// ABOUTME: Rule-based dosha classifier over constitutional and vital-sign attributes
// ABOUTME: Scoring rules are ordered data tables, unit-testable independent of aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Rule-based constitution classification.
//!
//! The rule set is data, not scattered conditionals: an ordered table of
//! trait rules, an ordered heart-rate band table, and the single dual-award
//! hypertension rule, evaluated in that documented order. Aggregation
//! normalizes raw weights into confidence scores and falls back to a
//! documented uniform split when nothing matched.

use prakriti_core::constants::scoring;
use prakriti_core::models::{
    AssessmentRecord, ClassificationResult, ConfidenceScores, Dosha, DoshaScores,
};
use tracing::debug;

/// Classifier seam.
///
/// The rule-based implementation below is the default; an alternative
/// (e.g. statistical) classifier plugs in behind this same interface.
pub trait DoshaClassifier {
    /// Classify an assessment into a primary dosha with confidence scores
    /// and a clinician-facing narrative. Never fails: missing optional
    /// fields contribute nothing and a result is always produced.
    fn classify(&self, assessment: &AssessmentRecord) -> ClassificationResult;
}

/// Additive scoring rule keyed off one discrete attribute value.
///
/// A rule fires when the accessed attribute equals the expected value
/// exactly; absent or unmatched attributes contribute nothing.
pub struct TraitRule {
    /// Attribute the rule reads, for diagnostics and table tests
    pub attribute: &'static str,
    /// Value that triggers the rule
    pub expected: &'static str,
    /// Accessor for the attribute on the assessment
    pub field: fn(&AssessmentRecord) -> Option<&str>,
    /// Doshas awarded when the rule fires
    pub awards: &'static [(Dosha, u32)],
}

fn body_frame(record: &AssessmentRecord) -> Option<&str> {
    record.body_frame.as_deref()
}

fn skin_type(record: &AssessmentRecord) -> Option<&str> {
    record.skin_type.as_deref()
}

fn digestion(record: &AssessmentRecord) -> Option<&str> {
    record.digestion.as_deref()
}

fn mental_state(record: &AssessmentRecord) -> Option<&str> {
    record.mental_state.as_deref()
}

fn sleep_pattern(record: &AssessmentRecord) -> Option<&str> {
    record.sleep_pattern.as_deref()
}

/// Ordered scoring rules for the discrete constitutional attributes.
///
/// Every trait rule awards exactly one dosha; the hypertension vital rule
/// ([`HYPERTENSION_AWARDS`]) is the single dual-award exception.
pub const TRAIT_RULES: &[TraitRule] = &[
    TraitRule {
        attribute: "body_frame",
        expected: "Thin",
        field: body_frame,
        awards: &[(Dosha::Vata, scoring::BODY_FRAME_POINTS)],
    },
    TraitRule {
        attribute: "body_frame",
        expected: "Medium",
        field: body_frame,
        awards: &[(Dosha::Pitta, scoring::BODY_FRAME_POINTS)],
    },
    TraitRule {
        attribute: "body_frame",
        expected: "Heavy",
        field: body_frame,
        awards: &[(Dosha::Kapha, scoring::BODY_FRAME_POINTS)],
    },
    TraitRule {
        attribute: "skin_type",
        expected: "Dry",
        field: skin_type,
        awards: &[(Dosha::Vata, scoring::SKIN_TYPE_POINTS)],
    },
    TraitRule {
        attribute: "skin_type",
        expected: "Oily",
        field: skin_type,
        awards: &[(Dosha::Pitta, scoring::SKIN_TYPE_POINTS)],
    },
    TraitRule {
        attribute: "skin_type",
        expected: "Normal",
        field: skin_type,
        awards: &[(Dosha::Kapha, scoring::SKIN_TYPE_POINTS)],
    },
    TraitRule {
        attribute: "digestion",
        expected: "Quick",
        field: digestion,
        awards: &[(Dosha::Vata, scoring::DIGESTION_POINTS)],
    },
    TraitRule {
        attribute: "digestion",
        expected: "Strong",
        field: digestion,
        awards: &[(Dosha::Pitta, scoring::DIGESTION_POINTS)],
    },
    TraitRule {
        attribute: "digestion",
        expected: "Slow",
        field: digestion,
        awards: &[(Dosha::Kapha, scoring::DIGESTION_POINTS)],
    },
    TraitRule {
        attribute: "mental_state",
        expected: "Anxious",
        field: mental_state,
        awards: &[(Dosha::Vata, scoring::MENTAL_STATE_POINTS)],
    },
    TraitRule {
        attribute: "mental_state",
        expected: "Irritable",
        field: mental_state,
        awards: &[(Dosha::Pitta, scoring::MENTAL_STATE_POINTS)],
    },
    TraitRule {
        attribute: "mental_state",
        expected: "Calm",
        field: mental_state,
        awards: &[(Dosha::Kapha, scoring::MENTAL_STATE_POINTS)],
    },
    TraitRule {
        attribute: "sleep_pattern",
        expected: "Light sleeper",
        field: sleep_pattern,
        awards: &[(Dosha::Vata, scoring::SLEEP_PATTERN_POINTS)],
    },
    TraitRule {
        attribute: "sleep_pattern",
        expected: "Sound sleeper",
        field: sleep_pattern,
        awards: &[(Dosha::Kapha, scoring::SLEEP_PATTERN_POINTS)],
    },
];

/// Heart-rate band awarding one dosha.
pub struct HeartRateBand {
    /// Inclusive lower bound (bpm)
    pub floor_bpm: u32,
    /// Exclusive upper bound (bpm); `None` for the open-ended top band
    pub ceiling_bpm: Option<u32>,
    /// Dosha awarded when the heart rate falls in the band
    pub dosha: Dosha,
    /// Points awarded
    pub points: u32,
}

/// Non-overlapping heart-rate bands, highest first. Evaluated high-to-low;
/// the first containing band wins. Rates below the lowest floor match no
/// band.
pub const HEART_RATE_BANDS: &[HeartRateBand] = &[
    HeartRateBand {
        floor_bpm: scoring::VATA_HR_FLOOR_BPM,
        ceiling_bpm: None,
        dosha: Dosha::Vata,
        points: scoring::HEART_RATE_POINTS,
    },
    HeartRateBand {
        floor_bpm: scoring::PITTA_HR_FLOOR_BPM,
        ceiling_bpm: Some(scoring::VATA_HR_FLOOR_BPM),
        dosha: Dosha::Pitta,
        points: scoring::HEART_RATE_POINTS,
    },
    HeartRateBand {
        floor_bpm: scoring::KAPHA_HR_FLOOR_BPM,
        ceiling_bpm: Some(scoring::PITTA_HR_FLOOR_BPM),
        dosha: Dosha::Kapha,
        points: scoring::HEART_RATE_POINTS,
    },
];

/// Doshas awarded together when systolic pressure exceeds
/// [`scoring::HYPERTENSION_SYSTOLIC_MMHG`]. Hypertension correlates with
/// both Pitta and Vata presentations, so this is the one rule that awards
/// two doshas.
pub const HYPERTENSION_AWARDS: &[(Dosha, u32)] = &[
    (Dosha::Pitta, scoring::HYPERTENSION_POINTS),
    (Dosha::Vata, scoring::HYPERTENSION_POINTS),
];

/// Rule-based dosha classifier. A pure function of its input: no I/O, no
/// hidden state, deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Raw additive dosha weights for an assessment, before normalization.
    #[must_use]
    pub fn score(assessment: &AssessmentRecord) -> DoshaScores {
        let mut scores = DoshaScores::default();

        for rule in TRAIT_RULES {
            if (rule.field)(assessment) == Some(rule.expected) {
                for &(dosha, points) in rule.awards {
                    scores.award(dosha, points);
                }
            }
        }

        if let Some(heart_rate) = assessment.heart_rate {
            let band = HEART_RATE_BANDS.iter().find(|band| {
                heart_rate >= band.floor_bpm
                    && band.ceiling_bpm.map_or(true, |ceiling| heart_rate < ceiling)
            });
            if let Some(band) = band {
                scores.award(band.dosha, band.points);
            }
        }

        if let Some(systolic) = assessment.systolic_bp {
            if systolic > scoring::HYPERTENSION_SYSTOLIC_MMHG {
                for &(dosha, points) in HYPERTENSION_AWARDS {
                    scores.award(dosha, points);
                }
            }
        }

        scores
    }
}

impl DoshaClassifier for RuleBasedClassifier {
    fn classify(&self, assessment: &AssessmentRecord) -> ClassificationResult {
        let scores = Self::score(assessment);
        debug!(
            vata = scores.vata,
            pitta = scores.pitta,
            kapha = scores.kapha,
            "dosha weights accumulated"
        );

        let (primary_dosha, confidence_scores) = match ConfidenceScores::from_scores(scores) {
            Some(confidence) => (scores.dominant(), confidence),
            // No rule matched: documented uniform fallback, Vata default.
            None => (Dosha::Vata, ConfidenceScores::UNIFORM_FALLBACK),
        };

        let narrative = build_narrative(primary_dosha, confidence_scores);

        ClassificationResult {
            primary_dosha,
            confidence_scores,
            narrative,
        }
    }
}

/// Assemble the narrative for a classification: the primary dosha's fixed
/// template, a runner-up mention when the top-two confidence gap is under
/// [`scoring::DUAL_DOSHA_GAP`], and the formatted confidence last.
#[must_use]
pub fn build_narrative(primary: Dosha, confidence: ConfidenceScores) -> String {
    let mut narrative = primary.constitution_summary().to_owned();

    let ranked = confidence.ranked();
    if ranked[0].1 - ranked[1].1 < scoring::DUAL_DOSHA_GAP {
        narrative.push_str(&format!(
            " You may also have significant {} characteristics.",
            ranked[1].0
        ));
    }

    narrative.push_str(&format!(
        " Confidence: {}",
        format_confidence_pct(confidence.get(primary))
    ));
    narrative
}

/// Format a `[0, 1]` confidence as a display percentage.
///
/// Kept separate from the numeric computation so formatting and aggregation
/// are testable in isolation; confidence stays full-precision until here.
#[must_use]
pub fn format_confidence_pct(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
