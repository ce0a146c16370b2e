// ABOUTME: Dosha labels, raw score accumulation, and normalized confidence
// ABOUTME: ClassificationResult is the immutable output of a classification call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One of the three constitutional classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    /// Air and space elements
    Vata,
    /// Fire and water elements
    Pitta,
    /// Earth and water elements
    Kapha,
}

impl Dosha {
    /// Canonical declaration order. Ties and fallbacks resolve to the
    /// earliest entry.
    pub const ALL: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    /// Label as a capitalized string
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Parse a dosha label, case-insensitively
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "vata" => Some(Self::Vata),
            "pitta" => Some(Self::Pitta),
            "kapha" => Some(Self::Kapha),
            _ => None,
        }
    }

    /// Parse a dosha label, falling back to Vata for unrecognized input
    #[must_use]
    pub fn from_str_lossy(label: &str) -> Self {
        Self::parse(label).unwrap_or(Self::Vata)
    }

    /// Fixed constitutional summary used as the narrative opening
    #[must_use]
    pub const fn constitution_summary(self) -> &'static str {
        match self {
            Self::Vata => {
                "Vata constitution indicates air and space elements dominance. \
                 You may experience quick thinking, creativity, and variable energy levels. \
                 Focus on warm, nourishing foods and regular routines."
            }
            Self::Pitta => {
                "Pitta constitution shows fire and water elements dominance. \
                 You likely have strong digestion, focused mind, and natural leadership qualities. \
                 Emphasize cooling, calming foods and stress management."
            }
            Self::Kapha => {
                "Kapha constitution reflects earth and water elements dominance. \
                 You probably have steady energy, strong immunity, and calm nature. \
                 Choose light, warming foods and regular exercise."
            }
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-negative raw rule weights per dosha. Recomputed per classification
/// call, never persisted by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoshaScores {
    /// Accumulated Vata weight
    pub vata: u32,
    /// Accumulated Pitta weight
    pub pitta: u32,
    /// Accumulated Kapha weight
    pub kapha: u32,
}

impl DoshaScores {
    /// Add points to one dosha
    pub fn award(&mut self, dosha: Dosha, points: u32) {
        match dosha {
            Dosha::Vata => self.vata += points,
            Dosha::Pitta => self.pitta += points,
            Dosha::Kapha => self.kapha += points,
        }
    }

    /// Accumulated weight for one dosha
    #[must_use]
    pub const fn get(self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sum of all three weights
    #[must_use]
    pub const fn total(self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Dosha with the strictly maximum weight. Equal weights resolve to the
    /// earliest entry in [`Dosha::ALL`], which keeps the tie-break explicit
    /// and deterministic.
    #[must_use]
    pub fn dominant(self) -> Dosha {
        let mut best = Dosha::Vata;
        for dosha in Dosha::ALL {
            if self.get(dosha) > self.get(best) {
                best = dosha;
            }
        }
        best
    }
}

/// Normalized confidence per dosha.
///
/// Whenever any scoring rule matched, values are each in `[0, 1]` and sum to
/// 1 within floating tolerance. When nothing matched, the documented
/// [`Self::UNIFORM_FALLBACK`] is used instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfidenceScores {
    /// Vata confidence
    pub vata: f64,
    /// Pitta confidence
    pub pitta: f64,
    /// Kapha confidence
    pub kapha: f64,
}

impl ConfidenceScores {
    /// Documented fallback when no rule matches. A fixed value, not a
    /// derived result.
    pub const UNIFORM_FALLBACK: Self = Self {
        vata: 0.33,
        pitta: 0.33,
        kapha: 0.34,
    };

    /// Confidence for one dosha
    #[must_use]
    pub const fn get(self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sum of the three confidences
    #[must_use]
    pub fn total(self) -> f64 {
        self.vata + self.pitta + self.kapha
    }

    /// Normalize raw weights into confidences. Returns `None` when the total
    /// weight is zero; the caller applies the uniform fallback.
    #[must_use]
    pub fn from_scores(scores: DoshaScores) -> Option<Self> {
        let total = scores.total();
        if total == 0 {
            return None;
        }
        let total = f64::from(total);
        Some(Self {
            vata: f64::from(scores.vata) / total,
            pitta: f64::from(scores.pitta) / total,
            kapha: f64::from(scores.kapha) / total,
        })
    }

    /// Doshas with their confidence, highest first. The sort is stable, so
    /// equal confidences keep the [`Dosha::ALL`] order.
    #[must_use]
    pub fn ranked(self) -> [(Dosha, f64); 3] {
        let mut entries = [
            (Dosha::Vata, self.vata),
            (Dosha::Pitta, self.pitta),
            (Dosha::Kapha, self.kapha),
        ];
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        entries
    }
}

/// Outcome of a constitution classification. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Dominant dosha label
    pub primary_dosha: Dosha,
    /// Normalized confidence mapping
    pub confidence_scores: ConfidenceScores,
    /// Clinician-facing analysis text
    pub narrative: String,
}
