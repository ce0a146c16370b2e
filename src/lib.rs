// ABOUTME: Main library entry point for the Prakriti advisory platform
// ABOUTME: Re-exports the classification, nutrition, and planning engine API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![deny(unsafe_code)]

//! # Prakriti Advisor
//!
//! An Ayurvedic health-advisory engine: clinicians record patient vitals and
//! constitutional traits, the engine infers a dominant dosha classification
//! with confidence, derives personalized daily nutrition targets, and
//! expands both into a structured weekly meal plan.
//!
//! ## Architecture
//!
//! - **`prakriti-core`**: errors, constants, and the serde data contracts
//! - **`prakriti-intelligence`**: the classifier, calculator, and planner
//! - **this crate**: logging setup, report assembly, and catalog sourcing
//!   for the persistence/report collaborator
//!
//! The three engine operations are pure, synchronous functions over
//! immutable inputs; the reference catalog is loaded once at startup and
//! shared read-only across calls.
//!
//! ## Example
//!
//! ```rust
//! use prakriti_advisor::models::{AssessmentRecord, Demographics};
//! use prakriti_advisor::{
//!     catalog_store, DietPlanGenerator, DoshaClassifier, NutritionCalculator,
//!     RuleBasedClassifier,
//! };
//!
//! # fn main() -> prakriti_advisor::errors::AppResult<()> {
//! let assessment = AssessmentRecord {
//!     age: Some(32),
//!     gender: Some("Female".to_owned()),
//!     height_cm: Some(165.0),
//!     weight_kg: Some(58.0),
//!     heart_rate: Some(72),
//!     body_frame: Some("Medium".to_owned()),
//!     digestion: Some("Strong".to_owned()),
//!     mental_state: Some("Calm".to_owned()),
//!     exercise_frequency: Some("3-4 days/week".to_owned()),
//!     ..AssessmentRecord::default()
//! };
//!
//! let classification = RuleBasedClassifier::new().classify(&assessment);
//! let requirement =
//!     NutritionCalculator::new().calculate_requirements(&Demographics::from(&assessment))?;
//! let plan = DietPlanGenerator::new().generate_plan(
//!     classification.primary_dosha.name(),
//!     &requirement,
//!     catalog_store::shared(),
//! );
//! assert_eq!(plan.daily_nutritional_targets.calories, requirement.daily_calories);
//! # Ok(())
//! # }
//! ```

/// Catalog sourcing for the collaborator: file loading and the shared
/// init-once instance
pub mod catalog_store;

/// Structured logging configuration built on tracing-subscriber
pub mod logging;

/// Clinician-facing report assembly
pub mod report;

pub use prakriti_core::constants;
pub use prakriti_core::errors;
pub use prakriti_core::models;

pub use prakriti_intelligence::catalog;
pub use prakriti_intelligence::classifier;
pub use prakriti_intelligence::nutrition;
pub use prakriti_intelligence::planner;
pub use prakriti_intelligence::{
    DietPlanGenerator, DoshaClassifier, NutritionCalculator, RuleBasedClassifier,
};
