// ABOUTME: Core types and constants for the Prakriti health advisory platform
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![deny(unsafe_code)]

//! # Prakriti Core
//!
//! Foundation crate providing shared types and constants for the Prakriti
//! health advisory platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain constants organized by concern (scoring, BMR, macros, RDA)
//! - **models**: Data contracts (assessment, dosha, nutrition, catalog, plan)

/// Domain constants organized by concern
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`AssessmentRecord`, `Dosha`, `Catalog`, `WeeklyDietPlan`, etc.)
pub mod models;
