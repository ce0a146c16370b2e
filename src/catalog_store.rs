// ABOUTME: Catalog sourcing for the persistence collaborator
// ABOUTME: JSON file loading and the init-once shared catalog instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Catalog sourcing.
//!
//! The engines take the catalog by reference (dependency injection); this
//! module is the collaborator-side convenience for producing that value,
//! either the built-in reference data or a JSON file of the same shape.
//! Initialization happens before first use and the instance is never
//! mutated afterward (init-once, read-many).

use prakriti_core::errors::{AppError, AppResult};
use prakriti_core::models::Catalog;
use prakriti_intelligence::catalog;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

static SHARED_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide built-in catalog, constructed on first use and read-only
/// thereafter. Safe to hand to arbitrarily many concurrent calls.
#[must_use]
pub fn shared() -> &'static Catalog {
    SHARED_CATALOG.get_or_init(|| {
        let catalog = catalog::builtin();
        info!(
            foods = catalog.foods.len(),
            recipes = catalog.recipes.len(),
            "built-in catalog initialized"
        );
        catalog
    })
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns a config `AppError` when the file cannot be read and a
/// serialization `AppError` when the contents do not match the catalog
/// schema.
pub fn load_from_path(path: &Path) -> AppResult<Catalog> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        AppError::config(format!("failed to read catalog file {}", path.display()))
            .with_source(error)
    })?;
    Catalog::from_json_str(&contents)
}
