// ABOUTME: Core data models for the Trimlog body-metrics and nutrition log
// ABOUTME: Re-exports profile, daily log, meal, hydration, and history memory types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data model
//!
//! The `DailyLog` owns every per-day record and keeps its own invariants:
//! its fields are private and all mutation goes through validating methods.
//! Closed enums are used for meal slots, drink types, and status fields so
//! exhaustiveness is checked at compile time.

/// Bowel movement and energy status enums
mod status;

/// Body parameters and identity
mod profile;

/// Fixed meal slots and unplanned extra meals
mod meals;

/// Hydration entries and drink types
mod hydration;

/// The per-day log keyed by calendar date
mod daily_log;

/// Opaque carry-over summary from prior sessions
mod history;

pub use daily_log::{DailyLog, ExerciseEntry};
pub use history::HistoryMemory;
pub use hydration::{DrinkType, HydrationEntry};
pub use meals::{ExtraMealEntry, MealEntry, MealSlot, Meals};
pub use profile::{Gender, Profile};
pub use status::{BowelStatus, EnergyLevel};

/// Normalize a user-supplied enum token: trimmed, lowercase, `-`/space as `_`
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}
