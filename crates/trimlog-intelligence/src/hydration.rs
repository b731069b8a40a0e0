// ABOUTME: Hydration aggregation over the daily drink log
// ABOUTME: Total volume and per-drink-type breakdown in first-seen order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trimlog_core::models::{DrinkType, HydrationEntry};

/// Summed volume for one drink type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkTotal {
    /// Drink type
    pub drink_type: DrinkType,
    /// Summed volume (ml)
    pub volume_ml: u64,
}

/// Sum of `volume_ml` over every entry
#[must_use]
pub fn total_hydration(entries: &[HydrationEntry]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.volume_ml)).sum()
}

/// Volume per drink type, ordered by each type's first appearance
#[must_use]
pub fn hydration_by_type(entries: &[HydrationEntry]) -> Vec<DrinkTotal> {
    let mut totals: Vec<DrinkTotal> = Vec::new();
    for entry in entries {
        let volume = u64::from(entry.volume_ml);
        match totals
            .iter_mut()
            .find(|total| total.drink_type == entry.drink_type)
        {
            Some(total) => total.volume_ml += volume,
            None => totals.push(DrinkTotal {
                drink_type: entry.drink_type,
                volume_ml: volume,
            }),
        }
    }
    totals
}
