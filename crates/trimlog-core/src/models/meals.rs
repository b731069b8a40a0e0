// ABOUTME: Meal models for the three fixed meal slots and off-schedule extra meals
// ABOUTME: MealSlot, MealEntry, the fixed-slot Meals record, and ExtraMealEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::errors::AppError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three planned meals of the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealSlot {
    /// All slots in canonical meal order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Stable display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" | "supper" => Ok(Self::Dinner),
            _ => Err(AppError::invalid_field(
                "meal_slot",
                format!("unknown meal slot '{s}' (expected breakfast, lunch, dinner)"),
            )),
        }
    }
}

/// What was eaten in one meal slot, plus whether a photo is ready
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Free-text description (portion sizes, estimates)
    pub text: String,
    /// Whether a photo of the meal has been taken
    pub has_image: bool,
}

impl MealEntry {
    /// Whether any meal text has been entered
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// The three fixed meal slots
///
/// A struct rather than a map, so a log can never hold fewer or duplicated
/// slots; deserialization rejects missing or unknown slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meals {
    breakfast: MealEntry,
    lunch: MealEntry,
    dinner: MealEntry,
}

impl Meals {
    /// Entry for a slot
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> &MealEntry {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub(crate) fn get_mut(&mut self, slot: MealSlot) -> &mut MealEntry {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Iterate slots in canonical order (breakfast, lunch, dinner)
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Whether any slot has a photo ready
    #[must_use]
    pub fn any_image(&self) -> bool {
        self.iter().any(|(_, entry)| entry.has_image)
    }
}

/// An unplanned snack or off-schedule meal, stamped at insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraMealEntry {
    /// Clock time the entry was recorded
    pub time: NaiveTime,
    /// What was eaten, never empty
    pub description: String,
}
