// ABOUTME: Per-day log of body weight, meals, hydration, status, and exercise
// ABOUTME: Keeps its own invariants; every mutation validates before touching state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    BowelStatus, DrinkType, EnergyLevel, ExtraMealEntry, HydrationEntry, MealEntry, MealSlot,
    Meals,
};
use crate::errors::{AppError, AppResult};
use crate::validation::{ensure_non_empty, ensure_non_negative, ensure_nonzero};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The single exercise slot of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Estimated calories burned (kcal)
    pub calories_burned: u32,
    /// What was done
    pub description: String,
}

/// Mutable record of one calendar day
///
/// `weight_kg` is `None` until a morning measurement is recorded, so a
/// legitimate `0.0` is never confused with "not recorded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    date: NaiveDate,
    weight_kg: Option<f64>,
    #[serde(default)]
    bowel_status: BowelStatus,
    #[serde(default)]
    energy_level: Option<EnergyLevel>,
    meals: Meals,
    #[serde(default)]
    extra_meals: Vec<ExtraMealEntry>,
    #[serde(default)]
    hydration_log: Vec<HydrationEntry>,
    #[serde(default)]
    exercise: Option<ExerciseEntry>,
}

impl DailyLog {
    /// Start an empty log for `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            bowel_status: BowelStatus::Unrecorded,
            energy_level: None,
            meals: Meals::default(),
            extra_meals: Vec::new(),
            hydration_log: Vec::new(),
            exercise: None,
        }
    }

    /// Calendar date this log belongs to
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Morning weight, if recorded
    #[must_use]
    pub const fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Bowel status
    #[must_use]
    pub const fn bowel_status(&self) -> BowelStatus {
        self.bowel_status
    }

    /// Energy level, if recorded
    #[must_use]
    pub const fn energy_level(&self) -> Option<EnergyLevel> {
        self.energy_level
    }

    /// The three fixed meal slots
    #[must_use]
    pub const fn meals(&self) -> &Meals {
        &self.meals
    }

    /// Entry for one meal slot
    #[must_use]
    pub const fn meal(&self, slot: MealSlot) -> &MealEntry {
        self.meals.get(slot)
    }

    /// Extra meals in insertion order
    #[must_use]
    pub fn extra_meals(&self) -> &[ExtraMealEntry] {
        &self.extra_meals
    }

    /// Hydration entries in insertion order
    #[must_use]
    pub fn hydration_log(&self) -> &[HydrationEntry] {
        &self.hydration_log
    }

    /// Exercise entry, if recorded
    #[must_use]
    pub const fn exercise(&self) -> Option<&ExerciseEntry> {
        self.exercise.as_ref()
    }

    /// Record the morning weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `weight_kg` when negative or not finite
    pub fn set_weight(&mut self, kg: f64) -> AppResult<()> {
        self.weight_kg = Some(ensure_non_negative("weight_kg", kg)?);
        Ok(())
    }

    /// Forget the morning weight
    pub fn clear_weight(&mut self) {
        self.weight_kg = None;
    }

    /// Overwrite the text of a meal slot
    pub fn set_meal_text(&mut self, slot: MealSlot, text: &str) {
        text.clone_into(&mut self.meals.get_mut(slot).text);
    }

    /// Overwrite the photo flag of a meal slot
    pub fn set_meal_image_flag(&mut self, slot: MealSlot, has_image: bool) {
        self.meals.get_mut(slot).has_image = has_image;
    }

    /// Append a drink
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `volume_ml` when zero
    pub fn append_hydration(
        &mut self,
        drink_type: DrinkType,
        volume_ml: u32,
        time: NaiveTime,
    ) -> AppResult<&HydrationEntry> {
        let volume_ml = ensure_nonzero("volume_ml", volume_ml)?;
        self.hydration_log.push(HydrationEntry {
            time,
            drink_type,
            volume_ml,
        });
        self.hydration_log
            .last()
            .ok_or_else(|| AppError::internal("hydration entry vanished after push"))
    }

    /// Remove and return the most recent drink; `None` on an empty log
    pub fn undo_last_hydration(&mut self) -> Option<HydrationEntry> {
        self.hydration_log.pop()
    }

    /// Remove every drink, returning how many were removed
    pub fn clear_hydration(&mut self) -> usize {
        let removed = self.hydration_log.len();
        self.hydration_log.clear();
        removed
    }

    /// Append an extra meal
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` on field `description` when blank
    pub fn append_extra_meal(&mut self, time: NaiveTime, description: &str) -> AppResult<()> {
        let description = ensure_non_empty("description", description)?;
        self.extra_meals.push(ExtraMealEntry { time, description });
        Ok(())
    }

    /// Remove and return the most recent extra meal; `None` when there is none
    pub fn remove_last_extra_meal(&mut self) -> Option<ExtraMealEntry> {
        self.extra_meals.pop()
    }

    /// Overwrite the exercise slot; any calorie count is accepted
    pub fn set_exercise(&mut self, calories_burned: u32, description: &str) {
        self.exercise = Some(ExerciseEntry {
            calories_burned,
            description: description.trim().to_owned(),
        });
    }

    /// Empty the exercise slot
    pub fn clear_exercise(&mut self) {
        self.exercise = None;
    }

    /// Overwrite the bowel status
    pub fn set_bowel_status(&mut self, status: BowelStatus) {
        self.bowel_status = status;
    }

    /// Overwrite the energy level
    pub fn set_energy_level(&mut self, level: EnergyLevel) {
        self.energy_level = Some(level);
    }

    /// Check a log that arrived from outside the mutators, e.g. a snapshot
    ///
    /// # Errors
    ///
    /// Returns the first violated field constraint
    pub fn validate(&self) -> AppResult<()> {
        if let Some(kg) = self.weight_kg {
            ensure_non_negative("weight_kg", kg)?;
        }
        for entry in &self.hydration_log {
            ensure_nonzero("volume_ml", entry.volume_ml)?;
        }
        for entry in &self.extra_meals {
            ensure_non_empty("description", &entry.description)?;
        }
        Ok(())
    }
}
