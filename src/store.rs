// ABOUTME: Owned session state holding the profile, the active daily log, and history memory
// ABOUTME: The only sanctioned mutation surface; rejected input leaves state unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Log store
//!
//! A [`LogStore`] is an ordinary owned value. The presentation shell
//! creates one per session, mutates it through the methods below, and
//! hands a shared reference to the report generators.

use crate::logging::SessionLogger;
use crate::session::SessionSnapshot;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use trimlog_core::constants::formats;
use trimlog_core::errors::{AppError, AppResult};
use trimlog_core::models::{
    BowelStatus, DailyLog, DrinkType, EnergyLevel, ExtraMealEntry, Gender, HistoryMemory,
    HydrationEntry, MealSlot, Profile,
};
use trimlog_intelligence::{MetricsConfig, MetricsSnapshot};

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `INVALID_INPUT` on field `date` for a blank or malformed value
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::invalid_field("date", "is required"));
    }
    NaiveDate::parse_from_str(raw, formats::DATE)
        .map_err(|e| AppError::invalid_field("date", format!("expected YYYY-MM-DD: {e}")))
}

/// Parse an `HH:MM` clock time
///
/// # Errors
///
/// Returns `INVALID_INPUT` on field `time` for a malformed value
pub fn parse_clock_time(raw: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), formats::CLOCK)
        .map_err(|e| AppError::invalid_field("time", format!("expected HH:MM: {e}")))
}

/// Session state: one profile, one active daily log, one history blob
#[derive(Debug, Clone, PartialEq)]
pub struct LogStore {
    profile: Profile,
    log: DailyLog,
    history: HistoryMemory,
}

impl LogStore {
    /// Start a session with an empty log for `date`
    #[must_use]
    pub fn new(profile: Profile, date: NaiveDate) -> Self {
        Self {
            profile,
            log: DailyLog::new(date),
            history: HistoryMemory::default(),
        }
    }

    /// Restore a session from a snapshot
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant; a snapshot that arrived from
    /// outside is never trusted blindly
    pub fn from_snapshot(snapshot: SessionSnapshot) -> AppResult<Self> {
        snapshot.validate()?;
        Ok(Self {
            profile: snapshot.profile,
            log: snapshot.daily_log,
            history: snapshot.history_memory,
        })
    }

    /// Copy of the whole session state for persistence
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            profile: self.profile.clone(),
            daily_log: self.log.clone(),
            history_memory: self.history.clone(),
        }
    }

    /// The profile
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The active daily log
    #[must_use]
    pub const fn log(&self) -> &DailyLog {
        &self.log
    }

    /// The history memory blob
    #[must_use]
    pub const fn history_memory(&self) -> &HistoryMemory {
        &self.history
    }

    /// Date of the active log
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.log.date()
    }

    /// Compute every derived metric for the current state
    #[must_use]
    pub fn metrics(&self, config: &MetricsConfig) -> MetricsSnapshot {
        MetricsSnapshot::compute(&self.profile, &self.log, config)
    }

    // ================================================================
    // Date selection
    // ================================================================

    /// Make `date` the active day
    ///
    /// A different date starts an empty log; nothing carries over from
    /// the previous day. Returns whether a new log was started.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.log.date() == date {
            return false;
        }
        debug!(
            log.previous_date = %self.log.date(),
            log.date = %date,
            "Starting log for a new date"
        );
        self.log = DailyLog::new(date);
        true
    }

    /// Make a `YYYY-MM-DD` date the active day
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` on field `date` for a malformed value
    pub fn select_date_str(&mut self, raw: &str) -> AppResult<bool> {
        let date = checked("select_date", parse_date(raw))?;
        Ok(self.select_date(date))
    }

    // ================================================================
    // Daily log mutations
    // ================================================================

    /// Record the morning weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `weight_kg` for a negative value
    pub fn set_weight(&mut self, kg: f64) -> AppResult<()> {
        let result = self.log.set_weight(kg);
        self.record("set_weight", result)
    }

    /// Forget the morning weight
    pub fn clear_weight(&mut self) {
        self.log.clear_weight();
        self.mutated("clear_weight");
    }

    /// Overwrite a meal's text
    pub fn set_meal_text(&mut self, slot: MealSlot, text: &str) {
        self.log.set_meal_text(slot, text);
        self.mutated("set_meal_text");
    }

    /// Overwrite a meal's photo flag
    pub fn set_meal_image_flag(&mut self, slot: MealSlot, has_image: bool) {
        self.log.set_meal_image_flag(slot, has_image);
        self.mutated("set_meal_image_flag");
    }

    /// Append a drink to the hydration log
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `volume_ml` for a zero volume
    pub fn append_hydration(
        &mut self,
        drink_type: DrinkType,
        volume_ml: u32,
        time: NaiveTime,
    ) -> AppResult<HydrationEntry> {
        let result = self
            .log
            .append_hydration(drink_type, volume_ml, time)
            .copied();
        let entry = self.record("append_hydration", result)?;
        debug!(
            hydration.drink_type = %entry.drink_type,
            hydration.volume_ml = entry.volume_ml,
            "Hydration appended"
        );
        Ok(entry)
    }

    /// Remove the most recent drink; a no-op on an empty log
    pub fn undo_last_hydration(&mut self) -> Option<HydrationEntry> {
        let removed = self.log.undo_last_hydration();
        if removed.is_some() {
            self.mutated("undo_last_hydration");
        }
        removed
    }

    /// Remove every drink, returning how many were removed
    pub fn clear_hydration(&mut self) -> usize {
        let removed = self.log.clear_hydration();
        self.mutated("clear_hydration");
        removed
    }

    /// Append an unplanned snack or off-schedule meal
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` on field `description` when blank
    pub fn append_extra_meal(&mut self, time: NaiveTime, description: &str) -> AppResult<()> {
        let result = self.log.append_extra_meal(time, description);
        self.record("append_extra_meal", result)
    }

    /// Remove the most recent extra meal; a no-op when there is none
    pub fn remove_last_extra_meal(&mut self) -> Option<ExtraMealEntry> {
        let removed = self.log.remove_last_extra_meal();
        if removed.is_some() {
            self.mutated("remove_last_extra_meal");
        }
        removed
    }

    /// Overwrite the exercise slot
    pub fn set_exercise(&mut self, calories_burned: u32, description: &str) {
        self.log.set_exercise(calories_burned, description);
        self.mutated("set_exercise");
    }

    /// Empty the exercise slot
    pub fn clear_exercise(&mut self) {
        self.log.clear_exercise();
        self.mutated("clear_exercise");
    }

    /// Overwrite the bowel status
    pub fn set_bowel_status(&mut self, status: BowelStatus) {
        self.log.set_bowel_status(status);
        self.mutated("set_bowel_status");
    }

    /// Overwrite the energy level
    pub fn set_energy_level(&mut self, level: EnergyLevel) {
        self.log.set_energy_level(level);
        self.mutated("set_energy_level");
    }

    // ================================================================
    // Profile edits
    // ================================================================

    /// Change the nickname
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` on field `nickname` when blank
    pub fn set_nickname(&mut self, nickname: &str) -> AppResult<()> {
        let result = self.profile.set_nickname(nickname);
        self.record("set_nickname", result)
    }

    /// Change the gender
    pub fn set_gender(&mut self, gender: Gender) {
        self.profile.set_gender(gender);
        self.mutated("set_gender");
    }

    /// Change the age
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `age` when zero
    pub fn set_age(&mut self, age: u32) -> AppResult<()> {
        let result = self.profile.set_age(age);
        self.record("set_age", result)
    }

    /// Change the height
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `height_cm` unless positive and finite
    pub fn set_height_cm(&mut self, height_cm: f64) -> AppResult<()> {
        let result = self.profile.set_height_cm(height_cm);
        self.record("set_height_cm", result)
    }

    /// Change the start weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `start_weight_kg` unless positive and finite
    pub fn set_start_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        let result = self.profile.set_start_weight_kg(kg);
        self.record("set_start_weight_kg", result)
    }

    /// Change the profile's latest known weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `current_weight_kg` unless positive and finite
    pub fn set_current_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        let result = self.profile.set_current_weight_kg(kg);
        self.record("set_current_weight_kg", result)
    }

    /// Change the target weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `target_weight_kg` unless positive and finite
    pub fn set_target_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        let result = self.profile.set_target_weight_kg(kg);
        self.record("set_target_weight_kg", result)
    }

    /// Replace the history memory blob verbatim
    pub fn set_history_memory(&mut self, text: impl Into<String>) {
        self.history = HistoryMemory::new(text);
        self.mutated("set_history_memory");
    }

    fn mutated(&self, operation: &str) {
        SessionLogger::log_mutation(self.log.date(), operation);
    }

    fn record<T>(&self, operation: &str, result: AppResult<T>) -> AppResult<T> {
        let value = checked(operation, result)?;
        self.mutated(operation);
        Ok(value)
    }
}

fn checked<T>(operation: &str, result: AppResult<T>) -> AppResult<T> {
    result.inspect_err(|e| SessionLogger::log_rejected_input(operation, e))
}
