// ABOUTME: Aggregated metrics snapshot computed from a profile and a daily log
// ABOUTME: Single deterministic entry point consumed by the report generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics snapshot
//!
//! [`MetricsSnapshot::compute`] has no side effects and holds no state, so
//! recomputing it from an unchanged profile and log always yields an equal
//! value no matter how often the generators ask for it.

use crate::body_metrics::{bmi_delta, calculate_bmi, weight_loss_progress};
use crate::config::MetricsConfig;
use crate::hydration::{hydration_by_type, total_hydration, DrinkTotal};
use crate::nutrition_calculator::{
    calculate_mifflin_st_jeor, calculate_tdee, recommended_intake_range, IntakeRange,
};
use serde::{Deserialize, Serialize};
use trimlog_core::models::{DailyLog, Profile};

/// Where the weight used for the metabolic figures came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    /// Today's recorded morning weight
    TodayLog,
    /// The profile's latest known weight
    Profile,
}

/// Every derived figure the generators render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Weight recorded in today's log, if any
    pub recorded_weight_kg: Option<f64>,
    /// BMI for today's recorded weight, if any
    pub today_bmi: Option<f64>,
    /// Weight used for BMR and progress
    pub current_weight_kg: f64,
    /// Source of `current_weight_kg`
    pub weight_source: WeightSource,
    /// BMI for `current_weight_kg`
    pub current_bmi: f64,
    /// Configured ideal BMI reference
    pub ideal_bmi: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Multiplier used for `tdee`
    pub tdee_multiplier: f64,
    /// Recommended intake window
    pub intake: IntakeRange,
    /// Total hydration volume (ml)
    pub hydration_total_ml: u64,
    /// Hydration per drink type in first-seen order
    pub hydration_by_type: Vec<DrinkTotal>,
    /// Fraction of the planned loss achieved, in `[0, 1]`
    pub weight_loss_progress: f64,
    /// Kilograms lost since the start weight (negative when gained)
    pub lost_kg: f64,
    /// Kilograms still above the target (negative when below it)
    pub remaining_kg: f64,
}

impl MetricsSnapshot {
    /// Compute all metrics for `profile` and `log`
    #[must_use]
    pub fn compute(profile: &Profile, log: &DailyLog, config: &MetricsConfig) -> Self {
        let recorded_weight_kg = log.weight_kg();
        let (current_weight_kg, weight_source) = recorded_weight_kg.map_or(
            (profile.current_weight_kg(), WeightSource::Profile),
            |kg| (kg, WeightSource::TodayLog),
        );

        let height_cm = profile.height_cm();
        let bmr = calculate_mifflin_st_jeor(
            current_weight_kg,
            height_cm,
            profile.age(),
            profile.gender(),
            &config.bmr,
        );

        Self {
            recorded_weight_kg,
            today_bmi: recorded_weight_kg.map(|kg| calculate_bmi(kg, height_cm)),
            current_weight_kg,
            weight_source,
            current_bmi: calculate_bmi(current_weight_kg, height_cm),
            ideal_bmi: config.body.ideal_bmi,
            bmr,
            tdee: calculate_tdee(bmr, &config.energy),
            tdee_multiplier: config.energy.tdee_multiplier,
            intake: recommended_intake_range(bmr, &config.energy),
            hydration_total_ml: total_hydration(log.hydration_log()),
            hydration_by_type: hydration_by_type(log.hydration_log()),
            weight_loss_progress: weight_loss_progress(
                profile.start_weight_kg(),
                current_weight_kg,
                profile.target_weight_kg(),
            ),
            lost_kg: profile.start_weight_kg() - current_weight_kg,
            remaining_kg: current_weight_kg - profile.target_weight_kg(),
        }
    }

    /// Delta of today's BMI to the ideal reference, if a weight was recorded
    #[must_use]
    pub fn today_bmi_delta(&self) -> Option<f64> {
        self.today_bmi.map(|bmi| bmi_delta(bmi, self.ideal_bmi))
    }

    /// Whether the user is still above the target weight
    #[must_use]
    pub fn is_above_target(&self) -> bool {
        self.remaining_kg > 0.0
    }
}
