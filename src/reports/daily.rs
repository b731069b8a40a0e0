// ABOUTME: Daily report generator for the ongoing advisory session
// ABOUTME: Renders body metrics, meals, extra meals, hydration, and exercise in a fixed field order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily report
//!
//! Field order is fixed: date header, body metrics, the three meal slots
//! in canonical order, extra meals in insertion order, hydration, exercise,
//! and a closing line. Every field renders even when nothing was recorded.

use super::text::{format_quantity, format_signed, single_line, single_line_or};
use crate::logging::SessionLogger;
use crate::store::LogStore;
use trimlog_core::constants::{formats, placeholders};
use trimlog_core::models::{DailyLog, MealSlot, Profile};
use trimlog_intelligence::{MetricsConfig, MetricsSnapshot};

/// Separator between the report body and the closing line
const SEPARATOR: &str = "---------------------------";

/// Renders the daily report text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReportGenerator {
    /// Request addressed to the advisor at the end of the report
    pub closing_line: String,
    /// Appended to the closing line when any meal has a photo ready
    pub photo_notice: String,
}

impl Default for DailyReportGenerator {
    fn default() -> Self {
        Self {
            closing_line: "Coach, please analyze!".into(),
            photo_notice: "[Photos follow in my next messages.]".into(),
        }
    }
}

impl DailyReportGenerator {
    /// Render the report for the store's active day
    #[must_use]
    pub fn render(&self, store: &LogStore, config: &MetricsConfig) -> String {
        let metrics = store.metrics(config);
        self.render_parts(store.profile(), store.log(), &metrics)
    }

    /// Render from already computed metrics
    #[must_use]
    pub fn render_parts(
        &self,
        profile: &Profile,
        log: &DailyLog,
        metrics: &MetricsSnapshot,
    ) -> String {
        let mut lines = vec![
            format!(
                "=== {} Daily Diet & Exercise Report: {} ===",
                log.date().format(formats::HEADER_DATE),
                profile.nickname()
            ),
            format!("[Weight] {}", weight_line(metrics)),
            format!("[Bowel] {}", bowel_line(log)),
            format!("[Energy] {}", energy_line(log)),
        ];

        lines.extend(MealSlot::ALL.iter().map(|&slot| meal_line(log, slot)));
        lines.extend(extra_meal_lines(log));
        lines.push(format!("[Hydration] {}", hydration_line(metrics)));
        lines.push(format!("[Exercise] {}", exercise_line(log)));
        lines.push(SEPARATOR.to_owned());
        lines.push(self.closing(log));

        let report = lines.join("\n");
        SessionLogger::log_render("daily_report", log.date(), report.len());
        report
    }

    fn closing(&self, log: &DailyLog) -> String {
        if log.meals().any_image() {
            format!("{} {}", self.closing_line, self.photo_notice)
        } else {
            self.closing_line.clone()
        }
    }
}

fn weight_line(metrics: &MetricsSnapshot) -> String {
    match (
        metrics.recorded_weight_kg,
        metrics.today_bmi,
        metrics.today_bmi_delta(),
    ) {
        (Some(kg), Some(bmi), Some(delta)) => format!(
            "{} kg (BMI {bmi:.1}, {} vs ideal {})",
            format_quantity(kg),
            format_signed(delta),
            format_quantity(metrics.ideal_bmi)
        ),
        _ => placeholders::NOT_RECORDED.to_owned(),
    }
}

fn bowel_line(log: &DailyLog) -> String {
    let status = log.bowel_status();
    if status.is_recorded() {
        status.label().to_owned()
    } else {
        placeholders::NOT_RECORDED.to_owned()
    }
}

fn energy_line(log: &DailyLog) -> String {
    log.energy_level().map_or_else(
        || placeholders::NOT_RECORDED.to_owned(),
        |level| level.label().to_owned(),
    )
}

fn meal_line(log: &DailyLog, slot: MealSlot) -> String {
    let entry = log.meal(slot);
    let image = if entry.has_image {
        placeholders::IMAGE_READY
    } else {
        placeholders::NO_IMAGE
    };
    format!(
        "[{}] {} | image: {image}",
        slot.label(),
        single_line_or(&entry.text, placeholders::NOT_RECORDED)
    )
}

fn extra_meal_lines(log: &DailyLog) -> Vec<String> {
    let extras = log.extra_meals();
    if extras.is_empty() {
        return vec![format!("[Extra meals] {}", placeholders::NONE)];
    }
    let mut lines = Vec::with_capacity(extras.len() + 1);
    lines.push("[Extra meals]".to_owned());
    lines.extend(extras.iter().map(|extra| {
        format!(
            "- {} {}",
            extra.time.format(formats::CLOCK),
            single_line(&extra.description)
        )
    }));
    lines
}

fn hydration_line(metrics: &MetricsSnapshot) -> String {
    if metrics.hydration_by_type.is_empty() {
        return placeholders::NOT_RECORDED.to_owned();
    }
    let breakdown = metrics
        .hydration_by_type
        .iter()
        .map(|total| format!("{} {} ml", total.drink_type.label(), total.volume_ml))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ml total ({breakdown})", metrics.hydration_total_ml)
}

fn exercise_line(log: &DailyLog) -> String {
    match log.exercise() {
        None => placeholders::NOT_RECORDED.to_owned(),
        Some(exercise) if exercise.description.is_empty() => {
            format!("{} kcal", exercise.calories_burned)
        }
        Some(exercise) => format!(
            "{}, {} kcal",
            single_line(&exercise.description),
            exercise.calories_burned
        ),
    }
}
