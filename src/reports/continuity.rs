// ABOUTME: Continuity briefing generator that lets a fresh advisory session resume context
// ABOUTME: Combines profile, metabolic figures, persona, history memory, and today's log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Continuity briefing
//!
//! The briefing must be self-sufficient: a reader with no access to earlier
//! conversations gets the profile, the metabolic figures, the advisor
//! persona, the history memory, and today's log in one block. The history
//! memory is embedded exactly as supplied.

use super::text::{format_quantity, single_line, single_line_or};
use crate::logging::SessionLogger;
use crate::store::LogStore;
use trimlog_core::constants::{formats, placeholders};
use trimlog_core::models::{DailyLog, HistoryMemory, MealSlot, Profile};
use trimlog_intelligence::{MetricsConfig, MetricsSnapshot, WeightSource};

/// Persona directives the advisor is asked to follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuityOptions {
    /// One directive per numbered line
    pub persona: Vec<String>,
}

impl Default for ContinuityOptions {
    fn default() -> Self {
        Self {
            persona: vec![
                "Rigorous expert: every calorie and data point must be calculated precisely; \
                 no vague estimates, and look up what you do not know."
                    .into(),
                "Soul companion: keep the tone witty and warm, tease me like a close friend, \
                 and never sound like a news anchor."
                    .into(),
            ],
        }
    }
}

/// Renders the continuity briefing text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuityGenerator {
    /// Persona configuration
    pub options: ContinuityOptions,
}

impl ContinuityGenerator {
    /// Generator with custom persona directives
    #[must_use]
    pub const fn new(options: ContinuityOptions) -> Self {
        Self { options }
    }

    /// Render the briefing for the store's current state
    #[must_use]
    pub fn render(&self, store: &LogStore, config: &MetricsConfig) -> String {
        let metrics = store.metrics(config);
        self.render_parts(store.profile(), store.log(), store.history_memory(), &metrics)
    }

    /// Render from already computed metrics
    #[must_use]
    pub fn render_parts(
        &self,
        profile: &Profile,
        log: &DailyLog,
        history: &HistoryMemory,
        metrics: &MetricsSnapshot,
    ) -> String {
        let sections = [
            directive_section(profile),
            profile_section(profile, metrics),
            metabolism_section(metrics),
            self.persona_section(),
            history_section(history),
            today_section(log, metrics),
            next_step_section(metrics),
        ];

        let briefing = sections.join("\n\n");
        SessionLogger::log_render("continuity_briefing", log.date(), briefing.len());
        briefing
    }

    fn persona_section(&self) -> String {
        let mut lines = vec!["## Your persona (must follow)".to_owned()];
        lines.extend(
            self.options
                .persona
                .iter()
                .enumerate()
                .map(|(index, directive)| format!("{}. {directive}", index + 1)),
        );
        lines.join("\n")
    }
}

fn directive_section(profile: &Profile) -> String {
    format!(
        "[Core directive: resume personal coach mode]\n\
         I am {}. Load my latest profile below and resume our previous coaching context.",
        profile.nickname()
    )
}

fn profile_section(profile: &Profile, metrics: &MetricsSnapshot) -> String {
    let weight_source = match metrics.weight_source {
        WeightSource::TodayLog => "today's weigh-in",
        WeightSource::Profile => "latest profile value",
    };
    let phase = if metrics.is_above_target() {
        "fat loss"
    } else {
        "maintenance"
    };

    [
        "## Profile".to_owned(),
        format!("- Nickname: {}", profile.nickname()),
        format!("- Gender: {}", profile.gender().label()),
        format!("- Age: {}", profile.age()),
        format!("- Height: {} cm", format_quantity(profile.height_cm())),
        format!(
            "- Current weight: {} kg ({weight_source})",
            format_quantity(metrics.current_weight_kg)
        ),
        format!(
            "- Target weight: {} kg",
            format_quantity(profile.target_weight_kg())
        ),
        format!(
            "- Start weight: {} kg",
            format_quantity(profile.start_weight_kg())
        ),
        format!("- Phase: {phase} (BMI {:.1})", metrics.current_bmi),
        format!("- Progress: {}", progress_text(metrics)),
    ]
    .join("\n")
}

fn progress_text(metrics: &MetricsSnapshot) -> String {
    let lost = if metrics.lost_kg >= 0.0 {
        format!("{} kg lost", format_quantity(metrics.lost_kg))
    } else {
        format!("{} kg gained", format_quantity(-metrics.lost_kg))
    };
    let remaining = if metrics.is_above_target() {
        format!("{} kg to go", format_quantity(metrics.remaining_kg))
    } else {
        "target reached".to_owned()
    };
    format!(
        "{:.1}% of the planned loss ({lost}, {remaining})",
        metrics.weight_loss_progress * 100.0
    )
}

fn metabolism_section(metrics: &MetricsSnapshot) -> String {
    [
        "## Metabolism".to_owned(),
        format!("- BMR: {:.0} kcal/day (Mifflin-St Jeor)", metrics.bmr),
        format!(
            "- TDEE: {:.0} kcal/day (activity multiplier {})",
            metrics.tdee, metrics.tdee_multiplier
        ),
        format!(
            "- Recommended intake: {:.0}-{:.0} kcal/day",
            metrics.intake.min_kcal, metrics.intake.max_kcal
        ),
    ]
    .join("\n")
}

fn history_section(history: &HistoryMemory) -> String {
    let body = if history.is_blank() {
        placeholders::NO_HISTORY
    } else {
        history.as_str()
    };
    format!("## History summary\n{body}")
}

fn today_section(log: &DailyLog, metrics: &MetricsSnapshot) -> String {
    let weight = metrics.recorded_weight_kg.map_or_else(
        || placeholders::NOT_RECORDED.to_owned(),
        |kg| format!("{} kg", format_quantity(kg)),
    );

    let meals = MealSlot::ALL
        .iter()
        .map(|&slot| {
            format!(
                "{}: {}",
                slot.label(),
                single_line_or(&log.meal(slot).text, placeholders::NOT_RECORDED)
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    let extras = if log.extra_meals().is_empty() {
        placeholders::NONE.to_owned()
    } else {
        log.extra_meals()
            .iter()
            .map(|extra| {
                format!(
                    "{} {}",
                    extra.time.format(formats::CLOCK),
                    single_line(&extra.description)
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    };

    let hydration = if log.hydration_log().is_empty() {
        placeholders::NOT_RECORDED.to_owned()
    } else {
        format!("{} ml", metrics.hydration_total_ml)
    };

    let exercise = log.exercise().map_or_else(
        || placeholders::NOT_RECORDED.to_owned(),
        |exercise| {
            format!(
                "{}, {} kcal",
                single_line_or(&exercise.description, "unspecified"),
                exercise.calories_burned
            )
        },
    );

    [
        format!("## Today ({})", log.date().format(formats::DATE)),
        format!("- Weight: {weight}"),
        format!("- Meals: {meals}"),
        format!("- Extra meals: {extras}"),
        format!("- Hydration: {hydration}"),
        format!("- Exercise: {exercise}"),
    ]
    .join("\n")
}

fn next_step_section(metrics: &MetricsSnapshot) -> String {
    format!(
        "## Next step\n\
         Treat everything above as established context and do not ask me again for \
         information already supplied. Based on my current weight of {} kg, give me \
         today's advice directly.",
        format_quantity(metrics.current_weight_kg)
    )
}
