// ABOUTME: Main library entry point for the Trimlog body-metrics and nutrition log
// ABOUTME: Wires the log store, report generators, session snapshots, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trimlog
//!
//! A single-user log of body weight, meals, hydration, bowel and energy
//! status, and exercise. The accumulated state is rendered into two text
//! artifacts:
//!
//! - a **daily report** sent to an ongoing advisory session, and
//! - a **continuity briefing** that lets a fresh session, with no memory of
//!   earlier conversations, resume the context at once.
//!
//! ## Architecture
//!
//! - **`trimlog-core`**: errors, the data model, and constants
//! - **`trimlog-intelligence`**: pure BMI/BMR/TDEE/hydration/progress metrics
//! - **[`store`]**: the owned [`store::LogStore`], the only mutation surface
//! - **[`reports`]**: the daily report and continuity generators
//! - **[`session`]**: optional JSON snapshot persistence for the CLI shell
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use trimlog::models::{DrinkType, MealSlot, Profile};
//! use trimlog::reports::daily::DailyReportGenerator;
//! use trimlog::store::LogStore;
//! use trimlog_intelligence::MetricsConfig;
//!
//! # fn main() -> trimlog::errors::AppResult<()> {
//! let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap_or_default();
//! let mut store = LogStore::new(Profile::default(), date);
//! store.set_weight(75.5)?;
//! store.set_meal_text(MealSlot::Lunch, "skinless chicken leg, half a bowl of rice");
//! let morning = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default();
//! store.append_hydration(DrinkType::PlainWater, 300, morning)?;
//!
//! let report = DailyReportGenerator::default().render(&store, &MetricsConfig::default());
//! assert!(report.contains("[Lunch] skinless chicken leg"));
//! # Ok(())
//! # }
//! ```

/// Application constants (service name, environment variable keys)
pub mod constants;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Owned session state and its mutation operations
pub mod store;

/// Daily report and continuity briefing generators
pub mod reports;

/// JSON snapshot persistence
pub mod session;

/// Re-export the error types so callers don't need `trimlog_core` directly
pub use trimlog_core::errors;

/// Re-export the data model
pub use trimlog_core::models;

/// Re-export validation helpers
pub use trimlog_core::validation;
