// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging plus profile, date, and store builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `trimlog`

use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::sync::Once;
use tracing::Level;
use trimlog::models::{Gender, Profile};
use trimlog::store::LogStore;

static INIT_LOGGER: Once = Once::new();

/// Float tolerance for metric assertions
pub const EPS: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The reference date used across tests (a Wednesday)
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// Clock time helper
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// The default profile: male, 22, 172 cm, 78 -> 75.5 kg, target 60 kg
pub fn reference_profile() -> Profile {
    Profile::default()
}

/// A female profile for BMR offset checks
pub fn female_profile() -> Profile {
    Profile::new("Mei", Gender::Female, 25, 165.0, 66.0, 64.0, 55.0).unwrap()
}

/// Fresh store on the reference date
pub fn create_test_store() -> LogStore {
    init_test_logging();
    LogStore::new(reference_profile(), test_date())
}
