// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default profile values, fixed placeholder strings, and date formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being kept in a
//! single flat namespace.

/// Default profile values applied at session start
pub mod profile_defaults {
    /// Default nickname
    pub const NICKNAME: &str = "Xiaoqian";
    /// Default age in years
    pub const AGE: u32 = 22;
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 172.0;
    /// Default weight at the start of the programme (kg)
    pub const START_WEIGHT_KG: f64 = 78.0;
    /// Default latest known weight (kg)
    pub const CURRENT_WEIGHT_KG: f64 = 75.5;
    /// Default target weight (kg)
    pub const TARGET_WEIGHT_KG: f64 = 60.0;
}

/// Fixed strings rendered by the report and continuity generators
pub mod placeholders {
    /// Rendered in place of any value that was never recorded
    pub const NOT_RECORDED: &str = "(not recorded)";
    /// Rendered when there are no extra-meal entries
    pub const NONE: &str = "(none)";
    /// Image marker when a meal photo is ready
    pub const IMAGE_READY: &str = "image ready";
    /// Image marker when no meal photo exists
    pub const NO_IMAGE: &str = "no image";
    /// Rendered when the history memory blob is empty
    pub const NO_HISTORY: &str =
        "(no history supplied by the user; infer what you can from the data below)";
}

/// Date and clock formats shared by the store, the shell, and the generators
pub mod formats {
    /// Calendar date format (`2025-01-31`)
    pub const DATE: &str = "%Y-%m-%d";
    /// Clock time format (`07:45`)
    pub const CLOCK: &str = "%H:%M";
    /// Report header date format (`2025-01-31 (Friday)`)
    pub const HEADER_DATE: &str = "%Y-%m-%d (%A)";
}
