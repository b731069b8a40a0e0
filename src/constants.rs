// ABOUTME: Application constants for the Trimlog shell and configuration layer
// ABOUTME: Service name, environment variable keys, and snapshot file locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain constants (profile defaults, placeholders, formats) live in
//! `trimlog_core::constants` and are re-exported here next to the
//! application-level ones.

pub use trimlog_core::constants::{formats, placeholders, profile_defaults};

/// Service names for structured logging
pub mod service_names {
    /// The Trimlog application
    pub const TRIMLOG: &str = "trimlog";
}

/// Environment variable keys read by [`crate::config::environment::TrackerConfig`]
pub mod env_keys {
    /// Profile nickname
    pub const NICKNAME: &str = "TRIMLOG_NICKNAME";
    /// Profile gender (`male`/`female`)
    pub const GENDER: &str = "TRIMLOG_GENDER";
    /// Profile age in years
    pub const AGE: &str = "TRIMLOG_AGE";
    /// Profile height in centimeters
    pub const HEIGHT_CM: &str = "TRIMLOG_HEIGHT_CM";
    /// Weight at the start of the plan
    pub const START_WEIGHT_KG: &str = "TRIMLOG_START_WEIGHT_KG";
    /// Latest known weight
    pub const CURRENT_WEIGHT_KG: &str = "TRIMLOG_CURRENT_WEIGHT_KG";
    /// Goal weight
    pub const TARGET_WEIGHT_KG: &str = "TRIMLOG_TARGET_WEIGHT_KG";
    /// Fixed TDEE activity multiplier
    pub const TDEE_MULTIPLIER: &str = "TRIMLOG_TDEE_MULTIPLIER";
    /// Width of the recommended intake range above BMR
    pub const INTAKE_SURPLUS_KCAL: &str = "TRIMLOG_INTAKE_SURPLUS_KCAL";
    /// Ideal BMI reference
    pub const IDEAL_BMI: &str = "TRIMLOG_IDEAL_BMI";
    /// Snapshot file override
    pub const SNAPSHOT_PATH: &str = "TRIMLOG_SNAPSHOT_PATH";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default snapshot location under the platform data directory
pub mod paths {
    /// Application directory name
    pub const APP_DIR: &str = "trimlog";
    /// Snapshot file name
    pub const SNAPSHOT_FILE: &str = "session.json";
}
