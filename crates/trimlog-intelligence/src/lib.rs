// ABOUTME: Body-metrics calculation engine for the Trimlog log
// ABOUTME: Pure BMI, BMR, TDEE, hydration, and progress calculations plus their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trimlog Intelligence
//!
//! Stateless metric calculations. Every function is deterministic and free
//! of side effects; the engine trusts the invariants enforced by the data
//! model rather than re-validating its inputs.

/// Metric configuration (BMR coefficients, TDEE multiplier, reference values)
pub mod config;

/// BMR, TDEE, and recommended intake
pub mod nutrition_calculator;

/// BMI and weight-loss progress
pub mod body_metrics;

/// Hydration totals
pub mod hydration;

/// Aggregated snapshot for the generators
pub mod metrics;

pub use body_metrics::{bmi_delta, calculate_bmi, weight_loss_progress};
pub use config::{BmrConfig, BodyCompositionConfig, ConfigError, EnergyConfig, MetricsConfig};
pub use hydration::{hydration_by_type, total_hydration, DrinkTotal};
pub use metrics::{MetricsSnapshot, WeightSource};
pub use nutrition_calculator::{
    calculate_mifflin_st_jeor, calculate_tdee, recommended_intake_range, IntakeRange,
};
