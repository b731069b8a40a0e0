// ABOUTME: Metric configuration for BMR coefficients, energy expenditure, and body composition
// ABOUTME: Defaults follow Mifflin-St Jeor with a fixed lightly-active TDEE multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factor: `McArdle` et al. (2010) Exercise Physiology

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Complete configuration for the metrics engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Daily energy expenditure and intake settings
    pub energy: EnergyConfig,
    /// Body composition reference values
    pub body: BodyCompositionConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
/// expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Energy expenditure configuration
///
/// A single activity multiplier is applied to every user; there is no
/// self-reported activity level input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// TDEE multiplier, lightly active (1-3 days/week): 1.375
    pub tdee_multiplier: f64,
    /// Width of the recommended intake range above BMR (kcal)
    pub intake_surplus_kcal: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            tdee_multiplier: 1.375,
            intake_surplus_kcal: 200.0,
        }
    }
}

/// Body composition reference values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// BMI the report measures its delta against
    pub ideal_bmi: f64,
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self { ideal_bmi: 20.3 }
    }
}

impl MetricsConfig {
    /// Validate every value used by the engine
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-finite or non-positive
    /// multiplier, a negative intake surplus, or a non-positive ideal BMI
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            ("msj_weight_coef", self.bmr.msj_weight_coef),
            ("msj_height_coef", self.bmr.msj_height_coef),
            ("msj_age_coef", self.bmr.msj_age_coef),
            ("msj_male_constant", self.bmr.msj_male_constant),
            ("msj_female_constant", self.bmr.msj_female_constant),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let multiplier = self.energy.tdee_multiplier;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "tdee_multiplier must be positive, got {multiplier}"
            )));
        }

        let surplus = self.energy.intake_surplus_kcal;
        if !surplus.is_finite() || surplus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "intake_surplus_kcal must not be negative, got {surplus}"
            )));
        }

        let ideal_bmi = self.body.ideal_bmi;
        if !ideal_bmi.is_finite() || ideal_bmi <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "ideal_bmi must be positive, got {ideal_bmi}"
            )));
        }

        Ok(())
    }
}
