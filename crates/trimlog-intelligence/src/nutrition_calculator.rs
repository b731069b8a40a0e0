// ABOUTME: Energy expenditure calculations using peer-reviewed formulas
// ABOUTME: Mifflin-St Jeor BMR, fixed-multiplier TDEE, and the recommended intake range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! All functions are pure and total over inputs that already satisfy the
//! profile and log invariants.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{BmrConfig, EnergyConfig};
use serde::{Deserialize, Serialize};
use trimlog_core::models::Gender;

/// Recommended daily intake window (kcal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeRange {
    /// Lower bound, equal to BMR
    pub min_kcal: f64,
    /// Upper bound, BMR plus the configured surplus
    pub max_kcal: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x 1.375 (lightly active, `McArdle` et al. 2010)
#[must_use]
pub fn calculate_tdee(bmr: f64, config: &EnergyConfig) -> f64 {
    bmr * config.tdee_multiplier
}

/// Recommended intake range: `[BMR, BMR + surplus]`
#[must_use]
pub fn recommended_intake_range(bmr: f64, config: &EnergyConfig) -> IntakeRange {
    IntakeRange {
        min_kcal: bmr,
        max_kcal: bmr + config.intake_surplus_kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_st_jeor_male() {
        let bmr = calculate_mifflin_st_jeor(75.5, 172.0, 22, Gender::Male, &BmrConfig::default());

        // 10 * 75.5 + 6.25 * 172 - 5 * 22 + 5 = 755 + 1075 - 110 + 5 = 1725
        assert!((bmr - 1725.0).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_st_jeor_female_offset() {
        let config = BmrConfig::default();
        let male = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Male, &config);
        let female = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &config);

        assert!((male - female - 166.0).abs() < 1e-9);
        assert!((female - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_fixed_multiplier() {
        let tdee = calculate_tdee(1725.0, &EnergyConfig::default());
        assert!((tdee - 2371.875).abs() < 1e-9);
        assert_eq!(format!("{tdee:.0}"), "2372");
    }

    #[test]
    fn test_intake_range_spans_surplus() {
        let range = recommended_intake_range(1500.0, &EnergyConfig::default());
        assert!((range.min_kcal - 1500.0).abs() < f64::EPSILON);
        assert!((range.max_kcal - 1700.0).abs() < f64::EPSILON);
    }
}
