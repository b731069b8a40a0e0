// ABOUTME: Hydration tracking models for the daily drink log
// ABOUTME: DrinkType closed enum and time-stamped HydrationEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::errors::AppError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of drink recorded in the hydration log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    /// Plain water
    PlainWater,
    /// Coffee or tea
    CoffeeOrTea,
    /// Zero-sugar beverage
    ZeroSugarBeverage,
    /// Milk or soy milk
    MilkOrSoy,
    /// Soup
    Soup,
}

impl DrinkType {
    /// Stable display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PlainWater => "plain water",
            Self::CoffeeOrTea => "coffee/tea",
            Self::ZeroSugarBeverage => "zero-sugar beverage",
            Self::MilkOrSoy => "milk/soy milk",
            Self::Soup => "soup",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrinkType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "plain_water" | "water" => Ok(Self::PlainWater),
            "coffee_or_tea" | "coffee" | "tea" => Ok(Self::CoffeeOrTea),
            "zero_sugar_beverage" | "zero_sugar" | "diet_soda" => Ok(Self::ZeroSugarBeverage),
            "milk_or_soy" | "milk" | "soy" | "soy_milk" => Ok(Self::MilkOrSoy),
            "soup" => Ok(Self::Soup),
            _ => Err(AppError::invalid_field(
                "drink_type",
                format!(
                    "unknown drink type '{s}' (expected plain_water, coffee_or_tea, \
                     zero_sugar_beverage, milk_or_soy, soup)"
                ),
            )),
        }
    }
}

/// One recorded drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationEntry {
    /// Clock time the drink was recorded
    pub time: NaiveTime,
    /// What was drunk
    pub drink_type: DrinkType,
    /// Volume in milliliters, always positive
    pub volume_ml: u32,
}
