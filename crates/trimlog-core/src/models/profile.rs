// ABOUTME: User profile with identity and slowly-changing body parameters
// ABOUTME: Gender, age, height, and start/current/target weights with validated setters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::constants::profile_defaults;
use crate::errors::{AppError, AppResult};
use crate::validation::{ensure_non_empty, ensure_nonzero, ensure_positive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
///
/// Mifflin-St Jeor only defines male and female constants, so the model is
/// restricted to those two values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

impl Gender {
    /// Stable display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(AppError::invalid_field(
                "gender",
                format!("unknown gender '{s}' (expected male or female)"),
            )),
        }
    }
}

/// Identity and body parameters for the single user of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    nickname: String,
    gender: Gender,
    age: u32,
    height_cm: f64,
    start_weight_kg: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: profile_defaults::NICKNAME.to_owned(),
            gender: Gender::Male,
            age: profile_defaults::AGE,
            height_cm: profile_defaults::HEIGHT_CM,
            start_weight_kg: profile_defaults::START_WEIGHT_KG,
            current_weight_kg: profile_defaults::CURRENT_WEIGHT_KG,
            target_weight_kg: profile_defaults::TARGET_WEIGHT_KG,
        }
    }
}

impl Profile {
    /// Build a profile from explicit values, validating every field
    ///
    /// # Errors
    ///
    /// Returns the first violated field constraint
    pub fn new(
        nickname: &str,
        gender: Gender,
        age: u32,
        height_cm: f64,
        start_weight_kg: f64,
        current_weight_kg: f64,
        target_weight_kg: f64,
    ) -> AppResult<Self> {
        let profile = Self {
            nickname: nickname.trim().to_owned(),
            gender,
            age,
            height_cm,
            start_weight_kg,
            current_weight_kg,
            target_weight_kg,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Display name used in the generated artifacts
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Gender used for the BMR constant
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight at the start of the programme (kg)
    #[must_use]
    pub const fn start_weight_kg(&self) -> f64 {
        self.start_weight_kg
    }

    /// Latest known weight outside of today's log (kg)
    #[must_use]
    pub const fn current_weight_kg(&self) -> f64 {
        self.current_weight_kg
    }

    /// Target weight (kg), always positive
    #[must_use]
    pub const fn target_weight_kg(&self) -> f64 {
        self.target_weight_kg
    }

    /// Set the nickname; surrounding whitespace is dropped
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` on field `nickname` if it is blank
    pub fn set_nickname(&mut self, nickname: &str) -> AppResult<()> {
        self.nickname = ensure_non_empty("nickname", nickname)?;
        Ok(())
    }

    /// Set the gender
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Set the age in years
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `age` if it is zero
    pub fn set_age(&mut self, age: u32) -> AppResult<()> {
        self.age = ensure_nonzero("age", age)?;
        Ok(())
    }

    /// Set the height in centimeters
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `height_cm` if not positive
    pub fn set_height_cm(&mut self, height_cm: f64) -> AppResult<()> {
        self.height_cm = ensure_positive("height_cm", height_cm)?;
        Ok(())
    }

    /// Set the start weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `start_weight_kg` if not positive
    pub fn set_start_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        self.start_weight_kg = ensure_positive("start_weight_kg", kg)?;
        Ok(())
    }

    /// Set the latest known weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `current_weight_kg` if not positive
    pub fn set_current_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        self.current_weight_kg = ensure_positive("current_weight_kg", kg)?;
        Ok(())
    }

    /// Set the target weight in kilograms
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` on field `target_weight_kg` if not positive
    pub fn set_target_weight_kg(&mut self, kg: f64) -> AppResult<()> {
        self.target_weight_kg = ensure_positive("target_weight_kg", kg)?;
        Ok(())
    }

    /// Check every field against the profile invariants
    ///
    /// Used when a profile arrives from outside the setters, e.g. a
    /// deserialized snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first violated field constraint
    pub fn validate(&self) -> AppResult<()> {
        ensure_non_empty("nickname", &self.nickname)?;
        ensure_nonzero("age", self.age)?;
        ensure_positive("height_cm", self.height_cm)?;
        ensure_positive("start_weight_kg", self.start_weight_kg)?;
        ensure_positive("current_weight_kg", self.current_weight_kg)?;
        ensure_positive("target_weight_kg", self.target_weight_kg)?;
        Ok(())
    }
}
