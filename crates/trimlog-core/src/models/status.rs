// ABOUTME: Bowel movement and energy level status enums for the daily log
// ABOUTME: Closed enums with stable labels and case-insensitive parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bowel movement status for the day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BowelStatus {
    /// Nothing recorded yet
    #[default]
    Unrecorded,
    /// Normal, smooth
    Smooth,
    /// Constipated
    Constipated,
    /// Diarrhea
    Diarrhea,
}

impl BowelStatus {
    /// Stable display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unrecorded => "unrecorded",
            Self::Smooth => "smooth",
            Self::Constipated => "constipated",
            Self::Diarrhea => "diarrhea",
        }
    }

    /// Whether a real status has been recorded
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        !matches!(self, Self::Unrecorded)
    }
}

impl fmt::Display for BowelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BowelStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "unrecorded" | "none" => Ok(Self::Unrecorded),
            "smooth" | "normal" => Ok(Self::Smooth),
            "constipated" => Ok(Self::Constipated),
            "diarrhea" | "diarrhoea" => Ok(Self::Diarrhea),
            _ => Err(AppError::invalid_field(
                "bowel_status",
                format!("unknown bowel status '{s}' (expected smooth, constipated, diarrhea)"),
            )),
        }
    }
}

/// Self-reported energy level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    /// Exhausted
    Exhausted,
    /// Tired
    Tired,
    /// Normal
    Normal,
    /// Good
    Good,
    /// Great
    Great,
}

impl EnergyLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Exhausted,
        Self::Tired,
        Self::Normal,
        Self::Good,
        Self::Great,
    ];

    /// Stable display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::Tired => "tired",
            Self::Normal => "normal",
            Self::Good => "good",
            Self::Great => "great",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Self::ALL
            .into_iter()
            .find(|level| level.label() == token)
            .ok_or_else(|| {
                AppError::invalid_field(
                    "energy_level",
                    format!(
                        "unknown energy level '{s}' \
                         (expected exhausted, tired, normal, good, great)"
                    ),
                )
            })
    }
}
