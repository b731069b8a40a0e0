// ABOUTME: Field validation helpers shared by the data model and the log store
// ABOUTME: Lower-bound, finiteness, and non-empty checks that report the offending field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};

/// Require a finite value greater than zero
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` naming `field` when the value is not finite
/// or not positive
pub fn ensure_positive(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::out_of_range(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(AppError::out_of_range(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}

/// Require a finite value that is zero or more
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` naming `field` when the value is not finite
/// or negative
pub fn ensure_non_negative(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::out_of_range(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(AppError::out_of_range(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(value)
}

/// Require a count of at least one
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` naming `field` when `value` is zero
pub fn ensure_nonzero(field: &str, value: u32) -> AppResult<u32> {
    if value == 0 {
        return Err(AppError::out_of_range(field, "must be greater than zero, got 0"));
    }
    Ok(value)
}

/// Trim `text` and require it to be non-empty
///
/// # Errors
///
/// Returns `INVALID_INPUT` naming `field` when nothing but whitespace remains
pub fn ensure_non_empty(field: &str, text: &str) -> AppResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_field(field, "must not be empty"));
    }
    Ok(trimmed.to_owned())
}
