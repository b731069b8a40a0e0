// ABOUTME: Body composition and goal progress calculations
// ABOUTME: BMI, delta to an ideal BMI, and clamped weight-loss progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body Mass Index: `weight_kg / (height_cm / 100)^2`
///
/// Kept at full precision; callers round to one decimal for display.
/// Returns `0.0` for a non-positive height instead of dividing by zero.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Signed distance from `bmi` to the ideal reference
#[must_use]
pub fn bmi_delta(bmi: f64, ideal_bmi: f64) -> f64 {
    bmi - ideal_bmi
}

/// Fraction of the planned loss achieved, clamped to `[0, 1]`
///
/// `(start - current) / (start - target)`. When start equals target there
/// is nothing to lose and the result is `0.0`; a non-finite ratio is also
/// reported as `0.0`.
#[must_use]
pub fn weight_loss_progress(
    start_weight_kg: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
) -> f64 {
    let planned = start_weight_kg - target_weight_kg;
    if planned.abs() < f64::EPSILON {
        return 0.0;
    }
    let ratio = (start_weight_kg - current_weight_kg) / planned;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_reference_case() {
        let bmi = calculate_bmi(75.5, 172.0);
        assert!((bmi - 25.520_552).abs() < 1e-5);
        assert_eq!(format!("{bmi:.1}"), "25.5");
    }

    #[test]
    fn test_bmi_zero_height_guarded() {
        assert!(calculate_bmi(70.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_reference_case() {
        let progress = weight_loss_progress(78.0, 75.5, 60.0);
        assert!((progress - 2.5 / 18.0).abs() < 1e-12);
        assert_eq!(format!("{progress:.3}"), "0.139");
    }

    #[test]
    fn test_progress_degenerate_is_zero() {
        let progress = weight_loss_progress(60.0, 58.0, 60.0);
        assert!(progress.abs() < f64::EPSILON);
        assert!(!progress.is_nan());
    }

    #[test]
    fn test_progress_clamped() {
        assert!(weight_loss_progress(78.0, 80.0, 60.0).abs() < f64::EPSILON);
        assert!((weight_loss_progress(78.0, 55.0, 60.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_delta_sign() {
        assert!(bmi_delta(25.5, 20.3) > 0.0);
        assert!(bmi_delta(19.0, 20.3) < 0.0);
    }
}
