// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Exercises TRIMLOG_* parsing, defaults, and rejection of unparsable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use trimlog::config::{Environment, TrackerConfig};
use trimlog::constants::env_keys;
use trimlog::models::Gender;

mod common;

const ALL_KEYS: [&str; 12] = [
    env_keys::NICKNAME,
    env_keys::GENDER,
    env_keys::AGE,
    env_keys::HEIGHT_CM,
    env_keys::START_WEIGHT_KG,
    env_keys::CURRENT_WEIGHT_KG,
    env_keys::TARGET_WEIGHT_KG,
    env_keys::TDEE_MULTIPLIER,
    env_keys::INTAKE_SURPLUS_KCAL,
    env_keys::IDEAL_BMI,
    env_keys::SNAPSHOT_PATH,
    env_keys::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_variables() {
    clear_env();
    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.profile_defaults.nickname, "Xiaoqian");
    assert_eq!(config.environment, Environment::Development);
    assert!((config.metrics.energy.tdee_multiplier - 1.375).abs() < f64::EPSILON);
    assert!(config.snapshot_path.ends_with("trimlog/session.json"));
}

#[test]
#[serial]
fn test_variables_override_defaults() {
    clear_env();
    env::set_var(env_keys::NICKNAME, "Mei");
    env::set_var(env_keys::GENDER, "Female");
    env::set_var(env_keys::AGE, "31");
    env::set_var(env_keys::HEIGHT_CM, " 160.5 ");
    env::set_var(env_keys::TARGET_WEIGHT_KG, "52");
    env::set_var(env_keys::TDEE_MULTIPLIER, "1.2");
    env::set_var(env_keys::IDEAL_BMI, "21");
    env::set_var(env_keys::SNAPSHOT_PATH, "/tmp/trimlog-test/session.json");
    env::set_var(env_keys::ENVIRONMENT, "production");

    let config = TrackerConfig::from_env().unwrap();
    clear_env();

    let profile = config.profile_defaults.to_profile().unwrap();
    assert_eq!(profile.nickname(), "Mei");
    assert_eq!(profile.gender(), Gender::Female);
    assert_eq!(profile.age(), 31);
    assert!((profile.height_cm() - 160.5).abs() < f64::EPSILON);
    assert!((config.metrics.energy.tdee_multiplier - 1.2).abs() < f64::EPSILON);
    assert!((config.metrics.body.ideal_bmi - 21.0).abs() < f64::EPSILON);
    assert_eq!(
        config.snapshot_path,
        PathBuf::from("/tmp/trimlog-test/session.json")
    );
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_unparsable_variable_names_the_key() {
    clear_env();
    env::set_var(env_keys::AGE, "twenty-two");
    let error = TrackerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains(env_keys::AGE));
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() {
    clear_env();
    env::set_var(env_keys::TDEE_MULTIPLIER, "0");
    assert!(TrackerConfig::from_env().is_err());

    clear_env();
    env::set_var(env_keys::TARGET_WEIGHT_KG, "-5");
    assert!(TrackerConfig::from_env().is_err());

    clear_env();
    env::set_var(env_keys::GENDER, "other");
    assert!(TrackerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_summary_reflects_configuration() {
    clear_env();
    common::init_test_logging();
    env::set_var(env_keys::INTAKE_SURPLUS_KCAL, "150");
    let summary = TrackerConfig::from_env().unwrap().summary();
    clear_env();

    assert!(summary.contains("Intake Surplus: 150 kcal"));
}
