// ABOUTME: Integration tests for the log store mutation surface
// ABOUTME: Verifies accepted mutations, rejected input, and unchanged state after errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trimlog::errors::ErrorCode;
use trimlog::models::{BowelStatus, DrinkType, EnergyLevel, Gender, MealSlot};
use trimlog::store::LogStore;
use trimlog_intelligence::MetricsConfig;

mod common;

#[test]
fn test_fresh_store_is_structurally_complete() {
    let store = common::create_test_store();
    let log = store.log();

    assert_eq!(log.date(), common::test_date());
    assert!(log.weight_kg().is_none());
    assert_eq!(log.bowel_status(), BowelStatus::Unrecorded);
    assert!(log.energy_level().is_none());
    assert_eq!(log.meals().iter().count(), 3);
    assert!(log.extra_meals().is_empty());
    assert!(log.hydration_log().is_empty());
    assert!(log.exercise().is_none());
    assert!(store.history_memory().is_blank());
}

#[test]
fn test_zero_weight_is_a_real_measurement() {
    let mut store = common::create_test_store();
    store.set_weight(0.0).unwrap();
    assert!(store.log().weight_kg().is_some());

    store.clear_weight();
    assert!(store.log().weight_kg().is_none());
}

#[test]
fn test_negative_weight_rejected_without_change() {
    let mut store = common::create_test_store();
    store.set_weight(75.5).unwrap();
    let before = store.clone();

    let error = store.set_weight(-1.0).unwrap_err();
    assert!(error.code.is_validation());
    assert_eq!(error.field(), Some("weight_kg"));
    assert_eq!(store, before);
}

#[test]
fn test_meal_slots_overwrite_in_place() {
    let mut store = common::create_test_store();
    store.set_meal_text(MealSlot::Breakfast, "black coffee");
    store.set_meal_text(MealSlot::Breakfast, "two boiled eggs");
    store.set_meal_image_flag(MealSlot::Breakfast, true);

    let entry = store.log().meal(MealSlot::Breakfast);
    assert_eq!(entry.text, "two boiled eggs");
    assert!(entry.has_image);
    assert!(!store.log().meal(MealSlot::Lunch).has_image);
    assert_eq!(store.log().meals().iter().count(), 3);
}

#[test]
fn test_zero_volume_rejected() {
    let mut store = common::create_test_store();
    let error = store
        .append_hydration(DrinkType::PlainWater, 0, common::at(9, 0))
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field(), Some("volume_ml"));
    assert!(store.log().hydration_log().is_empty());
}

#[test]
fn test_hydration_keeps_insertion_order() {
    let mut store = common::create_test_store();
    store
        .append_hydration(DrinkType::CoffeeOrTea, 150, common::at(14, 0))
        .unwrap();
    store
        .append_hydration(DrinkType::PlainWater, 500, common::at(7, 30))
        .unwrap();

    let times: Vec<_> = store
        .log()
        .hydration_log()
        .iter()
        .map(|entry| entry.time)
        .collect();
    assert_eq!(times, vec![common::at(14, 0), common::at(7, 30)]);
}

#[test]
fn test_undo_on_empty_is_a_no_op() {
    let mut store = common::create_test_store();
    let before = store.clone();

    assert!(store.undo_last_hydration().is_none());
    assert!(store.remove_last_extra_meal().is_none());
    assert_eq!(store, before);
}

#[test]
fn test_blank_extra_meal_rejected() {
    let mut store = common::create_test_store();
    let error = store
        .append_extra_meal(common::at(16, 0), "   \n ")
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field(), Some("description"));
    assert!(store.log().extra_meals().is_empty());

    store
        .append_extra_meal(common::at(16, 0), "  hotpot, spicy broth ")
        .unwrap();
    assert_eq!(store.log().extra_meals()[0].description, "hotpot, spicy broth");
}

#[test]
fn test_exercise_is_a_single_slot() {
    let mut store = common::create_test_store();
    store.set_exercise(300, "Fit Boxing");
    store.set_exercise(420, "Fit Boxing, extended");

    let exercise = store.log().exercise().unwrap();
    assert_eq!(exercise.calories_burned, 420);
    assert_eq!(exercise.description, "Fit Boxing, extended");

    store.clear_exercise();
    assert!(store.log().exercise().is_none());
}

#[test]
fn test_status_overwrites() {
    let mut store = common::create_test_store();
    store.set_bowel_status(BowelStatus::Constipated);
    store.set_bowel_status(BowelStatus::Smooth);
    store.set_energy_level(EnergyLevel::Tired);

    assert_eq!(store.log().bowel_status(), BowelStatus::Smooth);
    assert_eq!(store.log().energy_level(), Some(EnergyLevel::Tired));
}

#[test]
fn test_profile_edits_validate() {
    let mut store = common::create_test_store();
    store.set_nickname("  Qian ").unwrap();
    store.set_gender(Gender::Female);
    store.set_age(23).unwrap();
    store.set_height_cm(171.5).unwrap();
    store.set_target_weight_kg(58.0).unwrap();

    assert_eq!(store.profile().nickname(), "Qian");
    assert_eq!(store.profile().gender(), Gender::Female);
    assert_eq!(store.profile().age(), 23);

    let before = store.clone();
    assert_eq!(store.set_target_weight_kg(0.0).unwrap_err().field(), Some("target_weight_kg"));
    assert_eq!(store.set_height_cm(f64::NAN).unwrap_err().field(), Some("height_cm"));
    assert_eq!(store.set_age(0).unwrap_err().field(), Some("age"));
    assert_eq!(store.set_nickname(" ").unwrap_err().field(), Some("nickname"));
    assert_eq!(store, before);
}

#[test]
fn test_enum_tokens_parse_or_reject() {
    assert_eq!("Coffee-Tea".parse::<DrinkType>().ok(), None);
    assert_eq!("coffee_or_tea".parse::<DrinkType>().unwrap(), DrinkType::CoffeeOrTea);
    assert_eq!(" DINNER ".parse::<MealSlot>().unwrap(), MealSlot::Dinner);

    let error = "brunch".parse::<MealSlot>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field(), Some("meal_slot"));
}

#[test]
fn test_switching_date_starts_empty_log() {
    let mut store = common::create_test_store();
    store.set_meal_text(MealSlot::Dinner, "salmon salad");
    store.set_history_memory("week one: 78 -> 76.2 kg");

    assert!(store.select_date_str("2026-10-15").unwrap());
    assert!(!store.log().meal(MealSlot::Dinner).is_recorded());
    // Profile and history belong to the session, not the day
    assert_eq!(store.history_memory().as_str(), "week one: 78 -> 76.2 kg");
    assert_eq!(store.profile().nickname(), "Xiaoqian");
}

#[test]
fn test_start_and_current_weight_drive_progress() {
    let mut store = common::create_test_store();
    store.set_start_weight_kg(80.0).unwrap();
    store.set_current_weight_kg(70.0).unwrap();
    store.set_target_weight_kg(60.0).unwrap();

    let metrics = store.metrics(&MetricsConfig::default());
    assert!((metrics.weight_loss_progress - 0.5).abs() < common::EPS);
    assert!((metrics.lost_kg - 10.0).abs() < common::EPS);

    let before = store.clone();
    assert_eq!(store.set_start_weight_kg(-1.0).unwrap_err().field(), Some("start_weight_kg"));
    assert_eq!(store.set_current_weight_kg(0.0).unwrap_err().field(), Some("current_weight_kg"));
    assert_eq!(store, before);
}

#[test]
fn test_large_values_have_no_upper_bound() {
    let mut store = common::create_test_store();

    let entry = store
        .append_hydration(DrinkType::PlainWater, 6000, common::at(7, 0))
        .unwrap();
    assert_eq!(entry.volume_ml, 6000);

    store.set_exercise(12_000, "ultramarathon");
    assert_eq!(store.log().exercise().unwrap().calories_burned, 12_000);

    store.set_weight(612.0).unwrap();
    store.set_age(200).unwrap();
    store.set_height_cm(320.0).unwrap();
    assert_eq!(store.profile().age(), 200);
    assert!(store.log().weight_kg().is_some_and(|kg| (kg - 612.0).abs() < common::EPS));

    let restored = LogStore::from_snapshot(store.snapshot()).unwrap();
    assert_eq!(restored, store);
}
