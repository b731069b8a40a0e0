// ABOUTME: Integration tests for the daily report generator
// ABOUTME: Checks fixed field order, explicit placeholders, and deterministic rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trimlog::models::{BowelStatus, DrinkType, EnergyLevel, MealSlot};
use trimlog::reports::DailyReportGenerator;
use trimlog::store::LogStore;
use trimlog_intelligence::MetricsConfig;

mod common;

fn render(store: &LogStore) -> String {
    DailyReportGenerator::default().render(store, &MetricsConfig::default())
}

fn position(report: &str, needle: &str) -> usize {
    report
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{report}"))
}

#[test]
fn test_empty_log_renders_every_placeholder() {
    let report = render(&common::create_test_store());

    let expected = "\
=== 2026-10-14 (Wednesday) Daily Diet & Exercise Report: Xiaoqian ===
[Weight] (not recorded)
[Bowel] (not recorded)
[Energy] (not recorded)
[Breakfast] (not recorded) | image: no image
[Lunch] (not recorded) | image: no image
[Dinner] (not recorded) | image: no image
[Extra meals] (none)
[Hydration] (not recorded)
[Exercise] (not recorded)
---------------------------
Coach, please analyze!";
    assert_eq!(report, expected);
}

#[test]
fn test_full_log_renders_in_fixed_order() {
    let mut store = common::create_test_store();
    store.set_weight(75.5).unwrap();
    store.set_bowel_status(BowelStatus::Smooth);
    store.set_energy_level(EnergyLevel::Good);
    store.set_meal_text(MealSlot::Dinner, "steamed fish, greens");
    store.set_meal_text(MealSlot::Breakfast, "black coffee");
    store.set_meal_text(MealSlot::Lunch, "skinless chicken leg, half a bowl of rice");
    store.set_meal_image_flag(MealSlot::Lunch, true);
    store
        .append_extra_meal(common::at(21, 10), "hotpot with friends")
        .unwrap();
    store.append_extra_meal(common::at(15, 0), "one apple").unwrap();
    store
        .append_hydration(DrinkType::PlainWater, 300, common::at(8, 0))
        .unwrap();
    store
        .append_hydration(DrinkType::CoffeeOrTea, 200, common::at(9, 0))
        .unwrap();
    store
        .append_hydration(DrinkType::PlainWater, 300, common::at(12, 0))
        .unwrap();
    store.set_exercise(350, "Fit Boxing");

    let report = render(&store);

    assert!(report.contains("[Weight] 75.5 kg (BMI 25.5, +5.2 vs ideal 20.3)"));
    assert!(report.contains("[Bowel] smooth"));
    assert!(report.contains("[Energy] good"));
    assert!(
        report.contains("[Lunch] skinless chicken leg, half a bowl of rice | image: image ready")
    );
    assert!(report.contains("[Extra meals]\n- 21:10 hotpot with friends\n- 15:00 one apple"));
    assert!(report.contains("[Hydration] 800 ml total (plain water 600 ml, coffee/tea 200 ml)"));
    assert!(report.contains("[Exercise] Fit Boxing, 350 kcal"));
    assert!(report.ends_with("Coach, please analyze! [Photos follow in my next messages.]"));

    let order = [
        "[Weight]",
        "[Bowel]",
        "[Energy]",
        "[Breakfast]",
        "[Lunch]",
        "[Dinner]",
        "[Extra meals]",
        "[Hydration]",
        "[Exercise]",
    ];
    let positions: Vec<_> = order.iter().map(|tag| position(&report, tag)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_multiline_meal_stays_on_one_line() {
    let mut store = common::create_test_store();
    store.set_meal_text(MealSlot::Breakfast, "oatmeal\n\n  boiled egg\n");

    let report = render(&store);
    let meal_lines: Vec<_> = report
        .lines()
        .filter(|line| {
            line.starts_with("[Breakfast]")
                || line.starts_with("[Lunch]")
                || line.starts_with("[Dinner]")
        })
        .collect();

    assert_eq!(meal_lines.len(), 3);
    assert_eq!(meal_lines[0], "[Breakfast] oatmeal / boiled egg | image: no image");
}

#[test]
fn test_rendering_is_deterministic_and_read_only() {
    let mut store = common::create_test_store();
    store
        .append_hydration(DrinkType::Soup, 250, common::at(19, 0))
        .unwrap();
    let before = store.clone();

    let first = render(&store);
    let second = render(&store);
    assert_eq!(first, second);
    assert_eq!(store, before);
}

#[test]
fn test_undo_removes_hydration_from_report() {
    let mut store = common::create_test_store();
    store
        .append_hydration(DrinkType::MilkOrSoy, 250, common::at(7, 0))
        .unwrap();
    store.undo_last_hydration();

    assert!(render(&store).contains("[Hydration] (not recorded)"));
}
