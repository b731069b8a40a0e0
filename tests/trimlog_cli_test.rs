// ABOUTME: Integration tests for the trimlog-cli binary
// ABOUTME: Runs the shell against a temp snapshot to check date rollover, rejected input, and renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the trimlog-cli binary.
//!
//! Every test points `--snapshot` at its own temp directory so the user's
//! real session file is never touched.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use trimlog::models::{MealSlot, Profile};
use trimlog::session::SnapshotFile;
use trimlog::store::LogStore;

mod common;

/// Helper to run the CLI against `snapshot` and capture output
fn run_cli(snapshot: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_trimlog-cli"))
        .arg("--snapshot")
        .arg(snapshot)
        .args(args)
        .env_remove("TRIMLOG_SNAPSHOT_PATH")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("session.json")
}

fn stale_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Save a session whose log belongs to a day long past
fn seed_stale_session(path: &Path) {
    let mut store = LogStore::new(Profile::default(), stale_date());
    store.set_meal_text(MealSlot::Dinner, "leftover hotpot");
    store.set_history_memory("Week 1: 78 -> 77.1 kg");
    SnapshotFile::new(path).save(&store.snapshot()).unwrap();
}

fn load_store(path: &Path) -> LogStore {
    LogStore::from_snapshot(SnapshotFile::new(path).load().unwrap()).unwrap()
}

#[test]
fn test_cli_help_shows_commands() {
    let dir = TempDir::new().unwrap();
    let (exit_code, stdout, _stderr) = run_cli(&snapshot_path(&dir), &["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["weight", "meal", "water", "snack", "report", "continuity"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_stale_log_replaced_on_mutation() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);
    seed_stale_session(&path);

    let (exit_code, stdout, stderr) = run_cli(&path, &["weight", "74.8"]);
    assert_eq!(exit_code, 0, "weight should succeed: {stderr}");
    assert!(stdout.contains("74.8 kg"));

    let store = load_store(&path);
    assert_ne!(store.log().date(), stale_date());
    assert!(!store.log().meal(MealSlot::Dinner).is_recorded());
    assert!(store
        .log()
        .weight_kg()
        .is_some_and(|kg| (kg - 74.8).abs() < common::EPS));
    // Profile and history survive the day boundary
    assert_eq!(store.history_memory().as_str(), "Week 1: 78 -> 77.1 kg");
}

#[test]
fn test_explicit_date_keeps_matching_log() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);
    seed_stale_session(&path);

    let (exit_code, _stdout, stderr) = run_cli(
        &path,
        &["--date", "2020-01-01", "water", "plain_water", "250", "--at", "08:00"],
    );
    assert_eq!(exit_code, 0, "water should succeed: {stderr}");

    let store = load_store(&path);
    assert_eq!(store.log().date(), stale_date());
    assert_eq!(store.log().meal(MealSlot::Dinner).text, "leftover hotpot");
    assert_eq!(store.log().hydration_log().len(), 1);
}

#[test]
fn test_negative_volume_names_field() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);

    let (exit_code, _stdout, stderr) = run_cli(&path, &["water", "plain_water", "-250"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("volume_ml"), "stderr: {stderr}");
    assert!(!path.exists(), "rejected input must not create a snapshot");
}

#[test]
fn test_negative_calories_names_field() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);
    seed_stale_session(&path);
    let before = fs::read(&path).unwrap();

    let (exit_code, _stdout, stderr) = run_cli(&path, &["exercise", "-120", "walk"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("calories_burned"), "stderr: {stderr}");
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_renders_never_write_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);
    seed_stale_session(&path);
    let before = fs::read(&path).unwrap();

    let (exit_code, report, stderr) = run_cli(&path, &["report"]);
    assert_eq!(exit_code, 0, "report should succeed: {stderr}");
    assert!(report.contains("Daily Diet & Exercise Report"));
    assert!(!report.contains("leftover hotpot"));

    let (exit_code, briefing, stderr) = run_cli(&path, &["continuity"]);
    assert_eq!(exit_code, 0, "continuity should succeed: {stderr}");
    assert!(briefing.contains("Week 1: 78 -> 77.1 kg"));

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(load_store(&path).log().date(), stale_date());
}

#[test]
fn test_meal_text_keeps_photo_flag_unless_told() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);

    assert_eq!(run_cli(&path, &["meal", "lunch", "rice", "--image"]).0, 0);
    assert_eq!(run_cli(&path, &["meal", "lunch", "rice and tofu"]).0, 0);
    let lunch = load_store(&path).log().meal(MealSlot::Lunch).clone();
    assert_eq!(lunch.text, "rice and tofu");
    assert!(lunch.has_image);

    assert_eq!(run_cli(&path, &["meal", "lunch", "tofu soup", "--no-image"]).0, 0);
    assert!(!load_store(&path).log().meal(MealSlot::Lunch).has_image);

    let (exit_code, _stdout, _stderr) =
        run_cli(&path, &["meal", "lunch", "x", "--image", "--no-image"]);
    assert_eq!(exit_code, 2, "conflicting photo flags are a usage error");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(&dir);

    let (exit_code, stdout, _stderr) = run_cli(&path, &["init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Session for"));

    let (exit_code, _stdout, stderr) = run_cli(&path, &["init"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("--force"));

    assert_eq!(run_cli(&path, &["init", "--force"]).0, 0);
}
