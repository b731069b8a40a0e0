// ABOUTME: Text artifact generators for the advisory sessions
// ABOUTME: Daily report for the ongoing session and continuity briefing for a fresh one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report generators
//!
//! Both generators are deterministic: the same store and configuration
//! always render the same text, and rendering never mutates the store.
//! Absent data is rendered as an explicit placeholder, never omitted.

/// Daily report for the ongoing advisory session
pub mod daily;

/// Cross-session continuity briefing
pub mod continuity;

/// Shared number and text formatting
pub mod text;

pub use continuity::{ContinuityGenerator, ContinuityOptions};
pub use daily::DailyReportGenerator;
