// ABOUTME: Core types and constants for the Trimlog body-metrics and nutrition log
// ABOUTME: Foundation crate with error handling, the daily log data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trimlog Core
//!
//! Foundation crate providing shared types and constants for the Trimlog
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and field context
//! - **constants**: Profile defaults, placeholder strings, date formats
//! - **models**: Profile, `DailyLog`, meals, hydration, status enums, history memory
//! - **validation**: Range and non-empty checks reporting the offending field

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `DailyLog`, `HydrationEntry`, etc.)
pub mod models;

/// Field validation helpers
pub mod validation;
