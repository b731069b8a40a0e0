// ABOUTME: Configuration module for the Trimlog shell
// ABOUTME: Environment-only configuration of profile defaults, metrics, and snapshot location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ProfileDefaults, TrackerConfig};
