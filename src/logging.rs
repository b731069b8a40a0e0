// ABOUTME: Logging configuration and structured logging setup for the Trimlog shell
// ABOUTME: Installs a stderr tracing subscriber and provides session-level log helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Diagnostics always go to stderr. Stdout carries only the generated
//! artifacts so they can be piped or copied untouched.

use crate::config::{Environment, LogLevel, TrackerConfig};
use crate::constants::service_names;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json::json;
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trimlog_core::errors::AppError;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for the Trimlog crates; dependencies stay at `warn`
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output without targets (default for the CLI)
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::TRIMLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Logging configuration for a loaded [`TrackerConfig`]
    ///
    /// Level and environment come from `config`. Output format, thread ids,
    /// and the service name are read from `LOG_FORMAT`, `LOG_INCLUDE_THREAD`,
    /// and `SERVICE_NAME`. Production always includes source locations.
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        let defaults = Self::default();

        Self {
            level: config.log_level,
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: config.environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            environment: config.environment,
        }
    }

    /// Raise the level to `debug` (the CLI `--verbose` flag)
    #[must_use]
    pub const fn verbose(mut self) -> Self {
        self.level = LogLevel::Debug;
        self
    }

    /// Build the filter for this configuration
    ///
    /// Trimlog crates log at the configured level and everything else at `warn`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let level = LevelFilter::from_level(self.level.to_tracing_level());

        ["trimlog", "trimlog_core", "trimlog_intelligence", "trimlog_cli"]
            .into_iter()
            .fold(
                EnvFilter::new("warn"),
                |filter, target| match format!("{target}={level}").parse() {
                    Ok(directive) => filter.add_directive(directive),
                    Err(_) => filter,
                },
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Trimlog starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        debug!("Logging configured: {config_summary}");
    }
}

/// Session-level logging helpers with stable structured field names
pub struct SessionLogger;

impl SessionLogger {
    /// Log an applied store mutation
    pub fn log_mutation(date: NaiveDate, operation: &str) {
        debug!(
            log.date = %date,
            log.operation = %operation,
            "Log mutated"
        );
    }

    /// Log input rejected at the store boundary
    pub fn log_rejected_input(operation: &str, error: &AppError) {
        warn!(
            log.operation = %operation,
            error.code = ?error.code,
            error.field = error.field().unwrap_or("unknown"),
            error.message = %error.message,
            "Input rejected"
        );
    }

    /// Log a generated artifact
    pub fn log_render(artifact: &str, date: NaiveDate, length: usize) {
        debug!(
            render.artifact = %artifact,
            log.date = %date,
            render.length = length,
            "Artifact rendered"
        );
    }

    /// Log a snapshot load or save
    pub fn log_snapshot_io(operation: &str, path: &str, success: bool) {
        if success {
            info!(
                snapshot.operation = %operation,
                snapshot.path = %path,
                snapshot.success = success,
                "Snapshot I/O"
            );
        } else {
            warn!(
                snapshot.operation = %operation,
                snapshot.path = %path,
                snapshot.success = success,
                "Snapshot I/O"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.service_name, service_names::TRIMLOG);
    }

    #[test]
    fn test_filter_scopes_level_to_trimlog_crates() {
        let config = LoggingConfig {
            level: LogLevel::Trace,
            ..LoggingConfig::default()
        };
        let filter = config.env_filter().to_string().to_lowercase();
        assert!(filter.contains("trimlog=trace"));
        assert!(filter.contains("trimlog_core=trace"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_level_and_environment_follow_tracker_config() {
        let tracker = TrackerConfig {
            log_level: LogLevel::Info,
            environment: Environment::Production,
            ..TrackerConfig::default()
        };
        let config = LoggingConfig::from_config(&tracker);

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.environment, Environment::Production);
        assert!(config.include_location);
    }
}
