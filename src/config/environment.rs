// ABOUTME: Environment-based configuration for profile defaults, metrics, and snapshot paths
// ABOUTME: Parses TRIMLOG_* variables with typed fallbacks and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment configuration
//!
//! There are no configuration files. Every setting has a built-in default
//! and can be overridden by a `TRIMLOG_*` environment variable; a variable
//! that is present but unparsable is an error naming the variable rather
//! than a silent fallback.

use crate::constants::{env_keys, paths};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use trimlog_core::constants::profile_defaults;
use trimlog_core::errors::AppResult;
use trimlog_core::models::{Gender, Profile};
use trimlog_intelligence::MetricsConfig;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only critical errors
    Error,
    /// Rejected input and failed snapshot I/O (default)
    #[default]
    Warn,
    /// Snapshot loads and saves
    Info,
    /// Every store mutation and render
    Debug,
    /// Very verbose tracing
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local use (default)
    #[default]
    Development,
    /// Long-running personal installation
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Profile used when no snapshot exists yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Display name
    pub nickname: String,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight at the start of the plan
    pub start_weight_kg: f64,
    /// Latest known weight
    pub current_weight_kg: f64,
    /// Goal weight
    pub target_weight_kg: f64,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            nickname: profile_defaults::NICKNAME.to_owned(),
            gender: Gender::Male,
            age: profile_defaults::AGE,
            height_cm: profile_defaults::HEIGHT_CM,
            start_weight_kg: profile_defaults::START_WEIGHT_KG,
            current_weight_kg: profile_defaults::CURRENT_WEIGHT_KG,
            target_weight_kg: profile_defaults::TARGET_WEIGHT_KG,
        }
    }
}

impl ProfileDefaults {
    /// Build a validated profile from these defaults
    ///
    /// # Errors
    ///
    /// Returns the first violated profile constraint
    pub fn to_profile(&self) -> AppResult<Profile> {
        Profile::new(
            &self.nickname,
            self.gender,
            self.age,
            self.height_cm,
            self.start_weight_kg,
            self.current_weight_kg,
            self.target_weight_kg,
        )
    }

    fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            nickname: env_var_or(env_keys::NICKNAME, &defaults.nickname),
            gender: env_parse_or(env_keys::GENDER, defaults.gender)?,
            age: env_parse_or(env_keys::AGE, defaults.age)?,
            height_cm: env_parse_or(env_keys::HEIGHT_CM, defaults.height_cm)?,
            start_weight_kg: env_parse_or(env_keys::START_WEIGHT_KG, defaults.start_weight_kg)?,
            current_weight_kg: env_parse_or(
                env_keys::CURRENT_WEIGHT_KG,
                defaults.current_weight_kg,
            )?,
            target_weight_kg: env_parse_or(env_keys::TARGET_WEIGHT_KG, defaults.target_weight_kg)?,
        })
    }
}

/// Complete Trimlog configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Profile used by `init` and when no snapshot exists
    pub profile_defaults: ProfileDefaults,
    /// Metric engine configuration
    pub metrics: MetricsConfig,
    /// Where the CLI keeps its session snapshot
    pub snapshot_path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            environment: Environment::default(),
            profile_defaults: ProfileDefaults::default(),
            metrics: MetricsConfig::default(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or if
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let mut metrics = MetricsConfig::default();
        metrics.energy.tdee_multiplier =
            env_parse_or(env_keys::TDEE_MULTIPLIER, metrics.energy.tdee_multiplier)?;
        metrics.energy.intake_surplus_kcal = env_parse_or(
            env_keys::INTAKE_SURPLUS_KCAL,
            metrics.energy.intake_surplus_kcal,
        )?;
        metrics.body.ideal_bmi = env_parse_or(env_keys::IDEAL_BMI, metrics.body.ideal_bmi)?;

        let config = Self {
            log_level: LogLevel::from_str_or_default(&env_var_or(env_keys::RUST_LOG, "warn")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            profile_defaults: ProfileDefaults::from_env()?,
            metrics,
            snapshot_path: env::var_os(env_keys::SNAPSHOT_PATH)
                .map_or_else(default_snapshot_path, PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the metric configuration or the profile defaults
    /// are invalid
    pub fn validate(&self) -> Result<()> {
        self.metrics
            .validate()
            .context("Invalid metrics configuration")?;
        self.profile_defaults
            .to_profile()
            .context("Invalid profile defaults")?;
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(anyhow!("{} cannot be empty", env_keys::SNAPSHOT_PATH));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trimlog Configuration:\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - Nickname: {}\n\
             - TDEE Multiplier: {}\n\
             - Intake Surplus: {} kcal\n\
             - Ideal BMI: {}\n\
             - Snapshot: {}",
            self.log_level,
            self.environment,
            self.profile_defaults.nickname,
            self.metrics.energy.tdee_multiplier,
            self.metrics.energy.intake_surplus_kcal,
            self.metrics.body.ideal_bmi,
            self.snapshot_path.display(),
        )
    }
}

/// `<data_dir>/trimlog/session.json`, or the working directory when the
/// platform has no data directory
#[must_use]
pub fn default_snapshot_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(paths::APP_DIR)
        .join(paths::SNAPSHOT_FILE)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, or fall back when it is unset
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
