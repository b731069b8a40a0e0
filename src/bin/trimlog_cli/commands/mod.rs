// ABOUTME: Command modules for trimlog-cli and the shared load-apply-save context
// ABOUTME: Opens the snapshot for the selected date and persists each mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod log;
pub mod profile;
pub mod render;
pub mod session;

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::info;
use trimlog::config::TrackerConfig;
use trimlog::errors::{AppError, AppResult};
use trimlog::session::{SessionSnapshot, SnapshotFile};
use trimlog::store::{parse_clock_time, LogStore};

/// Configuration, snapshot location, and active date for one invocation
pub struct Context {
    pub config: TrackerConfig,
    pub file: SnapshotFile,
    pub date: NaiveDate,
}

impl Context {
    pub const fn new(config: TrackerConfig, file: SnapshotFile, date: NaiveDate) -> Self {
        Self { config, file, date }
    }

    /// A brand-new session for the active date
    pub fn fresh_store(&self) -> AppResult<LogStore> {
        Ok(LogStore::new(
            self.config.profile_defaults.to_profile()?,
            self.date,
        ))
    }

    /// Load the saved session, or start one, and select the active date
    pub fn open(&self) -> Result<LogStore> {
        let snapshot = self
            .file
            .load_or_else(|| self.fresh_store().map(|store| store.snapshot()))?;
        let mut store = LogStore::from_snapshot(snapshot)?;
        if store.select_date(self.date) {
            info!("Started a new log for {}", self.date);
        }
        Ok(store)
    }

    pub fn save(&self, store: &LogStore) -> Result<()> {
        self.file.save(&store.snapshot())?;
        Ok(())
    }

    /// Apply one store operation and persist the result
    ///
    /// Nothing is written when the operation is rejected.
    pub fn mutate<T>(&self, apply: impl FnOnce(&mut LogStore) -> AppResult<T>) -> Result<T> {
        let mut store = self.open()?;
        let value = apply(&mut store)?;
        self.save(&store)?;
        Ok(value)
    }

    pub fn write_snapshot(&self, snapshot: &SessionSnapshot) -> Result<()> {
        self.file.save(snapshot)?;
        Ok(())
    }
}

/// `--at HH:MM`, or the current wall-clock minute
pub fn clock_time(at: Option<&str>) -> AppResult<NaiveTime> {
    match at {
        Some(raw) => parse_clock_time(raw),
        None => {
            let now = Local::now().time();
            NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
                .ok_or_else(|| AppError::internal("current time is not a valid clock time"))
        }
    }
}
