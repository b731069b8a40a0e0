// ABOUTME: Session snapshot persistence for the CLI shell
// ABOUTME: Serializes profile, daily log, and history memory to JSON with atomic file replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session snapshots
//!
//! The snapshot mirrors the data model one-to-one and carries no schema
//! version. Optional fields (energy level, exercise, extra meals) default
//! when absent; unknown top-level fields are rejected. A loaded snapshot is
//! validated before it can back a [`crate::store::LogStore`].

use crate::logging::SessionLogger;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use trimlog_core::errors::{AppError, AppResult};
use trimlog_core::models::{DailyLog, HistoryMemory, Profile};

/// Everything the session owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSnapshot {
    /// Identity and body parameters
    pub profile: Profile,
    /// The active day's log
    pub daily_log: DailyLog,
    /// Carry-over summary from earlier sessions
    #[serde(default)]
    pub history_memory: HistoryMemory,
}

impl SessionSnapshot {
    /// Check the invariants the mutators would otherwise guarantee
    ///
    /// # Errors
    ///
    /// Returns the first violated profile or log constraint
    pub fn validate(&self) -> AppResult<()> {
        self.profile.validate()?;
        self.daily_log.validate()
    }

    /// Parse and validate a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON or a shape that does
    /// not match the data model, or the violated field constraint
    pub fn from_json(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A snapshot stored on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Snapshot at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot has been saved yet
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read, parse, and validate the snapshot
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read, otherwise the
    /// errors of [`SessionSnapshot::from_json`]
    pub fn load(&self) -> AppResult<SessionSnapshot> {
        let display = self.path.display().to_string();
        let loaded = fs::read_to_string(&self.path)
            .map_err(|e| {
                AppError::storage(format!("Failed to read snapshot {display}")).with_source(e)
            })
            .and_then(|json| SessionSnapshot::from_json(&json));
        SessionLogger::log_snapshot_io("load", &display, loaded.is_ok());
        loaded
    }

    /// Load the snapshot, or build a fresh one when none has been saved
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::load`] for an existing file
    pub fn load_or_else(
        &self,
        fresh: impl FnOnce() -> AppResult<SessionSnapshot>,
    ) -> AppResult<SessionSnapshot> {
        if self.exists() {
            self.load()
        } else {
            fresh()
        }
    }

    /// Write the snapshot atomically
    ///
    /// The JSON goes to a temporary file in the target directory which then
    /// replaces the snapshot, so a failed write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the directory, temporary file, or rename fails
    pub fn save(&self, snapshot: &SessionSnapshot) -> AppResult<()> {
        let display = self.path.display().to_string();
        let saved = self.write_atomically(&snapshot.to_json()?);
        SessionLogger::log_snapshot_io("save", &display, saved.is_ok());
        saved
    }

    fn write_atomically(&self, json: &str) -> AppResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| {
            AppError::storage(format!(
                "Failed to create snapshot directory {}",
                parent.display()
            ))
            .with_source(e)
        })?;

        let mut staging = NamedTempFile::new_in(&parent)?;
        staging.write_all(json.as_bytes())?;
        staging.write_all(b"\n")?;
        staging.as_file().sync_all()?;
        staging.persist(&self.path).map_err(|e| {
            AppError::storage(format!(
                "Failed to replace snapshot {}",
                self.path.display()
            ))
            .with_source(e.error)
        })?;
        Ok(())
    }
}
