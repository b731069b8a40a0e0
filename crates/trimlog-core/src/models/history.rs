// ABOUTME: Opaque free-text summary carried over from prior advisory sessions
// ABOUTME: Never parsed or validated, only embedded verbatim in the continuity briefing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// User-supplied summary of previous sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryMemory(String);

impl HistoryMemory {
    /// Wrap a text blob unchanged
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The blob exactly as supplied
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the blob holds nothing but whitespace
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for HistoryMemory {
    fn from(text: String) -> Self {
        Self(text)
    }
}
