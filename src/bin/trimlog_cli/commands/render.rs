// ABOUTME: Artifact commands for trimlog-cli
// ABOUTME: Prints the daily report and the continuity briefing to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Context;
use anyhow::Result;
use trimlog::reports::{ContinuityGenerator, DailyReportGenerator};

/// Rendering never writes the snapshot back
pub fn daily_report(ctx: &Context) -> Result<()> {
    let store = ctx.open()?;
    println!(
        "{}",
        DailyReportGenerator::default().render(&store, &ctx.config.metrics)
    );
    Ok(())
}

pub fn continuity(ctx: &Context) -> Result<()> {
    let store = ctx.open()?;
    println!(
        "{}",
        ContinuityGenerator::default().render(&store, &ctx.config.metrics)
    );
    Ok(())
}
