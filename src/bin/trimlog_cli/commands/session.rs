// ABOUTME: Session commands for trimlog-cli
// ABOUTME: Snapshot initialization, history memory import, and raw snapshot display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Context;
use anyhow::{bail, Context as _, Result};
use std::fs;
use std::io;

pub fn init(ctx: &Context, force: bool) -> Result<()> {
    if ctx.file.exists() && !force {
        bail!(
            "Snapshot already exists at {}; pass --force to start over",
            ctx.file.path().display()
        );
    }
    let store = ctx.fresh_store()?;
    ctx.write_snapshot(&store.snapshot())?;
    println!(
        "Session for {} started at {}",
        store.profile().nickname(),
        ctx.file.path().display()
    );
    Ok(())
}

/// The blob is stored exactly as read, trailing newlines included
pub fn set_history(ctx: &Context, source: &str) -> Result<()> {
    let text = if source == "-" {
        io::read_to_string(io::stdin()).context("Failed to read history memory from stdin")?
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read history memory from {source}"))?
    };
    let length = text.len();
    ctx.mutate(|store| {
        store.set_history_memory(text);
        Ok(())
    })?;
    println!("History memory updated ({length} bytes)");
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open()?;
    println!("{}", store.snapshot().to_json()?);
    Ok(())
}
