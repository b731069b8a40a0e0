// ABOUTME: Profile commands for trimlog-cli
// ABOUTME: Shows the profile and applies validated field edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Context;
use anyhow::Result;
use trimlog::models::Gender;

pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open()?;
    let profile = store.profile();
    println!("Nickname:       {}", profile.nickname());
    println!("Gender:         {}", profile.gender());
    println!("Age:            {}", profile.age());
    println!("Height:         {} cm", profile.height_cm());
    println!("Start weight:   {} kg", profile.start_weight_kg());
    println!("Current weight: {} kg", profile.current_weight_kg());
    println!("Target weight:  {} kg", profile.target_weight_kg());
    Ok(())
}

pub fn set_nickname(ctx: &Context, value: &str) -> Result<()> {
    ctx.mutate(|store| store.set_nickname(value))?;
    println!("Nickname updated");
    Ok(())
}

pub fn set_gender(ctx: &Context, value: &str) -> Result<()> {
    let gender: Gender = value.parse()?;
    ctx.mutate(|store| {
        store.set_gender(gender);
        Ok(())
    })?;
    println!("Gender updated: {gender}");
    Ok(())
}

pub fn set_age(ctx: &Context, value: u32) -> Result<()> {
    ctx.mutate(|store| store.set_age(value))?;
    println!("Age updated: {value}");
    Ok(())
}

pub fn set_height(ctx: &Context, cm: f64) -> Result<()> {
    ctx.mutate(|store| store.set_height_cm(cm))?;
    println!("Height updated: {cm} cm");
    Ok(())
}

pub fn set_start_weight(ctx: &Context, kg: f64) -> Result<()> {
    ctx.mutate(|store| store.set_start_weight_kg(kg))?;
    println!("Start weight updated: {kg} kg");
    Ok(())
}

pub fn set_current_weight(ctx: &Context, kg: f64) -> Result<()> {
    ctx.mutate(|store| store.set_current_weight_kg(kg))?;
    println!("Current weight updated: {kg} kg");
    Ok(())
}

pub fn set_target_weight(ctx: &Context, kg: f64) -> Result<()> {
    ctx.mutate(|store| store.set_target_weight_kg(kg))?;
    println!("Target weight updated: {kg} kg");
    Ok(())
}
