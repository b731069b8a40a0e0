// ABOUTME: Daily log commands for trimlog-cli
// ABOUTME: Weight, meals, hydration, snacks, exercise, and status updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{clock_time, Context};
use anyhow::Result;
use trimlog::constants::formats;
use trimlog::errors::AppError;
use trimlog::models::{BowelStatus, DrinkType, EnergyLevel, MealSlot};

pub fn set_weight(ctx: &Context, kg: f64) -> Result<()> {
    ctx.mutate(|store| store.set_weight(kg))?;
    println!("Weight recorded: {kg} kg");
    Ok(())
}

pub fn clear_weight(ctx: &Context) -> Result<()> {
    ctx.mutate(|store| {
        store.clear_weight();
        Ok(())
    })?;
    println!("Weight cleared");
    Ok(())
}

/// `has_image` of `None` keeps the slot's current photo flag
pub fn set_meal(ctx: &Context, slot: &str, text: &str, has_image: Option<bool>) -> Result<()> {
    let slot: MealSlot = slot.parse()?;
    ctx.mutate(|store| {
        store.set_meal_text(slot, text);
        if let Some(has_image) = has_image {
            store.set_meal_image_flag(slot, has_image);
        }
        Ok(())
    })?;
    println!("{} recorded", slot.label());
    Ok(())
}

pub fn set_meal_image(ctx: &Context, slot: &str, has_image: bool) -> Result<()> {
    let slot: MealSlot = slot.parse()?;
    ctx.mutate(|store| {
        store.set_meal_image_flag(slot, has_image);
        Ok(())
    })?;
    println!("{} photo ready: {has_image}", slot.label());
    Ok(())
}

pub fn append_water(ctx: &Context, drink: &str, ml: i64, at: Option<&str>) -> Result<()> {
    let drink: DrinkType = drink.parse()?;
    let volume_ml = u32::try_from(ml)
        .map_err(|_| AppError::out_of_range("volume_ml", "must be a positive volume"))?;
    let time = clock_time(at)?;
    let entry = ctx.mutate(|store| store.append_hydration(drink, volume_ml, time))?;
    println!(
        "Logged {} ml of {} at {}",
        entry.volume_ml,
        entry.drink_type,
        entry.time.format(formats::CLOCK)
    );
    Ok(())
}

pub fn undo_water(ctx: &Context) -> Result<()> {
    match ctx.mutate(|store| Ok(store.undo_last_hydration()))? {
        Some(entry) => println!("Removed {} ml of {}", entry.volume_ml, entry.drink_type),
        None => println!("Hydration log is already empty"),
    }
    Ok(())
}

pub fn clear_water(ctx: &Context) -> Result<()> {
    let removed = ctx.mutate(|store| Ok(store.clear_hydration()))?;
    println!("Removed {removed} drink(s)");
    Ok(())
}

pub fn append_snack(ctx: &Context, description: &str, at: Option<&str>) -> Result<()> {
    let time = clock_time(at)?;
    ctx.mutate(|store| store.append_extra_meal(time, description))?;
    println!("Extra meal logged at {}", time.format(formats::CLOCK));
    Ok(())
}

pub fn undo_snack(ctx: &Context) -> Result<()> {
    match ctx.mutate(|store| Ok(store.remove_last_extra_meal()))? {
        Some(extra) => println!("Removed extra meal: {}", extra.description),
        None => println!("No extra meals to remove"),
    }
    Ok(())
}

pub fn set_exercise(ctx: &Context, kcal: i64, description: &str) -> Result<()> {
    let calories_burned = u32::try_from(kcal)
        .map_err(|_| AppError::out_of_range("calories_burned", "must not be negative"))?;
    ctx.mutate(|store| {
        store.set_exercise(calories_burned, description);
        Ok(())
    })?;
    println!("Exercise recorded: {calories_burned} kcal");
    Ok(())
}

pub fn clear_exercise(ctx: &Context) -> Result<()> {
    ctx.mutate(|store| {
        store.clear_exercise();
        Ok(())
    })?;
    println!("Exercise cleared");
    Ok(())
}

pub fn set_bowel(ctx: &Context, status: &str) -> Result<()> {
    let status: BowelStatus = status.parse()?;
    ctx.mutate(|store| {
        store.set_bowel_status(status);
        Ok(())
    })?;
    println!("Bowel status: {status}");
    Ok(())
}

pub fn set_energy(ctx: &Context, level: &str) -> Result<()> {
    let level: EnergyLevel = level.parse()?;
    ctx.mutate(|store| {
        store.set_energy_level(level);
        Ok(())
    })?;
    println!("Energy level: {level}");
    Ok(())
}
