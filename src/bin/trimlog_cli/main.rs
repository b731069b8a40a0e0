// ABOUTME: Trimlog CLI - thin presentation shell over the log store and report generators
// ABOUTME: Each invocation loads the session snapshot, applies one command, and saves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Start a session with the profile from TRIMLOG_* variables
//! trimlog-cli init
//!
//! # Record today's data
//! trimlog-cli weight 75.5
//! trimlog-cli meal lunch "skinless chicken leg, half a bowl of rice" --image
//! trimlog-cli water plain_water 300
//! trimlog-cli snack "one apple" --at 16:05
//! trimlog-cli exercise 350 "Fit Boxing, 40 minutes"
//!
//! # Render the artifacts
//! trimlog-cli report
//! trimlog-cli history summary.txt
//! trimlog-cli continuity
//! ```

mod commands;

use anyhow::Result;
use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use commands::Context;
use std::path::PathBuf;
use tracing::debug;
use trimlog::config::TrackerConfig;
use trimlog::logging::LoggingConfig;
use trimlog::session::SnapshotFile;
use trimlog::store::parse_date;

#[derive(Parser)]
#[command(
    name = "trimlog-cli",
    about = "Trimlog body-metrics and nutrition log",
    long_about = "Record weight, meals, hydration, status, and exercise for one day, then render \
                  the daily report or the continuity briefing for an advisory session."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file override (defaults to TRIMLOG_SNAPSHOT_PATH or the data directory)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Active log date as YYYY-MM-DD (defaults to today); a different date starts a fresh log
    #[arg(long, global = true)]
    date: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a new session snapshot from the configured profile defaults
    Init {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },

    /// Record the morning weight (kg)
    Weight {
        /// Weight in kilograms
        #[arg(allow_hyphen_values = true)]
        kg: f64,
    },

    /// Forget today's morning weight
    ClearWeight,

    /// Set what was eaten in a meal slot; the photo flag is kept unless --image or --no-image
    Meal {
        /// breakfast, lunch, or dinner
        slot: String,
        /// Free-text description (portions, estimates)
        text: String,
        /// Mark the meal photo as ready
        #[arg(long, conflicts_with = "no_image")]
        image: bool,
        /// Mark the meal as having no photo
        #[arg(long)]
        no_image: bool,
    },

    /// Set whether a meal photo is ready
    MealImage {
        /// breakfast, lunch, or dinner
        slot: String,
        /// true or false
        #[arg(action = ArgAction::Set)]
        has_image: bool,
    },

    /// Log a drink
    Water {
        /// plain_water, coffee_or_tea, zero_sugar_beverage, milk_or_soy, or soup
        drink: String,
        /// Volume in milliliters
        #[arg(allow_hyphen_values = true)]
        ml: i64,
        /// Clock time as HH:MM (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Remove the most recent drink
    WaterUndo,

    /// Remove every drink logged today
    WaterClear,

    /// Log an unplanned snack or off-schedule meal
    Snack {
        /// What was eaten
        description: String,
        /// Clock time as HH:MM (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Remove the most recent snack
    SnackUndo,

    /// Set today's exercise
    Exercise {
        /// Estimated calories burned
        #[arg(allow_hyphen_values = true)]
        kcal: i64,
        /// What was done
        #[arg(default_value = "")]
        description: String,
    },

    /// Forget today's exercise
    ClearExercise,

    /// Record bowel status: smooth, constipated, diarrhea, or unrecorded
    Bowel {
        /// Status
        status: String,
    },

    /// Record energy level: exhausted, tired, normal, good, or great
    Energy {
        /// Level
        level: String,
    },

    /// Profile edits
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Replace the history memory from a file, or from stdin with `-`
    History {
        /// File path or `-`
        source: String,
    },

    /// Print the daily report
    Report,

    /// Print the continuity briefing for a fresh advisory session
    Continuity,

    /// Print the session snapshot as JSON
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the profile
    Show,
    /// Set the nickname
    Nickname {
        /// Display name
        value: String,
    },
    /// Set the gender (male or female)
    Gender {
        /// male or female
        value: String,
    },
    /// Set the age in years
    Age {
        /// Years
        value: u32,
    },
    /// Set the height in centimeters
    Height {
        /// Centimeters
        #[arg(allow_hyphen_values = true)]
        cm: f64,
    },
    /// Set the start weight in kilograms
    StartWeight {
        /// Kilograms
        #[arg(allow_hyphen_values = true)]
        kg: f64,
    },
    /// Set the latest known weight in kilograms
    CurrentWeight {
        /// Kilograms
        #[arg(allow_hyphen_values = true)]
        kg: f64,
    },
    /// Set the target weight in kilograms
    TargetWeight {
        /// Kilograms
        #[arg(allow_hyphen_values = true)]
        kg: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env()?;
    if let Some(path) = cli.snapshot {
        config.snapshot_path = path;
    }

    let logging = LoggingConfig::from_config(&config);
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;
    debug!("{}", config.summary());

    let date = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let file = SnapshotFile::new(config.snapshot_path.clone());
    let ctx = Context::new(config, file, date);

    match cli.command {
        Command::Init { force } => commands::session::init(&ctx, force),
        Command::Weight { kg } => commands::log::set_weight(&ctx, kg),
        Command::ClearWeight => commands::log::clear_weight(&ctx),
        Command::Meal {
            slot,
            text,
            image,
            no_image,
        } => {
            let has_image = (image || no_image).then_some(image);
            commands::log::set_meal(&ctx, &slot, &text, has_image)
        }
        Command::MealImage { slot, has_image } => {
            commands::log::set_meal_image(&ctx, &slot, has_image)
        }
        Command::Water { drink, ml, at } => {
            commands::log::append_water(&ctx, &drink, ml, at.as_deref())
        }
        Command::WaterUndo => commands::log::undo_water(&ctx),
        Command::WaterClear => commands::log::clear_water(&ctx),
        Command::Snack { description, at } => {
            commands::log::append_snack(&ctx, &description, at.as_deref())
        }
        Command::SnackUndo => commands::log::undo_snack(&ctx),
        Command::Exercise { kcal, description } => {
            commands::log::set_exercise(&ctx, kcal, &description)
        }
        Command::ClearExercise => commands::log::clear_exercise(&ctx),
        Command::Bowel { status } => commands::log::set_bowel(&ctx, &status),
        Command::Energy { level } => commands::log::set_energy(&ctx, &level),
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&ctx),
            ProfileCommand::Nickname { value } => commands::profile::set_nickname(&ctx, &value),
            ProfileCommand::Gender { value } => commands::profile::set_gender(&ctx, &value),
            ProfileCommand::Age { value } => commands::profile::set_age(&ctx, value),
            ProfileCommand::Height { cm } => commands::profile::set_height(&ctx, cm),
            ProfileCommand::StartWeight { kg } => commands::profile::set_start_weight(&ctx, kg),
            ProfileCommand::CurrentWeight { kg } => {
                commands::profile::set_current_weight(&ctx, kg)
            }
            ProfileCommand::TargetWeight { kg } => commands::profile::set_target_weight(&ctx, kg),
        },
        Command::History { source } => commands::session::set_history(&ctx, &source),
        Command::Report => commands::render::daily_report(&ctx),
        Command::Continuity => commands::render::continuity(&ctx),
        Command::Show => commands::session::show(&ctx),
    }
}
