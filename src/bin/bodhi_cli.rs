// ABOUTME: Bodhi CLI - command-line tool for managing wellness tracker data
// ABOUTME: Handles profile setup, weight logging, energy calculations, and reminder checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Create a profile
//! bodhi-cli profile create --name Asha --age 34 --gender female --height-cm 162 --weight-kg 60
//!
//! # Show the stored profile
//! bodhi-cli profile show
//!
//! # Log today's weight
//! bodhi-cli weight log 59.2
//!
//! # Daily calorie target for a goal
//! bodhi-cli energy --activity-level moderate --goal lose
//!
//! # Poll the exercise snack reminder
//! bodhi-cli reminder check
//!
//! # Confirm a completed exercise snack
//! bodhi-cli reminder ack
//! ```

use anyhow::{anyhow, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use bodhi_wellness::config::environment::ServerConfig;
use bodhi_wellness::config::wellness_config::WellnessConfig;
use bodhi_wellness::database::Database;
use bodhi_wellness::intelligence::{
    calculate_daily_energy, ActivityLevel, DailyEnergyParams, WeightGoal,
};
use bodhi_wellness::logging::init_logging;
use bodhi_wellness::models::{Gender, UserProfile};
use bodhi_wellness::reminders::ReminderScheduler;
use bodhi_wellness::tracking::UserData;

#[derive(Parser)]
#[command(
    name = "bodhi-cli",
    about = "Bodhi Wellness Tracker CLI",
    long_about = "Command-line tool for managing wellness tracker profiles, weight logs, and exercise snack reminders."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Storage key identifying the user record
    #[arg(long, global = true, default_value = "default")]
    key: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Weight logging commands
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Compute BMI and the daily calorie target
    Energy {
        /// Activity level: sedentary, light, moderate, very_active, extra_active
        #[arg(long, default_value = "sedentary")]
        activity_level: String,

        /// Weight goal: lose, maintain, gain
        #[arg(long, default_value = "maintain")]
        goal: String,
    },

    /// Exercise snack reminder commands
    Reminder {
        #[command(subcommand)]
        action: ReminderCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create a new profile (overwrites an existing one)
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender: male or female
        #[arg(long)]
        gender: String,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,
    },

    /// Show the stored profile and latest weight
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightCommand {
    /// Log today's weight in kilograms
    Log {
        /// Body weight in kilograms
        weight_kg: f64,
    },

    /// Print the weight history
    History,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ReminderCommand {
    /// Poll the reminder gate once
    Check,

    /// Confirm a completed exercise snack
    Ack,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose && std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    init_logging()?;

    let config = ServerConfig::from_env()?;
    let database_url = cli
        .database_url
        .clone()
        .unwrap_or_else(|| config.database_url.to_connection_string());
    let database = Database::new(&database_url).await?;

    let today = Local::now().date_naive();
    let mut data = database
        .load_user_data(&cli.key)
        .await?
        .unwrap_or_else(|| UserData::new(today));
    data.start_day(today);

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Create {
                name,
                age,
                gender,
                height_cm,
                weight_kg,
            } => {
                let gender: Gender = gender.parse()?;
                let profile = UserProfile::new(name, age, gender, height_cm, weight_kg)?;
                println!("Profile created for {} (id {})", profile.name, profile.id);
                data.set_profile(profile, today);
            }
            ProfileCommand::Show => {
                let profile = data
                    .profile
                    .as_ref()
                    .ok_or_else(|| anyhow!("No profile stored under key '{}'", cli.key))?;
                println!("Name:   {}", profile.name);
                println!("Age:    {}", profile.age);
                println!("Height: {} cm", profile.height_cm);
                println!("Weight: {} kg", profile.weight_kg);
                if let Some(entry) = data.latest_weight() {
                    println!("Last weigh-in: {} on {}", entry.weight_kg, entry.date);
                }
            }
        },
        Command::Weight { action } => match action {
            WeightCommand::Log { weight_kg } => {
                data.log_weight(today, weight_kg)?;
                println!("Logged {weight_kg} kg on {today}");
            }
            WeightCommand::History => {
                if data.weight_history.is_empty() {
                    println!("No weight entries recorded yet");
                }
                for entry in &data.weight_history {
                    println!("{}  {} kg", entry.date, entry.weight_kg);
                }
            }
        },
        Command::Energy {
            activity_level,
            goal,
        } => {
            let profile = data
                .profile
                .as_ref()
                .ok_or_else(|| anyhow!("Create a profile before computing energy needs"))?;
            let params = DailyEnergyParams {
                weight_kg: profile.weight_kg,
                height_cm: profile.height_cm,
                age: profile.age,
                gender: profile.gender,
                activity_level: activity_level.parse::<ActivityLevel>()?,
                goal: goal.parse::<WeightGoal>()?,
            };
            let needs = calculate_daily_energy(&params, WellnessConfig::global())?;
            println!("BMI:    {:.1} ({:?})", needs.bmi, needs.bmi_category);
            println!("BMR:    {:.0} kcal/day", needs.bmr);
            println!("TDEE:   {:.0} kcal/day", needs.tdee);
            println!("Target: {:.0} kcal/day ({})", needs.target_kcal, needs.method);
        }
        Command::Reminder { action } => match action {
            ReminderCommand::Check => {
                let mut scheduler = ReminderScheduler::from_env()?;
                if scheduler.check(&mut data.reminders) {
                    println!("TIME FOR AN EXERCISE SNACK! Do 10 squats right now.");
                } else {
                    println!(
                        "No reminder this cycle ({}/{} completed today)",
                        data.reminders.completed_today, data.reminders.daily_target
                    );
                }
            }
            ReminderCommand::Ack => {
                data.acknowledge_exercise_snack();
                println!(
                    "Nice work! {}/{} exercise snacks completed today",
                    data.reminders.completed_today, data.reminders.daily_target
                );
            }
        },
    }

    database.save_user_data(&cli.key, &data).await?;

    Ok(())
}
