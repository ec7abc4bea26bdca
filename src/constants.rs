// ABOUTME: System-wide constants and configuration values for the wellness core
// ABOUTME: Contains reminder defaults, metric validation limits, and environment lookups
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Default values for reminder scheduling and energy targets
pub mod defaults {
    /// First hour of the daily reminder window (inclusive, local time)
    pub const ACTIVE_START_HOUR: u32 = 7;

    /// Last hour of the daily reminder window (exclusive, local time)
    pub const ACTIVE_END_HOUR: u32 = 21;

    /// Minimum spacing between consecutive reminder firings, in seconds
    pub const REMINDER_COOLDOWN_SECONDS: i64 = 1800;

    /// Probability of firing per eligible check
    pub const REMINDER_FIRE_PROBABILITY: f64 = 0.3;

    /// Exercise snack completions targeted per day
    pub const DAILY_EXERCISE_TARGET: u32 = 4;

    /// Calorie deficit applied for a weight-loss goal (kcal/day)
    pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = 500.0;

    /// Calorie surplus applied for a muscle-gain goal (kcal/day)
    pub const MUSCLE_GAIN_SURPLUS_KCAL: f64 = 300.0;

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/bodhi.db";
}

/// Validation limits for profile fields and metric records
pub mod limits {
    /// Minimum supported age in years
    pub const MIN_AGE: u32 = 18;
    /// Maximum supported age in years
    pub const MAX_AGE: u32 = 100;

    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;

    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 200.0;

    /// Lower bound for 1-10 rating scales (mood, energy, sleep quality)
    pub const SCORE_MIN: u8 = 1;
    /// Upper bound for 1-10 rating scales
    pub const SCORE_MAX: u8 = 10;

    /// Maximum hours of sleep per night
    pub const MAX_SLEEP_HOURS: f64 = 24.0;

    /// Maximum torso girth measurement (waist, hips, chest) in centimeters
    pub const MAX_TORSO_CM: f64 = 200.0;
    /// Maximum limb girth measurement (arms, thighs, calves) in centimeters
    pub const MAX_LIMB_CM: f64 = 100.0;

    /// Maximum biophotonic scan score
    pub const MAX_BIOPHOTONIC_SCORE: u32 = 100_000;

    /// Maximum systolic blood pressure (mmHg)
    pub const MAX_SYSTOLIC: u16 = 300;
    /// Maximum diastolic blood pressure (mmHg)
    pub const MAX_DIASTOLIC: u16 = 200;
    /// Maximum blood sugar (mg/dL)
    pub const MAX_BLOOD_SUGAR: u16 = 500;
    /// Maximum hemoglobin (g/dL)
    pub const MAX_HEMOGLOBIN: f64 = 30.0;
    /// Maximum HDL cholesterol (mg/dL)
    pub const MAX_HDL: u16 = 200;
    /// Maximum LDL cholesterol (mg/dL)
    pub const MAX_LDL: u16 = 300;
    /// Maximum triglycerides (mg/dL)
    pub const MAX_TRIGLYCERIDES: u16 = 1000;
    /// Maximum vitamin D (ng/mL)
    pub const MAX_VITAMIN_D: u16 = 100;

    /// Maximum visceral fat rating
    pub const MAX_VISCERAL_FAT: u8 = 50;
    /// Maximum bone mass in kilograms
    pub const MAX_BONE_MASS_KG: f64 = 10.0;
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    /// Get database URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| super::defaults::DATABASE_URL.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }
}
