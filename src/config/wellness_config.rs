// ABOUTME: Wellness domain configuration for reminder gating and energy calculations
// ABOUTME: Provides validated, environment-overridable tuning values with safe defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Wellness Configuration Module
//!
//! Type-safe configuration for the reminder scheduler and the energy
//! calculators. Every value has a sensible default and can be overridden
//! with a `BODHI_*` environment variable:
//!
//! ```bash
//! export BODHI_REMINDER_FIRE_PROBABILITY=0.5
//! export BODHI_REMINDER_DAILY_TARGET=6
//! ```

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value violates its documented range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable was present but unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Environment variable failed to parse as the expected type
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read an optional typed override from the environment
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

/// Basal Metabolic Rate formula coefficients (Mifflin-St Jeor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (kcal per kg)
    #[serde(default = "default_msj_weight_coef")]
    pub msj_weight_coef: f64,
    /// Height coefficient (kcal per cm)
    #[serde(default = "default_msj_height_coef")]
    pub msj_height_coef: f64,
    /// Age coefficient (kcal per year, negative)
    #[serde(default = "default_msj_age_coef")]
    pub msj_age_coef: f64,
    /// Additive constant for male subjects
    #[serde(default = "default_msj_male_constant")]
    pub msj_male_constant: f64,
    /// Additive constant for female subjects
    #[serde(default = "default_msj_female_constant")]
    pub msj_female_constant: f64,
    /// Safety floor for the computed BMR (kcal/day)
    #[serde(default = "default_minimum_kcal")]
    pub minimum_kcal: f64,
}

fn default_msj_weight_coef() -> f64 {
    10.0
}
fn default_msj_height_coef() -> f64 {
    6.25
}
fn default_msj_age_coef() -> f64 {
    -5.0
}
fn default_msj_male_constant() -> f64 {
    5.0
}
fn default_msj_female_constant() -> f64 {
    -161.0
}
fn default_minimum_kcal() -> f64 {
    1000.0
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: default_msj_weight_coef(),
            msj_height_coef: default_msj_height_coef(),
            msj_age_coef: default_msj_age_coef(),
            msj_male_constant: default_msj_male_constant(),
            msj_female_constant: default_msj_female_constant(),
            minimum_kcal: default_minimum_kcal(),
        }
    }
}

/// TDEE activity multipliers (McArdle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise
    #[serde(default = "default_sedentary")]
    pub sedentary: f64,
    /// Exercise 1-3 days/week
    #[serde(default = "default_lightly_active")]
    pub lightly_active: f64,
    /// Exercise 3-5 days/week
    #[serde(default = "default_moderately_active")]
    pub moderately_active: f64,
    /// Exercise 6-7 days/week
    #[serde(default = "default_very_active")]
    pub very_active: f64,
    /// Hard training twice a day
    #[serde(default = "default_extra_active")]
    pub extra_active: f64,
}

fn default_sedentary() -> f64 {
    1.2
}
fn default_lightly_active() -> f64 {
    1.375
}
fn default_moderately_active() -> f64 {
    1.55
}
fn default_very_active() -> f64 {
    1.725
}
fn default_extra_active() -> f64 {
    1.9
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: default_sedentary(),
            lightly_active: default_lightly_active(),
            moderately_active: default_moderately_active(),
            very_active: default_very_active(),
            extra_active: default_extra_active(),
        }
    }
}

/// Calorie adjustments applied per weight goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyGoalConfig {
    /// Daily deficit for weight loss (kcal)
    #[serde(default = "default_weight_loss_deficit")]
    pub weight_loss_deficit_kcal: f64,
    /// Daily surplus for muscle gain (kcal)
    #[serde(default = "default_muscle_gain_surplus")]
    pub muscle_gain_surplus_kcal: f64,
}

fn default_weight_loss_deficit() -> f64 {
    defaults::WEIGHT_LOSS_DEFICIT_KCAL
}
fn default_muscle_gain_surplus() -> f64 {
    defaults::MUSCLE_GAIN_SURPLUS_KCAL
}

impl Default for EnergyGoalConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: default_weight_loss_deficit(),
            muscle_gain_surplus_kcal: default_muscle_gain_surplus(),
        }
    }
}

/// Exercise snack reminder gating configuration
///
/// Defaults reproduce the canonical behavior: a [07:00, 21:00) local
/// window, a 30-minute cooldown, a 30% firing chance per eligible check,
/// and four completions per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// First hour of the active window (inclusive)
    #[serde(default = "default_active_start_hour")]
    pub active_start_hour: u32,
    /// End hour of the active window (exclusive)
    #[serde(default = "default_active_end_hour")]
    pub active_end_hour: u32,
    /// Minimum seconds between consecutive firings
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: i64,
    /// Probability of firing per eligible check, in [0, 1]
    #[serde(default = "default_fire_probability")]
    pub fire_probability: f64,
    /// Completions targeted per day
    #[serde(default = "default_daily_target")]
    pub daily_target: u32,
}

fn default_active_start_hour() -> u32 {
    defaults::ACTIVE_START_HOUR
}
fn default_active_end_hour() -> u32 {
    defaults::ACTIVE_END_HOUR
}
fn default_cooldown_seconds() -> i64 {
    defaults::REMINDER_COOLDOWN_SECONDS
}
fn default_fire_probability() -> f64 {
    defaults::REMINDER_FIRE_PROBABILITY
}
fn default_daily_target() -> u32 {
    defaults::DAILY_EXERCISE_TARGET
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            active_start_hour: default_active_start_hour(),
            active_end_hour: default_active_end_hour(),
            cooldown_seconds: default_cooldown_seconds(),
            fire_probability: default_fire_probability(),
            daily_target: default_daily_target(),
        }
    }
}

impl ReminderConfig {
    /// Load the reminder configuration with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the resulting
    /// configuration is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = env_parse("BODHI_REMINDER_START_HOUR")? {
            config.active_start_hour = v;
        }
        if let Some(v) = env_parse("BODHI_REMINDER_END_HOUR")? {
            config.active_end_hour = v;
        }
        if let Some(v) = env_parse("BODHI_REMINDER_COOLDOWN_SECONDS")? {
            config.cooldown_seconds = v;
        }
        if let Some(v) = env_parse("BODHI_REMINDER_FIRE_PROBABILITY")? {
            config.fire_probability = v;
        }
        if let Some(v) = env_parse("BODHI_REMINDER_DAILY_TARGET")? {
            config.daily_target = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration ranges
    ///
    /// # Errors
    ///
    /// Returns an error when any value violates its documented range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.active_start_hour >= self.active_end_hour {
            return Err(ConfigError::InvalidRange(
                "active_start_hour must be earlier than active_end_hour",
            ));
        }
        if self.active_end_hour > 24 {
            return Err(ConfigError::InvalidRange(
                "active_end_hour must be at most 24",
            ));
        }
        if self.cooldown_seconds <= 0 {
            return Err(ConfigError::InvalidRange(
                "cooldown_seconds must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.fire_probability) {
            return Err(ConfigError::InvalidRange(
                "fire_probability must be within [0, 1]",
            ));
        }
        if self.daily_target == 0 {
            return Err(ConfigError::InvalidRange("daily_target must be at least 1"));
        }
        Ok(())
    }
}

/// Main wellness configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellnessConfig {
    /// BMR formula coefficients
    #[serde(default)]
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    #[serde(default)]
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based calorie adjustments
    #[serde(default)]
    pub energy_goals: EnergyGoalConfig,
    /// Reminder gating parameters
    #[serde(default)]
    pub reminders: ReminderConfig,
}

static GLOBAL_CONFIG: OnceLock<WellnessConfig> = OnceLock::new();

impl WellnessConfig {
    /// Load the wellness configuration with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or validate
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            reminders: ReminderConfig::from_env()?,
            ..Self::default()
        })
    }

    /// Process-wide configuration instance
    ///
    /// Falls back to defaults (with a warning) when the environment holds
    /// an invalid override, so library consumers never observe a panic.
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                tracing::warn!("invalid wellness configuration, using defaults: {e}");
                Self::default()
            })
        })
    }
}
