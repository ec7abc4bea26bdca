// ABOUTME: Integration tests for environment-driven configuration overrides
// ABOUTME: Serialized because they mutate process environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use bodhi_wellness::config::wellness_config::{ReminderConfig, WellnessConfig};
use serial_test::serial;
use std::env;

const REMINDER_VARS: [&str; 5] = [
    "BODHI_REMINDER_START_HOUR",
    "BODHI_REMINDER_END_HOUR",
    "BODHI_REMINDER_COOLDOWN_SECONDS",
    "BODHI_REMINDER_FIRE_PROBABILITY",
    "BODHI_REMINDER_DAILY_TARGET",
];

fn clear_reminder_vars() {
    for var in REMINDER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn from_env_without_overrides_matches_defaults() {
    clear_reminder_vars();

    let config = ReminderConfig::from_env().unwrap();
    assert_eq!(config.active_start_hour, 7);
    assert_eq!(config.active_end_hour, 21);
    assert_eq!(config.cooldown_seconds, 1800);
    assert!((config.fire_probability - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.daily_target, 4);
}

#[test]
#[serial]
fn from_env_applies_overrides() {
    clear_reminder_vars();
    env::set_var("BODHI_REMINDER_DAILY_TARGET", "6");
    env::set_var("BODHI_REMINDER_FIRE_PROBABILITY", "0.5");
    env::set_var("BODHI_REMINDER_COOLDOWN_SECONDS", "600");

    let config = ReminderConfig::from_env().unwrap();
    assert_eq!(config.daily_target, 6);
    assert!((config.fire_probability - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.cooldown_seconds, 600);

    clear_reminder_vars();
}

#[test]
#[serial]
fn from_env_rejects_unparsable_override() {
    clear_reminder_vars();
    env::set_var("BODHI_REMINDER_DAILY_TARGET", "four");

    assert!(ReminderConfig::from_env().is_err());

    clear_reminder_vars();
}

#[test]
#[serial]
fn from_env_rejects_invalid_combination() {
    clear_reminder_vars();
    env::set_var("BODHI_REMINDER_START_HOUR", "22");
    env::set_var("BODHI_REMINDER_END_HOUR", "7");

    assert!(ReminderConfig::from_env().is_err());

    clear_reminder_vars();
}

#[test]
#[serial]
fn wellness_config_from_env_wraps_reminders() {
    clear_reminder_vars();
    env::set_var("BODHI_REMINDER_DAILY_TARGET", "2");

    let config = WellnessConfig::from_env().unwrap();
    assert_eq!(config.reminders.daily_target, 2);
    // Formula coefficients are not environment-tunable
    assert!((config.bmr.msj_weight_coef - 10.0).abs() < f64::EPSILON);

    clear_reminder_vars();
}
