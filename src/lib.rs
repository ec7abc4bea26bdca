// ABOUTME: Main library entry point for the Bodhi wellness tracking core
// ABOUTME: Provides metric tracking, nutrition calculations, and exercise snack reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Bodhi Wellness
//!
//! Core library for a personal wellness-tracking application: per-session
//! user data (profile, weight history, health metric logs, daily checklist)
//! together with the randomized "exercise snack" reminder scheduler that
//! nudges users to move during the day.
//!
//! ## Features
//!
//! - **Reminder scheduling**: time-windowed, cooldown-gated, probabilistic
//!   exercise reminders with injectable clock and random source
//! - **Wellness calculations**: BMI, Mifflin-St Jeor BMR, TDEE, and daily
//!   calorie targets
//! - **Metric tracking**: append-only histories for weight, mood and sleep,
//!   body measurements, blood work, body composition, and scan scores
//! - **Session registry**: one independently owned data record per session
//! - **Key-value persistence**: single-table SQLite storage of session data
//!
//! ## Example Usage
//!
//! ```rust
//! use bodhi_wellness::config::wellness_config::ReminderConfig;
//! use bodhi_wellness::reminders::clock::{SystemClock, ThreadRngSource};
//! use bodhi_wellness::reminders::{ReminderScheduler, ReminderState};
//!
//! let mut scheduler = ReminderScheduler::new(
//!     SystemClock,
//!     ThreadRngSource::default(),
//!     ReminderConfig::default(),
//! )?;
//! let mut state = ReminderState::default();
//! if scheduler.check(&mut state) {
//!     println!("Time for an exercise snack!");
//! }
//! # Ok::<(), bodhi_wellness::errors::AppError>(())
//! ```

/// Configuration management: environment settings and wellness tuning
pub mod config;

/// Application constants, limits, and environment defaults
pub mod constants;

/// Single-table key-value persistence for session data
pub mod database;

/// Unified error handling system with standard error codes
pub mod errors;

/// Wellness intelligence: BMI, BMR, TDEE, and calorie targeting
pub mod intelligence;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Core data models: user profile and dated metric records
pub mod models;

/// Exercise snack reminder state and decision function
pub mod reminders;

/// In-process registry of per-session user data
pub mod session;

/// Per-session aggregate state: metric histories and daily checklist
pub mod tracking;
