// ABOUTME: Exercise snack reminder state and the randomized decision function
// ABOUTME: Gates firing on active hours, a daily cap, a cooldown, and a probability roll
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Exercise Snack Reminders
//!
//! The scheduler decides, on every check, whether to surface an "exercise
//! snack" prompt. Four gates apply in order:
//!
//! 1. **Active hours**: nothing fires outside the configured daily window
//!    (default [07:00, 21:00) local time).
//! 2. **Daily cap**: nothing fires once the user has completed the daily
//!    target (default 4).
//! 3. **Cooldown**: nothing fires within the configured spacing of the
//!    previous firing (default 30 minutes, strict).
//! 4. **Probability**: an eligible check fires with the configured chance
//!    (default 30%), so the nudge stays unpredictable rather than becoming
//!    a fixed-interval timer.
//!
//! A lost probability roll leaves the state untouched, so a frequent caller
//! re-rolls on its next check. Completions and the daily reset are the
//! caller's operations on [`ReminderState`]; the scheduler only ever writes
//! `last_fired`.

/// Injectable clock and random-source capabilities
pub mod clock;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::wellness_config::ReminderConfig;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use clock::{Clock, RandomSource, SystemClock, ThreadRngSource};

fn default_daily_target() -> u32 {
    defaults::DAILY_EXERCISE_TARGET
}

/// Per-session reminder clock state
///
/// `last_fired` moves forward only; a firing requires the cooldown to have
/// elapsed, so each new value is strictly later than the one it replaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderState {
    /// Local wall-clock time the reminder last fired
    pub last_fired: Option<NaiveDateTime>,
    /// Reminder-driven completions since the last daily reset
    pub completed_today: u32,
    /// Completions targeted per day
    #[serde(default = "default_daily_target")]
    pub daily_target: u32,
}

impl Default for ReminderState {
    fn default() -> Self {
        Self::new(defaults::DAILY_EXERCISE_TARGET)
    }
}

impl ReminderState {
    /// Fresh state for a session with the given daily target
    #[must_use]
    pub fn new(daily_target: u32) -> Self {
        Self {
            last_fired: None,
            completed_today: 0,
            daily_target: daily_target.max(1),
        }
    }

    /// Record a user-confirmed exercise completion
    ///
    /// Caller-owned acknowledge action. No upper-bound check is needed
    /// here: the scheduler refuses to fire once the cap is reached.
    pub fn acknowledge(&mut self) {
        self.completed_today = self.completed_today.saturating_add(1);
    }

    /// Reset the completion counter at a calendar-day boundary
    ///
    /// Caller-owned rollover action; the scheduler never resets the
    /// counter itself.
    pub fn reset_daily(&mut self) {
        self.completed_today = 0;
    }

    /// Completions still open today
    #[must_use]
    pub fn remaining_today(&self) -> u32 {
        self.daily_target.saturating_sub(self.completed_today)
    }

    /// Whether the daily cap suspends further firing
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.completed_today >= self.daily_target
    }
}

/// Observable scheduler phase, recomputed from state and the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderPhase {
    /// Eligible to fire (subject to the active window and the roll)
    Idle,
    /// Inside the cooldown of the previous firing
    FiredRecently,
    /// Daily cap reached; no firing until the next daily reset
    Suspended,
}

/// Reminder decision function with injected clock and randomness
///
/// One scheduler may serve many sessions: all per-user bookkeeping lives
/// in the [`ReminderState`] passed to [`check`](Self::check).
#[derive(Debug)]
pub struct ReminderScheduler<C: Clock, R: RandomSource> {
    clock: C,
    random: R,
    config: ReminderConfig,
}

impl ReminderScheduler<SystemClock, ThreadRngSource> {
    /// Scheduler wired to the system clock, thread RNG, and env config
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid reminder
    /// configuration override
    pub fn from_env() -> AppResult<Self> {
        let config = ReminderConfig::from_env()
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;
        Self::new(SystemClock, ThreadRngSource, config)
    }
}

impl<C: Clock, R: RandomSource> ReminderScheduler<C, R> {
    /// Create a scheduler over the given capabilities
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(clock: C, random: R, config: ReminderConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;
        Ok(Self {
            clock,
            random,
            config,
        })
    }

    /// The configuration this scheduler runs with
    #[must_use]
    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    /// Decide whether to surface a reminder right now
    ///
    /// Returns `true` when the reminder should be shown, in which case
    /// `state.last_fired` has been advanced to the current time. Every
    /// `false` return leaves the state untouched.
    pub fn check(&mut self, state: &mut ReminderState) -> bool {
        let now = self.clock.local_now();

        let hour = now.hour();
        if hour < self.config.active_start_hour || hour >= self.config.active_end_hour {
            return false;
        }

        if state.is_suspended() {
            return false;
        }

        let eligible = state.last_fired.map_or(true, |previous| {
            (now - previous).num_seconds() > self.config.cooldown_seconds
        });
        if !eligible {
            return false;
        }

        if self.random.uniform() < self.config.fire_probability {
            state.last_fired = Some(now);
            debug!(
                completed_today = state.completed_today,
                daily_target = state.daily_target,
                "exercise snack reminder fired"
            );
            return true;
        }

        false
    }

    /// Current phase of the reminder state machine
    ///
    /// `Suspended` dominates: once the cap is reached the day is over for
    /// reminders regardless of the cooldown.
    pub fn phase(&self, state: &ReminderState) -> ReminderPhase {
        if state.is_suspended() {
            return ReminderPhase::Suspended;
        }
        let within_cooldown = state.last_fired.is_some_and(|previous| {
            (self.clock.local_now() - previous).num_seconds() <= self.config.cooldown_seconds
        });
        if within_cooldown {
            ReminderPhase::FiredRecently
        } else {
            ReminderPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clock::{FixedClock, ScriptedRandom};
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn scheduler(
        now: NaiveDateTime,
        draw: f64,
    ) -> ReminderScheduler<FixedClock, ScriptedRandom> {
        ReminderScheduler::new(
            FixedClock::new(now),
            ScriptedRandom::constant(draw),
            ReminderConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_acknowledge_and_reset() {
        let mut state = ReminderState::default();
        state.acknowledge();
        state.acknowledge();
        assert_eq!(state.completed_today, 2);
        assert_eq!(state.remaining_today(), 2);

        state.reset_daily();
        assert_eq!(state.completed_today, 0);
        assert!(!state.is_suspended());
    }

    #[test]
    fn test_zero_target_clamped() {
        let state = ReminderState::new(0);
        assert_eq!(state.daily_target, 1);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = ReminderState::default();
        assert_eq!(scheduler(at(8, 0), 0.1).phase(&state), ReminderPhase::Idle);

        assert!(scheduler(at(8, 0), 0.1).check(&mut state));
        assert_eq!(
            scheduler(at(8, 10), 0.1).phase(&state),
            ReminderPhase::FiredRecently
        );
        assert_eq!(
            scheduler(at(8, 31), 0.1).phase(&state),
            ReminderPhase::Idle
        );

        state.completed_today = state.daily_target;
        assert_eq!(
            scheduler(at(8, 31), 0.1).phase(&state),
            ReminderPhase::Suspended
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ReminderConfig {
            fire_probability: 2.0,
            ..ReminderConfig::default()
        };
        let result = ReminderScheduler::new(
            FixedClock::new(at(8, 0)),
            ScriptedRandom::constant(0.0),
            config,
        );
        assert!(result.is_err());
    }
}
