// ABOUTME: Injectable time and randomness capabilities for the reminder scheduler
// ABOUTME: Provides system-backed implementations plus deterministic doubles for tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Clock and random-source abstractions
//!
//! The reminder decision function samples wall-clock time and a uniform
//! random draw on every check. Both come in through these traits so hosts
//! can wire the real system sources while tests pin them to fixed values.

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use std::collections::VecDeque;

/// Source of the current local wall-clock time
///
/// Implementations return a naive local timestamp: the reminder window is
/// defined by the hour of day the user experiences, not by UTC.
pub trait Clock {
    /// Current local wall-clock time
    fn local_now(&self) -> NaiveDateTime;
}

/// Clock backed by the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant, for deterministic checks
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to `now`
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> NaiveDateTime {
        self.now
    }
}

/// Source of uniform random draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn uniform(&mut self) -> f64;
}

/// Random source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Random source replaying a scripted sequence of draws
///
/// Once the script is exhausted, every further draw returns the fallback
/// value (1.0 by default, which never wins a probability roll).
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    /// Replay `draws` in order, then return 1.0 forever
    #[must_use]
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into().into(),
            fallback: 1.0,
        }
    }

    /// Return `value` on every draw
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: value,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
