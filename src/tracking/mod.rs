// ABOUTME: Per-session aggregate state for the wellness tracker
// ABOUTME: Holds metric histories, the daily checklist, weight log, and reminder state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Metric Tracking
//!
//! [`UserData`] is the complete state of one user session: profile, weight
//! history, health metric logs, the daily checklist, and the reminder clock
//! state. Histories are append-only; every appender validates its record
//! before it enters the log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::{
    validate_weight, BiophotonicScanEntry, BloodWorkEntry, BodyCompositionEntry,
    BodyMeasurementEntry, DailyChecklist, MoodSleepEntry, ProgressPhotoEntry, UserProfile,
    WeightEntry,
};
use crate::reminders::ReminderState;

/// Append-only health metric histories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Biophotonic scan scores
    pub biophotonic_scans: Vec<BiophotonicScanEntry>,
    /// Blood work panels
    pub blood_work: Vec<BloodWorkEntry>,
    /// Body composition scans
    pub body_composition: Vec<BodyCompositionEntry>,
    /// Girth measurements
    pub body_measurements: Vec<BodyMeasurementEntry>,
    /// Mood, energy, and sleep log
    pub mood_log: Vec<MoodSleepEntry>,
    /// Progress photo records (captions only)
    pub progress_photos: Vec<ProgressPhotoEntry>,
}

impl HealthMetrics {
    /// Append a validated biophotonic scan score
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation
    pub fn record_biophotonic_scan(&mut self, entry: BiophotonicScanEntry) -> AppResult<()> {
        entry.validate()?;
        self.biophotonic_scans.push(entry);
        Ok(())
    }

    /// Append a validated blood work panel
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation
    pub fn record_blood_work(&mut self, entry: BloodWorkEntry) -> AppResult<()> {
        entry.validate()?;
        self.blood_work.push(entry);
        Ok(())
    }

    /// Append a validated body composition scan
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation
    pub fn record_body_composition(&mut self, entry: BodyCompositionEntry) -> AppResult<()> {
        entry.validate()?;
        self.body_composition.push(entry);
        Ok(())
    }

    /// Append a validated set of girth measurements
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation
    pub fn record_body_measurements(&mut self, entry: BodyMeasurementEntry) -> AppResult<()> {
        entry.validate()?;
        self.body_measurements.push(entry);
        Ok(())
    }

    /// Append a validated mood and sleep entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation
    pub fn record_mood_sleep(&mut self, entry: MoodSleepEntry) -> AppResult<()> {
        entry.validate()?;
        self.mood_log.push(entry);
        Ok(())
    }

    /// Append a progress photo record
    pub fn record_progress_photos(&mut self, entry: ProgressPhotoEntry) {
        self.progress_photos.push(entry);
    }

    /// Most recent mood and sleep entry
    #[must_use]
    pub fn latest_mood_sleep(&self) -> Option<&MoodSleepEntry> {
        self.mood_log.last()
    }

    /// Most recent girth measurements
    #[must_use]
    pub fn latest_body_measurements(&self) -> Option<&BodyMeasurementEntry> {
        self.body_measurements.last()
    }

    /// Most recent biophotonic scan score
    #[must_use]
    pub fn latest_biophotonic_scan(&self) -> Option<&BiophotonicScanEntry> {
        self.biophotonic_scans.last()
    }
}

/// Complete state of one user session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// Onboarded profile, absent until the user registers
    pub profile: Option<UserProfile>,
    /// Append-only weight history
    pub weight_history: Vec<WeightEntry>,
    /// Health metric logs
    pub health_metrics: HealthMetrics,
    /// Today's habit checklist
    pub daily_checklist: DailyChecklist,
    /// Exercise snack reminder state
    pub reminders: ReminderState,
}

impl UserData {
    /// Empty session state anchored to `today`
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            profile: None,
            weight_history: Vec::new(),
            health_metrics: HealthMetrics::default(),
            daily_checklist: DailyChecklist::new(today),
            reminders: ReminderState::default(),
        }
    }

    /// Install the onboarded profile and seed the weight history
    pub fn set_profile(&mut self, profile: UserProfile, date: NaiveDate) {
        self.weight_history.push(WeightEntry {
            date,
            weight_kg: profile.weight_kg,
        });
        self.profile = Some(profile);
    }

    /// Append a weight sample and sync the profile's current weight
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is outside the supported range
    pub fn log_weight(&mut self, date: NaiveDate, weight_kg: f64) -> AppResult<()> {
        validate_weight(weight_kg)?;
        self.weight_history.push(WeightEntry { date, weight_kg });
        if let Some(profile) = self.profile.as_mut() {
            profile.weight_kg = weight_kg;
        }
        Ok(())
    }

    /// Most recent weight sample
    #[must_use]
    pub fn latest_weight(&self) -> Option<&WeightEntry> {
        self.weight_history.last()
    }

    /// Day-rollover action: fresh checklist and reminder counter for `date`
    ///
    /// Idempotent for a repeated date, so callers may invoke it on every
    /// interaction. The reminder counter resets exactly once per new day.
    pub fn start_day(&mut self, date: NaiveDate) {
        if self.daily_checklist.date != date {
            self.daily_checklist = DailyChecklist::new(date);
            self.reminders.reset_daily();
        }
    }

    /// Record a user-confirmed exercise snack
    ///
    /// Bumps the reminder completion counter and ticks the checklist item,
    /// mirroring what the confirmation button does in the UI.
    pub fn acknowledge_exercise_snack(&mut self) {
        self.reminders.acknowledge();
        self.daily_checklist.exercise_snack = true;
    }
}
