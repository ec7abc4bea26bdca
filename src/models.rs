// ABOUTME: Core data models for the Bodhi wellness tracking core
// ABOUTME: Defines UserProfile, dated metric records, and the daily health checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Core data structures shared across the wellness core. Every record is
//! dated, serializable, and validated against the bounds in
//! [`crate::constants::limits`] before it enters a history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Biological gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl std::str::FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

/// User profile captured at onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Profile creation time
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a validated user profile
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or any biometric value is
    /// outside its supported range
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Name must not be empty",
            ));
        }
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {} and {} years",
                limits::MIN_AGE,
                limits::MAX_AGE
            )));
        }
        if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(AppError::out_of_range(format!(
                "Height must be between {} and {} cm",
                limits::MIN_HEIGHT_CM,
                limits::MAX_HEIGHT_CM
            )));
        }
        validate_weight(weight_kg)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            age,
            gender,
            height_cm,
            weight_kg,
            created_at: Utc::now(),
        })
    }
}

/// Validate a body weight value against the supported range
///
/// # Errors
///
/// Returns an error if the weight is outside the supported range
pub fn validate_weight(weight_kg: f64) -> AppResult<()> {
    if !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::out_of_range(format!(
            "Weight must be between {} and {} kg",
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG
        )));
    }
    Ok(())
}

fn validate_score(label: &str, value: u8) -> AppResult<()> {
    if !(limits::SCORE_MIN..=limits::SCORE_MAX).contains(&value) {
        return Err(AppError::out_of_range(format!(
            "{label} must be between {} and {}",
            limits::SCORE_MIN,
            limits::SCORE_MAX
        )));
    }
    Ok(())
}

fn validate_bounded_f64(label: &str, value: f64, max: f64) -> AppResult<()> {
    if !(0.0..=max).contains(&value) {
        return Err(AppError::out_of_range(format!(
            "{label} must be between 0 and {max}"
        )));
    }
    Ok(())
}

/// One weight-history sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Day the weight was recorded
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

/// Daily mood, energy, and sleep log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSleepEntry {
    /// Day the entry covers
    pub date: NaiveDate,
    /// Overall mood, 1-10
    pub mood_score: u8,
    /// Energy level, 1-10
    pub energy_level: u8,
    /// Hours slept last night
    pub sleep_hours: f64,
    /// Sleep quality, 1-10
    pub sleep_quality: u8,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl MoodSleepEntry {
    /// Validate all rating scales and sleep duration
    ///
    /// # Errors
    ///
    /// Returns an error if a score is outside 1-10 or sleep hours exceed a day
    pub fn validate(&self) -> AppResult<()> {
        validate_score("Mood score", self.mood_score)?;
        validate_score("Energy level", self.energy_level)?;
        validate_score("Sleep quality", self.sleep_quality)?;
        validate_bounded_f64("Sleep hours", self.sleep_hours, limits::MAX_SLEEP_HOURS)
    }
}

/// Girth measurements in centimeters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMeasurementEntry {
    /// Day the measurements were taken
    pub date: NaiveDate,
    /// Waist girth
    pub waist_cm: f64,
    /// Hip girth
    pub hips_cm: f64,
    /// Chest girth
    pub chest_cm: f64,
    /// Upper-arm girth
    pub arms_cm: f64,
    /// Thigh girth
    pub thighs_cm: f64,
    /// Calf girth
    pub calves_cm: f64,
}

impl BodyMeasurementEntry {
    /// Validate every measurement against its maximum
    ///
    /// # Errors
    ///
    /// Returns an error if any girth is negative or above its maximum
    pub fn validate(&self) -> AppResult<()> {
        validate_bounded_f64("Waist", self.waist_cm, limits::MAX_TORSO_CM)?;
        validate_bounded_f64("Hips", self.hips_cm, limits::MAX_TORSO_CM)?;
        validate_bounded_f64("Chest", self.chest_cm, limits::MAX_TORSO_CM)?;
        validate_bounded_f64("Arms", self.arms_cm, limits::MAX_LIMB_CM)?;
        validate_bounded_f64("Thighs", self.thighs_cm, limits::MAX_LIMB_CM)?;
        validate_bounded_f64("Calves", self.calves_cm, limits::MAX_LIMB_CM)
    }
}

/// Blood work panel results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodWorkEntry {
    /// Day the panel was drawn
    pub date: NaiveDate,
    /// Systolic blood pressure (mmHg)
    pub systolic: u16,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: u16,
    /// Blood sugar (mg/dL)
    pub blood_sugar: u16,
    /// Hemoglobin (g/dL)
    pub hemoglobin: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl: u16,
    /// LDL cholesterol (mg/dL)
    pub ldl: u16,
    /// Triglycerides (mg/dL)
    pub triglycerides: u16,
    /// Vitamin D (ng/mL)
    pub vitamin_d: u16,
}

impl BloodWorkEntry {
    /// Validate every value against its clinical maximum
    ///
    /// # Errors
    ///
    /// Returns an error if any value exceeds its maximum
    pub fn validate(&self) -> AppResult<()> {
        let checks: [(&str, u32, u32); 6] = [
            ("Systolic pressure", self.systolic.into(), limits::MAX_SYSTOLIC.into()),
            ("Diastolic pressure", self.diastolic.into(), limits::MAX_DIASTOLIC.into()),
            ("Blood sugar", self.blood_sugar.into(), limits::MAX_BLOOD_SUGAR.into()),
            ("HDL", self.hdl.into(), limits::MAX_HDL.into()),
            ("LDL", self.ldl.into(), limits::MAX_LDL.into()),
            ("Triglycerides", self.triglycerides.into(), limits::MAX_TRIGLYCERIDES.into()),
        ];
        for (label, value, max) in checks {
            if value > max {
                return Err(AppError::out_of_range(format!(
                    "{label} must be at most {max}"
                )));
            }
        }
        if u32::from(self.vitamin_d) > u32::from(limits::MAX_VITAMIN_D) {
            return Err(AppError::out_of_range(format!(
                "Vitamin D must be at most {}",
                limits::MAX_VITAMIN_D
            )));
        }
        validate_bounded_f64("Hemoglobin", self.hemoglobin, limits::MAX_HEMOGLOBIN)
    }
}

/// Body composition scan results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionEntry {
    /// Day of the scan
    pub date: NaiveDate,
    /// Body fat percentage
    pub body_fat_percent: f64,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: f64,
    /// Visceral fat rating
    pub visceral_fat: u8,
    /// Bone mass in kilograms
    pub bone_mass_kg: f64,
}

impl BodyCompositionEntry {
    /// Validate the scan values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its supported range
    pub fn validate(&self) -> AppResult<()> {
        validate_bounded_f64("Body fat", self.body_fat_percent, 100.0)?;
        validate_bounded_f64("Muscle mass", self.muscle_mass_kg, limits::MAX_LIMB_CM)?;
        if self.visceral_fat > limits::MAX_VISCERAL_FAT {
            return Err(AppError::out_of_range(format!(
                "Visceral fat must be at most {}",
                limits::MAX_VISCERAL_FAT
            )));
        }
        validate_bounded_f64("Bone mass", self.bone_mass_kg, limits::MAX_BONE_MASS_KG)
    }
}

/// Biophotonic (carotenoid) scan score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BiophotonicScanEntry {
    /// Day of the scan
    pub date: NaiveDate,
    /// Raw scanner score
    pub score: u32,
}

impl BiophotonicScanEntry {
    /// Validate the scanner score
    ///
    /// # Errors
    ///
    /// Returns an error if the score exceeds the scanner maximum
    pub fn validate(&self) -> AppResult<()> {
        if self.score > limits::MAX_BIOPHOTONIC_SCORE {
            return Err(AppError::out_of_range(format!(
                "Scan score must be at most {}",
                limits::MAX_BIOPHOTONIC_SCORE
            )));
        }
        Ok(())
    }
}

/// Progress photo set captured on one day
///
/// Only captions are stored. File storage is owned by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressPhotoEntry {
    /// Day the photos were taken
    pub date: NaiveDate,
    /// Front view caption
    pub front: Option<String>,
    /// Side view caption
    pub side: Option<String>,
    /// Back view caption
    pub back: Option<String>,
    /// Goal outfit caption
    pub outfit: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

/// The four daily health habits tracked per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyChecklist {
    /// Calendar day this checklist covers
    pub date: NaiveDate,
    /// Took TRMe supplements
    pub trme_supplements: bool,
    /// Completed an exercise snack
    pub exercise_snack: bool,
    /// Replaced processed drinks with mineral or coconut water
    pub healthy_drinks: bool,
    /// Avoided processed food
    pub no_processed_food: bool,
}

impl DailyChecklist {
    /// Fresh, all-unchecked checklist for a day
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            trme_supplements: false,
            exercise_snack: false,
            healthy_drinks: false,
            no_processed_food: false,
        }
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> u8 {
        [
            self.trme_supplements,
            self.exercise_snack,
            self.healthy_drinks,
            self.no_processed_food,
        ]
        .iter()
        .filter(|&&done| done)
        .count() as u8
    }

    /// Completion percentage, 0-100
    #[must_use]
    pub fn completion_percent(&self) -> f64 {
        f64::from(self.completed_count()) / 4.0 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new("Asha", 34, Gender::Female, 162.0, 58.5).is_ok());
        assert!(UserProfile::new("", 34, Gender::Female, 162.0, 58.5).is_err());
        assert!(UserProfile::new("Asha", 17, Gender::Female, 162.0, 58.5).is_err());
        assert!(UserProfile::new("Asha", 34, Gender::Female, 90.0, 58.5).is_err());
        assert!(UserProfile::new("Asha", 34, Gender::Female, 162.0, 250.0).is_err());
    }

    #[test]
    fn test_mood_sleep_validation() {
        let mut entry = MoodSleepEntry {
            date: day(),
            mood_score: 7,
            energy_level: 6,
            sleep_hours: 7.5,
            sleep_quality: 8,
            notes: String::new(),
        };
        assert!(entry.validate().is_ok());

        entry.mood_score = 11;
        assert!(entry.validate().is_err());

        entry.mood_score = 7;
        entry.sleep_hours = 25.0;
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_checklist_completion() {
        let mut checklist = DailyChecklist::new(day());
        assert!((checklist.completion_percent() - 0.0).abs() < f64::EPSILON);

        checklist.exercise_snack = true;
        checklist.healthy_drinks = true;
        assert_eq!(checklist.completed_count(), 2);
        assert!((checklist.completion_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
