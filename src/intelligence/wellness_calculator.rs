// ABOUTME: Wellness calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: BMI classification, BMR, TDEE, and goal-adjusted daily calorie targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Wellness Calculator Module
//!
//! Evidence-based calculations behind the profile insights screen.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., et al. (2010). *Exercise Physiology: Nutrition, Energy,
//!   and Human Performance* (activity factors).
//!
//! - WHO Expert Consultation (2004). Appropriate body-mass index for Asian
//!   populations. *The Lancet*, 363(9403), 157-163 (category cut-offs).

use crate::config::wellness_config::{ActivityFactorsConfig, BmrConfig, WellnessConfig};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::Gender;
use serde::{Deserialize, Serialize};

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl std::str::FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level '{other}'"
            ))),
        }
    }
}

/// Weight goal for the daily calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl std::str::FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "lose" | "loss" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight goal '{other}' (expected lose, maintain, or gain)"
            ))),
        }
    }
}

/// BMI classification bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// User parameters for the daily energy calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEnergyParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal for the calorie adjustment
    pub goal: WeightGoal,
}

/// Complete daily energy calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEnergyNeeds {
    /// Body Mass Index (kg/m²)
    pub bmi: f64,
    /// BMI classification band
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_kcal: f64,
    /// Calculation method used
    pub method: String,
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_m`)²
///
/// # Errors
///
/// Returns an error if weight or height is outside the supported range
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::invalid_input(format!(
            "Weight must be between {} and {} kg",
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG
        )));
    }
    if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::invalid_input(format!(
            "Height must be between {} and {} cm",
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::invalid_input(format!(
            "Weight must be between {} and {} kg",
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG
        )));
    }
    if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::invalid_input(format!(
            "Height must be between {} and {} cm",
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM
        )));
    }
    if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
        return Err(AppError::invalid_input(format!(
            "Age must be between {} and {} years",
            limits::MIN_AGE,
            limits::MAX_AGE
        )));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + gender_constant;

    Ok(bmr.max(config.minimum_kcal))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Reference
/// `McArdle` et al. (2010) - Exercise Physiology
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    Ok(bmr * activity_factor)
}

/// Calculate complete daily energy needs
///
/// Main entry point combining BMI, BMR, and TDEE, then applying the
/// goal-based calorie adjustment. The target never drops below the
/// configured BMR floor.
///
/// # Errors
///
/// Returns an error if any input validation fails
pub fn calculate_daily_energy(
    params: &DailyEnergyParams,
    config: &WellnessConfig,
) -> AppResult<DailyEnergyNeeds> {
    let bmi = calculate_bmi(params.weight_kg, params.height_cm)?;

    let bmr = calculate_mifflin_st_jeor(
        params.weight_kg,
        params.height_cm,
        params.age,
        params.gender,
        &config.bmr,
    )?;

    let tdee = calculate_tdee(bmr, params.activity_level, &config.activity_factors)?;

    let target_kcal = match params.goal {
        WeightGoal::Lose => tdee - config.energy_goals.weight_loss_deficit_kcal,
        WeightGoal::Maintain => tdee,
        WeightGoal::Gain => tdee + config.energy_goals.muscle_gain_surplus_kcal,
    }
    .max(config.bmr.minimum_kcal);

    Ok(DailyEnergyNeeds {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        target_kcal,
        method: "Mifflin-St Jeor + Activity Factor".to_owned(),
    })
}
