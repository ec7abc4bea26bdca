// ABOUTME: Integration tests for BMI, BMR, TDEE, and calorie target calculations
// ABOUTME: Verifies reference values from the published formulas and input validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use bodhi_wellness::config::wellness_config::WellnessConfig;
use bodhi_wellness::intelligence::{
    calculate_bmi, calculate_daily_energy, calculate_mifflin_st_jeor, calculate_tdee,
    ActivityLevel, BmiCategory, DailyEnergyParams, WeightGoal,
};
use bodhi_wellness::models::Gender;

const TOLERANCE: f64 = 1e-6;

#[test]
fn bmi_reference_value() {
    // 70 kg at 175 cm: 70 / 1.75^2 = 22.857...
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!((bmi - 22.857_142_857).abs() < 1e-6);
    assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
}

#[test]
fn bmi_category_boundaries() {
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn bmi_rejects_out_of_range_inputs() {
    assert!(calculate_bmi(20.0, 175.0).is_err());
    assert!(calculate_bmi(250.0, 175.0).is_err());
    assert!(calculate_bmi(70.0, 90.0).is_err());
    assert!(calculate_bmi(70.0, 260.0).is_err());
}

#[test]
fn bmr_reference_values() {
    let config = WellnessConfig::default();

    // Male, 70 kg, 175 cm, 30 y: 700 + 1093.75 - 150 + 5 = 1648.75
    let male = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &config.bmr).unwrap();
    assert!((male - 1648.75).abs() < TOLERANCE);

    // Female, 70 kg, 165 cm, 30 y: 700 + 1031.25 - 150 - 161 = 1420.25
    let female = calculate_mifflin_st_jeor(70.0, 165.0, 30, Gender::Female, &config.bmr).unwrap();
    assert!((female - 1420.25).abs() < TOLERANCE);
}

#[test]
fn bmr_applies_safety_floor() {
    let config = WellnessConfig::default();

    // Small, older subject computes below 1000 kcal: floored
    let bmr = calculate_mifflin_st_jeor(30.0, 100.0, 100, Gender::Female, &config.bmr).unwrap();
    assert!((bmr - 1000.0).abs() < TOLERANCE);
}

#[test]
fn bmr_rejects_invalid_age() {
    let config = WellnessConfig::default();
    assert!(calculate_mifflin_st_jeor(70.0, 175.0, 17, Gender::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(70.0, 175.0, 101, Gender::Male, &config.bmr).is_err());
}

#[test]
fn tdee_applies_activity_factor() {
    let config = WellnessConfig::default();

    let sedentary = calculate_tdee(1648.75, ActivityLevel::Sedentary, &config.activity_factors)
        .unwrap();
    assert!((sedentary - 1978.5).abs() < TOLERANCE);

    let extra = calculate_tdee(1648.75, ActivityLevel::ExtraActive, &config.activity_factors)
        .unwrap();
    assert!((extra - 1648.75 * 1.9).abs() < TOLERANCE);

    assert!(calculate_tdee(0.0, ActivityLevel::Sedentary, &config.activity_factors).is_err());
}

#[test]
fn daily_energy_applies_goal_adjustment() {
    let config = WellnessConfig::default();
    let base = DailyEnergyParams {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: WeightGoal::Maintain,
    };

    let maintain = calculate_daily_energy(&base, &config).unwrap();
    assert!((maintain.tdee - 1648.75 * 1.55).abs() < TOLERANCE);
    assert!((maintain.target_kcal - maintain.tdee).abs() < TOLERANCE);

    let lose = calculate_daily_energy(
        &DailyEnergyParams {
            goal: WeightGoal::Lose,
            ..base.clone()
        },
        &config,
    )
    .unwrap();
    assert!((lose.target_kcal - (maintain.tdee - 500.0)).abs() < TOLERANCE);

    let gain = calculate_daily_energy(
        &DailyEnergyParams {
            goal: WeightGoal::Gain,
            ..base
        },
        &config,
    )
    .unwrap();
    assert!((gain.target_kcal - (maintain.tdee + 300.0)).abs() < TOLERANCE);
}

#[test]
fn daily_energy_target_never_drops_below_floor() {
    let config = WellnessConfig::default();
    let params = DailyEnergyParams {
        weight_kg: 30.0,
        height_cm: 100.0,
        age: 100,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: WeightGoal::Lose,
    };

    // BMR floors at 1000, TDEE is 1200, the 500 kcal deficit would land at
    // 700: clamped back to the floor
    let needs = calculate_daily_energy(&params, &config).unwrap();
    assert!((needs.target_kcal - 1000.0).abs() < TOLERANCE);
}

#[test]
fn parsing_of_cli_facing_enums() {
    assert_eq!(
        "moderate".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::ModeratelyActive
    );
    assert_eq!(
        "very-active".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::VeryActive
    );
    assert!("couch".parse::<ActivityLevel>().is_err());

    assert_eq!("lose".parse::<WeightGoal>().unwrap(), WeightGoal::Lose);
    assert!("bulk-only".parse::<WeightGoal>().is_err());
}
