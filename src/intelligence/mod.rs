// ABOUTME: Wellness intelligence module for evidence-based health calculations
// ABOUTME: Exposes BMI, BMR, TDEE, and daily calorie targeting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Wellness intelligence: the calculation layer behind profile insights

/// BMI, BMR, TDEE, and calorie target calculations
pub mod wellness_calculator;

pub use wellness_calculator::{
    calculate_bmi, calculate_daily_energy, calculate_mifflin_st_jeor, calculate_tdee,
    ActivityLevel, BmiCategory, DailyEnergyNeeds, DailyEnergyParams, WeightGoal,
};
