// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, database, and sample data helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(dead_code)]
//! Shared test utilities for `bodhi_wellness`

use anyhow::Result;
use bodhi_wellness::database::Database;
use bodhi_wellness::models::{Gender, UserProfile};
use bodhi_wellness::tracking::UserData;
use chrono::NaiveDate;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// A fixed test date (Monday)
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// A valid sample profile
pub fn sample_profile() -> UserProfile {
    UserProfile::new("Asha", 34, Gender::Female, 162.0, 60.0).unwrap()
}

/// Session data with a profile and one weight entry
pub fn sample_user_data() -> UserData {
    let mut data = UserData::new(test_date());
    data.set_profile(sample_profile(), test_date());
    data
}
