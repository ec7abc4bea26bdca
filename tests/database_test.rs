// ABOUTME: Integration tests for the single-table key-value store
// ABOUTME: Covers round-trips, overwrites, deletes, key listing, and file reopen
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use bodhi_wellness::database::Database;
use bodhi_wellness::tracking::UserData;
use chrono::NaiveDate;

mod common;

#[tokio::test]
async fn round_trip_preserves_user_data() {
    let database = common::create_test_database().await.unwrap();

    let mut data = common::sample_user_data();
    data.acknowledge_exercise_snack();
    data.log_weight(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(), 59.5)
        .unwrap();

    database.save_user_data("asha", &data).await.unwrap();

    let loaded = database.load_user_data("asha").await.unwrap().unwrap();
    assert_eq!(
        loaded.profile.as_ref().unwrap().name,
        data.profile.as_ref().unwrap().name
    );
    assert_eq!(loaded.weight_history, data.weight_history);
    assert_eq!(loaded.reminders, data.reminders);
    assert!(loaded.daily_checklist.exercise_snack);
}

#[tokio::test]
async fn pool_supports_raw_queries() {
    let database = common::create_test_database().await.unwrap();
    database
        .save_user_data("asha", &common::sample_user_data())
        .await
        .unwrap();

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_data")
        .fetch_one(database.pool())
        .await
        .unwrap();
    assert_eq!(row.0, 1);
}

#[tokio::test]
async fn missing_key_loads_none() {
    let database = common::create_test_database().await.unwrap();
    assert!(database.load_user_data("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn save_overwrites_existing_value() {
    let database = common::create_test_database().await.unwrap();

    let mut data = common::sample_user_data();
    database.save_user_data("asha", &data).await.unwrap();

    data.acknowledge_exercise_snack();
    data.acknowledge_exercise_snack();
    database.save_user_data("asha", &data).await.unwrap();

    let loaded = database.load_user_data("asha").await.unwrap().unwrap();
    assert_eq!(loaded.reminders.completed_today, 2);

    let keys = database.list_keys().await.unwrap();
    assert_eq!(keys, vec!["asha"]);
}

#[tokio::test]
async fn delete_reports_existence() {
    let database = common::create_test_database().await.unwrap();
    let data = UserData::new(common::test_date());

    database.save_user_data("asha", &data).await.unwrap();
    assert!(database.delete_user_data("asha").await.unwrap());
    assert!(!database.delete_user_data("asha").await.unwrap());
    assert!(database.load_user_data("asha").await.unwrap().is_none());
}

#[tokio::test]
async fn list_keys_is_sorted() {
    let database = common::create_test_database().await.unwrap();
    let data = UserData::new(common::test_date());

    for key in ["ravi", "asha", "meera"] {
        database.save_user_data(key, &data).await.unwrap();
    }

    let keys = database.list_keys().await.unwrap();
    assert_eq!(keys, vec!["asha", "meera", "ravi"]);
}

#[tokio::test]
async fn file_backed_database_survives_reopen() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/bodhi.db", dir.path().display());

    {
        let database = Database::new(&url).await.unwrap();
        database
            .save_user_data("asha", &common::sample_user_data())
            .await
            .unwrap();
    }

    let database = Database::new(&url).await.unwrap();
    let loaded = database.load_user_data("asha").await.unwrap();
    assert!(loaded.is_some());
}
