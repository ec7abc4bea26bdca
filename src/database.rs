// ABOUTME: Single-table key-value persistence for session data
// ABOUTME: Stores each session's UserData as a JSON document in SQLite
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Key-Value Persistence
//!
//! A deliberately small storage layer: one table mapping a caller-chosen
//! key to the JSON document of a session's [`UserData`]. Hosts that want
//! state to survive a restart save on mutation and load at session start;
//! everything else about durability stays out of scope.

use anyhow::{Context, Result};
use sqlx::{Pool, Row, Sqlite, SqlitePool};

use crate::tracking::UserData;

/// Key-value store for session data
#[derive(Debug, Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && database_url != "sqlite::memory:"
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .with_context(|| format!("Failed to connect to {database_url}"))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_data (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Upsert a session's data under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save_user_data(&self, key: &str, data: &UserData) -> Result<()> {
        let value = serde_json::to_string(data).context("Failed to serialize user data")?;

        sqlx::query(
            r"
            INSERT INTO user_data (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load a session's data by `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored JSON is corrupt
    pub async fn load_user_data(&self, key: &str) -> Result<Option<UserData>> {
        let row = sqlx::query("SELECT value FROM user_data WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let value: String = row.try_get("value")?;
                let data = serde_json::from_str(&value)
                    .with_context(|| format!("Corrupt user data for key {key}"))?;
                Ok(Some(data))
            }
            None => Ok(None),
        }
    }

    /// Delete a session's data, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_user_data(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_data WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all stored keys in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn list_keys(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT key FROM user_data ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| row.try_get::<String, _>("key").map_err(Into::into))
            .collect()
    }
}
