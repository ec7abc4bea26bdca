// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management

use crate::config::wellness_config::WellnessConfig;
use crate::constants::env_config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type controlling logging and validation strictness
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    Sqlite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite database (testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a database URL string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is not a supported SQLite form
    pub fn parse_url(url: &str) -> Result<Self> {
        if url == "sqlite::memory:" {
            return Ok(Self::Memory);
        }
        url.strip_prefix("sqlite:").map_or_else(
            || {
                Err(anyhow::anyhow!(
                    "Unsupported database URL: {url} (expected sqlite: scheme)"
                ))
            },
            |path| {
                Ok(Self::Sqlite {
                    path: PathBuf::from(path),
                })
            },
        )
    }

    /// Render the URL back to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Sqlite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }
}

/// Top-level runtime configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Log level
    pub log_level: LogLevel,
    /// Wellness domain tuning
    pub wellness: WellnessConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL is malformed or a wellness
    /// override fails to parse or validate
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str_or_default(
            &std::env::var("ENVIRONMENT").unwrap_or_default(),
        );
        let database_url = DatabaseUrl::parse_url(&env_config::database_url())
            .context("Failed to parse DATABASE_URL")?;
        let log_level = LogLevel::from_str_or_default(&env_config::log_level());
        let wellness = WellnessConfig::from_env().context("Invalid wellness configuration")?;

        let config = Self {
            environment,
            database_url,
            log_level,
            wellness,
        };

        info!(
            environment = %config.environment,
            database = %config.database_url.to_connection_string(),
            "configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_database_url_parsing() {
        let sqlite_url = DatabaseUrl::parse_url("sqlite:./data/bodhi.db").unwrap();
        assert_eq!(
            sqlite_url.to_connection_string(),
            "sqlite:./data/bodhi.db"
        );

        let memory_url = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert_eq!(memory_url, DatabaseUrl::Memory);

        assert!(DatabaseUrl::parse_url("postgresql://localhost/db").is_err());
    }
}
