// ABOUTME: Configuration module grouping environment and wellness tuning settings
// ABOUTME: Re-exports the primary configuration types for convenient access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management for the wellness core

/// Environment-based deployment configuration
pub mod environment;

/// Wellness domain tuning: reminder gates and energy formulas
pub mod wellness_config;

pub use environment::ServerConfig;
pub use wellness_config::WellnessConfig;
