// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads bind address, storage backend, CORS and logging settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Configuration module for the exercise tracker
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
