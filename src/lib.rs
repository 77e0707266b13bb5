// ABOUTME: Main library entry point for the exercise tracker service
// ABOUTME: Exposes validation, request handling, storage backends and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![deny(unsafe_code)]

//! # Exercise Tracker
//!
//! A small REST service recording workout exercises. Each record carries a
//! name, repetitions, weight, a weight unit (`kgs` or `lbs`) and an
//! `MM-DD-YY` date, and is addressed by a 24-character hexadecimal id.
//!
//! ## Architecture
//!
//! - **Validation**: pure checks over raw JSON payloads
//! - **Handlers**: per-operation orchestration deciding the outcome
//! - **Database**: storage trait with in-memory and `SQLite` backends
//! - **Routes**: axum endpoints mapping outcomes to HTTP statuses
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_tracker::config::environment::ServerConfig;
//! use exercise_tracker::database::Database;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url).await?;
//!     exercise_tracker::server::run(&config, Arc::new(database)).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Exercise storage backends
pub mod database;

/// Per-operation request handling
pub mod handlers;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route definitions
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Exercise payload validation
pub mod validation;

pub use exercise_tracker_core::{constants, errors, models};
