// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample payloads and router construction over test storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `exercise_tracker`

use axum::Router;
use exercise_tracker::config::environment::{DatabaseUrl, ServerConfig};
use exercise_tracker::database::{Database, ExerciseRepository, InMemoryExerciseRepository};
use exercise_tracker::server::build_router;
use serde_json::{json, Value};
use std::sync::{Arc, Once};

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

        // Another test binary harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A body that passes validation
pub fn push_ups() -> Value {
    json!({
        "name": "Push Ups",
        "reps": 20,
        "weight": 1,
        "unit": "KGS",
        "date": "06-01-25"
    })
}

/// Full application router over the given repository
pub fn router_over(repository: Arc<dyn ExerciseRepository>) -> Router {
    init_test_logging();
    build_router(repository, &ServerConfig::default())
}

/// Full application router over a fresh in-memory store
pub fn memory_router() -> Router {
    router_over(Arc::new(InMemoryExerciseRepository::new()))
}

/// Full application router over a fresh in-memory `SQLite` database
pub async fn sqlite_memory_router() -> Router {
    let database = Database::new(&DatabaseUrl::SQLiteMemory)
        .await
        .expect("in-memory SQLite should open");
    router_over(Arc::new(database))
}
