// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports the running service, readiness probes the storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Health check routes
//!
//! `/health` answers as long as the process serves requests. `/ready`
//! answers 503 while the storage backend fails its probe.

use crate::database::ExerciseRepository;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use exercise_tracker_core::constants::{routes, service_names};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(repository: Arc<dyn ExerciseRepository>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(repository)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::EXERCISE_TRACKER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(repository): State<Arc<dyn ExerciseRepository>>,
    ) -> (StatusCode, Json<Value>) {
        let timestamp = chrono::Utc::now().to_rfc3339();

        match repository.health_check().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({ "status": "ready", "timestamp": timestamp })),
            ),
            Err(e) => {
                warn!("Readiness probe failed: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "status": "unavailable", "timestamp": timestamp })),
                )
            }
        }
    }
}
