// ABOUTME: Route module organization for exercise tracker HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Route module for the exercise tracker
//!
//! Each domain module contains only route definitions and thin handler
//! functions that decode the request and delegate to the handler layer.

/// Exercise CRUD routes
pub mod exercises;
/// Health check and system status routes
pub mod health;

/// Exercise route handlers
pub use exercises::ExerciseRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
