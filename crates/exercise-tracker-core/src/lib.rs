// ABOUTME: Core types and constants for the exercise tracker service
// ABOUTME: Foundation crate with error handling, exercise models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![deny(unsafe_code)]

//! # Exercise Tracker Core
//!
//! Foundation crate providing shared types and constants for the exercise
//! tracker service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **models**: Exercise records, identifiers and weight units
//! - **constants**: Field names, response messages and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, `ExerciseId`, `WeightUnit`)
pub mod models;
