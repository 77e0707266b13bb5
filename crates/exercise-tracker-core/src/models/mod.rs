// ABOUTME: Core data models for the exercise tracker
// ABOUTME: Re-exports exercise records, identifiers and weight units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Core data models
//!
//! The service stores a single flat collection of exercise log entries.

/// Exercise records and their field types
pub mod exercise;

pub use exercise::{Exercise, ExerciseId, InvalidExerciseId, NewExercise, WeightUnit};
