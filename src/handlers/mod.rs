// ABOUTME: Protocol-agnostic request handlers sitting between HTTP routes and storage
// ABOUTME: Orchestrates identifier checks, body validation and repository calls per operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

/// Exercise create/list/read/update/delete orchestration
pub mod exercises;

pub use exercises::ExerciseHandler;
