// ABOUTME: Storage collaborator abstraction for exercise records
// ABOUTME: Defines the repository contract and the in-memory and SQLite backends behind it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! # Exercise Storage
//!
//! The request handler only sees [`ExerciseRepository`]. Each operation is a
//! single-document action; the backends guarantee that one call is atomic but
//! define no cross-record transactions.

/// Backend selection from a configured URL
pub mod factory;
/// Process-local, non-persistent backend
pub mod memory;
/// `SQLite` backend
pub mod sqlite;

pub use exercise_tracker_core::errors::DatabaseError;
pub use factory::Database;
pub use memory::InMemoryExerciseRepository;
pub use sqlite::SqliteExerciseRepository;

use async_trait::async_trait;
use exercise_tracker_core::models::{Exercise, ExerciseId, NewExercise};

/// Document-store contract for exercise records
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a new record under a freshly assigned identifier
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError>;

    /// Every stored record, in the backend's natural (insertion) order
    async fn list_all(&self) -> Result<Vec<Exercise>, DatabaseError>;

    /// Look up one record
    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DatabaseError>;

    /// Replace all five fields of a record; `None` when nothing matched
    async fn update_by_id(
        &self,
        id: &ExerciseId,
        exercise: &NewExercise,
    ) -> Result<Option<Exercise>, DatabaseError>;

    /// Remove a record; `false` when nothing matched
    async fn delete_by_id(&self, id: &ExerciseId) -> Result<bool, DatabaseError>;

    /// Cheap liveness probe of the backend
    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
