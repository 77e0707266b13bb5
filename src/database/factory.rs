// ABOUTME: Database factory selecting the exercise storage backend from configuration
// ABOUTME: Wraps the in-memory and SQLite repositories behind one delegating enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Database factory for creating storage backends
//!
//! The backend is chosen once at startup and handed to the request handler;
//! nothing here is global.

use super::{
    DatabaseError, ExerciseRepository, InMemoryExerciseRepository, SqliteExerciseRepository,
};
use crate::config::environment::DatabaseUrl;
use async_trait::async_trait;
use exercise_tracker_core::models::{Exercise, ExerciseId, NewExercise};
use tracing::{debug, info};

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Debug)]
pub enum Database {
    /// Process-local store
    Memory(InMemoryExerciseRepository),
    /// `SQLite` file or in-memory database
    SQLite(SqliteExerciseRepository),
}

impl Database {
    /// Open the backend named by `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the `SQLite` database (or its parent directory)
    /// cannot be created, opened or migrated
    pub async fn new(url: &DatabaseUrl) -> Result<Self, DatabaseError> {
        debug!("Opening exercise storage at {}", url);

        let database = match url {
            DatabaseUrl::Memory => Self::Memory(InMemoryExerciseRepository::new()),
            DatabaseUrl::SQLiteMemory => {
                Self::SQLite(SqliteExerciseRepository::connect(&url.to_connection_string()).await?)
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::ConnectionError {
                            context: format!(
                                "Failed to create database directory {}: {e}",
                                parent.display()
                            ),
                        }
                    })?;
                }
                Self::SQLite(SqliteExerciseRepository::connect(&url.to_connection_string()).await?)
            }
        };

        info!("Exercise storage ready: {}", database.backend_info());
        Ok(database)
    }

    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (non-persistent)",
            Self::SQLite(_) => "SQLite",
        }
    }
}

#[async_trait]
impl ExerciseRepository for Database {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        match self {
            Self::Memory(db) => db.create(exercise).await,
            Self::SQLite(db) => db.create(exercise).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Exercise>, DatabaseError> {
        match self {
            Self::Memory(db) => db.list_all().await,
            Self::SQLite(db) => db.list_all().await,
        }
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DatabaseError> {
        match self {
            Self::Memory(db) => db.find_by_id(id).await,
            Self::SQLite(db) => db.find_by_id(id).await,
        }
    }

    async fn update_by_id(
        &self,
        id: &ExerciseId,
        exercise: &NewExercise,
    ) -> Result<Option<Exercise>, DatabaseError> {
        match self {
            Self::Memory(db) => db.update_by_id(id, exercise).await,
            Self::SQLite(db) => db.update_by_id(id, exercise).await,
        }
    }

    async fn delete_by_id(&self, id: &ExerciseId) -> Result<bool, DatabaseError> {
        match self {
            Self::Memory(db) => db.delete_by_id(id).await,
            Self::SQLite(db) => db.delete_by_id(id).await,
        }
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        match self {
            Self::Memory(db) => db.health_check().await,
            Self::SQLite(db) => db.health_check().await,
        }
    }
}
