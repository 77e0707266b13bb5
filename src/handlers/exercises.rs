// ABOUTME: Exercise request handler deciding the outcome of each CRUD operation
// ABOUTME: Applies validation and identifier gating in a fixed order before touching storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Exercise request handler
//!
//! Each operation is one synchronous attempt against the injected repository.
//! Outcomes are threaded through [`AppResult`]:
//!
//! | Error code | Meaning |
//! |---|---|
//! | `InvalidInput` | body failed validation (400) |
//! | `ResourceNotFound` | identifier malformed or nothing stored under it (404) |
//! | `DatabaseError` | the repository itself failed (500 at the transport edge) |
//!
//! A malformed identifier and an absent record are the same
//! outcome. On update the body is validated before the identifier shape is
//! looked at, so a request that is wrong in both ways reports `InvalidInput`.

use crate::database::ExerciseRepository;
use crate::validation;
use exercise_tracker_core::errors::{AppError, AppResult};
use exercise_tracker_core::models::{Exercise, ExerciseId, NewExercise};
use serde_json::Value;
use std::sync::Arc;

const RESOURCE: &str = "Exercise";

/// Stateless orchestration over a storage collaborator
#[derive(Clone)]
pub struct ExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl ExerciseHandler {
    /// Build a handler over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new exercise
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the body fails validation; `DatabaseError` if storage fails
    pub async fn create(&self, payload: &Value) -> AppResult<Exercise> {
        let exercise = checked_exercise(payload)?;
        Ok(self.repository.create(&exercise).await?)
    }

    /// Every stored exercise in storage order
    ///
    /// # Errors
    ///
    /// `DatabaseError` if storage fails
    pub async fn list(&self) -> AppResult<Vec<Exercise>> {
        Ok(self.repository.list_all().await?)
    }

    /// Fetch one exercise
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for a malformed or unknown identifier; `DatabaseError` if storage fails
    pub async fn get(&self, id: &str) -> AppResult<Exercise> {
        let id = parse_id(id)?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    /// Replace all five fields of an existing exercise
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the body fails validation (checked first),
    /// `ResourceNotFound` for a malformed or unknown identifier,
    /// `DatabaseError` if storage fails
    pub async fn update(&self, id: &str, payload: &Value) -> AppResult<Exercise> {
        let exercise = checked_exercise(payload)?;
        let id = parse_id(id)?;
        self.repository
            .update_by_id(&id, &exercise)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    /// Remove an exercise
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for a malformed or unknown identifier; `DatabaseError` if storage fails
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;
        if self.repository.delete_by_id(&id).await? {
            Ok(())
        } else {
            Err(not_found(&id))
        }
    }
}

fn checked_exercise(payload: &Value) -> AppResult<NewExercise> {
    validation::inspect(payload)
        .map(|body| body.normalize())
        .map_err(|failure| AppError::invalid_input(failure.to_string()))
}

fn parse_id(raw: &str) -> AppResult<ExerciseId> {
    ExerciseId::parse(raw)
        .ok_or_else(|| AppError::not_found(format!("{RESOURCE} with malformed id {raw:?}")))
}

fn not_found(id: &ExerciseId) -> AppError {
    AppError::not_found(format!("{RESOURCE} {id}"))
}
