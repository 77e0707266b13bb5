// ABOUTME: In-memory exercise repository backed by an insertion-ordered vector
// ABOUTME: Used for ephemeral deployments and as the storage double in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use super::{DatabaseError, ExerciseRepository};
use async_trait::async_trait;
use exercise_tracker_core::models::{Exercise, ExerciseId, NewExercise};
use tokio::sync::RwLock;

/// Non-persistent repository; contents vanish with the process
#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    exercises: RwLock<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        let mut exercises = self.exercises.write().await;

        let mut id = ExerciseId::generate();
        while exercises.iter().any(|stored| stored.id == id) {
            id = ExerciseId::generate();
        }

        let created = Exercise::from_new(id, exercise.clone());
        exercises.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Exercise>, DatabaseError> {
        Ok(self.exercises.read().await.clone())
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DatabaseError> {
        Ok(self
            .exercises
            .read()
            .await
            .iter()
            .find(|stored| &stored.id == id)
            .cloned())
    }

    async fn update_by_id(
        &self,
        id: &ExerciseId,
        exercise: &NewExercise,
    ) -> Result<Option<Exercise>, DatabaseError> {
        let mut exercises = self.exercises.write().await;
        let Some(stored) = exercises.iter_mut().find(|stored| &stored.id == id) else {
            return Ok(None);
        };

        *stored = Exercise::from_new(id.clone(), exercise.clone());
        Ok(Some(stored.clone()))
    }

    async fn delete_by_id(&self, id: &ExerciseId) -> Result<bool, DatabaseError> {
        let mut exercises = self.exercises.write().await;
        let Some(position) = exercises.iter().position(|stored| &stored.id == id) else {
            return Ok(false);
        };

        exercises.remove(position);
        Ok(true)
    }
}
