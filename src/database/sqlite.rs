// ABOUTME: SQLite exercise repository using an sqlx connection pool
// ABOUTME: Creates the exercises table on startup and maps rows back into exercise records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use super::{DatabaseError, ExerciseRepository};
use async_trait::async_trait;
use exercise_tracker_core::models::{Exercise, ExerciseId, NewExercise, WeightUnit};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::debug;

const SELECT_COLUMNS: &str = "id, name, reps, weight, unit, date";

/// `SQLite` implementation of [`ExerciseRepository`]
#[derive(Debug, Clone)]
pub struct SqliteExerciseRepository {
    pool: SqlitePool,
}

impl SqliteExerciseRepository {
    /// Open (creating if missing) the database at `database_url` and run migrations
    ///
    /// `sqlite::memory:` yields a private in-memory database held on a single
    /// pooled connection, since every new connection would otherwise see an
    /// empty database of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the database cannot be opened,
    /// or the schema cannot be created
    pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("invalid SQLite URL {database_url}: {e}"),
            })?
            .create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the exercises table
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                reps INTEGER NOT NULL CHECK (reps > 0),
                weight INTEGER NOT NULL CHECK (weight > 0),
                unit TEXT NOT NULL CHECK (unit IN ('kgs', 'lbs')),
                date TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("Failed to create exercises table: {e}"),
        })?;

        debug!("exercises table ready");
        Ok(())
    }
}

#[async_trait]
impl ExerciseRepository for SqliteExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        let id = ExerciseId::generate();

        sqlx::query(
            r"
            INSERT INTO exercises (id, name, reps, weight, unit, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(id.as_str())
        .bind(&exercise.name)
        .bind(exercise.reps)
        .bind(exercise.weight)
        .bind(exercise.unit.as_str())
        .bind(&exercise.date)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError {
            context: format!("Failed to insert exercise: {e}"),
        })?;

        Ok(Exercise::from_new(id, exercise.clone()))
    }

    async fn list_all(&self) -> Result<Vec<Exercise>, DatabaseError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM exercises ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError {
            context: format!("Failed to list exercises: {e}"),
        })?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DatabaseError> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM exercises WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError {
            context: format!("Failed to get exercise: {e}"),
        })?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn update_by_id(
        &self,
        id: &ExerciseId,
        exercise: &NewExercise,
    ) -> Result<Option<Exercise>, DatabaseError> {
        let row = sqlx::query(&format!(
            r"
            UPDATE exercises
            SET name = $1, reps = $2, weight = $3, unit = $4, date = $5
            WHERE id = $6
            RETURNING {SELECT_COLUMNS}
            "
        ))
        .bind(&exercise.name)
        .bind(exercise.reps)
        .bind(exercise.weight)
        .bind(exercise.unit.as_str())
        .bind(&exercise.date)
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryError {
            context: format!("Failed to update exercise: {e}"),
        })?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn delete_by_id(&self, id: &ExerciseId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: format!("Failed to delete exercise: {e}"),
            })?;

        Ok(result.rows_affected() == 1)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("SQLite health check failed: {e}"),
            })?;
        Ok(())
    }
}

fn row_to_exercise(row: &SqliteRow) -> Result<Exercise, DatabaseError> {
    let raw_id: String = row.try_get("id")?;
    let corrupt = |reason: &str| DatabaseError::CorruptRecord {
        id: raw_id.clone(),
        reason: reason.to_owned(),
    };

    let id = ExerciseId::parse(&raw_id).ok_or_else(|| corrupt("malformed identifier"))?;
    let unit_str: String = row.try_get("unit")?;
    let unit = WeightUnit::parse(&unit_str).ok_or_else(|| corrupt("unknown weight unit"))?;

    Ok(Exercise {
        id,
        name: row.try_get("name")?,
        reps: row.try_get("reps")?,
        weight: row.try_get("weight")?,
        unit,
        date: row.try_get("date")?,
    })
}
