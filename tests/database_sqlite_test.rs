// ABOUTME: Tests for the SQLite and in-memory exercise repositories
// ABOUTME: Validates persistence across reopen, ordering, replacement and the backend factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use exercise_tracker::config::environment::DatabaseUrl;
use exercise_tracker::database::{
    Database, DatabaseError, ExerciseRepository, SqliteExerciseRepository,
};
use exercise_tracker::models::{ExerciseId, NewExercise, WeightUnit};
use tempfile::TempDir;

fn squat(reps: i64) -> NewExercise {
    NewExercise {
        name: "Squat".to_owned(),
        reps,
        weight: 100,
        unit: WeightUnit::Kgs,
        date: "03-15-25".to_owned(),
    }
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let url = DatabaseUrl::SQLite {
        path: temp_dir.path().join("nested").join("exercises.db"),
    };

    let created = {
        let database = Database::new(&url).await?;
        assert_eq!(database.backend_info(), "SQLite");
        database.create(&squat(5)).await?
    };

    let reopened = Database::new(&url).await?;
    let found = reopened.find_by_id(&created.id).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_list_is_in_insertion_order() -> Result<()> {
    let repository = SqliteExerciseRepository::connect("sqlite::memory:").await?;

    let mut expected = Vec::new();
    for reps in [3, 1, 2] {
        expected.push(repository.create(&squat(reps)).await?.id);
    }

    let listed: Vec<ExerciseId> = repository
        .list_all()
        .await?
        .into_iter()
        .map(|exercise| exercise.id)
        .collect();
    assert_eq!(listed, expected);
    Ok(())
}

#[tokio::test]
async fn test_update_replaces_all_fields() -> Result<()> {
    let repository = SqliteExerciseRepository::connect("sqlite::memory:").await?;
    let created = repository.create(&squat(5)).await?;

    let replacement = NewExercise {
        name: "Front Squat".to_owned(),
        reps: 3,
        weight: 220,
        unit: WeightUnit::Lbs,
        date: "12-31-24".to_owned(),
    };
    let updated = repository
        .update_by_id(&created.id, &replacement)
        .await?
        .expect("record should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Front Squat");
    assert_eq!(updated.reps, 3);
    assert_eq!(updated.weight, 220);
    assert_eq!(updated.unit, WeightUnit::Lbs);
    assert_eq!(updated.date, "12-31-24");
    assert_eq!(repository.find_by_id(&created.id).await?, Some(updated));
    Ok(())
}

#[tokio::test]
async fn test_missing_records() -> Result<()> {
    let repository = SqliteExerciseRepository::connect("sqlite::memory:").await?;
    let missing = ExerciseId::parse("507f1f77bcf86cd799439011").unwrap();

    assert_eq!(repository.find_by_id(&missing).await?, None);
    assert_eq!(repository.update_by_id(&missing, &squat(1)).await?, None);
    assert!(!repository.delete_by_id(&missing).await?);
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_only_target() -> Result<()> {
    let repository = SqliteExerciseRepository::connect("sqlite::memory:").await?;
    let first = repository.create(&squat(1)).await?;
    let second = repository.create(&squat(2)).await?;

    assert!(repository.delete_by_id(&first.id).await?);
    assert!(!repository.delete_by_id(&first.id).await?);
    assert_eq!(repository.list_all().await?, vec![second]);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_row_is_reported() -> Result<()> {
    let repository = SqliteExerciseRepository::connect("sqlite::memory:").await?;
    sqlx::query(
        "INSERT INTO exercises (id, name, reps, weight, unit, date) VALUES ('not-hex', 'Row', 1, 1, 'kgs', '01-01-25')",
    )
    .execute(repository.pool())
    .await?;

    let err = repository.list_all().await.unwrap_err();
    assert!(matches!(err, DatabaseError::CorruptRecord { .. }));
    Ok(())
}

#[tokio::test]
async fn test_memory_backend_from_factory() -> Result<()> {
    let database = Database::new(&DatabaseUrl::Memory).await?;
    assert_eq!(database.backend_info(), "In-memory (non-persistent)");

    let created = database.create(&squat(8)).await?;
    assert_eq!(database.list_all().await?, vec![created.clone()]);
    assert!(database.delete_by_id(&created.id).await?);
    assert!(database.list_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_generated_ids_are_unique() -> Result<()> {
    let database = Database::new(&DatabaseUrl::SQLiteMemory).await?;
    let mut ids = std::collections::HashSet::new();
    for _ in 0..50 {
        assert!(ids.insert(database.create(&squat(1)).await?.id));
    }
    Ok(())
}
