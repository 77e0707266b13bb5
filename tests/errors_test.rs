// ABOUTME: Unit tests for error handling functionality
// ABOUTME: Validates error codes, public messages and HTTP error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::body::to_bytes;
use axum::response::IntoResponse;
use exercise_tracker::errors::{AppError, DatabaseError, ErrorCode, ErrorResponse};
use serde_json::{json, Value};

async fn render(error: AppError) -> (u16, Value) {
    let response = error.into_response();
    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[test]
fn test_public_messages() {
    assert_eq!(ErrorCode::InvalidInput.public_message(), "Invalid request");
    assert_eq!(ErrorCode::ResourceNotFound.public_message(), "Not found");
    assert_eq!(
        ErrorCode::DatabaseError.public_message(),
        "Internal server error"
    );
}

#[test]
fn test_constructors_pick_codes() {
    assert_eq!(AppError::invalid_input("bad").code, ErrorCode::InvalidInput);
    assert_eq!(AppError::not_found("Exercise").code, ErrorCode::ResourceNotFound);
    assert_eq!(AppError::database("locked").code, ErrorCode::DatabaseError);
}

#[test]
fn test_error_response_field_is_capitalized() {
    let response = ErrorResponse::from(AppError::not_found("Exercise abc"));
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, json!({"Error": "Not found"}));
}

#[tokio::test]
async fn test_into_response_statuses_and_bodies() {
    assert_eq!(
        render(AppError::invalid_input("reps must be positive")).await,
        (400, json!({"Error": "Invalid request"}))
    );
    assert_eq!(
        render(AppError::not_found("Exercise 507f1f77bcf86cd799439011")).await,
        (404, json!({"Error": "Not found"}))
    );

    let storage = AppError::from(DatabaseError::ConnectionError {
        context: "pool timed out".to_owned(),
    });
    assert_eq!(
        render(storage).await,
        (500, json!({"Error": "Internal server error"}))
    );
}

#[test]
fn test_display_includes_detail_for_logs() {
    let error = AppError::from(DatabaseError::CorruptRecord {
        id: "zz".to_owned(),
        reason: "malformed identifier".to_owned(),
    });
    let text = error.to_string();
    assert!(text.contains("Database operation failed"));
    assert!(text.contains("malformed identifier"));
}
