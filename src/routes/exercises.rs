// ABOUTME: Route handlers for the exercises REST API
// ABOUTME: Decodes JSON bodies and path identifiers, maps handler outcomes to HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Exercises routes
//!
//! | Route | Success | Failures |
//! |---|---|---|
//! | `POST /exercises` | 201 + record | 400 |
//! | `GET /exercises` | 200 + array | |
//! | `GET /exercises/:id` | 200 + record | 404 |
//! | `PUT /exercises/:id` | 200 + record | 400, then 404 |
//! | `DELETE /exercises/:id` | 204 | 404 |
//!
//! An identifier the path extractor cannot decode is treated like any other
//! malformed identifier. Storage faults surface as 500 with a fixed message.

use crate::handlers::ExerciseHandler;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use exercise_tracker_core::constants::routes;
use exercise_tracker_core::errors::AppError;
use serde_json::{Map, Value};
use tracing::debug;

/// Exercises routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(handler: ExerciseHandler) -> Router {
        Router::new()
            .route(
                routes::EXERCISES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                routes::EXERCISE_BY_ID,
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(handler)
    }

    /// Handle exercise creation
    async fn handle_create(
        State(handler): State<ExerciseHandler>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let payload = decode_payload(&headers, &body);
        let created = handler.create(&payload).await?;

        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    /// Handle listing every exercise
    async fn handle_list(State(handler): State<ExerciseHandler>) -> Result<Response, AppError> {
        let exercises = handler.list().await?;

        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle fetching one exercise
    async fn handle_get(
        State(handler): State<ExerciseHandler>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let exercise = handler.get(&path_id(id)).await?;

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle replacing an exercise
    async fn handle_update(
        State(handler): State<ExerciseHandler>,
        id: Result<Path<String>, PathRejection>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let payload = decode_payload(&headers, &body);
        let updated = handler.update(&path_id(id), &payload).await?;

        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle removing an exercise
    async fn handle_delete(
        State(handler): State<ExerciseHandler>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        handler.delete(&path_id(id)).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// The `:id` segment, or an empty identifier when it does not decode
///
/// An empty identifier never parses, so the handler answers 404 for it after
/// any body checks.
fn path_id(id: Result<Path<String>, PathRejection>) -> String {
    match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!("Undecodable exercise id: {}", rejection.body_text());
            String::new()
        }
    }
}

/// Turn a raw request body into the payload the validator sees
///
/// Non-JSON content types yield an empty object and unparseable JSON yields
/// `null`; neither passes validation, so both end as 400 rather than an
/// extractor rejection with a different status.
fn decode_payload(headers: &HeaderMap, body: &Bytes) -> Value {
    if !is_json_content(headers) {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content(&headers_with("application/json")));
        assert!(is_json_content(&headers_with(
            "Application/JSON; charset=utf-8"
        )));
        assert!(is_json_content(&headers_with("application/vnd.api+json")));
        assert!(!is_json_content(&headers_with("text/plain")));
        assert!(!is_json_content(&HeaderMap::new()));
    }

    #[test]
    fn test_decode_payload_fallbacks() {
        let body = Bytes::from_static(br#"{"name":"Row"}"#);
        assert_eq!(
            decode_payload(&headers_with("text/plain"), &body),
            Value::Object(Map::new())
        );

        let broken = Bytes::from_static(b"{not json");
        assert_eq!(
            decode_payload(&headers_with("application/json"), &broken),
            Value::Null
        );
    }
}
