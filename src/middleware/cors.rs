// ABOUTME: CORS middleware configuration for the exercises API
// ABOUTME: Lets the browser UI call the API from its own origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::config::environment::ServerConfig;
use http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::REQUEST_ID_HEADER;

/// Configure CORS for the exercises API
///
/// Origins come from `CORS_ALLOWED_ORIGINS`:
///
/// ```bash
/// # Any origin (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Only the deployed UI
/// export CORS_ALLOWED_ORIGINS="https://exercises.example.com,http://localhost:5173"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    CorsLayer::new()
        .allow_origin(parse_origins(&config.cors.allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
}

/// `*`, an empty value, or a list with no usable entry all mean any origin
fn parse_origins(raw: &str) -> AllowOrigin {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
