// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for exercise fields, response messages and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Exercise payload field names and format rules
pub mod fields {
    /// Exercise name
    pub const NAME: &str = "name";
    /// Repetition count
    pub const REPS: &str = "reps";
    /// Weight lifted
    pub const WEIGHT: &str = "weight";
    /// Weight unit (`kgs` or `lbs`)
    pub const UNIT: &str = "unit";
    /// Date in `MM-DD-YY` form
    pub const DATE: &str = "date";

    /// The exact key set a create or update body must carry
    pub const REQUIRED: [&str; 5] = [NAME, REPS, WEIGHT, UNIT, DATE];

    /// Number of hex characters in an exercise identifier
    pub const ID_HEX_LEN: usize = 24;

    /// Two-digit years are offsets from this century
    pub const DATE_CENTURY: i32 = 2000;
}

/// Fixed client-facing error messages
pub mod messages {
    /// Body failed validation
    pub const INVALID_REQUEST: &str = "Invalid request";
    /// Identifier malformed or no matching record
    pub const NOT_FOUND: &str = "Not found";
    /// Storage or other server-side fault
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// API routes
pub mod routes {
    /// Exercise collection route
    pub const EXERCISES: &str = "/exercises";
    /// Single exercise route
    pub const EXERCISE_BY_ID: &str = "/exercises/:id";
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const EXERCISE_TRACKER: &str = "exercise-tracker";
}

/// Configuration defaults
pub mod defaults {
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3000;
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/exercises.db";
    /// Default CORS origins (any)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names read at startup
pub mod env_keys {
    /// Bind host
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const PORT: &str = "PORT";
    /// Storage backend URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
