// ABOUTME: Structured error types for storage collaborator operations
// ABOUTME: Provides backend-agnostic errors with context for better error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Backend could not be reached or opened
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// What was being connected to
        context: String,
    },

    /// A statement or store operation failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// What the operation was doing
        context: String,
    },

    /// Schema setup failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Which step failed
        context: String,
    },

    /// A stored row could not be turned back into a record
    #[error("Corrupt stored record {id}: {reason}")]
    CorruptRecord {
        /// Identifier of the offending row
        id: String,
        /// What was wrong with it
        reason: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Configuration(_) | sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
