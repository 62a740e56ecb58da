// ABOUTME: Structured error types for database operations
// ABOUTME: Wraps sqlx failures with the operation that produced them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or configure the connection pool
    #[error("Failed to connect to database: {0}")]
    Connection(String),

    /// Schema migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// A query failed while performing the named operation
    #[error("Failed to {operation}: {source}")]
    Query {
        /// Operation being performed, e.g. "create conversation"
        operation: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A stored value could not be decoded into a domain type
    #[error("Invalid stored value for {field}: {reason}")]
    InvalidData {
        /// Column or field name
        field: &'static str,
        /// Why decoding failed
        reason: String,
    },
}

impl DatabaseError {
    /// Build a closure that wraps a `sqlx::Error` with the given operation name
    pub fn query(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { operation, source }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(source: sqlx::Error) -> Self {
        Self::Query {
            operation: "execute query",
            source,
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        Self::new(ErrorCode::DatabaseError, error.to_string()).with_source(error)
    }
}
