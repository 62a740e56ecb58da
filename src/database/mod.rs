// ABOUTME: Database connection management and schema migrations
// ABOUTME: Owns the SQLite pool that every store operation is handed explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! This module owns the `SQLite` connection pool and the schema. The pool is
//! never global: a [`Database`] handle is created once at startup and passed
//! to whatever needs it.

mod conversations;

pub use conversations::ConversationManager;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppResult, DatabaseError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database manager for conversation storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database described by `config` and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| DatabaseError::Connection(e.to_string()))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` is a separate database, so pin the pool to one
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Self::ensure_parent_dir(&config.url).await?;
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database = %config.url, "Database initialized");
        Ok(db)
    }

    /// Open an in-memory database (tests and demos)
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn in_memory() -> AppResult<Self> {
        Self::new(&DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Conversation and message operations over this pool
    #[must_use]
    pub fn conversations(&self) -> ConversationManager {
        ConversationManager::new(self.pool.clone())
    }

    /// Short description of the backend for startup logs
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        "SQLite (sqlx)"
    }

    async fn ensure_parent_dir(url: &DatabaseUrl) -> AppResult<()> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    DatabaseError::Connection(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        const SCHEMA: [&str; 4] = [
            r"
            CREATE TABLE IF NOT EXISTS conversations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE INDEX IF NOT EXISTS idx_conversations_created_at
                ON conversations(created_at)
            ",
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                conversation_id TEXT NOT NULL REFERENCES conversations(id) ON DELETE CASCADE,
                role TEXT NOT NULL CHECK (role IN ('system', 'user', 'assistant')),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE INDEX IF NOT EXISTS idx_messages_conversation_created
                ON messages(conversation_id, created_at)
            ",
        ];

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::Migration(e.to_string()))?;
        }

        debug!("Database schema is up to date");
        Ok(())
    }
}
