// ABOUTME: Database operations for chat conversations and their messages
// ABOUTME: Explicit named queries; every write runs in a single transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, DatabaseError};
use crate::models::{Conversation, Message, MessageRole};
use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// Conversation Manager
// ============================================================================

/// Conversation and message store operations
///
/// Each method names exactly which related rows it loads; nothing is fetched
/// lazily behind the caller's back.
#[derive(Clone)]
pub struct ConversationManager {
    pool: SqlitePool,
}

impl ConversationManager {
    /// Create a new conversation manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Conversation Operations
    // ========================================================================

    /// Create a new conversation with no messages
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn create_conversation(&self, name: &str) -> AppResult<Conversation> {
        let conversation = Conversation {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at: normalize_timestamp(Utc::now()),
            messages: Vec::new(),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::query("begin create conversation"))?;

        sqlx::query(
            r"
            INSERT INTO conversations (id, name, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(conversation.id.to_string())
        .bind(&conversation.name)
        .bind(format_timestamp(conversation.created_at))
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::query("create conversation"))?;

        tx.commit()
            .await
            .map_err(DatabaseError::query("commit create conversation"))?;

        Ok(conversation)
    }

    /// Get a conversation together with its messages, oldest message first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_conversation_with_messages(
        &self,
        conversation_id: Uuid,
    ) -> AppResult<Option<Conversation>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::query("acquire connection"))?;

        let Some(mut conversation) = fetch_conversation(&mut *conn, conversation_id).await? else {
            return Ok(None);
        };
        conversation.messages = fetch_messages(&mut *conn, conversation_id).await?;

        Ok(Some(conversation))
    }

    /// List every conversation, newest first, each with its messages oldest first
    ///
    /// Runs two statements regardless of how many conversations exist.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_conversations_with_messages(&self) -> AppResult<Vec<Conversation>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::query("begin list conversations"))?;

        let conversation_rows = sqlx::query(
            r"
            SELECT id, name, created_at
            FROM conversations
            ORDER BY created_at DESC, rowid DESC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(DatabaseError::query("list conversations"))?;

        let message_rows = sqlx::query(
            r"
            SELECT id, conversation_id, role, content, created_at
            FROM messages
            ORDER BY created_at ASC, rowid ASC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(DatabaseError::query("list messages"))?;

        tx.commit()
            .await
            .map_err(DatabaseError::query("commit list conversations"))?;

        let mut messages_by_conversation: HashMap<Uuid, Vec<Message>> = HashMap::new();
        for row in &message_rows {
            let message = message_from_row(row)?;
            messages_by_conversation
                .entry(message.conversation_id)
                .or_default()
                .push(message);
        }

        conversation_rows
            .iter()
            .map(|row| {
                let mut conversation = conversation_from_row(row)?;
                conversation.messages = messages_by_conversation
                    .remove(&conversation.id)
                    .unwrap_or_default();
                Ok(conversation)
            })
            .collect()
    }

    /// Rename a conversation and return it with its messages
    ///
    /// Returns `None` when the conversation does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn rename_conversation(
        &self,
        conversation_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Conversation>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::query("begin rename conversation"))?;

        let result = sqlx::query(
            r"
            UPDATE conversations
            SET name = $1
            WHERE id = $2
            ",
        )
        .bind(name)
        .bind(conversation_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::query("rename conversation"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let conversation = match fetch_conversation(&mut *tx, conversation_id).await? {
            Some(mut conversation) => {
                conversation.messages = fetch_messages(&mut *tx, conversation_id).await?;
                Some(conversation)
            }
            None => None,
        };

        tx.commit()
            .await
            .map_err(DatabaseError::query("commit rename conversation"))?;

        Ok(conversation)
    }

    /// Delete a conversation and all its messages in one transaction
    ///
    /// Returns `false` when the conversation does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete_conversation(&self, conversation_id: Uuid) -> AppResult<bool> {
        let id = conversation_id.to_string();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::query("begin delete conversation"))?;

        sqlx::query("DELETE FROM messages WHERE conversation_id = $1")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::query("delete conversation messages"))?;

        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::query("delete conversation"))?;

        if result.rows_affected() == 0 {
            // Nothing to delete; dropping the transaction rolls it back
            return Ok(false);
        }

        tx.commit()
            .await
            .map_err(DatabaseError::query("commit delete conversation"))?;

        Ok(true)
    }

    // ========================================================================
    // Message Operations
    // ========================================================================

    /// Append a message to an existing conversation
    ///
    /// Returns `None`, writing nothing, when the conversation does not exist.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error, writing nothing, if `created_at` falls
    /// outside years 1 through 9999, or an error if database operation fails
    pub async fn add_message(
        &self,
        conversation_id: Uuid,
        role: MessageRole,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<Option<Message>> {
        let created_at = storable_timestamp(created_at)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::query("begin add message"))?;

        if fetch_conversation(&mut *tx, conversation_id).await?.is_none() {
            return Ok(None);
        }

        let message = Message {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            content: content.to_owned(),
            created_at,
        };

        sqlx::query(
            r"
            INSERT INTO messages (id, conversation_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id.to_string())
        .bind(conversation_id.to_string())
        .bind(role.as_str())
        .bind(&message.content)
        .bind(format_timestamp(message.created_at))
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::query("add message"))?;

        tx.commit()
            .await
            .map_err(DatabaseError::query("commit add message"))?;

        Ok(Some(message))
    }

    /// Get all messages of a conversation in chronological order
    ///
    /// Returns `None` when the conversation does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_messages(&self, conversation_id: Uuid) -> AppResult<Option<Vec<Message>>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::query("acquire connection"))?;

        if fetch_conversation(&mut *conn, conversation_id).await?.is_none() {
            return Ok(None);
        }

        fetch_messages(&mut *conn, conversation_id).await.map(Some)
    }

    /// Get a single message by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_message(&self, message_id: Uuid) -> AppResult<Option<Message>> {
        let row = sqlx::query(
            r"
            SELECT id, conversation_id, role, content, created_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(message_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::query("get message"))?;

        row.as_ref().map(message_from_row).transpose()
    }
}

// ============================================================================
// Named Queries
// ============================================================================

async fn fetch_conversation<'e, E>(
    executor: E,
    conversation_id: Uuid,
) -> AppResult<Option<Conversation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(
        r"
        SELECT id, name, created_at
        FROM conversations
        WHERE id = $1
        ",
    )
    .bind(conversation_id.to_string())
    .fetch_optional(executor)
    .await
    .map_err(DatabaseError::query("get conversation"))?;

    row.as_ref().map(conversation_from_row).transpose()
}

async fn fetch_messages<'e, E>(executor: E, conversation_id: Uuid) -> AppResult<Vec<Message>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        r"
        SELECT id, conversation_id, role, content, created_at
        FROM messages
        WHERE conversation_id = $1
        ORDER BY created_at ASC, rowid ASC
        ",
    )
    .bind(conversation_id.to_string())
    .fetch_all(executor)
    .await
    .map_err(DatabaseError::query("get messages"))?;

    rows.iter().map(message_from_row).collect()
}

/// Four-digit years keep the stored text parseable and lexically ordered
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

// ============================================================================
// Row Mapping
// ============================================================================

fn conversation_from_row(row: &SqliteRow) -> AppResult<Conversation> {
    Ok(Conversation {
        id: parse_uuid(row, "id")?,
        name: row
            .try_get("name")
            .map_err(DatabaseError::query("read conversation name"))?,
        created_at: parse_timestamp(row, "created_at")?,
        messages: Vec::new(),
    })
}

fn message_from_row(row: &SqliteRow) -> AppResult<Message> {
    let role: String = row
        .try_get("role")
        .map_err(DatabaseError::query("read message role"))?;

    Ok(Message {
        id: parse_uuid(row, "id")?,
        conversation_id: parse_uuid(row, "conversation_id")?,
        role: role.parse()?,
        content: row
            .try_get("content")
            .map_err(DatabaseError::query("read message content"))?,
        created_at: parse_timestamp(row, "created_at")?,
    })
}

fn parse_uuid(row: &SqliteRow, field: &'static str) -> AppResult<Uuid> {
    let raw: String = row
        .try_get(field)
        .map_err(DatabaseError::query("read identifier"))?;
    Uuid::parse_str(&raw).map_err(|e| {
        DatabaseError::InvalidData {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

fn parse_timestamp(row: &SqliteRow, field: &'static str) -> AppResult<DateTime<Utc>> {
    let raw: String = row
        .try_get(field)
        .map_err(DatabaseError::query("read timestamp"))?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            DatabaseError::InvalidData {
                field,
                reason: e.to_string(),
            }
            .into()
        })
}

/// Drop precision the text column does not keep, so returned values equal stored ones
fn normalize_timestamp(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}

/// Normalize a caller-supplied timestamp, rejecting years the text form cannot round-trip
fn storable_timestamp(ts: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    if !STORABLE_YEARS.contains(&ts.year()) {
        return Err(AppError::invalid_input(format!(
            "createdAt year {} is outside the supported range {}..={}",
            ts.year(),
            STORABLE_YEARS.start(),
            STORABLE_YEARS.end()
        )));
    }
    Ok(normalize_timestamp(ts))
}

/// Fixed-width UTC form; lexical order of stored values equals chronological order
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
