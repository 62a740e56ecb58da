// ABOUTME: Domain models for conversations and their messages
// ABOUTME: Defines the camelCase wire format shared by the server and the CLI client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Role of the message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to the stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(AppError::invalid_input(format!(
                "Unknown message role: {other}"
            ))),
        }
    }
}

/// A single role-tagged entry belonging to a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID
    pub id: Uuid,
    /// Owning conversation
    pub conversation_id: Uuid,
    /// Sender category
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// Creation time as supplied by the client
    pub created_at: DateTime<Utc>,
}

/// A named collection of messages ordered by creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// Messages, oldest first
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Request to create a new conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    /// Conversation name
    pub name: String,
}

/// Request to rename a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConversationRequest {
    /// New name
    pub name: String,
}

/// Request to append a message to a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageRequest {
    /// Sender category
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// Creation time chosen by the client
    pub created_at: DateTime<Utc>,
}
