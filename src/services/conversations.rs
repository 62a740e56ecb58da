// ABOUTME: Conversation business logic extracted from route handlers
// ABOUTME: Logs each request, performs one store operation, and returns Found or NotFound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::constants::endpoints;
use crate::database::{ConversationManager, Database};
use crate::errors::{AppError, AppResult};
use crate::logging::RequestLogger;
use crate::models::{
    AddMessageRequest, Conversation, CreateConversationRequest, Message,
    UpdateConversationRequest,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Outcome of an operation addressed at a specific identifier
///
/// `NotFound` is an expected result, not an error: callers must handle both arms.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The identifier resolved and the operation produced a value
    Found(T),
    /// The identifier has no backing record
    NotFound,
}

impl<T> Lookup<T> {
    /// Whether the identifier resolved
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the identifier had no backing record
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Transform the found value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Convert to an `Option`, discarding the distinction's name
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    /// Convert `NotFound` into an [`AppError`] naming the missing resource
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when the lookup missed
    pub fn found_or_not_found(self, resource: &str, id: Uuid) -> AppResult<T> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound => Err(AppError::not_found(resource).with_resource_id(id.to_string())),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Conversation operations over an explicitly injected store
#[derive(Clone)]
pub struct ConversationService {
    store: ConversationManager,
    logger: Arc<dyn RequestLogger>,
}

impl ConversationService {
    /// Create a service over `database`, reporting requests to `logger`
    #[must_use]
    pub fn new(database: &Database, logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            store: database.conversations(),
            logger,
        }
    }

    /// List every conversation, newest first, messages oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list_conversations(&self) -> AppResult<Vec<Conversation>> {
        self.record(&format!("GET {}", endpoints::CONVERSATIONS), None::<&()>)
            .await;

        self.store.list_conversations_with_messages().await
    }

    /// Get one conversation with its messages
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn get_conversation(&self, id: Uuid) -> AppResult<Lookup<Conversation>> {
        self.record(&format!("GET {}", endpoints::conversation_location(&id)), None::<&()>)
            .await;

        Ok(self.store.get_conversation_with_messages(id).await?.into())
    }

    /// Create an empty conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn create_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> AppResult<Conversation> {
        self.record(&format!("POST {}", endpoints::CONVERSATIONS), Some(request))
            .await;

        let conversation = self.store.create_conversation(&request.name).await?;
        debug!(conversation.id = %conversation.id, "Conversation created");
        Ok(conversation)
    }

    /// Append a message to a conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn add_message(
        &self,
        conversation_id: Uuid,
        request: &AddMessageRequest,
    ) -> AppResult<Lookup<Message>> {
        self.record(
            &format!(
                "POST {}/messages",
                endpoints::conversation_location(&conversation_id)
            ),
            Some(request),
        )
        .await;

        Ok(self
            .store
            .add_message(
                conversation_id,
                request.role,
                &request.content,
                request.created_at,
            )
            .await?
            .into())
    }

    /// List the messages of one conversation, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list_messages(&self, conversation_id: Uuid) -> AppResult<Lookup<Vec<Message>>> {
        self.record(
            &format!(
                "GET {}/messages",
                endpoints::conversation_location(&conversation_id)
            ),
            None::<&()>,
        )
        .await;

        Ok(self.store.get_messages(conversation_id).await?.into())
    }

    /// Rename a conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn update_conversation(
        &self,
        id: Uuid,
        request: &UpdateConversationRequest,
    ) -> AppResult<Lookup<Conversation>> {
        self.record(
            &format!("PUT {}", endpoints::conversation_location(&id)),
            Some(request),
        )
        .await;

        Ok(self.store.rename_conversation(id, &request.name).await?.into())
    }

    /// Delete a conversation and its messages
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn delete_conversation(&self, id: Uuid) -> AppResult<Lookup<()>> {
        self.record(
            &format!("DELETE {}", endpoints::conversation_location(&id)),
            None::<&()>,
        )
        .await;

        let deleted = self.store.delete_conversation(id).await?;
        Ok(if deleted {
            Lookup::Found(())
        } else {
            Lookup::NotFound
        })
    }

    /// Hand the request to the logger; a payload that fails to serialize is dropped
    async fn record<P: Serialize + ?Sized>(&self, label: &str, payload: Option<&P>) {
        let payload: Option<Value> = payload.and_then(|p| serde_json::to_value(p).ok());
        self.logger.log(label, payload.as_ref()).await;
    }
}
