// ABOUTME: Conversation route handlers for chat conversation management
// ABOUTME: Maps REST verbs on /conversations onto the conversation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation routes
//!
//! Handlers are thin: parse the path, call the service, turn `Lookup::NotFound`
//! into a 404. Identifiers that are not UUIDs can never match a record and are
//! answered with 404 directly.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::constants::endpoints;
use crate::errors::AppError;
use crate::models::{AddMessageRequest, CreateConversationRequest, UpdateConversationRequest};
use crate::resources::ServerResources;

const CONVERSATION: &str = "Conversation";

/// Conversation routes handler
pub struct ConversationRoutes;

impl ConversationRoutes {
    /// Create all conversation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/conversations",
                get(Self::list_conversations).post(Self::create_conversation),
            )
            .route(
                "/conversations/:conversation_id",
                get(Self::get_conversation)
                    .put(Self::update_conversation)
                    .delete(Self::delete_conversation),
            )
            .route(
                "/conversations/:conversation_id/messages",
                get(Self::list_messages).post(Self::add_message),
            )
            .with_state(resources)
    }

    /// Parse a path identifier; anything that is not a UUID names no record
    fn parse_id(raw: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(raw)
            .map_err(|_| AppError::not_found(CONVERSATION).with_resource_id(raw))
    }

    // ========================================================================
    // Conversation Handlers
    // ========================================================================

    /// List all conversations with their messages
    async fn list_conversations(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let conversations = resources.conversations.list_conversations().await?;

        Ok((StatusCode::OK, Json(conversations)).into_response())
    }

    /// Get a specific conversation
    async fn get_conversation(
        State(resources): State<Arc<ServerResources>>,
        Path(conversation_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&conversation_id)?;

        let conversation = resources
            .conversations
            .get_conversation(id)
            .await?
            .found_or_not_found(CONVERSATION, id)?;

        Ok((StatusCode::OK, Json(conversation)).into_response())
    }

    /// Create a new conversation
    async fn create_conversation(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateConversationRequest>,
    ) -> Result<Response, AppError> {
        let conversation = resources
            .conversations
            .create_conversation(&request)
            .await?;

        let location = endpoints::conversation_location(&conversation.id);
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(conversation),
        )
            .into_response())
    }

    /// Rename a conversation
    async fn update_conversation(
        State(resources): State<Arc<ServerResources>>,
        Path(conversation_id): Path<String>,
        Json(request): Json<UpdateConversationRequest>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&conversation_id)?;

        let conversation = resources
            .conversations
            .update_conversation(id, &request)
            .await?
            .found_or_not_found(CONVERSATION, id)?;

        Ok((StatusCode::OK, Json(conversation)).into_response())
    }

    /// Delete a conversation
    async fn delete_conversation(
        State(resources): State<Arc<ServerResources>>,
        Path(conversation_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&conversation_id)?;

        resources
            .conversations
            .delete_conversation(id)
            .await?
            .found_or_not_found(CONVERSATION, id)?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }

    // ========================================================================
    // Message Handlers
    // ========================================================================

    /// Get messages for a conversation
    async fn list_messages(
        State(resources): State<Arc<ServerResources>>,
        Path(conversation_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&conversation_id)?;

        let messages = resources
            .conversations
            .list_messages(id)
            .await?
            .found_or_not_found(CONVERSATION, id)?;

        Ok((StatusCode::OK, Json(messages)).into_response())
    }

    /// Append a message to a conversation
    async fn add_message(
        State(resources): State<Arc<ServerResources>>,
        Path(conversation_id): Path<String>,
        Json(request): Json<AddMessageRequest>,
    ) -> Result<Response, AppError> {
        let id = Self::parse_id(&conversation_id)?;

        let message = resources
            .conversations
            .add_message(id, &request)
            .await?
            .found_or_not_found(CONVERSATION, id)?;

        Ok((StatusCode::OK, Json(message)).into_response())
    }
}
