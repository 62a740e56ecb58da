// ABOUTME: HTTP client for the conversation API used by the command-line tool
// ABOUTME: Wraps reqwest calls and maps 404 responses onto Lookup::NotFound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AddMessageRequest, Conversation, CreateConversationRequest, Message, MessageRole,
    UpdateConversationRequest,
};
use crate::services::Lookup;

const SERVICE: &str = "Chatbot API";

/// Client for a running chatbot server
#[derive(Clone)]
pub struct ConversationClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ConversationClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8081`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Server this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every conversation, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn list_conversations(&self) -> AppResult<Vec<Conversation>> {
        let response = self.request(Method::GET, endpoints::CONVERSATIONS).send().await;
        Self::decode(Self::check(response)?).await
    }

    /// Fetch one conversation with its messages
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn get_conversation(&self, id: Uuid) -> AppResult<Lookup<Conversation>> {
        let response = self
            .request(Method::GET, &endpoints::conversation_location(&id))
            .send()
            .await;
        Self::decode_lookup(response).await
    }

    /// Create an empty conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn create_conversation(&self, name: &str) -> AppResult<Conversation> {
        let body = CreateConversationRequest {
            name: name.to_owned(),
        };
        let response = self
            .request(Method::POST, endpoints::CONVERSATIONS)
            .json(&body)
            .send()
            .await;
        Self::decode(Self::check(response)?).await
    }

    /// Append a message stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn add_message(
        &self,
        conversation_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> AppResult<Lookup<Message>> {
        let body = AddMessageRequest {
            role,
            content: content.to_owned(),
            created_at: Utc::now(),
        };
        self.send_json(
            Method::POST,
            &format!("{}/messages", endpoints::conversation_location(&conversation_id)),
            &body,
        )
        .await
    }

    /// Rename a conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn update_conversation(
        &self,
        id: Uuid,
        name: &str,
    ) -> AppResult<Lookup<Conversation>> {
        let body = UpdateConversationRequest {
            name: name.to_owned(),
        };
        self.send_json(Method::PUT, &endpoints::conversation_location(&id), &body)
            .await
    }

    /// Delete a conversation and its messages
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn delete_conversation(&self, id: Uuid) -> AppResult<Lookup<()>> {
        let response = self
            .request(Method::DELETE, &endpoints::conversation_location(&id))
            .send()
            .await;
        match response {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => Ok(Lookup::NotFound),
            other => Self::check(other).map(|_| Lookup::Found(())),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{path}", self.base_url))
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> AppResult<Lookup<T>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path).json(body).send().await;
        Self::decode_lookup(response).await
    }

    async fn decode_lookup<T: DeserializeOwned>(
        response: reqwest::Result<Response>,
    ) -> AppResult<Lookup<T>> {
        match response {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => Ok(Lookup::NotFound),
            other => Ok(Lookup::Found(Self::decode(Self::check(other)?).await?)),
        }
    }

    fn check(response: reqwest::Result<Response>) -> AppResult<Response> {
        let response =
            response.map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(AppError::external_service(
                SERVICE,
                format!("HTTP {}", response.status()),
            ))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        response.json().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("JSON parse error: {e}"))
        })
    }
}
