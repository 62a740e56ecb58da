// ABOUTME: Integration tests for the conversation route handlers
// ABOUTME: Covers CRUD status codes, ordering, not-found handling, and request logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use chatbot_api::models::{Conversation, Message, MessageRole};
use chatbot_api::routes::ConversationRoutes;
use chrono::{Duration, TimeZone, Utc};
use common::{create_recording_resources, create_test_router, create_test_server_resources};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Test Helpers
// ============================================================================

async fn setup_router() -> axum::Router {
    let resources = create_test_server_resources().await.unwrap();
    ConversationRoutes::routes(Arc::new(resources))
}

async fn create(router: &axum::Router, name: &str) -> Conversation {
    AxumTestRequest::post("/conversations")
        .json(&json!({ "name": name }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json()
}

async fn say(
    router: &axum::Router,
    id: Uuid,
    role: &str,
    content: &str,
    created_at: chrono::DateTime<Utc>,
) -> Message {
    AxumTestRequest::post(&format!("/conversations/{id}/messages"))
        .json(&json!({ "role": role, "content": content, "createdAt": created_at }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

async fn fetch(router: &axum::Router, id: Uuid) -> Conversation {
    AxumTestRequest::get(&format!("/conversations/{id}"))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json()
}

// ============================================================================
// Conversation CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_conversation_returns_created_with_location() {
    let router = setup_router().await;

    let response = AxumTestRequest::post("/conversations")
        .json(&json!({ "name": "Trip planning" }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let location = response.header("location").unwrap();

    let conversation: Conversation = response.json();
    assert_eq!(conversation.name, "Trip planning");
    assert!(conversation.messages.is_empty());
    assert_eq!(location, format!("/conversations/{}", conversation.id));
}

#[tokio::test]
async fn test_created_conversation_uses_camel_case_fields() {
    let router = setup_router().await;

    let body: Value = AxumTestRequest::post("/conversations")
        .json(&json!({ "name": "A" }))
        .send(router)
        .await
        .json();

    assert!(body["createdAt"].is_string());
    assert!(body.get("created_at").is_none());
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn test_list_conversations_newest_first() {
    let router = setup_router().await;

    for name in ["A", "B", "C"] {
        create(&router, name).await;
    }

    let conversations: Vec<Conversation> = AxumTestRequest::get("/conversations")
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let names: Vec<&str> = conversations.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn test_list_conversations_empty() {
    let router = setup_router().await;

    let conversations: Vec<Conversation> = AxumTestRequest::get("/conversations")
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(conversations.is_empty());
}

#[tokio::test]
async fn test_get_conversation_includes_messages_in_ascending_order() {
    let router = setup_router().await;
    let conversation = create(&router, "Ordering").await;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    say(&router, conversation.id, "assistant", "third", base + Duration::seconds(2)).await;
    say(&router, conversation.id, "user", "first", base).await;
    say(&router, conversation.id, "user", "second", base + Duration::seconds(1)).await;

    let fetched = fetch(&router, conversation.id).await;
    let contents: Vec<&str> = fetched.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    assert!(fetched.messages.iter().all(|m| m.conversation_id == conversation.id));
}

#[tokio::test]
async fn test_update_conversation_keeps_identity_and_messages() {
    let router = setup_router().await;
    let conversation = create(&router, "Before").await;
    let message = say(&router, conversation.id, "user", "hello", Utc::now()).await;

    let updated: Conversation = AxumTestRequest::put(&format!("/conversations/{}", conversation.id))
        .json(&json!({ "name": "After" }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated.id, conversation.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.created_at, conversation.created_at);
    assert_eq!(updated.messages, vec![message]);

    let fetched = fetch(&router, conversation.id).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_conversation_removes_it_and_its_messages() {
    let router = setup_router().await;
    let conversation = create(&router, "Doomed").await;
    say(&router, conversation.id, "user", "bye", Utc::now()).await;

    let response = AxumTestRequest::delete(&format!("/conversations/{}", conversation.id))
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.is_empty());

    AxumTestRequest::get(&format!("/conversations/{}", conversation.id))
        .send(router.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    AxumTestRequest::delete(&format!("/conversations/{}", conversation.id))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_add_message_returns_stored_message() {
    let router = setup_router().await;
    let conversation = create(&router, "Chat").await;
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let message = say(&router, conversation.id, "assistant", "Hi there", created_at).await;

    assert_eq!(message.conversation_id, conversation.id);
    assert_eq!(message.role, MessageRole::Assistant);
    assert_eq!(message.content, "Hi there");
    assert_eq!(message.created_at, created_at);
}

#[tokio::test]
async fn test_list_messages_endpoint() {
    let router = setup_router().await;
    let conversation = create(&router, "Chat").await;
    let base = Utc::now();
    say(&router, conversation.id, "user", "ping", base).await;
    say(&router, conversation.id, "assistant", "pong", base + Duration::milliseconds(5)).await;

    let messages: Vec<Message> = AxumTestRequest::get(&format!("/conversations/{}/messages", conversation.id))
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["ping", "pong"]);
}

#[tokio::test]
async fn test_add_message_to_unknown_conversation_writes_nothing() {
    let resources = create_test_server_resources().await.unwrap();
    let database = resources.database.clone();
    let router = ConversationRoutes::routes(Arc::new(resources));
    let missing = Uuid::new_v4();

    let body: Value = AxumTestRequest::post(&format!("/conversations/{missing}/messages"))
        .json(&json!({ "role": "user", "content": "lost", "createdAt": Utc::now() }))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(database.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_add_message_rejects_unknown_role() {
    let router = setup_router().await;
    let conversation = create(&router, "Chat").await;

    let response = AxumTestRequest::post(&format!("/conversations/{}/messages", conversation.id))
        .json(&json!({ "role": "robot", "content": "beep", "createdAt": Utc::now() }))
        .send(router)
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_add_message_rejects_out_of_range_year_and_stays_readable() {
    let router = setup_router().await;
    let conversation = create(&router, "Far future").await;

    let body: Value = AxumTestRequest::post(&format!("/conversations/{}/messages", conversation.id))
        .json(&json!({ "role": "user", "content": "x", "createdAt": "+10000-01-01T00:00:00Z" }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let conversations: Vec<Conversation> = AxumTestRequest::get("/conversations")
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(conversations.len(), 1);
    assert!(conversations[0].messages.is_empty());

    let fetched = fetch(&router, conversation.id).await;
    assert!(fetched.messages.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let router = setup_router().await;

    let response = AxumTestRequest::post("/conversations")
        .raw_body("application/json", "{not json")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Not Found Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_id_is_not_found_for_every_verb() {
    let router = setup_router().await;
    let missing = Uuid::new_v4();
    let path = format!("/conversations/{missing}");

    AxumTestRequest::get(&path)
        .send(router.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    AxumTestRequest::put(&path)
        .json(&json!({ "name": "x" }))
        .send(router.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    AxumTestRequest::delete(&path)
        .send(router.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    AxumTestRequest::get(&format!("{path}/messages"))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_uuid_id_is_not_found() {
    let router = setup_router().await;

    let body: Value = AxumTestRequest::get("/conversations/not-a-uuid")
        .send(router.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["resource_id"], "not-a-uuid");

    AxumTestRequest::delete("/conversations/42")
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Request Logging Tests
// ============================================================================

#[tokio::test]
async fn test_each_request_is_logged_once_with_its_label() {
    let (resources, logger) = create_recording_resources().await.unwrap();
    let router = ConversationRoutes::routes(Arc::new(resources));

    let conversation = create(&router, "Logged").await;
    let id = conversation.id;
    say(&router, id, "user", "hi", Utc::now()).await;
    AxumTestRequest::put(&format!("/conversations/{id}"))
        .json(&json!({ "name": "Renamed" }))
        .send(router.clone())
        .await;
    AxumTestRequest::get("/conversations").send(router.clone()).await;
    AxumTestRequest::delete(&format!("/conversations/{id}"))
        .send(router)
        .await;

    assert_eq!(
        logger.labels(),
        vec![
            "POST /conversations".to_owned(),
            format!("POST /conversations/{id}/messages"),
            format!("PUT /conversations/{id}"),
            "GET /conversations".to_owned(),
            format!("DELETE /conversations/{id}"),
        ]
    );

    let calls = logger.calls();
    assert_eq!(calls[0].payload, Some(json!({ "name": "Logged" })));
    assert_eq!(calls[1].payload.as_ref().unwrap()["content"], "hi");
    assert_eq!(calls[3].payload, None);
}

#[tokio::test]
async fn test_not_found_requests_are_still_logged() {
    let (resources, logger) = create_recording_resources().await.unwrap();
    let router = ConversationRoutes::routes(Arc::new(resources));
    let missing = Uuid::new_v4();

    AxumTestRequest::get(&format!("/conversations/{missing}"))
        .send(router)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(logger.labels(), vec![format!("GET /conversations/{missing}")]);
}

// ============================================================================
// Server Router Tests
// ============================================================================

#[tokio::test]
async fn test_health_and_ready_endpoints() {
    let router = create_test_router().await.unwrap();

    let health: Value = AxumTestRequest::get("/health")
        .send(router.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");

    let ready: Value = AxumTestRequest::get("/ready")
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready["status"], "ready");
}

#[tokio::test]
async fn test_full_router_echoes_request_id() {
    let router = create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/conversations")
        .header("x-request-id", "req-123")
        .send(router.clone())
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("req-123"));

    let generated = AxumTestRequest::get("/health").send(router).await;
    assert!(generated.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_full_router_allows_cross_origin_requests() {
    let router = create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/conversations")
        .header("origin", "http://localhost:3000")
        .send(router)
        .await;

    assert_eq!(response.header("access-control-allow-origin").as_deref(), Some("*"));
}
