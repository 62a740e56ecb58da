// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, and a recording request logger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `chatbot_api`

use anyhow::Result;
use async_trait::async_trait;
use chatbot_api::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging::{RequestLogger, TracingRequestLogger},
    resources::ServerResources,
    server::ChatbotServer,
};
use serde_json::Value;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default is quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::in_memory().await?)
}

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.database.url = DatabaseUrl::Memory;
    config
}

/// One call received by [`RecordingRequestLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedRequest {
    pub label: String,
    pub payload: Option<Value>,
}

/// Request logger that keeps every call for later assertions
#[derive(Default)]
pub struct RecordingRequestLogger {
    calls: Mutex<Vec<LoggedRequest>>,
}

impl RecordingRequestLogger {
    pub fn calls(&self) -> Vec<LoggedRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.label).collect()
    }
}

#[async_trait]
impl RequestLogger for RecordingRequestLogger {
    async fn log(&self, label: &str, payload: Option<&Value>) {
        self.calls.lock().unwrap().push(LoggedRequest {
            label: label.to_owned(),
            payload: payload.cloned(),
        });
    }
}

/// Server resources over a fresh in-memory database
pub async fn create_test_server_resources() -> Result<ServerResources> {
    let database = create_test_database().await?;
    Ok(ServerResources::new(
        database,
        Arc::new(TracingRequestLogger),
        Arc::new(test_config()),
    ))
}

/// Server resources whose request logger can be inspected
pub async fn create_recording_resources() -> Result<(ServerResources, Arc<RecordingRequestLogger>)>
{
    let database = create_test_database().await?;
    let logger = Arc::new(RecordingRequestLogger::default());
    let resources = ServerResources::new(
        database,
        Arc::clone(&logger) as Arc<dyn RequestLogger>,
        Arc::new(test_config()),
    );
    Ok((resources, logger))
}

/// Full router with middleware, as served in production
pub async fn create_test_router() -> Result<axum::Router> {
    let resources = create_test_server_resources().await?;
    Ok(ChatbotServer::new(resources).router())
}
