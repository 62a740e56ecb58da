// ABOUTME: Shared server resources handed to route handlers as axum state
// ABOUTME: Bundles the database handle, conversation service, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::logging::RequestLogger;
use crate::services::ConversationService;

/// Everything a request handler may need, created once at startup
#[derive(Clone)]
pub struct ServerResources {
    /// Store handle
    pub database: Database,
    /// Conversation operations
    pub conversations: ConversationService,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the service layer over `database`
    #[must_use]
    pub fn new(
        database: Database,
        request_logger: Arc<dyn RequestLogger>,
        config: Arc<ServerConfig>,
    ) -> Self {
        let conversations = ConversationService::new(&database, request_logger);
        Self {
            database,
            conversations,
            config,
        }
    }
}
