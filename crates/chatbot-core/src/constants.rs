// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Service names, network defaults, routes, and typing reveal timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const CHATBOT_SERVER: &str = "chatbot-server";
    /// Name of the command-line client
    pub const CHATBOT_CLI: &str = "chatbot-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default values used when the environment does not provide one
pub mod defaults {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/chatbot.db";
    /// Default CORS origin list (any origin)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// API endpoints
pub mod endpoints {
    /// Conversation collection
    pub const CONVERSATIONS: &str = "/conversations";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";

    /// Location of a single conversation resource
    #[must_use]
    pub fn conversation_location(id: &uuid::Uuid) -> String {
        format!("{CONVERSATIONS}/{id}")
    }
}

/// Typing reveal timing
pub mod typing {
    /// Delay between two revealed characters, in milliseconds
    pub const CHAR_DELAY_MS: u64 = 3;
}
