// ABOUTME: Main library entry point for the chatbot conversation API
// ABOUTME: Provides the REST backend, its SQLite store, and a typing reveal client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Chatbot API
//!
//! A small REST backend that stores conversations and their messages, plus the
//! client-side pieces used to display them.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers mapping HTTP verbs to service calls
//! - **Services**: log each request, run one store operation, return `Lookup`
//! - **Database**: `SQLite` through `sqlx`, one transaction per write
//! - **Typing**: character-by-character reveal of message text on a timer
//! - **Client**: `reqwest` wrapper used by the `chatbot-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chatbot_api::config::ServerConfig;
//! use chatbot_api::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Chatbot API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Used by the binaries in src/bin/ and by the integration tests.

/// `HTTP` client for a running server
pub mod client;

/// Configuration loaded from the environment
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` pool, schema, and conversation queries
pub mod database;

/// Unified error handling
pub mod errors;

/// Logging setup and the request logger
pub mod logging;

/// `HTTP` middleware layers
pub mod middleware;

/// Conversation and message models
pub mod models;

/// Shared state handed to route handlers
pub mod resources;

/// `HTTP` route definitions
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Conversation business logic
pub mod services;

/// Character-by-character text reveal
pub mod typing;
