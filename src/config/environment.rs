// ABOUTME: Environment-based server configuration
// ABOUTME: Loads port, host, database, CORS, and typing settings with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::database::DatabaseConfig;
use crate::constants::{defaults, ports, typing};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Typing reveal settings handed to clients
    pub typing: TypingConfig,
}

/// Cross-origin resource sharing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of origins, or `*`
    pub allowed_origins: String,
}

/// Typing reveal settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypingConfig {
    /// Delay between revealed characters in milliseconds
    pub char_delay_ms: u64,
}

impl TypingConfig {
    /// Load typing settings from `TYPING_CHAR_DELAY_MS`
    ///
    /// # Errors
    ///
    /// Returns a config error if the variable is set but not a number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            char_delay_ms: parse_env("TYPING_CHAR_DELAY_MS", typing::CHAR_DELAY_MS)?,
        })
    }

    /// Delay between revealed characters
    #[must_use]
    pub const fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: typing::CHAR_DELAY_MS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            database: DatabaseConfig::default(),
            cors: CorsConfig {
                allowed_origins: defaults::DEFAULT_CORS_ORIGINS.to_owned(),
            },
            typing: TypingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", defaults::DEFAULT_HOST),
            http_port: parse_env("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", defaults::DEFAULT_CORS_ORIGINS),
            },
            typing: TypingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Chatbot API Configuration:\n\
             - Host: {}\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Typing Delay: {}ms",
            self.host,
            self.http_port,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.cors.allowed_origins,
            self.typing.char_delay_ms,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value: {e}")))
    })
}
