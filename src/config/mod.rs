// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Groups server, database, CORS, and typing reveal configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Configuration is read from environment variables only; binaries may
//! override individual values from their command-line arguments.

/// Database URL parsing and connection settings
pub mod database;

/// Server configuration loaded from the environment
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, ServerConfig, TypingConfig};
