// ABOUTME: Core types and constants for the chatbot conversation API
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Chatbot Core
//!
//! Foundation crate providing shared types and constants for the chatbot
//! conversation API. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and database errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Conversation and message domain types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Conversation and message domain models
pub mod models;
