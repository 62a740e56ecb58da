// ABOUTME: Route module organization for the chatbot HTTP endpoints
// ABOUTME: Provides route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Conversation and message routes
pub mod conversations;
/// Health check and readiness routes
pub mod health;

/// Conversation route handlers
pub use conversations::ConversationRoutes;
/// Health route handlers
pub use health::HealthRoutes;
