// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides transport-agnostic conversation operations with tagged lookup results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! This module contains transport-agnostic business logic. Route handlers stay
//! thin and delegate here, so the same rules apply whichever entry point is used.

/// Conversation lifecycle operations: list, get, create, rename, delete, append
pub mod conversations;

pub use conversations::{ConversationService, Lookup};
