// ABOUTME: Conversation and message models re-exported from chatbot-core
// ABOUTME: Shared by the store, the HTTP routes, and the CLI client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use chatbot_core::models::*;
