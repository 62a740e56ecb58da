// ABOUTME: Unified error types re-exported from chatbot-core
// ABOUTME: Keeps `crate::errors` as the single import path inside the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use chatbot_core::errors::*;
