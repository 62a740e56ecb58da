// ABOUTME: Application constants re-exported from chatbot-core
// ABOUTME: Service names, network defaults, endpoints, and typing timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use chatbot_core::constants::*;
