// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Layers applied around every route by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request ID propagation and HTTP spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::with_request_tracing;
