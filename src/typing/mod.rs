// ABOUTME: Character-by-character text reveal for chat message display
// ABOUTME: Pairs an explicit reveal state machine with a cancellable timer driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Typing reveal
//!
//! [`TypingReveal`] holds the text being revealed and how much of it is
//! visible. [`TypingRenderer`] owns one reveal and advances it with a tokio
//! timer task, one character per tick. Changing the content cancels the
//! running timer and restarts from an empty buffer.

mod renderer;
mod reveal;

pub use renderer::TypingRenderer;
pub use reveal::{RevealState, TypingReveal};
