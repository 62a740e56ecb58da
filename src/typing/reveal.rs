// ABOUTME: Explicit state machine for revealing text one character at a time
// ABOUTME: Tracks the visible prefix, a byte cursor, and a generation counter for resets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Phase of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Not advancing; the buffer holds whatever was revealed so far
    Idle,
    /// Advancing; `cursor` is the byte offset of the next character
    Revealing {
        /// Byte offset into the text, always on a char boundary
        cursor: usize,
    },
    /// Every character is visible
    Done,
}

/// Text plus the prefix of it that is currently visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    text: String,
    displayed: String,
    state: RevealState,
    generation: u64,
}

impl TypingReveal {
    /// A reveal of `text` that has not started
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            displayed: String::new(),
            state: RevealState::Idle,
            generation: 0,
        }
    }

    /// Begin revealing from the current buffer
    ///
    /// Empty text is immediately `Done`. Has no effect unless `Idle`.
    pub fn start(&mut self) {
        if self.state != RevealState::Idle {
            return;
        }
        let cursor = self.displayed.len();
        self.state = if cursor >= self.text.len() {
            RevealState::Done
        } else {
            RevealState::Revealing { cursor }
        };
    }

    /// Reveal the next character
    ///
    /// Returns whether the visible text changed.
    pub fn advance(&mut self) -> bool {
        let RevealState::Revealing { cursor } = self.state else {
            return false;
        };

        let Some(next) = self.text.get(cursor..).and_then(|rest| rest.chars().next()) else {
            self.state = RevealState::Done;
            return false;
        };

        self.displayed.push(next);
        let cursor = cursor + next.len_utf8();
        self.state = if cursor >= self.text.len() {
            RevealState::Done
        } else {
            RevealState::Revealing { cursor }
        };
        true
    }

    /// Install new text with an empty buffer and invalidate any running timer
    pub fn reset(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.displayed.clear();
        self.state = RevealState::Idle;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Stop advancing, keeping what is already visible
    pub fn cancel(&mut self) {
        if matches!(self.state, RevealState::Revealing { .. }) {
            self.state = RevealState::Idle;
        }
    }

    /// Full text being revealed
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently visible prefix
    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Current phase
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Incremented on every reset
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether characters are still being revealed
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, RevealState::Revealing { .. })
    }

    /// Whether the whole text is visible
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, RevealState::Done)
    }
}

impl Default for TypingReveal {
    fn default() -> Self {
        Self::new(String::new())
    }
}
