// ABOUTME: Timer-driven typing renderer that reveals message text over time
// ABOUTME: Owns one reveal, one cancellable tokio task, and a watch channel for observers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;

use super::reveal::{RevealState, TypingReveal};
use crate::constants::typing;

/// Reveals text one character per tick
///
/// At most one timer task is alive per renderer. Replacing the content aborts
/// it and starts a new one; a task that outlives its reveal sees a newer
/// generation and stops without writing.
pub struct TypingRenderer {
    tick: Duration,
    state: Arc<watch::Sender<TypingReveal>>,
    timer: Option<JoinHandle<()>>,
}

impl TypingRenderer {
    /// Renderer advancing once every `tick`
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        let (state, _) = watch::channel(TypingReveal::default());
        Self {
            tick,
            state: Arc::new(state),
            timer: None,
        }
    }

    /// Delay between two revealed characters
    #[must_use]
    pub const fn tick(&self) -> Duration {
        self.tick
    }

    /// Show `text`, restarting the reveal from an empty buffer
    ///
    /// Passing the text already being revealed or fully shown does nothing;
    /// after `unmount` the same text starts over. Must be called from within a
    /// tokio runtime.
    pub fn set_content(&mut self, text: &str) {
        {
            let reveal = self.state.borrow();
            if reveal.text() == text && reveal.state() != RevealState::Idle {
                return;
            }
        }

        self.abort_timer();
        self.state.send_modify(|reveal| {
            reveal.reset(text);
            reveal.start();
        });

        let (generation, active) = {
            let reveal = self.state.borrow();
            (reveal.generation(), reveal.is_active())
        };
        if !active {
            return;
        }

        trace!(generation, chars = text.chars().count(), "Starting typing reveal");
        self.timer = Some(tokio::spawn(run_timer(
            Arc::clone(&self.state),
            self.tick,
            generation,
        )));
    }

    /// Stop the timer, keeping the visible prefix
    pub fn unmount(&mut self) {
        self.abort_timer();
        self.state.send_if_modified(|reveal| {
            let was_active = reveal.is_active();
            reveal.cancel();
            was_active
        });
    }

    /// Observe every change to the reveal
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TypingReveal> {
        self.state.subscribe()
    }

    /// Currently visible text
    #[must_use]
    pub fn displayed(&self) -> String {
        self.state.borrow().displayed().to_owned()
    }

    /// Current phase of the reveal
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state.borrow().state()
    }

    /// Whether characters are still being revealed
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }

    /// Wait until the reveal stops advancing and return what is visible
    pub async fn finished(&self) -> String {
        let mut receiver = self.state.subscribe();
        let shown = match receiver.wait_for(|reveal| !reveal.is_active()).await {
            Ok(reveal) => reveal.displayed().to_owned(),
            Err(_) => self.displayed(),
        };
        shown
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for TypingRenderer {
    fn default() -> Self {
        Self::new(Duration::from_millis(typing::CHAR_DELAY_MS))
    }
}

impl Drop for TypingRenderer {
    fn drop(&mut self) {
        self.abort_timer();
    }
}

async fn run_timer(state: Arc<watch::Sender<TypingReveal>>, tick: Duration, generation: u64) {
    loop {
        tokio::time::sleep(tick).await;

        let mut keep_going = false;
        state.send_if_modified(|reveal| {
            if reveal.generation() != generation {
                return false;
            }
            let changed = reveal.advance();
            keep_going = reveal.is_active();
            changed
        });

        if !keep_going {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(3);

    #[tokio::test(start_paused = true)]
    async fn test_reveals_full_text_then_stops() {
        let mut renderer = TypingRenderer::new(TICK);
        renderer.set_content("Hi!");

        assert!(renderer.is_active());
        assert_eq!(renderer.finished().await, "Hi!");
        assert_eq!(renderer.state(), RevealState::Done);

        tokio::time::sleep(TICK).await;
        assert!(renderer.timer.as_ref().is_some_and(JoinHandle::is_finished));
        assert_eq!(renderer.displayed(), "Hi!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_content_is_a_no_op() {
        let mut renderer = TypingRenderer::new(TICK);
        renderer.set_content("abc");
        tokio::time::sleep(TICK * 2 + Duration::from_millis(1)).await;
        assert_eq!(renderer.displayed(), "ab");

        renderer.set_content("abc");
        assert_eq!(renderer.displayed(), "ab");
        assert_eq!(renderer.finished().await, "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_advancing() {
        let mut renderer = TypingRenderer::new(TICK);
        renderer.set_content("Hello");
        tokio::time::sleep(TICK + Duration::from_millis(1)).await;

        renderer.unmount();
        assert_eq!(renderer.state(), RevealState::Idle);

        tokio::time::sleep(TICK * 10).await;
        assert_eq!(renderer.displayed(), "H");
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_content_after_unmount_starts_over() {
        let mut renderer = TypingRenderer::new(TICK);
        renderer.set_content("Hello");
        tokio::time::sleep(TICK + Duration::from_millis(1)).await;
        renderer.unmount();
        assert_eq!(renderer.displayed(), "H");

        renderer.set_content("Hello");
        assert_eq!(renderer.displayed(), "");
        assert!(renderer.is_active());
        assert_eq!(renderer.finished().await, "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_content_finishes_immediately() {
        let mut renderer = TypingRenderer::new(TICK);
        renderer.set_content("x");
        renderer.set_content("");

        assert_eq!(renderer.state(), RevealState::Done);
        assert!(renderer.timer.is_none());
        assert_eq!(renderer.finished().await, "");
    }
}
