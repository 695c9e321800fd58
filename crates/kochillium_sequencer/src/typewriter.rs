// SPDX-License-Identifier: MIT OR Apache-2.0
//! Character-by-character text reveal.

use crate::timer::{TimerHandle, TimerRegistry};
use std::time::Duration;

/// Lifecycle of a [`Typewriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterStatus {
    /// Not started
    #[default]
    Idle,
    /// Revealing characters
    Running,
    /// Full text revealed and completion reported
    Completed,
    /// Aborted before completion
    Cancelled,
}

/// Result of one typewriter tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    /// One more character is visible; holds the revealed character count
    Revealed(usize),
    /// The full text was already visible; the repeating timer is gone
    Completed,
    /// Tick arrived while not running
    Ignored,
}

/// Reveals a fixed string one character per interval
#[derive(Debug, Clone)]
pub struct Typewriter {
    full_text: String,
    char_count: usize,
    revealed: usize,
    per_char_delay: Duration,
    timer: Option<TimerHandle>,
    status: TypewriterStatus,
}

impl Typewriter {
    /// Create a typewriter for `full_text`
    pub fn new(full_text: impl Into<String>, per_char_delay: Duration) -> Self {
        let full_text = full_text.into();
        Self {
            char_count: full_text.chars().count(),
            full_text,
            revealed: 0,
            per_char_delay,
            timer: None,
            status: TypewriterStatus::Idle,
        }
    }

    /// Start (or restart) revealing from the empty prefix
    pub fn start<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, tick: E) {
        self.cancel(timers);
        self.revealed = 0;
        self.status = TypewriterStatus::Running;
        self.timer = Some(timers.schedule_repeating(self.per_char_delay, tick));
    }

    /// Advance by one tick of the repeating timer
    pub fn tick<E: Clone>(&mut self, timers: &mut TimerRegistry<E>) -> TypewriterStep {
        if self.status != TypewriterStatus::Running {
            return TypewriterStep::Ignored;
        }

        if self.revealed < self.char_count {
            self.revealed += 1;
            return TypewriterStep::Revealed(self.revealed);
        }

        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
        self.status = TypewriterStatus::Completed;
        TypewriterStep::Completed
    }

    /// Abort mid-reveal. No completion will be reported.
    pub fn cancel<E: Clone>(&mut self, timers: &mut TimerRegistry<E>) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
        if self.status == TypewriterStatus::Running {
            self.status = TypewriterStatus::Cancelled;
        }
    }

    /// Forget the timer handle after the registry was cleared wholesale
    pub(crate) fn detach(&mut self) {
        self.timer = None;
        if self.status == TypewriterStatus::Running {
            self.status = TypewriterStatus::Cancelled;
        }
    }

    /// The currently visible prefix
    pub fn revealed(&self) -> &str {
        match self.full_text.char_indices().nth(self.revealed) {
            Some((byte_index, _)) => &self.full_text[..byte_index],
            None => &self.full_text,
        }
    }

    /// Number of visible characters
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// The complete text
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Length of the complete text in characters
    pub fn len(&self) -> usize {
        self.char_count
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    /// Whether every character is visible
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.char_count
    }

    /// Current lifecycle state
    pub fn status(&self) -> TypewriterStatus {
        self.status
    }

    /// Delay between characters
    pub fn per_char_delay(&self) -> Duration {
        self.per_char_delay
    }
}
