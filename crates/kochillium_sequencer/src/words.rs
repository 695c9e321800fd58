// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequential word fade-ins.
//!
//! One [`OpacityAnimator`] runs at a time. A word only starts once the
//! previous one is fully opaque; the pause between words is scheduled by
//! the owner.

use crate::opacity::{AnimatorStep, OpacityAnimator, FULL_OPACITY};
use crate::timer::TimerRegistry;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A word and its current opacity (0..=100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFade {
    /// The word
    pub word: String,
    /// Opacity, 0..=100
    pub opacity: f32,
}

/// Result of one frame of the chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordStep {
    /// The word at `index` is ramping
    Fading {
        /// Word index
        index: usize,
        /// Current opacity
        opacity: f32,
    },
    /// The word at `index` reached full opacity
    WordCompleted {
        /// Word index
        index: usize,
        /// Whether it was the final word
        last: bool,
    },
    /// Frame arrived while nothing was fading
    Ignored,
}

/// Ordered chain of word fades
#[derive(Debug, Clone)]
pub struct WordChain {
    words: Vec<WordFade>,
    current: Option<usize>,
    animator: OpacityAnimator,
}

impl WordChain {
    /// Create a chain where every word fades in over `per_word`
    pub fn new<I, S>(words: I, per_word: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| WordFade {
                    word: word.into(),
                    opacity: 0.0,
                })
                .collect(),
            current: None,
            animator: OpacityAnimator::new(per_word),
        }
    }

    /// Reset every word to transparent and start the first one.
    ///
    /// Returns false when there are no words.
    pub fn start<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, frame: E) -> bool {
        self.animator.cancel(timers);
        for word in &mut self.words {
            word.opacity = 0.0;
        }
        self.current = None;
        self.start_word(0, timers, frame)
    }

    /// Start the word after the one that just completed.
    ///
    /// Returns false when the chain is exhausted or a word is still fading.
    pub fn start_next<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, frame: E) -> bool {
        if self.animator.is_running() {
            return false;
        }
        let next = self.current.map_or(0, |index| index + 1);
        self.start_word(next, timers, frame)
    }

    fn start_word<E: Clone>(&mut self, index: usize, timers: &mut TimerRegistry<E>, frame: E) -> bool {
        if index >= self.words.len() {
            return false;
        }
        self.current = Some(index);
        self.animator.start(timers, frame);
        true
    }

    /// Advance the active word by one frame
    pub fn on_frame<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, frame: E) -> WordStep {
        let Some(index) = self.current else {
            return WordStep::Ignored;
        };

        match self.animator.on_frame(timers, frame) {
            AnimatorStep::Progress(opacity) => {
                self.words[index].opacity = opacity;
                WordStep::Fading { index, opacity }
            }
            AnimatorStep::Completed => {
                self.words[index].opacity = FULL_OPACITY;
                WordStep::WordCompleted {
                    index,
                    last: index + 1 == self.words.len(),
                }
            }
            AnimatorStep::Ignored => WordStep::Ignored,
        }
    }

    /// Stop the active animation
    pub fn cancel<E: Clone>(&mut self, timers: &mut TimerRegistry<E>) {
        self.animator.cancel(timers);
    }

    pub(crate) fn detach(&mut self) {
        self.animator.detach();
    }

    /// Time the active word reaches full opacity
    pub fn current_ends_at(&self) -> Option<Duration> {
        self.current.and(self.animator.ends_at())
    }

    /// Words with their current opacities
    pub fn words(&self) -> &[WordFade] {
        &self.words
    }

    /// Index of the word currently (or most recently) animating
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether the chain has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether every word is fully opaque
    pub fn is_finished(&self) -> bool {
        self.words.iter().all(|word| word.opacity >= FULL_OPACITY)
    }
}
