// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading-sequence phases.

use serde::{Deserialize, Serialize};

/// A stage of the loading sequence.
///
/// Declaration order is the only order phases may run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Hourglass or media intro
    Intro,
    /// Cross-fade into the logo box
    Fade,
    /// Typewriter over the logo text
    PrimaryTextReveal,
    /// Typewriter over the subtitle
    SecondaryTextReveal,
    /// Accent words fading in one after another
    AccentWordsReveal,
    /// Terminal
    Done,
}

impl Phase {
    /// Every non-terminal phase in canonical order
    pub fn all() -> &'static [Phase] {
        &[
            Phase::Intro,
            Phase::Fade,
            Phase::PrimaryTextReveal,
            Phase::SecondaryTextReveal,
            Phase::AccentWordsReveal,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Intro => "Intro",
            Phase::Fade => "Fade",
            Phase::PrimaryTextReveal => "Primary Text",
            Phase::SecondaryTextReveal => "Secondary Text",
            Phase::AccentWordsReveal => "Accent Words",
            Phase::Done => "Done",
        }
    }

    /// Whether this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        *self == Phase::Done
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
