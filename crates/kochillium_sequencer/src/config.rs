// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading-sequence configuration.
//!
//! Phase list and timing constants, stored as RON. The defaults reproduce
//! the hourglass variant of the loading screen.

use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Phase list not in canonical order, or repeats a phase
    #[error("Phase {later} is listed after {earlier}; phases must be strictly increasing")]
    PhaseOrder {
        /// Phase listed first
        earlier: Phase,
        /// Phase listed second
        later: Phase,
    },

    /// `Done` is implicit and may not be listed
    #[error("The terminal phase cannot be listed explicitly")]
    TerminalPhaseListed,

    /// A typewriter with a zero per-character delay
    #[error("Typewriter delay for {0} must be greater than zero")]
    ZeroTypewriterDelay(Phase),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// RON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How the intro decides it is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntroMode {
    /// Fixed-length animation (the hourglass)
    Timed {
        /// Intro length
        duration_ms: u64,
    },
    /// Wait for the intro media to end or fail, bounded by a fallback
    Media {
        /// Upper bound on the wait
        fallback_timeout_ms: u64,
    },
}

/// Intro phase settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Completion rule
    pub mode: IntroMode,
    /// Caption shown under the hourglass
    pub caption: String,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            mode: IntroMode::Timed { duration_ms: 2000 },
            caption: "ととのう時間...".to_string(),
        }
    }
}

impl IntroConfig {
    /// Length of the wait before the intro is forced over
    pub fn limit(&self) -> Duration {
        match self.mode {
            IntroMode::Timed { duration_ms } => Duration::from_millis(duration_ms),
            IntroMode::Media { fallback_timeout_ms } => Duration::from_millis(fallback_timeout_ms),
        }
    }

    /// Whether media end/error events are awaited
    pub fn waits_for_media(&self) -> bool {
        matches!(self.mode, IntroMode::Media { .. })
    }
}

/// Cross-fade settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeConfig {
    /// Ramp length
    pub duration_ms: u64,
    /// Pause after the ramp completes
    pub pause_after_ms: u64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            pause_after_ms: 0,
        }
    }
}

/// Typewriter phase settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Text to reveal
    pub text: String,
    /// Delay per character
    pub per_char_ms: u64,
    /// Pause after the full text is shown
    pub pause_after_ms: u64,
}

impl TypewriterConfig {
    /// Convenience constructor
    pub fn new(text: impl Into<String>, per_char_ms: u64, pause_after_ms: u64) -> Self {
        Self {
            text: text.into(),
            per_char_ms,
            pause_after_ms,
        }
    }
}

/// Accent-word chain settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Words, in reveal order
    pub words: Vec<String>,
    /// Fade length per word
    pub per_word_ms: u64,
    /// Pause between one word completing and the next starting
    pub inter_word_pause_ms: u64,
    /// Hold after the last word before the phase is over
    pub final_hold_ms: u64,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            words: vec!["SAUNA LOVER".to_string(), "CONTENT CREATOR".to_string()],
            per_word_ms: 600,
            inter_word_pause_ms: 150,
            final_hold_ms: 500,
        }
    }
}

/// Complete loading-sequence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Phases to run, in order
    pub phases: Vec<Phase>,
    /// Intro settings
    pub intro: IntroConfig,
    /// Cross-fade settings
    pub fade: FadeConfig,
    /// Logo typewriter
    pub primary: TypewriterConfig,
    /// Subtitle typewriter
    pub secondary: TypewriterConfig,
    /// Accent words
    pub words: WordsConfig,
    /// Whether a click skips straight to the end
    pub allow_skip: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            phases: Phase::all().to_vec(),
            intro: IntroConfig::default(),
            fade: FadeConfig::default(),
            primary: TypewriterConfig::new("Ko-ChilLium", 100, 500),
            secondary: TypewriterConfig::new("Web Writer. Content Strategist.", 40, 300),
            words: WordsConfig::default(),
            allow_skip: true,
        }
    }
}

impl SequenceConfig {
    /// Variant that opens on a video and falls back after `fallback_timeout_ms`
    pub fn with_media_intro(mut self, fallback_timeout_ms: u64) -> Self {
        self.intro.mode = IntroMode::Media { fallback_timeout_ms };
        self
    }

    /// Replace the phase list
    pub fn with_phases(mut self, phases: impl Into<Vec<Phase>>) -> Self {
        self.phases = phases.into();
        self
    }

    /// Check the phase list and timings
    pub fn validate(&self) -> Result<()> {
        if self.phases.contains(&Phase::Done) {
            return Err(ConfigError::TerminalPhaseListed);
        }

        if let Some(pair) = self.phases.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::PhaseOrder {
                earlier: pair[0],
                later: pair[1],
            });
        }

        for (phase, typewriter) in [
            (Phase::PrimaryTextReveal, &self.primary),
            (Phase::SecondaryTextReveal, &self.secondary),
        ] {
            if self.phases.contains(&phase) && typewriter.per_char_ms == 0 {
                return Err(ConfigError::ZeroTypewriterDelay(phase));
            }
        }

        Ok(())
    }

    /// Total scheduled time of the listed phases, ignoring media that ends early.
    ///
    /// Typewriter phases take `(chars + 1) * per_char` because the final
    /// text is held for one interval before the phase completes. Saturates
    /// at `u64::MAX` milliseconds.
    pub fn nominal_duration(&self) -> Duration {
        let total_ms = self
            .phases
            .iter()
            .map(|phase| match phase {
                Phase::Intro => match self.intro.mode {
                    IntroMode::Timed { duration_ms } => duration_ms,
                    IntroMode::Media { fallback_timeout_ms } => fallback_timeout_ms,
                },
                Phase::Fade => self.fade.duration_ms.saturating_add(self.fade.pause_after_ms),
                Phase::PrimaryTextReveal => typewriter_ms(&self.primary),
                Phase::SecondaryTextReveal => typewriter_ms(&self.secondary),
                Phase::AccentWordsReveal => {
                    let count = self.words.words.len() as u64;
                    count
                        .saturating_mul(self.words.per_word_ms)
                        .saturating_add(
                            count.saturating_sub(1).saturating_mul(self.words.inter_word_pause_ms),
                        )
                        .saturating_add(self.words.final_hold_ms)
                }
                Phase::Done => 0,
            })
            .fold(0u64, u64::saturating_add);
        Duration::from_millis(total_ms)
    }

    /// Load from a RON file and validate
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SequenceConfig = ron::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty RON
    pub fn save(&self, path: &Path) -> Result<()> {
        let pretty = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        let content = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn typewriter_ms(config: &TypewriterConfig) -> u64 {
    let chars = config.text.chars().count() as u64;
    chars
        .saturating_add(1)
        .saturating_mul(config.per_char_ms)
        .saturating_add(config.pause_after_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SequenceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phases.first(), Some(&Phase::Intro));
        assert_eq!(config.primary.text, "Ko-ChilLium");
        assert!(config.allow_skip);
    }

    #[test]
    fn test_rejects_out_of_order_phases() {
        let config = SequenceConfig::default()
            .with_phases([Phase::Fade, Phase::Intro]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PhaseOrder { earlier: Phase::Fade, later: Phase::Intro })
        ));

        let config = SequenceConfig::default().with_phases([Phase::Fade, Phase::Fade]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_done_and_zero_delay() {
        let config = SequenceConfig::default().with_phases([Phase::Intro, Phase::Done]);
        assert!(matches!(config.validate(), Err(ConfigError::TerminalPhaseListed)));

        let mut config = SequenceConfig::default();
        config.secondary.per_char_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroTypewriterDelay(Phase::SecondaryTextReveal))
        ));

        // Unused typewriters are not checked
        config.phases.retain(|phase| *phase != Phase::SecondaryTextReveal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nominal_duration() {
        let mut config = SequenceConfig::default()
            .with_phases([Phase::Intro, Phase::PrimaryTextReveal])
            .with_media_intro(6000);
        config.primary = TypewriterConfig::new("abc", 100, 500);
        assert_eq!(config.nominal_duration(), Duration::from_millis(6000 + 400 + 500));
    }

    #[test]
    fn test_nominal_duration_saturates() {
        let mut config = SequenceConfig::default();
        config.words.per_word_ms = u64::MAX / 2;
        config.fade.pause_after_ms = u64::MAX;
        config.primary.per_char_ms = u64::MAX / 3;
        assert!(config.validate().is_ok());
        assert_eq!(config.nominal_duration(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_serialization() {
        let config = SequenceConfig::default().with_media_intro(6000);
        let ron_str = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: SequenceConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded, config);

        // Missing fields fall back to defaults
        let partial: SequenceConfig = ron::from_str("(allow_skip: false)").unwrap();
        assert!(!partial.allow_skip);
        assert_eq!(partial.phases, Phase::all().to_vec());
    }
}
