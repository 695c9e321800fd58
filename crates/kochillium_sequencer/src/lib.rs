// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading-screen sequencer for the Ko-ChilLium site.
//!
//! This crate choreographs the first-visit loading animation:
//! - Intro (hourglass, or a media clip with a fallback timeout)
//! - Logo cross-fade
//! - Typewriter reveals of the logo and subtitle
//! - Accent words fading in one by one
//!
//! ## Architecture
//!
//! The sequencer is built on:
//! - A timer registry owning every pending delay, interval and frame callback
//! - Explicit state objects for the typewriter and opacity ramps
//! - A one-shot completion flag shared by every path that can end the sequence
//! - An injectable clock

pub mod clock;
pub mod completion;
pub mod config;
pub mod opacity;
pub mod phase;
pub mod sequencer;
pub mod timer;
pub mod typewriter;
pub mod ui;
pub mod words;

pub use clock::{Clock, ManualClock, SystemClock};
pub use completion::CompletionFlag;
pub use config::{
    ConfigError, FadeConfig, IntroConfig, IntroMode, SequenceConfig, TypewriterConfig, WordsConfig,
};
pub use opacity::{AnimatorStep, OpacityAnimator, FULL_OPACITY};
pub use phase::Phase;
pub use sequencer::{CompletionCallback, CompletionReason, PhaseSequencer, SequencerEvent};
pub use timer::{TimerHandle, TimerKind, TimerRegistry};
pub use typewriter::{Typewriter, TypewriterStatus, TypewriterStep};
pub use ui::{LoadingResponse, LoadingScreen, LoadingStyle};
pub use words::{WordChain, WordFade, WordStep};
