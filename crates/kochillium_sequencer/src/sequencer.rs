// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading-screen phase sequencer.
//!
//! Walks the configured phases strictly forward, running a typewriter,
//! an opacity ramp or a word chain in each, and fires the terminal
//! callback exactly once. Natural completion, the intro fallback, media
//! end/error and a user skip all funnel into the same
//! [`CompletionFlag`]; whichever claims it first wins.
//!
//! The host drives the sequencer by calling [`PhaseSequencer::update`] once
//! per displayed frame.

use crate::clock::{Clock, SystemClock};
use crate::completion::CompletionFlag;
use crate::config::{ConfigError, SequenceConfig};
use crate::opacity::{AnimatorStep, OpacityAnimator};
use crate::phase::Phase;
use crate::timer::{TimerHandle, TimerRegistry};
use crate::typewriter::{Typewriter, TypewriterStep};
use crate::words::{WordChain, WordFade, WordStep};
use std::time::Duration;

/// Terminal callback
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Why the sequence ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// Every phase ran to the end
    Finished,
    /// The user skipped
    Skipped,
}

/// Notification drained with [`PhaseSequencer::take_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A phase became active
    PhaseEntered(Phase),
    /// The terminal callback fired
    Completed {
        /// What ended the sequence
        reason: CompletionReason,
    },
}

/// Payloads scheduled on the sequencer's timer registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequencerTimer {
    IntroElapsed,
    FadeFrame,
    PrimaryTick,
    SecondaryTick,
    WordFrame,
    NextWord,
    PauseElapsed(Phase),
}

/// The loading-screen state machine
pub struct PhaseSequencer<C: Clock = SystemClock> {
    config: SequenceConfig,
    clock: C,
    timers: TimerRegistry<SequencerTimer>,
    phase: Phase,
    phase_index: Option<usize>,
    phase_started_at: Duration,
    intro_timer: Option<TimerHandle>,
    fade: OpacityAnimator,
    primary: Typewriter,
    secondary: Typewriter,
    words: WordChain,
    completion: CompletionFlag,
    completed_at: Option<Duration>,
    on_complete: Option<CompletionCallback>,
    started: bool,
    torn_down: bool,
    events: Vec<SequencerEvent>,
}

impl PhaseSequencer<SystemClock> {
    /// Create a sequencer on wall-clock time
    pub fn new(config: SequenceConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> PhaseSequencer<C> {
    /// Create a sequencer on the given clock
    pub fn with_clock(config: SequenceConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let ms = Duration::from_millis;
        let now = clock.now();
        Ok(Self {
            phase: config.phases.first().copied().unwrap_or(Phase::Done),
            phase_index: None,
            phase_started_at: now,
            timers: TimerRegistry::new(now),
            intro_timer: None,
            fade: OpacityAnimator::new(ms(config.fade.duration_ms)),
            primary: Typewriter::new(config.primary.text.clone(), ms(config.primary.per_char_ms)),
            secondary: Typewriter::new(
                config.secondary.text.clone(),
                ms(config.secondary.per_char_ms),
            ),
            words: WordChain::new(config.words.words.iter().cloned(), ms(config.words.per_word_ms)),
            completion: CompletionFlag::new(),
            completed_at: None,
            on_complete: None,
            started: false,
            torn_down: false,
            events: Vec::new(),
            config,
            clock,
        })
    }

    /// Set the callback fired once when the sequence finishes or is skipped
    pub fn set_on_complete<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    /// Builder form of [`set_on_complete`](Self::set_on_complete)
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.set_on_complete(callback);
        self
    }

    /// Enter the first phase. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.started || self.completion.is_set() {
            return;
        }
        self.started = true;
        self.timers.advance_to(self.clock.now());

        tracing::debug!(
            "Starting loading sequence: {} phase(s), nominal {:?}",
            self.config.phases.len(),
            self.config.nominal_duration()
        );
        self.enter(0);
    }

    /// Run everything due up to the clock's current time, then one frame
    pub fn update(&mut self) {
        if !self.started || self.completion.is_set() {
            return;
        }

        let now = self.clock.now();
        while let Some((_, timer)) = self.timers.pop_due(now) {
            self.dispatch(timer);
        }

        self.timers.begin_frame(now);
        while let Some((_, timer)) = self.timers.pop_frame() {
            self.dispatch(timer);
        }
    }

    /// The intro media played to the end
    pub fn media_ended(&mut self) {
        self.media_signal(false);
    }

    /// The intro media could not be loaded or played. Treated like an end.
    pub fn media_failed(&mut self) {
        self.media_signal(true);
    }

    fn media_signal(&mut self, failed: bool) {
        if !self.started || self.completion.is_set() || self.phase != Phase::Intro {
            return;
        }
        if !self.config.intro.waits_for_media() {
            tracing::debug!("Ignoring media signal for a timed intro");
            return;
        }

        if failed {
            tracing::warn!("Intro media failed, continuing without it");
        } else {
            tracing::debug!("Intro media ended");
        }

        if let Some(handle) = self.intro_timer.take() {
            self.timers.cancel(handle);
        }
        self.timers.advance_to(self.clock.now());
        self.advance();
    }

    /// User skip: jump straight to `Done`.
    ///
    /// Returns true if this call completed the sequence.
    pub fn skip(&mut self) -> bool {
        if !self.config.allow_skip {
            tracing::debug!("Skip requested but skipping is disabled");
            return false;
        }
        self.timers.advance_to(self.clock.now());
        self.finish(CompletionReason::Skipped)
    }

    /// Unmount: drop all pending work without firing the callback
    pub fn teardown(&mut self) {
        self.drain();
        if self.completion.try_set() {
            self.torn_down = true;
            self.on_complete = None;
            tracing::debug!("Loading sequence torn down in {}", self.phase);
        }
    }

    fn enter(&mut self, index: usize) {
        let Some(&phase) = self.config.phases.get(index) else {
            self.finish(CompletionReason::Finished);
            return;
        };

        self.phase = phase;
        self.phase_index = Some(index);
        self.phase_started_at = self.timers.now();
        self.events.push(SequencerEvent::PhaseEntered(phase));
        tracing::debug!("Entering phase {} at {:?}", phase, self.phase_started_at);

        match phase {
            Phase::Intro => {
                let limit = self.config.intro.limit();
                self.intro_timer = Some(self.timers.schedule_once(limit, SequencerTimer::IntroElapsed));
            }
            Phase::Fade => {
                self.fade.start(&mut self.timers, SequencerTimer::FadeFrame);
            }
            Phase::PrimaryTextReveal => {
                self.primary.start(&mut self.timers, SequencerTimer::PrimaryTick);
            }
            Phase::SecondaryTextReveal => {
                self.secondary.start(&mut self.timers, SequencerTimer::SecondaryTick);
            }
            Phase::AccentWordsReveal => {
                if !self.words.start(&mut self.timers, SequencerTimer::WordFrame) {
                    self.pause_then_advance(Phase::AccentWordsReveal, self.config.words.final_hold_ms);
                }
            }
            Phase::Done => {
                self.finish(CompletionReason::Finished);
            }
        }
    }

    fn advance(&mut self) {
        let next = self.phase_index.map_or(0, |index| index + 1);
        self.enter(next);
    }

    fn pause_then_advance(&mut self, phase: Phase, pause_ms: u64) {
        self.timers
            .schedule_once(Duration::from_millis(pause_ms), SequencerTimer::PauseElapsed(phase));
    }

    /// Schedule `timer` for `pause_ms` after an animation's nominal end.
    ///
    /// Completion is only seen on the first frame past the end, so the
    /// frame's overshoot is not carried into the rest of the sequence.
    fn schedule_after_animation(&mut self, ended_at: Option<Duration>, pause_ms: u64, timer: SequencerTimer) {
        let ended_at = ended_at.unwrap_or_else(|| self.timers.now());
        let deadline = ended_at.saturating_add(Duration::from_millis(pause_ms));
        self.timers.schedule_at(deadline, timer);
    }

    fn dispatch(&mut self, timer: SequencerTimer) {
        match timer {
            SequencerTimer::IntroElapsed => {
                if self.phase != Phase::Intro {
                    return;
                }
                self.intro_timer = None;
                if self.config.intro.waits_for_media() {
                    tracing::warn!("Intro media did not finish in time, using fallback");
                }
                self.advance();
            }
            SequencerTimer::FadeFrame => {
                if self.fade.on_frame(&mut self.timers, timer) == AnimatorStep::Completed {
                    self.schedule_after_animation(
                        self.fade.ends_at(),
                        self.config.fade.pause_after_ms,
                        SequencerTimer::PauseElapsed(Phase::Fade),
                    );
                }
            }
            SequencerTimer::PrimaryTick => {
                if self.primary.tick(&mut self.timers) == TypewriterStep::Completed {
                    self.pause_then_advance(
                        Phase::PrimaryTextReveal,
                        self.config.primary.pause_after_ms,
                    );
                }
            }
            SequencerTimer::SecondaryTick => {
                if self.secondary.tick(&mut self.timers) == TypewriterStep::Completed {
                    self.pause_then_advance(
                        Phase::SecondaryTextReveal,
                        self.config.secondary.pause_after_ms,
                    );
                }
            }
            SequencerTimer::WordFrame => {
                if let WordStep::WordCompleted { index, last } =
                    self.words.on_frame(&mut self.timers, timer)
                {
                    tracing::trace!("Accent word {} fully visible", index);
                    let ended_at = self.words.current_ends_at();
                    if last {
                        self.schedule_after_animation(
                            ended_at,
                            self.config.words.final_hold_ms,
                            SequencerTimer::PauseElapsed(Phase::AccentWordsReveal),
                        );
                    } else {
                        self.schedule_after_animation(
                            ended_at,
                            self.config.words.inter_word_pause_ms,
                            SequencerTimer::NextWord,
                        );
                    }
                }
            }
            SequencerTimer::NextWord => {
                self.words.start_next(&mut self.timers, SequencerTimer::WordFrame);
            }
            SequencerTimer::PauseElapsed(phase) => {
                if phase == self.phase {
                    self.advance();
                }
            }
        }
    }

    fn drain(&mut self) {
        self.timers.cancel_all();
        self.intro_timer = None;
        self.fade.detach();
        self.primary.detach();
        self.secondary.detach();
        self.words.detach();
    }

    fn finish(&mut self, reason: CompletionReason) -> bool {
        if !self.completion.try_set() {
            return false;
        }

        self.completed_at = Some(self.timers.now());

        // Nothing scheduled before this point may run after the callback
        self.drain();
        self.phase = Phase::Done;
        self.events.push(SequencerEvent::PhaseEntered(Phase::Done));
        self.events.push(SequencerEvent::Completed { reason });
        tracing::info!("Loading sequence complete ({:?})", reason);

        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        true
    }

    /// Drain notifications produced since the last call
    pub fn take_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Active phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether [`start`](Self::start) has run
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the sequence reached `Done` (naturally or by skip)
    pub fn is_complete(&self) -> bool {
        self.completion.is_set() && !self.torn_down
    }

    /// Sequence time at which `Done` was reached.
    ///
    /// The host observes it on the first update at or after this time.
    pub fn completed_at(&self) -> Option<Duration> {
        self.completed_at
    }

    /// Whether the sequence was unmounted before completing
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of live timers and frame callbacks
    pub fn pending_work(&self) -> usize {
        self.timers.live_count()
    }

    /// Time spent in the active phase
    pub fn phase_elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.phase_started_at)
    }

    /// Intro progress, 0..=1, by time against the intro limit
    pub fn intro_progress(&self) -> f32 {
        match self.phase {
            Phase::Intro if self.started => {
                let limit = self.config.intro.limit();
                if limit.is_zero() {
                    1.0
                } else {
                    (self.phase_elapsed().as_secs_f32() / limit.as_secs_f32()).min(1.0)
                }
            }
            Phase::Intro => 0.0,
            _ => 1.0,
        }
    }

    /// Cross-fade progress, 0..=100
    pub fn fade_progress(&self) -> f32 {
        self.fade.progress()
    }

    /// Opacity of the logo box, 0..=1
    pub fn logo_opacity(&self) -> f32 {
        match self.phase {
            Phase::Intro => 0.0,
            Phase::Fade => self.fade.opacity(),
            _ => 1.0,
        }
    }

    /// Visible part of the logo text
    pub fn primary_text(&self) -> &str {
        self.primary.revealed()
    }

    /// Full logo text
    pub fn primary_full_text(&self) -> &str {
        self.primary.full_text()
    }

    /// Visible part of the subtitle
    pub fn secondary_text(&self) -> &str {
        self.secondary.revealed()
    }

    /// Accent words and their opacities
    pub fn words(&self) -> &[WordFade] {
        self.words.words()
    }

    /// Configuration in use
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Clock in use
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Drop for PhaseSequencer<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::{IntroMode, TypewriterConfig};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const FRAME_MS: u64 = 10;

    fn counted(
        config: SequenceConfig,
    ) -> (PhaseSequencer<ManualClock>, ManualClock, Arc<AtomicUsize>) {
        let clock = ManualClock::new();
        let count = Arc::new(AtomicUsize::new(0));
        let fired = Arc::clone(&count);
        let sequencer = PhaseSequencer::with_clock(config, clock.clone())
            .unwrap()
            .on_complete(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        (sequencer, clock, count)
    }

    /// Step frames until complete or `limit` passes
    fn run_until_done(sequencer: &mut PhaseSequencer<ManualClock>, clock: &ManualClock, limit: Duration) {
        while !sequencer.is_complete() && clock.now() <= limit {
            sequencer.update();
            if sequencer.is_complete() {
                break;
            }
            clock.advance_ms(FRAME_MS);
        }
    }

    #[test]
    fn test_natural_completion_is_deterministic() {
        let config = SequenceConfig::default();
        let nominal = config.nominal_duration();
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        run_until_done(&mut sequencer, &clock, Duration::from_secs(30));

        assert!(sequencer.is_complete());
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(clock.now(), nominal);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sequencer.pending_work(), 0);
        assert_eq!(sequencer.primary_text(), "Ko-ChilLium");
        assert_eq!(sequencer.secondary_text(), "Web Writer. Content Strategist.");
        assert!(sequencer.words().iter().all(|word| word.opacity == 100.0));
    }

    #[test]
    fn test_phases_visited_in_order() {
        let config = SequenceConfig::default();
        let expected: Vec<_> = config
            .phases
            .iter()
            .copied()
            .chain(std::iter::once(Phase::Done))
            .map(SequencerEvent::PhaseEntered)
            .collect();
        let (mut sequencer, clock, _) = counted(config);

        sequencer.start();
        run_until_done(&mut sequencer, &clock, Duration::from_secs(30));

        let events = sequencer.take_events();
        let phases: Vec<_> = events
            .iter()
            .copied()
            .filter(|event| matches!(event, SequencerEvent::PhaseEntered(_)))
            .collect();
        assert_eq!(phases, expected);
        assert_eq!(
            events.last(),
            Some(&SequencerEvent::Completed { reason: CompletionReason::Finished })
        );
        assert!(sequencer.take_events().is_empty());
    }

    #[test]
    fn test_typewriter_phase_visible_through_sequencer() {
        let config = SequenceConfig::default()
            .with_phases([Phase::PrimaryTextReveal]);
        let (mut sequencer, clock, _) = counted(config);

        sequencer.start();
        assert_eq!(sequencer.primary_text(), "");
        clock.advance_ms(100);
        sequencer.update();
        assert_eq!(sequencer.primary_text(), "K");
        clock.advance_ms(250);
        sequencer.update();
        assert_eq!(sequencer.primary_text(), "Ko-");
        assert_eq!(sequencer.phase(), Phase::PrimaryTextReveal);
    }

    #[test]
    fn test_skip_during_intro() {
        let config = SequenceConfig::default().with_media_intro(6000);
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        clock.advance_ms(1200);
        sequencer.update();
        assert_eq!(sequencer.phase(), Phase::Intro);
        sequencer.take_events();

        assert!(sequencer.skip());
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(sequencer.pending_work(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Late intro signals and the old fallback window produce nothing
        sequencer.media_ended();
        sequencer.media_failed();
        clock.advance_ms(10_000);
        sequencer.update();
        assert!(!sequencer.skip());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            sequencer.take_events(),
            vec![
                SequencerEvent::PhaseEntered(Phase::Done),
                SequencerEvent::Completed { reason: CompletionReason::Skipped },
            ]
        );
        assert_eq!(sequencer.pending_work(), 0);
    }

    #[test]
    fn test_skip_racing_natural_completion() {
        let mut config = SequenceConfig::default().with_phases([Phase::AccentWordsReveal]);
        config.words.words = vec!["ONE".into()];
        config.words.per_word_ms = 100;
        config.words.final_hold_ms = 200;
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        sequencer.update();
        clock.advance_ms(100);
        sequencer.update();
        // Word is opaque, only the final hold remains
        assert_eq!(sequencer.pending_work(), 1);

        clock.advance_ms(200);
        // Both paths fire on the same frame
        assert!(sequencer.skip());
        sequencer.update();
        assert!(!sequencer.skip());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sequencer.pending_work(), 0);
    }

    #[test]
    fn test_natural_completion_beats_late_skip() {
        let config = SequenceConfig::default().with_phases(Vec::new());
        let (mut sequencer, _clock, count) = counted(config);

        // Empty phase list completes on start
        sequencer.start();
        assert!(sequencer.is_complete());
        assert!(!sequencer.skip());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            sequencer.take_events().last(),
            Some(&SequencerEvent::Completed { reason: CompletionReason::Finished })
        );
    }

    #[test]
    fn test_fallback_timeout_bounds_completion() {
        let config = SequenceConfig::default().with_media_intro(6000);
        let bound = config.nominal_duration();
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        run_until_done(&mut sequencer, &clock, bound + Duration::from_secs(5));

        assert!(sequencer.is_complete());
        assert!(clock.now() <= bound);
        assert_eq!(clock.now(), bound);
        assert_eq!(sequencer.completed_at(), Some(bound));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_extreme_timings_start_and_skip() {
        let mut config = SequenceConfig::default();
        config.intro.mode = IntroMode::Timed { duration_ms: u64::MAX };
        config.words.per_word_ms = u64::MAX / 2;
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        clock.advance_ms(100);
        sequencer.update();
        assert_eq!(sequencer.phase(), Phase::Intro);

        assert!(sequencer.skip());
        assert_eq!(sequencer.completed_at(), Some(Duration::from_millis(100)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_uneven_frames_do_not_drift() {
        const DISPLAY_FRAME_MS: u64 = 16;

        let config = SequenceConfig::default().with_media_intro(6000);
        let bound = config.nominal_duration();
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        while !sequencer.is_complete() && clock.now() <= bound + Duration::from_secs(5) {
            clock.advance_ms(DISPLAY_FRAME_MS);
            sequencer.update();
        }

        assert!(sequencer.is_complete());
        assert_eq!(sequencer.completed_at(), Some(bound));
        // Seen on the first frame at or after the nominal end
        assert!(clock.now() >= bound);
        assert!(clock.now() < bound + Duration::from_millis(DISPLAY_FRAME_MS));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sequencer.pending_work(), 0);
    }

    #[test]
    fn test_word_pauses_measured_from_nominal_end() {
        let mut config = SequenceConfig::default().with_phases([Phase::AccentWordsReveal]);
        config.words.per_word_ms = 100;
        config.words.inter_word_pause_ms = 50;
        config.words.final_hold_ms = 0;
        let bound = config.nominal_duration();
        let (mut sequencer, clock, _) = counted(config);

        sequencer.start();
        while !sequencer.is_complete() && clock.now() <= Duration::from_secs(5) {
            clock.advance_ms(33);
            sequencer.update();
        }

        assert_eq!(bound, Duration::from_millis(250));
        assert_eq!(sequencer.completed_at(), Some(bound));
    }

    #[test]
    fn test_media_error_treated_as_end() {
        let config = SequenceConfig::default().with_media_intro(6000);
        let remaining = config.nominal_duration() - Duration::from_millis(6000);
        let (mut sequencer, clock, count) = counted(config);

        sequencer.start();
        clock.advance_ms(500);
        sequencer.update();
        sequencer.media_failed();
        assert_eq!(sequencer.phase(), Phase::Fade);

        // Second signal is stale
        sequencer.media_ended();
        assert_eq!(sequencer.phase(), Phase::Fade);

        run_until_done(&mut sequencer, &clock, Duration::from_secs(30));
        assert_eq!(clock.now(), Duration::from_millis(500) + remaining);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_media_signal_ignored_for_timed_intro() {
        let (mut sequencer, clock, _) = counted(SequenceConfig::default());
        sequencer.start();
        clock.advance_ms(100);
        sequencer.update();
        sequencer.media_ended();
        assert_eq!(sequencer.phase(), Phase::Intro);
        assert!(sequencer.intro_progress() > 0.0);
    }

    #[test]
    fn test_teardown_drains_without_callback() {
        let (mut sequencer, clock, count) = counted(SequenceConfig::default());
        sequencer.start();
        clock.advance_ms(2100);
        sequencer.update();
        assert_eq!(sequencer.phase(), Phase::Fade);
        assert!(sequencer.pending_work() > 0);

        sequencer.teardown();
        assert_eq!(sequencer.pending_work(), 0);
        assert!(sequencer.is_torn_down());
        assert!(!sequencer.is_complete());

        clock.advance_ms(20_000);
        sequencer.update();
        assert!(!sequencer.skip());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_does_not_fire_callback() {
        let (mut sequencer, clock, count) = counted(SequenceConfig::default());
        sequencer.start();
        clock.advance_ms(50);
        sequencer.update();
        drop(sequencer);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_skip_disabled() {
        let mut config = SequenceConfig::default();
        config.allow_skip = false;
        let (mut sequencer, _clock, count) = counted(config);
        sequencer.start();
        assert!(!sequencer.skip());
        assert_eq!(sequencer.phase(), Phase::Intro);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_typewriter_text_advances() {
        let mut config = SequenceConfig::default()
            .with_phases([Phase::PrimaryTextReveal, Phase::SecondaryTextReveal]);
        config.primary = TypewriterConfig::new("", 100, 0);
        config.secondary = TypewriterConfig::new("ok", 100, 0);
        let (mut sequencer, clock, _) = counted(config);

        sequencer.start();
        clock.advance_ms(100);
        sequencer.update();
        assert_eq!(sequencer.phase(), Phase::SecondaryTextReveal);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SequenceConfig::default().with_phases([Phase::Fade, Phase::Intro]);
        assert!(PhaseSequencer::with_clock(config, ManualClock::new()).is_err());
    }
}
