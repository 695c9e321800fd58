// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page shell: loading screen first, then the site with a content fade-in.

use crate::page::Page;
use kochillium_sequencer::{
    AnimatorStep, Clock, ConfigError, OpacityAnimator, PhaseSequencer, SequenceConfig,
    SequencerEvent, SystemClock, TimerRegistry,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellTimer {
    ContentFrame,
}

/// Owns the loading sequencer until it completes, then the current page
pub struct PageShell<C: Clock + Clone = SystemClock> {
    clock: C,
    sequencer: Option<PhaseSequencer<C>>,
    loading_done: Arc<AtomicBool>,
    page: Page,
    timers: TimerRegistry<ShellTimer>,
    content_fade: OpacityAnimator,
    fade_started: bool,
}

impl PageShell<SystemClock> {
    /// Shell on wall-clock time
    pub fn new(
        config: SequenceConfig,
        show_loading: bool,
        content_fade: Duration,
    ) -> Result<Self, ConfigError> {
        Self::with_clock(config, show_loading, content_fade, SystemClock::new())
    }
}

impl<C: Clock + Clone> PageShell<C> {
    /// Shell on a custom clock. With `show_loading` off the content is shown at once.
    pub fn with_clock(
        config: SequenceConfig,
        show_loading: bool,
        content_fade: Duration,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let loading_done = Arc::new(AtomicBool::new(false));

        let sequencer = if show_loading {
            let flag = Arc::clone(&loading_done);
            let mut sequencer = PhaseSequencer::with_clock(config, clock.clone())?
                .on_complete(move || flag.store(true, Ordering::SeqCst));
            sequencer.start();
            Some(sequencer)
        } else {
            tracing::info!("Loading screen disabled");
            None
        };

        Ok(Self {
            timers: TimerRegistry::new(clock.now()),
            clock,
            sequencer,
            loading_done,
            page: Page::default(),
            content_fade: OpacityAnimator::new(content_fade),
            fade_started: false,
        })
    }

    /// Advance the loading sequence or the content fade
    pub fn update(&mut self) {
        if let Some(sequencer) = &mut self.sequencer {
            sequencer.update();
            for event in sequencer.take_events() {
                if let SequencerEvent::PhaseEntered(phase) = event {
                    tracing::trace!("Loading phase: {}", phase);
                }
            }
        }
        self.unmount_if_done();

        let now = self.clock.now();
        while self.timers.pop_due(now).is_some() {}

        self.timers.begin_frame(now);
        while let Some((_, timer)) = self.timers.pop_frame() {
            match timer {
                ShellTimer::ContentFrame => {
                    if self.content_fade.on_frame(&mut self.timers, timer) == AnimatorStep::Completed {
                        tracing::debug!("Content fully visible");
                    }
                }
            }
        }
    }

    fn unmount_if_done(&mut self) {
        if self.sequencer.is_none() || !self.loading_done.load(Ordering::SeqCst) {
            return;
        }

        self.sequencer = None;
        self.timers.advance_to(self.clock.now());
        self.content_fade.start(&mut self.timers, ShellTimer::ContentFrame);
        self.fade_started = true;
        tracing::info!("Loading finished, showing {}", self.page.title());
    }

    /// Skip the loading screen, if it is showing and skipping is allowed
    pub fn skip_loading(&mut self) {
        if let Some(sequencer) = &mut self.sequencer {
            if sequencer.skip() {
                tracing::info!("Loading screen skipped");
            }
        }
        self.unmount_if_done();
    }

    /// Whether the loading screen is mounted
    pub fn is_loading(&self) -> bool {
        self.sequencer.is_some()
    }

    /// Mounted loading sequencer
    pub fn sequencer(&self) -> Option<&PhaseSequencer<C>> {
        self.sequencer.as_ref()
    }

    /// Page currently shown
    pub fn current_page(&self) -> Page {
        self.page
    }

    /// Switch page
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!("Navigate {} -> {}", self.page.title(), page.title());
            self.page = page;
        }
    }

    /// Content opacity factor, 0..=1
    pub fn content_opacity(&self) -> f32 {
        if self.is_loading() {
            0.0
        } else if self.fade_started {
            self.content_fade.opacity()
        } else {
            1.0
        }
    }

    /// Whether frames are still changing on their own
    pub fn is_animating(&self) -> bool {
        self.is_loading() || self.content_fade.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kochillium_sequencer::{ManualClock, Phase};

    const FADE: Duration = Duration::from_millis(3000);

    fn run_until(shell: &mut PageShell<ManualClock>, clock: &ManualClock, until_ms: u64) {
        while clock.now() < Duration::from_millis(until_ms) {
            clock.advance_ms(10);
            shell.update();
        }
    }

    #[test]
    fn test_loading_then_fade() {
        let clock = ManualClock::new();
        let mut shell =
            PageShell::with_clock(SequenceConfig::default(), true, FADE, clock.clone()).unwrap();
        assert!(shell.is_loading());
        assert_eq!(shell.content_opacity(), 0.0);

        run_until(&mut shell, &clock, 7420);
        assert!(shell.is_loading());

        run_until(&mut shell, &clock, 7430);
        assert!(!shell.is_loading());
        assert!(shell.sequencer().is_none());
        assert_eq!(shell.content_opacity(), 0.0);
        assert!(shell.is_animating());

        clock.advance_ms(1500);
        shell.update();
        assert!((shell.content_opacity() - 0.5).abs() < 1e-4);

        clock.advance_ms(1500);
        shell.update();
        assert_eq!(shell.content_opacity(), 1.0);
        assert!(!shell.is_animating());
    }

    #[test]
    fn test_skip_unmounts_immediately() {
        let clock = ManualClock::new();
        let mut shell =
            PageShell::with_clock(SequenceConfig::default(), true, FADE, clock.clone()).unwrap();

        run_until(&mut shell, &clock, 500);
        shell.skip_loading();
        assert!(!shell.is_loading());

        shell.update();
        clock.advance(FADE);
        shell.update();
        assert_eq!(shell.content_opacity(), 1.0);
    }

    #[test]
    fn test_skip_disabled_keeps_loading() {
        let clock = ManualClock::new();
        let mut config = SequenceConfig::default();
        config.allow_skip = false;
        let mut shell = PageShell::with_clock(config, true, FADE, clock.clone()).unwrap();

        shell.skip_loading();
        assert!(shell.is_loading());
    }

    #[test]
    fn test_loading_disabled() {
        let clock = ManualClock::new();
        let mut shell =
            PageShell::with_clock(SequenceConfig::default(), false, FADE, clock.clone()).unwrap();
        assert!(!shell.is_loading());
        assert_eq!(shell.content_opacity(), 1.0);

        shell.update();
        assert_eq!(shell.content_opacity(), 1.0);
    }

    #[test]
    fn test_navigation() {
        let clock = ManualClock::new();
        let mut shell =
            PageShell::with_clock(SequenceConfig::default(), false, FADE, clock).unwrap();
        assert_eq!(shell.current_page(), Page::Home);

        shell.navigate(Page::Works);
        assert_eq!(shell.current_page(), Page::Works);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SequenceConfig::default().with_phases([Phase::Fade, Phase::Fade]);
        assert!(PageShell::with_clock(config, true, FADE, ManualClock::new()).is_err());
    }
}
