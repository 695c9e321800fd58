// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-based 0..=100 opacity ramp sampled once per frame.

use crate::timer::{TimerHandle, TimerRegistry};
use std::time::Duration;

/// Fully opaque
pub const FULL_OPACITY: f32 = 100.0;

/// Ramp value after `elapsed` of a `duration` long animation.
///
/// Depends on wall time only, never on how many frames were drawn.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return FULL_OPACITY;
    }
    let t = (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0);
    (t * f64::from(FULL_OPACITY)) as f32
}

/// Result of one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorStep {
    /// Still ramping; holds the published progress
    Progress(f32),
    /// Reached full opacity on this frame
    Completed,
    /// Frame arrived while not running
    Ignored,
}

/// Drives one opacity ramp from a start time over a fixed duration
#[derive(Debug, Clone)]
pub struct OpacityAnimator {
    duration: Duration,
    started_at: Option<Duration>,
    progress: f32,
    frame: Option<TimerHandle>,
    completed: bool,
}

impl OpacityAnimator {
    /// Create an idle animator
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            progress: 0.0,
            frame: None,
            completed: false,
        }
    }

    /// Start ramping from zero at the registry's current time
    pub fn start<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, frame: E) {
        self.cancel(timers);
        self.started_at = Some(timers.now());
        self.progress = 0.0;
        self.completed = false;
        self.frame = Some(timers.schedule_frame(frame));
    }

    /// Sample the ramp for the current frame and chain the next frame if needed
    pub fn on_frame<E: Clone>(&mut self, timers: &mut TimerRegistry<E>, frame: E) -> AnimatorStep {
        let Some(started_at) = self.started_at else {
            return AnimatorStep::Ignored;
        };
        if self.completed || self.frame.is_none() {
            return AnimatorStep::Ignored;
        }

        let elapsed = timers.now().saturating_sub(started_at);
        // Never step backwards
        self.progress = self.progress.max(progress(elapsed, self.duration));

        if self.progress >= FULL_OPACITY {
            self.progress = FULL_OPACITY;
            self.frame = None;
            self.completed = true;
            return AnimatorStep::Completed;
        }

        self.frame = Some(timers.schedule_frame(frame));
        AnimatorStep::Progress(self.progress)
    }

    /// Stop without completing
    pub fn cancel<E: Clone>(&mut self, timers: &mut TimerRegistry<E>) {
        if let Some(handle) = self.frame.take() {
            timers.cancel(handle);
        }
    }

    pub(crate) fn detach(&mut self) {
        self.frame = None;
    }

    /// Last published progress, 0..=100
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress as a 0..=1 factor
    pub fn opacity(&self) -> f32 {
        self.progress / FULL_OPACITY
    }

    /// Time the ramp reaches full opacity, independent of frame timing
    pub fn ends_at(&self) -> Option<Duration> {
        self.started_at
            .map(|started_at| started_at.saturating_add(self.duration))
    }

    /// Whether a frame callback is outstanding
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Whether the ramp reached 100
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Ramp duration
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_progress_curve() {
        let duration = ms(1000);
        assert_eq!(progress(ms(0), duration), 0.0);
        assert!((progress(ms(500), duration) - 50.0).abs() < 0.01);
        assert_eq!(progress(ms(1000), duration), 100.0);
        assert_eq!(progress(ms(5000), duration), 100.0);
        assert_eq!(progress(ms(10), Duration::ZERO), 100.0);
    }

    #[test]
    fn test_animator_samples_wall_time() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let mut animator = OpacityAnimator::new(ms(1000));
        animator.start(&mut timers, ());

        let mut samples = Vec::new();
        let mut completed = 0;
        for now in [0, 500, 1000, 1200] {
            timers.begin_frame(ms(now));
            while timers.pop_frame().is_some() {
                match animator.on_frame(&mut timers, ()) {
                    AnimatorStep::Progress(value) => samples.push(value),
                    AnimatorStep::Completed => {
                        completed += 1;
                        samples.push(animator.progress());
                    }
                    AnimatorStep::Ignored => {}
                }
            }
        }

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 50.0).abs() < 0.01);
        assert_eq!(samples[2], 100.0);
        assert_eq!(completed, 1);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_uneven_frames_stay_monotonic() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let mut animator = OpacityAnimator::new(ms(300));
        animator.start(&mut timers, ());

        let mut last = 0.0;
        for now in [7, 40, 41, 180, 181, 299, 450] {
            timers.begin_frame(ms(now));
            if timers.pop_frame().is_some() {
                animator.on_frame(&mut timers, ());
            }
            assert!(animator.progress() >= last);
            assert!(animator.progress() <= FULL_OPACITY);
            last = animator.progress();
        }
        assert!(animator.is_completed());
    }

    #[test]
    fn test_cancel_stops_chain() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let mut animator = OpacityAnimator::new(ms(100));
        animator.start(&mut timers, ());
        animator.cancel(&mut timers);

        assert!(timers.is_empty());
        assert_eq!(animator.on_frame(&mut timers, ()), AnimatorStep::Ignored);
        assert!(!animator.is_completed());
    }
}
