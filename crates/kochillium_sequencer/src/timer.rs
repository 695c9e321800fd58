// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timer registry.
//!
//! Single owner for every delayed, repeating and per-frame callback a
//! sequence schedules. Callbacks are typed payloads: the owner pops them
//! from the registry and dispatches them itself, which keeps cancellation
//! trivial. Once [`TimerRegistry::cancel_all`] returns, nothing that was
//! scheduled before it can ever be popped again.
//!
//! The registry keeps a virtual `now`. While due timers are popped it is
//! moved to each timer's deadline, so delays scheduled from inside a
//! dispatch are measured from when the timer was due rather than from when
//! the host happened to poll.

use indexmap::IndexMap;
use std::time::Duration;

/// Shortest interval a repeating timer may use.
const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw id, unique within one registry
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What kind of callback a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after a delay
    Once,
    /// Fires every interval until cancelled
    Repeating,
    /// Fires on the next display frame
    Frame,
}

#[derive(Debug, Clone)]
struct TimerEntry<E> {
    kind: TimerKind,
    /// Deadline for `Once`/`Repeating`
    deadline: Duration,
    /// Interval for `Repeating`
    interval: Duration,
    /// Frame counter at registration, for `Frame`
    registered_frame: u64,
    payload: E,
}

/// Owns all outstanding callbacks of one sequence
#[derive(Debug, Clone)]
pub struct TimerRegistry<E> {
    entries: IndexMap<TimerHandle, TimerEntry<E>>,
    next_id: u64,
    now: Duration,
    frame: u64,
}

impl<E: Clone> TimerRegistry<E> {
    /// Create an empty registry whose virtual time starts at `now`
    pub fn new(now: Duration) -> Self {
        Self {
            entries: IndexMap::new(),
            next_id: 0,
            now,
            frame: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move virtual time forward to `now`. Never goes backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, entry: TimerEntry<E>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.insert(handle, entry);
        handle
    }

    /// Register a one-shot callback due `delay` after the current time
    pub fn schedule_once(&mut self, delay: Duration, payload: E) -> TimerHandle {
        self.insert(TimerEntry {
            kind: TimerKind::Once,
            deadline: self.now.saturating_add(delay),
            interval: Duration::ZERO,
            registered_frame: self.frame,
            payload,
        })
    }

    /// Register a one-shot callback due at an absolute virtual time.
    ///
    /// A deadline already in the past fires on the next [`pop_due`](Self::pop_due).
    pub fn schedule_at(&mut self, deadline: Duration, payload: E) -> TimerHandle {
        self.insert(TimerEntry {
            kind: TimerKind::Once,
            deadline,
            interval: Duration::ZERO,
            registered_frame: self.frame,
            payload,
        })
    }

    /// Register a callback that fires every `interval` until cancelled
    pub fn schedule_repeating(&mut self, interval: Duration, payload: E) -> TimerHandle {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        self.insert(TimerEntry {
            kind: TimerKind::Repeating,
            deadline: self.now.saturating_add(interval),
            interval,
            registered_frame: self.frame,
            payload,
        })
    }

    /// Register a callback for the next display frame
    pub fn schedule_frame(&mut self, payload: E) -> TimerHandle {
        self.insert(TimerEntry {
            kind: TimerKind::Frame,
            deadline: self.now,
            interval: Duration::ZERO,
            registered_frame: self.frame,
            payload,
        })
    }

    /// Cancel one callback. Returns false if it was not live.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.swap_remove(&handle).is_some()
    }

    /// Cancel every live callback of every kind
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::trace!("Cancelling {} pending timer(s)", self.entries.len());
        }
        self.entries.clear();
    }

    /// Whether `handle` is still scheduled
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Kind of a live handle
    pub fn kind(&self, handle: TimerHandle) -> Option<TimerKind> {
        self.entries.get(&handle).map(|entry| entry.kind)
    }

    /// Number of live callbacks
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is scheduled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Virtual time moves to the popped timer's deadline, stepping back if
    /// the deadline was set in the past, so work scheduled by the dispatch
    /// is measured from when the timer was due. Repeating timers stay live
    /// and are pushed one interval forward.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let (handle, deadline) = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.kind != TimerKind::Frame && entry.deadline <= until)
            .min_by_key(|(handle, entry)| (entry.deadline, **handle))
            .map(|(handle, entry)| (*handle, entry.deadline))?;

        self.now = deadline;

        let entry = self.entries.get_mut(&handle)?;
        match entry.kind {
            TimerKind::Repeating => {
                entry.deadline = entry.deadline.saturating_add(entry.interval);
                Some((handle, entry.payload.clone()))
            }
            _ => self
                .entries
                .swap_remove(&handle)
                .map(|entry| (handle, entry.payload)),
        }
    }

    /// Start a display frame at `now`.
    ///
    /// Frame callbacks registered before this call become eligible for
    /// [`pop_frame`](Self::pop_frame); ones registered afterwards wait for
    /// the next frame.
    pub fn begin_frame(&mut self, now: Duration) {
        self.advance_to(now);
        self.frame += 1;
    }

    /// Pop the next frame callback eligible in the current frame
    pub fn pop_frame(&mut self) -> Option<(TimerHandle, E)> {
        let frame = self.frame;
        let handle = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.kind == TimerKind::Frame && entry.registered_frame < frame)
            .map(|(handle, _)| *handle)
            .min()?;

        self.entries
            .swap_remove(&handle)
            .map(|entry| (handle, entry.payload))
    }
}

impl<E: Clone> Default for TimerRegistry<E> {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_once_fires_at_deadline() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let handle = timers.schedule_once(ms(100), "tick");

        assert!(timers.pop_due(ms(99)).is_none());
        assert_eq!(timers.pop_due(ms(100)), Some((handle, "tick")));
        assert!(timers.is_empty());
        assert_eq!(timers.now(), ms(100));
    }

    #[test]
    fn test_due_order_is_deadline_then_registration() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        timers.schedule_once(ms(30), "c");
        timers.schedule_once(ms(10), "a");
        timers.schedule_once(ms(10), "b");

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(ms(100)))
            .map(|(_, payload)| payload)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_repeating_catches_up() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let handle = timers.schedule_repeating(ms(100), ());

        let mut count = 0;
        while timers.pop_due(ms(1000)).is_some() {
            count += 1;
        }
        assert_eq!(count, 10);
        assert!(timers.is_live(handle));
        assert_eq!(timers.kind(handle), Some(TimerKind::Repeating));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        timers.schedule_repeating(Duration::ZERO, ());

        let mut count = 0;
        while timers.pop_due(ms(5)).is_some() {
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn test_delay_measured_from_virtual_now() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        timers.schedule_once(ms(100), "first");

        // Host polls late, but the follow-up is relative to the due time
        let (_, payload) = timers.pop_due(ms(250)).unwrap();
        assert_eq!(payload, "first");
        timers.schedule_once(ms(100), "second");
        assert_eq!(timers.pop_due(ms(250)).map(|(_, p)| p), Some("second"));
        assert_eq!(timers.now(), ms(200));
    }

    #[test]
    fn test_schedule_at_past_deadline() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        timers.begin_frame(ms(316));

        // Noticed at 316 ms, but the work was due at 300 ms
        timers.schedule_at(ms(300), "pause");
        assert_eq!(timers.pop_due(ms(332)).map(|(_, p)| p), Some("pause"));
        assert_eq!(timers.now(), ms(300));

        timers.schedule_once(ms(100), "next");
        assert!(timers.pop_due(ms(399)).is_none());
        assert_eq!(timers.pop_due(ms(400)).map(|(_, p)| p), Some("next"));
    }

    #[test]
    fn test_cancel_all_inside_dispatch() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        timers.schedule_repeating(ms(10), "repeat");
        timers.schedule_once(ms(20), "once");
        timers.schedule_frame("frame");

        let (_, payload) = timers.pop_due(ms(100)).unwrap();
        assert_eq!(payload, "repeat");

        // The dispatched repeating timer cancels everything, itself included
        timers.cancel_all();
        timers.cancel_all();
        assert!(timers.pop_due(ms(100)).is_none());
        timers.begin_frame(ms(100));
        assert!(timers.pop_frame().is_none());
        assert_eq!(timers.live_count(), 0);
    }

    #[test]
    fn test_frame_registered_during_frame_waits() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let first = timers.schedule_frame(1);

        timers.begin_frame(ms(16));
        assert_eq!(timers.pop_frame(), Some((first, 1)));
        let second = timers.schedule_frame(2);
        assert!(timers.pop_frame().is_none());

        timers.begin_frame(ms(32));
        assert_eq!(timers.pop_frame(), Some((second, 2)));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_single() {
        let mut timers = TimerRegistry::new(Duration::ZERO);
        let a = timers.schedule_once(ms(10), 'a');
        let b = timers.schedule_once(ms(10), 'b');

        assert!(timers.cancel(a));
        assert!(!timers.cancel(a));
        assert!(!timers.is_live(a));
        assert_eq!(timers.pop_due(ms(10)), Some((b, 'b')));
    }
}
