// SPDX-License-Identifier: MIT OR Apache-2.0
//! One-shot completion guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Flips false -> true exactly once.
///
/// Every path that wants to finish a sequence calls [`try_set`](Self::try_set);
/// only the first caller gets `true` and may run the terminal action.
#[derive(Debug, Default)]
pub struct CompletionFlag {
    set: AtomicBool,
}

impl CompletionFlag {
    /// Create an unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim completion. Returns true for the first caller only.
    pub fn try_set(&self) -> bool {
        self.set
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether completion has been claimed
    pub fn is_set(&self) -> bool {
        self.set.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_first_caller_wins() {
        let flag = CompletionFlag::new();
        assert!(!flag.is_set());
        assert!(flag.try_set());
        assert!(!flag.try_set());
        assert!(flag.is_set());
    }

    #[test]
    fn test_racing_threads_single_winner() {
        let flag = Arc::new(CompletionFlag::new());
        let winners: usize = (0..8)
            .map(|_| {
                let flag = Arc::clone(&flag);
                thread::spawn(move || flag.try_set())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| usize::from(handle.join().unwrap()))
            .sum();
        assert_eq!(winners, 1);
    }
}
