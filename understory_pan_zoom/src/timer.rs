// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven debounce timer.
//!
//! The viewport never sleeps or spawns. It records a deadline and the host
//! reports the passage of time through [`Viewport::tick`](crate::Viewport::tick),
//! which polls the timer.
//!
//! ```
//! use understory_pan_zoom::Debounce;
//!
//! let mut timer = Debounce::new();
//! timer.schedule(1_000, 180);
//! timer.schedule(1_100, 180); // replaces the first deadline
//! assert!(!timer.poll(1_200));
//! assert!(timer.poll(1_280));
//! assert!(!timer.poll(1_300)); // fires once
//! ```

/// A single cancel-and-reschedule deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` ms after `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The outstanding deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
