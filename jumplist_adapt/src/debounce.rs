// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamp-based debouncing of mutation bursts.

/// How long after the last noted mutation the recompute fires, in
/// milliseconds.
pub const DEBOUNCE_MS: u64 = 200;

/// Coalesces bursts of notifications into one deadline.
///
/// Each [`note`](Debouncer::note) pushes the deadline out; the host pumps
/// [`flush`](Debouncer::flush) with the current time and acts when it
/// returns `true`. No clock is read here; callers supply millisecond
/// timestamps.
#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Records an event at `now`, moving the deadline to `now + DEBOUNCE_MS`.
    pub fn note(&mut self, now: u64) {
        self.deadline = Some(now + DEBOUNCE_MS);
    }

    /// Returns `true` (and goes idle) once the deadline has passed.
    pub fn flush(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending deadline.
    pub fn clear(&mut self) {
        self.deadline = None;
    }
}
