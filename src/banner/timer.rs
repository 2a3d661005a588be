// SPDX-License-Identifier: MPL-2.0
//! Timer source used for auto-dismiss and animation completion.
//!
//! Timers are one-shot and identified by a [`TimerHandle`]. The presenter
//! never blocks on a timer: the host polls [`TimerSource::expired`] from its
//! tick and routes each expired handle back to the presenter, which checks
//! it against the handles it still holds.

use std::time::{Duration, Instant};

/// Identifier of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw identifier, for diagnostics.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Schedules one-shot timers.
pub trait TimerSource {
    /// Arms a timer firing `delay` after the source's current time.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Disarms a timer. Cancelling an unknown or already fired handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Advances the source to `now` and returns every handle whose deadline
    /// has passed, earliest first.
    fn expired(&mut self, now: Instant) -> Vec<TimerHandle>;
}

/// Deadline-based timer source driven by periodic ticks.
///
/// Time only moves when [`TimerSource::expired`] is called, which makes the
/// source usable with both a real clock and synthetic test instants.
#[derive(Debug, Clone)]
pub struct DeadlineTimers {
    now: Instant,
    next_id: u64,
    pending: Vec<(TimerHandle, Instant)>,
}

impl DeadlineTimers {
    /// Creates a source whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current time as last observed by the source.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still armed.
    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }
}

impl Default for DeadlineTimers {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl TimerSource for DeadlineTimers {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    fn expired(&mut self, now: Instant) -> Vec<TimerHandle> {
        if now > self.now {
            self.now = now;
        }

        let mut due: Vec<(TimerHandle, Instant)> = Vec::new();
        self.pending.retain(|&(handle, deadline)| {
            if deadline <= now {
                due.push((handle, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(handle, deadline)| (deadline, handle.0));
        due.into_iter().map(|(handle, _)| handle).collect()
    }
}
