// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce slot.

use crate::queue::{TimerId, TimerQueue};

/// A re-armable timer slot implementing a trailing-edge debounce.
///
/// The slot owns at most one pending entry in a [`TimerQueue`].
/// Every [`Debounce::rearm`] cancels the previous entry (if still pending) and schedules a new
/// one `delay` ticks later, so only the last call in a burst fires.
///
/// The queue is shared, so the slot cannot observe firings on its own: when the host pops an
/// entry, it hands the id to [`Debounce::settle`], which tells whether the entry belongs to this
/// slot and clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: u64,
    pending: Option<TimerId>,
}

impl Debounce {
    /// Create an idle slot with the given quiet period.
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period in ticks.
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// The pending entry, if any.
    pub const fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Whether an entry scheduled by this slot has neither fired nor been canceled.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any pending entry and schedule `payload` for `now + delay`.
    pub fn rearm<T>(&mut self, timers: &mut TimerQueue<T>, now: u64, payload: T) -> TimerId {
        self.cancel(timers);
        let id = timers.schedule_after(now, self.delay, payload);
        self.pending = Some(id);
        id
    }

    /// Cancel the pending entry, if any. Returns whether something was canceled.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) -> bool {
        match self.pending.take() {
            Some(id) => timers.cancel(id).is_some(),
            None => false,
        }
    }

    /// Report that `id` fired.
    ///
    /// Returns `true` and clears the slot if `id` is this slot's pending entry.
    /// Ids from other slots (or superseded entries of this one) return `false`.
    pub fn settle(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the handle without touching the queue.
    ///
    /// Use after the queue itself was cleared.
    pub fn forget(&mut self) {
        self.pending = None;
    }
}
