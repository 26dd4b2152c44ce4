// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent debouncing.
//!
//! Pointer enter/leave events arrive in bursts: crossing the small gap between the trigger and
//! the panel produces a leave immediately followed by an enter. [`IntentDebouncer`] turns those
//! bursts into stable open/close intents.
//!
//! - [`IntentDebouncer::on_enter`] re-arms the open slot for [`HOVER_DEBOUNCE_MS`].
//! - [`IntentDebouncer::on_leave`] re-arms the close slot for [`HOVER_DEBOUNCE_MS`].
//!
//! Each slot is a trailing-edge [`Debounce`]: a new call cancels the pending call of the same
//! kind only. The opposite slot keeps its timer, but when a timer fires, the intent is only
//! released if it is still the most recent one the pointer expressed. An enter followed by a
//! leave inside the quiet period therefore produces no intent at all.
//!
//! ```
//! use understory_popover::intent::{Intent, IntentDebouncer, IntentTask};
//! use understory_timing::TimerQueue;
//!
//! let mut timers: TimerQueue<IntentTask> = TimerQueue::new();
//! let mut intents = IntentDebouncer::new();
//!
//! intents.on_enter(0, &mut timers);
//! intents.on_leave(80, &mut timers);
//!
//! let mut released = Vec::new();
//! while let Some(e) = timers.pop_due(1_000) {
//!     released.extend(intents.fire(e.id, e.payload));
//! }
//! // Only the close intent survives; the popover was never open, so it does nothing.
//! assert_eq!(released, [Intent::Close]);
//! ```

use understory_timing::{Debounce, TimerId, TimerQueue};

/// Quiet period before a hover intent is acted upon, in milliseconds.
pub const HOVER_DEBOUNCE_MS: u64 = 200;

/// A debounced hover intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The pointer settled over the trigger or panel.
    Open,
    /// The pointer settled outside both.
    Close,
}

/// Deferred intent, queued until the quiet period elapses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntentTask {
    /// Intent to release when the task fires.
    pub intent: Intent,
}

/// Trailing-edge debouncer for hover enter/leave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntentDebouncer {
    open: Debounce,
    close: Debounce,
    latest: Option<Intent>,
}

impl Default for IntentDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentDebouncer {
    /// Create a debouncer using [`HOVER_DEBOUNCE_MS`].
    pub const fn new() -> Self {
        Self::with_delay(HOVER_DEBOUNCE_MS)
    }

    /// Create a debouncer with a custom quiet period.
    pub const fn with_delay(delay: u64) -> Self {
        Self {
            open: Debounce::new(delay),
            close: Debounce::new(delay),
            latest: None,
        }
    }

    /// Most recent intent expressed by the pointer.
    pub const fn latest(&self) -> Option<Intent> {
        self.latest
    }

    /// Whether any intent is waiting for its quiet period to elapse.
    pub const fn is_pending(&self) -> bool {
        self.open.is_pending() || self.close.is_pending()
    }

    /// The pointer entered the trigger or the panel.
    pub fn on_enter<T: From<IntentTask>>(
        &mut self,
        now: u64,
        timers: &mut TimerQueue<T>,
    ) -> TimerId {
        self.arm(Intent::Open, now, timers)
    }

    /// The pointer left the trigger or the panel.
    pub fn on_leave<T: From<IntentTask>>(
        &mut self,
        now: u64,
        timers: &mut TimerQueue<T>,
    ) -> TimerId {
        self.arm(Intent::Close, now, timers)
    }

    /// Report that a queued task fired. Returns the intent to act on, if it is still current.
    pub fn fire(&mut self, id: TimerId, task: IntentTask) -> Option<Intent> {
        if !self.slot(task.intent).settle(id) {
            return None;
        }
        if self.latest != Some(task.intent) {
            #[cfg(feature = "tracing")]
            tracing::trace!(intent = ?task.intent, latest = ?self.latest, "popover: superseded hover intent");
            return None;
        }
        Some(task.intent)
    }

    /// Cancel both slots and forget the latest intent.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) {
        self.open.cancel(timers);
        self.close.cancel(timers);
        self.latest = None;
    }

    fn arm<T: From<IntentTask>>(
        &mut self,
        intent: Intent,
        now: u64,
        timers: &mut TimerQueue<T>,
    ) -> TimerId {
        self.latest = Some(intent);
        self.slot(intent)
            .rearm(timers, now, IntentTask { intent }.into())
    }

    fn slot(&mut self, intent: Intent) -> &mut Debounce {
        match intent {
            Intent::Open => &mut self.open,
            Intent::Close => &mut self.close,
        }
    }
}
