// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility state machine with two-phase timed transitions.
//!
//! ## States
//!
//! ```text
//!            open()                 100ms
//! Hidden ───────────▶ Opening ───────────▶ Visible
//!    ▲                                        │
//!    │     100ms                  close()     │
//!    └─────────── Closing ◀───────────────────┘
//! ```
//!
//! - Opening expands the panel immediately with opacity held at 0; the fade-in applies after
//!   [`PHASE_DELAY_MS`].
//! - Closing fades immediately; the collapse to `0px × 0px` applies after [`PHASE_DELAY_MS`].
//!
//! The style is derived from the state (see [`VisibilityState::appearance`]), so the panel can
//! never show a half-applied mix of two transitions.
//!
//! ## Guards
//!
//! Each phase-two task carries a [`PhaseGuard`] captured when it was scheduled: the controller's
//! transition epoch. Starting any transition bumps the epoch, and teardown both bumps it and
//! clears the liveness flag. A task whose guard no longer matches is discarded by
//! [`VisibilityController::complete`].
//!
//! Requests of the same kind during a transition (`open()` while Opening) cancel the pending
//! timer and restart. A request of the opposite kind starts its own transition; the superseded
//! task stays queued and is discarded by its guard when it expires.
//!
//! ## Minimal example
//!
//! ```
//! use understory_popover::visibility::{PhaseTask, VisibilityController, VisibilityState};
//! use understory_timing::TimerQueue;
//!
//! let mut timers: TimerQueue<PhaseTask> = TimerQueue::new();
//! let mut vis = VisibilityController::new();
//!
//! assert!(vis.open(0, &mut timers));
//! assert_eq!(vis.state(), VisibilityState::Opening);
//!
//! let due = timers.pop_due(100).unwrap();
//! assert!(vis.complete(due.payload));
//! assert_eq!(vis.state(), VisibilityState::Visible);
//! ```

use understory_timing::{TimerId, TimerQueue};

use crate::config::ContentWidth;
use crate::position::Px;

/// Delay between the first and second phase of a transition, in milliseconds.
pub const PHASE_DELAY_MS: u64 = 100;

/// Discrete visibility of the panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    /// Collapsed and transparent.
    #[default]
    Hidden,
    /// Expanded, waiting to fade in.
    Opening,
    /// Expanded and opaque.
    Visible,
    /// Fading out, waiting to collapse.
    Closing,
}

impl VisibilityState {
    /// Whether the panel is open or on its way to being open.
    pub const fn is_open_intent(self) -> bool {
        matches!(self, Self::Opening | Self::Visible)
    }

    /// Whether a timed transition is in flight.
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Size and opacity of the panel in this state.
    pub fn appearance(self, content_width: ContentWidth) -> Appearance {
        let expanded = match content_width {
            ContentWidth::Px(px) => Length::Px(Px(px)),
            ContentWidth::Auto => Length::Auto,
        };
        match self {
            Self::Hidden => Appearance {
                width: Length::Px(Px(0.0)),
                height: Length::Px(Px(0.0)),
                opacity: 0.0,
            },
            Self::Opening | Self::Closing => Appearance {
                width: expanded,
                height: Length::Content,
                opacity: 0.0,
            },
            Self::Visible => Appearance {
                width: expanded,
                height: Length::Content,
                opacity: 1.0,
            },
        }
    }
}

/// A panel dimension.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Fixed pixel length.
    Px(Px),
    /// Sized by the layout engine (`auto`).
    Auto,
    /// Natural content size; no explicit length is set.
    Content,
}

/// Size and opacity of the panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Appearance {
    /// Panel width.
    pub width: Length,
    /// Panel height.
    pub height: Length,
    /// Panel opacity, `0.0` or `1.0`.
    pub opacity: f64,
}

/// Direction of a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Hidden → Opening → Visible.
    Open,
    /// Visible → Closing → Hidden.
    Close,
}

/// Guard captured when a phase-two task is scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhaseGuard {
    epoch: u32,
}

/// Deferred second phase of a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseTask {
    /// Transition this task completes.
    pub kind: TransitionKind,
    /// Guard checked when the task fires.
    pub guard: PhaseGuard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Pending {
    id: TimerId,
    kind: TransitionKind,
}

/// Owner of the panel's [`VisibilityState`]; the only code path that changes it.
///
/// The controller does not own a clock or a queue. Each request takes the current time and the
/// shared [`TimerQueue`], and the host feeds expired [`PhaseTask`]s back through
/// [`VisibilityController::complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityController {
    state: VisibilityState,
    pending: Option<Pending>,
    epoch: u32,
    alive: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    /// Create a live controller in [`VisibilityState::Hidden`].
    pub const fn new() -> Self {
        Self {
            state: VisibilityState::Hidden,
            pending: None,
            epoch: 0,
            alive: true,
        }
    }

    /// Current state.
    pub const fn state(&self) -> VisibilityState {
        self.state
    }

    /// Whether the controller has not been torn down.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether a phase-two task is outstanding for the current transition.
    pub const fn has_pending_phase(&self) -> bool {
        self.pending.is_some()
    }

    /// Start opening. Returns whether a transition started.
    ///
    /// No-op while Visible. Restarts the transition while Opening.
    pub fn open<T: From<PhaseTask>>(&mut self, now: u64, timers: &mut TimerQueue<T>) -> bool {
        if !self.alive || self.state == VisibilityState::Visible {
            return false;
        }
        self.begin(TransitionKind::Open, now, timers);
        true
    }

    /// Start closing. Returns whether a transition started.
    ///
    /// No-op while Hidden. Restarts the transition while Closing.
    pub fn close<T: From<PhaseTask>>(&mut self, now: u64, timers: &mut TimerQueue<T>) -> bool {
        if !self.alive || self.state == VisibilityState::Hidden {
            return false;
        }
        self.begin(TransitionKind::Close, now, timers);
        true
    }

    /// Close if open (or opening), open otherwise. Returns the new intended visibility.
    pub fn toggle<T: From<PhaseTask>>(&mut self, now: u64, timers: &mut TimerQueue<T>) -> bool {
        if self.state.is_open_intent() {
            self.close(now, timers);
        } else {
            self.open(now, timers);
        }
        self.state.is_open_intent()
    }

    /// Drive the controller toward an externally supplied visibility.
    ///
    /// Starts a transition only when the current intent differs from `visible`; an in-flight
    /// transition toward the same target is left to finish. Returns whether a transition
    /// started.
    pub fn apply_external<T: From<PhaseTask>>(
        &mut self,
        visible: bool,
        now: u64,
        timers: &mut TimerQueue<T>,
    ) -> bool {
        if self.state.is_open_intent() == visible {
            return false;
        }
        if visible {
            self.open(now, timers)
        } else {
            self.close(now, timers)
        }
    }

    /// Apply the second phase of a transition when its timer fires.
    ///
    /// Returns `false` (and changes nothing) if the controller was torn down or another
    /// transition started since the task was scheduled.
    pub fn complete(&mut self, task: PhaseTask) -> bool {
        if !self.alive || task.guard.epoch != self.epoch {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind = ?task.kind, alive = self.alive, "popover: discarded stale phase");
            return false;
        }
        let next = match (task.kind, self.state) {
            (TransitionKind::Open, VisibilityState::Opening) => VisibilityState::Visible,
            (TransitionKind::Close, VisibilityState::Closing) => VisibilityState::Hidden,
            _ => return false,
        };
        self.set_state(next);
        self.pending = None;
        true
    }

    /// Mark the controller dead. Queued phase tasks become no-ops.
    pub fn teardown<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(p) = self.pending.take() {
            timers.cancel(p.id);
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.alive = false;
    }

    /// Bring a torn-down controller back to life (remount).
    ///
    /// A transition interrupted by teardown lost its phase-two task, so it is restarted from
    /// `now`. Returns whether a transition was restarted.
    pub fn revive<T: From<PhaseTask>>(&mut self, now: u64, timers: &mut TimerQueue<T>) -> bool {
        if self.alive {
            return false;
        }
        self.alive = true;
        if !self.state.is_transitioning() {
            return false;
        }
        let kind = match self.state {
            VisibilityState::Closing => TransitionKind::Close,
            _ => TransitionKind::Open,
        };
        self.begin(kind, now, timers);
        true
    }

    fn begin<T: From<PhaseTask>>(
        &mut self,
        kind: TransitionKind,
        now: u64,
        timers: &mut TimerQueue<T>,
    ) {
        // Same kind: the old timer is canceled outright. Opposite kind: it is superseded and
        // its guard rejects it on expiry.
        if let Some(p) = self.pending.take()
            && p.kind == kind
        {
            timers.cancel(p.id);
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.set_state(match kind {
            TransitionKind::Open => VisibilityState::Opening,
            TransitionKind::Close => VisibilityState::Closing,
        });
        let task = PhaseTask {
            kind,
            guard: PhaseGuard { epoch: self.epoch },
        };
        let id = timers.schedule_after(now, PHASE_DELAY_MS, task.into());
        self.pending = Some(Pending { id, kind });
    }

    fn set_state(&mut self, next: VisibilityState) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.state, to = ?next, "popover: visibility transition");
        self.state = next;
    }
}
