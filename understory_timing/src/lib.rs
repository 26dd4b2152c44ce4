// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! ## Overview
//!
//! UI components routinely defer work: a hover card opens after a short quiet period, a fade
//! completes before a panel collapses, a tooltip hides after the pointer leaves.
//! This crate keeps that deferred work as plain data so it can be driven by any event loop.
//!
//! - [`TimerQueue`]: cancelable deadlines with a payload each, drained in deadline order.
//! - [`TimerId`]: generational handle for a scheduled entry.
//! - [`Debounce`]: a single re-armable slot for trailing-edge debouncing.
//!
//! The crate never reads a clock.
//! Times are `u64` ticks in a unit chosen by the host (Understory Popover uses milliseconds).
//! The host passes the current time in, asks for [`TimerQueue::next_deadline`] to plan its next
//! wake-up, and drains due entries with [`TimerQueue::pop_due`].
//!
//! ## Ordering
//!
//! Entries fire strictly in deadline order.
//! Entries sharing a deadline fire in the order they were scheduled.
//! Canceled entries never fire, and a stale [`TimerId`] never aliases a newer entry.
//!
//! ## Minimal example
//!
//! ```
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let fade = timers.schedule_after(0, 100, "fade");
//! let _collapse = timers.schedule_after(0, 200, "collapse");
//!
//! // The host decides the fade is no longer wanted.
//! assert_eq!(timers.cancel(fade), Some("fade"));
//! assert_eq!(timers.next_deadline(), Some(200));
//!
//! assert!(timers.pop_due(150).is_none());
//! let due = timers.pop_due(200).unwrap();
//! assert_eq!(due.payload, "collapse");
//! assert!(timers.is_empty());
//! ```
//!
//! ## Debouncing
//!
//! ```
//! use understory_timing::{Debounce, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let mut open = Debounce::new(200);
//!
//! // Three rapid calls: only the last one survives.
//! open.rearm(&mut timers, 0, ());
//! open.rearm(&mut timers, 50, ());
//! let last = open.rearm(&mut timers, 120, ());
//! assert_eq!(timers.len(), 1);
//!
//! let due = timers.pop_due(320).unwrap();
//! assert_eq!(due.id, last);
//! assert!(open.settle(due.id));
//! assert!(!open.is_pending());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;

pub use debounce::Debounce;
pub use queue::{Expired, TimerId, TimerQueue};
