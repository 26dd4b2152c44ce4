// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled/uncontrolled synchronization with the caller.
//!
//! ## Inbound
//!
//! The caller may supply an external visibility signal on every render pass. Its presence makes
//! the popover [`ControlMode::Controlled`]. [`ExternalSync::observe`] reports each *change* of
//! the signal, which the popover forwards to
//! [`VisibilityController::apply_external`](crate::visibility::VisibilityController::apply_external).
//!
//! ## Outbound
//!
//! Internally driven changes (debounced hover, trigger clicks, outside dismissal) are reported
//! through the `on_visible_change` callback via [`ExternalSync::report`]. In controlled mode the
//! report is the *only* effect: the caller is expected to feed the value back through the
//! signal, and nothing assumes it does so synchronously.

use alloc::boxed::Box;
use core::fmt;

/// Who owns the source of truth for visibility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// The popover decides its own visibility.
    #[default]
    Uncontrolled,
    /// The caller's signal decides; internal interactions only request changes.
    Controlled,
}

/// Callback invoked with the intended visibility.
pub type VisibleChangeCallback = Box<dyn FnMut(bool)>;

/// Tracks the external signal and delivers outbound reports.
#[derive(Default)]
pub struct ExternalSync {
    signal: Option<bool>,
    on_change: Option<VisibleChangeCallback>,
}

impl fmt::Debug for ExternalSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalSync")
            .field("signal", &self.signal)
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl ExternalSync {
    /// Create an uncontrolled adapter with no callback.
    pub const fn new() -> Self {
        Self {
            signal: None,
            on_change: None,
        }
    }

    /// Current control mode.
    pub const fn mode(&self) -> ControlMode {
        match self.signal {
            Some(_) => ControlMode::Controlled,
            None => ControlMode::Uncontrolled,
        }
    }

    /// Last observed external signal.
    pub const fn signal(&self) -> Option<bool> {
        self.signal
    }

    /// Record this render pass's signal.
    ///
    /// Returns `Some(visible)` when the signal changed to a concrete value and the controller
    /// must be driven to it. Dropping the signal (`None`) switches back to uncontrolled mode
    /// without touching the current visibility.
    pub fn observe(&mut self, signal: Option<bool>) -> Option<bool> {
        let changed = self.signal != signal;
        self.signal = signal;
        if changed { signal } else { None }
    }

    /// Install or remove the outbound callback.
    pub fn set_callback(&mut self, callback: Option<VisibleChangeCallback>) {
        self.on_change = callback;
    }

    /// Deliver an intended visibility to the caller, if a callback is installed.
    pub fn report(&mut self, visible: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(visible, mode = ?self.mode(), "popover: visible change requested");
        if let Some(cb) = self.on_change.as_mut() {
            cb(visible);
        }
    }
}
