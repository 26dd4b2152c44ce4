// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger measurement: record the trigger's box once, after first mount.
//!
//! The trigger's laid-out size only exists once the host has mounted and laid out the
//! trigger element, so measurement is deferred until [`Popover::mount`](crate::Popover::mount).
//! The first measurement is kept for the lifetime of the popover; there is no resize
//! observation, and later measurements (for example on remount) are ignored.

use kurbo::{Rect, Size};

/// Width and height of the trigger element in logical pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TriggerBox {
    /// Trigger width.
    pub width: f64,
    /// Trigger height.
    pub height: f64,
}

impl TriggerBox {
    /// The empty box, used before the trigger has been measured.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a box from its dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Box of a laid-out trigger rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        rect.size().into()
    }

    /// As a Kurbo size.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for TriggerBox {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Rect> for TriggerBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Records the trigger box exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionObserver {
    measured: Option<TriggerBox>,
}

impl DimensionObserver {
    /// Create an observer that has not measured anything yet.
    pub const fn new() -> Self {
        Self { measured: None }
    }

    /// Measure the trigger if this is the first observation, returning the recorded box.
    ///
    /// `measure` runs at most once over the observer's lifetime.
    pub fn observe(&mut self, measure: impl FnOnce() -> TriggerBox) -> TriggerBox {
        *self.measured.get_or_insert_with(measure)
    }

    /// The recorded box, if the trigger has been measured.
    pub const fn trigger_box(&self) -> Option<TriggerBox> {
        self.measured
    }

    /// Whether the trigger has been measured.
    pub const fn is_measured(&self) -> bool {
        self.measured.is_some()
    }
}
