// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over the popover's parts.
//!
//! Hosts that deliver native enter/leave events can call
//! [`Popover::on_pointer_enter`](crate::Popover::on_pointer_enter) and
//! [`Popover::on_pointer_leave`](crate::Popover::on_pointer_leave) directly.
//! Hosts that only hit-test on pointer move can instead report which part is under the pointer
//! through [`Popover::update_hover`](crate::Popover::update_hover), and [`HoverState`] derives
//! the minimal enter/leave transitions.
//!
//! ```
//! use understory_popover::hover::{HoverEvent, HoverState, PopoverPart};
//!
//! let mut h = HoverState::new();
//! assert_eq!(h.update(Some(PopoverPart::Trigger)), [HoverEvent::Enter(PopoverPart::Trigger)]);
//! assert_eq!(
//!     h.update(Some(PopoverPart::Panel)),
//!     [HoverEvent::Leave(PopoverPart::Trigger), HoverEvent::Enter(PopoverPart::Panel)]
//! );
//! assert!(h.update(Some(PopoverPart::Panel)).is_empty());
//! ```

use alloc::vec::Vec;

/// Hoverable part of a popover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PopoverPart {
    /// The element that anchors the popover.
    Trigger,
    /// The floating panel.
    Panel,
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the part.
    Enter(PopoverPart),
    /// Pointer left the part.
    Leave(PopoverPart),
}

/// Tracks which popover part the pointer is over.
///
/// Leaves are emitted before enters, so moving straight from the trigger to the panel yields
/// `Leave(Trigger)` followed by `Enter(Panel)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<PopoverPart>,
}

impl HoverState {
    /// Create a state with nothing hovered.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The part currently under the pointer.
    pub const fn current(&self) -> Option<PopoverPart> {
        self.current
    }

    /// Record the part under the pointer, returning the transitions from the previous part.
    pub fn update(&mut self, hovered: Option<PopoverPart>) -> Vec<HoverEvent> {
        let mut out = Vec::new();
        if self.current == hovered {
            return out;
        }
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = hovered {
            out.push(HoverEvent::Enter(new));
        }
        self.current = hovered;
        out
    }

    /// Forget the hovered part, returning the leave transition if something was hovered.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update(None)
    }

    /// Forget the hovered part without reporting a transition.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
