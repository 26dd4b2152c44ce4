// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel placement: directional offsets and border derived from alignment and trigger size.
//!
//! ## Rules
//!
//! The panel is positioned absolutely inside the popover's container, whose origin is the
//! trigger's top-left corner. Offsets are set on the panel's edges:
//!
//! | alignment | offsets                                  |
//! |-----------|------------------------------------------|
//! | `Bottom`  | none (flush below-left of the trigger)   |
//! | `Top`     | `bottom = height`                        |
//! | `Right`   | `left = width`, `bottom = height / 2`    |
//! | `Left`    | `right = width`, `bottom = height / 2`   |
//!
//! [`panel_placement`] is a pure function; the popover calls it every time its style is
//! requested, so the result always reflects the current inputs.
//!
//! ```
//! use understory_popover::config::AlignmentMode;
//! use understory_popover::dimension::TriggerBox;
//! use understory_popover::position::panel_placement;
//!
//! let p = panel_placement(AlignmentMode::Right, TriggerBox::new(80.0, 30.0), true);
//! assert_eq!(p.offsets.left.unwrap().to_string(), "80px");
//! assert_eq!(p.offsets.bottom.unwrap().to_string(), "15px");
//! assert_eq!(p.border.unwrap().to_string(), "1px solid");
//! ```

use core::fmt;

use crate::config::AlignmentMode;
use crate::dimension::TriggerBox;

/// A length in logical pixels.
///
/// Displays in CSS form, e.g. `80px` or `7.5px`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Edge offsets of the panel relative to the popover container.
///
/// `None` means the edge is left to normal flow.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offsets {
    /// Offset of the panel's left edge.
    pub left: Option<Px>,
    /// Offset of the panel's right edge.
    pub right: Option<Px>,
    /// Offset of the panel's top edge.
    pub top: Option<Px>,
    /// Offset of the panel's bottom edge.
    pub bottom: Option<Px>,
}

impl Offsets {
    /// Whether no edge is offset.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// A solid panel border.
///
/// Only the stroke is recorded; the color comes from the host's theme border token.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke width.
    pub width: Px,
}

impl Border {
    /// The 1px solid border drawn when borders are enabled.
    pub const HAIRLINE: Self = Self { width: Px(1.0) };
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} solid", self.width)
    }
}

/// Placement part of the panel's style.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanelPlacement {
    /// Directional offsets.
    pub offsets: Offsets,
    /// Border, if enabled.
    pub border: Option<Border>,
}

/// Compute the panel's offsets and border.
pub fn panel_placement(
    alignment: AlignmentMode,
    trigger: TriggerBox,
    show_border: bool,
) -> PanelPlacement {
    let half_height = Px(trigger.height / 2.0);
    let offsets = match alignment {
        AlignmentMode::Bottom => Offsets::default(),
        AlignmentMode::Top => Offsets {
            bottom: Some(Px(trigger.height)),
            ..Offsets::default()
        },
        AlignmentMode::Right => Offsets {
            left: Some(Px(trigger.width)),
            bottom: Some(half_height),
            ..Offsets::default()
        },
        AlignmentMode::Left => Offsets {
            right: Some(Px(trigger.width)),
            bottom: Some(half_height),
            ..Offsets::default()
        },
    };
    PanelPlacement {
        offsets,
        border: show_border.then_some(Border::HAIRLINE),
    }
}
