// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover configuration: trigger type, alignment, content width, and border.
//!
//! ## Parsing
//!
//! Hosts that receive configuration as strings (markup attributes, props) have two options:
//!
//! - `from_name` constructors are lenient and never fail. Unrecognized alignments fall back to
//!   [`AlignmentMode::Bottom`], unrecognized trigger types to [`TriggerType::Hover`].
//! - [`FromStr`](core::str::FromStr) is strict and returns [`ParseConfigError`], for hosts that
//!   want to validate configuration up front.
//!
//! ```
//! use understory_popover::config::{AlignmentMode, ContentWidth, TriggerType};
//!
//! assert_eq!(AlignmentMode::from_name("diagonal"), AlignmentMode::Bottom);
//! assert!("diagonal".parse::<AlignmentMode>().is_err());
//! assert_eq!("click".parse::<TriggerType>(), Ok(TriggerType::Click));
//! assert_eq!("auto".parse::<ContentWidth>(), Ok(ContentWidth::Auto));
//! assert_eq!("320px".parse::<ContentWidth>(), Ok(ContentWidth::Px(320.0)));
//! ```

use core::fmt;
use core::str::FromStr;

/// Content width used when the caller does not supply one, in logical pixels.
pub const DEFAULT_CONTENT_WIDTH: f64 = 200.0;

/// Which interaction drives the popover.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TriggerType {
    /// Pointer enter/leave on the trigger or panel, debounced.
    #[default]
    Hover,
    /// Clicks on the trigger toggle; clicks elsewhere dismiss.
    Click,
}

impl TriggerType {
    /// Lenient lookup by name; anything other than `"click"` is [`TriggerType::Hover`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Whether this is [`TriggerType::Hover`].
    pub const fn is_hover(self) -> bool {
        matches!(self, Self::Hover)
    }

    /// Whether this is [`TriggerType::Click`].
    pub const fn is_click(self) -> bool {
        matches!(self, Self::Click)
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
        }
    }
}

impl FromStr for TriggerType {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("hover") {
            Ok(Self::Hover)
        } else if s.eq_ignore_ascii_case("click") {
            Ok(Self::Click)
        } else {
            Err(ParseConfigError::TriggerType)
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the panel sits relative to the trigger.
///
/// See [`panel_placement`](crate::position::panel_placement) for the offsets each mode produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AlignmentMode {
    /// Below the trigger, flush with its left edge.
    #[default]
    Bottom,
    /// Above the trigger.
    Top,
    /// To the left of the trigger, vertically centered on it.
    Left,
    /// To the right of the trigger, vertically centered on it.
    Right,
}

impl AlignmentMode {
    /// Lenient lookup by name; unrecognized names fall back to [`AlignmentMode::Bottom`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Self::Bottom, Self::Top, Self::Left, Self::Right]
            .into_iter()
            .find(|mode| s.eq_ignore_ascii_case(mode.as_str()))
            .ok_or(ParseConfigError::Alignment)
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target width of the panel while it is expanded.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ContentWidth {
    /// Fixed width in logical pixels.
    Px(f64),
    /// Width follows the content.
    Auto,
}

impl Default for ContentWidth {
    fn default() -> Self {
        Self::Px(DEFAULT_CONTENT_WIDTH)
    }
}

impl From<f64> for ContentWidth {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl FromStr for ContentWidth {
    type Err = ParseConfigError;

    /// Accepts `"auto"`, a bare number, or a number with a `px` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let digits = s.strip_suffix("px").unwrap_or(s).trim_end();
        match digits.parse::<f64>() {
            Ok(px) if px.is_finite() && px >= 0.0 => Ok(Self::Px(px)),
            _ => Err(ParseConfigError::ContentWidth),
        }
    }
}

/// Error returned by the strict [`FromStr`] implementations in this module.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseConfigError {
    /// Not `"hover"` or `"click"`.
    TriggerType,
    /// Not one of `"left"`, `"right"`, `"top"`, `"bottom"`.
    Alignment,
    /// Not `"auto"` or a finite, non-negative number of pixels.
    ContentWidth,
}

impl fmt::Display for ParseConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TriggerType => f.write_str("trigger type must be \"hover\" or \"click\""),
            Self::Alignment => {
                f.write_str("alignment must be one of \"left\", \"right\", \"top\", \"bottom\"")
            }
            Self::ContentWidth => {
                f.write_str("content width must be \"auto\" or a non-negative pixel count")
            }
        }
    }
}

impl core::error::Error for ParseConfigError {}

/// Caller-supplied configuration, fixed for one render pass.
///
/// ```
/// use understory_popover::config::{AlignmentMode, ContentWidth, PopoverConfig, TriggerType};
///
/// let config = PopoverConfig::default()
///     .trigger_type(TriggerType::Click)
///     .alignment(AlignmentMode::Right)
///     .content_width(ContentWidth::Auto)
///     .show_border(false);
/// assert!(config.trigger_type.is_click());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PopoverConfig {
    /// Interaction driving visibility.
    pub trigger_type: TriggerType,
    /// Placement relative to the trigger.
    pub alignment: AlignmentMode,
    /// Width of the expanded panel.
    pub content_width: ContentWidth,
    /// Whether the panel draws a 1px solid border.
    pub show_border: bool,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            trigger_type: TriggerType::Hover,
            alignment: AlignmentMode::Bottom,
            content_width: ContentWidth::default(),
            show_border: true,
        }
    }
}

impl PopoverConfig {
    /// Set the trigger type.
    #[must_use]
    pub fn trigger_type(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = trigger_type;
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: AlignmentMode) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the content width.
    #[must_use]
    pub fn content_width(mut self, width: impl Into<ContentWidth>) -> Self {
        self.content_width = width.into();
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }
}
