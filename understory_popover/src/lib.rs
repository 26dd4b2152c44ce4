// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: a headless popover anchored to a trigger.
//!
//! ## Overview
//!
//! A popover is a floating panel shown next to a trigger, either while the pointer hovers the
//! trigger or panel, or after a click on the trigger. This crate owns the behavior and leaves
//! rendering and event plumbing to the host.
//!
//! - [`visibility`]: the four-state visibility machine and its two-phase timed transitions.
//! - [`intent`]: debouncing of pointer enter/leave into stable open/close intents.
//! - [`position`]: directional offsets and border of the panel from alignment and trigger size.
//! - [`dimension`]: one-time measurement of the trigger box.
//! - [`sync`]: controlled/uncontrolled visibility and change notifications.
//! - [`dismissal`]: the document click listener used to close on outside clicks.
//! - [`hover`]: enter/leave derivation for hosts that hit-test on pointer move.
//! - [`config`]: the popover's configuration and its string forms.
//!
//! [`Popover`] wires these together. Deferred work lives in an
//! [`understory_timing::TimerQueue`] inside the popover; the host supplies the time and calls
//! [`Popover::advance`] when [`Popover::next_deadline`] passes.
//!
//! ## Timing
//!
//! - Hover enter/leave is debounced by [`intent::HOVER_DEBOUNCE_MS`] (200ms).
//! - Opening expands the panel, then fades it in after [`visibility::PHASE_DELAY_MS`] (100ms).
//! - Closing fades the panel, then collapses it after the same delay.
//!
//! ## Click mode
//!
//! ```
//! use understory_popover::{
//!     ClickTarget, ListenerRegistry, Popover, PopoverConfig, TriggerBox, TriggerType,
//!     VisibilityState,
//! };
//!
//! let mut document = ListenerRegistry::new();
//! let config = PopoverConfig::default().trigger_type(TriggerType::Click);
//! let mut popover = Popover::new(config);
//! popover.mount(TriggerBox::new(120.0, 40.0), &mut document, 0);
//! assert_eq!(document.len(), 1);
//!
//! popover.dispatch_click(ClickTarget::Trigger, 0);
//! popover.advance(100);
//! assert_eq!(popover.state(), VisibilityState::Visible);
//!
//! // Clicks inside the panel do not dismiss it.
//! popover.dispatch_click(ClickTarget::Panel, 150);
//! assert_eq!(popover.state(), VisibilityState::Visible);
//!
//! popover.dispatch_click(ClickTarget::Outside, 200);
//! popover.advance(300);
//! assert_eq!(popover.state(), VisibilityState::Hidden);
//!
//! popover.unmount(&mut document);
//! assert!(document.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std`.
//! - `libm`: forwards to Kurbo's `libm` for `no_std` builds.
//! - `tracing`: emits `tracing` events for transitions, debounced intents, and listener lifecycle.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod dimension;
pub mod dismissal;
pub mod hover;
pub mod intent;
pub mod position;
pub mod sync;
pub mod visibility;

mod popover;

pub use config::{AlignmentMode, ContentWidth, ParseConfigError, PopoverConfig, TriggerType};
pub use dimension::TriggerBox;
pub use dismissal::{ClickTarget, ListenerRegistry, Propagation};
pub use hover::PopoverPart;
pub use popover::{PanelStyle, Popover, PopoverTask};
pub use position::{Border, Offsets, Px};
pub use sync::ControlMode;
pub use visibility::{Length, VisibilityState};
