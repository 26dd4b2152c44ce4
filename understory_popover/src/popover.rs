// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover: event wiring around the visibility controller.

use alloc::boxed::Box;

use understory_timing::TimerQueue;

use crate::config::{ContentWidth, PopoverConfig};
use crate::dimension::{DimensionObserver, TriggerBox};
use crate::dismissal::{ClickTarget, DismissalBinding, ListenerRegistry, Propagation};
use crate::hover::{HoverEvent, HoverState, PopoverPart};
use crate::intent::{Intent, IntentDebouncer, IntentTask};
use crate::position::{Border, Offsets, panel_placement};
use crate::sync::{ControlMode, ExternalSync};
use crate::visibility::{Length, PhaseTask, VisibilityController, VisibilityState};

/// Deferred work owned by a popover.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PopoverTask {
    /// Second phase of a visibility transition.
    Phase(PhaseTask),
    /// Debounced hover intent.
    Intent(IntentTask),
}

impl From<PhaseTask> for PopoverTask {
    fn from(task: PhaseTask) -> Self {
        Self::Phase(task)
    }
}

impl From<IntentTask> for PopoverTask {
    fn from(task: IntentTask) -> Self {
        Self::Intent(task)
    }
}

/// Computed style record for the panel.
///
/// The host re-renders the panel from this record; nothing else about the panel's style is
/// owned by the popover.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelStyle {
    /// Panel width.
    pub width: Length,
    /// Panel height.
    pub height: Length,
    /// Panel opacity, `0.0` or `1.0`.
    pub opacity: f64,
    /// Directional offsets relative to the trigger.
    pub offsets: Offsets,
    /// Border, if enabled.
    pub border: Option<Border>,
}

/// A headless popover anchored to a trigger.
///
/// ## Lifecycle
///
/// 1) Create with [`Popover::new`], optionally install
///    [`Popover::with_on_visible_change`] and an external signal.
/// 2) After the trigger is laid out, call [`Popover::mount`] with its box and the document's
///    [`ListenerRegistry`].
/// 3) Forward pointer and click events, and call [`Popover::advance`] whenever the clock passes
///    [`Popover::next_deadline`].
/// 4) Read [`Popover::style`] to render the panel.
/// 5) Call [`Popover::unmount`] on teardown; this releases the document listener.
///
/// Time is a monotonic `u64` in milliseconds supplied by the host.
///
/// ## Controlled mode
///
/// When an external signal is present, internal interactions never change the visibility
/// state. They only report the intended value through the callback; the caller decides.
///
/// ```
/// use understory_popover::{ListenerRegistry, Popover, PopoverConfig, TriggerBox, VisibilityState};
///
/// let mut document = ListenerRegistry::new();
/// let mut popover = Popover::new(PopoverConfig::default());
/// popover.mount(TriggerBox::new(80.0, 30.0), &mut document, 0);
///
/// popover.on_pointer_enter(0);
/// popover.advance(200); // debounce elapsed: opening
/// assert_eq!(popover.state(), VisibilityState::Opening);
/// popover.advance(300); // fade-in applied
/// assert_eq!(popover.state(), VisibilityState::Visible);
/// assert_eq!(popover.style().opacity, 1.0);
/// ```
pub struct Popover {
    config: PopoverConfig,
    controller: VisibilityController,
    intents: IntentDebouncer,
    hover: HoverState,
    dimensions: DimensionObserver,
    sync: ExternalSync,
    dismissal: DismissalBinding,
    timers: TimerQueue<PopoverTask>,
    mounted: bool,
}

impl core::fmt::Debug for Popover {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Popover")
            .field("config", &self.config)
            .field("state", &self.controller.state())
            .field("mode", &self.sync.mode())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Default for Popover {
    fn default() -> Self {
        Self::new(PopoverConfig::default())
    }
}

impl Popover {
    /// Create an unmounted, uncontrolled popover.
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            config,
            controller: VisibilityController::new(),
            intents: IntentDebouncer::new(),
            hover: HoverState::new(),
            dimensions: DimensionObserver::new(),
            sync: ExternalSync::new(),
            dismissal: DismissalBinding::new(),
            timers: TimerQueue::new(),
            mounted: false,
        }
    }

    /// Install the visibility-change callback.
    #[must_use]
    pub fn with_on_visible_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.set_on_visible_change(Some(Box::new(callback)));
        self
    }

    /// Install or remove the visibility-change callback.
    pub fn set_on_visible_change(&mut self, callback: Option<Box<dyn FnMut(bool)>>) {
        self.sync.set_callback(callback);
    }

    /// Current configuration.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Replace the configuration for the next render pass.
    ///
    /// While mounted, switching to click mode binds the document listener if it is not held yet,
    /// and switching to hover mode releases it. Switching away from hover mode drops pending
    /// hover intents.
    pub fn set_config(&mut self, config: PopoverConfig, listeners: &mut ListenerRegistry) {
        if self.config.trigger_type.is_hover() && !config.trigger_type.is_hover() {
            self.intents.cancel(&mut self.timers);
        }
        self.config = config;
        if !self.mounted {
            return;
        }
        if config.trigger_type.is_click() {
            self.dismissal.acquire(listeners);
        } else {
            self.dismissal.release(listeners);
        }
    }

    /// Supply this render pass's external visibility signal.
    ///
    /// `Some(_)` makes the popover controlled; every change of the value drives the visibility
    /// state toward it. Before mount, the value is applied at [`Popover::mount`].
    pub fn set_external_visible(&mut self, signal: Option<bool>, now: u64) {
        if let Some(visible) = self.sync.observe(signal)
            && self.mounted
        {
            self.controller
                .apply_external(visible, now, &mut self.timers);
        }
    }

    /// Current control mode.
    pub fn control_mode(&self) -> ControlMode {
        self.sync.mode()
    }

    /// Mount the popover once its trigger has been laid out.
    ///
    /// The trigger box is recorded on the first mount only. In click mode, the document click
    /// listener is bound. A transition interrupted by an earlier unmount restarts from `now`,
    /// then the external signal (if any) is applied. Mounting an already mounted popover does
    /// nothing.
    pub fn mount(&mut self, trigger: TriggerBox, listeners: &mut ListenerRegistry, now: u64) {
        if self.mounted {
            return;
        }
        self.dimensions.observe(|| trigger);
        self.controller.revive(now, &mut self.timers);
        if self.config.trigger_type.is_click() {
            self.dismissal.acquire(listeners);
        }
        self.mounted = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(?trigger, trigger_type = %self.config.trigger_type, "popover: mounted");
        if let Some(visible) = self.sync.signal() {
            self.controller
                .apply_external(visible, now, &mut self.timers);
        }
    }

    /// Tear the popover down.
    ///
    /// Releases the document listener and disarms all deferred work; tasks already queued are
    /// discarded when they come due.
    pub fn unmount(&mut self, listeners: &mut ListenerRegistry) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.intents.cancel(&mut self.timers);
        self.controller.teardown(&mut self.timers);
        self.dismissal.release(listeners);
        self.hover.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!(pending = self.timers.len(), "popover: unmounted");
    }

    /// Whether the popover is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the popover currently holds a document click listener.
    pub fn is_listening(&self) -> bool {
        self.dismissal.is_bound()
    }

    /// Current visibility state.
    pub fn state(&self) -> VisibilityState {
        self.controller.state()
    }

    /// Whether the panel is fully visible.
    pub fn is_visible(&self) -> bool {
        self.controller.state() == VisibilityState::Visible
    }

    /// The measured trigger box, once mounted.
    pub fn trigger_box(&self) -> Option<TriggerBox> {
        self.dimensions.trigger_box()
    }

    /// Compute the panel's style record from the current state and configuration.
    ///
    /// Before the trigger is measured, offsets are computed against an empty box.
    pub fn style(&self) -> PanelStyle {
        let content_width: ContentWidth = self.config.content_width;
        let appearance = self.controller.state().appearance(content_width);
        let placement = panel_placement(
            self.config.alignment,
            self.dimensions.trigger_box().unwrap_or(TriggerBox::ZERO),
            self.config.show_border,
        );
        PanelStyle {
            width: appearance.width,
            height: appearance.height,
            opacity: appearance.opacity,
            offsets: placement.offsets,
            border: placement.border,
        }
    }

    /// When the host should next call [`Popover::advance`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Run every deferred task due at `now`, in deadline order.
    ///
    /// Returns the number of tasks that took effect.
    pub fn advance(&mut self, now: u64) -> usize {
        let mut applied = 0;
        while let Some(expired) = self.timers.pop_due(now) {
            let took_effect = match expired.payload {
                PopoverTask::Phase(task) => self.controller.complete(task),
                PopoverTask::Intent(task) => match self.intents.fire(expired.id, task) {
                    // Follow-up work is scheduled from the task's own deadline so a late
                    // `advance` still runs everything in order.
                    Some(intent) => self.apply_intent(intent, expired.deadline),
                    None => false,
                },
            };
            if took_effect {
                applied += 1;
            }
        }
        applied
    }

    /// The pointer entered the trigger or the panel. Ignored outside hover mode.
    pub fn on_pointer_enter(&mut self, now: u64) {
        if self.accepts_hover() {
            self.intents.on_enter(now, &mut self.timers);
        }
    }

    /// The pointer left the trigger or the panel. Ignored outside hover mode.
    pub fn on_pointer_leave(&mut self, now: u64) {
        if self.accepts_hover() {
            self.intents.on_leave(now, &mut self.timers);
        }
    }

    /// Report which part is under the pointer (for hosts that hit-test on move).
    pub fn update_hover(&mut self, hovered: Option<PopoverPart>, now: u64) {
        for event in self.hover.update(hovered) {
            match event {
                HoverEvent::Enter(_) => self.on_pointer_enter(now),
                HoverEvent::Leave(_) => self.on_pointer_leave(now),
            }
        }
    }

    /// Click on the trigger. Always stops propagation; toggles in click mode.
    pub fn on_trigger_click(&mut self, now: u64) -> Propagation {
        if !self.mounted || !self.config.trigger_type.is_click() {
            return Propagation::Stop;
        }
        let intended = match self.sync.mode() {
            ControlMode::Uncontrolled => self.controller.toggle(now, &mut self.timers),
            ControlMode::Controlled => !self.sync.signal().unwrap_or(false),
        };
        self.sync.report(intended);
        Propagation::Stop
    }

    /// Click on the panel. Always stops propagation.
    pub fn on_panel_click(&mut self) -> Propagation {
        Propagation::Stop
    }

    /// A click reached the document without being stopped.
    ///
    /// Closes the panel in click mode while the document listener is bound. Hover-mode popovers
    /// are unaffected.
    pub fn on_document_click(&mut self, now: u64) {
        if !self.mounted || !self.dismissal.is_bound() || !self.config.trigger_type.is_click() {
            return;
        }
        let closed = match self.sync.mode() {
            ControlMode::Uncontrolled => {
                self.controller.state().is_open_intent()
                    && self.controller.close(now, &mut self.timers)
            }
            ControlMode::Controlled => self.sync.signal() == Some(true),
        };
        if closed {
            self.sync.report(false);
        }
    }

    /// Route a click to the matching handler and, unless stopped, to the document listener.
    pub fn dispatch_click(&mut self, target: ClickTarget, now: u64) -> Propagation {
        let propagation = match target {
            ClickTarget::Trigger => self.on_trigger_click(now),
            ClickTarget::Panel => self.on_panel_click(),
            ClickTarget::Outside => Propagation::Continue,
        };
        if propagation == Propagation::Continue {
            self.on_document_click(now);
        }
        propagation
    }

    fn accepts_hover(&self) -> bool {
        self.mounted && self.config.trigger_type.is_hover()
    }

    fn apply_intent(&mut self, intent: Intent, now: u64) -> bool {
        if !self.accepts_hover() {
            return false;
        }
        let want = intent == Intent::Open;
        let changed = match self.sync.mode() {
            ControlMode::Uncontrolled => {
                if self.controller.state().is_open_intent() == want {
                    false
                } else if want {
                    self.controller.open(now, &mut self.timers)
                } else {
                    self.controller.close(now, &mut self.timers)
                }
            }
            ControlMode::Controlled => self.sync.signal() != Some(want),
        };
        if changed {
            self.sync.report(want);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlignmentMode, TriggerType};
    use crate::position::Px;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    const TRIGGER: TriggerBox = TriggerBox::new(80.0, 30.0);

    struct Harness {
        popover: Popover,
        document: ListenerRegistry,
        changes: Rc<RefCell<Vec<bool>>>,
    }

    impl Harness {
        fn new(config: PopoverConfig) -> Self {
            let changes = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&changes);
            let mut document = ListenerRegistry::new();
            let mut popover =
                Popover::new(config).with_on_visible_change(move |v| sink.borrow_mut().push(v));
            popover.mount(TRIGGER, &mut document, 0);
            Self {
                popover,
                document,
                changes,
            }
        }

        fn hover() -> Self {
            Self::new(PopoverConfig::default())
        }

        fn click() -> Self {
            Self::new(PopoverConfig::default().trigger_type(TriggerType::Click))
        }

        fn changes(&self) -> Vec<bool> {
            self.changes.borrow().clone()
        }
    }

    #[test]
    fn hover_opens_after_debounce_and_phase() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        assert_eq!(h.popover.next_deadline(), Some(200));
        assert_eq!(h.popover.advance(199), 0);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);

        assert_eq!(h.popover.advance(200), 1);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        let opening = h.popover.style();
        assert_eq!(opening.width, Length::Px(Px(200.0)));
        assert_eq!(opening.opacity, 0.0);

        assert_eq!(h.popover.advance(300), 1);
        assert!(h.popover.is_visible());
        assert_eq!(h.popover.style().opacity, 1.0);
        assert_eq!(h.changes(), [true]);
    }

    #[test]
    fn hover_enter_then_quick_leave_changes_nothing() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        h.popover.on_pointer_leave(150);
        h.popover.advance(10_000);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert!(h.changes().is_empty());
    }

    #[test]
    fn hover_gap_crossing_keeps_panel_open() {
        let mut h = Harness::hover();
        h.popover.update_hover(Some(PopoverPart::Trigger), 0);
        h.popover.advance(300);
        assert!(h.popover.is_visible());

        // Trigger → gap → panel within the quiet period.
        h.popover.update_hover(None, 1_000);
        h.popover.update_hover(Some(PopoverPart::Panel), 1_120);
        h.popover.advance(5_000);
        assert!(h.popover.is_visible());
        assert_eq!(h.changes(), [true]);
    }

    #[test]
    fn hover_leave_closes_with_fade_then_collapse() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        h.popover.advance(300);
        h.popover.on_pointer_leave(1_000);
        h.popover.advance(1_200);
        assert_eq!(h.popover.state(), VisibilityState::Closing);
        let closing = h.popover.style();
        assert_eq!(closing.opacity, 0.0);
        assert_eq!(closing.width, Length::Px(Px(200.0)));

        h.popover.advance(1_300);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.popover.style().width, Length::Px(Px(0.0)));
        assert_eq!(h.changes(), [true, false]);
    }

    #[test]
    fn late_advance_runs_debounce_and_phase_in_order() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        // One big jump covers the debounce (200) and the fade-in (300).
        assert_eq!(h.popover.advance(5_000), 2);
        assert!(h.popover.is_visible());
    }

    #[test]
    fn hover_events_ignored_in_click_mode() {
        let mut h = Harness::click();
        h.popover.on_pointer_enter(0);
        assert_eq!(h.popover.next_deadline(), None);
        h.popover.advance(1_000);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
    }

    #[test]
    fn click_toggles_once_per_click() {
        let mut h = Harness::click();
        assert_eq!(h.popover.on_trigger_click(0), Propagation::Stop);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        h.popover.advance(100);
        assert!(h.popover.is_visible());

        assert_eq!(h.popover.on_trigger_click(500), Propagation::Stop);
        assert_eq!(h.popover.state(), VisibilityState::Closing);
        h.popover.advance(600);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.changes(), [true, false]);
    }

    #[test]
    fn outside_click_closes_exactly_once() {
        let mut h = Harness::click();
        h.popover.dispatch_click(ClickTarget::Trigger, 0);
        h.popover.advance(100);

        assert_eq!(
            h.popover.dispatch_click(ClickTarget::Panel, 200),
            Propagation::Stop
        );
        assert!(h.popover.is_visible());

        assert_eq!(
            h.popover.dispatch_click(ClickTarget::Outside, 300),
            Propagation::Continue
        );
        assert_eq!(h.popover.state(), VisibilityState::Closing);
        h.popover.dispatch_click(ClickTarget::Outside, 350);
        h.popover.advance(1_000);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.changes(), [true, false]);
    }

    #[test]
    fn outside_click_ignored_in_hover_mode() {
        let mut h = Harness::hover();
        assert!(!h.popover.is_listening());
        assert!(h.document.is_empty());
        h.popover.on_pointer_enter(0);
        h.popover.advance(300);
        h.popover.dispatch_click(ClickTarget::Outside, 400);
        assert!(h.popover.is_visible());
    }

    #[test]
    fn click_mode_binds_once_and_unbinds_on_unmount() {
        let mut h = Harness::click();
        assert_eq!(h.document.len(), 1);
        h.popover.mount(TRIGGER, &mut h.document, 10);
        assert_eq!(h.document.len(), 1);

        h.popover.unmount(&mut h.document);
        assert!(h.document.is_empty());
        assert!(!h.popover.is_listening());
        h.popover.unmount(&mut h.document);
        assert!(h.document.is_empty());

        // Remount binds a fresh listener, still only one.
        h.popover.mount(TriggerBox::new(1.0, 1.0), &mut h.document, 20);
        assert_eq!(h.document.len(), 1);
        // The first measurement sticks.
        assert_eq!(h.popover.trigger_box(), Some(TRIGGER));
    }

    #[test]
    fn teardown_discards_scheduled_work() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        h.popover.advance(200);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        let before = h.popover.style();

        h.popover.unmount(&mut h.document);
        assert_eq!(h.popover.advance(10_000), 0);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        assert_eq!(h.popover.style(), before);
        assert_eq!(h.changes(), [true]);

        // Events after teardown are ignored.
        h.popover.on_pointer_enter(10_000);
        h.popover.dispatch_click(ClickTarget::Trigger, 10_000);
        assert_eq!(h.popover.next_deadline(), None);
    }

    #[test]
    fn controlled_signal_forces_visible() {
        let mut h = Harness::hover();
        h.popover.set_external_visible(Some(true), 0);
        assert_eq!(h.popover.control_mode(), ControlMode::Controlled);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        h.popover.advance(100);
        assert!(h.popover.is_visible());
        assert!(h.changes().is_empty());

        h.popover.set_external_visible(Some(false), 200);
        h.popover.advance(300);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
    }

    #[test]
    fn controlled_signal_before_mount_applies_at_mount() {
        let mut document = ListenerRegistry::new();
        let mut popover = Popover::default();
        popover.set_external_visible(Some(true), 0);
        assert_eq!(popover.state(), VisibilityState::Hidden);
        popover.mount(TRIGGER, &mut document, 5);
        assert_eq!(popover.state(), VisibilityState::Opening);
        popover.advance(105);
        assert!(popover.is_visible());
    }

    #[test]
    fn controlled_click_only_requests() {
        let mut h = Harness::click();
        h.popover.set_external_visible(Some(false), 0);
        h.popover.on_trigger_click(10);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.popover.next_deadline(), None);
        assert_eq!(h.changes(), [true]);

        // The caller accepts the request on its next render.
        h.popover.set_external_visible(Some(true), 20);
        h.popover.advance(120);
        assert!(h.popover.is_visible());

        h.popover.dispatch_click(ClickTarget::Outside, 200);
        assert!(h.popover.is_visible());
        assert_eq!(h.changes(), [true, false]);
    }

    #[test]
    fn controlled_hover_only_requests() {
        let mut h = Harness::hover();
        h.popover.set_external_visible(Some(false), 0);
        h.popover.on_pointer_enter(0);
        h.popover.advance(1_000);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.changes(), [true]);
    }

    #[test]
    fn style_reflects_alignment_and_border() {
        let config = PopoverConfig::default()
            .alignment(AlignmentMode::Right)
            .show_border(false);
        let h = Harness::new(config);
        let style = h.popover.style();
        assert_eq!(style.offsets.left, Some(Px(80.0)));
        assert_eq!(style.offsets.bottom, Some(Px(15.0)));
        assert_eq!(style.border, None);
        assert_eq!(style.width, Length::Px(Px(0.0)));
        // Pure: asking twice yields the same record.
        assert_eq!(h.popover.style(), style);
    }

    #[test]
    fn switching_to_click_binds_listener() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        let config = PopoverConfig::default().trigger_type(TriggerType::Click);
        h.popover.set_config(config, &mut h.document);
        assert!(h.popover.is_listening());
        assert_eq!(h.document.len(), 1);
        // The pending hover intent was dropped.
        assert_eq!(h.popover.next_deadline(), None);
        h.popover.set_config(config, &mut h.document);
        assert_eq!(h.document.len(), 1);

        // And back to hover: the listener goes away.
        h.popover.set_config(PopoverConfig::default(), &mut h.document);
        assert!(!h.popover.is_listening());
        assert!(h.document.is_empty());
        h.popover.dispatch_click(ClickTarget::Outside, 10);
        assert!(h.changes().is_empty());
    }

    #[test]
    fn config_change_while_unmounted_binds_at_mount() {
        let mut document = ListenerRegistry::new();
        let mut popover = Popover::default();
        let config = PopoverConfig::default().trigger_type(TriggerType::Click);
        popover.set_config(config, &mut document);
        assert!(document.is_empty());
        popover.mount(TRIGGER, &mut document, 0);
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn remount_mid_opening_finishes_opening() {
        let mut h = Harness::hover();
        h.popover.on_pointer_enter(0);
        h.popover.advance(200);
        assert_eq!(h.popover.state(), VisibilityState::Opening);
        h.popover.unmount(&mut h.document);

        h.popover.mount(TRIGGER, &mut h.document, 1_000);
        assert_eq!(h.popover.next_deadline(), Some(1_100));
        h.popover.on_pointer_enter(1_000);
        h.popover.advance(10_000);
        assert!(h.popover.is_visible());
        assert_eq!(h.popover.style().opacity, 1.0);
        assert_eq!(h.changes(), [true]);
    }

    #[test]
    fn remount_mid_closing_finishes_closing() {
        let mut h = Harness::click();
        h.popover.on_trigger_click(0);
        h.popover.advance(100);
        h.popover.on_trigger_click(200);
        assert_eq!(h.popover.state(), VisibilityState::Closing);
        h.popover.unmount(&mut h.document);

        h.popover.mount(TRIGGER, &mut h.document, 1_000);
        h.popover.advance(1_100);
        assert_eq!(h.popover.state(), VisibilityState::Hidden);
        assert_eq!(h.popover.style().width, Length::Px(Px(0.0)));
    }

    #[test]
    fn controlled_remount_mid_opening_reaches_signal() {
        let mut document = ListenerRegistry::new();
        let mut popover = Popover::default();
        popover.set_external_visible(Some(true), 0);
        popover.mount(TRIGGER, &mut document, 0);
        assert_eq!(popover.state(), VisibilityState::Opening);
        popover.unmount(&mut document);

        popover.mount(TRIGGER, &mut document, 500);
        popover.advance(10_000);
        assert!(popover.is_visible());
        assert_eq!(popover.style().opacity, 1.0);
    }

    #[test]
    fn controlled_remount_mid_closing_follows_new_signal() {
        let mut document = ListenerRegistry::new();
        let mut popover = Popover::default();
        popover.set_external_visible(Some(true), 0);
        popover.mount(TRIGGER, &mut document, 0);
        popover.advance(100);
        popover.set_external_visible(Some(false), 200);
        assert_eq!(popover.state(), VisibilityState::Closing);
        popover.unmount(&mut document);

        // The caller flips the signal back while the popover is unmounted.
        popover.set_external_visible(Some(true), 300);
        popover.mount(TRIGGER, &mut document, 400);
        assert_eq!(popover.state(), VisibilityState::Opening);
        popover.advance(10_000);
        assert!(popover.is_visible());

        // And a closing remount with an unchanged signal still lands on hidden.
        popover.set_external_visible(Some(false), 11_000);
        popover.unmount(&mut document);
        popover.mount(TRIGGER, &mut document, 12_000);
        popover.advance(20_000);
        assert_eq!(popover.state(), VisibilityState::Hidden);
    }
}
