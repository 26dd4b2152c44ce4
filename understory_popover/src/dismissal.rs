// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-click dismissal: the document-wide click listener and click propagation.
//!
//! ## Listener lifecycle
//!
//! A click-mode popover closes when the user clicks anywhere that is not its trigger or panel.
//! In a DOM this is a listener on the document. Here the document's listener table is a
//! [`ListenerRegistry`] owned by the host (one per document or window), and each popover holds
//! its registration in a [`DismissalBinding`]:
//!
//! - [`DismissalBinding::acquire`] registers at most once, however often it is called.
//! - [`DismissalBinding::release`] unregisters exactly once; later calls are no-ops.
//!
//! A registration is owned by exactly one binding. [`ListenerId`]s are generational, so a
//! released id can never unregister a listener that later reused its slot.
//!
//! ## Propagation
//!
//! Clicks on the trigger and on the panel stop propagation
//! ([`Propagation::Stop`]) so they never reach the document listener. Hosts that route clicks
//! themselves should only call
//! [`Popover::on_document_click`](crate::Popover::on_document_click) for clicks that were not
//! stopped; [`Popover::dispatch_click`](crate::Popover::dispatch_click) does this routing for a
//! single popover.
//!
//! ```
//! use understory_popover::dismissal::{DismissalBinding, ListenerRegistry};
//!
//! let mut document = ListenerRegistry::new();
//! let mut binding = DismissalBinding::new();
//!
//! assert!(binding.acquire(&mut document));
//! assert!(!binding.acquire(&mut document)); // no double registration
//! assert_eq!(document.len(), 1);
//!
//! assert!(binding.release(&mut document));
//! assert!(!binding.release(&mut document));
//! assert!(document.is_empty());
//! ```

use alloc::vec::Vec;

/// Handle for a registered document click listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u32, u32);

impl ListenerId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct ListenerSlot {
    generation: u32,
    bound: bool,
}

/// The document's table of outside-click listeners.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    slots: Vec<ListenerSlot>,
    free: Vec<u32>,
    bound: usize,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            bound: 0,
        }
    }

    /// Number of bound listeners.
    pub fn len(&self) -> usize {
        self.bound
    }

    /// Whether no listener is bound.
    pub fn is_empty(&self) -> bool {
        self.bound == 0
    }

    /// Register a new listener.
    pub fn bind(&mut self) -> ListenerId {
        self.bound += 1;
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.bound = true;
                ListenerId(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
                self.slots.push(ListenerSlot {
                    generation: 1,
                    bound: true,
                });
                ListenerId(idx, 1)
            }
        }
    }

    /// Unregister a listener. Returns `false` if it was not bound (or the id is stale).
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        if !self.is_bound(id) {
            return false;
        }
        self.slots[id.idx()].bound = false;
        self.free.push(id.0);
        self.bound -= 1;
        true
    }

    /// Whether `id` is currently bound.
    pub fn is_bound(&self, id: ListenerId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|s| s.bound && s.generation == id.1)
    }
}

/// A popover's ownership of its document click listener.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DismissalBinding {
    listener: Option<ListenerId>,
}

impl DismissalBinding {
    /// Create an unbound binding.
    pub const fn new() -> Self {
        Self { listener: None }
    }

    /// The registration, if bound.
    pub const fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Whether the binding currently holds a registration.
    pub const fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    /// Register with `registry` unless already registered. Returns whether a listener was bound.
    pub fn acquire(&mut self, registry: &mut ListenerRegistry) -> bool {
        if self.listener.is_some() {
            return false;
        }
        let id = registry.bind();
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, "popover: bound document click listener");
        self.listener = Some(id);
        true
    }

    /// Unregister from `registry`. Returns whether a listener was unbound.
    pub fn release(&mut self, registry: &mut ListenerRegistry) -> bool {
        let Some(id) = self.listener.take() else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, "popover: unbound document click listener");
        registry.unbind(id)
    }
}

/// Where a click landed, from the popover's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The trigger element.
    Trigger,
    /// The floating panel.
    Panel,
    /// Anywhere else in the document.
    Outside,
}

/// Whether a click continues to bubble toward the document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// Keep bubbling.
    Continue,
    /// Stop; the document listener must not see this click.
    Stop,
}
