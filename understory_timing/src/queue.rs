// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer queue: cancelable deadlines drained in order.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};

/// Identifier for a scheduled timer.
///
/// Consists of a slot index and a generation counter, the same scheme the box tree uses for
/// its node handles.
///
/// - On schedule, a free slot is taken (or a new one allocated) and its generation is bumped.
/// - When an entry fires or is canceled, its slot is freed and any outstanding `TimerId` for
///   it becomes stale.
/// - Stale identifiers never alias a newer entry because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(u32, u32);

impl TimerId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A timer that has reached its deadline, as returned by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle the entry was scheduled under.
    pub id: TimerId,
    /// Deadline the entry was scheduled for.
    pub deadline: u64,
    /// Payload supplied at scheduling time.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<(u64, T)>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct HeapKey {
    deadline: u64,
    seq: u64,
    id: TimerId,
}

impl Ord for HeapKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A queue of cancelable deadlines, each carrying a payload.
///
/// ## Usage
///
/// - [`TimerQueue::schedule`] / [`TimerQueue::schedule_after`] to add an entry.
/// - [`TimerQueue::cancel`] to withdraw it before it fires.
/// - [`TimerQueue::next_deadline`] to decide when the host should wake up next.
/// - [`TimerQueue::pop_due`] in a loop to drain everything due at the current time.
///
/// Cancellation is lazy in the underlying heap, but the head of the heap is always a live entry,
/// so [`TimerQueue::next_deadline`] is exact.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    heap: BinaryHeap<Reverse<HeapKey>>,
    next_seq: u64,
    live: usize,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            live: 0,
        }
    }

    /// Number of entries that have been scheduled and not yet fired or canceled.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no entry is pending.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Schedule `payload` to fire at the absolute time `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.entry = Some((deadline, payload));
                TimerId(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
                self.slots.push(Slot {
                    generation: 1,
                    entry: Some((deadline, payload)),
                });
                TimerId(idx, 1)
            }
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapKey { deadline, seq, id }));
        self.live += 1;
        id
    }

    /// Schedule `payload` to fire `delay` ticks after `now`.
    ///
    /// The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Whether `id` refers to an entry that has neither fired nor been canceled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.slot(id).is_some()
    }

    /// Deadline of a pending entry.
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.slot(id).map(|(deadline, _)| *deadline)
    }

    /// Cancel a pending entry, returning its payload.
    ///
    /// Returns `None` if the entry already fired, was canceled, or the id is stale.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.slot(id)?;
        let slot = &mut self.slots[id.idx()];
        let (_, payload) = slot.entry.take()?;
        self.free.push(id.0);
        self.live -= 1;
        self.prune();
        Some(payload)
    }

    /// Earliest deadline among pending entries.
    pub fn next_deadline(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(key)| key.deadline)
    }

    /// Remove and return the earliest entry whose deadline is at or before `now`.
    ///
    /// Call repeatedly to drain everything that is due; entries come out in deadline order, and
    /// in scheduling order among equal deadlines.
    pub fn pop_due(&mut self, now: u64) -> Option<Expired<T>> {
        let Reverse(key) = *self.heap.peek()?;
        if key.deadline > now {
            return None;
        }
        self.heap.pop();
        let slot = &mut self.slots[key.id.idx()];
        // The head is kept live by `prune`, so the entry is present.
        let (deadline, payload) = slot.entry.take()?;
        self.free.push(key.id.0);
        self.live -= 1;
        self.prune();
        Some(Expired {
            id: key.id,
            deadline,
            payload,
        })
    }

    /// Cancel every pending entry.
    ///
    /// All outstanding ids become stale.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                self.free.push(u32::try_from(idx).unwrap_or(u32::MAX));
            }
        }
        self.heap.clear();
        self.live = 0;
    }

    fn slot(&self, id: TimerId) -> Option<&(u64, T)> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entry.as_ref()
    }

    // Drop canceled keys sitting at the head of the heap.
    fn prune(&mut self) {
        while let Some(Reverse(key)) = self.heap.peek() {
            let slot = &self.slots[key.id.idx()];
            if slot.generation == key.id.1 && slot.entry.is_some() {
                break;
            }
            self.heap.pop();
        }
    }
}
