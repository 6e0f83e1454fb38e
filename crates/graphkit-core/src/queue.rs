//! Minimum-priority queue with in-place priority updates
//!
//! An indexed binary heap: heap nodes live in a `Vec`, and an arena of slots
//! records where each queued item currently sits. A [`Handle`] names a slot,
//! so it stays valid while other items are pushed or popped, and a
//! generation counter makes handles of popped items fail instead of
//! aliasing a reused slot.

use crate::error::{GraphError, Result};
use std::cmp::Ordering;

/// Stable reference to an item inside a [`PriorityQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u32,
}

#[derive(Debug)]
struct HeapNode<T> {
    value: T,
    priority: f64,
    /// Insertion counter; breaks priority ties in FIFO order
    sequence: u64,
    slot: usize,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    position: Option<usize>,
}

/// A minimum priority queue over `(value, priority)` pairs.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<HeapNode<T>>,
    slots: Vec<Slot>,
    free: Vec<usize>,
    next_sequence: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a value and return a handle for later priority updates.
    pub fn push(&mut self, value: T, priority: f64) -> Handle {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };

        let position = self.heap.len();
        self.heap.push(HeapNode {
            value,
            priority,
            sequence: self.next_sequence,
            slot,
        });
        self.next_sequence += 1;
        self.slots[slot].position = Some(position);
        self.sift_up(position);

        Handle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Remove and return the item with the smallest priority.
    pub fn pop_min(&mut self) -> Result<(T, f64)> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap_nodes(0, last);
        let Some(node) = self.heap.pop() else {
            return Err(GraphError::EmptyQueue);
        };
        self.release(node.slot);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((node.value, node.priority))
    }

    /// Smallest item without removing it
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.first().map(|node| (&node.value, node.priority))
    }

    /// Whether the handle still refers to a queued item
    pub fn contains(&self, handle: Handle) -> bool {
        self.position(handle).is_ok()
    }

    /// Current priority of a queued item
    pub fn priority(&self, handle: Handle) -> Result<f64> {
        let position = self.position(handle)?;
        Ok(self.heap[position].priority)
    }

    /// Replace a queued item's value and priority, restoring heap order.
    ///
    /// Works for both increases and decreases of the priority.
    pub fn update_priority(&mut self, handle: Handle, value: T, priority: f64) -> Result<()> {
        let position = self.position(handle)?;
        let node = &mut self.heap[position];
        node.value = value;
        node.priority = priority;

        let position = self.sift_up(position);
        self.sift_down(position);
        Ok(())
    }

    fn position(&self, handle: Handle) -> Result<usize> {
        self.slots
            .get(handle.slot)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.position)
            .ok_or(GraphError::InvalidHandle)
    }

    fn release(&mut self, slot: usize) {
        let entry = &mut self.slots[slot];
        entry.position = None;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        a.priority
            .total_cmp(&b.priority)
            .then_with(|| a.sequence.cmp(&b.sequence))
            == Ordering::Less
    }

    /// Move the node at `position` towards the root; returns its final position.
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.less(position, parent) {
                self.swap_nodes(position, parent);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == position {
                break;
            }
            self.swap_nodes(position, smallest);
            position = smallest;
        }
    }

    /// Swap two heap nodes and update the slot positions.
    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let slot_a = self.heap[a].slot;
        let slot_b = self.heap[b].slot;
        self.slots[slot_a].position = Some(a);
        self.slots[slot_b].position = Some(b);
    }
}
