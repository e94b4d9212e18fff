//! Indexed binary min-heap with decrease-key.
//!
//! The heap stores `(key, external index)` pairs and keeps an
//! index→slot position map updated on every swap, so `decrease_key`
//! locates its element in O(1) and the whole operation is O(log n)
//! with no linear scan.
//!
//! Two properties matter for the MST phases built on top:
//!
//! - **Decrease-key sifts up only.** A key only ever gets smaller, so the
//!   element can only move toward the root; a downward fix-up is never
//!   needed and attempting one would mask ordering bugs.
//! - **Deterministic tie-break.** Equal keys order by the lower external
//!   index, so identical inputs always produce identical extraction
//!   order (and therefore identical MSTs and clusters).

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug)]
struct HeapSlot {
    key: f64,
    index: usize,
}

impl HeapSlot {
    /// Strict ordering with the index tie-break.
    #[inline]
    fn precedes(self, other: HeapSlot) -> bool {
        self.key < other.key || (self.key == other.key && self.index < other.index)
    }
}

/// Binary min-heap over `(key, external index)` pairs.
///
/// Capacity is fixed at construction; external indices must lie in
/// `0..capacity` and each may be present at most once.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<HeapSlot>,
    /// External index → slot position, `None` while not in the heap.
    pos: Vec<Option<usize>>,
    capacity: usize,
}

impl IndexedMinHeap {
    /// Create an empty heap holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
            capacity,
        }
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if `external_index` is currently in the heap.
    pub fn contains(&self, external_index: usize) -> bool {
        self.pos.get(external_index).copied().flatten().is_some()
    }

    /// Current key of `external_index`, if it is in the heap.
    pub fn key_of(&self, external_index: usize) -> Option<f64> {
        let slot = self.pos.get(external_index).copied().flatten()?;
        Some(self.slots[slot].key)
    }

    /// The minimum `(key, external index)` without removing it.
    pub fn peek(&self) -> Option<(f64, usize)> {
        self.slots.first().map(|s| (s.key, s.index))
    }

    /// Insert an element. O(log n).
    pub fn insert(&mut self, key: f64, external_index: usize) -> Result<()> {
        if self.slots.len() == self.capacity {
            return Err(Error::HeapFull {
                capacity: self.capacity,
            });
        }
        if external_index >= self.capacity {
            return Err(Error::IndexOutOfBounds {
                index: external_index,
                len: self.capacity,
            });
        }
        if self.pos[external_index].is_some() {
            return Err(Error::InvalidParameter {
                name: "external_index",
                message: "already in heap",
            });
        }

        let slot = self.slots.len();
        self.slots.push(HeapSlot {
            key,
            index: external_index,
        });
        self.pos[external_index] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the minimum `(key, external index)`. O(log n).
    pub fn pop_min(&mut self) -> Result<(f64, usize)> {
        let root = *self.slots.first().ok_or(Error::HeapEmpty)?;

        let last = self.slots.len() - 1;
        self.swap(0, last);
        self.slots.pop();
        self.pos[root.index] = None;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Ok((root.key, root.index))
    }

    /// Lower the key of `external_index` to `new_key`. O(log n).
    ///
    /// The key must not increase: a decreased key can only move the
    /// element toward the root, so order is restored by sifting up only.
    pub fn decrease_key(&mut self, external_index: usize, new_key: f64) -> Result<()> {
        if self.slots.is_empty() {
            return Err(Error::HeapEmpty);
        }
        if external_index >= self.capacity {
            return Err(Error::IndexOutOfBounds {
                index: external_index,
                len: self.capacity,
            });
        }
        let slot = self.pos[external_index].ok_or(Error::InvalidParameter {
            name: "external_index",
            message: "not in heap",
        })?;
        if new_key > self.slots[slot].key {
            return Err(Error::InvalidParameter {
                name: "new_key",
                message: "must not exceed the current key",
            });
        }

        self.slots[slot].key = new_key;
        self.sift_up(slot);
        Ok(())
    }

    #[inline]
    fn parent(slot: usize) -> usize {
        (slot - 1) / 2
    }

    #[inline]
    fn left(slot: usize) -> usize {
        2 * slot + 1
    }

    #[inline]
    fn right(slot: usize) -> usize {
        2 * slot + 2
    }

    /// Swap two slots, keeping the position map in sync.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.pos[self.slots[a].index] = Some(a);
        self.pos[self.slots[b].index] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = Self::parent(slot);
            if !self.slots[slot].precedes(self.slots[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.slots.len();
        loop {
            let mut smallest = slot;
            let left = Self::left(slot);
            let right = Self::right(slot);
            if left < len && self.slots[left].precedes(self.slots[smallest]) {
                smallest = left;
            }
            if right < len && self.slots[right].precedes(self.slots[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
