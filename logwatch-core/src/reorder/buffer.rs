use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

pub const DEFAULT_REORDER_DEPTH: usize = 50;

/// Anything that can be placed on the simulated time axis.
pub trait Timestamped {
    /// Unix timestamp, second resolution.
    fn timestamp(&self) -> i64;
}

/// Heap slot ordered by `(timestamp, seq)`; `seq` keeps equal timestamps in arrival order.
struct Slot<T> {
    timestamp: i64,
    seq: u64,
    item: T,
}

impl<T> Slot<T> {
    fn key(&self) -> (i64, u64) {
        (self.timestamp, self.seq)
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Slot<T> {}

impl<T> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority delay line of fixed depth.
///
/// Nothing is released until `depth` records are held. From then on, every insert releases
/// exactly one record, the earliest one held (the record just inserted included). Once the
/// input is exhausted, [`drain`](Self::drain) flushes the rest in timestamp order.
///
/// A depth of zero disables reordering: every insert is released immediately.
pub struct ReorderBuffer<T> {
    heap: BinaryHeap<Reverse<Slot<T>>>,
    depth: usize,
    next_seq: u64,
}

impl<T: Timestamped> ReorderBuffer<T> {
    pub fn new(depth: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(depth + 1),
            depth,
            next_seq: 0,
        }
    }

    pub fn insert(&mut self, item: T) -> Option<T> {
        let slot = Slot {
            timestamp: item.timestamp(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(slot));

        if self.heap.len() > self.depth {
            self.drain()
        } else {
            None
        }
    }

    /// Removes and returns the earliest record held, regardless of occupancy.
    pub fn drain(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(slot)| slot.item)
    }

    /// Timestamp of the record that would be released next.
    pub fn peek_timestamp(&self) -> Option<i64> {
        self.heap.peek().map(|Reverse(slot)| slot.timestamp)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
