//! Min-priority queue with lazy deletion
//!
//! Superseded entries are never removed eagerly. They stay in the heap and
//! callers drop them on extraction by checking the popped priority against
//! their authoritative state (`pop_fresh`).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heap entry ordered by priority, then by push order
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority).is_eq() && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap of `(priority, item)` pairs. Equal priorities pop in push order.
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            item,
        }));
    }

    /// Extract the minimum entry, stale or not
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }

    /// Extract the minimum entry that `is_stale` does not reject.
    /// Rejected entries are discarded; `on_stale` is called for each.
    pub fn pop_fresh<F, S>(&mut self, mut is_stale: F, mut on_stale: S) -> Option<(f64, T)>
    where
        F: FnMut(f64, &T) -> bool,
        S: FnMut(),
    {
        while let Some((priority, item)) = self.pop() {
            if is_stale(priority, &item) {
                on_stale();
                continue;
            }
            return Some((priority, item));
        }
        None
    }

    /// Entries held, including stale ones
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_entry_ordering() {
        let entry1 = HeapEntry {
            priority: 1.0,
            seq: 0,
            item: "A",
        };
        let entry2 = HeapEntry {
            priority: 2.0,
            seq: 1,
            item: "B",
        };
        let entry3 = HeapEntry {
            priority: 1.0,
            seq: 2,
            item: "C",
        };

        assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
        assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

        // Equal priorities fall back to push order
        assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

        assert_eq!(entry1, entry1.clone());
        assert_ne!(entry1, entry2);
    }

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = MinQueue::new();
        queue.push(5.0, 'e');
        queue.push(1.0, 'a');
        queue.push(3.0, 'c');
        queue.push(-2.0, 'z');

        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, vec![(-2.0, 'z'), (1.0, 'a'), (3.0, 'c'), (5.0, 'e')]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_pop_in_push_order() {
        let mut queue = MinQueue::with_capacity(4);
        for item in ["first", "second", "third"] {
            queue.push(7.0, item);
        }
        assert_eq!(queue.pop(), Some((7.0, "first")));
        assert_eq!(queue.pop(), Some((7.0, "second")));
        assert_eq!(queue.pop(), Some((7.0, "third")));
    }

    #[test]
    fn test_pop_fresh_skips_superseded_entries() {
        // Node 0 was pushed at 10.0, then improved to 4.0
        let best = [4.0, 6.0];
        let mut queue = MinQueue::new();
        queue.push(10.0, 0usize);
        queue.push(6.0, 1usize);
        queue.push(4.0, 0usize);

        let mut stale = 0;
        let mut fresh = Vec::new();
        while let Some(entry) = queue.pop_fresh(|p, &node| p > best[node], || stale += 1) {
            fresh.push(entry);
        }

        assert_eq!(fresh, vec![(4.0, 0), (6.0, 1)]);
        assert_eq!(stale, 1);
    }
}
