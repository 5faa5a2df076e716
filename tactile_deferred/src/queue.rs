// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};

use crate::CancelToken;

/// A work item whose due time has arrived.
#[derive(Debug)]
pub struct Deferred<T> {
    /// Timestamp the item was scheduled for.
    pub due: u64,
    /// Token the item was scheduled with.
    pub token: CancelToken,
    /// The scheduled payload.
    pub payload: T,
}

#[derive(Debug)]
struct Entry<T> {
    key: Reverse<(u64, u64)>,
    item: Deferred<T>,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Time-ordered queue of cancellable work.
///
/// Items come out in due order, ties in scheduling order. Cancellation is
/// checked when an item is popped, so cancelling a token after scheduling is
/// enough to suppress the work.
///
/// ```
/// use tactile_deferred::DeferredQueue;
///
/// let mut queue = DeferredQueue::new();
/// let fade = queue.schedule(200, "fade");
/// queue.schedule(100, "spin");
/// fade.cancel();
///
/// assert_eq!(queue.pop_due(150).map(|d| d.payload), Some("spin"));
/// assert!(queue.pop_due(250).is_none());
/// assert!(queue.is_idle());
/// ```
#[derive(Debug)]
pub struct DeferredQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> DeferredQueue<T> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` for `due` under a fresh token.
    pub fn schedule(&mut self, due: u64, payload: T) -> CancelToken {
        let token = CancelToken::new(self.seq);
        self.schedule_with(due, token.clone(), payload);
        token
    }

    /// Schedule `payload` for `due` guarded by an existing token.
    pub fn schedule_with(&mut self, due: u64, token: CancelToken, payload: T) {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        self.heap.push(Entry {
            key: Reverse((due, seq)),
            item: Deferred {
                due,
                token,
                payload,
            },
        });
    }

    /// Remove and return the earliest live item due at or before `now`.
    ///
    /// Cancelled items met on the way are discarded.
    pub fn pop_due(&mut self, now: u64) -> Option<Deferred<T>> {
        while self.heap.peek().is_some_and(|e| e.item.due <= now) {
            let entry = self.heap.pop()?;
            if entry.item.token.is_cancelled() {
                log::debug!(
                    "deferred work {} skipped: cancelled",
                    entry.item.token.id()
                );
                continue;
            }
            return Some(entry.item);
        }
        None
    }

    /// Remove every live item due at or before `now`, in due order.
    pub fn drain_due(&mut self, now: u64) -> Vec<Deferred<T>> {
        let mut out = Vec::new();
        while let Some(item) = self.pop_due(now) {
            out.push(item);
        }
        out
    }

    /// Due time of the earliest live item, discarding cancelled items at the front.
    pub fn next_due(&mut self) -> Option<u64> {
        while let Some(entry) = self.heap.peek() {
            if !entry.item.token.is_cancelled() {
                return Some(entry.item.due);
            }
            self.heap.pop();
        }
        None
    }

    /// Number of scheduled items, including cancelled ones not yet discarded.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether no live item remains.
    pub fn is_idle(&self) -> bool {
        self.heap.iter().all(|e| e.item.token.is_cancelled())
    }

    /// Cancel and drop everything.
    pub fn clear(&mut self) {
        for entry in self.heap.drain() {
            entry.item.token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pops_in_due_then_schedule_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(30, 'c');
        queue.schedule(10, 'a');
        queue.schedule(30, 'd');
        queue.schedule(20, 'b');

        let order: Vec<char> = queue.drain_due(100).into_iter().map(|d| d.payload).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert!(queue.is_empty());
    }

    #[test]
    fn nothing_pops_before_due() {
        let mut queue = DeferredQueue::new();
        queue.schedule(50, ());
        assert!(queue.pop_due(49).is_none());
        assert_eq!(queue.next_due(), Some(50));
        assert!(queue.pop_due(50).is_some());
    }

    #[test]
    fn cancellation_is_checked_at_execution() {
        let mut queue = DeferredQueue::new();
        let token = queue.schedule(10, "stale");
        queue.schedule(20, "fresh");
        assert!(!queue.is_idle());

        token.cancel();
        assert_eq!(queue.next_due(), Some(20), "cancelled head is discarded");
        let due = queue.drain_due(20);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].payload, "fresh");
    }

    #[test]
    fn shared_token_cancels_several_items() {
        let mut queue = DeferredQueue::new();
        let token = CancelToken::new(99);
        queue.schedule_with(5, token.clone(), 1);
        queue.schedule_with(6, token.clone(), 2);
        assert_eq!(queue.len(), 2);
        token.cancel();
        assert!(queue.is_idle());
        assert!(queue.pop_due(10).is_none());
    }

    #[test]
    fn clear_cancels_outstanding_tokens() {
        let mut queue = DeferredQueue::new();
        let token = queue.schedule(5, 0_u8);
        queue.clear();
        assert!(token.is_cancelled());
        assert!(queue.is_empty());
    }
}
