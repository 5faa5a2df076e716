// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared cancellation flag for one piece of deferred work.
///
/// Clones share the flag: cancelling any clone cancels them all. Each token
/// also carries an id so owners can tell "the current work item" apart from
/// a superseded one without comparing closures or pointers.
#[derive(Clone, Debug)]
pub struct CancelToken {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// A live token with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Identifier assigned when the token was created.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Cancel the work this token guards. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Whether two tokens guard the same work item.
    pub fn same_work(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}
