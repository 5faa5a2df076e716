// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::CancelToken;

/// Holds at most one live work item.
///
/// [`begin`](Self::begin) cancels whatever was pending before handing out a
/// fresh token, so a superseded item can never observe itself as live.
#[derive(Debug, Default)]
pub struct PendingSlot {
    next_id: u64,
    current: Option<CancelToken>,
}

impl PendingSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending item, if any, and start tracking a new one.
    pub fn begin(&mut self) -> CancelToken {
        if let Some(previous) = self.current.take() {
            previous.cancel();
            log::debug!("pending work {} superseded", previous.id());
        }
        let token = CancelToken::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(token.clone());
        token
    }

    /// Cancel the pending item. Returns `false` if nothing was pending.
    pub fn cancel(&mut self) -> bool {
        let Some(previous) = self.current.take() else {
            return false;
        };
        previous.cancel();
        log::debug!("pending work {} cancelled", previous.id());
        true
    }

    /// Whether an item is pending.
    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// The pending item's token.
    pub fn current(&self) -> Option<&CancelToken> {
        self.current.as_ref()
    }

    /// Whether `token` belongs to the pending item and has not been cancelled.
    pub fn is_current(&self, token: &CancelToken) -> bool {
        !token.is_cancelled() && self.current.as_ref().is_some_and(|c| c.same_work(token))
    }

    /// Mark the item guarded by `token` as done.
    ///
    /// Returns `true` only if `token` is still the live pending item; the
    /// caller runs the item's side effects exactly when this returns `true`.
    pub fn finish(&mut self, token: &CancelToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = None;
        true
    }
}
