// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Deferred: cancellable deferred work for single-threaded UI loops.
//!
//! Widgets that run multi-step transitions (fade out, then start spinning,
//! then notify) need to drop a step when a newer transition supersedes it.
//! This crate provides three small pieces for that:
//! - [`CancelToken`]: a shared flag checked when the work executes, plus an
//!   id that distinguishes one work item from the next.
//! - [`PendingSlot`]: holds at most one live item; starting a new one cancels
//!   the previous.
//! - [`DeferredQueue`]: items ordered by due timestamp, popped by the host
//!   loop as time advances, with cancelled items discarded on the way out.
//!
//! Nothing here owns a clock or spawns anything. Timestamps are milliseconds
//! supplied by the caller.
//!
//! ```rust
//! use tactile_deferred::{DeferredQueue, PendingSlot};
//!
//! let mut slot = PendingSlot::new();
//! let mut queue = DeferredQueue::new();
//!
//! // A "show" transition is scheduled, then superseded by "hide" in the same tick.
//! let show = slot.begin();
//! queue.schedule_with(200, show, "show done");
//! let hide = slot.begin();
//! queue.schedule_with(200, hide, "hide done");
//!
//! let mut ran = Vec::new();
//! while let Some(item) = queue.pop_due(200) {
//!     if slot.finish(&item.token) {
//!         ran.push(item.payload);
//!     }
//! }
//! assert_eq!(ran, ["hide done"]);
//! assert!(!slot.is_pending());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod slot;
mod token;

pub use queue::{Deferred, DeferredQueue};
pub use slot::PendingSlot;
pub use token::CancelToken;
