// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use tactile_ripple::{RippleFrame, RippleLayer};

/// A control that owns a [`RippleLayer`] and forwards its bounds and touch stream to it.
///
/// Every method except the two accessors has a forwarding default. Controls
/// with extra touch behavior (tap recognition, selection) override the touch
/// methods and call back into the layer themselves.
///
/// Style changes go through [`ripple_mut`](Self::ripple_mut) and take effect
/// immediately.
pub trait RippleHost {
    /// The control's ripple layer.
    fn ripple(&self) -> &RippleLayer;

    /// Mutable access to the control's ripple layer.
    fn ripple_mut(&mut self) -> &mut RippleLayer;

    /// Whether touches are currently accepted.
    fn interaction_enabled(&self) -> bool {
        true
    }

    /// A touch started at `point`. Returns `true` if feedback started.
    fn touch_began(&mut self, point: Point, now: u64) -> bool {
        if !self.interaction_enabled() {
            return false;
        }
        self.ripple_mut().touch_down(point, now)
    }

    /// A held touch moved.
    fn touch_moved(&mut self, point: Point) {
        self.ripple_mut().touch_move(point);
    }

    /// A touch was lifted at `point`.
    ///
    /// Returns `true` if the release activates the control. The default treats
    /// a release of a held touch inside the host's bounds as an activation.
    fn touch_ended(&mut self, point: Point, now: u64) -> bool {
        let released = self.ripple_mut().touch_up(now);
        released && self.ripple().size().to_rect().contains(point)
    }

    /// The touch was taken away by the system. Never activates.
    fn touch_cancelled(&mut self, now: u64) {
        self.ripple_mut().touch_cancel(now);
    }

    /// The control's bounds changed.
    fn resize(&mut self, size: Size) {
        self.ripple_mut().resize(size);
    }

    /// Sample the ripple at `now`.
    fn ripple_frame(&self, now: u64) -> RippleFrame {
        self.ripple().frame(now)
    }
}
