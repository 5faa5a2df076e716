// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-up-inside recognition for pressable controls.
//!
//! A control activates when a touch that started on it is released "inside"
//! it. Controls are allowed to move, resize, or be re-laid out while a touch
//! is held (segments re-flow, a button swaps its title for a loader), so the
//! release is not required to land on the exact original target:
//!
//! 1. **Same target**: release over the pressed target always taps.
//! 2. **Retention area**: release elsewhere still taps the *pressed* target
//!    if it lands within [`TapState::retention`] of the pressed bounds, and
//!    the touch never strayed beyond that area while held.
//! 3. **No active press**: nothing to tap.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tactile_widgets::tap::{TapResult, TapState};
//!
//! let mut taps: TapState<usize> = TapState::new();
//! let segment = Rect::new(0.0, 0.0, 60.0, 30.0);
//!
//! // Press segment 0, release just past its right edge over segment 1.
//! taps.on_down(None, 0, segment);
//! let result = taps.on_up(None, Some(&1), Point::new(75.0, 15.0));
//! assert_eq!(result, TapResult::Tap(0));
//! ```
//!
//! Each pointer is tracked independently; `None` stands for the primary
//! pointer of a single-touch host.

use core::num::NonZeroU64;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Pointer identifier for tracking concurrent touches.
pub type PointerId = NonZeroU64;

const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Default distance a release may land outside the pressed bounds and still tap.
pub const DEFAULT_RETENTION: f64 = 70.0;

/// An active press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Target under the touch when it started.
    pub target: K,
    /// Bounds of the target when it was pressed.
    pub bounds: Rect,
    /// True once the touch has moved beyond the retention area.
    pub left_retention: bool,
}

/// Outcome of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapResult<K> {
    /// The pressed target was activated.
    Tap(K),
    /// No activation; carries the pressed target if there was one.
    Suppressed(Option<K>),
}

impl<K> TapResult<K> {
    /// Whether the release activated a target.
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Tap(_))
    }
}

/// Press tracking for touch-up-inside recognition.
#[derive(Clone, Debug)]
pub struct TapState<K> {
    presses: SmallVec<[(PointerId, Press<K>); 2]>,
    /// How far outside the pressed bounds a touch may travel and still tap.
    pub retention: f64,
}

impl<K: PartialEq + Clone> TapState<K> {
    /// Tap tracking with [`DEFAULT_RETENTION`].
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }

    /// Tap tracking with a custom retention distance. Negative distances act as zero.
    pub fn with_retention(retention: f64) -> Self {
        Self {
            presses: SmallVec::new(),
            retention: retention.max(0.0),
        }
    }

    fn retention_area(&self, bounds: Rect) -> Rect {
        let retention = self.retention.max(0.0);
        bounds.inflate(retention, retention)
    }

    fn index_of(&self, pointer: PointerId) -> Option<usize> {
        self.presses.iter().position(|(id, _)| *id == pointer)
    }

    /// Record a touch-down on `target`, replacing any press held by the same pointer.
    pub fn on_down(&mut self, pointer: Option<PointerId>, target: K, bounds: Rect) {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        let press = Press {
            target,
            bounds,
            left_retention: false,
        };
        match self.index_of(pointer) {
            Some(index) => self.presses[index].1 = press,
            None => self.presses.push((pointer, press)),
        }
    }

    /// Track a held touch.
    ///
    /// Returns the pressed target the first time the touch leaves the
    /// retention area, so the host can drop its pressed appearance.
    pub fn on_move(&mut self, pointer: Option<PointerId>, position: Point) -> Option<K> {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        let index = self.index_of(pointer)?;
        let area = self.retention_area(self.presses[index].1.bounds);
        let press = &mut self.presses[index].1;
        if press.left_retention || area.contains(position) {
            return None;
        }
        press.left_retention = true;
        Some(press.target.clone())
    }

    /// Resolve a release.
    ///
    /// `current_target` is whatever lies under the touch now, if anything.
    pub fn on_up(
        &mut self,
        pointer: Option<PointerId>,
        current_target: Option<&K>,
        position: Point,
    ) -> TapResult<K> {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        let Some(index) = self.index_of(pointer) else {
            return TapResult::Suppressed(None);
        };
        let (_, press) = self.presses.remove(index);

        if current_target == Some(&press.target) {
            return TapResult::Tap(press.target);
        }

        if press.left_retention || !self.retention_area(press.bounds).contains(position) {
            return TapResult::Suppressed(Some(press.target));
        }

        TapResult::Tap(press.target)
    }

    /// Drop the press held by a pointer. Returns `false` if there was none.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        match self.index_of(pointer) {
            Some(index) => {
                self.presses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether a pointer has an active press.
    pub fn is_pressed(&self, pointer: Option<PointerId>) -> bool {
        self.index_of(pointer.unwrap_or(PRIMARY_POINTER)).is_some()
    }

    /// Whether any pointer is pressing `target`.
    pub fn has_active_press(&self, target: &K) -> bool {
        self.presses.iter().any(|(_, press)| press.target == *target)
    }

    /// Drop every active press.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// The press held by a pointer.
    pub fn press(&self, pointer: Option<PointerId>) -> Option<&Press<K>> {
        let pointer = pointer.unwrap_or(PRIMARY_POINTER);
        self.presses
            .iter()
            .find(|(id, _)| *id == pointer)
            .map(|(_, press)| press)
    }

    /// All active presses.
    pub fn presses(&self) -> impl Iterator<Item = &Press<K>> {
        self.presses.iter().map(|(_, press)| press)
    }
}

impl<K: PartialEq + Clone> Default for TapState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);

    #[test]
    fn release_on_same_target_taps() {
        let mut taps: TapState<u32> = TapState::new();
        taps.on_down(None, 7, BOUNDS);
        assert!(taps.is_pressed(None));
        let result = taps.on_up(None, Some(&7), Point::new(12.0, 22.0));
        assert_eq!(result, TapResult::Tap(7));
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut taps: TapState<u32> = TapState::new();
        assert_eq!(
            taps.on_up(None, Some(&7), Point::new(1.0, 1.0)),
            TapResult::Suppressed(None)
        );
    }

    #[test]
    fn release_near_bounds_taps_pressed_target() {
        let mut taps: TapState<u32> = TapState::with_retention(20.0);
        taps.on_down(None, 7, BOUNDS);
        let result = taps.on_up(None, None, Point::new(115.0, 20.0));
        assert_eq!(result, TapResult::Tap(7));
    }

    #[test]
    fn release_far_from_bounds_is_suppressed() {
        let mut taps: TapState<u32> = TapState::with_retention(20.0);
        taps.on_down(None, 7, BOUNDS);
        let result = taps.on_up(None, Some(&8), Point::new(130.0, 20.0));
        assert_eq!(result, TapResult::Suppressed(Some(7)));
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn retention_edge_is_inclusive_of_inside_only() {
        let mut taps: TapState<u32> = TapState::with_retention(10.0);
        taps.on_down(None, 1, BOUNDS);
        // `Rect::contains` excludes the far edges.
        assert!(taps.on_up(None, None, Point::new(109.9, 20.0)).is_tap());
        taps.on_down(None, 1, BOUNDS);
        assert!(!taps.on_up(None, None, Point::new(110.0, 20.0)).is_tap());
    }

    #[test]
    fn leaving_retention_area_is_reported_once() {
        let mut taps: TapState<u32> = TapState::with_retention(10.0);
        taps.on_down(None, 3, BOUNDS);
        assert_eq!(taps.on_move(None, Point::new(105.0, 20.0)), None);
        assert_eq!(taps.on_move(None, Point::new(200.0, 20.0)), Some(3));
        assert_eq!(taps.on_move(None, Point::new(300.0, 20.0)), None);
        assert!(taps.press(None).unwrap().left_retention);
    }

    #[test]
    fn straying_suppresses_release_on_other_target() {
        let mut taps: TapState<u32> = TapState::with_retention(10.0);
        taps.on_down(None, 3, BOUNDS);
        taps.on_move(None, Point::new(200.0, 20.0));
        // Came back near the bounds, but over a neighbor.
        let result = taps.on_up(None, Some(&4), Point::new(95.0, 20.0));
        assert_eq!(result, TapResult::Suppressed(Some(3)));
    }

    #[test]
    fn straying_back_onto_same_target_still_taps() {
        let mut taps: TapState<u32> = TapState::with_retention(10.0);
        taps.on_down(None, 3, BOUNDS);
        taps.on_move(None, Point::new(200.0, 20.0));
        let result = taps.on_up(None, Some(&3), Point::new(50.0, 20.0));
        assert_eq!(result, TapResult::Tap(3));
    }

    #[test]
    fn pointers_are_tracked_independently() {
        let mut taps: TapState<u32> = TapState::new();
        let first = NonZeroU64::new(1);
        let second = NonZeroU64::new(2);
        taps.on_down(first, 1, BOUNDS);
        taps.on_down(second, 2, BOUNDS);
        assert_eq!(taps.presses().count(), 2);
        assert!(taps.has_active_press(&2));

        assert!(taps.cancel(second));
        assert!(!taps.has_active_press(&2));
        assert!(!taps.cancel(second));
        assert_eq!(taps.on_up(first, Some(&1), Point::new(10.0, 10.0)), TapResult::Tap(1));
    }

    #[test]
    fn new_press_on_same_pointer_replaces_old() {
        let mut taps: TapState<u32> = TapState::new();
        taps.on_down(None, 1, BOUNDS);
        taps.on_down(None, 2, BOUNDS);
        assert_eq!(taps.presses().count(), 1);
        assert_eq!(taps.press(None).unwrap().target, 2);
        taps.clear();
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn negative_retention_acts_as_zero() {
        let taps: TapState<u32> = TapState::with_retention(-5.0);
        assert_eq!(taps.retention, 0.0);
    }
}
