// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal segmented control with an animated selector.
//!
//! Segments are laid out left to right with [`SEGMENT_SPACING`] between
//! them, sharing the control width in proportion to their intrinsic widths.
//! Each segment is its own ripple host. Tapping a segment selects it, moves
//! the selector over it with a slight overshoot, and reports a value change.
//!
//! ```
//! use kurbo::{Point, Size};
//! use tactile_widgets::{MaterialSegmentedControl, Segment};
//!
//! let mut control = MaterialSegmentedControl::new(
//!     vec![Segment::new("Day", 40.0), Segment::new("Week", 60.0)],
//!     0,
//! );
//! control.resize(Size::new(110.0, 30.0));
//! assert_eq!(control.selected_index(), Some(0));
//!
//! control.touch_began(Point::new(80.0, 15.0), 100);
//! assert_eq!(control.touch_ended(Point::new(80.0, 15.0), 150), Some(1));
//! assert_eq!(control.selected_index(), Some(1));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tactile_ripple::anim::{Easing, Tween};
use tactile_ripple::{Color, RippleLayer, RippleStyle};

use crate::button::Border;
use crate::tap::{TapResult, TapState};

/// Horizontal gap between segments.
pub const SEGMENT_SPACING: f64 = 10.0;

/// Duration of the selector move.
pub const SELECTOR_MILLIS: u64 = 500;

/// Curve of the selector move.
pub const SELECTOR_EASING: Easing = Easing::OvershootOut;

/// Default border width of the control and of a [`SelectorStyle::Line`] selector.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.5;

/// How the selector marks the selected segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectorStyle {
    /// Solid fill behind the selected segment.
    Fill,
    /// Outline around the selected segment.
    #[default]
    Line,
}

/// One segment of a [`MaterialSegmentedControl`].
#[derive(Clone, Debug)]
pub struct Segment {
    title: String,
    intrinsic_width: f64,
    ripple: RippleLayer,
}

impl Segment {
    /// A segment showing `title` that would like to be `intrinsic_width` wide.
    pub fn new(title: impl Into<String>, intrinsic_width: f64) -> Self {
        Self {
            title: title.into(),
            intrinsic_width: if intrinsic_width.is_finite() {
                intrinsic_width.max(0.0)
            } else {
                0.0
            },
            ripple: RippleLayer::new(RippleStyle::default()),
        }
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Preferred width before proportional distribution.
    pub fn intrinsic_width(&self) -> f64 {
        self.intrinsic_width
    }

    /// The segment's ripple layer, in segment-local coordinates.
    pub fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    /// Mutable access to the segment's ripple layer.
    pub fn ripple_mut(&mut self) -> &mut RippleLayer {
        &mut self.ripple
    }
}

/// The selector at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorFrame {
    /// Selector rectangle in control coordinates.
    pub rect: Rect,
    /// Corner radius, taken from the first segment.
    pub corner_radius: f64,
    /// Fill, for [`SelectorStyle::Fill`].
    pub fill: Option<Color>,
    /// Outline, for [`SelectorStyle::Line`].
    pub border: Option<Border>,
}

/// Segment content colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentColors {
    /// Title color.
    pub title: Color,
    /// Icon tint.
    pub icon: Color,
}

/// A row of mutually exclusive segments.
#[derive(Clone, Debug)]
pub struct MaterialSegmentedControl {
    segments: Vec<Segment>,
    frames: Vec<Rect>,
    size: Size,
    selected: Option<usize>,
    /// How the selection is marked.
    pub selector_style: SelectorStyle,
    /// Title and icon color of unselected segments.
    pub text_color: Color,
    /// Selector fill or outline color.
    pub selector_color: Color,
    /// Content color of the selected segment under a filled selector.
    pub selector_text_color: Color,
    /// Border width of the control outline. Zero or less draws no outline.
    pub border_width: f64,
    /// Color of the control outline.
    pub border_color: Color,
    selector_x: Tween,
    selector_width: Tween,
    taps: TapState<usize>,
}

impl MaterialSegmentedControl {
    /// A control with `segments`, selecting the first one.
    ///
    /// The control has no size until [`resize`](Self::resize) is called.
    pub fn new(segments: Vec<Segment>, now: u64) -> Self {
        let mut control = Self {
            segments: Vec::new(),
            frames: Vec::new(),
            size: Size::ZERO,
            selected: None,
            selector_style: SelectorStyle::Line,
            text_color: Color::GRAY,
            selector_color: Color::GRAY,
            selector_text_color: Color::WHITE,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Color::BLACK,
            selector_x: Tween::settled(0.0),
            selector_width: Tween::settled(0.0),
            taps: TapState::new(),
        };
        control.set_segments(segments, now);
        control
    }

    /// The segments, in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access to one segment, for ripple styling.
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Replace every segment and select the first.
    ///
    /// Returns the index reported as the new value, if any segment exists.
    pub fn set_segments(&mut self, segments: Vec<Segment>, now: u64) -> Option<usize> {
        self.segments = segments;
        self.taps.clear();
        self.selected = None;
        self.layout();
        self.select(0, now).then_some(0)
    }

    /// Index of the selected segment.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Segment frames in control coordinates.
    pub fn segment_frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Index of the segment under `point`.
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(point))
    }

    /// The control size changed: re-flow segments and jump the selector into place.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.layout();
        if let Some(frame) = self.selected.and_then(|i| self.frames.get(i)).copied() {
            self.selector_x.snap(frame.x0);
            self.selector_width.snap(frame.width());
        }
        log::trace!("segmented control resized to {size:?}");
    }

    fn layout(&mut self) {
        self.frames.clear();
        let count = self.segments.len();
        if count == 0 {
            return;
        }
        let gaps = SEGMENT_SPACING * (count - 1) as f64;
        let available = (self.size.width - gaps).max(0.0);
        let total: f64 = self.segments.iter().map(|s| s.intrinsic_width).sum();
        let mut x = 0.0;
        for segment in &mut self.segments {
            let width = if total > 0.0 {
                available * segment.intrinsic_width / total
            } else {
                available / count as f64
            };
            let frame = Rect::new(x, 0.0, x + width, self.size.height);
            segment.ripple.resize(frame.size());
            self.frames.push(frame);
            x += width + SEGMENT_SPACING;
        }
    }

    /// Select segment `index`, animating the selector from where it is now.
    ///
    /// Returns `false` for an out-of-range index. Selecting the current
    /// segment again still counts as a value change.
    pub fn select(&mut self, index: usize, now: u64) -> bool {
        let Some(frame) = self.frames.get(index).copied() else {
            return false;
        };
        let previous = self.selected.replace(index);
        if previous.is_none() {
            self.selector_x.snap(frame.x0);
            self.selector_width.snap(frame.width());
        } else {
            self.selector_x.retarget(now, frame.x0, SELECTOR_MILLIS, SELECTOR_EASING);
            self.selector_width.retarget(now, frame.width(), SELECTOR_MILLIS, SELECTOR_EASING);
        }
        log::debug!("segment {index} selected (was {previous:?})");
        true
    }

    /// Content colors for segment `index`.
    pub fn segment_colors(&self, index: usize) -> SegmentColors {
        if self.selected != Some(index) {
            return SegmentColors {
                title: self.text_color,
                icon: self.text_color,
            };
        }
        SegmentColors {
            title: match self.selector_style {
                SelectorStyle::Line => self.text_color,
                SelectorStyle::Fill => self.selector_text_color,
            },
            icon: self.selector_text_color,
        }
    }

    /// The outline around the whole control, if it has a positive width.
    pub fn outline(&self) -> Option<Border> {
        (self.border_width.is_finite() && self.border_width > 0.0).then_some(Border {
            width: self.border_width,
            color: self.border_color,
        })
    }

    /// The selector at `now`, if anything is selected.
    pub fn selector(&self, now: u64) -> Option<SelectorFrame> {
        self.selected?;
        let x = self.selector_x.value_at(now);
        let width = self.selector_width.value_at(now).max(0.0);
        let corner_radius = self
            .segments
            .first()
            .map_or(0.0, |s| s.ripple.style().corner_radius);
        let (fill, border) = match self.selector_style {
            SelectorStyle::Fill => (Some(self.selector_color), None),
            SelectorStyle::Line => (
                None,
                Some(Border {
                    width: DEFAULT_BORDER_WIDTH,
                    color: self.selector_color,
                }),
            ),
        };
        Some(SelectorFrame {
            rect: Rect::new(x, 0.0, x + width, self.size.height),
            corner_radius,
            fill,
            border,
        })
    }

    fn local(&self, index: usize, point: Point) -> Point {
        point - self.frames[index].origin().to_vec2()
    }

    /// A touch started. Returns `true` if it landed on a segment.
    pub fn touch_began(&mut self, point: Point, now: u64) -> bool {
        let Some(index) = self.segment_at(point) else {
            return false;
        };
        let previous = self.taps.press(None).map(|p| p.target);
        if let Some(previous) = previous.filter(|&p| p != index) {
            self.segments[previous].ripple.clear();
        }
        self.taps.on_down(None, index, self.frames[index]);
        let local = self.local(index, point);
        self.segments[index].ripple.touch_down(local, now);
        true
    }

    /// A held touch moved.
    pub fn touch_moved(&mut self, point: Point) {
        let Some(index) = self.taps.press(None).map(|p| p.target) else {
            return;
        };
        self.taps.on_move(None, point);
        let local = self.local(index, point);
        self.segments[index].ripple.touch_move(local);
    }

    /// A touch was lifted. Returns the newly selected index when the release selects a segment.
    pub fn touch_ended(&mut self, point: Point, now: u64) -> Option<usize> {
        let pressed = self.taps.press(None).map(|p| p.target)?;
        self.segments[pressed].ripple.touch_up(now);
        let over = self.segment_at(point);
        let index = match self.taps.on_up(None, over.as_ref(), point) {
            TapResult::Tap(index) => index,
            TapResult::Suppressed(_) => return None,
        };
        self.select(index, now).then_some(index)
    }

    /// The touch was cancelled.
    pub fn touch_cancelled(&mut self, now: u64) {
        if let Some(index) = self.taps.press(None).map(|p| p.target) {
            self.segments[index].ripple.touch_cancel(now);
        }
        self.taps.cancel(None);
    }

    /// Retire finished segment ripples.
    pub fn advance(&mut self, now: u64) {
        for segment in &mut self.segments {
            segment.ripple.advance(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use tactile_ripple::RipplePhase;

    fn control() -> MaterialSegmentedControl {
        let mut control = MaterialSegmentedControl::new(
            vec![
                Segment::new("One", 10.0),
                Segment::new("Two", 20.0),
                Segment::new("Three", 30.0),
            ],
            0,
        );
        control.resize(Size::new(80.0, 30.0));
        control
    }

    #[test]
    fn segments_share_width_proportionally() {
        let control = control();
        // 80 - 2 * 10 spacing = 60 to distribute as 10:20:30.
        assert_eq!(
            control.segment_frames(),
            &[
                Rect::new(0.0, 0.0, 10.0, 30.0),
                Rect::new(20.0, 0.0, 40.0, 30.0),
                Rect::new(50.0, 0.0, 80.0, 30.0),
            ]
        );
        assert_eq!(control.segments()[2].ripple().size(), Size::new(30.0, 30.0));
    }

    #[test]
    fn zero_intrinsic_widths_split_evenly() {
        let mut control =
            MaterialSegmentedControl::new(vec![Segment::new("a", 0.0), Segment::new("b", 0.0)], 0);
        control.resize(Size::new(50.0, 10.0));
        assert_eq!(control.segment_frames()[1], Rect::new(30.0, 0.0, 50.0, 10.0));
    }

    #[test]
    fn first_segment_starts_selected() {
        let control = control();
        assert_eq!(control.selected_index(), Some(0));
        let selector = control.selector(0).unwrap();
        assert_eq!(selector.rect, Rect::new(0.0, 0.0, 10.0, 30.0));
        assert_eq!(selector.border.unwrap().width, 1.5);
        assert!(selector.fill.is_none());
    }

    #[test]
    fn selector_animates_with_overshoot() {
        let mut control = control();
        assert!(control.select(2, 1000));
        assert_eq!(control.selector(1000).unwrap().rect.x0, 0.0);

        let overshoot = (1..50)
            .map(|i| control.selector(1000 + i * 10).unwrap().rect.x0)
            .fold(0.0_f64, f64::max);
        assert!(overshoot > 50.0, "selector should pass its target, peaked at {overshoot}");
        assert_eq!(control.selector(1500).unwrap().rect, Rect::new(50.0, 0.0, 80.0, 30.0));
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let mut control = control();
        assert!(!control.select(3, 0));
        assert_eq!(control.selected_index(), Some(0));
    }

    #[test]
    fn tap_selects_segment_and_reports_change() {
        let mut control = control();
        assert!(control.touch_began(Point::new(30.0, 15.0), 100));
        assert_eq!(
            control.segments()[1].ripple().frame(150).ripple.unwrap().circle.center,
            Point::new(10.0, 15.0),
            "ripple runs in segment-local coordinates"
        );
        assert_eq!(control.touch_ended(Point::new(30.0, 15.0), 150), Some(1));
        assert_eq!(control.selected_index(), Some(1));
    }

    #[test]
    fn release_on_neighbor_selects_pressed_segment() {
        let mut control = control();
        control.touch_began(Point::new(35.0, 15.0), 0);
        assert_eq!(control.touch_ended(Point::new(55.0, 15.0), 50), Some(1));
    }

    #[test]
    fn touch_in_gap_is_ignored() {
        let mut control = control();
        assert!(!control.touch_began(Point::new(15.0, 15.0), 0));
        assert_eq!(control.touch_ended(Point::new(15.0, 15.0), 10), None);
    }

    #[test]
    fn new_touch_discards_ripple_on_other_segment() {
        let mut control = control();
        control.touch_began(Point::new(5.0, 15.0), 0);
        control.touch_began(Point::new(60.0, 15.0), 100);
        assert_eq!(control.segments()[0].ripple().frame(100).phase, RipplePhase::Idle);
        assert!(control.segments()[0].ripple().session().is_none());

        assert_eq!(control.touch_ended(Point::new(60.0, 15.0), 150), Some(2));
        control.advance(60_000);
        for segment in control.segments() {
            assert!(!segment.ripple().is_active(60_000));
        }
    }

    #[test]
    fn outline_follows_border_width() {
        let mut control = control();
        assert_eq!(
            control.outline(),
            Some(Border {
                width: DEFAULT_BORDER_WIDTH,
                color: Color::BLACK,
            })
        );
        control.border_width = 0.0;
        assert!(control.outline().is_none());
    }

    #[test]
    fn cancelled_touch_selects_nothing() {
        let mut control = control();
        control.touch_began(Point::new(60.0, 15.0), 0);
        control.touch_moved(Point::new(61.0, 15.0));
        control.touch_cancelled(20);
        assert_eq!(control.touch_ended(Point::new(60.0, 15.0), 30), None);
        assert_eq!(control.selected_index(), Some(0));
        assert_eq!(
            control.segments()[2].ripple().frame(350).phase,
            RipplePhase::FadingOut
        );
        control.advance(1000);
        assert!(control.segments()[2].ripple().session().is_none());
    }

    #[test]
    fn colors_follow_selection_and_style() {
        let mut control = control();
        assert_eq!(control.segment_colors(0).title, Color::GRAY);
        assert_eq!(control.segment_colors(0).icon, Color::WHITE);
        assert_eq!(control.segment_colors(1).icon, Color::GRAY);

        control.selector_style = SelectorStyle::Fill;
        assert_eq!(control.segment_colors(0).title, Color::WHITE);
        let selector = control.selector(0).unwrap();
        assert_eq!(selector.fill, Some(Color::GRAY));
        assert!(selector.border.is_none());
    }

    #[test]
    fn replacing_segments_reselects_first() {
        let mut control = control();
        control.select(2, 0);
        let changed = control.set_segments(vec![Segment::new("x", 1.0), Segment::new("y", 1.0)], 10);
        assert_eq!(changed, Some(0));
        assert_eq!(control.selected_index(), Some(0));

        assert_eq!(control.set_segments(Vec::new(), 20), None);
        assert_eq!(control.selected_index(), None);
        assert!(control.selector(20).is_none());
    }
}
