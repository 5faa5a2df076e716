// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Widgets: material-style control state built on `tactile_ripple`.
//!
//! Every control here owns its touch feedback by composition: it holds a
//! [`RippleLayer`](tactile_ripple::RippleLayer), forwards bounds and touches
//! to it through [`RippleHost`], and exposes the layer for styling. Nothing
//! draws; each control answers geometry, colors, and opacities sampled at a
//! millisecond timestamp.
//!
//! - [`MaterialButton`]: title/icon button with fill or outline styles, an
//!   optional drop shadow, interaction gating, and a cancellable inline
//!   loader (see [`MaterialButton::show_loader`]).
//! - [`MaterialVerticalButton`]: icon stacked above the title.
//! - [`MaterialTextField`]: floating placeholder label and a bottom border
//!   that highlights while focused.
//! - [`MaterialSegmentedControl`]: proportional segments with an animated
//!   selector.
//! - [`MaterialTableCell`]: ripple bound to a cell's content area.
//! - [`tap`]: touch-up-inside recognition shared by the pressable controls.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tactile_ripple::RipplePhase;
//! use tactile_widgets::{MaterialButton, RippleHost};
//!
//! let mut button = MaterialButton::new("Save");
//! button.resize(Size::new(100.0, 40.0));
//! button.ripple_mut().set_corner_radius(8.0);
//!
//! button.touch_began(Point::new(10.0, 20.0), 0);
//! let tapped = button.touch_ended(Point::new(12.0, 20.0), 80);
//! assert!(tapped);
//!
//! // The ripple finishes growing before it fades.
//! assert_eq!(button.advance(200).phase, RipplePhase::Growing);
//! assert_eq!(button.advance(400).phase, RipplePhase::FadingOut);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `tactile_ripple/std` and `kurbo/std`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod host;
mod segmented;
mod table_cell;
pub mod tap;
mod text_field;
mod vertical_button;

pub use button::{
    Border, ButtonContent, ButtonFrame, ButtonStyle, Completion, DEFAULT_INDICATOR_RADIUS,
    DropShadow, INDICATOR_HEIGHT_FRACTION, IndicatorFrame, LOADER_FADE_MILLIS, LoadingIndicator,
    MaterialButton, OUTLINE_BORDER_WIDTH, SPIN_PERIOD_MILLIS,
};
pub use host::RippleHost;
pub use segmented::{
    DEFAULT_BORDER_WIDTH, MaterialSegmentedControl, SEGMENT_SPACING, SELECTOR_EASING,
    SELECTOR_MILLIS, Segment, SegmentColors, SelectorFrame, SelectorStyle,
};
pub use table_cell::MaterialTableCell;
pub use text_field::{
    BottomBorder, DEFAULT_FLOATING_LABEL_BOTTOM_MARGIN, DEFAULT_FLOATING_LABEL_LINE_HEIGHT,
    DEFAULT_PADDING, FLOATING_LABEL_MILLIS, FloatingLabelFrame, MaterialTextField, TextAlignment,
};
pub use vertical_button::{
    DEFAULT_ICON_SIZE, DEFAULT_ICON_SPACING, MaterialVerticalButton, VerticalLayout,
};
