// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Ripple: touch feedback and elevation for material-style controls.
//!
//! This crate models the visual response of an interactive control to touch,
//! without owning a renderer, a clock, or a view hierarchy:
//! - A **style** ([`RippleStyle`]) holding every option: elevation and shadow
//!   offset, [`RoundingCorners`] and corner radius, masking, ripple color,
//!   alpha, duration and scale ratio, and background tinting.
//! - Derived **geometry** ([`LayerGeometry`]): the rounded mask, the static
//!   elevation [`Shadow`], and the radius of a fully grown ripple.
//! - The **engine** ([`RippleLayer`]) that tracks one [`TouchSession`] at a
//!   time and answers [`RippleFrame`]s sampled at host-supplied timestamps.
//! - Small **animation** helpers in [`anim`] used by the engine and by hosts
//!   that animate their own content.
//!
//! Hosts own one layer each, forward their size and touch stream, and draw
//! whatever the sampled frame describes: clip to [`RippleFrame::clip`], fill
//! the background tint, then fill the ripple circle.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tactile_ripple::{RippleLayer, RipplePhase, RippleStyle};
//!
//! let mut layer = RippleLayer::new(RippleStyle::default().with_corner_radius(4.0));
//! layer.resize(Size::new(100.0, 40.0));
//!
//! // Touch at t=0, release at t=100 ms; growth lasts 350 ms.
//! layer.touch_down(Point::new(10.0, 20.0), 0);
//! layer.touch_up(100);
//!
//! assert_eq!(layer.frame(200).phase, RipplePhase::Growing);
//!
//! let frame = layer.frame(350);
//! assert_eq!(frame.phase, RipplePhase::FadingOut);
//! let ripple = frame.ripple.unwrap();
//! assert_eq!(ripple.circle.center, Point::new(10.0, 20.0));
//! assert_eq!(ripple.circle.radius, 100.0);
//! ```
//!
//! ## Timing
//!
//! Timestamps and durations are milliseconds as `u64`. Nothing here is
//! scheduled: a host with an animation running samples
//! [`RippleLayer::advance`] once per frame until
//! [`RippleLayer::is_active`] turns false.
//!
//! ## Features
//!
//! - `std` (default): uses the standard library's float routines through `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`RippleStyle`], [`Color`],
//!   and [`RoundingCorners`].
//!
//! This crate is `no_std`.

#![no_std]

pub mod anim;
mod color;
mod corners;
mod geometry;
mod layer;
mod style;

pub use color::Color;
pub use corners::RoundingCorners;
pub use geometry::{ELEVATION_SHADOW_OPACITY, LayerGeometry, Shadow};
pub use layer::{
    FADE_EASING, GROWTH_EASING, RippleCircle, RippleFrame, RippleLayer, RipplePhase, TouchSession,
};
pub use style::{
    DEFAULT_RIPPLE_ALPHA, DEFAULT_RIPPLE_DURATION_MILLIS, DEFAULT_RIPPLE_SCALE_RATIO, RippleStyle,
};
