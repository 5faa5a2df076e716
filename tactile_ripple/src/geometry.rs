// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mask, shadow, and radius geometry derived from host bounds and style.

use kurbo::{Rect, RoundedRect, Size, Vec2};

use crate::color::Color;
use crate::style::RippleStyle;

/// Opacity of the elevation shadow when elevation is non-zero.
pub const ELEVATION_SHADOW_OPACITY: f32 = 0.5;

/// A static drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Outline casting the shadow, in host-local coordinates.
    pub path: RoundedRect,
    /// Offset of the shadow relative to `path`.
    pub offset: Vec2,
    /// Blur radius.
    pub blur_radius: f64,
    /// Shadow color including its opacity.
    pub color: Color,
}

/// Geometry the ripple engine draws into, recomputed whenever bounds or style change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerGeometry {
    /// Host bounds in local coordinates, anchored at the origin.
    pub bounds: Rect,
    /// Rounded outline of the host from its corner selection and radius.
    pub shape: RoundedRect,
    /// Clip for the ripple, present when masking is enabled.
    pub mask: Option<RoundedRect>,
    /// Elevation shadow, present when elevation is non-zero and the host has area.
    pub shadow: Option<Shadow>,
    /// Radius of a fully grown ripple.
    pub max_radius: f64,
}

impl LayerGeometry {
    /// Derive geometry for a host of `size` drawn with `style`.
    ///
    /// Non-finite or negative sizes are treated as empty.
    pub fn compute(size: Size, style: &RippleStyle) -> Self {
        let size = Size::new(clean_length(size.width), clean_length(size.height));
        let bounds = size.to_rect();
        let radii = style.rounding_corners.radii(style.corner_radius);
        let shape = RoundedRect::from_rect(bounds, radii);
        let has_area = !bounds.is_zero_area();
        let mask = style.mask_enabled.then_some(shape);
        let shadow = (style.elevation > 0.0 && has_area).then(|| Shadow {
            path: shape,
            offset: style.shadow_offset,
            blur_radius: style.elevation,
            color: Color::BLACK.with_alpha(ELEVATION_SHADOW_OPACITY),
        });
        let max_radius = if has_area {
            style.ripple_scale_ratio * size.width.max(size.height)
        } else {
            0.0
        };
        Self {
            bounds,
            shape,
            mask,
            shadow,
            max_radius,
        }
    }

    /// Whether a ripple drawn into this geometry would be invisible.
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_zero_area() || self.max_radius <= 0.0
    }
}

impl Default for LayerGeometry {
    fn default() -> Self {
        Self::compute(Size::ZERO, &RippleStyle::default())
    }
}

fn clean_length(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
