// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple and elevation configuration.

use kurbo::Vec2;

use crate::color::{Color, clamp_unit};
use crate::corners::RoundingCorners;

/// Default growth duration of a ripple, in milliseconds.
pub const DEFAULT_RIPPLE_DURATION_MILLIS: u64 = 350;

/// Default opacity of the ripple and the background tint.
pub const DEFAULT_RIPPLE_ALPHA: f32 = 0.3;

/// Default ratio between the fully grown ripple radius and the host's longer side.
pub const DEFAULT_RIPPLE_SCALE_RATIO: f64 = 1.0;

/// Every recognized option of a [`RippleLayer`](crate::RippleLayer).
///
/// The defaults match the stock material controls: masked to the host's
/// rounded shape, no elevation, light-gray ripple at 30% opacity growing over
/// 350 ms to the host's longer side, with background tinting.
///
/// Values assigned through [`RippleLayer`](crate::RippleLayer) setters are
/// passed through [`RippleStyle::sanitized`] first.
///
/// ```
/// use tactile_ripple::{Color, RippleStyle, RoundingCorners};
///
/// let style = RippleStyle::default()
///     .with_corner_radius(12.0)
///     .with_rounding_corners(RoundingCorners::TOP)
///     .with_ripple_color(Color::WHITE)
///     .with_elevation(2.0);
/// assert!(style.mask_enabled);
/// assert_eq!(style.ripple_duration_millis, 350);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RippleStyle {
    /// Shadow depth cue. Zero disables the shadow.
    pub elevation: f64,
    /// Offset of the elevation shadow.
    pub shadow_offset: Vec2,
    /// Corners rounded by `corner_radius`.
    pub rounding_corners: RoundingCorners,
    /// Radius applied to the selected corners.
    pub corner_radius: f64,
    /// Clip the ripple to the host's rounded shape.
    pub mask_enabled: bool,
    /// Draw the expanding circle.
    pub ripple_enabled: bool,
    /// Growth duration in milliseconds; the fade-out uses the same duration.
    pub ripple_duration_millis: u64,
    /// Fully grown radius as a multiple of the host's longer side.
    pub ripple_scale_ratio: f64,
    /// Color of the ripple and the background tint. Its own alpha is ignored.
    pub ripple_color: Color,
    /// Opacity of the ripple and the background tint.
    pub ripple_alpha: f32,
    /// Tint the whole host while a touch is held.
    pub background_animation_enabled: bool,
}

impl Default for RippleStyle {
    fn default() -> Self {
        Self {
            elevation: 0.0,
            shadow_offset: Vec2::ZERO,
            rounding_corners: RoundingCorners::ALL,
            corner_radius: 0.0,
            mask_enabled: true,
            ripple_enabled: true,
            ripple_duration_millis: DEFAULT_RIPPLE_DURATION_MILLIS,
            ripple_scale_ratio: DEFAULT_RIPPLE_SCALE_RATIO,
            ripple_color: Color::LIGHT_GRAY,
            ripple_alpha: DEFAULT_RIPPLE_ALPHA,
            background_animation_enabled: true,
        }
    }
}

impl RippleStyle {
    /// Set [`elevation`](Self::elevation).
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set [`shadow_offset`](Self::shadow_offset).
    pub fn with_shadow_offset(mut self, offset: Vec2) -> Self {
        self.shadow_offset = offset;
        self
    }

    /// Set [`rounding_corners`](Self::rounding_corners).
    pub fn with_rounding_corners(mut self, corners: RoundingCorners) -> Self {
        self.rounding_corners = corners;
        self
    }

    /// Set [`corner_radius`](Self::corner_radius).
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set [`mask_enabled`](Self::mask_enabled).
    pub fn with_mask_enabled(mut self, enabled: bool) -> Self {
        self.mask_enabled = enabled;
        self
    }

    /// Set [`ripple_enabled`](Self::ripple_enabled).
    pub fn with_ripple_enabled(mut self, enabled: bool) -> Self {
        self.ripple_enabled = enabled;
        self
    }

    /// Set [`ripple_duration_millis`](Self::ripple_duration_millis).
    pub fn with_ripple_duration(mut self, millis: u64) -> Self {
        self.ripple_duration_millis = millis;
        self
    }

    /// Set [`ripple_scale_ratio`](Self::ripple_scale_ratio).
    pub fn with_ripple_scale_ratio(mut self, ratio: f64) -> Self {
        self.ripple_scale_ratio = ratio;
        self
    }

    /// Set [`ripple_color`](Self::ripple_color).
    pub fn with_ripple_color(mut self, color: Color) -> Self {
        self.ripple_color = color;
        self
    }

    /// Set [`ripple_alpha`](Self::ripple_alpha).
    pub fn with_ripple_alpha(mut self, alpha: f32) -> Self {
        self.ripple_alpha = alpha;
        self
    }

    /// Set [`background_animation_enabled`](Self::background_animation_enabled).
    pub fn with_background_animation_enabled(mut self, enabled: bool) -> Self {
        self.background_animation_enabled = enabled;
        self
    }

    /// Replace values that cannot be drawn.
    ///
    /// Negative or non-finite lengths become zero, a non-finite scale ratio
    /// falls back to the default, and alpha is clamped to `[0, 1]`.
    pub fn sanitized(mut self) -> Self {
        self.elevation = non_negative(self.elevation);
        self.corner_radius = non_negative(self.corner_radius);
        self.ripple_scale_ratio = if self.ripple_scale_ratio.is_finite() {
            self.ripple_scale_ratio.max(0.0)
        } else {
            DEFAULT_RIPPLE_SCALE_RATIO
        };
        if !self.shadow_offset.is_finite() {
            self.shadow_offset = Vec2::ZERO;
        }
        self.ripple_alpha = if self.ripple_alpha.is_nan() {
            DEFAULT_RIPPLE_ALPHA
        } else {
            clamp_unit(self.ripple_alpha)
        };
        self
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_controls() {
        let style = RippleStyle::default();
        assert!(style.mask_enabled);
        assert!(style.ripple_enabled);
        assert!(style.background_animation_enabled);
        assert_eq!(style.corner_radius, 0.0);
        assert_eq!(style.elevation, 0.0);
        assert_eq!(style.rounding_corners, RoundingCorners::ALL);
        assert_eq!(style.ripple_duration_millis, 350);
        assert_eq!(style.ripple_scale_ratio, 1.0);
        assert_eq!(style.ripple_color, Color::LIGHT_GRAY);
        assert_eq!(style.ripple_alpha, 0.3);
    }

    #[test]
    fn sanitized_repairs_bad_values() {
        let style = RippleStyle::default()
            .with_elevation(-3.0)
            .with_corner_radius(f64::INFINITY)
            .with_ripple_scale_ratio(f64::NAN)
            .with_shadow_offset(Vec2::new(f64::NAN, 1.0))
            .with_ripple_alpha(4.0)
            .sanitized();
        assert_eq!(style.elevation, 0.0);
        assert_eq!(style.corner_radius, 0.0);
        assert_eq!(style.ripple_scale_ratio, DEFAULT_RIPPLE_SCALE_RATIO);
        assert_eq!(style.shadow_offset, Vec2::ZERO);
        assert_eq!(style.ripple_alpha, 1.0);
    }

    #[test]
    fn sanitized_keeps_good_values() {
        let style = RippleStyle::default()
            .with_elevation(4.0)
            .with_corner_radius(8.0)
            .with_ripple_scale_ratio(1.5)
            .with_shadow_offset(Vec2::new(0.0, 2.0))
            .with_ripple_alpha(0.5);
        assert_eq!(style.sanitized(), style);
    }

    #[test]
    fn negative_ratio_collapses_to_zero() {
        let style = RippleStyle::default()
            .with_ripple_scale_ratio(-2.0)
            .sanitized();
        assert_eq!(style.ripple_scale_ratio, 0.0);
    }
}
