// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight-alpha RGBA colors.

/// A straight (non-premultiplied) RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Two-thirds gray, the default ripple color.
    pub const LIGHT_GRAY: Self = Self::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    /// Mid gray.
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    /// One-third gray, the default button background.
    pub const DARK_GRAY: Self = Self::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);

    /// Color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// The same color with its alpha replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: clamp_unit(alpha),
            ..self
        }
    }

    /// The same color with its alpha scaled by `factor`.
    pub fn multiply_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Whether the color draws nothing.
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Clamp into `[0, 1]`, mapping NaN to zero.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Narrow an opacity factor computed in `f64` for use as a color alpha.
#[expect(
    clippy::cast_possible_truncation,
    reason = "opacity factors live in [0, 1] where f32 precision is ample"
)]
pub(crate) fn opacity_f32(value: f64) -> f32 {
    value as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(1.5).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-0.5).a, 0.0);
        assert_eq!(Color::WHITE.with_alpha(f32::NAN).a, 0.0);
    }

    #[test]
    fn multiply_alpha_scales_existing_alpha() {
        let c = Color::LIGHT_GRAY.with_alpha(0.5).multiply_alpha(0.5);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, Color::LIGHT_GRAY.r);
    }

    #[test]
    fn transparent_detection() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
