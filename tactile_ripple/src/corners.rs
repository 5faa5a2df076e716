// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner selection for rounded masks and shadow paths.

use kurbo::RoundedRectRadii;

bitflags::bitflags! {
    /// Which corners of a host are rounded by its corner radius.
    ///
    /// Corners left out of the set stay square in both the ripple mask and
    /// the elevation shadow.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RoundingCorners: u8 {
        /// Top-left corner.
        const TOP_LEFT     = 0b0000_0001;
        /// Top-right corner.
        const TOP_RIGHT    = 0b0000_0010;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 0b0000_0100;
        /// Bottom-left corner.
        const BOTTOM_LEFT  = 0b0000_1000;
        /// Both top corners.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        /// Both bottom corners.
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        /// Every corner.
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for RoundingCorners {
    fn default() -> Self {
        Self::ALL
    }
}

impl RoundingCorners {
    /// Per-corner radii with `radius` applied to the selected corners and zero elsewhere.
    ///
    /// ```
    /// use tactile_ripple::RoundingCorners;
    ///
    /// let radii = RoundingCorners::TOP.radii(8.0);
    /// assert_eq!(radii.top_left, 8.0);
    /// assert_eq!(radii.top_right, 8.0);
    /// assert_eq!(radii.bottom_right, 0.0);
    /// assert_eq!(radii.bottom_left, 0.0);
    /// ```
    pub fn radii(self, radius: f64) -> RoundedRectRadii {
        let pick = |corner: Self| if self.contains(corner) { radius } else { 0.0 };
        RoundedRectRadii::new(
            pick(Self::TOP_LEFT),
            pick(Self::TOP_RIGHT),
            pick(Self::BOTTOM_RIGHT),
            pick(Self::BOTTOM_LEFT),
        )
    }
}
