// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use tactile_ripple::{RippleLayer, RippleStyle};

use crate::host::RippleHost;

/// A list cell whose ripple covers its content area.
///
/// The stock selection highlight is always off; the ripple is the only
/// touch feedback. The content area starts at the cell origin and excludes
/// any trailing accessory; touches on the accessory produce no ripple.
#[derive(Clone, Debug)]
pub struct MaterialTableCell {
    ripple: RippleLayer,
    cell_size: Size,
    accessory_width: f64,
}

impl MaterialTableCell {
    /// A cell with default ripple style.
    pub fn new() -> Self {
        Self {
            ripple: RippleLayer::new(RippleStyle::default()),
            cell_size: Size::ZERO,
            accessory_width: 0.0,
        }
    }

    /// Whether the platform selection highlight is drawn. Always `false`.
    pub fn selection_highlight_enabled(&self) -> bool {
        false
    }

    /// Reserve `width` at the trailing edge for an accessory view.
    pub fn set_accessory_width(&mut self, width: f64) {
        self.accessory_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.sync_content();
    }

    /// The content area in cell coordinates.
    pub fn content_bounds(&self) -> Rect {
        let width = (self.cell_size.width - self.accessory_width).max(0.0);
        Rect::new(0.0, 0.0, width, self.cell_size.height)
    }

    fn sync_content(&mut self) {
        let content = self.content_bounds().size();
        self.ripple.resize(content);
    }
}

impl Default for MaterialTableCell {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleHost for MaterialTableCell {
    fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    fn ripple_mut(&mut self) -> &mut RippleLayer {
        &mut self.ripple
    }

    fn touch_began(&mut self, point: Point, now: u64) -> bool {
        if !self.content_bounds().contains(point) {
            return false;
        }
        self.ripple.touch_down(point, now)
    }

    /// The cell's size changed; the ripple follows the content area.
    fn resize(&mut self, size: Size) {
        self.cell_size = size;
        self.sync_content();
    }
}
