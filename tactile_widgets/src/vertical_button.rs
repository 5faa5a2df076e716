// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Rect, Size};
use tactile_ripple::{RippleLayer, RippleStyle};

use crate::host::RippleHost;

/// Default icon size.
pub const DEFAULT_ICON_SIZE: Size = Size::new(24.0, 24.0);

/// Default gap between icon and title.
pub const DEFAULT_ICON_SPACING: f64 = 4.0;

/// Where the icon and title of a [`MaterialVerticalButton`] go.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalLayout {
    /// Icon rectangle, horizontally centered.
    pub icon: Rect,
    /// Title rectangle spanning the button width.
    pub title: Rect,
}

/// A ripple control with its icon stacked above its title.
///
/// Touches use the [`RippleHost`] defaults: a release inside the bounds
/// activates the control.
#[derive(Clone, Debug)]
pub struct MaterialVerticalButton {
    ripple: RippleLayer,
    title: String,
    icon_size: Size,
    spacing: f64,
}

impl MaterialVerticalButton {
    /// A vertical button with `title`, a default-sized icon, and default ripple style.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            ripple: RippleLayer::new(RippleStyle::default()),
            title: title.into(),
            icon_size: DEFAULT_ICON_SIZE,
            spacing: DEFAULT_ICON_SPACING,
        }
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the icon size.
    pub fn set_icon_size(&mut self, size: Size) {
        self.icon_size = size;
    }

    /// Set the gap between icon and title. Negative gaps act as zero.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing.max(0.0);
    }

    /// Lay out the content for a title line of `title_height`.
    ///
    /// Icon and title are centered as one block; content taller than the
    /// button overflows evenly above and below.
    pub fn layout(&self, title_height: f64) -> VerticalLayout {
        let bounds = self.ripple.size();
        let total = self.icon_size.height + self.spacing + title_height;
        let top = (bounds.height - total) / 2.0;
        let icon_x = (bounds.width - self.icon_size.width) / 2.0;
        let icon = Rect::from_origin_size((icon_x, top), self.icon_size);
        let title_top = icon.y1 + self.spacing;
        VerticalLayout {
            icon,
            title: Rect::new(0.0, title_top, bounds.width, title_top + title_height),
        }
    }
}

impl RippleHost for MaterialVerticalButton {
    fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    fn ripple_mut(&mut self) -> &mut RippleLayer {
        &mut self.ripple
    }
}
