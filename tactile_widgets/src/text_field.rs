// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ripple text field with a floating placeholder label and a bottom border.

use alloc::string::String;

use kurbo::{Rect, Size};
use tactile_ripple::anim::{Easing, Tween};
use tactile_ripple::{Color, RippleLayer, RippleStyle};

use crate::host::RippleHost;

/// Duration of the floating label entrance.
pub const FLOATING_LABEL_MILLIS: u64 = 450;

/// Default inset of the text from the field edges.
pub const DEFAULT_PADDING: Size = Size::new(5.0, 5.0);

/// Default gap between the floating label and the text below it.
pub const DEFAULT_FLOATING_LABEL_BOTTOM_MARGIN: f64 = 2.0;

/// Default floating label line height, a 10 pt bold system font.
pub const DEFAULT_FLOATING_LABEL_LINE_HEIGHT: f64 = 12.0;

/// Horizontal alignment of the text, which the floating label follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    /// Leading edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Trailing edge.
    Right,
}

/// The floating label at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingLabelFrame {
    /// Label rectangle.
    pub rect: Rect,
    /// Text color with the current opacity applied.
    pub color: Color,
}

/// The bottom border line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BottomBorder {
    /// Line rectangle along the bottom edge.
    pub rect: Rect,
    /// Line color.
    pub color: Color,
}

/// A single-line text field with ripple feedback.
#[derive(Clone, Debug)]
pub struct MaterialTextField {
    ripple: RippleLayer,
    text: String,
    placeholder: String,
    placeholder_width: f64,
    /// Inset of the text from the field edges.
    pub padding: Size,
    /// Gap between the floating label and the text below it.
    pub floating_label_bottom_margin: f64,
    /// Line height of the floating label.
    pub floating_label_line_height: f64,
    /// Floating label color while unfocused.
    pub floating_label_color: Color,
    /// Accent used for the label and border while focused.
    pub tint_color: Color,
    /// Text alignment.
    pub alignment: TextAlignment,
    /// Draw a line along the bottom edge.
    pub bottom_border_enabled: bool,
    /// Bottom line width while unfocused.
    pub bottom_border_width: f64,
    /// Bottom line width while focused.
    pub bottom_border_highlight_width: f64,
    /// Bottom line color while unfocused.
    pub bottom_border_color: Color,
    floating_placeholder_enabled: bool,
    focused: bool,
    label_alpha: Tween,
    label_y: Tween,
}

impl MaterialTextField {
    /// An empty field showing `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            ripple: RippleLayer::new(RippleStyle::default()),
            text: String::new(),
            placeholder: placeholder.into(),
            placeholder_width: 0.0,
            padding: DEFAULT_PADDING,
            floating_label_bottom_margin: DEFAULT_FLOATING_LABEL_BOTTOM_MARGIN,
            floating_label_line_height: DEFAULT_FLOATING_LABEL_LINE_HEIGHT,
            floating_label_color: Color::LIGHT_GRAY,
            tint_color: Color::rgb(0.0, 0.478, 1.0),
            alignment: TextAlignment::Left,
            bottom_border_enabled: true,
            bottom_border_width: 1.0,
            bottom_border_highlight_width: 1.75,
            bottom_border_color: Color::LIGHT_GRAY,
            floating_placeholder_enabled: false,
            focused: false,
            label_alpha: Tween::settled(0.0),
            label_y: Tween::settled(DEFAULT_PADDING.height),
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder text, also used as the floating label.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder. `measured_width` is the label width as laid out by the host.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>, measured_width: f64) {
        self.placeholder = placeholder.into();
        self.placeholder_width = measured_width.max(0.0);
    }

    /// Whether the placeholder floats above non-empty text.
    pub fn floating_placeholder_enabled(&self) -> bool {
        self.floating_placeholder_enabled
    }

    /// Enable or disable the floating label.
    pub fn set_floating_placeholder_enabled(&mut self, enabled: bool, now: u64) {
        self.floating_placeholder_enabled = enabled;
        self.sync_label(now);
    }

    /// Replace the text.
    ///
    /// The floating label animates in the first time the text becomes
    /// non-empty and disappears immediately when it becomes empty.
    pub fn set_text(&mut self, text: impl Into<String>, now: u64) {
        self.text = text.into();
        self.sync_label(now);
    }

    /// Whether the field is being edited.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gain or lose editing focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn label_visible(&self) -> bool {
        self.floating_placeholder_enabled && !self.text.is_empty()
    }

    fn sync_label(&mut self, now: u64) {
        if !self.label_visible() {
            self.label_alpha.snap(0.0);
            return;
        }
        if self.label_alpha.target() > 0.0 {
            return;
        }
        let mid = self.ripple.size().height / 2.0;
        self.label_alpha = Tween::new(0.0, 1.0, now, FLOATING_LABEL_MILLIS, Easing::EaseOut);
        self.label_y = Tween::new(
            mid,
            self.padding.height,
            now,
            FLOATING_LABEL_MILLIS,
            Easing::EaseOut,
        );
        log::trace!("floating label shown at t={now}");
    }

    /// Rectangle the text is drawn in.
    ///
    /// Inset horizontally by the padding, and from the top by the floating
    /// label when it is shown.
    pub fn text_rect(&self) -> Rect {
        let size = self.ripple.size();
        let x0 = self.padding.width;
        let x1 = (size.width - self.padding.width).max(x0);
        let mut rect = Rect::new(x0, 0.0, x1, size.height);
        if self.label_visible() {
            let top = self.floating_label_line_height + self.floating_label_bottom_margin;
            rect.y0 = (rect.y0 + top).min(rect.y1);
        }
        rect
    }

    /// Rectangle the text is edited in; same as [`text_rect`](Self::text_rect).
    pub fn editing_rect(&self) -> Rect {
        self.text_rect()
    }

    /// The floating label at `now`, if shown.
    pub fn floating_label(&self, now: u64) -> Option<FloatingLabelFrame> {
        if !self.label_visible() {
            return None;
        }
        let text = self.text_rect();
        let x = match self.alignment {
            TextAlignment::Left => text.x0,
            TextAlignment::Center => text.x0 + text.width() / 2.0 - self.placeholder_width / 2.0,
            TextAlignment::Right => text.x0 + text.width() - self.placeholder_width,
        };
        let y = self.label_y.value_at(now);
        let color = if self.focused {
            self.tint_color
        } else {
            self.floating_label_color
        };
        Some(FloatingLabelFrame {
            rect: Rect::new(
                x,
                y,
                x + self.placeholder_width,
                y + self.floating_label_line_height,
            ),
            color: color.with_alpha(alpha_f32(self.label_alpha.value_at(now))),
        })
    }

    /// The bottom border, if enabled.
    pub fn bottom_border(&self) -> Option<BottomBorder> {
        if !self.bottom_border_enabled {
            return None;
        }
        let size = self.ripple.size();
        let (width, color) = if self.focused {
            (self.bottom_border_highlight_width, self.tint_color)
        } else {
            (self.bottom_border_width, self.bottom_border_color)
        };
        Some(BottomBorder {
            rect: Rect::new(0.0, size.height - width, size.width, size.height),
            color,
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "label opacity stays within [0, 1]"
)]
fn alpha_f32(value: f64) -> f32 {
    value as f32
}

impl RippleHost for MaterialTextField {
    fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    fn ripple_mut(&mut self) -> &mut RippleLayer {
        &mut self.ripple
    }
}
