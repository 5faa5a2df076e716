// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ripple button with an inline loading indicator.
//!
//! Besides touch feedback, [`MaterialButton`] can swap its content for a
//! spinning indicator while some operation is in flight:
//!
//! - [`MaterialButton::show_loader`] fades the chosen content out and the
//!   indicator in over [`LOADER_FADE_MILLIS`]; once the fade completes the
//!   indicator starts spinning and the caller's completion runs.
//! - [`MaterialButton::hide_loader`] detaches the indicator at once and
//!   fades the content back in, then runs its completion.
//!
//! At most one transition is pending. Starting either transition cancels the
//! one in flight, and a cancelled transition never runs its completion, even
//! if its due time has already passed when the host next calls
//! [`MaterialButton::advance`].
//!
//! ```
//! use kurbo::Size;
//! use tactile_widgets::{ButtonContent, MaterialButton, RippleHost};
//!
//! let mut button = MaterialButton::new("Send");
//! button.resize(Size::new(120.0, 40.0));
//!
//! assert!(button.show_loader(0, ButtonContent::ALL, false, None));
//! assert!(button.is_loading());
//! assert!(!button.interaction_enabled());
//!
//! button.advance(200);
//! assert!(button.indicator().unwrap().is_spinning());
//! assert_eq!(button.frame(200).title_alpha, 0.0);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::f64::consts::TAU;
use core::fmt;

use kurbo::{Point, RoundedRect, Size, Vec2};
use tactile_deferred::{DeferredQueue, PendingSlot};
use tactile_ripple::anim::{Easing, Tween};
use tactile_ripple::{Color, RippleFrame, RippleLayer, RippleStyle, Shadow};

use crate::host::RippleHost;
use crate::tap::TapState;

/// Duration of the content/indicator cross-fade.
pub const LOADER_FADE_MILLIS: u64 = 200;

/// Indicator radius used unless the button is too short for it.
pub const DEFAULT_INDICATOR_RADIUS: f64 = 18.0;

/// Largest indicator diameter as a fraction of the button height.
pub const INDICATOR_HEIGHT_FRACTION: f64 = 0.7;

/// Time for one full indicator revolution.
pub const SPIN_PERIOD_MILLIS: u64 = 1000;

/// Border width drawn by [`ButtonStyle::Outline`].
pub const OUTLINE_BORDER_WIDTH: f64 = 1.5;

/// Callback run when a loader transition completes.
pub type Completion = Box<dyn FnOnce()>;

bitflags::bitflags! {
    /// Parts of the button content hidden while the loader shows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonContent: u8 {
        /// The title label.
        const TITLE = 0b01;
        /// The icon image.
        const ICON  = 0b10;
        /// Title and icon.
        const ALL = Self::TITLE.bits() | Self::ICON.bits();
    }
}

/// Visual treatment of the button body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Solid background.
    #[default]
    Fill,
    /// Clear background with a border.
    Outline,
}

/// A stroke around the button outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Drop shadow decoration drawn beneath the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropShadow {
    /// Shadow offset.
    pub offset: Vec2,
    /// Shadow opacity.
    pub opacity: f32,
    /// Blur radius.
    pub blur_radius: f64,
    /// Shadow color; its own alpha is replaced by `opacity`.
    pub color: Color,
}

impl DropShadow {
    /// Offset (2, 2), 70% opacity, blur 1, light gray.
    pub const STANDARD: Self = Self {
        offset: Vec2::new(2.0, 2.0),
        opacity: 0.7,
        blur_radius: 1.0,
        color: Color::LIGHT_GRAY,
    };

    /// The shadow cast by a button of `size` rounded by `corner_radius`.
    pub fn shadow_for(&self, size: Size, corner_radius: f64) -> Shadow {
        Shadow {
            path: RoundedRect::from_rect(size.to_rect(), corner_radius.max(0.0)),
            offset: self.offset,
            blur_radius: self.blur_radius,
            color: self.color.with_alpha(self.opacity),
        }
    }
}

impl Default for DropShadow {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The spinner shown while loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingIndicator {
    radius: f64,
    color: Color,
    alpha: Tween,
    spinning_since: Option<u64>,
}

impl LoadingIndicator {
    fn attached(radius: f64, color: Color) -> Self {
        Self {
            radius,
            color,
            alpha: Tween::settled(0.0),
            spinning_since: None,
        }
    }

    /// Radius the indicator was attached with.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Opacity at `now`.
    pub fn alpha_at(&self, now: u64) -> f64 {
        self.alpha.value_at(now)
    }

    /// Whether the spin animation is running.
    pub fn is_spinning(&self) -> bool {
        self.spinning_since.is_some()
    }

    /// Rotation in radians at `now`; zero until spinning starts.
    pub fn angle_at(&self, now: u64) -> f64 {
        let Some(since) = self.spinning_since else {
            return 0.0;
        };
        let phase = now.saturating_sub(since) % SPIN_PERIOD_MILLIS;
        TAU * phase as f64 / SPIN_PERIOD_MILLIS as f64
    }
}

/// Indicator placement and appearance at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    /// Center of the spinner, the middle of the button.
    pub center: Point,
    /// Spinner radius.
    pub radius: f64,
    /// Stroke color with the current opacity applied.
    pub color: Color,
    /// Rotation in radians.
    pub angle: f64,
}

/// Everything needed to draw a [`MaterialButton`] at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonFrame {
    /// Body fill; transparent for outlined buttons.
    pub background: Color,
    /// Outline stroke, if any.
    pub border: Option<Border>,
    /// Drop shadow decoration, if enabled.
    pub drop_shadow: Option<Shadow>,
    /// Title opacity.
    pub title_alpha: f64,
    /// Icon opacity.
    pub icon_alpha: f64,
    /// Loading indicator, while attached.
    pub indicator: Option<IndicatorFrame>,
    /// Touch feedback.
    pub ripple: RippleFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoaderStep {
    Shown,
    Hidden,
}

struct LoaderItem {
    step: LoaderStep,
    completion: Option<Completion>,
}

impl fmt::Debug for LoaderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderItem")
            .field("step", &self.step)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

/// A pressable button with ripple feedback and an inline loader.
#[derive(Debug)]
pub struct MaterialButton {
    ripple: RippleLayer,
    title: String,
    has_icon: bool,
    title_color: Color,
    title_alpha: Tween,
    icon_alpha: Tween,
    background: Color,
    button_style: ButtonStyle,
    border: Option<Border>,
    drop_shadow: Option<DropShadow>,
    user_interaction: bool,
    loading: bool,
    indicator_radius: f64,
    indicator_color: Color,
    indicator: Option<LoadingIndicator>,
    loader_slot: PendingSlot,
    loader_queue: DeferredQueue<LoaderItem>,
    taps: TapState<()>,
}

impl MaterialButton {
    /// A filled dark-gray button with `title` and default ripple style.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            ripple: RippleLayer::new(RippleStyle::default()),
            title: title.into(),
            has_icon: false,
            title_color: Color::WHITE,
            title_alpha: Tween::settled(1.0),
            icon_alpha: Tween::settled(1.0),
            background: Color::DARK_GRAY,
            button_style: ButtonStyle::Fill,
            border: None,
            drop_shadow: None,
            user_interaction: true,
            loading: false,
            indicator_radius: DEFAULT_INDICATOR_RADIUS,
            indicator_color: Color::LIGHT_GRAY,
            indicator: None,
            loader_slot: PendingSlot::new(),
            loader_queue: DeferredQueue::new(),
            taps: TapState::new(),
        }
    }

    /// A filled button. The indicator switches to white if it would vanish into the background.
    pub fn filled(title: impl Into<String>, background: Color, title_color: Color) -> Self {
        let mut button = Self::new(title);
        button.background = background;
        button.title_color = title_color;
        if background == button.indicator_color {
            button.indicator_color = Color::WHITE;
        }
        button
    }

    /// A button drawn in `style` using `content_color` for text, border, and indicator.
    pub fn styled(title: impl Into<String>, style: ButtonStyle, content_color: Color) -> Self {
        let mut button = Self::new(title);
        button.title_color = content_color;
        button.indicator_color = content_color;
        button.set_button_style(style, content_color);
        button
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Title color.
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// Set the title color.
    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    /// Whether an icon is shown next to the title.
    pub fn has_icon(&self) -> bool {
        self.has_icon
    }

    /// Show or remove the icon.
    pub fn set_has_icon(&mut self, has_icon: bool) {
        self.has_icon = has_icon;
    }

    /// Body color used by [`ButtonStyle::Fill`].
    pub fn background(&self) -> Color {
        self.background
    }

    /// Set the body color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Current body style.
    pub fn button_style(&self) -> ButtonStyle {
        self.button_style
    }

    /// Switch body style; outlined buttons stroke their outline in `border_color`.
    pub fn set_button_style(&mut self, style: ButtonStyle, border_color: Color) {
        self.button_style = style;
        self.border = match style {
            ButtonStyle::Fill => None,
            ButtonStyle::Outline => Some(Border {
                width: OUTLINE_BORDER_WIDTH,
                color: border_color,
            }),
        };
    }

    /// Outline stroke, if any.
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    /// Enable or remove the drop shadow decoration.
    pub fn set_drop_shadow(&mut self, shadow: Option<DropShadow>) {
        self.drop_shadow = shadow;
    }

    /// Set the indicator radius used the next time the loader shows.
    pub fn set_indicator_radius(&mut self, radius: f64) {
        if radius.is_finite() {
            self.indicator_radius = radius.max(0.0);
        }
    }

    /// Set the indicator color used the next time the loader shows.
    pub fn set_indicator_color(&mut self, color: Color) {
        self.indicator_color = color;
    }

    /// Accept or ignore touches.
    pub fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.user_interaction = enabled;
        if !enabled {
            self.taps.clear();
        }
    }

    /// Whether a loader is being shown or is about to spin.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The attached indicator.
    pub fn indicator(&self) -> Option<&LoadingIndicator> {
        self.indicator.as_ref()
    }

    /// Whether a loader transition has yet to complete.
    pub fn has_pending_transition(&self) -> bool {
        self.loader_slot.is_pending()
    }

    /// Show the loading indicator, hiding `hide` while it is up.
    ///
    /// Does nothing and returns `false` if the indicator is already attached.
    /// `user_interaction` decides whether the button keeps accepting touches
    /// while loading. `completion` runs once the indicator has faded in,
    /// unless another transition supersedes this one first.
    pub fn show_loader(
        &mut self,
        now: u64,
        hide: ButtonContent,
        user_interaction: bool,
        completion: Option<Completion>,
    ) -> bool {
        if self.indicator.is_some() {
            return false;
        }
        self.loading = true;
        self.set_user_interaction_enabled(user_interaction);

        let height = self.ripple.size().height;
        let radius = self
            .indicator_radius
            .min(INDICATOR_HEIGHT_FRACTION * height / 2.0)
            .max(0.0);
        let mut indicator = LoadingIndicator::attached(radius, self.indicator_color);

        let token = self.loader_slot.begin();
        if hide.contains(ButtonContent::TITLE) {
            self.title_alpha.retarget(now, 0.0, LOADER_FADE_MILLIS, Easing::EaseOut);
        }
        if hide.contains(ButtonContent::ICON) {
            self.icon_alpha.retarget(now, 0.0, LOADER_FADE_MILLIS, Easing::EaseOut);
        }
        indicator.alpha.retarget(now, 1.0, LOADER_FADE_MILLIS, Easing::EaseOut);
        self.indicator = Some(indicator);

        self.loader_queue.schedule_with(
            now.saturating_add(LOADER_FADE_MILLIS),
            token,
            LoaderItem {
                step: LoaderStep::Shown,
                completion,
            },
        );
        log::debug!("loader shown at t={now}, radius={radius}");
        true
    }

    /// Show the loader over the icon, hiding only the title.
    pub fn show_loader_with_image(&mut self, now: u64, user_interaction: bool) -> bool {
        self.show_loader(now, ButtonContent::TITLE, user_interaction, None)
    }

    /// Remove the loading indicator and fade the content back in.
    ///
    /// Does nothing and returns `false` if no indicator is attached.
    /// `completion` runs once the content has faded in, unless another
    /// transition supersedes this one first.
    pub fn hide_loader(&mut self, now: u64, completion: Option<Completion>) -> bool {
        if self.indicator.take().is_none() {
            return false;
        }
        self.loading = false;
        self.user_interaction = true;

        let token = self.loader_slot.begin();
        self.title_alpha.retarget(now, 1.0, LOADER_FADE_MILLIS, Easing::EaseIn);
        self.icon_alpha.retarget(now, 1.0, LOADER_FADE_MILLIS, Easing::EaseIn);
        self.loader_queue.schedule_with(
            now.saturating_add(LOADER_FADE_MILLIS),
            token,
            LoaderItem {
                step: LoaderStep::Hidden,
                completion,
            },
        );
        log::debug!("loader hidden at t={now}");
        true
    }

    /// Run due loader transitions and retire finished ripples.
    ///
    /// Call once per frame with the current time.
    pub fn advance(&mut self, now: u64) -> RippleFrame {
        while let Some(item) = self.loader_queue.pop_due(now) {
            if !self.loader_slot.finish(&item.token) {
                log::debug!("loader step {:?} dropped: superseded", item.payload.step);
                continue;
            }
            let LoaderItem { step, completion } = item.payload;
            if step == LoaderStep::Shown {
                if self.loading {
                    if let Some(indicator) = self.indicator.as_mut() {
                        indicator.spinning_since = Some(item.due);
                    }
                } else {
                    self.hide_loader(now, None);
                }
            }
            log::debug!("loader step {step:?} completed at t={}", item.due);
            if let Some(completion) = completion {
                completion();
            }
        }
        self.ripple.advance(now)
    }

    /// Sample the button's appearance at `now`.
    pub fn frame(&self, now: u64) -> ButtonFrame {
        let size = self.ripple.size();
        let indicator = self.indicator.as_ref().map(|indicator| IndicatorFrame {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: indicator.radius,
            color: indicator
                .color
                .multiply_alpha(alpha_f32(indicator.alpha_at(now))),
            angle: indicator.angle_at(now),
        });
        ButtonFrame {
            background: match self.button_style {
                ButtonStyle::Fill => self.background,
                ButtonStyle::Outline => Color::TRANSPARENT,
            },
            border: self.border,
            drop_shadow: self
                .drop_shadow
                .map(|shadow| shadow.shadow_for(size, self.ripple.style().corner_radius)),
            title_alpha: self.title_alpha.value_at(now),
            icon_alpha: if self.has_icon {
                self.icon_alpha.value_at(now)
            } else {
                0.0
            },
            indicator,
            ripple: self.ripple.frame(now),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "tween opacities stay within [0, 1]"
)]
fn alpha_f32(value: f64) -> f32 {
    value as f32
}

impl RippleHost for MaterialButton {
    fn ripple(&self) -> &RippleLayer {
        &self.ripple
    }

    fn ripple_mut(&mut self) -> &mut RippleLayer {
        &mut self.ripple
    }

    fn interaction_enabled(&self) -> bool {
        self.user_interaction
    }

    fn touch_began(&mut self, point: Point, now: u64) -> bool {
        if !self.user_interaction {
            return false;
        }
        let bounds = self.ripple.size().to_rect();
        self.taps.on_down(None, (), bounds);
        self.ripple.touch_down(point, now)
    }

    fn touch_moved(&mut self, point: Point) {
        self.taps.on_move(None, point);
        self.ripple.touch_move(point);
    }

    fn touch_ended(&mut self, point: Point, now: u64) -> bool {
        self.ripple.touch_up(now);
        let over = self.ripple.size().to_rect().contains(point).then_some(&());
        let tapped = self.taps.on_up(None, over, point).is_tap();
        if tapped {
            log::debug!("button '{}' tapped at t={now}", self.title);
        }
        tapped
    }

    fn touch_cancelled(&mut self, now: u64) {
        self.taps.cancel(None);
        self.ripple.touch_cancel(now);
    }
}
