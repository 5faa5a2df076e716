// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple engine: touch sessions, phases, and sampled frames.
//!
//! A [`RippleLayer`] is owned by exactly one host. The host forwards its
//! bounds and touch stream, and samples a [`RippleFrame`] whenever it draws.
//! All timing is derived from the millisecond timestamps passed in, so the
//! engine never owns a clock and never schedules anything.
//!
//! ## Session lifecycle
//!
//! ```text
//! Idle ──down──► Growing ──duration──► FullyGrown ──up/cancel──► FadingOut ──fade──► Idle
//!                   │                                                │
//!                   └──────────── down (new session replaces) ◄──────┘
//! ```
//!
//! - A release during growth is remembered; the fade starts when growth
//!   completes, so the entrance animation is never cut short.
//! - A new touch-down always replaces the current session, whatever its
//!   phase. There is never more than one visible ripple.
//! - Progress is a function of time only. Resizing rescales the endpoint
//!   radius and leaves the progress fraction untouched.
//!
//! ```
//! use kurbo::{Point, Size};
//! use tactile_ripple::{RippleLayer, RipplePhase, RippleStyle};
//!
//! let mut layer = RippleLayer::new(RippleStyle::default());
//! layer.resize(Size::new(100.0, 40.0));
//!
//! layer.touch_down(Point::new(10.0, 20.0), 0);
//! layer.touch_up(100);
//!
//! // The early release waits for growth to finish.
//! assert_eq!(layer.frame(200).phase, RipplePhase::Growing);
//! assert_eq!(layer.frame(350).phase, RipplePhase::FadingOut);
//!
//! let ripple = layer.frame(350).ripple.unwrap();
//! assert_eq!(ripple.circle.center, Point::new(10.0, 20.0));
//! assert_eq!(ripple.circle.radius, 100.0);
//!
//! // Sampling after the fade retires the session.
//! assert_eq!(layer.advance(700).phase, RipplePhase::Idle);
//! assert!(layer.session().is_none());
//! ```

use kurbo::{Circle, Point, RoundedRect, Size, Vec2};

use crate::anim::Easing;
use crate::color::{Color, opacity_f32};
use crate::corners::RoundingCorners;
use crate::geometry::{LayerGeometry, Shadow};
use crate::style::RippleStyle;

/// Curve mapping growth progress to radius and background tint.
pub const GROWTH_EASING: Easing = Easing::FastOutSlowIn;

/// Curve mapping fade progress to lost opacity.
pub const FADE_EASING: Easing = Easing::EaseIn;

/// Phase of the current touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RipplePhase {
    /// No session, nothing drawn.
    Idle,
    /// The circle is expanding towards its full radius.
    Growing,
    /// Fully expanded; held until the touch is released.
    FullyGrown,
    /// Released and fully grown; opacity is falling to zero.
    FadingOut,
}

/// A touch-down to release span driving one ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSession {
    /// Touch-down position and ripple center.
    pub origin: Point,
    /// Touch-down timestamp.
    pub started_at: u64,
    /// Release (up or cancel) timestamp, once released.
    pub released_at: Option<u64>,
    /// Most recent position reported while held.
    pub last_position: Point,
    /// Growth and fade duration, fixed at touch-down.
    pub duration_millis: u64,
}

impl TouchSession {
    /// Timestamp at which growth completes.
    pub fn grown_at(&self) -> u64 {
        self.started_at.saturating_add(self.duration_millis)
    }

    /// Timestamp at which the fade starts, if the touch has been released.
    ///
    /// Never earlier than [`grown_at`](Self::grown_at).
    pub fn fade_starts_at(&self) -> Option<u64> {
        self.released_at.map(|released| released.max(self.grown_at()))
    }

    /// Timestamp at which the fade completes, if the touch has been released.
    pub fn fade_ends_at(&self) -> Option<u64> {
        self.fade_starts_at().map(|fade_start| fade_start.saturating_add(self.duration_millis))
    }

    /// Whether the touch has been released.
    pub fn is_released(&self) -> bool {
        self.released_at.is_some()
    }
}

/// The ripple circle at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleCircle {
    /// Circle in host-local coordinates.
    pub circle: Circle,
    /// Fill color; its alpha is the current ripple opacity.
    pub color: Color,
}

/// Everything a renderer needs to draw the layer at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleFrame {
    /// Phase at the sampled time.
    pub phase: RipplePhase,
    /// Linear growth progress in `[0, 1]`; zero when idle.
    pub progress: f64,
    /// The ripple circle, absent when idle, disabled, or degenerate.
    pub ripple: Option<RippleCircle>,
    /// Background tint over the whole host, absent when idle or disabled.
    pub background: Option<Color>,
    /// Clip for the ripple and background, absent when masking is disabled.
    pub clip: Option<RoundedRect>,
    /// Static elevation shadow.
    pub shadow: Option<Shadow>,
}

/// Touch feedback engine for one host.
///
/// At most one [`TouchSession`] is live. A release during growth defers the
/// fade until growth completes, and a new touch-down replaces the session
/// whatever its phase.
#[derive(Clone, Debug)]
pub struct RippleLayer {
    style: RippleStyle,
    size: Size,
    geometry: LayerGeometry,
    session: Option<TouchSession>,
    revision: u64,
}

impl RippleLayer {
    /// Create a layer for a host that has not been laid out yet.
    pub fn new(style: RippleStyle) -> Self {
        Self::with_size(style, Size::ZERO)
    }

    /// Create a layer for a host of known size.
    pub fn with_size(style: RippleStyle, size: Size) -> Self {
        let style = style.sanitized();
        Self {
            geometry: LayerGeometry::compute(size, &style),
            style,
            size,
            session: None,
            revision: 0,
        }
    }

    /// Current configuration.
    pub fn style(&self) -> &RippleStyle {
        &self.style
    }

    /// Host size last passed to [`resize`](Self::resize).
    pub fn size(&self) -> Size {
        self.size
    }

    /// Geometry derived from the current size and style.
    pub fn geometry(&self) -> &LayerGeometry {
        &self.geometry
    }

    /// The current touch session, if any.
    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Counter bumped on every re-sync, for hosts that cache rendered output.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Host bounds changed: recompute mask, shadow, and ripple extent.
    ///
    /// An in-flight ripple keeps its progress and grows towards the new radius.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.resync();
    }

    /// Replace the whole configuration.
    pub fn set_style(&mut self, style: RippleStyle) {
        self.update(|s| *s = style);
    }

    /// Set the elevation shadow depth.
    pub fn set_elevation(&mut self, elevation: f64) {
        self.update(|s| s.elevation = elevation);
    }

    /// Set the elevation shadow offset.
    pub fn set_shadow_offset(&mut self, offset: Vec2) {
        self.update(|s| s.shadow_offset = offset);
    }

    /// Choose which corners are rounded.
    pub fn set_rounding_corners(&mut self, corners: RoundingCorners) {
        self.update(|s| s.rounding_corners = corners);
    }

    /// Set the host's corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.update(|s| s.corner_radius = radius);
    }

    /// Clip the ripple to the host's rounded shape, or let it bleed out.
    pub fn set_mask_enabled(&mut self, enabled: bool) {
        self.update(|s| s.mask_enabled = enabled);
    }

    /// Show or hide the expanding circle.
    pub fn set_ripple_enabled(&mut self, enabled: bool) {
        self.update(|s| s.ripple_enabled = enabled);
    }

    /// Set the growth duration in milliseconds.
    pub fn set_ripple_duration(&mut self, millis: u64) {
        self.update(|s| s.ripple_duration_millis = millis);
    }

    /// Set the full radius as a multiple of the host's longer side.
    pub fn set_ripple_scale_ratio(&mut self, ratio: f64) {
        self.update(|s| s.ripple_scale_ratio = ratio);
    }

    /// Set the ripple and background tint color.
    pub fn set_ripple_color(&mut self, color: Color) {
        self.update(|s| s.ripple_color = color);
    }

    /// Set the ripple and background tint opacity.
    pub fn set_ripple_alpha(&mut self, alpha: f32) {
        self.update(|s| s.ripple_alpha = alpha);
    }

    /// Enable or disable background tinting while touched.
    pub fn set_background_animation_enabled(&mut self, enabled: bool) {
        self.update(|s| s.background_animation_enabled = enabled);
    }

    fn update(&mut self, apply: impl FnOnce(&mut RippleStyle)) {
        apply(&mut self.style);
        self.style = self.style.sanitized();
        self.resync();
    }

    fn resync(&mut self) {
        self.geometry = LayerGeometry::compute(self.size, &self.style);
        self.revision = self.revision.wrapping_add(1);
        log::trace!(
            "ripple layer resynced: size={:?} max_radius={} revision={}",
            self.size,
            self.geometry.max_radius,
            self.revision
        );
    }

    /// Start a new ripple at `point`.
    ///
    /// Any session in flight is abandoned, including one that is fading out.
    /// Returns `false` when both the ripple and background animation are
    /// disabled, in which case nothing starts.
    pub fn touch_down(&mut self, point: Point, now: u64) -> bool {
        if !self.style.ripple_enabled && !self.style.background_animation_enabled {
            log::debug!("touch down ignored: ripple and background animation disabled");
            return false;
        }
        if let Some(previous) = self.session.as_ref() {
            log::debug!(
                "ripple at {:?} pre-empted in {:?}",
                previous.origin,
                self.phase_at(now)
            );
        }
        self.session = Some(TouchSession {
            origin: point,
            started_at: now,
            released_at: None,
            last_position: point,
            duration_millis: self.style.ripple_duration_millis,
        });
        log::debug!("ripple started at {point:?}, t={now}");
        true
    }

    /// Record the latest position of a held touch. The ripple stays centered on its origin.
    pub fn touch_move(&mut self, point: Point) {
        if let Some(session) = self.session.as_mut().filter(|s| !s.is_released()) {
            session.last_position = point;
        }
    }

    /// Release the touch. The fade starts once growth has completed.
    ///
    /// Returns `false` when there is no held touch.
    pub fn touch_up(&mut self, now: u64) -> bool {
        self.release(now)
    }

    /// Cancel the touch. Visually identical to [`touch_up`](Self::touch_up).
    pub fn touch_cancel(&mut self, now: u64) -> bool {
        self.release(now)
    }

    fn release(&mut self, now: u64) -> bool {
        let Some(session) = self.session.as_mut().filter(|s| !s.is_released()) else {
            return false;
        };
        let released = now.max(session.started_at);
        session.released_at = Some(released);
        log::debug!(
            "ripple released at t={released}, fade starts at t={}",
            released.max(session.grown_at())
        );
        true
    }

    /// Drop any session immediately, without fading.
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// Phase of the current session at `now`.
    pub fn phase_at(&self, now: u64) -> RipplePhase {
        let Some(session) = self.session.as_ref() else {
            return RipplePhase::Idle;
        };
        if now < session.grown_at() {
            return RipplePhase::Growing;
        }
        match (session.fade_starts_at(), session.fade_ends_at()) {
            (Some(fade_start), _) if now < fade_start => RipplePhase::FullyGrown,
            (Some(_), Some(fade_end)) if now < fade_end => RipplePhase::FadingOut,
            (Some(_), _) => RipplePhase::Idle,
            (None, _) => RipplePhase::FullyGrown,
        }
    }

    /// Linear growth progress of the current session at `now`, in `[0, 1]`.
    pub fn progress_at(&self, now: u64) -> f64 {
        let Some(session) = self.session.as_ref() else {
            return 0.0;
        };
        let duration = session.duration_millis;
        if duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(session.started_at);
        (elapsed as f64 / duration as f64).min(1.0)
    }

    /// Whether anything is animating or held at `now`.
    pub fn is_active(&self, now: u64) -> bool {
        self.phase_at(now) != RipplePhase::Idle
    }

    /// Sample the visual state at `now` without changing the layer.
    pub fn frame(&self, now: u64) -> RippleFrame {
        let phase = self.phase_at(now);
        let idle = RippleFrame {
            phase: RipplePhase::Idle,
            progress: 0.0,
            ripple: None,
            background: None,
            clip: self.geometry.mask,
            shadow: self.geometry.shadow,
        };
        let Some(session) = self.session.as_ref() else {
            return idle;
        };
        if phase == RipplePhase::Idle {
            return idle;
        }

        let duration = session.duration_millis;
        let progress = self.progress_at(now);
        let grown = GROWTH_EASING.transform(progress);
        let faded = match (phase, session.fade_starts_at()) {
            (RipplePhase::FadingOut, Some(fade_start)) if duration > 0 => {
                let elapsed = now.saturating_sub(fade_start);
                FADE_EASING.transform(elapsed as f64 / duration as f64)
            }
            _ => 0.0,
        };
        let visibility = 1.0 - faded;
        let alpha = self.style.ripple_alpha;

        let ripple = (self.style.ripple_enabled && !self.geometry.is_degenerate()).then(|| {
            RippleCircle {
                circle: Circle::new(session.origin, grown * self.geometry.max_radius),
                color: self
                    .style
                    .ripple_color
                    .with_alpha(alpha * opacity_f32(visibility)),
            }
        });
        let background = (self.style.background_animation_enabled
            && !self.geometry.bounds.is_zero_area())
        .then(|| {
            self.style
                .ripple_color
                .with_alpha(alpha * opacity_f32(grown * visibility))
        });

        RippleFrame {
            phase,
            progress,
            ripple,
            background,
            clip: self.geometry.mask,
            shadow: self.geometry.shadow,
        }
    }

    /// Sample the visual state at `now` and retire the session once its fade has completed.
    pub fn advance(&mut self, now: u64) -> RippleFrame {
        let frame = self.frame(now);
        if frame.phase == RipplePhase::Idle && self.session.take().is_some() {
            log::debug!("ripple session retired at t={now}");
        }
        frame
    }
}

impl Default for RippleLayer {
    fn default() -> Self {
        Self::new(RippleStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> RippleLayer {
        RippleLayer::with_size(RippleStyle::default(), Size::new(100.0, 40.0))
    }

    fn radius(layer: &RippleLayer, now: u64) -> f64 {
        layer
            .frame(now)
            .ripple
            .expect("ripple should be visible")
            .circle
            .radius
    }

    #[test]
    fn idle_layer_draws_nothing() {
        let layer = layer();
        let frame = layer.frame(0);
        assert_eq!(frame.phase, RipplePhase::Idle);
        assert!(frame.ripple.is_none());
        assert!(frame.background.is_none());
        assert!(frame.clip.is_some(), "mask geometry is reported while idle");
    }

    #[test]
    fn ripple_grows_from_touch_point_to_full_radius() {
        let mut layer = layer();
        assert!(layer.touch_down(Point::new(10.0, 20.0), 1000));

        let start = layer.frame(1000).ripple.unwrap();
        assert_eq!(start.circle.center, Point::new(10.0, 20.0));
        assert_eq!(start.circle.radius, 0.0);

        let mid = radius(&layer, 1175);
        assert!(mid > 0.0 && mid < 100.0, "mid-growth radius was {mid}");

        assert_eq!(layer.frame(1350).phase, RipplePhase::FullyGrown);
        assert_eq!(radius(&layer, 1350), 100.0);
        // Held touches keep the full ripple indefinitely.
        assert_eq!(layer.frame(60_000).phase, RipplePhase::FullyGrown);
    }

    #[test]
    fn early_release_waits_for_growth() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 20.0), 0);
        assert!(layer.touch_up(100));

        for t in [100, 200, 349] {
            assert_eq!(layer.frame(t).phase, RipplePhase::Growing, "at t={t}");
        }
        let frame = layer.frame(350);
        assert_eq!(frame.phase, RipplePhase::FadingOut);
        let ripple = frame.ripple.unwrap();
        assert_eq!(ripple.circle.radius, 100.0);
        assert_eq!(ripple.color.a, 0.3, "fade has not taken any opacity yet");
        assert_eq!(layer.session().unwrap().fade_starts_at(), Some(350));
    }

    #[test]
    fn late_release_fades_immediately() {
        let mut layer = layer();
        layer.touch_down(Point::new(50.0, 20.0), 0);
        assert_eq!(layer.frame(500).phase, RipplePhase::FullyGrown);
        layer.touch_up(500);
        assert_eq!(layer.frame(500).phase, RipplePhase::FadingOut);
        let fading = layer.frame(700).ripple.unwrap().color.a;
        assert!(fading < 0.3 && fading > 0.0, "opacity mid-fade was {fading}");
        assert_eq!(layer.frame(850).phase, RipplePhase::Idle);
    }

    #[test]
    fn cancel_behaves_like_release() {
        let mut layer = layer();
        layer.touch_down(Point::new(5.0, 5.0), 0);
        assert!(layer.touch_cancel(10));
        assert_eq!(layer.frame(349).phase, RipplePhase::Growing);
        assert_eq!(layer.frame(350).phase, RipplePhase::FadingOut);
        assert_eq!(layer.frame(700).phase, RipplePhase::Idle);
    }

    #[test]
    fn release_without_touch_is_ignored() {
        let mut layer = layer();
        assert!(!layer.touch_up(10));
        assert!(!layer.touch_cancel(10));
        layer.touch_down(Point::ZERO, 0);
        assert!(layer.touch_up(10));
        assert!(!layer.touch_up(20), "second release is ignored");
        assert_eq!(layer.session().unwrap().released_at, Some(10));
    }

    #[test]
    fn new_touch_replaces_session_in_flight() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 10.0), 0);
        layer.touch_down(Point::new(90.0, 30.0), 100);
        layer.touch_down(Point::new(50.0, 20.0), 200);

        let frame = layer.frame(250);
        assert_eq!(frame.phase, RipplePhase::Growing);
        let ripple = frame.ripple.unwrap();
        assert_eq!(ripple.circle.center, Point::new(50.0, 20.0));
        assert!(ripple.circle.radius < 100.0, "newest ripple restarted growth");
        assert_eq!(layer.session().unwrap().started_at, 200);
    }

    #[test]
    fn new_touch_abandons_fade() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 10.0), 0);
        layer.touch_up(400);
        assert_eq!(layer.frame(500).phase, RipplePhase::FadingOut);

        layer.touch_down(Point::new(60.0, 10.0), 500);
        let frame = layer.frame(500);
        assert_eq!(frame.phase, RipplePhase::Growing);
        assert_eq!(frame.progress, 0.0);
        assert!(!layer.session().unwrap().is_released());
    }

    #[test]
    fn resize_keeps_progress_and_rescales_radius() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 20.0), 0);
        let before = layer.frame(175);
        layer.resize(Size::new(200.0, 40.0));
        let after = layer.frame(175);

        assert_eq!(before.progress, after.progress);
        assert_eq!(after.phase, RipplePhase::Growing);
        let r_before = before.ripple.unwrap().circle.radius;
        let r_after = after.ripple.unwrap().circle.radius;
        assert!((r_after - 2.0 * r_before).abs() < 1e-9, "radius rescales with bounds");
        assert_eq!(radius(&layer, 350), 200.0);
    }

    #[test]
    fn background_tint_tracks_growth_and_fade() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 10.0), 0);
        assert_eq!(layer.frame(0).background.unwrap().a, 0.0);
        assert_eq!(layer.frame(350).background.unwrap().a, 0.3);
        layer.touch_up(350);
        assert!(layer.frame(500).background.unwrap().a < 0.3);
    }

    #[test]
    fn disabled_ripple_keeps_background_tint() {
        let mut layer = layer();
        layer.set_ripple_enabled(false);
        assert!(layer.touch_down(Point::new(10.0, 10.0), 0));
        let frame = layer.frame(350);
        assert!(frame.ripple.is_none());
        assert_eq!(frame.background.unwrap().a, 0.3);
    }

    #[test]
    fn fully_disabled_layer_ignores_touches() {
        let mut layer = layer();
        layer.set_ripple_enabled(false);
        layer.set_background_animation_enabled(false);
        assert!(!layer.touch_down(Point::new(10.0, 10.0), 0));
        assert!(layer.session().is_none());
        assert_eq!(layer.frame(100).phase, RipplePhase::Idle);
    }

    #[test]
    fn zero_size_host_degrades_to_no_ripple() {
        let mut layer = RippleLayer::default();
        assert!(layer.touch_down(Point::new(1.0, 1.0), 0));
        let frame = layer.frame(100);
        assert_eq!(frame.phase, RipplePhase::Growing);
        assert!(frame.ripple.is_none());
        assert!(frame.background.is_none());
    }

    #[test]
    fn mask_toggle_controls_clip() {
        let mut layer = layer();
        layer.set_corner_radius(8.0);
        assert!(layer.frame(0).clip.is_some());
        layer.set_mask_enabled(false);
        assert!(layer.frame(0).clip.is_none());
    }

    #[test]
    fn setters_take_effect_immediately() {
        let mut layer = layer();
        let revision = layer.revision();

        layer.set_elevation(4.0);
        assert_eq!(layer.frame(0).shadow.unwrap().blur_radius, 4.0);
        layer.set_ripple_scale_ratio(2.0);
        assert_eq!(layer.geometry().max_radius, 200.0);
        layer.set_ripple_color(Color::WHITE);
        layer.set_ripple_alpha(0.5);
        layer.touch_down(Point::new(0.0, 0.0), 0);
        let ripple = layer.frame(10).ripple.unwrap();
        assert_eq!(ripple.color, Color::WHITE.with_alpha(0.5));

        assert_eq!(layer.revision(), revision + 4);
    }

    #[test]
    fn duration_change_spares_session_in_flight() {
        let mut layer = layer();
        layer.touch_down(Point::new(0.0, 0.0), 0);
        layer.touch_up(400);
        assert_eq!(layer.frame(500).phase, RipplePhase::FadingOut);
        let before = radius(&layer, 500);

        layer.set_ripple_duration(1000);
        assert_eq!(layer.frame(500).phase, RipplePhase::FadingOut);
        assert_eq!(radius(&layer, 500), before);
        assert_eq!(layer.frame(750).phase, RipplePhase::Idle);

        layer.set_ripple_duration(0);
        assert_eq!(layer.frame(600).phase, RipplePhase::FadingOut);

        // The next touch picks up the new duration.
        layer.touch_down(Point::new(0.0, 0.0), 1000);
        assert_eq!(layer.session().unwrap().duration_millis, 0);
        assert_eq!(layer.frame(1000).phase, RipplePhase::FullyGrown);
    }

    #[test]
    fn zero_duration_grows_and_fades_instantly() {
        let mut layer = layer();
        layer.set_ripple_duration(0);
        layer.touch_down(Point::new(0.0, 0.0), 0);
        assert_eq!(layer.frame(0).phase, RipplePhase::FullyGrown);
        layer.touch_up(5);
        assert_eq!(layer.frame(5).phase, RipplePhase::Idle);
    }

    #[test]
    fn move_updates_last_position_only() {
        let mut layer = layer();
        layer.touch_down(Point::new(10.0, 10.0), 0);
        layer.touch_move(Point::new(30.0, 12.0));
        let session = layer.session().unwrap();
        assert_eq!(session.last_position, Point::new(30.0, 12.0));
        assert_eq!(layer.frame(50).ripple.unwrap().circle.center, Point::new(10.0, 10.0));
    }

    #[test]
    fn advance_retires_finished_session() {
        let mut layer = layer();
        layer.touch_down(Point::new(0.0, 0.0), 0);
        layer.touch_up(0);
        assert_eq!(layer.advance(500).phase, RipplePhase::FadingOut);
        assert!(layer.session().is_some());
        assert_eq!(layer.advance(700).phase, RipplePhase::Idle);
        assert!(layer.session().is_none());
        assert!(!layer.is_active(700));
    }

    #[test]
    fn clear_drops_session() {
        let mut layer = layer();
        layer.touch_down(Point::new(0.0, 0.0), 0);
        layer.clear();
        assert_eq!(layer.frame(10).phase, RipplePhase::Idle);
    }
}
