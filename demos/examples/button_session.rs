// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted touch and loader session on a material button.
//!
//! The button is tapped, the tap starts a loader, and the loader is hidden
//! again half a second later. Every 50 ms the sampled frame is printed, the
//! way a renderer would consume it.
//!
//! Run:
//! - `cargo run -p tactile_demos --example button_session`

use kurbo::{Point, Size};
use tactile_ripple::RipplePhase;
use tactile_widgets::{ButtonContent, MaterialButton, RippleHost};

fn main() {
    let mut button = MaterialButton::new("Submit");
    button.set_has_icon(true);
    button.resize(Size::new(160.0, 44.0));
    button.ripple_mut().set_corner_radius(8.0);
    button.ripple_mut().set_elevation(2.0);

    button.touch_began(Point::new(30.0, 22.0), 0);
    if button.touch_ended(Point::new(32.0, 22.0), 120) {
        println!("t=120 tapped, showing loader");
        button.show_loader(
            120,
            ButtonContent::ALL,
            false,
            Some(Box::new(|| println!("  loader is up"))),
        );
    }

    for now in (0..=1200).step_by(50) {
        if now == 650 {
            println!("t=650 work finished, hiding loader");
            button.hide_loader(now, Some(Box::new(|| println!("  content is back"))));
        }
        let ripple = button.advance(now);
        let frame = button.frame(now);
        let radius = ripple.ripple.map_or(0.0, |r| r.circle.radius);
        let spinner = frame
            .indicator
            .map(|i| format!("spinner a={:.2} angle={:.2}", i.color.a, i.angle))
            .unwrap_or_else(|| "no spinner".to_owned());
        println!(
            "t={now:>4} {:<10} r={radius:>6.1} title={:.2} icon={:.2} {spinner}",
            phase_name(ripple.phase),
            frame.title_alpha,
            frame.icon_alpha,
        );
    }
}

fn phase_name(phase: RipplePhase) -> &'static str {
    match phase {
        RipplePhase::Idle => "idle",
        RipplePhase::Growing => "growing",
        RipplePhase::FullyGrown => "held",
        RipplePhase::FadingOut => "fading",
    }
}
