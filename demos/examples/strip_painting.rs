// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame planning and painting.
//!
//! This example plans the two-pass frame for a few rates and replays it
//! through a console painter, showing the background pass, the overlay clip
//! at the fractional fill boundary, and how a custom resolver changes the
//! tints per visual state.
//!
//! Run:
//! - `cargo run -p ratestrip_demos --example strip_painting`

use kurbo::{Rect, Size};
use peniko::Color;
use ratestrip_layout::Constraints;
use ratestrip_model::StateFlags;
use ratestrip_widget::render::render;
use ratestrip_widget::{ColorResolver, GlyphSource, IndicatorPainter, RatingStrip, StateColors};

/// Dims the fill tint while the strip is pressed.
struct PressAware {
    empty: Color,
    fill: StateColors,
}

impl ColorResolver for PressAware {
    fn resolve(&self, rate: f64, state: StateFlags) -> Color {
        if rate <= 0.0 {
            self.empty
        } else {
            self.fill.color_for(state)
        }
    }
}

struct ConsolePainter {
    depth: usize,
}

impl IndicatorPainter for ConsolePainter {
    fn fill_glyph(&mut self, bounds: Rect, tint: Color) {
        let indent = "  ".repeat(self.depth);
        println!("{indent}glyph {bounds:?} tint {tint:?}");
    }
    fn push_clip(&mut self, clip: Rect) {
        println!("clip {clip:?} {{");
        self.depth += 1;
    }
    fn pop_clip(&mut self) {
        self.depth -= 1;
        println!("}}");
    }
}

fn main() {
    let gold = Color::from_rgb8(0xff, 0xc1, 0x07);
    let pressed_gold = Color::from_rgb8(0xc7, 0x92, 0x00);
    let resolver = PressAware {
        empty: Color::from_rgb8(0x9e, 0x9e, 0x9e),
        fill: StateColors::new(vec![(StateFlags::PRESSED, pressed_gold)], gold),
    };

    let mut strip =
        RatingStrip::with_resolver(GlyphSource::vector(Size::new(40.0, 40.0)), Box::new(resolver));
    strip.set_spacing(0.0);
    strip.measure(&Constraints::tight(Size::new(200.0, 40.0)));

    let mut painter = ConsolePainter { depth: 0 };
    for rate in [0.0, 2.5, 5.0] {
        strip.set_rate(rate);
        let frame = strip.frame().unwrap();
        println!("== rate {rate} ==");
        render(&frame, &strip.layout().unwrap().rects, &mut painter);
    }
}
