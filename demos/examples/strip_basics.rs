// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip basics.
//!
//! This minimal example measures a five-indicator strip, feeds it a tap and
//! a drag, and prints the observer notifications and damage each step emits.
//!
//! Run:
//! - `cargo run -p ratestrip_demos --example strip_basics`

use kurbo::{Point, Size};
use ratestrip_layout::Constraints;
use ratestrip_model::{DragObserver, RateObserver};
use ratestrip_widget::{GlyphSource, PointerEvent, RatingStrip};

struct Console(&'static str);

impl RateObserver for Console {
    fn rate_changed(&mut self, rate: f64, from_user: bool) {
        println!("[{}] rate_changed({rate}, from_user: {from_user})", self.0);
    }
}

impl DragObserver for Console {
    fn drag_started(&mut self, rate: f64) {
        println!("[{}] drag_started({rate})", self.0);
    }
    fn drag_moved(&mut self, rate: f64) {
        println!("[{}] drag_moved({rate})", self.0);
    }
    fn drag_finished(&mut self, rate: f64) {
        println!("[{}] drag_finished({rate})", self.0);
    }
}

fn main() {
    let mut strip = RatingStrip::new(GlyphSource::vector(Size::new(50.0, 50.0)));
    strip.set_spacing(0.0);
    strip.add_rate_observer(Box::new(Console("rate")));
    strip.add_drag_observer(Box::new(Console("drag")));

    let size = strip.measure(&Constraints::tight(Size::new(250.0, 50.0)));
    println!("measured: {size:?}");
    for (i, rect) in strip.layout().unwrap().rects.iter().enumerate() {
        println!("  indicator {i}: {rect:?}");
    }

    println!("== Tap at x = 120 (inside a scrollable ancestor) ==");
    strip.set_in_scroll_container(true);
    strip.handle_pointer(PointerEvent::Down(Point::new(120.0, 25.0)));
    let resp = strip.handle_pointer(PointerEvent::Up(Point::new(120.0, 25.0)));
    println!("rate: {}, damage: {:?}", strip.rate(), resp.damage);

    println!("== Drag from x = 30 to x = 220 ==");
    strip.set_in_scroll_container(false);
    strip.handle_pointer(PointerEvent::Down(Point::new(30.0, 25.0)));
    strip.handle_pointer(PointerEvent::Move(Point::new(120.0, 25.0)));
    strip.handle_pointer(PointerEvent::Move(Point::new(220.0, 25.0)));
    strip.handle_pointer(PointerEvent::Up(Point::new(220.0, 25.0)));
    println!("rate: {}", strip.rate());

    println!("pending damage: {:?}", strip.take_damage());
}
