// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-gesture state machine: tap vs. pan vs. drag, and pointer → rate.
//!
//! ## Overview
//!
//! The controller consumes raw pointer events plus the current
//! [`RowLayout`] and drives the model. Three phases:
//!
//! - **Idle**: nothing in flight.
//! - **Pending**: pointer is down inside a scroll container; the drag is
//!   deferred until the horizontal displacement from the down position
//!   exceeds the slop threshold, so the container can still claim a pan.
//! - **Dragging**: every move recomputes the quantized rate.
//!
//! Outside a scroll container a down starts the drag immediately. A release
//! without a drag is a tap: the rate is set from the release position and a
//! single settled notification is emitted, with no drag lifecycle events.
//!
//! Starting a drag asks the host to stop ancestor containers from
//! intercepting further pointer events; see [`GestureResponse::claim`].

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use ratestrip_layout::RowLayout;
use ratestrip_model::{Damage, RatingModel};

/// Default slop threshold, in logical pixels.
///
/// Hosts that know the platform's touch slop should override this via
/// [`GestureController::with_slop`].
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// A raw pointer event in widget coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down.
    Down(Point),
    /// Pointer moved while down.
    Move(Point),
    /// Pointer was released.
    Up(Point),
    /// The gesture was taken away (for example by a scroll container).
    Cancel,
}

/// What a pointer event produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureResponse {
    /// Whether the widget consumed the event.
    pub handled: bool,
    /// Whether the host should ask ancestor containers not to intercept
    /// further pointer events (set exactly when a drag starts).
    pub claim: bool,
    /// Invalidation produced by the event.
    pub damage: Damage,
}

impl GestureResponse {
    /// The event was not consumed (disabled or display-only widget).
    pub const fn ignored() -> Self {
        Self {
            handled: false,
            claim: false,
            damage: Damage::empty(),
        }
    }

    const fn handled(damage: Damage) -> Self {
        Self {
            handled: true,
            claim: false,
            damage,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Pending { down_x: f64 },
    Dragging,
}

/// Deterministic tap/pan/drag disambiguator.
#[derive(Clone, Debug)]
pub struct GestureController {
    slop: f64,
    in_scroll_container: bool,
    phase: Phase,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    /// A controller with the default slop, not inside a scroll container.
    pub fn new() -> Self {
        Self::with_slop(DEFAULT_TOUCH_SLOP)
    }

    /// A controller with an explicit slop threshold.
    pub fn with_slop(slop: f64) -> Self {
        Self {
            slop,
            in_scroll_container: false,
            phase: Phase::Idle,
        }
    }

    /// Tell the controller whether an ancestor delays child presses.
    ///
    /// The host detects this by walking its container hierarchy; inside a
    /// scroll container the drag start is deferred until the slop is
    /// exceeded so pans keep working.
    pub fn set_in_scroll_container(&mut self, inside: bool) {
        self.in_scroll_container = inside;
    }

    /// True while a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Feed one pointer event.
    ///
    /// Returns [`GestureResponse::ignored`] when the model is display-only
    /// or disabled; the host should let the event propagate.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        model: &mut RatingModel,
        layout: &RowLayout,
    ) -> GestureResponse {
        if model.is_indicator_only() || !model.is_enabled() {
            return GestureResponse::ignored();
        }
        match event {
            PointerEvent::Down(pos) => {
                model.begin_touch();
                if self.in_scroll_container {
                    self.phase = Phase::Pending { down_x: pos.x };
                    GestureResponse::handled(Damage::empty())
                } else {
                    self.start_drag(pos.x, model, layout)
                }
            }
            PointerEvent::Move(pos) => match self.phase {
                Phase::Dragging => GestureResponse::handled(self.track(pos.x, model, layout)),
                Phase::Pending { down_x } => {
                    if (pos.x - down_x).abs() > self.slop {
                        self.start_drag(pos.x, model, layout)
                    } else {
                        GestureResponse::handled(Damage::empty())
                    }
                }
                Phase::Idle => GestureResponse::handled(Damage::empty()),
            },
            PointerEvent::Up(pos) => {
                let damage = if self.phase == Phase::Dragging {
                    let tracked = self.track(pos.x, model, layout);
                    model.end_touch();
                    tracked | model.finish_drag()
                } else {
                    // A tap: the rate is set silently (still touched), then
                    // committed as a single settled notification.
                    let tracked = self.track(pos.x, model, layout);
                    model.end_touch();
                    tracked | model.commit_tap()
                };
                self.phase = Phase::Idle;
                GestureResponse::handled(damage)
            }
            PointerEvent::Cancel => {
                model.end_touch();
                let damage = if self.phase == Phase::Dragging {
                    model.cancel_drag()
                } else {
                    Damage::empty()
                };
                self.phase = Phase::Idle;
                GestureResponse::handled(damage | Damage::PAINT)
            }
        }
    }

    fn start_drag(
        &mut self,
        x: f64,
        model: &mut RatingModel,
        layout: &RowLayout,
    ) -> GestureResponse {
        self.phase = Phase::Dragging;
        let mut damage = model.begin_drag();
        damage |= self.track(x, model, layout);
        GestureResponse {
            handled: true,
            claim: true,
            damage,
        }
    }

    fn track(&self, x: f64, model: &mut RatingModel, layout: &RowLayout) -> Damage {
        match rate_from_position(x, model.step_size(), model.indicator_count(), layout) {
            Some(rate) => model.set_rate(rate),
            // A gesture miss (gap between indicators) leaves the rate
            // unchanged but still repaints.
            None => Damage::PAINT,
        }
    }
}

/// Convert a pointer x position into a quantized rate.
///
/// The position is clamped to the padded content region; the whole-indicator
/// part comes from the proportional position across the row, and the
/// fractional part from quantizing the offset within the indicator under the
/// pointer to the nearest `step` multiple. A `step` of `1.0` takes the whole
/// indicator. Returns `None` when the position falls in a gap.
pub fn rate_from_position(x: f64, step: f64, count: usize, layout: &RowLayout) -> Option<f64> {
    let pad = layout.padding;
    let width = layout.size.width;
    let avail = width - pad.x0 - pad.x1;
    if avail <= 0.0 {
        return None;
    }
    let x_content = if x < pad.x0 {
        0.0
    } else if x > width - pad.x1 {
        avail
    } else {
        x - pad.x0
    };
    let initial = (x_content / avail * count as f64).ceil() - 1.0;

    let (_, rect) = layout.indicator_at_x(x)?;
    let fraction = if step == 1.0 {
        // Whole-indicator quantization: the touched indicator counts fully.
        1.0
    } else if rect.width() <= 0.0 {
        0.0
    } else {
        step * (((x - rect.x0) / rect.width()) / step).round()
    };
    Some(initial + fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Insets, Size};
    use ratestrip_layout::{AxisConstraint, Constraints, layout_row};

    // The row used throughout: five 50×50 glyphs, no spacing or padding.
    fn row() -> RowLayout {
        let c = Constraints {
            width: AxisConstraint::exact(250.0),
            height: AxisConstraint::at_most(50.0),
            padding: Insets::ZERO,
        };
        layout_row(&c, Size::new(50.0, 50.0), 5, 0.0)
    }

    #[test]
    fn position_maps_to_quantized_rate() {
        // x = 120 lands in indicator 2 at 40% → snaps to half.
        assert_eq!(rate_from_position(120.0, 0.5, 5, &row()), Some(2.5));
    }

    #[test]
    fn quarter_position_snaps_to_step_multiple() {
        // 25% of an indicator width with half steps never yields 0.25.
        let rate = rate_from_position(12.5, 0.5, 5, &row()).unwrap();
        assert!(rate == 0.0 || rate == 0.5, "got {rate}");
    }

    #[test]
    fn unit_step_takes_whole_indicators() {
        let r = row();
        // Anywhere inside indicator 2 yields exactly 3.0.
        assert_eq!(rate_from_position(101.0, 1.0, 5, &r), Some(3.0));
        assert_eq!(rate_from_position(149.0, 1.0, 5, &r), Some(3.0));
    }

    #[test]
    fn gap_positions_are_misses() {
        let c = Constraints {
            width: AxisConstraint::at_most(500.0),
            height: AxisConstraint::at_most(50.0),
            padding: Insets::ZERO,
        };
        let r = layout_row(&c, Size::new(50.0, 50.0), 5, 10.0);
        // x = 55 is inside the first gap.
        assert_eq!(rate_from_position(55.0, 0.5, 5, &r), None);
    }

    #[test]
    fn immediate_drag_outside_scroll_container() {
        let mut model = RatingModel::new();
        let mut gc = GestureController::new();
        let r = row();

        let resp = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(resp.handled);
        assert!(resp.claim, "drag start must claim the pointer");
        assert!(gc.is_dragging());
        assert_eq!(model.rate(), 2.5);
        assert!(model.is_dragging());

        let resp = gc.handle(PointerEvent::Up(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(resp.handled);
        assert!(!model.is_dragging());
        assert_eq!(model.rate(), 2.5);
    }

    #[test]
    fn pending_waits_for_slop() {
        let mut model = RatingModel::new();
        let mut gc = GestureController::new();
        gc.set_in_scroll_container(true);
        let r = row();

        let resp = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(resp.handled);
        assert!(!resp.claim);
        assert!(!gc.is_dragging());
        assert_eq!(model.rate(), 0.0, "no rate update before the slop");

        // Within the slop: still pending.
        let resp = gc.handle(PointerEvent::Move(Point::new(125.0, 25.0)), &mut model, &r);
        assert!(!resp.claim);
        assert!(!gc.is_dragging());

        // Beyond the slop: the drag starts and tracks.
        let resp = gc.handle(PointerEvent::Move(Point::new(130.0, 25.0)), &mut model, &r);
        assert!(resp.claim);
        assert!(gc.is_dragging());
        assert_eq!(model.rate(), 2.5);
    }

    #[test]
    fn tap_in_scroll_container_sets_rate_on_release() {
        let mut model = RatingModel::new();
        let mut gc = GestureController::new();
        gc.set_in_scroll_container(true);
        let r = row();

        let _ = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        let resp = gc.handle(PointerEvent::Up(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(resp.handled);
        assert!(resp.damage.contains(Damage::PAINT));
        assert_eq!(model.rate(), 2.5);
        assert!(!model.is_touched());
    }

    #[test]
    fn cancel_resets_without_tracking() {
        let mut model = RatingModel::new();
        let mut gc = GestureController::new();
        let r = row();

        let _ = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(gc.is_dragging());
        let resp = gc.handle(PointerEvent::Cancel, &mut model, &r);
        assert!(resp.handled);
        assert!(!gc.is_dragging());
        assert!(!model.is_dragging());
        // The rate from the down tracking sticks; cancel does not rewind it.
        assert_eq!(model.rate(), 2.5);
    }

    #[test]
    fn indicator_only_ignores_everything() {
        let mut model = RatingModel::new();
        let _ = model.set_indicator_only(true);
        let mut gc = GestureController::new();
        let r = row();
        let resp = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(!resp.handled);
        assert_eq!(model.rate(), 0.0);
        assert!(!model.is_touched());
    }

    #[test]
    fn disabled_ignores_everything() {
        let mut model = RatingModel::new();
        let _ = model.set_enabled(false);
        let mut gc = GestureController::new();
        let r = row();
        let resp = gc.handle(PointerEvent::Down(Point::new(120.0, 25.0)), &mut model, &r);
        assert!(!resp.handled);
    }

    #[test]
    fn rate_stays_in_range_for_any_position() {
        let mut model = RatingModel::new();
        let mut gc = GestureController::new();
        let r = row();
        for x in [-50.0, 0.0, 1.0, 124.9, 249.9, 250.0, 400.0] {
            let _ = gc.handle(PointerEvent::Down(Point::new(x, 25.0)), &mut model, &r);
            let _ = gc.handle(PointerEvent::Up(Point::new(x, 25.0)), &mut model, &r);
            assert!(
                (0.0..=5.0).contains(&model.rate()),
                "rate {} out of range for x {x}",
                model.rate()
            );
        }
    }
}
