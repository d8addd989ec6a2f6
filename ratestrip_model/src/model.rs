// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating model: value state, invariant-preserving setters, and
//! observer notification routing.
//!
//! ## Notification routing
//!
//! Two audiences subscribe to the model:
//! - [`RateObserver`] receives settled values: programmatic sets while the
//!   widget is untouched, and the single `from_user = true` value when a
//!   gesture finalizes.
//! - [`DragObserver`] receives the drag lifecycle: start, interim values
//!   while the pointer moves, and finish.
//!
//! [`RatingModel::set_rate`] routes by the transient interaction flags, so a
//! drag in progress never leaks interim values to the settled channel.
//!
//! ## Gesture bookkeeping
//!
//! The `begin_*`/`finish_*`/`cancel_*` operations are driven by the gesture
//! controller in `ratestrip_widget`. They are plain public methods; calling
//! them out of order is harmless (each checks the current flags first).

use alloc::boxed::Box;

use crate::observer::{ObserverId, Registry};
use crate::types::{Damage, StateFlags};

/// Default number of indicators.
pub const DEFAULT_INDICATOR_COUNT: usize = 5;
/// Default quantization step within one indicator.
pub const DEFAULT_STEP_SIZE: f64 = 0.5;
/// Default requested gap between adjacent indicators, in pixels.
pub const DEFAULT_SPACING: f64 = 8.0;

/// Observer of settled rate values.
pub trait RateObserver {
    /// The rate settled at `rate`; `from_user` is true when a gesture (tap or
    /// drag) finalized the value rather than a programmatic set.
    fn rate_changed(&mut self, rate: f64, from_user: bool);
}

/// Observer of the drag lifecycle.
pub trait DragObserver {
    /// A drag started with the given rate.
    fn drag_started(&mut self, _rate: f64) {}
    /// The rate moved to an interim value while dragging.
    fn drag_moved(&mut self, _rate: f64) {}
    /// The drag ended (released or canceled) at the given rate.
    fn drag_finished(&mut self, _rate: f64) {}
}

/// Scalar state of a rating-indicator row.
///
/// All setters clamp their input to keep the crate-level invariants and
/// return the [`Damage`] the write produced. Reads are plain getters; there
/// is no interior mutability and no locking (the model is single-owner).
pub struct RatingModel {
    rate: f64,
    step_size: f64,
    indicator_count: usize,
    spacing: f64,
    indicator_only: bool,
    touched: bool,
    dragging: bool,
    state: StateFlags,
    rate_observers: Registry<dyn RateObserver>,
    drag_observers: Registry<dyn DragObserver>,
}

impl core::fmt::Debug for RatingModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RatingModel")
            .field("rate", &self.rate)
            .field("step_size", &self.step_size)
            .field("indicator_count", &self.indicator_count)
            .field("spacing", &self.spacing)
            .field("indicator_only", &self.indicator_only)
            .field("dragging", &self.dragging)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for RatingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingModel {
    /// Create a model with the stock defaults (five indicators, half steps).
    pub fn new() -> Self {
        Self {
            rate: 0.0,
            step_size: DEFAULT_STEP_SIZE,
            indicator_count: DEFAULT_INDICATOR_COUNT,
            spacing: DEFAULT_SPACING,
            indicator_only: false,
            touched: false,
            dragging: false,
            state: StateFlags::default(),
            rate_observers: Registry::new(),
            drag_observers: Registry::new(),
        }
    }

    // --- getters ---

    /// Current rate, in units of whole indicators.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Quantization granularity within one indicator, in `(0, 1]`.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of indicators in the row.
    pub fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    /// Requested gap between adjacent indicators.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// True when the widget is display-only and ignores pointer input.
    pub fn is_indicator_only(&self) -> bool {
        self.indicator_only
    }

    /// True while a pointer is down on the widget.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// True while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current visual-state flags.
    pub fn state(&self) -> StateFlags {
        self.state
    }

    /// True when the widget accepts interaction.
    pub fn is_enabled(&self) -> bool {
        self.state.contains(StateFlags::ENABLED)
    }

    // --- configuration ---

    /// Set the rate, clamped to `[0, indicator_count]`.
    ///
    /// Routing: while dragging the value goes to the drag-progress channel;
    /// while untouched it goes to the settled channel with
    /// `from_user = false`; in between (mid-tap) it is silent and the gesture
    /// finalization emits it instead.
    pub fn set_rate(&mut self, rate: f64) -> Damage {
        let clamped = rate.clamp(0.0, self.indicator_count as f64);
        if clamped == self.rate {
            return Damage::empty();
        }
        self.rate = clamped;
        if self.dragging {
            self.notify_drag_moved();
        } else if !self.touched {
            self.notify_rate_changed(false);
        }
        Damage::PAINT
    }

    /// Set the quantization step, clamped into `(0, 1]`.
    ///
    /// Non-finite or non-positive inputs are ignored.
    pub fn set_step_size(&mut self, step: f64) -> Damage {
        if step.is_nan() || step <= 0.0 {
            return Damage::empty();
        }
        let clamped = step.min(1.0);
        if clamped == self.step_size {
            return Damage::empty();
        }
        self.step_size = clamped;
        Damage::PAINT
    }

    /// Set the indicator count (minimum 1).
    ///
    /// Re-clamps the rate against the new count. The caller owning the
    /// indicator rectangles must discard them on [`Damage::LAYOUT`].
    pub fn set_indicator_count(&mut self, count: usize) -> Damage {
        let count = count.max(1);
        if count == self.indicator_count {
            return Damage::empty();
        }
        self.indicator_count = count;
        // Rate never exceeds the count; shrinking the row pulls it down.
        let _ = self.set_rate(self.rate);
        Damage::LAYOUT | Damage::PAINT
    }

    /// Set the requested spacing (negative values clamp to zero).
    pub fn set_spacing(&mut self, spacing: f64) -> Damage {
        let clamped = spacing.max(0.0);
        if clamped == self.spacing {
            return Damage::empty();
        }
        self.spacing = clamped;
        Damage::LAYOUT | Damage::PAINT
    }

    /// Switch display-only mode on or off.
    pub fn set_indicator_only(&mut self, indicator_only: bool) -> Damage {
        self.indicator_only = indicator_only;
        Damage::empty()
    }

    /// Enable or disable interaction.
    pub fn set_enabled(&mut self, enabled: bool) -> Damage {
        self.set_flag(StateFlags::ENABLED, enabled)
    }

    /// Set or clear a visual-state flag.
    pub fn set_flag(&mut self, flag: StateFlags, on: bool) -> Damage {
        let next = if on {
            self.state | flag
        } else {
            self.state - flag
        };
        if next == self.state {
            return Damage::empty();
        }
        self.state = next;
        Damage::PAINT
    }

    // --- observers ---

    /// Subscribe to settled rate values.
    pub fn add_rate_observer(&mut self, observer: Box<dyn RateObserver>) -> ObserverId {
        self.rate_observers.add(observer)
    }

    /// Unsubscribe a settled-rate observer.
    pub fn remove_rate_observer(&mut self, id: ObserverId) -> bool {
        self.rate_observers.remove(id)
    }

    /// Subscribe to the drag lifecycle.
    pub fn add_drag_observer(&mut self, observer: Box<dyn DragObserver>) -> ObserverId {
        self.drag_observers.add(observer)
    }

    /// Unsubscribe a drag observer.
    pub fn remove_drag_observer(&mut self, id: ObserverId) -> bool {
        self.drag_observers.remove(id)
    }

    // --- gesture bookkeeping ---

    /// A pointer went down on the widget.
    pub fn begin_touch(&mut self) {
        self.touched = true;
    }

    /// The pointer went up or the gesture was canceled.
    pub fn end_touch(&mut self) {
        self.touched = false;
    }

    /// Enter the dragging state: set pressed and emit the drag-start
    /// notification with the current rate.
    pub fn begin_drag(&mut self) -> Damage {
        if self.dragging {
            return Damage::empty();
        }
        self.dragging = true;
        let damage = self.set_flag(StateFlags::PRESSED, true);
        let rate = self.rate;
        self.drag_observers.for_each(|o| o.drag_started(rate));
        damage | Damage::PAINT
    }

    /// Finalize a drag: emit the settled value with `from_user = true`, then
    /// the drag-finish notification.
    pub fn finish_drag(&mut self) -> Damage {
        if !self.dragging {
            return Damage::empty();
        }
        self.dragging = false;
        let damage = self.set_flag(StateFlags::PRESSED, false);
        self.notify_rate_changed(true);
        self.notify_drag_finished();
        damage | Damage::PAINT
    }

    /// Abort a drag: emit the drag-finish notification without a settled
    /// value (the pointer was taken away, not released).
    pub fn cancel_drag(&mut self) -> Damage {
        if !self.dragging {
            return Damage::empty();
        }
        self.dragging = false;
        let damage = self.set_flag(StateFlags::PRESSED, false);
        self.notify_drag_finished();
        damage | Damage::PAINT
    }

    /// Finalize a tap: emit the settled value with `from_user = true`.
    ///
    /// Taps do not produce drag lifecycle notifications.
    pub fn commit_tap(&mut self) -> Damage {
        self.notify_rate_changed(true);
        Damage::PAINT
    }

    // --- internals ---

    fn notify_rate_changed(&mut self, from_user: bool) {
        let rate = self.rate;
        self.rate_observers
            .for_each(|o| o.rate_changed(rate, from_user));
    }

    fn notify_drag_moved(&mut self) {
        let rate = self.rate;
        self.drag_observers.for_each(|o| o.drag_moved(rate));
    }

    fn notify_drag_finished(&mut self) {
        let rate = self.rate;
        self.drag_observers.for_each(|o| o.drag_finished(rate));
    }
}
