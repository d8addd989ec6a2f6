// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`RatingStrip`] facade.
//!
//! This bundles the model, the gesture controller, the cached row layout,
//! and the active color resolver behind the capability set a host adapter
//! wires into its own view type: measure, handle a pointer event, plan a
//! frame, and drain the accumulated damage. The facade never draws and
//! never owns a window; the host calls [`measure`](RatingStrip::measure)
//! from its layout pass, [`handle_pointer`](RatingStrip::handle_pointer)
//! from its input pipeline, and [`frame`](RatingStrip::frame) plus
//! [`render`](crate::render::render) from its paint pass.

use alloc::boxed::Box;
use kurbo::Size;
use ratestrip_layout::{Constraints, RowLayout, layout_row};
use ratestrip_model::{Damage, DragObserver, ObserverId, RateObserver, RatingModel};

use crate::color::{ColorResolver, ThemeColorResolver};
use crate::gesture::{GestureController, GestureResponse, PointerEvent};
use crate::render::{Frame, GlyphSource, plan_frame};

/// An interactive rating strip.
///
/// Damage from every mutation accumulates until the host drains it with
/// [`take_damage`](Self::take_damage); setters also return their own
/// contribution for hosts that react per call.
pub struct RatingStrip {
    model: RatingModel,
    gesture: GestureController,
    resolver: Box<dyn ColorResolver>,
    glyph: GlyphSource,
    layout: Option<RowLayout>,
    damage: Damage,
}

impl core::fmt::Debug for RatingStrip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RatingStrip")
            .field("model", &self.model)
            .field("glyph", &self.glyph)
            .field("layout", &self.layout)
            .field("damage", &self.damage)
            .finish_non_exhaustive()
    }
}

impl RatingStrip {
    /// A strip drawing `glyph` with the default theme resolver.
    pub fn new(glyph: GlyphSource) -> Self {
        Self::with_resolver(glyph, Box::new(ThemeColorResolver::new()))
    }

    /// A strip with an explicit color resolver.
    pub fn with_resolver(glyph: GlyphSource, resolver: Box<dyn ColorResolver>) -> Self {
        Self {
            model: RatingModel::new(),
            gesture: GestureController::new(),
            resolver,
            glyph,
            layout: None,
            damage: Damage::LAYOUT | Damage::PAINT,
        }
    }

    /// Read access to the model.
    pub fn model(&self) -> &RatingModel {
        &self.model
    }

    /// The glyph description this strip lays out and paints.
    pub fn glyph(&self) -> GlyphSource {
        self.glyph
    }

    /// The layout from the most recent measure pass, if still valid.
    pub fn layout(&self) -> Option<&RowLayout> {
        self.layout.as_ref()
    }

    /// True when the host must run a measure pass before the next frame.
    pub fn needs_layout(&self) -> bool {
        self.layout.is_none() || self.damage.contains(Damage::LAYOUT)
    }

    /// Run a layout pass and return the measured size.
    ///
    /// The resulting rectangles are cached for pointer handling and frame
    /// planning until a geometry-affecting setter invalidates them.
    pub fn measure(&mut self, constraints: &Constraints) -> Size {
        let layout = layout_row(
            constraints,
            self.glyph.size,
            self.model.indicator_count(),
            self.model.spacing(),
        );
        let size = layout.size;
        self.layout = Some(layout);
        self.damage.remove(Damage::LAYOUT);
        size
    }

    /// Feed one pointer event in this strip's coordinate space.
    ///
    /// Ignored until a measure pass has produced a layout.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureResponse {
        let Some(layout) = &self.layout else {
            return GestureResponse::ignored();
        };
        let response = self.gesture.handle(event, &mut self.model, layout);
        self.damage |= response.damage;
        response
    }

    /// Plan the current frame, or `None` before the first measure pass.
    pub fn frame(&self) -> Option<Frame> {
        let layout = self.layout.as_ref()?;
        Some(plan_frame(
            self.model.rate(),
            self.model.state(),
            layout.size.height,
            &layout.rects,
            self.resolver.as_ref(),
        ))
    }

    /// Drain the damage accumulated since the last call.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    /// The current rate.
    pub fn rate(&self) -> f64 {
        self.model.rate()
    }

    /// Set the rate programmatically. See
    /// [`RatingModel::set_rate`] for the clamping and notification rules.
    pub fn set_rate(&mut self, rate: f64) -> Damage {
        let damage = self.model.set_rate(rate);
        self.record(damage)
    }

    /// Set the quantization step.
    pub fn set_step_size(&mut self, step: f64) -> Damage {
        let damage = self.model.set_step_size(step);
        self.record(damage)
    }

    /// Set the number of indicators. Drops the cached layout.
    pub fn set_indicator_count(&mut self, count: usize) -> Damage {
        let damage = self.model.set_indicator_count(count);
        self.record(damage)
    }

    /// Set the requested gap between indicators. Drops the cached layout.
    pub fn set_spacing(&mut self, spacing: f64) -> Damage {
        let damage = self.model.set_spacing(spacing);
        self.record(damage)
    }

    /// Switch display-only mode on or off.
    pub fn set_indicator_only(&mut self, indicator_only: bool) -> Damage {
        let damage = self.model.set_indicator_only(indicator_only);
        self.record(damage)
    }

    /// Enable or disable interaction.
    pub fn set_enabled(&mut self, enabled: bool) -> Damage {
        let damage = self.model.set_enabled(enabled);
        self.record(damage)
    }

    /// Replace the color resolver. Drops the cached layout.
    pub fn set_color_resolver(&mut self, resolver: Box<dyn ColorResolver>) -> Damage {
        self.resolver = resolver;
        self.record(Damage::LAYOUT | Damage::PAINT)
    }

    /// Replace the glyph. Drops the cached layout.
    pub fn set_glyph(&mut self, glyph: GlyphSource) -> Damage {
        if self.glyph == glyph {
            return Damage::empty();
        }
        self.glyph = glyph;
        self.record(Damage::LAYOUT | Damage::PAINT)
    }

    /// Tell the gesture controller whether a pannable ancestor competes
    /// for horizontal movement.
    pub fn set_in_scroll_container(&mut self, inside: bool) {
        self.gesture.set_in_scroll_container(inside);
    }

    /// Register a settled-rate observer.
    pub fn add_rate_observer(&mut self, observer: Box<dyn RateObserver>) -> ObserverId {
        self.model.add_rate_observer(observer)
    }

    /// Unregister a settled-rate observer.
    pub fn remove_rate_observer(&mut self, id: ObserverId) -> bool {
        self.model.remove_rate_observer(id)
    }

    /// Register a drag-lifecycle observer.
    pub fn add_drag_observer(&mut self, observer: Box<dyn DragObserver>) -> ObserverId {
        self.model.add_drag_observer(observer)
    }

    /// Unregister a drag-lifecycle observer.
    pub fn remove_drag_observer(&mut self, id: ObserverId) -> bool {
        self.model.remove_drag_observer(id)
    }

    fn record(&mut self, damage: Damage) -> Damage {
        self.damage |= damage;
        if damage.contains(Damage::LAYOUT) {
            self.layout = None;
        }
        damage
    }
}
