// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ratestrip_widget --heading-base-level=0

//! Ratestrip Widget: the interactive core of a rating-indicator strip.
//!
//! ## Overview
//!
//! This crate ties the model and the row layout together into a widget
//! engine a host toolkit can embed:
//!
//! - [`GestureController`](crate::gesture::GestureController) — a
//!   deterministic state machine that disambiguates taps, scroll-container
//!   pans, and deliberate drags, and converts pointer positions into
//!   quantized rate updates.
//! - [`plan_frame`](crate::render::plan_frame) — the two-pass paint plan:
//!   a background pass in the empty tint and an overlay pass clipped to the
//!   exact fractional boundary of the current rate.
//! - [`ColorResolver`](crate::color::ColorResolver) — the pluggable
//!   state-to-tint strategy, with a theme-driven and a fixed-color stock
//!   implementation and an explicit name→factory
//!   [registry](crate::color::ResolverRegistry) (no dynamic type resolution
//!   anywhere).
//! - [`RatingStrip`](crate::strip::RatingStrip) — a facade exposing the
//!   measure / handle-pointer / plan-frame capability set an adapter wires
//!   into whatever view base class the platform provides. Composition, not
//!   inheritance: this crate never models a view hierarchy.
//!
//! ## Control flow
//!
//! The host delivers pointer events to the controller, which updates the
//! model; the host schedules the callbacks named in the returned
//! [`Damage`](ratestrip_model::Damage); a layout pass recomputes the
//! rectangles; the frame planner reads model + layout + resolver and emits
//! two passes. Everything is synchronous on the host's UI thread; observers
//! are always notified before the event callback returns.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod gesture;
pub mod render;
pub mod strip;

pub use color::{
    ColorResolver, ResolverRegistry, SimpleColorResolver, StateColors, Theme, ThemeColorResolver,
};
pub use gesture::{GestureController, GestureResponse, PointerEvent};
pub use render::{Frame, GlyphKind, GlyphSource, IndicatorPainter, Pass, RenderLayer};
pub use strip::RatingStrip;
