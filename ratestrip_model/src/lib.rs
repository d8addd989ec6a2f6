// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ratestrip_model --heading-base-level=0

//! Ratestrip Model: scalar state for a rating-indicator row.
//!
//! This crate holds everything about a rating widget that is not geometry or
//! painting: the current rate, the quantization step, the indicator count and
//! requested spacing, the transient touch/drag flags, and explicit
//! visual-state flags.
//!
//! - Every configuration write clamps its input so the documented invariants
//!   hold at all times, and returns a [`Damage`] value telling the host what
//!   to invalidate (repaint, re-layout, or nothing for a no-op write).
//! - Observers subscribe through ordered, generational registries; see
//!   [`Registry`](crate::observer::Registry). Notification order always
//!   matches registration order.
//! - Rate notifications are routed by interaction state: interim values
//!   during an active drag go to [`DragObserver::drag_moved`], settled values
//!   go to [`RateObserver::rate_changed`]. See [`RatingModel::set_rate`].
//!
//! ## Invariants
//!
//! - `0.0 <= rate <= indicator_count`
//! - `0.0 < step_size <= 1.0` (`1.0` disables sub-indicator quantization)
//! - `indicator_count >= 1`
//! - `spacing >= 0.0`
//!
//! Violating inputs are clamped, never propagated as errors; the model has no
//! fallible operations.
//!
//! ## Where this fits
//!
//! Higher layers build on this crate: `ratestrip_layout` turns the count and
//! spacing into indicator rectangles, and `ratestrip_widget` drives the model
//! from pointer gestures and plans frames from it. The model itself depends
//! on nothing but `alloc`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod model;
pub mod observer;
pub mod types;

pub use model::{DragObserver, RateObserver, RatingModel};
pub use observer::{ObserverId, Registry};
pub use types::{Damage, StateFlags};
