// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ratestrip_layout --heading-base-level=0

//! Ratestrip Layout: a Kurbo-native row layout for a rating-indicator strip.
//!
//! Given the available space, an intrinsic glyph size, an indicator count,
//! and a requested spacing, [`layout_row`] produces one bounding [`Rect`](kurbo::Rect)
//! per indicator plus the effective glyph size, spacing, and measured size.
//!
//! - Glyphs shrink uniformly when the row would overflow the available
//!   width, preserving the intrinsic aspect ratio.
//! - An exact width constraint redistributes leftover space into the gaps;
//!   an at-most constraint shrink-wraps the row instead.
//! - Rectangles are emitted left-to-right from the left padding edge and
//!   vertically centered in the content height. Right-to-left layout is out
//!   of scope.
//!
//! This is a pure function of plain inputs. It holds no widget state, so the
//! result can be cached and re-queried at will; see [`RowLayout`].
//!
//! ## Not a general layout engine
//!
//! The only supported arrangement is a single horizontal row of `count`
//! identical glyphs. Upstream code picks the constraints (typically from a
//! toolkit measure pass) and owns the [`RowLayout`] it gets back.
//!
//! ## Minimal usage
//!
//! ```
//! use ratestrip_layout::{layout_row, AxisConstraint, Constraints};
//! use kurbo::{Insets, Size};
//!
//! let constraints = Constraints {
//!     width: AxisConstraint::exact(250.0),
//!     height: AxisConstraint::at_most(50.0),
//!     padding: Insets::ZERO,
//! };
//! let row = layout_row(&constraints, Size::new(50.0, 50.0), 5, 0.0);
//! assert_eq!(row.rects.len(), 5);
//! assert_eq!(row.rects[2].x0, 100.0);
//! assert_eq!(row.size, Size::new(250.0, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod row;
pub mod types;

pub use row::layout_row;
pub use types::{AxisConstraint, Constraints, RowLayout, SizeMode};
