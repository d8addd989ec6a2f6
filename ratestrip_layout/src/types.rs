// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the row layout: constraints and the layout result.

use alloc::vec::Vec;
use kurbo::{Insets, Rect, Size};

/// How strictly an axis constraint binds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeMode {
    /// The measured size must equal the constraint size.
    Exact,
    /// The measured size may shrink below the constraint size.
    AtMost,
}

/// A single-axis size constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisConstraint {
    /// Available extent along this axis, including padding.
    pub size: f64,
    /// Whether the extent is exact or an upper bound.
    pub mode: SizeMode,
}

impl AxisConstraint {
    /// An exact constraint: the row must fill `size`.
    pub const fn exact(size: f64) -> Self {
        Self {
            size,
            mode: SizeMode::Exact,
        }
    }

    /// An at-most constraint: the row may shrink-wrap below `size`.
    pub const fn at_most(size: f64) -> Self {
        Self {
            size,
            mode: SizeMode::AtMost,
        }
    }

    /// True for [`SizeMode::Exact`].
    pub fn is_exact(&self) -> bool {
        self.mode == SizeMode::Exact
    }
}

/// Full input constraints for a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraints {
    /// Horizontal constraint, including padding.
    pub width: AxisConstraint,
    /// Vertical constraint, including padding.
    pub height: AxisConstraint,
    /// Padding around the content region. Rectangles start at the left
    /// padding edge; the measured size includes the padding.
    pub padding: Insets,
}

impl Constraints {
    /// Exact constraints on both axes with no padding.
    pub const fn tight(size: Size) -> Self {
        Self {
            width: AxisConstraint::exact(size.width),
            height: AxisConstraint::exact(size.height),
            padding: Insets::ZERO,
        }
    }
}

/// Result of a layout pass.
///
/// Owned by the caller and recomputed in full on every pass; the rectangle
/// sequence is never partially mutated. `rects.len()` always equals the
/// `count` the pass was given.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Per-indicator bounding rectangles, ordered by index, left-to-right.
    pub rects: Vec<Rect>,
    /// Effective glyph size after any rescaling.
    pub glyph: Size,
    /// Effective gap between adjacent rectangles.
    pub spacing: f64,
    /// Measured widget size, padding included.
    pub size: Size,
    /// Padding the pass was given, kept for pointer-coordinate math.
    pub padding: Insets,
}

impl RowLayout {
    /// Number of indicators.
    pub fn count(&self) -> usize {
        self.rects.len()
    }

    /// The indicator whose horizontal bounds contain `x`, if any.
    ///
    /// Returns `None` for positions in a gap or outside the row.
    pub fn indicator_at_x(&self, x: f64) -> Option<(usize, Rect)> {
        self.rects
            .iter()
            .enumerate()
            .find(|(_, r)| x >= r.x0 && x <= r.x1)
            .map(|(i, r)| (i, *r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn indicator_lookup_hits_and_gaps() {
        let row = RowLayout {
            rects: vec![
                Rect::new(0.0, 0.0, 50.0, 50.0),
                Rect::new(60.0, 0.0, 110.0, 50.0),
            ],
            glyph: Size::new(50.0, 50.0),
            spacing: 10.0,
            size: Size::new(110.0, 50.0),
            padding: Insets::ZERO,
        };
        assert_eq!(row.indicator_at_x(25.0).map(|(i, _)| i), Some(0));
        assert_eq!(row.indicator_at_x(60.0).map(|(i, _)| i), Some(1));
        // Inside the gap.
        assert_eq!(row.indicator_at_x(55.0), None);
        // Outside the row.
        assert_eq!(row.indicator_at_x(-1.0), None);
        assert_eq!(row.indicator_at_x(200.0), None);
    }

    #[test]
    fn boundary_belongs_to_the_leftmost_matching_rect() {
        let row = RowLayout {
            rects: vec![
                Rect::new(0.0, 0.0, 50.0, 50.0),
                Rect::new(50.0, 0.0, 100.0, 50.0),
            ],
            glyph: Size::new(50.0, 50.0),
            spacing: 0.0,
            size: Size::new(100.0, 50.0),
            padding: Insets::ZERO,
        };
        // A shared edge resolves to the earlier indicator.
        assert_eq!(row.indicator_at_x(50.0).map(|(i, _)| i), Some(0));
    }
}
