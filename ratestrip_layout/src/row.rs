// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: glyph scaling, spacing redistribution, rect emission.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::types::{Constraints, RowLayout};

/// Lay out `count` identical glyphs in a horizontal row.
///
/// ## Algorithm
///
/// 1. Glyph width shrinks to an equal share of the spacing-adjusted
///    available width when the intrinsic row would overflow it.
/// 2. An exact width constraint redistributes all leftover width into the
///    gaps and measures at the constraint; at-most shrink-wraps instead.
///    A single indicator under an exact width uses zero spacing (there is
///    no gap to redistribute into).
/// 3. Glyph height clamps to the available height only under an exact
///    height constraint; the content height is the available height (exact)
///    or the glyph height (at-most).
/// 4. If clamping changed the glyph's aspect ratio, the less-shrunk axis is
///    rescaled to match the tighter one, and the dependent totals (content
///    size, redistributed spacing) are re-derived.
/// 5. Rectangles are emitted left-to-right from the left padding edge,
///    vertically centered in the content height.
///
/// `count` is treated as at least 1. The result's rectangle count always
/// equals `count`.
pub fn layout_row(
    constraints: &Constraints,
    intrinsic: Size,
    count: usize,
    spacing: f64,
) -> RowLayout {
    let count = count.max(1);
    let n = count as f64;
    let pad = constraints.padding;

    let avail_w = constraints.width.size - pad.x0 - pad.x1;
    let avail_h = constraints.height.size - pad.y0 - pad.y1;
    let avail_w_without_spacing = avail_w - spacing * (n - 1.0);

    // Spacing wider than the box yields zero-width glyphs, not negative ones.
    let mut glyph_w = if intrinsic.width * n > avail_w_without_spacing {
        (avail_w_without_spacing / n).max(0.0)
    } else {
        intrinsic.width
    };

    let mut spacing = spacing;
    let mut content_w;
    if constraints.width.is_exact() {
        spacing = redistribute_spacing(avail_w, glyph_w, count);
        content_w = avail_w;
    } else {
        content_w = glyph_w * n + spacing * (n - 1.0);
    }

    let mut glyph_h = if intrinsic.height > avail_h && avail_h > 0.0 && constraints.height.is_exact()
    {
        avail_h
    } else {
        intrinsic.height
    };
    let mut content_h = if constraints.height.is_exact() {
        avail_h
    } else {
        glyph_h
    };

    // Aspect-ratio correction: clamping one axis shrinks the other
    // proportionally. When both were clamped, the tighter scale wins.
    if (glyph_w != intrinsic.width || glyph_h != intrinsic.height)
        && intrinsic.width > 0.0
        && intrinsic.height > 0.0
    {
        let sx = glyph_w / intrinsic.width;
        let sy = glyph_h / intrinsic.height;
        if sx < sy {
            glyph_h = intrinsic.height * sx;
            if !constraints.height.is_exact() {
                content_h = glyph_h;
            }
        } else if sy < sx {
            glyph_w = intrinsic.width * sy;
            if constraints.width.is_exact() {
                spacing = redistribute_spacing(avail_w, glyph_w, count);
            } else {
                content_w = glyph_w * n + spacing * (n - 1.0);
            }
        }
    }

    let top = pad.y0 + content_h / 2.0 - glyph_h / 2.0;
    let mut x = pad.x0;
    let mut rects = Vec::with_capacity(count);
    for _ in 0..count {
        rects.push(Rect::new(x, top, x + glyph_w, top + glyph_h));
        x += glyph_w + spacing;
    }

    RowLayout {
        rects,
        glyph: Size::new(glyph_w, glyph_h),
        spacing,
        size: Size::new(content_w + pad.x0 + pad.x1, content_h + pad.y0 + pad.y1),
        padding: pad,
    }
}

/// Spacing that spreads the leftover exact width evenly across the gaps.
///
/// A single indicator has no gap; the division by `count - 1` is guarded
/// here rather than left to produce a non-finite spacing.
fn redistribute_spacing(avail_w: f64, glyph_w: f64, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (avail_w - glyph_w * count as f64) / (count as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AxisConstraint, Constraints};
    use kurbo::Insets;

    fn constraints(w: AxisConstraint, h: AxisConstraint) -> Constraints {
        Constraints {
            width: w,
            height: h,
            padding: Insets::ZERO,
        }
    }

    #[test]
    fn intrinsic_fit_keeps_glyph_size() {
        let c = constraints(AxisConstraint::exact(250.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        assert_eq!(row.glyph, Size::new(50.0, 50.0));
        assert_eq!(row.spacing, 0.0);
        assert_eq!(row.size, Size::new(250.0, 50.0));
        for (i, r) in row.rects.iter().enumerate() {
            assert_eq!(r.x0, i as f64 * 50.0);
            assert_eq!(r.width(), 50.0);
        }
    }

    #[test]
    fn exact_width_redistributes_leftover_into_gaps() {
        let c = constraints(AxisConstraint::exact(260.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        assert_eq!(row.glyph.width, 50.0);
        assert_eq!(row.spacing, 2.5);
        assert_eq!(row.size.width, 260.0);
        // Sum identity for exact width.
        let total: f64 = row.rects.iter().map(Rect::width).sum();
        assert_eq!(total + row.spacing * 4.0, 260.0);
    }

    #[test]
    fn overflow_shrinks_glyphs_proportionally() {
        let c = constraints(AxisConstraint::exact(200.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        // 5 × 50 > 200, so each glyph shrinks to 40, and the aspect
        // correction pulls the height down with it.
        assert_eq!(row.glyph, Size::new(40.0, 40.0));
        assert_eq!(row.size, Size::new(200.0, 40.0));
        let total: f64 = row.rects.iter().map(Rect::width).sum();
        assert_eq!(total, 200.0);
    }

    #[test]
    fn exact_height_clamp_shrinks_width_and_respacings() {
        let c = constraints(AxisConstraint::exact(250.0), AxisConstraint::exact(30.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        assert_eq!(row.glyph, Size::new(30.0, 30.0));
        // Exact width re-derives spacing from the corrected glyph width.
        assert_eq!(row.spacing, 25.0);
        assert_eq!(row.size, Size::new(250.0, 30.0));
    }

    #[test]
    fn at_most_width_shrink_wraps() {
        let c = constraints(
            AxisConstraint::at_most(500.0),
            AxisConstraint::at_most(50.0),
        );
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 8.0);
        assert_eq!(row.spacing, 8.0);
        assert_eq!(row.size.width, 5.0 * 50.0 + 4.0 * 8.0);
    }

    #[test]
    fn single_indicator_exact_width_has_zero_spacing() {
        // The unguarded formula would divide by zero here.
        let c = constraints(AxisConstraint::exact(100.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 1, 8.0);
        assert_eq!(row.rects.len(), 1);
        assert_eq!(row.spacing, 0.0);
        assert!(row.spacing.is_finite());
        assert_eq!(row.size.width, 100.0);
    }

    #[test]
    fn rects_are_ordered_and_disjoint() {
        let c = constraints(AxisConstraint::exact(260.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        for pair in row.rects.windows(2) {
            assert!(pair[0].x1 <= pair[1].x0, "rects must not overlap");
            assert_eq!(pair[1].x0 - pair[0].x1, row.spacing);
        }
    }

    #[test]
    fn vertical_centering_within_exact_height() {
        let c = constraints(AxisConstraint::exact(250.0), AxisConstraint::exact(100.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        assert_eq!(row.glyph.height, 50.0);
        assert_eq!(row.rects[0].y0, 25.0);
        assert_eq!(row.rects[0].y1, 75.0);
        assert_eq!(row.size.height, 100.0);
    }

    #[test]
    fn padding_offsets_rects_and_grows_measure() {
        let c = Constraints {
            width: AxisConstraint::exact(270.0),
            height: AxisConstraint::at_most(60.0),
            padding: Insets::new(10.0, 5.0, 10.0, 5.0),
        };
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 0.0);
        assert_eq!(row.rects[0].x0, 10.0);
        assert_eq!(row.rects[0].y0, 5.0);
        assert_eq!(row.size, Size::new(270.0, 60.0));
    }

    #[test]
    fn zero_count_is_treated_as_one() {
        let c = constraints(AxisConstraint::at_most(100.0), AxisConstraint::at_most(50.0));
        let row = layout_row(&c, Size::new(50.0, 50.0), 0, 0.0);
        assert_eq!(row.rects.len(), 1);
    }

    #[test]
    fn huge_spacing_never_produces_negative_glyphs() {
        let c = constraints(
            AxisConstraint::at_most(100.0),
            AxisConstraint::at_most(50.0),
        );
        let row = layout_row(&c, Size::new(50.0, 50.0), 5, 1000.0);
        assert!(row.glyph.width >= 0.0);
        for r in &row.rects {
            assert!(r.width() >= 0.0);
        }
    }
}
