// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame planning: the two-pass partial-fill paint.
//!
//! ## Overview
//!
//! A frame is two passes over the same rectangles:
//!
//! 1. **Background**: every indicator in the tint resolved for a zero rate
//!    (visually empty), unclipped.
//! 2. **Overlay**: every indicator in the tint resolved for the live rate,
//!    clipped to `[0, boundary] × [0, height]` where the boundary is the
//!    exact fractional position of the rate inside its indicator.
//!
//! Clipping the overlay instead of splitting glyphs gives a pixel-accurate
//! partial fill without per-glyph partial assets. The plan is pure data;
//! [`render`] walks it over any [`IndicatorPainter`], restoring the clip
//! after the overlay (scoped mutation, no effect past the frame).

use kurbo::{Rect, Size};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use peniko::Color;
use ratestrip_model::StateFlags;

use crate::color::ColorResolver;

/// What kind of asset backs the indicator glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GlyphKind {
    /// Scalable vector asset.
    Vector,
    /// Fixed-resolution raster asset.
    Raster,
}

/// Rendering path a glyph should be drawn on.
///
/// Vector assets rasterize on the software path; raster assets can stay on
/// the hardware layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RenderLayer {
    /// CPU rasterization.
    Software,
    /// GPU-composited layer.
    Hardware,
}

/// Host-side description of the indicator glyph.
///
/// The core only needs the intrinsic size (for layout) and the asset kind
/// (for layer selection); loading and theming the actual drawable stays in
/// the host adapter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphSource {
    /// Intrinsic glyph size, in logical pixels.
    pub size: Size,
    /// Asset kind, deciding the rendering path.
    pub kind: GlyphKind,
}

impl GlyphSource {
    /// A vector glyph with the given intrinsic size.
    pub const fn vector(size: Size) -> Self {
        Self {
            size,
            kind: GlyphKind::Vector,
        }
    }

    /// A raster glyph with the given intrinsic size.
    pub const fn raster(size: Size) -> Self {
        Self {
            size,
            kind: GlyphKind::Raster,
        }
    }

    /// The rendering path this glyph should use.
    pub fn preferred_layer(&self) -> RenderLayer {
        match self.kind {
            GlyphKind::Vector => RenderLayer::Software,
            GlyphKind::Raster => RenderLayer::Hardware,
        }
    }
}

/// One pass of a frame: a tint and an optional clip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pass {
    /// Tint to draw every indicator with.
    pub tint: Color,
    /// Clip applied for the duration of the pass.
    pub clip: Option<Rect>,
}

/// A planned frame: background then overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// All indicators in the empty tint.
    pub background: Pass,
    /// All indicators in the fill tint, clipped to the rate boundary.
    pub overlay: Pass,
}

impl Frame {
    /// The passes in draw order.
    pub fn passes(&self) -> [&Pass; 2] {
        [&self.background, &self.overlay]
    }
}

/// The x position of the fractional fill boundary for `rate`.
///
/// The boundary sits inside the last partially filled indicator at the
/// rate's fractional offset; a rate of zero (or an empty row) puts it at
/// the far left, a full rate at the right edge of the last rectangle.
pub fn fill_boundary(rate: f64, rects: &[Rect]) -> f64 {
    if rects.is_empty() || rate <= 0.0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rate is clamped to the indicator count, well within usize."
    )]
    let full = (rate.ceil() as usize).min(rects.len()) - 1;
    let rect = rects[full];
    rect.x0 + rect.width() * (rate - full as f64)
}

/// Plan the two passes for the current rate and visual state.
///
/// `height` is the widget height the overlay clip extends to.
pub fn plan_frame(
    rate: f64,
    state: StateFlags,
    height: f64,
    rects: &[Rect],
    resolver: &dyn ColorResolver,
) -> Frame {
    let boundary = fill_boundary(rate, rects);
    Frame {
        background: Pass {
            tint: resolver.resolve(0.0, state),
            clip: None,
        },
        overlay: Pass {
            tint: resolver.resolve(rate, state),
            clip: Some(Rect::new(0.0, 0.0, boundary, height)),
        },
    }
}

/// Drawing capability the host wires to its canvas.
///
/// The same glyph asset is reused across both passes; implementations set
/// the tint per call and must treat clips as a stack.
pub trait IndicatorPainter {
    /// Draw the glyph scaled into `bounds` with `tint`.
    fn fill_glyph(&mut self, bounds: Rect, tint: Color);
    /// Push a clip rectangle.
    fn push_clip(&mut self, clip: Rect);
    /// Pop the most recent clip.
    fn pop_clip(&mut self);
}

/// Execute a planned frame over the indicator rectangles.
pub fn render(frame: &Frame, rects: &[Rect], painter: &mut dyn IndicatorPainter) {
    for pass in frame.passes() {
        if let Some(clip) = pass.clip {
            painter.push_clip(clip);
        }
        for &rect in rects {
            painter.fill_glyph(rect, pass.tint);
        }
        if pass.clip.is_some() {
            painter.pop_clip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SimpleColorResolver;
    use alloc::vec::Vec;

    const GRAY: Color = Color::from_rgb8(0x80, 0x80, 0x80);
    const RED: Color = Color::from_rgb8(0xff, 0x00, 0x00);

    fn rects() -> [Rect; 5] {
        core::array::from_fn(|i| {
            let x = i as f64 * 50.0;
            Rect::new(x, 0.0, x + 50.0, 50.0)
        })
    }

    #[test]
    fn boundary_splits_the_partial_indicator() {
        let r = rects();
        // 2.5: two full indicators plus half of the third.
        assert_eq!(fill_boundary(2.5, &r), 125.0);
        // Integer rates land on the right edge of their indicator.
        assert_eq!(fill_boundary(2.0, &r), 100.0);
        assert_eq!(fill_boundary(5.0, &r), 250.0);
        // Shallow fractions stay inside the first indicator.
        assert_eq!(fill_boundary(0.2, &r), 10.0);
    }

    #[test]
    fn zero_rate_has_no_fill() {
        assert_eq!(fill_boundary(0.0, &rects()), 0.0);
        assert_eq!(fill_boundary(0.0, &[]), 0.0);
    }

    #[test]
    fn rate_beyond_count_clamps_to_the_row_edge() {
        // The renderer is defensive even though the model clamps first.
        assert_eq!(fill_boundary(9.0, &rects()), 250.0);
    }

    #[test]
    fn frame_resolves_empty_and_fill_tints() {
        let resolver = SimpleColorResolver::new(GRAY, RED);
        let frame = plan_frame(2.5, StateFlags::default(), 50.0, &rects(), &resolver);
        assert_eq!(frame.background.tint, GRAY);
        assert_eq!(frame.background.clip, None);
        assert_eq!(frame.overlay.tint, RED);
        assert_eq!(frame.overlay.clip, Some(Rect::new(0.0, 0.0, 125.0, 50.0)));
    }

    #[derive(Default)]
    struct RecordingPainter {
        ops: Vec<Op>,
    }

    #[derive(Debug, PartialEq)]
    enum Op {
        Glyph(Rect, Color),
        PushClip(Rect),
        PopClip,
    }

    impl IndicatorPainter for RecordingPainter {
        fn fill_glyph(&mut self, bounds: Rect, tint: Color) {
            self.ops.push(Op::Glyph(bounds, tint));
        }
        fn push_clip(&mut self, clip: Rect) {
            self.ops.push(Op::PushClip(clip));
        }
        fn pop_clip(&mut self) {
            self.ops.push(Op::PopClip);
        }
    }

    #[test]
    fn render_draws_both_passes_with_scoped_clip() {
        let resolver = SimpleColorResolver::new(GRAY, RED);
        let r = rects();
        let frame = plan_frame(1.5, StateFlags::default(), 50.0, &r, &resolver);
        let mut painter = RecordingPainter::default();
        render(&frame, &r, &mut painter);

        // Background: five unclipped glyphs in the empty tint.
        assert_eq!(&painter.ops[0], &Op::Glyph(r[0], GRAY));
        assert_eq!(painter.ops[..5].len(), 5);
        // Overlay: clip, five glyphs in the fill tint, clip restored.
        assert_eq!(
            &painter.ops[5],
            &Op::PushClip(Rect::new(0.0, 0.0, 75.0, 50.0))
        );
        assert_eq!(&painter.ops[6], &Op::Glyph(r[0], RED));
        assert_eq!(painter.ops.last(), Some(&Op::PopClip));
        assert_eq!(painter.ops.len(), 12);
    }

    #[test]
    fn vector_glyphs_prefer_the_software_path() {
        let v = GlyphSource::vector(Size::new(24.0, 24.0));
        let r = GlyphSource::raster(Size::new(24.0, 24.0));
        assert_eq!(v.preferred_layer(), RenderLayer::Software);
        assert_eq!(r.preferred_layer(), RenderLayer::Hardware);
    }
}
