// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference CPU rasterizer for overlay plans.
//!
//! This is deliberately small and exact rather than fast or pretty: coverage
//! is a point-in-path test at each pixel center, with no antialiasing. It
//! establishes the pixel-level meaning of an [`OverlayPlan`] for tests and
//! headless consumers; production embedders are expected to map the plan
//! onto their own renderer instead.

use alloc::vec;
use alloc::vec::Vec;

use core::ops::Range;

use kurbo::{Point, Shape as _};

use crate::plan::{OverlayOp, OverlayPlan};

/// A straight-alpha RGBA8 pixel surface.
#[derive(Clone, Debug)]
pub struct Pixmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Pixmap {
    /// Rasterize `plan` into a fresh `width` x `height` surface.
    ///
    /// - `Fill` paints every pixel with the curtain color (it is the bottom
    ///   layer of the plan, so this is a plain store, not a blend).
    /// - `Clear` sets every pixel whose center lies inside the clip path to
    ///   fully transparent. Clearing is idempotent, so overlapping cutouts
    ///   union cleanly.
    /// - `TopView` is a host-side layer and leaves the surface untouched.
    pub fn render(plan: &OverlayPlan, width: usize, height: usize) -> Self {
        let mut pixmap = Self {
            width,
            height,
            data: vec![0; width * height * 4],
        };
        for op in &plan.ops {
            match op {
                OverlayOp::Fill { color } => {
                    let rgba = color.to_rgba8();
                    for pixel in pixmap.data.chunks_exact_mut(4) {
                        pixel.copy_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
                    }
                }
                OverlayOp::Clear { path } => {
                    let bbox = path.bounding_box();
                    for y in span(bbox.y0, bbox.y1, height) {
                        for x in span(bbox.x0, bbox.x1, width) {
                            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                            if path.contains(center) {
                                let at = (y * width + x) * 4;
                                pixmap.data[at..at + 4].fill(0);
                            }
                        }
                    }
                }
                OverlayOp::TopView { .. } => {}
            }
        }
        pixmap
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw straight-alpha RGBA8 bytes, row-major, tightly packed.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The `[r, g, b, a]` value of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the surface.
    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let at = (y * self.width + x) * 4;
        [
            self.data[at],
            self.data[at + 1],
            self.data[at + 2],
            self.data[at + 3],
        ]
    }
}

/// Pixel indices whose centers can fall inside `[lo, hi)`, clamped to `len`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "values are clamped to the surface before converting to pixel indices"
)]
fn span(lo: f64, hi: f64, len: usize) -> Range<usize> {
    let lo = lo.floor().max(0.0) as usize;
    let hi = hi.ceil().clamp(0.0, len as f64) as usize;
    lo.min(len)..hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ViewResource, color_from_argb, composite};
    use kurbo::Rect;
    use limelight_hollow::{HollowShape, ResolvedHollow};
    use peniko::Color;

    const CURTAIN: [u8; 4] = [0, 0, 0, 0xAA];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn hollow(bounds: Rect, shape: HollowShape) -> ResolvedHollow {
        ResolvedHollow { bounds, shape }
    }

    #[test]
    fn zero_hollows_paint_a_uniform_curtain() {
        let plan = composite(color_from_argb(0xAA00_0000), &[], None, 0.1);
        let pixmap = Pixmap::render(&plan, 16, 16);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(pixmap.rgba(x, y), CURTAIN, "pixel ({x}, {y}) not curtain");
            }
        }
    }

    #[test]
    fn rect_hollow_clears_exactly_its_bounds() {
        let bounds = Rect::new(10.0, 10.0, 30.0, 30.0);
        let plan = composite(
            color_from_argb(0xAA00_0000),
            &[hollow(bounds, HollowShape::RECT)],
            None,
            0.1,
        );
        let pixmap = Pixmap::render(&plan, 64, 64);
        for y in 0..64 {
            for x in 0..64 {
                let inside = x >= 10 && x < 30 && y >= 10 && y < 30;
                let expected = if inside { CLEAR } else { CURTAIN };
                assert_eq!(pixmap.rgba(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn oval_hollow_keeps_curtain_at_bounds_corners() {
        let bounds = Rect::new(8.0, 8.0, 40.0, 40.0);
        let plan = composite(
            color_from_argb(0xAA00_0000),
            &[hollow(bounds, HollowShape::Oval)],
            None,
            0.1,
        );
        let pixmap = Pixmap::render(&plan, 48, 48);
        // Center of the inscribed ellipse is cleared.
        assert_eq!(pixmap.rgba(24, 24), CLEAR);
        // The bounds corners lie outside the ellipse.
        assert_eq!(pixmap.rgba(8, 8), CURTAIN);
        assert_eq!(pixmap.rgba(39, 39), CURTAIN);
    }

    #[test]
    fn overlapping_hollows_union_their_cleared_area() {
        let plan = composite(
            color_from_argb(0xAA00_0000),
            &[
                hollow(Rect::new(0.0, 0.0, 20.0, 20.0), HollowShape::RECT),
                hollow(Rect::new(10.0, 10.0, 30.0, 30.0), HollowShape::RECT),
            ],
            None,
            0.1,
        );
        let pixmap = Pixmap::render(&plan, 40, 40);
        // Overlap region is cleared once, not double-subtracted.
        assert_eq!(pixmap.rgba(15, 15), CLEAR);
        // Each exclusive region is cleared.
        assert_eq!(pixmap.rgba(5, 5), CLEAR);
        assert_eq!(pixmap.rgba(25, 25), CLEAR);
        // Outside both stays curtain.
        assert_eq!(pixmap.rgba(35, 5), CURTAIN);
    }

    #[test]
    fn top_view_does_not_touch_pixels() {
        let with_top = composite(Color::BLACK, &[], Some(ViewResource(3)), 0.1);
        let without = composite(Color::BLACK, &[], None, 0.1);
        assert_eq!(
            Pixmap::render(&with_top, 8, 8).data(),
            Pixmap::render(&without, 8, 8).data()
        );
    }

    #[test]
    fn curtain_color_is_stored_verbatim() {
        let plan = composite(color_from_argb(0x8012_3456), &[], None, 0.1);
        let pixmap = Pixmap::render(&plan, 2, 2);
        assert_eq!(pixmap.rgba(1, 1), [0x12, 0x34, 0x56, 0x80]);
    }
}
