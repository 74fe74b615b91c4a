// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay paint plan: curtain fill, subtractive clears, top view.

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;

use limelight_hollow::ResolvedHollow;

/// Default curtain color as packed ARGB: black at ~67% opacity.
pub const DEFAULT_CURTAIN_ARGB: u32 = 0xAA00_0000;

/// Convert a packed `0xAARRGGBB` value into a [`Color`].
///
/// The packed-int form is the conventional way overlay colors are configured
/// by embedders; [`DEFAULT_CURTAIN_ARGB`] is the usual starting point.
#[inline]
#[expect(clippy::cast_possible_truncation, reason = "each channel is masked to 8 bits")]
pub fn color_from_argb(argb: u32) -> Color {
    Color::from_rgba8(
        ((argb >> 16) & 0xFF) as u8,
        ((argb >> 8) & 0xFF) as u8,
        (argb & 0xFF) as u8,
        ((argb >> 24) & 0xFF) as u8,
    )
}

/// Opaque reference to a host layout resource layered above the curtain.
///
/// Inflation and layout of the referenced view are host concerns; the plan
/// only records that the resource should be drawn above the composited
/// surface, unclipped, anchored to the overlay's own coordinate space.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewResource(pub u32);

/// One paint operation in an [`OverlayPlan`].
#[derive(Clone, Debug)]
pub enum OverlayOp {
    /// Paint the full surface with the curtain color (alpha-inclusive).
    Fill {
        /// Curtain color.
        color: Color,
    },
    /// Clear the region inside `path` to fully transparent
    /// (destination-out).
    Clear {
        /// Clip path of one hollow, in overlay coordinates.
        path: BezPath,
    },
    /// Draw the referenced host view above the surface, unclipped.
    TopView {
        /// Host layout resource to inflate and draw.
        resource: ViewResource,
    },
}

/// Ordered paint operations for one overlay session.
///
/// Built once per session by [`composite`] and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct OverlayPlan {
    /// Operations in paint order.
    pub ops: Vec<OverlayOp>,
}

impl OverlayPlan {
    /// Number of cutout clears in the plan.
    pub fn hollow_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, OverlayOp::Clear { .. }))
            .count()
    }
}

/// Compose the curtain with the given hollows into an [`OverlayPlan`].
///
/// The plan fills the surface with `color`, then clears each hollow's clip
/// region in registration order, then layers `top_view` (if any) above,
/// unclipped. `tolerance` is the curve-flattening accuracy used when
/// resolving shapes to clip paths.
///
/// Zero hollows are tolerated and yield a dimmed-curtain-only plan; callers
/// that consider that a precondition violation must reject it before
/// composing. A hollow whose clip resolution fails on degenerate bounds is
/// skipped rather than aborting the whole overlay (warned under the `log`
/// feature).
pub fn composite(
    color: Color,
    hollows: &[ResolvedHollow],
    top_view: Option<ViewResource>,
    tolerance: f64,
) -> OverlayPlan {
    let mut ops = Vec::with_capacity(hollows.len() + 2);
    ops.push(OverlayOp::Fill { color });
    for hollow in hollows {
        match hollow.shape.clip_path(hollow.bounds, tolerance) {
            Ok(path) => ops.push(OverlayOp::Clear { path }),
            Err(_degenerate) => {
                #[cfg(feature = "log")]
                log::warn!("skipping hollow with {_degenerate}");
            }
        }
    }
    if let Some(resource) = top_view {
        ops.push(OverlayOp::TopView { resource });
    }
    OverlayPlan { ops }
}
