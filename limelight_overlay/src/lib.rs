// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Overlay: compositing a curtain with transparent cutouts.
//!
//! The compositor's job is simple to state: paint the whole overlay surface
//! with the curtain color, then clear (destination-out) the clip region of
//! each resolved hollow so the content underneath shows through, then layer
//! an optional custom top view above everything, unclipped.
//!
//! That sequence is expressed as a small plain-old-data op list:
//!
//! - [`OverlayOp`] / [`OverlayPlan`]: the ordered paint operations produced
//!   by [`composite`]. Backends (a real windowing/render integration, or the
//!   reference rasterizer here) consume the plan; nothing in it is mutated
//!   after composition.
//! - [`Pixmap`]: a reference CPU rasterization of a plan into straight-alpha
//!   RGBA8 pixels. It exists for tests and headless consumers; it is not a
//!   production renderer (no antialiasing, pixel-center coverage only).
//!
//! Cutouts are independent: clearing is idempotent, so overlapping hollows
//! simply union their cleared area with no double-subtraction artifacts.
//!
//! ## Quick start
//!
//! ```
//! use kurbo::Rect;
//! use limelight_hollow::{HollowShape, ResolvedHollow};
//! use limelight_overlay::{composite, color_from_argb, Pixmap, DEFAULT_CURTAIN_ARGB};
//!
//! let hollow = ResolvedHollow {
//!     bounds: Rect::new(10.0, 10.0, 30.0, 30.0),
//!     shape: HollowShape::RECT,
//! };
//! let plan = composite(color_from_argb(DEFAULT_CURTAIN_ARGB), &[hollow], None, 0.1);
//!
//! let pixmap = Pixmap::render(&plan, 64, 64);
//! assert_eq!(pixmap.rgba(20, 20), [0, 0, 0, 0]); // inside the cutout
//! assert_eq!(pixmap.rgba(40, 40), [0, 0, 0, 0xAA]); // curtain
//! ```

#![no_std]

extern crate alloc;

mod plan;
mod raster;

pub use plan::{
    DEFAULT_CURTAIN_ARGB, OverlayOp, OverlayPlan, ViewResource, color_from_argb, composite,
};
pub use raster::Pixmap;
