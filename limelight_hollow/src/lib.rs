// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Hollow: headless cutout geometry for spotlight guides.
//!
//! A spotlight guide dims the whole screen behind a "curtain" and punches
//! transparent cutouts ("hollows") through it, one per highlighted target
//! element. This crate is the geometry half of that picture:
//!
//! - [`HollowShape`]: the clip geometry of a single cutout (rectangle with
//!   optional corner radius, inscribed oval, or a custom path function),
//!   resolved against a bounds rectangle via [`HollowShape::clip_path`].
//! - [`Hollow`]: the per-target modifier record (auto-adapt, padding,
//!   explicit size, offset, shape override) and its [`Hollow::resolve`]
//!   pipeline that turns a target's live bounds into final cutout geometry.
//! - [`HollowRegistry`]: an insertion-ordered, identity-deduplicating
//!   collection of hollows; registration order is the draw order.
//! - [`TargetSpace`]: the read-only boundary to the host's element registry.
//!   Targets are opaque [`TargetId`]s with queryable bounds and an optional
//!   background-shape hint; this crate never owns them.
//!
//! Compositing the resolved hollows into an overlay lives in
//! `limelight_overlay`; session lifecycle and presentation policy live in
//! `limelight_session`.
//!
//! ## Quick start
//!
//! ```
//! use kurbo::Rect;
//! use limelight_hollow::{Direction, Hollow, HollowRegistry, TargetId, TargetSpace};
//!
//! struct OneButton;
//!
//! impl TargetSpace for OneButton {
//!     fn bounds(&self, _target: TargetId) -> Option<Rect> {
//!         Some(Rect::new(10.0, 10.0, 110.0, 50.0))
//!     }
//! }
//!
//! let button = TargetId(1);
//! let mut registry = HollowRegistry::new();
//! registry.entry(button).padding = 4.0;
//! registry.entry(button).offset = Some((6.0, Direction::Down).into());
//!
//! let resolved = registry.first().unwrap().resolve(&OneButton).unwrap();
//! assert_eq!(resolved.bounds, Rect::new(6.0, 12.0, 114.0, 60.0));
//! ```

#![no_std]

extern crate alloc;

mod hollow;
mod registry;
mod shape;
mod space;

pub use hollow::{Direction, Hollow, Offset, ResolveError, ResolvedHollow};
pub use registry::HollowRegistry;
pub use shape::{CustomClip, DegenerateBounds, HollowShape};
pub use space::{TargetId, TargetSpace};
