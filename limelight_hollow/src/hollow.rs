// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target modifiers and the geometry resolution pipeline.

use core::fmt;

use kurbo::{Rect, Size, Vec2};

use crate::shape::{DegenerateBounds, HollowShape};
use crate::space::{TargetId, TargetSpace};

/// Direction of a hollow offset, in overlay coordinates (y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward negative y.
    Up,
    /// Toward positive y.
    Down,
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
}

impl Direction {
    /// Translation vector for moving `amount` along this direction.
    #[inline]
    pub fn vector(self, amount: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -amount),
            Self::Down => Vec2::new(0.0, amount),
            Self::Left => Vec2::new(-amount, 0.0),
            Self::Right => Vec2::new(amount, 0.0),
        }
    }
}

/// Pure translation applied to a hollow's resolved bounds.
///
/// Offsets are applied last, after size and padding resolution, and never
/// resize the hollow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offset {
    /// Distance to move, in overlay units.
    pub amount: f64,
    /// Direction to move in.
    pub direction: Direction,
}

impl Offset {
    /// Translation vector of this offset.
    #[inline]
    pub fn vector(self) -> Vec2 {
        self.direction.vector(self.amount)
    }
}

impl From<(f64, Direction)> for Offset {
    fn from((amount, direction): (f64, Direction)) -> Self {
        Self { amount, direction }
    }
}

/// Per-target cutout modifiers and their resolver.
///
/// One `Hollow` exists per distinct [`TargetId`] within a session; it holds
/// the caller's adjustments and, via [`Hollow::resolve`], turns the target's
/// live bounds into final cutout geometry. All fields are plain data so that
/// re-registering a target simply mutates the record in place.
#[derive(Clone, Debug)]
pub struct Hollow {
    /// The target this hollow reveals. Never owned; only used to query the
    /// [`TargetSpace`].
    pub target: TargetId,
    /// Infer the cutout shape from the target's own background shape when
    /// no explicit [`Hollow::shape`] is set. Defaults to `true`.
    pub auto_adapt: bool,
    /// Uniform **outward** expansion of the resolved bounds, per side.
    ///
    /// Positive padding makes the cutout slightly larger than the element,
    /// which is the usual highlight intent. Defaults to `0.0`.
    pub padding: f64,
    /// Override the cutout size, keeping the target's top-left corner as
    /// origin (the cutout is not re-centered on the target).
    pub explicit_size: Option<Size>,
    /// Translate the resolved bounds after size and padding are applied.
    pub offset: Option<Offset>,
    /// Explicit shape override; when absent the shape is inferred (background
    /// hint under auto-adapt, else a sharp rectangle).
    pub shape: Option<HollowShape>,
}

impl Hollow {
    /// A hollow for `target` with default modifiers.
    pub fn new(target: TargetId) -> Self {
        Self {
            target,
            auto_adapt: true,
            padding: 0.0,
            explicit_size: None,
            offset: None,
            shape: None,
        }
    }

    /// Resolve the final cutout bounds and shape against the live target.
    ///
    /// The pipeline order is fixed and observable: explicit size replaces
    /// width/height first (top-left anchored), padding then expands outward,
    /// and the offset translates last. Resolution is a pure function of the
    /// target's current state; it may be called repeatedly (e.g. after a
    /// re-layout) and is idempotent for identical inputs.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::TargetUnavailable`] when the space does not know the
    ///   target or reports a zero-area rect; the caller is expected to retry
    ///   after the next layout pass.
    /// - [`ResolveError::Degenerate`] when the modifiers themselves produce a
    ///   zero-area cutout (e.g. an explicit size of zero); retrying cannot
    ///   fix this.
    pub fn resolve(&self, space: &dyn TargetSpace) -> Result<ResolvedHollow, ResolveError> {
        let live = space
            .bounds(self.target)
            .filter(|r| r.width() > 0.0 && r.height() > 0.0)
            .ok_or(ResolveError::TargetUnavailable {
                target: self.target,
            })?;

        let mut bounds = match self.explicit_size {
            Some(size) => Rect::from_origin_size(live.origin(), size),
            None => live,
        };
        // Positive insets expand in kurbo, which is exactly the outward
        // padding contract documented on `padding`.
        bounds = bounds.inset(self.padding);
        if let Some(offset) = self.offset {
            bounds = bounds + offset.vector();
        }
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(ResolveError::Degenerate(DegenerateBounds { bounds }));
        }

        let shape = match &self.shape {
            Some(shape) => shape.clone(),
            None if self.auto_adapt => match space.background_hint(self.target) {
                // Only shapes we can reproduce faithfully are adopted; a
                // custom hint would be the host's concern, not ours.
                Some(hint @ (HollowShape::Rect { .. } | HollowShape::Oval)) => hint,
                _ => HollowShape::RECT,
            },
            None => HollowShape::RECT,
        };

        Ok(ResolvedHollow { bounds, shape })
    }
}

/// Outcome of [`Hollow::resolve`]: concrete cutout geometry.
#[derive(Clone, Debug)]
pub struct ResolvedHollow {
    /// Final cutout bounds in overlay coordinates.
    pub bounds: Rect,
    /// Final cutout shape.
    pub shape: HollowShape,
}

/// Error produced by [`Hollow::resolve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveError {
    /// The target is unknown to the space or has not been laid out yet.
    ///
    /// Recoverable: resolution should be retried after the host's next
    /// layout pass.
    TargetUnavailable {
        /// The target that was queried.
        target: TargetId,
    },
    /// The modifiers resolved to a zero-area cutout.
    ///
    /// Not recoverable by retrying; callers typically skip the hollow.
    Degenerate(DegenerateBounds),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetUnavailable { target } => {
                write!(f, "target {target:?} is unavailable or not laid out")
            }
            Self::Degenerate(inner) => inner.fmt(f),
        }
    }
}

impl core::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::TargetUnavailable { .. } => None,
            Self::Degenerate(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Space with a single target at a fixed rect, plus an optional hint.
    struct FixedSpace {
        target: TargetId,
        rect: Rect,
        hint: Option<HollowShape>,
    }

    impl FixedSpace {
        fn new(target: TargetId, rect: Rect) -> Self {
            Self {
                target,
                rect,
                hint: None,
            }
        }
    }

    impl TargetSpace for FixedSpace {
        fn bounds(&self, target: TargetId) -> Option<Rect> {
            (target == self.target).then_some(self.rect)
        }

        fn background_hint(&self, target: TargetId) -> Option<HollowShape> {
            (target == self.target).then(|| self.hint.clone()).flatten()
        }
    }

    fn space_10_10_100_100() -> FixedSpace {
        // x, y, width, height = (10, 10, 100, 100).
        FixedSpace::new(TargetId(1), Rect::new(10.0, 10.0, 110.0, 110.0))
    }

    #[test]
    fn plain_resolution_uses_live_bounds() {
        let space = space_10_10_100_100();
        let resolved = Hollow::new(TargetId(1)).resolve(&space).unwrap();
        assert_eq!(resolved.bounds, Rect::new(10.0, 10.0, 110.0, 110.0));
        assert!(matches!(resolved.shape, HollowShape::Rect { radius } if radius == 0.0));
    }

    #[test]
    fn explicit_size_keeps_top_left_origin() {
        let space = space_10_10_100_100();
        let mut hollow = Hollow::new(TargetId(1));
        hollow.explicit_size = Some(Size::new(50.0, 50.0));
        let resolved = hollow.resolve(&space).unwrap();
        // (10, 10, 50, 50) in x/y/w/h form; notably not centered on the target.
        assert_eq!(resolved.bounds, Rect::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn size_then_padding_then_offset_order_is_locked() {
        // The literal sequence from the resolution contract:
        // size (50,50) => (10,10,50,50); padding 5 => (5,5,60,60);
        // offset (10, Down) => (5,15,60,60), all in x/y/w/h form.
        let space = space_10_10_100_100();
        let mut hollow = Hollow::new(TargetId(1));
        hollow.explicit_size = Some(Size::new(50.0, 50.0));
        hollow.padding = 5.0;
        hollow.offset = Some((10.0, Direction::Down).into());
        let resolved = hollow.resolve(&space).unwrap();
        assert_eq!(resolved.bounds, Rect::new(5.0, 15.0, 65.0, 75.0));
        assert_eq!(resolved.bounds.size(), Size::new(60.0, 60.0));
    }

    #[test]
    fn padding_expands_outward() {
        let space = space_10_10_100_100();
        let mut hollow = Hollow::new(TargetId(1));
        hollow.padding = 3.0;
        let resolved = hollow.resolve(&space).unwrap();
        assert_eq!(resolved.bounds, Rect::new(7.0, 7.0, 113.0, 113.0));
    }

    #[test]
    fn offset_is_pure_translation() {
        let space = space_10_10_100_100();
        for (direction, expected) in [
            (Direction::Up, Vec2::new(0.0, -8.0)),
            (Direction::Down, Vec2::new(0.0, 8.0)),
            (Direction::Left, Vec2::new(-8.0, 0.0)),
            (Direction::Right, Vec2::new(8.0, 0.0)),
        ] {
            let mut hollow = Hollow::new(TargetId(1));
            hollow.offset = Some((8.0, direction).into());
            let resolved = hollow.resolve(&space).unwrap();
            assert_eq!(resolved.bounds.origin(), space.rect.origin() + expected);
            assert_eq!(resolved.bounds.size(), space.rect.size());
        }
    }

    #[test]
    fn unknown_target_is_unavailable() {
        let space = space_10_10_100_100();
        let err = Hollow::new(TargetId(99)).resolve(&space).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TargetUnavailable {
                target: TargetId(99)
            }
        );
    }

    #[test]
    fn unmeasured_target_is_unavailable() {
        let space = FixedSpace::new(TargetId(1), Rect::new(10.0, 10.0, 10.0, 40.0));
        let err = Hollow::new(TargetId(1)).resolve(&space).unwrap_err();
        assert!(matches!(err, ResolveError::TargetUnavailable { .. }));
    }

    #[test]
    fn zero_explicit_size_is_degenerate() {
        let space = space_10_10_100_100();
        let mut hollow = Hollow::new(TargetId(1));
        hollow.explicit_size = Some(Size::ZERO);
        let err = hollow.resolve(&space).unwrap_err();
        assert!(matches!(err, ResolveError::Degenerate(_)));
    }

    #[test]
    fn explicit_shape_wins_over_hint() {
        let mut space = space_10_10_100_100();
        space.hint = Some(HollowShape::Oval);
        let mut hollow = Hollow::new(TargetId(1));
        hollow.shape = Some(HollowShape::rounded(6.0));
        let resolved = hollow.resolve(&space).unwrap();
        assert!(matches!(resolved.shape, HollowShape::Rect { radius } if radius == 6.0));
    }

    #[test]
    fn auto_adapt_picks_up_background_hint() {
        let mut space = space_10_10_100_100();
        space.hint = Some(HollowShape::Oval);
        let resolved = Hollow::new(TargetId(1)).resolve(&space).unwrap();
        assert!(matches!(resolved.shape, HollowShape::Oval));
    }

    #[test]
    fn auto_adapt_disabled_ignores_hint() {
        let mut space = space_10_10_100_100();
        space.hint = Some(HollowShape::Oval);
        let mut hollow = Hollow::new(TargetId(1));
        hollow.auto_adapt = false;
        let resolved = hollow.resolve(&space).unwrap();
        assert!(matches!(resolved.shape, HollowShape::Rect { radius } if radius == 0.0));
    }

    #[test]
    fn custom_hints_fall_back_to_rect() {
        let mut space = space_10_10_100_100();
        space.hint = Some(HollowShape::custom(|bounds| {
            kurbo::Shape::to_path(&bounds, 0.1)
        }));
        let resolved = Hollow::new(TargetId(1)).resolve(&space).unwrap();
        assert!(matches!(resolved.shape, HollowShape::Rect { radius } if radius == 0.0));
    }

    #[test]
    fn resolution_is_idempotent() {
        let space = space_10_10_100_100();
        let mut hollow = Hollow::new(TargetId(1));
        hollow.padding = 2.0;
        hollow.offset = Some((4.0, Direction::Left).into());
        let first = hollow.resolve(&space).unwrap();
        let second = hollow.resolve(&space).unwrap();
        assert_eq!(first.bounds, second.bounds);
    }
}
