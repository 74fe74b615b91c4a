// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cutout shapes: the clip geometry of a single hollow.

use alloc::sync::Arc;
use core::fmt;

use kurbo::{BezPath, Ellipse, Rect, RoundedRect, Shape as _};

/// Clip geometry of one hollow, resolved against a bounds rectangle.
///
/// The built-in variants cover the shapes a target's background usually has;
/// [`HollowShape::Custom`] is the escape hatch when neither matches (e.g. a
/// star-shaped badge). A shape is pure geometry: the same bounds always
/// produce the same clip path.
#[derive(Clone, Debug)]
pub enum HollowShape {
    /// The bounds rectangle itself, with an optional uniform corner radius.
    Rect {
        /// Corner radius; `0.0` for a sharp-cornered rectangle.
        radius: f64,
    },
    /// The ellipse inscribed in the bounds rectangle.
    Oval,
    /// Caller-supplied clip strategy receiving the bounds rectangle.
    Custom(CustomClip),
}

impl HollowShape {
    /// Sharp-cornered rectangle; the default shape when nothing else applies.
    pub const RECT: Self = Self::Rect { radius: 0.0 };

    /// Rectangle with a uniform corner radius.
    #[inline]
    pub const fn rounded(radius: f64) -> Self {
        Self::Rect { radius }
    }

    /// Custom shape from a function mapping bounds to a clip path.
    ///
    /// The function must return valid geometry for any non-degenerate bounds
    /// rectangle; it is never called with degenerate bounds.
    pub fn custom(clip: impl Fn(Rect) -> BezPath + Send + Sync + 'static) -> Self {
        Self::Custom(CustomClip(Arc::new(clip)))
    }

    /// Resolve this shape against `bounds` into a concrete clip path.
    ///
    /// `tolerance` is the curve-flattening accuracy used when converting the
    /// built-in variants to a path.
    ///
    /// Zero-width or zero-height bounds have no meaningful cutout; they fail
    /// with [`DegenerateBounds`] instead of silently producing a zero-area
    /// clip.
    pub fn clip_path(&self, bounds: Rect, tolerance: f64) -> Result<BezPath, DegenerateBounds> {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(DegenerateBounds { bounds });
        }
        let path = match self {
            Self::Rect { radius } if *radius > 0.0 => {
                RoundedRect::from_rect(bounds, *radius).to_path(tolerance)
            }
            Self::Rect { .. } => bounds.to_path(tolerance),
            Self::Oval => Ellipse::from_rect(bounds).to_path(tolerance),
            Self::Custom(clip) => (clip.0)(bounds),
        };
        Ok(path)
    }
}

/// Caller-supplied clip strategy for [`HollowShape::Custom`].
#[derive(Clone)]
pub struct CustomClip(Arc<dyn Fn(Rect) -> BezPath + Send + Sync>);

impl fmt::Debug for CustomClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomClip").field(&"..").finish()
    }
}

/// Error returned when a shape is resolved against zero-area bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegenerateBounds {
    /// The offending bounds rectangle.
    pub bounds: Rect,
}

impl fmt::Display for DegenerateBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degenerate hollow bounds {:?} ({} x {})",
            self.bounds,
            self.bounds.width(),
            self.bounds.height()
        )
    }
}

impl core::error::Error for DegenerateBounds {}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Shape as _};

    #[test]
    fn rect_clip_covers_bounds() {
        let bounds = Rect::new(10.0, 20.0, 60.0, 80.0);
        let path = HollowShape::RECT.clip_path(bounds, 0.1).unwrap();
        assert_eq!(path.bounding_box(), bounds);
        assert!(path.contains(Point::new(11.0, 21.0)));
        assert!(path.contains(Point::new(59.0, 79.0)));
        assert!(!path.contains(Point::new(9.0, 21.0)));
    }

    #[test]
    fn oval_clip_excludes_corners_includes_center() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let path = HollowShape::Oval.clip_path(bounds, 0.1).unwrap();
        assert!(path.contains(bounds.center()));
        assert!(!path.contains(Point::new(1.0, 1.0)));
        assert!(!path.contains(Point::new(99.0, 49.0)));
    }

    #[test]
    fn rounded_rect_clip_trims_corners() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 40.0);
        let path = HollowShape::rounded(10.0).clip_path(bounds, 0.1).unwrap();
        assert!(path.contains(bounds.center()));
        // The very corner falls outside the radius.
        assert!(!path.contains(Point::new(0.5, 0.5)));
        // The edge midpoint is still inside.
        assert!(path.contains(Point::new(20.0, 1.0)));
    }

    #[test]
    fn custom_clip_receives_bounds() {
        let shape = HollowShape::custom(|bounds| {
            // Clip to the left half only.
            Rect::new(bounds.x0, bounds.y0, bounds.center().x, bounds.y1).to_path(0.1)
        });
        let path = shape
            .clip_path(Rect::new(0.0, 0.0, 100.0, 10.0), 0.1)
            .unwrap();
        assert!(path.contains(Point::new(10.0, 5.0)));
        assert!(!path.contains(Point::new(90.0, 5.0)));
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        let flat = Rect::new(5.0, 5.0, 5.0, 50.0);
        let err = HollowShape::RECT.clip_path(flat, 0.1).unwrap_err();
        assert_eq!(err.bounds, flat);

        let err = HollowShape::Oval
            .clip_path(Rect::new(0.0, 0.0, 10.0, 0.0), 0.1)
            .unwrap_err();
        assert_eq!(err.bounds.height(), 0.0);
    }

    #[test]
    fn custom_clip_is_not_called_for_degenerate_bounds() {
        let shape = HollowShape::custom(|_| unreachable!("degenerate bounds must fail first"));
        assert!(shape.clip_path(Rect::ZERO, 0.1).is_err());
    }
}
