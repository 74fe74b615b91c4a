// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The target boundary: opaque element identities and a read-only query space.

use kurbo::Rect;

use crate::shape::HollowShape;

/// Stable identity of a target element in the host UI.
///
/// Limelight never owns or inspects target elements; it only keys hollows by
/// this identity and queries the [`TargetSpace`] for live geometry. The host
/// is responsible for keeping the identity stable for the lifetime of one
/// guide session.
///
/// Registering the same `TargetId` twice mutates the existing hollow instead
/// of creating a duplicate (see [`HollowRegistry::entry`](crate::HollowRegistry::entry)).
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Read-only view of the host's element registry.
///
/// Implemented by the embedder over whatever element store it has (a box
/// tree, a widget arena, a retained DOM). All coordinates are in the
/// overlay's own coordinate space.
///
/// The two queries are deliberately snapshot-free: hollows re-query on every
/// resolution so a guide composed after a re-layout picks up fresh bounds.
pub trait TargetSpace {
    /// Current bounds of `target`, or `None` when the target is unknown or
    /// not attached to the layout tree.
    ///
    /// A target that is attached but not yet measured should report a
    /// zero-area rect (or `None`); resolution treats both as "not ready yet".
    fn bounds(&self, target: TargetId) -> Option<Rect>;

    /// Background shape of `target`, when the host can recognize one.
    ///
    /// Used by auto-adapt to match the cutout to the element's own visual
    /// shape. Hosts that cannot introspect backgrounds can rely on the
    /// default, which reports no hint.
    fn background_hint(&self, target: TargetId) -> Option<HollowShape> {
        let _ = target;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoHints;

    impl TargetSpace for NoHints {
        fn bounds(&self, _target: TargetId) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 10.0, 10.0))
        }
    }

    #[test]
    fn background_hint_defaults_to_none() {
        let space = NoHints;
        assert!(space.background_hint(TargetId(7)).is_none());
    }

    #[test]
    fn target_ids_compare_by_value() {
        assert_eq!(TargetId(3), TargetId(3));
        assert_ne!(TargetId(3), TargetId(4));
    }
}
