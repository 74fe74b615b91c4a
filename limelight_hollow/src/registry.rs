// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered, identity-deduplicating storage for hollows.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::hollow::Hollow;
use crate::space::TargetId;

/// The set of hollows registered for one guide session.
///
/// Two invariants drive this type:
///
/// - **At most one hollow per target identity.** Re-registering a target via
///   [`HollowRegistry::entry`] returns the existing record for mutation
///   instead of creating a duplicate.
/// - **Registration order is draw order.** The first registered hollow is
///   composited first and also serves as the session's layout-readiness
///   probe. Re-registration never moves a hollow.
///
/// Since cutouts only subtract from the curtain, overlapping hollows are fine;
/// order matters only for any future shape-priority rules.
#[derive(Clone, Debug, Default)]
pub struct HollowRegistry {
    order: Vec<Hollow>,
    index: HashMap<TargetId, usize>,
}

impl HollowRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hollow for `target`, created with default modifiers on first
    /// reference.
    pub fn entry(&mut self, target: TargetId) -> &mut Hollow {
        let slot = *self.index.entry(target).or_insert_with(|| {
            self.order.push(Hollow::new(target));
            self.order.len() - 1
        });
        &mut self.order[slot]
    }

    /// All hollows in registration order.
    pub fn hollows(&self) -> &[Hollow] {
        &self.order
    }

    /// The first-registered hollow, if any.
    pub fn first(&self) -> Option<&Hollow> {
        self.order.first()
    }

    /// Number of distinct registered targets.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no target has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
