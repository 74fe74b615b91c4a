// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Session: lifecycle and presentation policy for spotlight guides.
//!
//! This crate is the orchestration layer above `limelight_hollow` (cutout
//! geometry) and `limelight_overlay` (compositing). It owns:
//!
//! - [`GuideBuilder`] / [`GuideConfig`]: the fluent configuration surface and
//!   the immutable per-session snapshot it produces. A session never observes
//!   configuration changes made after [`GuideBuilder::build`].
//! - [`Guide`]: the session state machine,
//!   `Idle -> AwaitingLayout -> Composed -> Presented -> Dismissed`, with the
//!   layout-readiness retry, back-press policy, and at-most-once callbacks.
//! - The external boundaries: [`Presenter`] (modal presentation),
//!   [`LayoutScheduler`] (the host's next-layout signal), and [`GuideEvents`]
//!   (enter/exit callbacks).
//!
//! ## Threading model
//!
//! Everything here is single-threaded and cooperative: registration,
//! resolution, composition, and presentation all run on the host's UI/event
//! thread, and the only suspension point is the layout-readiness wait, which
//! re-enters through [`Guide::on_layout`] when the host signals its next
//! layout pass. There is no locking because there is no concurrent mutation.
//!
//! A scheduled re-check carries the [`SessionId`] it was issued for;
//! [`Guide::on_layout`] ignores stale ids, so a dismissed or superseded
//! session can never be resurrected by a dangling callback.
//!
//! ## Known liveness assumption
//!
//! The layout-readiness wait retries without bound: if the first-registered
//! target never reports a nonzero width, the guide simply never appears.
//! Layout completion is guaranteed by the host environment under normal
//! operation, so this is documented as an assumption, not enforced here.
//!
//! See [`Guide`] for a complete worked example.

#![no_std]

extern crate alloc;

mod config;
mod guide;

pub use config::{AnimationRef, GuideBuilder, GuideConfig};
pub use guide::{
    BackPress, Guide, GuideEvents, LayoutScheduler, PresentParams, PresentationHandle, Presenter,
    SessionId, SessionState, ShowError,
};
