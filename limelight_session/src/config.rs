// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent configuration and the immutable per-session snapshot.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use peniko::Color;

use limelight_hollow::{Direction, Hollow, HollowRegistry, HollowShape, TargetId};
use limelight_overlay::{DEFAULT_CURTAIN_ARGB, ViewResource, color_from_argb};

use crate::guide::GuideEvents;

/// Opaque reference to a host animation style applied on present/dismiss.
///
/// Lookup and playback are host concerns; the value is carried through to the
/// [`Presenter`](crate::Presenter) untouched.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnimationRef(pub u32);

/// Builder for a guide session's configuration.
///
/// Per-target options register the target on first use and mutate the same
/// record thereafter (one hollow per target identity, in registration order).
/// Methods chain by `&mut self` so a builder can also be filled in
/// incrementally, `std::process::Command`-style.
///
/// [`GuideBuilder::build`] takes an immutable snapshot; later builder
/// mutations never leak into an already-built [`GuideConfig`].
///
/// ```
/// use limelight_hollow::{Direction, TargetId};
/// use limelight_session::GuideBuilder;
///
/// let button = TargetId(1);
/// let config = GuideBuilder::new()
///     .with_target(button)
///     .padding(button, 8.0)
///     .offset(button, 4.0, Direction::Down)
///     .cancel_on_back(false)
///     .build();
/// assert_eq!(config.hollows().len(), 1);
/// ```
pub struct GuideBuilder {
    registry: HollowRegistry,
    curtain_color: Color,
    cancel_on_back: bool,
    top_view: Option<ViewResource>,
    animation: Option<AnimationRef>,
    events: Option<Box<dyn GuideEvents>>,
}

impl Default for GuideBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GuideBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuideBuilder")
            .field("registry", &self.registry)
            .field("curtain_color", &self.curtain_color)
            .field("cancel_on_back", &self.cancel_on_back)
            .field("top_view", &self.top_view)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl GuideBuilder {
    /// A builder with the default curtain (black at ~67% opacity) and
    /// back-press cancellation enabled.
    pub fn new() -> Self {
        Self {
            registry: HollowRegistry::new(),
            curtain_color: color_from_argb(DEFAULT_CURTAIN_ARGB),
            cancel_on_back: true,
            top_view: None,
            animation: None,
            events: None,
        }
    }

    /// Register `target` for highlighting with default modifiers.
    pub fn with_target(&mut self, target: TargetId) -> &mut Self {
        self.registry.entry(target);
        self
    }

    /// Register `target` and set whether its cutout shape auto-adapts to the
    /// target's own background shape.
    ///
    /// Auto-adapt is best-effort: when the host cannot report a usable hint,
    /// the cutout falls back to a plain rectangle. Use
    /// [`GuideBuilder::shape`] when exact control is needed.
    pub fn with_auto_adapt(&mut self, target: TargetId, auto_adapt: bool) -> &mut Self {
        self.registry.entry(target).auto_adapt = auto_adapt;
        self
    }

    /// Expand `target`'s cutout outward by `padding` on each side.
    pub fn padding(&mut self, target: TargetId, padding: f64) -> &mut Self {
        self.registry.entry(target).padding = padding;
        self
    }

    /// Override `target`'s cutout size, anchored at the target's top-left
    /// corner (not re-centered).
    pub fn size(&mut self, target: TargetId, width: f64, height: f64) -> &mut Self {
        self.registry.entry(target).explicit_size = Some(Size::new(width, height));
        self
    }

    /// Translate `target`'s cutout by `amount` along `direction`, after size
    /// and padding are applied.
    pub fn offset(&mut self, target: TargetId, amount: f64, direction: Direction) -> &mut Self {
        self.registry.entry(target).offset = Some((amount, direction).into());
        self
    }

    /// Set an explicit cutout shape for `target`, overriding auto-adapt.
    pub fn shape(&mut self, target: TargetId, shape: HollowShape) -> &mut Self {
        self.registry.entry(target).shape = Some(shape);
        self
    }

    /// Set the curtain color.
    pub fn curtain_color(&mut self, color: Color) -> &mut Self {
        self.curtain_color = color;
        self
    }

    /// Set the curtain color from a packed `0xAARRGGBB` value.
    pub fn curtain_color_argb(&mut self, argb: u32) -> &mut Self {
        self.curtain_color = color_from_argb(argb);
        self
    }

    /// Whether back navigation dismisses the guide. Defaults to `true`;
    /// when `false`, back presses are swallowed while the guide is up.
    pub fn cancel_on_back(&mut self, cancel: bool) -> &mut Self {
        self.cancel_on_back = cancel;
        self
    }

    /// Layer a host view resource above the curtain, unclipped.
    pub fn top_view(&mut self, resource: ViewResource) -> &mut Self {
        self.top_view = Some(resource);
        self
    }

    /// Animation style used by the presenter on present/dismiss.
    pub fn animation_style(&mut self, animation: AnimationRef) -> &mut Self {
        self.animation = Some(animation);
        self
    }

    /// Callback sink notified on show and dismiss.
    pub fn events(&mut self, events: Box<dyn GuideEvents>) -> &mut Self {
        self.events = Some(events);
        self
    }

    /// Take an immutable snapshot of the current configuration.
    ///
    /// Hollows and globals are copied out; the events sink, being single-use,
    /// moves into the snapshot and a subsequent `build` produces a config
    /// without one.
    pub fn build(&mut self) -> GuideConfig {
        GuideConfig {
            hollows: self.registry.hollows().to_vec(),
            curtain_color: self.curtain_color,
            cancel_on_back: self.cancel_on_back,
            top_view: self.top_view,
            animation: self.animation,
            events: self.events.take(),
        }
    }
}

/// Finalized, immutable configuration for one guide session.
///
/// Produced by [`GuideBuilder::build`] and consumed by
/// [`Guide::show`](crate::Guide::show); nothing mutates it afterwards, which
/// removes the mid-session mutation hazard of a live builder.
pub struct GuideConfig {
    pub(crate) hollows: Vec<Hollow>,
    pub(crate) curtain_color: Color,
    pub(crate) cancel_on_back: bool,
    pub(crate) top_view: Option<ViewResource>,
    pub(crate) animation: Option<AnimationRef>,
    pub(crate) events: Option<Box<dyn GuideEvents>>,
}

impl fmt::Debug for GuideConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuideConfig")
            .field("hollows", &self.hollows)
            .field("curtain_color", &self.curtain_color)
            .field("cancel_on_back", &self.cancel_on_back)
            .field("top_view", &self.top_view)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl GuideConfig {
    /// The registered hollows, in registration (= draw) order.
    pub fn hollows(&self) -> &[Hollow] {
        &self.hollows
    }

    /// The curtain color.
    pub fn curtain_color(&self) -> Color {
        self.curtain_color
    }

    /// Whether back navigation dismisses the guide.
    pub fn cancel_on_back(&self) -> bool {
        self.cancel_on_back
    }
}
