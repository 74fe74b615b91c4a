// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session state machine and its external boundaries.

use alloc::vec::Vec;
use core::fmt;

use limelight_hollow::TargetSpace;
use limelight_overlay::{OverlayPlan, composite};

use crate::config::{AnimationRef, GuideConfig};

/// Curve-flattening accuracy used when resolving hollow shapes to clip paths.
const CLIP_TOLERANCE: f64 = 0.1;

/// Identity of one `show()`-to-dismiss session.
///
/// Every [`Guide::show`] allocates a fresh id; scheduled layout re-checks
/// carry the id they were issued for so that a callback belonging to a
/// superseded or dismissed session is recognizably stale.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Lifecycle of one guide session.
///
/// `Dismissed` is terminal for a session; a later [`Guide::show`] starts a
/// fresh session from the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No session exists.
    Idle,
    /// Waiting for the first-registered target to finish layout.
    AwaitingLayout,
    /// Hollows resolved and the overlay plan built, presentation pending.
    ///
    /// Transient: composition and presentation happen in one re-entry, so
    /// this state is observable only while the presenter call is on the
    /// stack.
    Composed,
    /// The overlay is up.
    Presented,
    /// The session is over.
    Dismissed,
}

/// Handle to one modal presentation, issued by the [`Presenter`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PresentationHandle(pub u64);

/// Presentation options passed along with the composed overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PresentParams {
    /// Whether back navigation may dismiss the presentation.
    pub cancelable: bool,
    /// Host animation style for present/dismiss, if configured.
    pub animation: Option<AnimationRef>,
}

/// The modal presentation boundary.
///
/// Implemented by the embedder over its dialog/window mechanism. The
/// presenter owns everything visual: the guide hands it a finished
/// [`OverlayPlan`] and expects an opaque handle back.
pub trait Presenter {
    /// Show the composed overlay modally and return a handle for it.
    fn present(&mut self, plan: &OverlayPlan, params: &PresentParams) -> PresentationHandle;

    /// Tear down a presentation previously returned by
    /// [`Presenter::present`].
    fn dismiss(&mut self, handle: PresentationHandle);
}

/// The host layout-scheduling boundary.
///
/// [`LayoutScheduler::schedule_layout_check`] asks the host to call
/// [`Guide::on_layout`] with the given session id once its next layout /
/// measure pass completes. At-least-once delivery is assumed; duplicate
/// deliveries and deliveries for stale sessions are harmless no-ops.
pub trait LayoutScheduler {
    /// Request a [`Guide::on_layout`] re-entry after the next layout pass.
    fn schedule_layout_check(&mut self, session: SessionId);
}

/// Callback sink for session lifecycle events.
///
/// Both methods default to doing nothing; each is invoked at most once per
/// session, on the host's main thread.
pub trait GuideEvents {
    /// The overlay was presented.
    fn on_show(&mut self, handle: PresentationHandle) {
        let _ = handle;
    }

    /// The overlay was dismissed.
    fn on_dismiss(&mut self, handle: PresentationHandle) {
        let _ = handle;
    }
}

/// Error returned synchronously by [`Guide::show`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShowError {
    /// No target was registered in the configuration.
    ///
    /// A caller programming error: the show attempt is aborted with no UI
    /// change and is not retried.
    NoTargets,
}

impl fmt::Display for ShowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => f.write_str("cannot show a guide without any registered targets"),
        }
    }
}

impl core::error::Error for ShowError {}

/// Outcome of routing a back press through [`Guide::on_back_pressed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BackPress {
    /// The guide was up and cancelable; it is now dismissed.
    Dismissed,
    /// The guide was up but not cancelable; the event was consumed.
    Swallowed,
    /// No presentation was up; the event is not ours.
    Ignored,
}

/// The spotlight-guide session controller.
///
/// Drives one session at a time through
/// `Idle -> AwaitingLayout -> Composed -> Presented -> Dismissed`, entirely
/// on the host's UI thread. The readiness gate, the cooperative layout
/// retry, back-press policy, and callback dispatch all live here; geometry
/// and compositing are delegated to `limelight_hollow` and
/// `limelight_overlay`.
///
/// ```
/// use kurbo::Rect;
/// use limelight_hollow::{TargetId, TargetSpace};
/// use limelight_overlay::OverlayPlan;
/// use limelight_session::{
///     Guide, GuideBuilder, LayoutScheduler, PresentParams, PresentationHandle, Presenter,
///     SessionId, SessionState,
/// };
///
/// struct Screen;
///
/// impl TargetSpace for Screen {
///     fn bounds(&self, _target: TargetId) -> Option<Rect> {
///         Some(Rect::new(10.0, 10.0, 110.0, 50.0))
///     }
/// }
///
/// #[derive(Default)]
/// struct Dialog {
///     presented: u64,
/// }
///
/// impl Presenter for Dialog {
///     fn present(&mut self, _plan: &OverlayPlan, _params: &PresentParams) -> PresentationHandle {
///         self.presented += 1;
///         PresentationHandle(self.presented)
///     }
///     fn dismiss(&mut self, _handle: PresentationHandle) {}
/// }
///
/// #[derive(Default)]
/// struct NextFrame(Vec<SessionId>);
///
/// impl LayoutScheduler for NextFrame {
///     fn schedule_layout_check(&mut self, session: SessionId) {
///         self.0.push(session);
///     }
/// }
///
/// let config = GuideBuilder::new().with_target(TargetId(1)).build();
/// let (mut dialog, mut frames) = (Dialog::default(), NextFrame::default());
///
/// let mut guide = Guide::new();
/// guide
///     .show(config, &Screen, &mut dialog, &mut frames)
///     .unwrap();
/// // The target was already laid out, so the guide is up immediately.
/// assert_eq!(guide.state(), SessionState::Presented);
///
/// guide.dismiss(&mut dialog);
/// assert_eq!(guide.state(), SessionState::Dismissed);
/// ```
#[derive(Debug)]
pub struct Guide {
    state: SessionState,
    session: SessionId,
    config: Option<GuideConfig>,
    handle: Option<PresentationHandle>,
}

impl Default for Guide {
    fn default() -> Self {
        Self::new()
    }
}

impl Guide {
    /// A controller with no session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            session: SessionId(0),
            config: None,
            handle: None,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identity of the current session. Meaningful once [`Guide::show`] has
    /// been called at least once.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Handle of the live presentation, when in
    /// [`SessionState::Presented`].
    pub fn presentation(&self) -> Option<PresentationHandle> {
        self.handle
    }

    /// Start a new session from `config`.
    ///
    /// Fails synchronously with [`ShowError::NoTargets`] when the
    /// configuration has no registered targets; nothing changes in that
    /// case. Otherwise the session enters `AwaitingLayout` and composition
    /// is attempted immediately: if the first-registered target already has
    /// a nonzero measured width the overlay is composed and presented before
    /// this call returns, else a re-check is scheduled for the host's next
    /// layout pass.
    ///
    /// A still-presented previous session is dismissed first (with its
    /// `on_dismiss` fired), so at most one presentation is ever live.
    pub fn show(
        &mut self,
        config: GuideConfig,
        space: &dyn TargetSpace,
        presenter: &mut dyn Presenter,
        scheduler: &mut dyn LayoutScheduler,
    ) -> Result<(), ShowError> {
        if config.hollows.is_empty() {
            return Err(ShowError::NoTargets);
        }
        self.dismiss(presenter);

        self.session = self.session.next();
        self.state = SessionState::AwaitingLayout;
        self.config = Some(config);
        self.handle = None;
        self.try_compose(space, presenter, scheduler);
        Ok(())
    }

    /// Host re-entry after a layout pass, as requested through the
    /// [`LayoutScheduler`].
    ///
    /// A no-op unless `session` is the current session *and* the session is
    /// still waiting for layout; a dangling callback from a dismissed or
    /// superseded session can therefore never resurrect it.
    pub fn on_layout(
        &mut self,
        session: SessionId,
        space: &dyn TargetSpace,
        presenter: &mut dyn Presenter,
        scheduler: &mut dyn LayoutScheduler,
    ) {
        if session != self.session || self.state != SessionState::AwaitingLayout {
            return;
        }
        self.try_compose(space, presenter, scheduler);
    }

    /// Route a user back press.
    ///
    /// While presented, a cancelable guide dismisses (firing `on_dismiss`)
    /// and a non-cancelable one swallows the event; in any other state the
    /// event is not consumed.
    pub fn on_back_pressed(&mut self, presenter: &mut dyn Presenter) -> BackPress {
        if self.state != SessionState::Presented {
            return BackPress::Ignored;
        }
        let cancelable = self.config.as_ref().is_none_or(|c| c.cancel_on_back);
        if cancelable {
            self.dismiss(presenter);
            BackPress::Dismissed
        } else {
            BackPress::Swallowed
        }
    }

    /// Explicitly end the current session.
    ///
    /// From `Presented` this tears down the presentation and fires
    /// `on_dismiss` exactly once. A session still waiting for layout is
    /// cancelled silently: the guide never appeared, so neither callback
    /// fires (its pending layout re-check becomes a stale no-op). Calling
    /// this with no live session does nothing.
    pub fn dismiss(&mut self, presenter: &mut dyn Presenter) {
        match self.state {
            SessionState::AwaitingLayout | SessionState::Composed => {
                self.state = SessionState::Dismissed;
            }
            SessionState::Presented => {
                self.state = SessionState::Dismissed;
                if let Some(handle) = self.handle.take() {
                    presenter.dismiss(handle);
                    if let Some(events) = self.config.as_mut().and_then(|c| c.events.as_mut()) {
                        events.on_dismiss(handle);
                    }
                }
            }
            SessionState::Idle | SessionState::Dismissed => {}
        }
    }

    /// Attempt to compose and present the current session.
    ///
    /// Stays in `AwaitingLayout` (scheduling a re-check) until the
    /// first-registered target reports a nonzero width. Hollows that fail to
    /// resolve once the gate has passed are dropped rather than stalling the
    /// session.
    fn try_compose(
        &mut self,
        space: &dyn TargetSpace,
        presenter: &mut dyn Presenter,
        scheduler: &mut dyn LayoutScheduler,
    ) {
        let Some(mut config) = self.config.take() else {
            return;
        };

        // Readiness gate: the unreliable moment between "target added to the
        // tree" and "target measured" shows up as a zero width here.
        let first = config.hollows[0].target;
        let ready = space.bounds(first).is_some_and(|r| r.width() > 0.0);
        if !ready {
            scheduler.schedule_layout_check(self.session);
            self.config = Some(config);
            return;
        }

        let mut resolved = Vec::with_capacity(config.hollows.len());
        for hollow in &config.hollows {
            match hollow.resolve(space) {
                Ok(r) => resolved.push(r),
                Err(_err) => {
                    #[cfg(feature = "log")]
                    log::warn!("dropping hollow for {:?}: {_err}", hollow.target);
                }
            }
        }

        self.state = SessionState::Composed;
        let plan = composite(config.curtain_color, &resolved, config.top_view, CLIP_TOLERANCE);
        let params = PresentParams {
            cancelable: config.cancel_on_back,
            animation: config.animation,
        };
        let handle = presenter.present(&plan, &params);
        self.handle = Some(handle);
        self.state = SessionState::Presented;
        if let Some(events) = config.events.as_mut() {
            events.on_show(handle);
        }
        self.config = Some(config);
    }
}
