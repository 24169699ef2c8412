use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::{AnimationSession, JumpReason, Outcome, ScrollOptions, ScrollSurface, Step};

type TargetFn<S> = Box<dyn FnMut(&S) -> f64>;
type OnComplete = Box<dyn FnOnce(Outcome)>;

/// Pollable view of one animation session's result.
///
/// The engine fills the outcome exactly once, at the same moment it runs the session's
/// completion closure.
#[derive(Clone)]
pub struct AnimationHandle {
    id: u64,
    slot: Rc<Cell<Option<Outcome>>>,
}

impl AnimationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.slot.get()
    }

    pub fn is_finished(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("id", &self.id)
            .field("outcome", &self.slot.get())
            .finish()
    }
}

struct Active<S: ?Sized> {
    id: u64,
    session: AnimationSession,
    target: TargetFn<S>,
    slot: Rc<Cell<Option<Outcome>>>,
    on_complete: OnComplete,
}

impl<S: ?Sized> Active<S> {
    fn finish(self, outcome: Outcome) {
        self.slot.set(Some(outcome));
        (self.on_complete)(outcome);
    }
}

/// Frame-driven eased scrolling toward a target that may move while the animation runs.
///
/// This type holds no UI objects. The host calls [`ScrollEngine::animate_to`] to start a session
/// and [`ScrollEngine::tick`] once per frame with the frame timestamp. The target function is
/// re-evaluated on every frame, so sticky chrome toggling or late image loads mid-scroll are
/// absorbed instead of leaving the page short of the anchor.
///
/// At most one session is active. Starting a new one cancels the previous one first, and its
/// completion runs before anything about the new session is evaluated.
pub struct ScrollEngine<S: ?Sized> {
    options: ScrollOptions,
    active: Option<Active<S>>,
    next_id: u64,
}

impl<S: ?Sized> ScrollEngine<S> {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            active: None,
            next_id: 1,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the options. An in-flight session keeps the timing it started with.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&AnimationSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Stops the active session, if any, and runs its completion with [`Outcome::Cancelled`].
    ///
    /// Returns `true` if a session was cancelled.
    pub fn cancel(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        vdebug!(id = active.id, "ScrollEngine::cancel");
        active.finish(Outcome::Cancelled);
        true
    }

    /// Cancels only if `handle` still refers to the active session.
    pub fn cancel_handle(&mut self, handle: &AnimationHandle) -> bool {
        if self.active_id() != Some(handle.id) {
            return false;
        }
        self.cancel()
    }
}

impl<S: ScrollSurface + ?Sized> ScrollEngine<S> {
    /// Starts scrolling `surface` toward whatever `target` reports.
    ///
    /// Fast paths write the target synchronously and complete before returning:
    /// - reduced motion on the surface ([`JumpReason::ReducedMotion`])
    /// - a displacement under `small_distance_px` ([`JumpReason::ShortDistance`])
    ///
    /// Otherwise nothing is written until the next [`ScrollEngine::tick`]. `duration_ms` of `None`
    /// derives the duration from the initial displacement via [`ScrollOptions::duration_for`].
    pub fn animate_to(
        &mut self,
        surface: &mut S,
        now_ms: u64,
        duration_ms: Option<u64>,
        target: impl FnMut(&S) -> f64 + 'static,
        on_complete: impl FnOnce(Outcome) + 'static,
    ) -> AnimationHandle {
        self.cancel();

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let slot = Rc::new(Cell::new(None));
        let handle = AnimationHandle {
            id,
            slot: Rc::clone(&slot),
        };

        let mut target: TargetFn<S> = Box::new(target);
        let start_y = surface.scroll_y();
        let initial = sanitize(target(&*surface), start_y);
        let distance = (start_y - initial).abs();

        let jump = if surface.prefers_reduced_motion() {
            Some(JumpReason::ReducedMotion)
        } else if distance < self.options.small_distance_px {
            Some(JumpReason::ShortDistance)
        } else {
            None
        };

        if let Some(reason) = jump {
            vdebug!(id, ?reason, target = initial, "ScrollEngine::animate_to: jump");
            surface.scroll_to(initial);
            let outcome = Outcome::Jumped(reason);
            slot.set(Some(outcome));
            on_complete(outcome);
            return handle;
        }

        let duration = duration_ms.unwrap_or_else(|| self.options.duration_for(distance));
        vdebug!(
            id,
            start_y,
            target = initial,
            distance,
            duration,
            "ScrollEngine::animate_to"
        );
        self.active = Some(Active {
            id,
            session: AnimationSession::new(start_y, initial, now_ms, duration, &self.options),
            target,
            slot,
            on_complete: Box::new(on_complete),
        });
        handle
    }

    /// Runs one animation frame.
    ///
    /// Returns the outcome when the active session finished on this frame.
    pub fn tick(&mut self, surface: &mut S, now_ms: u64) -> Option<Outcome> {
        let active = self.active.as_mut()?;
        let desired = (active.target)(&*surface);
        match active.session.step(now_ms, desired) {
            Step::Hold => None,
            Step::Write(y) => {
                vtrace!(id = active.id, y, "ScrollEngine::tick");
                surface.scroll_to(y);
                None
            }
            Step::Finish(y) => {
                surface.scroll_to(y);
                let active = self.active.take()?;
                vdebug!(id = active.id, y, "ScrollEngine::tick: completed");
                active.finish(Outcome::Completed);
                Some(Outcome::Completed)
            }
        }
    }
}

fn sanitize(y: f64, fallback: f64) -> f64 {
    if y.is_finite() { y.max(0.0) } else { fallback.max(0.0) }
}

impl<S: ?Sized> Drop for ScrollEngine<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: ?Sized> fmt::Debug for ScrollEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("options", &self.options)
            .field("active", &self.active_id())
            .field("session", &self.session())
            .finish()
    }
}

impl<S: ?Sized> Default for ScrollEngine<S> {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}
