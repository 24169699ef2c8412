use crate::{Easing, ScrollOptions};

/// What a single animation frame asks the host to do with the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The computed position moved less than the write threshold; leave the scroll alone.
    Hold,
    /// Write this position and keep animating.
    Write(f64),
    /// Write this exact target; the session is over.
    Finish(f64),
}

/// State of one in-flight eased scroll.
///
/// The session is pure: it never touches a scroll container. [`crate::ScrollEngine`] feeds it the
/// freshly resolved target on every frame and applies the returned [`Step`]. Keeping it separate
/// from the engine makes the convergence behavior testable on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSession {
    pub start_y: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    /// Low-pass filtered target. Follows the resolved target by `smoothing` per frame.
    pub smoothed_target: f64,
    /// Last position written to the host, used for sub-pixel write suppression.
    pub last_written: f64,
    pub easing: Easing,
    pub smoothing: f64,
    pub min_write_delta_px: f64,
}

impl AnimationSession {
    pub fn new(
        start_y: f64,
        initial_target: f64,
        start_ms: u64,
        duration_ms: u64,
        options: &ScrollOptions,
    ) -> Self {
        Self {
            start_y,
            start_ms,
            duration_ms: duration_ms.max(1),
            smoothed_target: initial_target.max(0.0),
            last_written: start_y,
            easing: options.easing,
            smoothing: options.effective_smoothing(),
            min_write_delta_px: options.min_write_delta_px.max(0.0),
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Advances the session to `now_ms` given the currently desired target.
    pub fn step(&mut self, now_ms: u64, desired: f64) -> Step {
        let desired = if desired.is_finite() {
            desired.max(0.0)
        } else {
            self.smoothed_target
        };

        self.smoothed_target += (desired - self.smoothed_target) * self.smoothing;

        if self.is_due(now_ms) {
            self.last_written = desired;
            return Step::Finish(desired);
        }

        let eased = self.easing.sample(self.progress(now_ms));
        let next = self.start_y + (self.smoothed_target - self.start_y) * eased;
        if (next - self.last_written).abs() > self.min_write_delta_px {
            self.last_written = next;
            Step::Write(next)
        } else {
            Step::Hold
        }
    }
}
