use crate::Easing;

/// Tunables for [`crate::ScrollEngine`].
///
/// The defaults reproduce the behavior of the menu page this engine was built for. None of them
/// are invariants; hosts may change any of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Displacements below this many pixels jump instead of animating.
    pub small_distance_px: f64,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Linear duration slope, in milliseconds per pixel of displacement.
    pub duration_per_px: f64,
    /// Fraction of the remaining gap the smoothed target closes on every frame.
    pub smoothing: f64,
    /// Writes that move the scroll position by at most this much are skipped.
    pub min_write_delta_px: f64,
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            small_distance_px: 120.0,
            min_duration_ms: 180,
            max_duration_ms: 480,
            duration_per_px: 0.24,
            smoothing: 0.35,
            min_write_delta_px: 0.5,
            easing: Easing::EaseOutCubic,
        }
    }
}

impl ScrollOptions {
    /// Animation duration for a displacement of `distance` pixels.
    ///
    /// Linear in distance, clamped to `[min_duration_ms, max_duration_ms]`.
    pub fn duration_for(&self, distance: f64) -> u64 {
        let lo = self.min_duration_ms;
        let hi = self.max_duration_ms.max(lo);
        let raw = (distance.abs() * self.duration_per_px).max(0.0);
        if !raw.is_finite() {
            return hi;
        }
        (raw.round() as u64).clamp(lo, hi)
    }

    /// The smoothing factor actually used by sessions, kept inside `(0, 1]`.
    pub fn effective_smoothing(&self) -> f64 {
        if self.smoothing.is_finite() && self.smoothing > 0.0 {
            self.smoothing.min(1.0)
        } else {
            1.0
        }
    }

    pub fn with_small_distance_px(mut self, px: f64) -> Self {
        self.small_distance_px = px;
        self
    }

    pub fn with_duration_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_duration_ms = min_ms;
        self.max_duration_ms = max_ms;
        self
    }

    pub fn with_duration_per_px(mut self, ms_per_px: f64) -> Self {
        self.duration_per_px = ms_per_px;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_min_write_delta_px(mut self, px: f64) -> Self {
        self.min_write_delta_px = px;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
