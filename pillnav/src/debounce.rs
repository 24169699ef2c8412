/// Trailing-edge debouncer driven by host timestamps.
///
/// Each [`Debouncer::trigger`] replaces the pending value and pushes the deadline to
/// `now + window_ms`. [`Debouncer::poll`] hands the last value out once the deadline passes.
/// Nothing is queued: only the most recent trigger survives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire, if there is one.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn trigger(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.window_ms)));
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, at)) if now_ms >= at => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }
}

/// A [`Debouncer`] bundled with the action it guards.
pub struct Debounced<T, F> {
    inner: Debouncer<T>,
    action: F,
}

/// Wraps `action` so that bursts of triggers collapse into one trailing call.
pub fn debounce<T, F: FnMut(T)>(action: F, window_ms: u64) -> Debounced<T, F> {
    Debounced {
        inner: Debouncer::new(window_ms),
        action,
    }
}

impl<T, F: FnMut(T)> Debounced<T, F> {
    pub fn trigger(&mut self, value: T, now_ms: u64) {
        self.inner.trigger(value, now_ms);
    }

    /// Runs the action if the quiet period is over. Returns `true` when it ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.inner.poll(now_ms) {
            Some(value) => {
                (self.action)(value);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.inner.cancel()
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Debounced<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
