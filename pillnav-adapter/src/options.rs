use std::fmt;
use std::sync::Arc;

use pillnav::ScrollOptions;

/// Payload of the selection-changed notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub index: usize,
    pub key: String,
    pub previous: Option<usize>,
}

/// Fired once for every accepted selection, before scrolling starts.
///
/// The `Send + Sync` bound only lets options be built and shared across threads. The
/// [`crate::Controller`] itself is single-threaded and is never `Send`.
pub type OnSelectionChange = Arc<dyn Fn(&SelectionChange) + Send + Sync>;

/// Configuration for [`crate::Controller`].
#[derive(Clone)]
pub struct ControllerOptions {
    /// Quiet period that collapses bursts of activations into one.
    pub debounce_ms: u64,
    /// How long a section header stays highlighted after being scrolled to.
    pub highlight_ms: u64,
    /// How long a status announcement stays in the live region.
    pub announcement_ttl_ms: u64,
    pub scroll: ScrollOptions,
    pub on_selection_change: Option<OnSelectionChange>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce_ms: 80,
            highlight_ms: 1200,
            announcement_ttl_ms: 1000,
            scroll: ScrollOptions::default(),
            on_selection_change: None,
        }
    }
}

impl ControllerOptions {
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_highlight_ms(mut self, highlight_ms: u64) -> Self {
        self.highlight_ms = highlight_ms;
        self
    }

    pub fn with_announcement_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.announcement_ttl_ms = ttl_ms;
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollOptions) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_on_selection_change(
        mut self,
        on_selection_change: Option<impl Fn(&SelectionChange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selection_change = on_selection_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl fmt::Debug for ControllerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("debounce_ms", &self.debounce_ms)
            .field("highlight_ms", &self.highlight_ms)
            .field("announcement_ttl_ms", &self.announcement_ttl_ms)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
