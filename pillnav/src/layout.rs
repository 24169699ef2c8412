use crate::{BoundingRect, Element};

/// The document scroll position, as seen by the engine.
pub trait ScrollSurface {
    /// Current vertical scroll offset in document pixels.
    fn scroll_y(&self) -> f64;

    /// Sets the vertical scroll offset. Hosts may clamp to their scrollable range.
    fn scroll_to(&mut self, y: f64);

    /// Whether the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// Read-only geometry queries against the rendered page.
///
/// `None` means the element does not exist (or is not rendered).
pub trait PageLayout {
    fn bounding_rect(&self, element: Element<'_>) -> Option<BoundingRect>;
}

/// Anything that can be both measured and scrolled.
pub trait Page: ScrollSurface + PageLayout {}

impl<T: ScrollSurface + PageLayout + ?Sized> Page for T {}
