use crate::{Anchor, Element, Page, PageLayout};

/// Category key meaning "the whole menu". Always resolves to the root container.
pub const SHOW_ALL: &str = "all";

/// Finds the element a category should scroll to.
///
/// Lookup order: the category's section header, then its first content card, then the root
/// container. The result is never absent, even when the page has none of those elements; in that
/// case measuring the anchor yields `None` and callers stay put.
pub fn resolve_anchor<L: PageLayout + ?Sized>(layout: &L, key: &str) -> Anchor {
    if key == SHOW_ALL || key.is_empty() {
        return Anchor::Root;
    }
    if layout.bounding_rect(Element::SectionHeader(key)).is_some() {
        return Anchor::SectionHeader(key.to_owned());
    }
    if layout.bounding_rect(Element::Card(key)).is_some() {
        vdebug!(key, "resolve_anchor: no section header, using card");
        return Anchor::Card(key.to_owned());
    }
    vdebug!(key, "resolve_anchor: no header or card, using root");
    Anchor::Root
}

/// Height the scroll must clear at the top of the viewport.
///
/// This is the lower of the two fixed bars' bottom edges, not their sum: when the pill bar sits
/// under the nav bar its own bottom edge already accounts for both. Missing or degenerate bars
/// count as zero. Chrome changes size while scrolling, so call this on every frame.
pub fn compute_offset<L: PageLayout + ?Sized>(layout: &L) -> f64 {
    let bottom = |element| {
        layout
            .bounding_rect(element)
            .map(|r| r.bottom)
            .filter(|b| b.is_finite())
            .unwrap_or(0.0)
    };
    bottom(Element::NavBar)
        .max(bottom(Element::PillBar))
        .max(0.0)
}

/// Document-space scroll offset that puts `anchor` just below the fixed chrome.
///
/// Returns `None` when the anchor cannot be measured.
pub fn compute_target_y<P: Page + ?Sized>(page: &P, anchor: &Anchor) -> Option<f64> {
    let rect = page.bounding_rect(anchor.element())?;
    let y = rect.top + page.scroll_y() - compute_offset(page);
    if !y.is_finite() {
        vwarn!(?anchor, "compute_target_y: non-finite target");
        return None;
    }
    Some(y.max(0.0))
}

/// A resolved anchor plus the per-frame target computation for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetResolver {
    anchor: Anchor,
}

impl TargetResolver {
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor }
    }

    pub fn resolve<L: PageLayout + ?Sized>(layout: &L, key: &str) -> Self {
        Self::new(resolve_anchor(layout, key))
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn target_y<P: Page + ?Sized>(&self, page: &P) -> Option<f64> {
        compute_target_y(page, &self.anchor)
    }

    /// Converts into a target function for [`crate::ScrollEngine::animate_to`].
    ///
    /// If the anchor stops being measurable mid-flight, the function keeps returning the last
    /// target it saw (or the current scroll position if it never saw one).
    pub fn into_target_fn<P: Page + ?Sized + 'static>(
        self,
    ) -> impl FnMut(&P) -> f64 + 'static {
        let mut last: Option<f64> = None;
        move |page: &P| {
            let y = self
                .target_y(page)
                .or(last)
                .unwrap_or_else(|| page.scroll_y());
            last = Some(y);
            y
        }
    }
}
