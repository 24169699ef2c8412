/// How an animation session ended.
///
/// Every session started by [`crate::ScrollEngine::animate_to`] ends with exactly one outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The frame loop ran to the end and wrote the exact target.
    Completed,
    /// The session was stopped before reaching the end.
    Cancelled,
    /// No frame loop ran; the target was written synchronously.
    Jumped(JumpReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpReason {
    ReducedMotion,
    ShortDistance,
}

/// Vertical extent of an element in viewport coordinates (like `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    pub top: f64,
    pub bottom: f64,
}

impl BoundingRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Page elements the resolver asks the host to measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element<'a> {
    /// The content container every fallback ends at.
    Root,
    /// The header that opens the section for a category. Hosts should measure the header's title
    /// when it has one, and the header itself otherwise.
    SectionHeader(&'a str),
    /// The first content card tagged with a category.
    Card(&'a str),
    /// The fixed top navigation bar.
    NavBar,
    /// The sticky category pill bar.
    PillBar,
}

/// A resolved scroll destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Root,
    SectionHeader(String),
    Card(String),
}

impl Anchor {
    pub fn element(&self) -> Element<'_> {
        match self {
            Self::Root => Element::Root,
            Self::SectionHeader(key) => Element::SectionHeader(key),
            Self::Card(key) => Element::Card(key),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::SectionHeader(key) | Self::Card(key) => Some(key),
        }
    }
}
