//! A headless scroll-to-section engine.
//!
//! For the roving-selection controller that drives it from a category pill bar, see the
//! `pillnav-adapter` crate.
//!
//! This crate holds the parts that need care rather than markup:
//! - eased, frame-driven scrolling toward a target that is re-resolved on every frame
//! - single-session ownership with synchronous cancellation and exactly-once completion
//! - anchor resolution with a header → card → root fallback, clearing fixed chrome
//! - a shared selection gate and a trailing-edge debouncer
//!
//! It is UI-agnostic. The host provides:
//! - element geometry ([`PageLayout`])
//! - the scroll position and the reduced-motion preference ([`ScrollSurface`])
//! - frame timestamps (`now_ms`)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod debounce;
mod easing;
mod engine;
mod gate;
mod highlight;
mod layout;
mod options;
mod resolver;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use debounce::{Debounced, Debouncer, debounce};
pub use easing::Easing;
pub use engine::{AnimationHandle, ScrollEngine};
pub use gate::{GateRelease, GateState, SelectionGate};
pub use highlight::SectionHighlight;
pub use layout::{Page, PageLayout, ScrollSurface};
pub use options::ScrollOptions;
pub use resolver::{SHOW_ALL, TargetResolver, compute_offset, compute_target_y, resolve_anchor};
pub use session::{AnimationSession, Step};
pub use types::{Anchor, BoundingRect, Element, JumpReason, Outcome};
