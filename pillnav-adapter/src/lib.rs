//! Roving-selection controller for category pill bars, built on `pillnav`.
//!
//! The `pillnav` crate owns the scrolling math and the busy gate. This crate adds the
//! widget-level behavior on top:
//!
//! - an ordered, exclusive-choice control set with a roving tab stop
//! - keyboard mapping (arrows/Home/End move focus; Enter/Space commit)
//! - debounced activation serialized against the in-flight scroll
//! - status announcements and a transient section highlight
//!
//! This crate is framework-agnostic (no DOM bindings). A headless page model lives in [`sim`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod announce;
mod controller;
mod controls;
mod keys;
mod options;
pub mod sim;


pub use announce::{Announcement, Announcer, Politeness, announcement_for, category_display_name};
pub use controller::{Controller, SelectionSnapshot};
pub use controls::{ControlSet, SelectableControl};
pub use keys::{KeyAction, NavKey, key_navigation};
pub use options::{ControllerOptions, OnSelectionChange, SelectionChange};
