use pillnav::{
    Anchor, AnimationHandle, Debouncer, Page, ScrollEngine, SectionHighlight, SelectionGate,
    TargetResolver,
};

use crate::{
    Announcement, Announcer, ControlSet, ControllerOptions, KeyAction, NavKey, Politeness,
    SelectionChange, announcement_for, key_navigation,
};

/// A restorable picture of the pill bar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionSnapshot {
    pub selected_key: String,
    pub focused_index: usize,
}

/// Roving-selection controller for a category pill bar.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle_activation` on click, `handle_key` on keydown
/// - `tick(page, now_ms)` every animation frame
///
/// and render from `controls()`, `highlighted_section()` and `announcements()`.
///
/// A selection is accepted only while the gate is idle. Once accepted, the gate stays locked until
/// the scroll it started completes, jumps, or is cancelled; activations in between are dropped
/// without any state change.
pub struct Controller<P: ?Sized> {
    controls: ControlSet,
    gate: SelectionGate,
    engine: ScrollEngine<P>,
    activation: Debouncer<usize>,
    highlight: SectionHighlight,
    announcer: Announcer,
    animation: Option<AnimationHandle>,
    options: ControllerOptions,
}

impl<P: Page + ?Sized + 'static> Controller<P> {
    pub fn new<I, S>(keys: I, options: ControllerOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_controls(ControlSet::new(keys), options)
    }

    pub fn from_controls(controls: ControlSet, options: ControllerOptions) -> Self {
        Self {
            controls,
            gate: SelectionGate::new(),
            engine: ScrollEngine::new(options.scroll),
            activation: Debouncer::new(options.debounce_ms),
            highlight: SectionHighlight::new(options.highlight_ms),
            announcer: Announcer::new(options.announcement_ttl_ms),
            animation: None,
            options,
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// The shared busy gate. Collaborators may clone it to observe the animation-busy state.
    pub fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    /// An activation is waiting out the debounce window.
    pub fn has_pending_activation(&self) -> bool {
        self.activation.is_pending()
    }

    /// No selection is pending, running, or scrolling.
    pub fn is_idle(&self) -> bool {
        !self.is_busy() && !self.has_pending_activation()
    }

    pub fn engine(&self) -> &ScrollEngine<P> {
        &self.engine
    }

    /// Handle of the most recent scroll started by a selection.
    pub fn last_animation(&self) -> Option<&AnimationHandle> {
        self.animation.as_ref()
    }

    pub fn highlighted_section(&self) -> Option<&str> {
        self.highlight.current()
    }

    pub fn announcements(&self) -> &[Announcement] {
        self.announcer.live()
    }

    pub fn announcements_emitted(&self) -> u64 {
        self.announcer.emitted()
    }

    /// Click (or commit key) on the control at `index`.
    ///
    /// Ignored while busy or for an unknown index. Otherwise the request is debounced: the
    /// selection happens on the first `tick` after `debounce_ms` of quiet, for the last index
    /// requested. Returns whether the request was queued.
    pub fn handle_activation(&mut self, index: usize, now_ms: u64) -> bool {
        if self.gate.is_busy() {
            vtrace!(index, "Controller::handle_activation: busy");
            return false;
        }
        if index >= self.controls.len() {
            vwarn!(
                index,
                len = self.controls.len(),
                "Controller::handle_activation: no such control"
            );
            return false;
        }
        self.activation.trigger(index, now_ms);
        true
    }

    /// Keydown on the control at `current_index`.
    ///
    /// Arrow keys, Home and End only move the tab stop. Enter and Space go through
    /// [`Controller::handle_activation`]. Returns the action taken, if the key was handled; the
    /// host should then prevent the default and, for [`KeyAction::Focus`], move DOM focus.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        current_index: usize,
        now_ms: u64,
    ) -> Option<KeyAction> {
        let action = key_navigation(key, current_index, self.controls.len())?;
        match action {
            KeyAction::Focus(index) => {
                self.controls.focus(index);
            }
            KeyAction::Activate(index) => {
                self.handle_activation(index, now_ms);
            }
        }
        Some(action)
    }

    /// [`Controller::handle_key`] for a raw `KeyboardEvent.key` string.
    pub fn handle_key_name(
        &mut self,
        key: &str,
        current_index: usize,
        now_ms: u64,
    ) -> Option<KeyAction> {
        let key = NavKey::from_key(key)?;
        self.handle_key(key, current_index, now_ms)
    }

    /// Commits the selection of `index` immediately and starts scrolling to its category.
    ///
    /// Returns `false` (and changes nothing) while busy or for an unknown index.
    pub fn select_control(&mut self, page: &mut P, index: usize, now_ms: u64) -> bool {
        let Some(key) = self.controls.get(index).map(|c| c.key().to_owned()) else {
            vwarn!(index, "Controller::select_control: no such control");
            return false;
        };
        let Some(release) = self.gate.try_acquire() else {
            vtrace!(index, "Controller::select_control: busy");
            return false;
        };

        let previous = self.controls.selected_index();
        self.controls.select(index);
        vdebug!(index, key = key.as_str(), "Controller::select_control");

        self.announcer
            .announce(announcement_for(&key), Politeness::Polite, now_ms);
        if let Some(cb) = &self.options.on_selection_change {
            cb(&SelectionChange {
                index,
                key: key.clone(),
                previous,
            });
        }

        let resolver = TargetResolver::resolve(&*page, &key);
        if let Anchor::SectionHeader(section) = resolver.anchor() {
            self.highlight.apply(section, now_ms);
        }
        if resolver.target_y(&*page).is_none() {
            vwarn!(
                key = key.as_str(),
                "Controller::select_control: anchor not measurable"
            );
            release.release();
            self.animation = None;
            return true;
        }

        let handle = self.engine.animate_to(
            page,
            now_ms,
            None,
            resolver.into_target_fn::<P>(),
            move |_| release.release(),
        );
        self.animation = Some(handle);
        true
    }

    /// Advances debounced activations, the scroll animation and transient effects.
    pub fn tick(&mut self, page: &mut P, now_ms: u64) {
        if let Some(index) = self.activation.poll(now_ms) {
            vtrace!(index, "Controller::tick: debounced activation");
            self.select_control(page, index, now_ms);
        }
        self.engine.tick(page, now_ms);
        self.highlight.expire(now_ms);
        self.announcer.expire(now_ms);
    }

    /// Stops the in-flight scroll, if any. The gate is released by its completion.
    pub fn cancel_scroll(&mut self) -> bool {
        self.engine.cancel()
    }

    pub fn snapshot(&self) -> Option<SelectionSnapshot> {
        Some(SelectionSnapshot {
            selected_key: self.controls.selected_key()?.to_owned(),
            focused_index: self.controls.focused_index()?,
        })
    }

    /// Reapplies a snapshot without scrolling or announcing.
    ///
    /// Only allowed while idle. Returns `false` if busy or if the key is unknown.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(index) = self.controls.index_of(&snapshot.selected_key) else {
            return false;
        };
        self.controls.select(index);
        let focused = snapshot.focused_index.min(self.controls.len().saturating_sub(1));
        self.controls.focus(focused);
        true
    }
}

impl<P: ?Sized> std::fmt::Debug for Controller<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("controls", &self.controls)
            .field("gate", &self.gate)
            .field("engine", &self.engine)
            .field("activation", &self.activation)
            .field("highlight", &self.highlight)
            .field("announcer", &self.announcer)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
