/// Keys the pill bar reacts to. Everything else is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Home,
    End,
    Enter,
    Space,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            _ => return None,
        })
    }
}

/// What a handled key asks for. Any `Some` result means the host should prevent the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the tab stop (and DOM focus) to this index. Selection does not change.
    Focus(usize),
    /// Commit the control at this index, as a click would.
    Activate(usize),
}

/// Roving-tabindex key mapping for a horizontal or vertical group of `len` controls.
///
/// Arrows wrap at both ends; Home and End jump to the first and last control.
pub fn key_navigation(key: NavKey, current: usize, len: usize) -> Option<KeyAction> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    let action = match key {
        NavKey::ArrowRight | NavKey::ArrowDown => KeyAction::Focus((current + 1) % len),
        NavKey::ArrowLeft | NavKey::ArrowUp => {
            KeyAction::Focus(if current == 0 { len - 1 } else { current - 1 })
        }
        NavKey::Home => KeyAction::Focus(0),
        NavKey::End => KeyAction::Focus(len - 1),
        NavKey::Enter | NavKey::Space => KeyAction::Activate(current),
    };
    Some(action)
}
