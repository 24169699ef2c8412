use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateState {
    #[default]
    Idle,
    Animating,
}

/// Serializes selections against in-flight scroll animations.
///
/// Clones share the same state. Only [`SelectionGate::try_acquire`] moves the gate to
/// `Animating`, and only the returned [`GateRelease`] moves it back to `Idle`. The release token
/// frees the gate when consumed or dropped, so a lost completion can never leave it locked.
#[derive(Clone, Default)]
pub struct SelectionGate {
    state: Rc<Cell<GateState>>,
}

impl SelectionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state.get() == GateState::Animating
    }

    /// Locks the gate. Returns `None` when it is already locked.
    pub fn try_acquire(&self) -> Option<GateRelease> {
        if self.is_busy() {
            vtrace!("SelectionGate::try_acquire rejected");
            return None;
        }
        self.state.set(GateState::Animating);
        Some(GateRelease {
            state: Rc::clone(&self.state),
        })
    }
}

impl fmt::Debug for SelectionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SelectionGate").field(&self.state.get()).finish()
    }
}

/// One-shot token that returns its gate to `Idle`.
pub struct GateRelease {
    state: Rc<Cell<GateState>>,
}

impl GateRelease {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for GateRelease {
    fn drop(&mut self) {
        self.state.set(GateState::Idle);
    }
}

impl fmt::Debug for GateRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GateRelease(..)")
    }
}
