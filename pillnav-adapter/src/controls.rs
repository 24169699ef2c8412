/// One pill in the category bar.
///
/// The controller owns `selected` and `tab_reachable`; hosts only read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectableControl {
    key: String,
    index: usize,
    selected: bool,
    tab_reachable: bool,
}

impl SelectableControl {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_tab_reachable(&self) -> bool {
        self.tab_reachable
    }

    /// Value for the `aria-selected` attribute.
    pub fn aria_selected(&self) -> &'static str {
        if self.selected { "true" } else { "false" }
    }

    /// Value for the `tabindex` attribute.
    pub fn tab_index(&self) -> i32 {
        if self.tab_reachable { 0 } else { -1 }
    }
}

/// Ordered, exclusive-choice set of controls with a roving tab stop.
///
/// Selection and keyboard reachability are tracked separately: arrow keys move the tab stop, and
/// only a committed selection moves both. Exactly one control is selected and exactly one is tab
/// reachable whenever the set is non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlSet {
    controls: Vec<SelectableControl>,
    selected: Option<usize>,
    focused: Option<usize>,
}

impl ControlSet {
    /// Builds the set with the first control selected and reachable.
    ///
    /// Keys must be unique; later duplicates are dropped.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controls: Vec<SelectableControl> = Vec::new();
        for key in keys {
            let key = key.into();
            if controls.iter().any(|c| c.key == key) {
                vwarn!(key = key.as_str(), "ControlSet::new: duplicate key dropped");
                continue;
            }
            controls.push(SelectableControl {
                index: controls.len(),
                key,
                selected: false,
                tab_reachable: false,
            });
        }

        let mut set = Self {
            controls,
            selected: None,
            focused: None,
        };
        set.select(0);
        set
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectableControl> {
        self.controls.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableControl> {
        self.controls.iter()
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.key == key)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.and_then(|i| self.get(i)).map(|c| c.key())
    }

    /// Index of the control that currently holds the tab stop.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Selects `index` and moves the tab stop to it. Every other control is deselected.
    ///
    /// Returns `false` for an out-of-range index, leaving the set untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.controls.len() {
            return false;
        }
        for c in &mut self.controls {
            let on = c.index == index;
            c.selected = on;
            c.tab_reachable = on;
        }
        self.selected = Some(index);
        self.focused = Some(index);
        true
    }

    /// Moves only the tab stop. Selection is unchanged.
    pub fn focus(&mut self, index: usize) -> bool {
        if index >= self.controls.len() {
            return false;
        }
        for c in &mut self.controls {
            c.tab_reachable = c.index == index;
        }
        self.focused = Some(index);
        true
    }
}
