/// Transient "highlighted" state for the section header a selection scrolled to.
///
/// At most one section is highlighted at a time; each highlight expires on its own after
/// `duration_ms`. The host renders whatever [`SectionHighlight::current`] reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHighlight {
    duration_ms: u64,
    active: Option<(String, u64)>,
}

impl SectionHighlight {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            active: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn current(&self) -> Option<&str> {
        self.active.as_ref().map(|(key, _)| key.as_str())
    }

    /// Highlights `key`, clearing any previous highlight first.
    ///
    /// Returns the key whose highlight was replaced, if any.
    pub fn apply(&mut self, key: &str, now_ms: u64) -> Option<String> {
        let prev = self.active.take().map(|(k, _)| k);
        let until = now_ms.saturating_add(self.duration_ms);
        self.active = Some((key.to_owned(), until));
        vtrace!(key, until, "SectionHighlight::apply");
        prev
    }

    /// Drops the highlight once it has expired. Returns the key that was cleared.
    pub fn expire(&mut self, now_ms: u64) -> Option<String> {
        match &self.active {
            Some((_, until)) if now_ms >= *until => self.active.take().map(|(k, _)| k),
            _ => None,
        }
    }

    pub fn clear(&mut self) -> Option<String> {
        self.active.take().map(|(k, _)| k)
    }
}
