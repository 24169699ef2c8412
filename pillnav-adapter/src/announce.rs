use pillnav::SHOW_ALL;

/// `aria-live` level for a status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// A transient, screen-reader-only status node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
    /// Value for `aria-atomic`.
    pub atomic: bool,
    pub expires_at_ms: u64,
}

/// Display name for a category key. Unknown keys are returned as-is.
pub fn category_display_name(key: &str) -> &str {
    match key {
        SHOW_ALL => "Todos los platos",
        "entrantes-raciones" => "Entrantes / Raciones",
        "ensaladas" => "Ensaladas",
        "burritos-wraps" => "Burritos y Wraps",
        "sandwich" => "Sándwich",
        "hamburguesas" => "Hamburguesas",
        "bocadillos" => "Bocadillos",
        "platos-combinados" => "Platos Combinados",
        "brasil" => "Platos Brasileños",
        other => other,
    }
}

/// Status text announced when the menu scrolls to `key`.
pub fn announcement_for(key: &str) -> String {
    if key == SHOW_ALL {
        return "Desplazando al inicio del menú".to_owned();
    }
    format!("Desplazando a la categoría {}", category_display_name(key))
}

/// Live-region bookkeeping: announcements appear, then remove themselves after `ttl_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcer {
    ttl_ms: u64,
    live: Vec<Announcement>,
    emitted: u64,
}

impl Announcer {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            live: Vec::new(),
            emitted: 0,
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn announce(&mut self, text: impl Into<String>, politeness: Politeness, now_ms: u64) {
        let text = text.into();
        vdebug!(text = text.as_str(), "Announcer::announce");
        self.live.push(Announcement {
            text,
            politeness,
            atomic: true,
            expires_at_ms: now_ms.saturating_add(self.ttl_ms),
        });
        self.emitted += 1;
    }

    /// Removes expired announcements and returns how many went away.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.live.len();
        self.live.retain(|a| now_ms < a.expires_at_ms);
        before - self.live.len()
    }

    pub fn live(&self) -> &[Announcement] {
        &self.live
    }

    /// Total announcements ever made, including expired ones.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}
