use crate::config::CardConfig;
use crate::dictionary::entry::Entry;

pub const NO_CARDS: &str = "No cards to display";
pub const NO_PHRASES: &str = "No phrases available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

/// Flip card state over the matched entries.
pub struct Viewer {
    cards: Vec<Entry>,
    index: usize,
    side: Side,
    wrap_width: f32,
    wrap_padding: f32,
    min_wrap: f32,
}

impl Viewer {
    pub fn new(cards: Vec<Entry>, config: &CardConfig) -> Self {
        let mut viewer = Self {
            cards,
            index: 0,
            side: Side::Front,
            wrap_width: config.initial_wrap,
            wrap_padding: config.wrap_padding,
            min_wrap: config.min_wrap,
        };
        viewer.show(0);
        viewer
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn wrap_width(&self) -> f32 {
        self.wrap_width
    }

    pub fn current(&self) -> Option<&Entry> {
        self.cards.get(self.index)
    }

    pub fn show(&mut self, index: usize) {
        if index >= self.cards.len() {
            if !self.cards.is_empty() {
                tracing::warn!("card {index} out of range ({} cards)", self.cards.len());
            }
            return;
        }

        self.index = index;
        self.side = Side::Front;
        tracing::debug!("showing card {} of {}", index + 1, self.cards.len());
    }

    pub fn flip(&mut self) {
        if self.cards.is_empty() {
            return;
        }

        self.side = match self.side {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        };
    }

    /// Returns false without moving when there are no cards.
    pub fn next(&mut self) -> bool {
        let len = self.cards.len();
        if len == 0 {
            return false;
        }

        self.show((self.index + 1) % len);
        true
    }

    /// Returns false without moving when there are no cards.
    pub fn previous(&mut self) -> bool {
        let len = self.cards.len();
        if len == 0 {
            return false;
        }

        self.show((self.index + len - 1) % len);
        true
    }

    pub fn resize(&mut self, width: f32) {
        self.wrap_width = (width - self.wrap_padding).max(self.min_wrap);
    }

    pub fn front_text(&self) -> Option<String> {
        self.current().map(format_front)
    }

    pub fn back_text(&self) -> Option<String> {
        self.current().map(format_back)
    }

    /// Text on the side currently facing up.
    pub fn visible_text(&self) -> String {
        let text = match self.side {
            Side::Front => self.front_text(),
            Side::Back => self.back_text(),
        };
        text.unwrap_or_else(|| NO_CARDS.to_owned())
    }
}

pub fn format_front(entry: &Entry) -> String {
    format!("Word: {}", entry.word)
}

pub fn format_back(entry: &Entry) -> String {
    let translations = entry
        .translations
        .iter()
        .map(|t| format!("- {} ({})", t.translation, t.kind))
        .collect::<Vec<_>>()
        .join("\n");

    let phrases = if entry.phrases.is_empty() {
        NO_PHRASES.to_owned()
    } else {
        entry
            .phrases
            .iter()
            .map(|p| format!("- {}: {}", p.phrase, p.translation))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("Translations:\n{translations}\nPhrases:\n{phrases}")
}
