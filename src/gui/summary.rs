use std::collections::HashSet;

use iced::{
    widget::{button, Button, Checkbox, Column, Scrollable, Text},
    Alignment, Element, Length,
};

use crate::dictionary::Matches;

use super::Tab;

pub struct SummaryTab {
    words: Vec<String>,
    tokens: usize,
    unmatched: usize,
    dictionary_size: usize,
    unique_only: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Jump(usize),
    UniqueOnly(bool),
}

pub enum Action {
    None,
    Show(usize),
}

impl SummaryTab {
    pub fn new(matches: &Matches, dictionary_size: usize) -> SummaryTab {
        SummaryTab {
            words: matches.cards.iter().map(|card| card.word.clone()).collect(),
            tokens: matches.tokens,
            unmatched: matches.unmatched(),
            dictionary_size,
            unique_only: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Jump(index) => Action::Show(index),
            Message::UniqueOnly(unique_only) => {
                self.unique_only = unique_only;
                Action::None
            }
        }
    }

    /// Card index and word of every listed row. With `unique_only` each word
    /// points at its first card.
    fn rows(&self) -> Vec<(usize, &str)> {
        let mut seen = HashSet::new();
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| !self.unique_only || seen.insert(word.as_str()))
            .map(|(index, word)| (index, word.as_str()))
            .collect()
    }
}

impl Tab for SummaryTab {
    type Message = super::Message;

    fn title(&self) -> String {
        String::from("Summary")
    }

    fn content(&self) -> Element<'_, Self::Message> {
        let stats = Column::new()
            .spacing(4)
            .push(Text::new(format!("Processed {} cards.", self.words.len())))
            .push(Text::new(format!("Tokens scanned: {}", self.tokens)))
            .push(Text::new(format!("Unmatched tokens: {}", self.unmatched)))
            .push(Text::new(format!("Dictionary entries: {}", self.dictionary_size)));

        let list = self
            .rows()
            .into_iter()
            .fold(Column::new().spacing(2), |column, (index, word)| {
                column.push(
                    Button::new(Text::new(format!("{}. {word}", index + 1)))
                        .style(button::text)
                        .on_press(Message::Jump(index)),
                )
            });

        let content: Element<'_, Message> = Column::new()
            .align_x(Alignment::Start)
            .spacing(16)
            .push(stats)
            .push(Checkbox::new("Unique words only", self.unique_only).on_toggle(Message::UniqueOnly))
            .push(Scrollable::new(list).height(Length::Fill).width(Length::Fill))
            .into();

        content.map(super::Message::Summary)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dictionary::entry::Entry;

    fn tab() -> SummaryTab {
        let matches = Matches {
            cards: ["run", "fast", "run"].into_iter().map(Entry::new).collect(),
            tokens: 5,
        };
        SummaryTab::new(&matches, 10)
    }

    #[test]
    fn lists_every_card() {
        assert_eq!(tab().rows(), vec![(0, "run"), (1, "fast"), (2, "run")]);
    }

    #[test]
    fn unique_rows_point_at_first_card() {
        let mut tab = tab();
        assert!(matches!(tab.update(Message::UniqueOnly(true)), Action::None));

        assert_eq!(tab.rows(), vec![(0, "run"), (1, "fast")]);
    }

    #[test]
    fn jump_shows_card() {
        let mut tab = tab();
        assert!(matches!(tab.update(Message::Jump(2)), Action::Show(2)));
    }
}
