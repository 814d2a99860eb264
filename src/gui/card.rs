use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, text::Shaping, Button, Column, Container, Row, Text},
    Color, Element, Length,
};

use crate::{
    config::CardConfig,
    dictionary::entry::Entry,
    viewer::{Side, Viewer},
};

use super::Tab;

const BACK_COLOR: Color = Color {
    r: 0.83,
    g: 0.83,
    b: 0.83,
    a: 1.0,
};

pub struct CardTab {
    viewer: Viewer,
    font_size: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Flip,
    Next,
    Previous,
    Show(usize),
}

impl CardTab {
    pub fn new(cards: Vec<Entry>, config: &CardConfig) -> CardTab {
        CardTab {
            viewer: Viewer::new(cards, config),
            font_size: config.font_size,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Flip => self.viewer.flip(),
            Message::Next => {
                self.viewer.next();
            }
            Message::Previous => {
                self.viewer.previous();
            }
            Message::Show(index) => self.viewer.show(index),
        }
    }

    pub fn resize(&mut self, width: f32) {
        self.viewer.resize(width);
    }
}

impl Tab for CardTab {
    type Message = super::Message;

    fn title(&self) -> String {
        if self.viewer.is_empty() {
            String::from("Cards")
        } else {
            format!("Cards ({}/{})", self.viewer.index() + 1, self.viewer.len())
        }
    }

    fn content(&self) -> Element<'_, Self::Message> {
        let background = match self.viewer.side() {
            Side::Front => Color::WHITE,
            Side::Back => BACK_COLOR,
        };

        let card = Container::new(
            Text::new(self.viewer.visible_text())
                .size(self.font_size)
                .shaping(Shaping::Advanced)
                .width(Length::Fixed(self.viewer.wrap_width())),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            text_color: Some(Color::BLACK),
            ..container::Style::default()
        });

        // Nothing to navigate without cards.
        let enabled = !self.viewer.is_empty();
        let button = |label, message: Message| nav_button(label, enabled.then_some(message));

        let button_row = Row::new()
            .padding(10)
            .spacing(10)
            .push(button("Flip Card", Message::Flip))
            .push(button("Previous", Message::Previous))
            .push(button("Next", Message::Next));

        let content: Element<'_, Message> = Column::new()
            .height(Length::Fill)
            .push(card)
            .push(button_row)
            .into();

        content.map(super::Message::Card)
    }
}

fn nav_button(label: &'static str, message: Option<Message>) -> Button<'static, Message> {
    Button::new(Text::new(label))
        .width(Length::Fill)
        .on_press_maybe(message)
}
