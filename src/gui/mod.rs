use card::{CardTab, Message as CardMessage};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container},
    window, Element, Length, Size, Subscription, Task,
};
use iced_aw::{TabLabel, Tabs};
use summary::{Message as SummaryMessage, SummaryTab};

use crate::{config::Config, dictionary::Matches};

mod card;
mod summary;

const TAB_PADDING: u16 = 16;

/// Everything computed before the window opens.
pub struct Session {
    pub matches: Matches,
    pub dictionary_size: usize,
}

pub fn run(session: Session, config: Config) -> iced::Result {
    let size = Size::new(config.window.width, config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .run_with(move || (App::new(session, &config), Task::none()))
}

struct App {
    active_tab: TabId,
    card_tab: CardTab,
    summary_tab: SummaryTab,
}

#[derive(Clone, Debug)]
enum Message {
    TabSelected(TabId),
    Card(CardMessage),
    Summary(SummaryMessage),
    Resized(Size),
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum TabId {
    Cards,
    Summary,
}

impl App {
    fn new(session: Session, config: &Config) -> Self {
        let summary_tab = SummaryTab::new(&session.matches, session.dictionary_size);
        let card_tab = CardTab::new(session.matches.cards, &config.card);

        Self {
            active_tab: TabId::Cards,
            card_tab,
            summary_tab,
        }
    }

    fn title(&self) -> String {
        String::from("Flashcard Viewer")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(selected) => {
                self.active_tab = selected;
            }
            Message::Card(message) => {
                self.card_tab.update(message);
            }
            Message::Summary(message) => match self.summary_tab.update(message) {
                summary::Action::None => {}
                summary::Action::Show(index) => {
                    self.card_tab.update(CardMessage::Show(index));
                    self.active_tab = TabId::Cards;
                }
            },
            Message::Resized(size) => {
                let width = size.width - 2.0 * f32::from(TAB_PADDING);
                tracing::debug!("window resized to {}x{}", size.width, size.height);
                self.card_tab.resize(width);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        Tabs::new(Message::TabSelected)
            .push(TabId::Cards, self.card_tab.tab_label(), self.card_tab.view())
            .push(
                TabId::Summary,
                self.summary_tab.tab_label(),
                self.summary_tab.view(),
            )
            .set_active_tab(&self.active_tab)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::Resized(size))
    }
}

trait Tab {
    type Message;

    fn title(&self) -> String;

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let column = Column::new()
            .spacing(20)
            .push(self.content())
            .align_x(iced::Alignment::Center);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(TAB_PADDING)
            .into()
    }

    fn content(&self) -> Element<'_, Self::Message>;
}
