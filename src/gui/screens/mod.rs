pub mod charts;
pub mod identification;

use iced::{Element, Task};

use crate::gui::{AppState, Message, widgets::Page};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Identification(identification::IdentificationScreen),
    Charts(charts::ChartsScreen),
}

impl ScreenData {
    pub fn page(&self) -> Page {
        match self {
            ScreenData::Identification(_) => Page::Identification,
            ScreenData::Charts(_) => Page::Charts,
        }
    }
}

impl From<Page> for ScreenData {
    fn from(page: Page) -> Self {
        match page {
            Page::Identification => {
                ScreenData::Identification(identification::IdentificationScreen)
            }
            Page::Charts => ScreenData::Charts(charts::ChartsScreen),
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Identification(screen) => {
                screen.view(state).map(Message::Identification)
            }
            ScreenData::Charts(screen) => screen.view(state).map(Message::Charts),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(page)) => {
                if x.page() != page {
                    *x = ScreenData::from(page);
                }
                Task::none()
            }
            (ScreenData::Identification(page), Message::Identification(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Identification)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            (ScreenData::Charts(page), Message::Charts(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Charts)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            // message for a screen that is no longer shown
            _ => Task::none(),
        }
    }
}
