use std::path::PathBuf;

use iced::{
    Element, Length, Task,
    widget::{column, container},
};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, identification::IdentificationScreen},
    widgets::navbar,
};

pub struct ParticipantsApp {
    state: AppState,
    screen: ScreenData,
}

impl ParticipantsApp {
    pub fn new(data_file: PathBuf) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::open(data_file),
                screen: ScreenData::Identification(IdentificationScreen),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!(
            "Gestion des Participants ({} enregistrements)",
            self.state.session.snapshot().len()
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        });
        container(column![navbar(self.screen.page(), Message::Navigate), page])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Open the main window on the records stored in `data_file`.
pub fn run(data_file: PathBuf) -> iced::Result {
    iced::application(
        move || ParticipantsApp::new(data_file.clone()),
        ParticipantsApp::update,
        ParticipantsApp::view,
    )
    .title(ParticipantsApp::title)
    .run()
}
