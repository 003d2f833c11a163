use crate::gui::{
    screens::{ScreenMessage, charts::ChartsScreen, identification::IdentificationScreen},
    widgets::Page,
};

#[derive(Debug, Clone)]
pub enum Message {
    Identification(ScreenMessage<IdentificationScreen>),
    Charts(ScreenMessage<ChartsScreen>),
    Navigate(Page),
}
