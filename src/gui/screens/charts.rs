use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Row, canvas, column, text},
};

use crate::{
    core::ChartField,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{BarChart, PieChart, card},
    },
};

const CHART_HEIGHT: f32 = 400.0;

#[derive(Debug, Clone)]
pub struct ChartsScreen;

impl ChartsScreen {
    fn chart<'a>(state: &'a AppState, field: ChartField) -> Element<'a, ScreenMessage<Self>> {
        let counts = state.session.count_by(field);
        let body: Element<'a, ScreenMessage<Self>> = if counts.is_empty() {
            text("Aucune donnée").into()
        } else if field == ChartField::Sex {
            canvas(PieChart { counts })
                .width(Length::Fill)
                .height(Length::Fixed(CHART_HEIGHT))
                .into()
        } else {
            canvas(BarChart { counts })
                .width(Length::Fill)
                .height(Length::Fixed(CHART_HEIGHT))
                .into()
        };
        card(field.title(), body)
    }
}

impl Screen for ChartsScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        // two charts per row
        ChartField::ALL
            .chunks(2)
            .fold(
                column![text("Analyse des visiteurs").size(32)],
                |grid, pair| {
                    grid.push(
                        pair.iter()
                            .fold(Row::new().spacing(10), |line, field| {
                                line.push(Self::chart(state, *field))
                            }),
                    )
                },
            )
            .spacing(10)
            .padding(10)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
