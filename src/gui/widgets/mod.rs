pub mod chart;

use iced::{
    Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

pub use chart::{BarChart, PieChart};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Identification,
    Charts,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Identification, Page::Charts];

    pub fn label(self) -> &'static str {
        match self {
            Page::Identification => "Identification",
            Page::Charts => "Graphiques",
        }
    }

    fn style(self, current: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // darken the active tab
            if self == current {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

/// Title bar with one tab per page.
pub fn navbar<'a, Message>(
    current: Page,
    on_navigate: impl Fn(Page) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let tabs = Page::ALL.into_iter().fold(row![].spacing(5), |tabs, page| {
        tabs.push(
            container(button(text(page.label())).on_press(on_navigate(page)).style(button::text))
                .style(page.style(current))
                .padding(5),
        )
    });
    container(
        row![text("Gestion des Participants").size(24), tabs]
            .spacing(30)
            .align_y(iced::Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}

/// Sidebar on the left, main content filling the rest.
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        row![
            container(sidebar.into())
                .padding(10)
                .height(Length::Fill)
                .width(Length::FillPortion(1)),
            container(main_content.into())
                .padding(10)
                .width(Length::FillPortion(3)),
        ]
        .spacing(10),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Bordered panel with a heading.
pub fn card<'a, Message>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(column![text(title).size(20), content.into()].spacing(10))
        .style(bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}
