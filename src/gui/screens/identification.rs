use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::{
        FormMode,
        lookup::{EDUCATION_LEVELS, LookupTable, MARITAL_STATUSES, SEX_CHOICES, VISIT_REASONS},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, layout},
    },
    models::{COLUMNS, Record, Sex},
};

/// Participant form in the sidebar, stored rows in the main area.
#[derive(Debug, Clone)]
pub struct IdentificationScreen;

#[derive(Debug, Clone)]
pub enum IdentificationMessage {
    NameChanged(String),
    SexSelected(Sex),
    MaritalStatusSelected(&'static str),
    EducationSelected(&'static str),
    PhoneChanged(String),
    AgeChanged(String),
    CommuneChanged(String),
    ProvinceChanged(String),
    ReasonSelected(&'static str),
    OtherReasonChanged(String),
    Submit,
    Cancel,
    EditRow(usize),
    DeleteRow(usize),
}

type Msg = ScreenMessage<IdentificationScreen>;

fn on(message: IdentificationMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

/// Empty input counts as 0; anything unparsable leaves the value unchanged.
fn parse_number<T: std::str::FromStr + Default>(input: &str) -> Option<T> {
    let input = input.trim();
    if input.is_empty() {
        Some(T::default())
    } else {
        input.parse().ok()
    }
}

fn select<'a>(
    label: &'a str,
    table: &'static LookupTable,
    current: &str,
    on_select: fn(&'static str) -> IdentificationMessage,
) -> Element<'a, Msg> {
    let options: Vec<&'static str> = table.codes().collect();
    let selected = table.codes().find(|code| *code == current);
    column![
        text(label),
        pick_list(options, selected, move |code| on(on_select(code))).width(Length::Fill),
    ]
    .spacing(4)
    .into()
}

fn input<'a>(
    label: &'a str,
    value: &str,
    on_input: fn(String) -> IdentificationMessage,
) -> Element<'a, Msg> {
    column![
        text(label),
        text_input(label, value).on_input(move |s| on(on_input(s))),
    ]
    .spacing(4)
    .into()
}

fn cell<'a>(content: impl ToString) -> Element<'a, Msg> {
    text(content.to_string()).width(Length::FillPortion(1)).into()
}

fn table_row<'a>(index: usize, record: &Record) -> Element<'a, Msg> {
    row![
        cell(&record.name),
        cell(record.sex),
        cell(&record.marital_status),
        cell(&record.education_level),
        cell(record.phone),
        cell(record.age),
        cell(&record.commune),
        cell(&record.province),
        cell(&record.reason),
        row![
            button(text("Supprimer"))
                .style(button::danger)
                .on_press(on(IdentificationMessage::DeleteRow(index))),
            button(text("Modifier")).on_press(on(IdentificationMessage::EditRow(index))),
        ]
        .spacing(4)
        .width(Length::FillPortion(2)),
    ]
    .spacing(6)
    .into()
}

impl IdentificationScreen {
    fn form<'a>(state: &'a AppState) -> Element<'a, Msg> {
        let fields = state.session.fields();
        let mut form = column![
            text("Identification du participant").size(24),
            input("Nom du participant", &fields.name, IdentificationMessage::NameChanged),
            column![
                text("Sexe"),
                pick_list(SEX_CHOICES, Some(fields.sex), |sex| on(
                    IdentificationMessage::SexSelected(sex)
                ))
                .width(Length::Fill),
            ]
            .spacing(4),
            select(
                "État matrimonial",
                &MARITAL_STATUSES,
                &fields.marital_status,
                IdentificationMessage::MaritalStatusSelected,
            ),
            select(
                "Niveau d'instruction",
                &EDUCATION_LEVELS,
                &fields.education_level,
                IdentificationMessage::EducationSelected,
            ),
            input(
                "Numéro de téléphone",
                &fields.phone.to_string(),
                IdentificationMessage::PhoneChanged,
            ),
            input("Âge", &fields.age.to_string(), IdentificationMessage::AgeChanged),
            input("Commune", &fields.commune, IdentificationMessage::CommuneChanged),
            input("Province", &fields.province, IdentificationMessage::ProvinceChanged),
            select(
                "Motif de visite",
                &VISIT_REASONS,
                &fields.reason,
                IdentificationMessage::ReasonSelected,
            ),
        ]
        .spacing(10);

        if fields.wants_other_reason() {
            form = form.push(input(
                "Précisez le motif",
                &fields.other_reason,
                IdentificationMessage::OtherReasonChanged,
            ));
        }

        let submit_label = match state.session.mode() {
            FormMode::Create => "Soumettre",
            FormMode::Edit(_) => "Enregistrer",
        };
        form.push(
            row![
                button(text(submit_label))
                    .style(button::primary)
                    .on_press(on(IdentificationMessage::Submit)),
                button(text("Annuler"))
                    .style(button::secondary)
                    .on_press(on(IdentificationMessage::Cancel)),
            ]
            .spacing(10),
        )
        .push(text(state.session.status_message()))
        .into()
    }

    fn table<'a>(state: &'a AppState) -> Element<'a, Msg> {
        let header = COLUMNS
            .into_iter()
            .fold(row![].spacing(6), |header, name| header.push(cell(name)))
            .push(text("Actions").width(Length::FillPortion(2)));
        let rows = state
            .session
            .snapshot()
            .iter()
            .enumerate()
            .fold(Column::new().spacing(4), |rows, (index, record)| {
                rows.push(table_row(index, record))
            });
        card(
            "Données enregistrées",
            column![header, scrollable(rows).height(Length::Fill)].spacing(8),
        )
    }
}

impl Screen for IdentificationScreen {
    type Message = IdentificationMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        layout(
            scrollable(Self::form(state)),
            Self::table(state),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let session = &mut state.session;
        // Outcomes are reported through the status message.
        match message {
            IdentificationMessage::NameChanged(name) => session.fields_mut().name = name,
            IdentificationMessage::SexSelected(sex) => session.fields_mut().sex = sex,
            IdentificationMessage::MaritalStatusSelected(code) => {
                session.fields_mut().marital_status = code.to_string()
            }
            IdentificationMessage::EducationSelected(code) => {
                session.fields_mut().education_level = code.to_string()
            }
            IdentificationMessage::PhoneChanged(raw) => {
                if let Some(phone) = parse_number(&raw) {
                    session.fields_mut().phone = phone;
                }
            }
            IdentificationMessage::AgeChanged(raw) => {
                if let Some(age) = parse_number(&raw) {
                    session.fields_mut().age = age;
                }
            }
            IdentificationMessage::CommuneChanged(commune) => {
                session.fields_mut().commune = commune
            }
            IdentificationMessage::ProvinceChanged(province) => {
                session.fields_mut().province = province
            }
            IdentificationMessage::ReasonSelected(code) => {
                session.fields_mut().reason = code.to_string()
            }
            IdentificationMessage::OtherReasonChanged(other) => {
                session.fields_mut().other_reason = other
            }
            IdentificationMessage::Submit => {
                let _ = session.submit();
            }
            IdentificationMessage::Cancel => session.cancel(),
            IdentificationMessage::EditRow(index) => {
                let _ = session.start_edit(index);
            }
            IdentificationMessage::DeleteRow(index) => {
                let _ = session.delete_row(index);
            }
        }
        Task::none()
    }
}
