// SPDX-License-Identifier: MPL-2.0
//! Layout of the workbench: input sidebar on the left, tree and logs on
//! the right, loading banner and toast stacked on top.

use super::canvas::TreeCanvas;
use super::component::{Message, State};
use crate::build::TreeMetrics;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles::{button as button_styles, container as container_styles, tooltip};
use crate::ui::widgets::shortcut_blocking;
use crate::ui::{log_panel, preview, theming};
use iced::widget::{
    button, canvas, opaque, text, text_editor, text_input, Column, Container, Row, Scrollable,
    Stack, Text,
};
use iced::{alignment, font, Element, Font, Length, Theme};

const PARAMETERS_PLACEHOLDER: &str = "e.g. Weather, Temperature, Humidity, Wind, Play";
const TRAINING_DATA_PLACEHOLDER: &str = "One row per line, values separated by commas";
const EMPTY_CANVAS_TEXT: &str = "Build a tree to see it here.";

/// Widgets owned outside the workbench state.
pub struct ViewEnv<'a> {
    pub editor: &'a text_editor::Content,
    pub server_url: &'a str,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let layout = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(sidebar(state, &env))
        .push(main_area(state))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .push(layout)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(message) = state.loading_message() {
        stack = stack.push(loading_banner(message));
    }

    stack
        .push(Toast::view_overlay(state.notifications()).map(Message::Notification))
        .into()
}

fn sidebar<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let parameters = text_input(PARAMETERS_PLACEHOLDER, state.parameters())
        .on_input(Message::ParametersChanged)
        .size(typography::BODY)
        .padding(spacing::XS);

    let training_data = text_editor(env.editor)
        .placeholder(TRAINING_DATA_PLACEHOLDER)
        .on_action(Message::EditorAction)
        .size(typography::BODY_SM)
        .height(Length::Fixed(sizing::EDITOR_HEIGHT));

    let build_button = tooltip::styled(
        button(text("Build Tree").size(typography::BODY))
            .on_press_maybe((!state.is_loading()).then_some(Message::BuildRequested))
            .padding([spacing::XS, spacing::MD])
            .style(button_styles::primary),
        "Ctrl+Enter",
        iced::widget::tooltip::Position::Bottom,
    );

    let example_button = tooltip::styled(
        button(text("Load Example").size(typography::BODY))
            .on_press(Message::LoadExample)
            .padding([spacing::XS, spacing::MD])
            .style(button_styles::secondary),
        "Ctrl+Shift+E",
        iced::widget::tooltip::Position::Bottom,
    );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(build_button)
        .push(example_button);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Decision Tree Builder").size(typography::TITLE_MD))
        .push(section_title("Parameters"))
        .push(shortcut_blocking(parameters))
        .push(section_title("Training Data"))
        .push(shortcut_blocking(training_data))
        .push(actions)
        .push(section_title("Data Preview"))
        .push(preview::view(state.preview()))
        .push(caption(format!("Server: {}", env.server_url)));

    Container::new(Scrollable::new(content.padding(spacing::SM)))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container_styles::panel)
        .into()
}

fn main_area(state: &State) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(toolbar(state))
        .push(tree_area(state));

    if let Some(metrics) = state.metrics() {
        column = column.push(metrics_view(metrics));
    }

    column
        .push(logs_section(state))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar(state: &State) -> Element<'_, Message> {
    let zoom = state.viewport().zoom.factor();

    let zoom_out = secondary_button("\u{2212}", (!zoom.is_min()).then_some(Message::ZoomOut));
    let zoom_in = secondary_button("+", (!zoom.is_max()).then_some(Message::ZoomIn));
    let reset = secondary_button("Reset", Some(Message::ResetZoom));
    let download = secondary_button(
        "Download Image",
        state.image().is_some().then_some(Message::DownloadImage),
    );

    let percent = Text::new(state.viewport().zoom.percent_label())
        .size(typography::BODY_SM)
        .width(Length::Fixed(48.0))
        .align_x(alignment::Horizontal::Center);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("Decision Tree")
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(tooltip::styled(zoom_out, "Ctrl+-", iced::widget::tooltip::Position::Bottom))
        .push(percent)
        .push(tooltip::styled(zoom_in, "Ctrl+=", iced::widget::tooltip::Position::Bottom))
        .push(tooltip::styled(reset, "Ctrl+0", iced::widget::tooltip::Position::Bottom))
        .push(download)
        .into()
}

fn tree_area(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.image() {
        Some(image) => {
            let program = TreeCanvas::new(
                image,
                state.viewport().transform(),
                state.viewport().is_dragging(),
            );
            canvas::Canvas::new(program)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => Container::new(
            Text::new(EMPTY_CANVAS_TEXT)
                .size(typography::BODY)
                .style(muted),
        )
        .center(Length::Fill)
        .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(container_styles::canvas_area)
        .into()
}

fn metrics_view(metrics: &TreeMetrics) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(metrics.summary()).size(typography::BODY_SM));

    let ranked = metrics.ranked_features();
    if !ranked.is_empty() {
        let importance = ranked
            .iter()
            .map(|(name, value)| format!("{name} {value:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        column = column.push(caption(format!("Feature importance: {importance}")));
    }

    column.into()
}

fn logs_section(state: &State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(section_title("Build Logs").width(Length::Fill))
        .push(secondary_button("Copy", Some(Message::CopyLogs)))
        .push(secondary_button("Download", Some(Message::DownloadLogs)))
        .push(secondary_button("Clear", Some(Message::ClearLogs)));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(log_panel::view(state.logs())),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(container_styles::panel)
    .into()
}

fn loading_banner(message: &str) -> Element<'_, Message> {
    Container::new(opaque(
        Container::new(Text::new(message).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(container_styles::loading_banner),
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::LG)
    .into()
}

fn secondary_button(label: &str, on_press: Option<Message>) -> button::Button<'_, Message> {
    button(text(label).size(typography::BODY_SM))
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::secondary)
}

fn section_title(label: &str) -> Text<'_> {
    Text::new(label).size(typography::BODY).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    })
}

fn caption<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::CAPTION).style(muted)
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theming::muted_text(theme)),
    }
}
