// SPDX-License-Identifier: MPL-2.0
//! Rendering of the build log as a bottom-anchored scrollable list.

use super::{LogEntry, LogPanel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{text, Column, Container, Id, Row, Scrollable, Text};
use iced::{Element, Length, Theme};

/// Widget id of the log scrollable, used to snap it to the newest entry.
pub const LOG_SCROLLABLE_ID: &str = "build-logs";

/// Renders every entry, oldest first.
pub fn view<'a, M: 'a>(panel: &'a LogPanel) -> Element<'a, M> {
    let rows = panel.entries().iter().map(entry_row);
    let list = Column::with_children(rows)
        .spacing(spacing::XXS)
        .padding(spacing::XS)
        .width(Length::Fill);

    Scrollable::new(list)
        .id(Id::new(LOG_SCROLLABLE_ID))
        .direction(Direction::Vertical(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LOG_PANEL_HEIGHT))
        .into()
}

fn entry_row<'a, M: 'a>(entry: &'a LogEntry) -> Element<'a, M> {
    let time = Text::new(format!("[{}]", entry.time_label()))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theming::muted_text(theme)),
        });

    let color = entry.severity().color();
    let message = Text::new(entry.message())
        .size(typography::BODY_SM)
        .style(move |_theme: &Theme| text::Style { color });

    Row::new()
        .spacing(spacing::XS)
        .push(time)
        .push(Container::new(message).width(Length::Fill))
        .into()
}
