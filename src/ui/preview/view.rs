// SPDX-License-Identifier: MPL-2.0
//! Grid rendering of the preview table.

use super::Preview;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{container, Column, Container, Row, Scrollable, Text};
use iced::{font, Element, Font, Length, Theme};

pub fn view<'a, M: 'a>(preview: &'a Preview) -> Element<'a, M> {
    let header = Row::with_children(preview.header().into_iter().map(|label| {
        cell(
            Text::new(label).font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }),
            true,
        )
    }));

    let body = preview.rows().iter().map(|row| {
        Row::with_children(row.iter().map(|value| cell(Text::new(value.as_str()), false))).into()
    });

    let table = Column::new().push(header).extend(body);

    Scrollable::new(table)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .into()
}

fn cell<'a, M: 'a>(content: Text<'a>, is_header: bool) -> Element<'a, M> {
    Container::new(content.size(typography::BODY_SM))
        .width(Length::Fixed(sizing::PREVIEW_CELL_WIDTH))
        .padding([spacing::XXS, spacing::XS])
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let background = if is_header {
                palette.background.weak.color
            } else {
                palette.background.base.color
            };
            container::Style {
                background: Some(background.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: border::WIDTH_SM,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
