// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme, Vector};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(text("\u{00d7}").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay, anchored to the bottom-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        match manager.current() {
            Some(notification) => Container::new(Self::view(notification))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..bg_color
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM * 2.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.25,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_STRONG * 0.3,
                ..palette::GRAY_400
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_highlights_on_hover() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
