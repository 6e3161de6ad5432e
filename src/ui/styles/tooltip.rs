// SPDX-License-Identifier: MPL-2.0
//! Tooltips used to advertise keyboard shortcuts.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip surface contrasting with the current theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    // Light tooltip on dark themes, dark tooltip on light ones.
    let (bg_color, text_color) = if theme.extended_palette().is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// tooltip::styled(build_button, "Ctrl+Enter", tooltip::Position::Bottom)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_contrasts_with_theme() {
        let light = tooltip_container(&Theme::Light);
        let dark = tooltip_container(&Theme::Dark);

        assert!(light.background.is_some());
        assert_ne!(light.text_color, dark.text_color);
    }
}
