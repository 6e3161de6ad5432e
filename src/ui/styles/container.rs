// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sidebar and section surface.
///
/// Derived from the active theme background so panels stay readable in both
/// light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color { a: opacity::SURFACE, ..base })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Framed area holding the tree image.
pub fn canvas_area(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Banner shown while a build is in flight.
pub fn loading_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_have_backgrounds() {
        for theme in [Theme::Light, Theme::Dark] {
            assert!(panel(&theme).background.is_some());
            assert!(canvas_area(&theme).background.is_some());
        }
    }

    #[test]
    fn loading_banner_text_is_white() {
        assert_eq!(loading_banner(&Theme::Light).text_color, Some(palette::WHITE));
    }
}
