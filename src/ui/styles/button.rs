// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Main call to action, e.g. "Build Tree".
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Secondary actions such as zoom controls and log tools.
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (background, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    let base = button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            border: Border {
                color: palette::PRIMARY_500,
                ..base.border
            },
            shadow: shadow::SM,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            ..base
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Grayed-out, non-interactive button.
pub fn disabled(theme: &Theme) -> button::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_is_lighter_than_active() {
        let active = primary(&Theme::Light, button::Status::Active);
        let hovered = primary(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn disabled_status_uses_disabled_style() {
        let style = secondary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(
            primary(&Theme::Dark, button::Status::Disabled).background,
            disabled(&Theme::Dark).background
        );
    }

    #[test]
    fn secondary_follows_theme() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}
