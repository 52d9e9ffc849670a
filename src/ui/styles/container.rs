// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Root application background.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::DEEP_BLUE)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Frosted glass panel used for most cards.
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS,
            ..palette::DEEP_BLUE_LIGHT
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Gold-rimmed card used for readings and the daily card.
pub fn mystical_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::DEEP_BLUE_LIGHT
        })),
        border: Border {
            color: Color {
                a: 0.3,
                ..palette::GOLD
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::GLOW,
        ..container::Style::default()
    }
}

/// The translucent bar holding the bottom navigation.
pub fn navigation_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..palette::DEEP_BLUE
        })),
        border: Border {
            color: Color {
                a: opacity::GLOW_FAINT,
                ..palette::WHITE
            },
            width: 1.0,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Chat bubble for the user's own messages.
pub fn bubble_user(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Chat bubble for consultant messages.
pub fn bubble_consultant(theme: &Theme) -> container::Style {
    mystical_card(theme)
}

/// Small colored badge (mood, arcana).
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.2, ..color })),
        text_color: Some(color),
        border: Border {
            color: Color { a: 0.3, ..color },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..container::Style::default()
    }
}
