// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button (start a reading, draw the card).
pub fn gold(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.9,
            ..palette::GOLD
        },
        button::Status::Pressed => palette::GOLD_DIM,
        _ => palette::GOLD,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: palette::GOLD_DIM,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::GLOW,
        snap: true,
    }
}

/// Translucent glass button on the dark background.
pub fn glass(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::GLASS,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::DEEP_BLUE_LIGHT
        })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Borderless secondary action (back buttons, quick questions).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            })),
            WHITE,
        ),
        _ => (None, palette::MUTED),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gold-outlined secondary action (view history, redraw).
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.1,
            ..palette::GOLD
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GOLD,
        border: Border {
            color: Color {
                a: 0.3,
                ..palette::GOLD
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Disabled state (proceed button before the shuffle settles).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        text_color: palette::GRAY_200,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Active bottom-navigation destination.
pub fn nav_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLOW_FAINT,
            ..palette::GOLD
        })),
        text_color: palette::GOLD,
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        shadow: shadow::GLOW,
        snap: true,
    }
}

/// Inactive bottom-navigation destination.
pub fn nav_inactive(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => WHITE,
        _ => palette::MUTED,
    };
    button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
