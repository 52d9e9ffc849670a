// SPDX-License-Identifier: MPL-2.0
//! Profile screen: the user summary card and the account menu. Only the
//! records entry navigates anywhere; the rest are visual placeholders.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Records,
    Favorites,
    Learning,
    Vip,
    Settings,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 5] = [
        MenuEntry::Records,
        MenuEntry::Favorites,
        MenuEntry::Learning,
        MenuEntry::Vip,
        MenuEntry::Settings,
    ];

    fn glyph(self) -> &'static str {
        match self {
            MenuEntry::Records => "📅",
            MenuEntry::Favorites => "❤",
            MenuEntry::Learning => "📖",
            MenuEntry::Vip => "👑",
            MenuEntry::Settings => "⚙",
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            MenuEntry::Records => "profile-records-title",
            MenuEntry::Favorites => "profile-favorites-title",
            MenuEntry::Learning => "profile-learning-title",
            MenuEntry::Vip => "profile-vip-title",
            MenuEntry::Settings => "profile-settings-title",
        }
    }

    fn desc_key(self) -> &'static str {
        match self {
            MenuEntry::Records => "profile-records-desc",
            MenuEntry::Favorites => "profile-favorites-desc",
            MenuEntry::Learning => "profile-learning-desc",
            MenuEntry::Vip => "profile-vip-desc",
            MenuEntry::Settings => "profile-settings-desc",
        }
    }
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    Open(MenuEntry),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a profile screen message.
pub fn update(message: Message) -> Event {
    match message {
        Message::Open(MenuEntry::Records) => Event::Navigate(Screen::Calendar),
        // The remaining entries are placeholders without a destination.
        Message::Open(_) => Event::None,
    }
}

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the profile screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let identity = Row::new()
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(Text::new("👤").size(sizing::ICON_LG))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr("profile-name"))
                        .size(typography::TITLE_MD)
                        .color(palette::WHITE),
                )
                .push(
                    Text::new(ctx.i18n.tr("profile-motto"))
                        .size(typography::CAPTION)
                        .color(palette::MUTED),
                ),
        );

    let stats = Row::new()
        .spacing(spacing::MD)
        .push(stat(ctx.i18n, "128", "profile-stat-draws", palette::GOLD))
        .push(stat(ctx.i18n, "42", "profile-stat-days", palette::NEON_PURPLE))
        .push(stat(
            ctx.i18n,
            "Level 3",
            "profile-stat-level",
            palette::NEON_BLUE,
        ));

    let summary = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(identity)
            .push(stats),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::glass_card);

    let mut menu = Column::new().spacing(spacing::SM);
    for entry in MenuEntry::ALL {
        menu = menu.push(menu_row(ctx.i18n, entry));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(summary)
        .push(menu);

    Container::new(iced::widget::scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn stat<'a>(
    i18n: &'a I18n,
    value: &'a str,
    label_key: &str,
    color: iced::Color,
) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(Text::new(value).size(typography::TITLE_MD).color(color))
        .push(
            Text::new(i18n.tr(label_key))
                .size(typography::CAPTION)
                .color(palette::MUTED),
        )
        .into()
}

fn menu_row<'a>(i18n: &'a I18n, entry: MenuEntry) -> Element<'a, Message> {
    let vip_color = if entry == MenuEntry::Vip {
        palette::GOLD
    } else {
        palette::WHITE
    };

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(Text::new(entry.glyph()).size(sizing::ICON_MD).color(vip_color))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(
                        Text::new(i18n.tr(entry.title_key()))
                            .size(typography::BODY)
                            .color(palette::WHITE),
                    )
                    .push(
                        Text::new(i18n.tr(entry.desc_key()))
                            .size(typography::CAPTION)
                            .color(palette::MUTED),
                    ),
            )
            .push(Text::new("›").size(typography::TITLE_SM).color(palette::MUTED)),
    )
    .on_press(Message::Open(entry))
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::button::glass)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_entry_opens_the_calendar() {
        assert!(matches!(
            update(Message::Open(MenuEntry::Records)),
            Event::Navigate(Screen::Calendar)
        ));
    }

    #[test]
    fn placeholder_entries_stay_put() {
        for entry in [
            MenuEntry::Favorites,
            MenuEntry::Learning,
            MenuEntry::Vip,
            MenuEntry::Settings,
        ] {
            assert!(matches!(update(Message::Open(entry)), Event::None));
        }
    }

    #[test]
    fn menu_lists_five_entries_in_order() {
        assert_eq!(MenuEntry::ALL.len(), 5);
        assert_eq!(MenuEntry::ALL[0], MenuEntry::Records);
        assert_eq!(MenuEntry::ALL[4], MenuEntry::Settings);
    }

    #[test]
    fn profile_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
