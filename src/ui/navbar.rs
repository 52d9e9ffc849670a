// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar.
//!
//! Renders the three fixed destinations (explore, divine/home, profile)
//! and highlights whichever matches the active screen. The center item is
//! drawn larger, matching the raised center button of the design.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// One navigation destination.
struct NavItem {
    screen: Screen,
    label_key: &'static str,
    glyph: &'static str,
    is_center: bool,
}

static ITEMS: [NavItem; 3] = [
    NavItem {
        screen: Screen::Explore,
        label_key: "nav-explore",
        glyph: "🧭",
        is_center: false,
    },
    NavItem {
        screen: Screen::Home,
        label_key: "nav-divine",
        glyph: "✨",
        is_center: true,
    },
    NavItem {
        screen: Screen::Profile,
        label_key: "nav-profile",
        glyph: "👤",
        is_center: false,
    },
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, active: Screen) -> Event {
    match message {
        Message::Select(target) => {
            if target == active {
                Event::None
            } else {
                Event::Navigate(target)
            }
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Bottom)
        .width(Length::Fill);

    for item in &ITEMS {
        row = row.push(build_item(&ctx, item));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::navigation_bar)
        .into()
}

fn build_item<'a>(ctx: &ViewContext<'a>, item: &'static NavItem) -> Element<'a, Message> {
    let is_active = ctx.active == item.screen;

    let glyph_size = if item.is_center {
        sizing::ICON_LG
    } else {
        sizing::ICON_MD
    };
    let label_size = if item.is_center {
        typography::BODY
    } else {
        typography::CAPTION
    };

    let stack = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(Text::new(item.glyph).size(glyph_size))
        .push(Text::new(ctx.i18n.tr(item.label_key)).size(label_size));

    let style = if is_active {
        styles::button::nav_active
    } else {
        styles::button::nav_inactive
    };

    button(stack)
        .on_press(Message::Select(item.screen))
        .padding(if item.is_center {
            spacing::MD
        } else {
            spacing::SM
        })
        .style(style)
        .width(Length::FillPortion(1))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_explore_home_profile_with_home_centered() {
        assert_eq!(ITEMS.len(), 3);
        assert_eq!(ITEMS[0].screen, Screen::Explore);
        assert_eq!(ITEMS[1].screen, Screen::Home);
        assert_eq!(ITEMS[2].screen, Screen::Profile);
        assert!(ITEMS[1].is_center);
        assert!(!ITEMS[0].is_center && !ITEMS[2].is_center);
    }

    #[test]
    fn selecting_another_destination_navigates() {
        let event = update(Message::Select(Screen::Profile), Screen::Home);
        assert!(matches!(event, Event::Navigate(Screen::Profile)));
    }

    #[test]
    fn selecting_active_destination_is_a_no_op() {
        let event = update(Message::Select(Screen::Home), Screen::Home);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navbar_view_renders_for_each_destination() {
        let i18n = I18n::default();
        for screen in [Screen::Explore, Screen::Home, Screen::Profile] {
            let _element = view(ViewContext {
                i18n: &i18n,
                active: screen,
            });
        }
    }
}
