// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and, on screens that are not full-screen
//! transitions, the bottom navigation bar underneath it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use crate::ui::{calendar, card_animation, chat, daily, draw, explore, home, navbar, profile, result, shuffle};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub shuffle: Option<&'a shuffle::State>,
    pub draw: Option<&'a draw::State>,
    pub daily: Option<&'a daily::State>,
    pub card_animation: Option<&'a card_animation::State>,
    pub chat: Option<&'a chat::State>,
    pub calendar: Option<&'a calendar::State>,
    /// Logical now, for phase derivation.
    pub now: Instant,
    /// Seconds since the decorative animation epoch.
    pub elapsed: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            elapsed: ctx.elapsed,
        })
        .map(Message::Home),
        Screen::Shuffle => match ctx.shuffle {
            Some(state) => shuffle::view(shuffle::ViewContext {
                i18n: ctx.i18n,
                state,
                now: ctx.now,
                elapsed: ctx.elapsed,
            })
            .map(Message::Shuffle),
            None => missing_state(),
        },
        Screen::Draw => match ctx.draw {
            Some(state) => draw::view(draw::ViewContext {
                i18n: ctx.i18n,
                state,
                elapsed: ctx.elapsed,
            })
            .map(Message::Draw),
            None => missing_state(),
        },
        Screen::Daily => match ctx.daily {
            Some(state) => daily::view(daily::ViewContext {
                i18n: ctx.i18n,
                state,
                elapsed: ctx.elapsed,
            })
            .map(Message::Daily),
            None => missing_state(),
        },
        Screen::CardAnimation => match ctx.card_animation {
            Some(state) => card_animation::view(card_animation::ViewContext {
                i18n: ctx.i18n,
                state,
                now: ctx.now,
                elapsed: ctx.elapsed,
            }),
            None => missing_state(),
        },
        Screen::Result => result::view(result::ViewContext { i18n: ctx.i18n }).map(Message::Result),
        Screen::Chat => match ctx.chat {
            Some(state) => chat::view(chat::ViewContext {
                i18n: ctx.i18n,
                state,
                elapsed: ctx.elapsed,
            })
            .map(Message::Chat),
            None => missing_state(),
        },
        Screen::Calendar => match ctx.calendar {
            Some(state) => calendar::view(calendar::ViewContext {
                i18n: ctx.i18n,
                state,
            })
            .map(Message::Calendar),
            None => missing_state(),
        },
        Screen::Explore => explore::view(explore::ViewContext {
            i18n: ctx.i18n,
            elapsed: ctx.elapsed,
        })
        .map(Message::Explore),
        Screen::Profile => profile::view(profile::ViewContext { i18n: ctx.i18n }).map(Message::Profile),
    };

    let mut column = Column::new().push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.screen.shows_bottom_nav() {
        let navbar_view = navbar::view(navbar::ViewContext {
            i18n: ctx.i18n,
            active: ctx.screen,
        })
        .map(Message::Navbar);
        column = column.push(navbar_view);
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::app_background)
        .into()
}

/// Fallback if a stateful screen is rendered without its state. Should not
/// happen: `handle_screen_switch` creates the state before the switch.
fn missing_state<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Screen state missing"))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
