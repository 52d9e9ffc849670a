// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen transitions all funnel through [`handle_screen_switch`]: the
//! outgoing screen's state is dropped (cancelling any pending timers) and
//! the incoming screen's state is created. Tick handling routes only to the
//! active screen, so a stale deadline can never mutate a screen the user
//! has left.

use super::{Message, Screen};
use crate::divination::Oracle;
use crate::i18n::fluent::I18n;
use crate::ui::{calendar, card_animation, chat, daily, draw, explore, home, navbar, profile, result, shuffle};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub shuffle: &'a mut Option<shuffle::State>,
    pub draw: &'a mut Option<draw::State>,
    pub daily: &'a mut Option<daily::State>,
    pub card_animation: &'a mut Option<card_animation::State>,
    pub chat: &'a mut Option<chat::State>,
    pub calendar: &'a mut Option<calendar::State>,
    pub oracle: &'a mut Oracle,
    /// Logical now: advanced by ticks, shared by every deadline check.
    pub now: Instant,
}

/// Handles screen transitions.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if target == *ctx.screen {
        // Re-selecting the active screen is a no-op; local state survives.
        return Task::none();
    }

    tracing::debug!(from = ?ctx.screen, to = ?target, "screen switch");

    // Drop every page state, then create the target's. Only the active
    // screen ever owns state, so pending timers die with the transition.
    *ctx.shuffle = None;
    *ctx.draw = None;
    *ctx.daily = None;
    *ctx.card_animation = None;
    *ctx.chat = None;
    *ctx.calendar = None;

    match target {
        Screen::Shuffle => *ctx.shuffle = Some(shuffle::State::new(ctx.now)),
        Screen::Draw => *ctx.draw = Some(draw::State::new()),
        Screen::Daily => *ctx.daily = Some(daily::State::new()),
        Screen::CardAnimation => *ctx.card_animation = Some(card_animation::State::new(ctx.now)),
        Screen::Chat => *ctx.chat = Some(chat::State::new(ctx.i18n)),
        Screen::Calendar => *ctx.calendar = Some(calendar::State::new()),
        Screen::Home | Screen::Result | Screen::Explore | Screen::Profile => {}
    }

    *ctx.screen = target;
    Task::none()
}

/// Handles the periodic tick: advances the active screen's timeline.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match *ctx.screen {
        Screen::Draw => {
            if let Some(state) = ctx.draw.as_mut() {
                if let draw::Event::Navigate(target) = state.tick(ctx.now) {
                    return handle_screen_switch(ctx, target);
                }
            }
            Task::none()
        }
        Screen::CardAnimation => {
            if let Some(state) = ctx.card_animation.as_mut() {
                if let card_animation::Event::Navigate(target) = state.tick(ctx.now) {
                    return handle_screen_switch(ctx, target);
                }
            }
            Task::none()
        }
        Screen::Chat => {
            if let Some(state) = ctx.chat.as_mut() {
                state.tick(ctx.now, ctx.oracle, ctx.i18n);
            }
            Task::none()
        }
        // The shuffle phase is derived from elapsed time in the view; the
        // remaining screens have no timeline.
        _ => Task::none(),
    }
}

/// Handles bottom navigation messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles home screen messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let home::Event::Navigate(target) = home::update(message);
    handle_screen_switch(ctx, target)
}

/// Handles shuffle screen messages.
pub fn handle_shuffle_message(
    ctx: &mut UpdateContext<'_>,
    message: shuffle::Message,
) -> Task<Message> {
    let Some(state) = ctx.shuffle.as_ref() else {
        return Task::none();
    };
    match shuffle::update(state, message, ctx.now) {
        shuffle::Event::None => Task::none(),
        shuffle::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles draw screen messages.
pub fn handle_draw_message(ctx: &mut UpdateContext<'_>, message: draw::Message) -> Task<Message> {
    let Some(state) = ctx.draw.as_mut() else {
        return Task::none();
    };
    match draw::update(state, message, ctx.now) {
        draw::Event::None => Task::none(),
        draw::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles daily screen messages.
pub fn handle_daily_message(ctx: &mut UpdateContext<'_>, message: daily::Message) -> Task<Message> {
    let Some(state) = ctx.daily.as_mut() else {
        return Task::none();
    };
    let daily::Event::Navigate(target) = daily::update(state, message);
    handle_screen_switch(ctx, target)
}

/// Handles result screen messages.
pub fn handle_result_message(
    ctx: &mut UpdateContext<'_>,
    message: result::Message,
) -> Task<Message> {
    let result::Event::Navigate(target) = result::update(message);
    handle_screen_switch(ctx, target)
}

/// Handles chat screen messages.
pub fn handle_chat_message(ctx: &mut UpdateContext<'_>, message: chat::Message) -> Task<Message> {
    let Some(state) = ctx.chat.as_mut() else {
        return Task::none();
    };
    match chat::update(state, message, ctx.now, ctx.i18n) {
        chat::Event::None => Task::none(),
        chat::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles calendar screen messages.
pub fn handle_calendar_message(
    ctx: &mut UpdateContext<'_>,
    message: calendar::Message,
) -> Task<Message> {
    let Some(state) = ctx.calendar.as_mut() else {
        return Task::none();
    };
    match calendar::update(state, message) {
        calendar::Event::None => Task::none(),
        calendar::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles explore screen messages.
pub fn handle_explore_message(
    ctx: &mut UpdateContext<'_>,
    message: explore::Message,
) -> Task<Message> {
    match explore::update(message) {
        explore::Event::None => Task::none(),
        explore::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Handles profile screen messages.
pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match profile::update(message) {
        profile::Event::None => Task::none(),
        profile::Event::Navigate(target) => handle_screen_switch(ctx, target),
    }
}
