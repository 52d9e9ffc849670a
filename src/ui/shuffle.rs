// SPDX-License-Identifier: MPL-2.0
//! Shuffle screen.
//!
//! The deck warms up briefly after the screen is entered, shuffles for a
//! fixed duration, then settles. The proceed button stays disabled until
//! the shuffle is complete; only the user advances to the draw screen.

use crate::app::config::{SHUFFLE_RUN_MS, SHUFFLE_WARMUP_MS};
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::CardBack;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Cards rendered in the shuffle pile.
const PILE_SIZE: usize = 7;

/// Phase of the shuffle timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entered the screen, deck not yet moving.
    Warmup,
    /// Deck in motion.
    Shuffling,
    /// Deck settled, proceed unlocked.
    Complete,
}

/// Per-visit state. Dropped when the screen is left, which cancels the
/// timeline.
#[derive(Debug, Clone)]
pub struct State {
    entered_at: Instant,
}

impl State {
    pub fn new(now: Instant) -> Self {
        Self { entered_at: now }
    }

    /// Phase at the given instant.
    pub fn phase(&self, now: Instant) -> Phase {
        let elapsed = now.saturating_duration_since(self.entered_at);
        if elapsed < Duration::from_millis(SHUFFLE_WARMUP_MS) {
            Phase::Warmup
        } else if elapsed < Duration::from_millis(SHUFFLE_WARMUP_MS + SHUFFLE_RUN_MS) {
            Phase::Shuffling
        } else {
            Phase::Complete
        }
    }

    /// Whether the timeline still needs timer-cadence ticks.
    pub fn timers_active(&self, now: Instant) -> bool {
        self.phase(now) != Phase::Complete
    }
}

/// Messages emitted by the shuffle screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Proceed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a shuffle screen message.
pub fn update(state: &State, message: Message, now: Instant) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::Proceed => {
            // The button is disabled until complete; the guard also covers a
            // click racing the final tick.
            if state.phase(now) == Phase::Complete {
                Event::Navigate(Screen::Draw)
            } else {
                Event::None
            }
        }
    }
}

/// Contextual data needed to render the shuffle screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
    pub elapsed: f32,
}

/// Render the shuffle screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let phase = ctx.state.phase(ctx.now);

    let header = Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(ctx.i18n.tr("back-button")).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("shuffle-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    let (headline_key, hint_key, headline_color) = if phase == Phase::Complete {
        ("shuffle-done-headline", "shuffle-done-hint", palette::GOLD)
    } else {
        (
            "shuffle-busy-headline",
            "shuffle-busy-hint",
            palette::WHITE,
        )
    };

    let guidance = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr(headline_key))
                .size(typography::TITLE_MD)
                .color(headline_color),
        )
        .push(
            Text::new(ctx.i18n.tr(hint_key))
                .size(typography::BODY)
                .color(palette::MUTED),
        );

    let agitated = phase == Phase::Shuffling;
    let mut pile = Row::new().spacing(spacing::XXS);
    for index in 0..PILE_SIZE {
        pile = pile.push(
            CardBack::new(sizing::CARD_SM_WIDTH, sizing::CARD_SM_HEIGHT, ctx.elapsed)
                .agitated(agitated)
                .phase(index as f32 * 0.08)
                .into_element(),
        );
    }

    let proceed_label = Text::new(ctx.i18n.tr("shuffle-proceed-button"))
        .size(typography::TITLE_SM)
        .align_x(Horizontal::Center);
    let proceed = if phase == Phase::Complete {
        button(proceed_label)
            .on_press(Message::Proceed)
            .style(styles::button::gold)
    } else {
        button(proceed_label).style(styles::button::disabled())
    }
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .width(Length::Fixed(240.0));

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(header)
        .push(guidance)
        .push(Container::new(pile).padding(spacing::LG))
        .push(proceed);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn phases_follow_the_timeline() {
        let start = Instant::now();
        let state = State::new(start);
        assert_eq!(state.phase(start), Phase::Warmup);
        assert_eq!(state.phase(start + millis(799)), Phase::Warmup);
        assert_eq!(state.phase(start + millis(800)), Phase::Shuffling);
        assert_eq!(state.phase(start + millis(4_299)), Phase::Shuffling);
        assert_eq!(state.phase(start + millis(4_300)), Phase::Complete);
    }

    #[test]
    fn proceed_is_ignored_until_complete() {
        let start = Instant::now();
        let state = State::new(start);
        assert!(matches!(
            update(&state, Message::Proceed, start + millis(1_000)),
            Event::None
        ));
        assert!(matches!(
            update(&state, Message::Proceed, start + millis(5_000)),
            Event::Navigate(Screen::Draw)
        ));
    }

    #[test]
    fn back_returns_home_in_any_phase() {
        let start = Instant::now();
        let state = State::new(start);
        assert!(matches!(
            update(&state, Message::Back, start),
            Event::Navigate(Screen::Home)
        ));
        assert!(matches!(
            update(&state, Message::Back, start + millis(10_000)),
            Event::Navigate(Screen::Home)
        ));
    }

    #[test]
    fn timers_stop_once_complete() {
        let start = Instant::now();
        let state = State::new(start);
        assert!(state.timers_active(start));
        assert!(state.timers_active(start + millis(2_000)));
        assert!(!state.timers_active(start + millis(4_300)));
    }

    #[test]
    fn shuffle_view_renders_in_each_phase() {
        let i18n = I18n::default();
        let start = Instant::now();
        let state = State::new(start);
        for offset in [0, 1_000, 5_000] {
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                now: start + millis(offset),
                elapsed: offset as f32 / 1_000.0,
            });
        }
    }
}
