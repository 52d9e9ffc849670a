// SPDX-License-Identifier: MPL-2.0
//! Daily draw reveal animation.
//!
//! A fully autonomous timeline: the deck shuffles, the center card is
//! singled out, and once the reveal settles the app moves on to the
//! reading. The screen has no interactive elements.

use crate::app::config::{DAILY_COMPLETE_MS, DAILY_REVEAL_END_MS, DAILY_SHUFFLE_END_MS};
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::CardBack;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Cards rendered in the spread.
const SPREAD_SIZE: usize = 7;

/// Index of the card the animation singles out (the center of the spread).
pub const CHOSEN_INDEX: usize = 3;

/// Stage of the reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Shuffling,
    Revealing,
    Complete,
}

/// Per-visit state. Dropped when the screen is left, which cancels the
/// timeline.
#[derive(Debug, Clone)]
pub struct State {
    entered_at: Instant,
    handed_off: bool,
}

impl State {
    pub fn new(now: Instant) -> Self {
        Self {
            entered_at: now,
            handed_off: false,
        }
    }

    /// Stage at the given instant.
    pub fn stage(&self, now: Instant) -> Stage {
        let elapsed = now.saturating_duration_since(self.entered_at);
        if elapsed < Duration::from_millis(DAILY_SHUFFLE_END_MS) {
            Stage::Shuffling
        } else if elapsed < Duration::from_millis(DAILY_REVEAL_END_MS) {
            Stage::Revealing
        } else {
            Stage::Complete
        }
    }

    /// The chosen card is visible from the revealing stage onward.
    pub fn chosen_card(&self, now: Instant) -> Option<usize> {
        match self.stage(now) {
            Stage::Shuffling => None,
            Stage::Revealing | Stage::Complete => Some(CHOSEN_INDEX),
        }
    }

    /// Advances the timeline. Returns the hand-off event exactly once.
    pub fn tick(&mut self, now: Instant) -> Event {
        let elapsed = now.saturating_duration_since(self.entered_at);
        if !self.handed_off && elapsed >= Duration::from_millis(DAILY_COMPLETE_MS) {
            self.handed_off = true;
            return Event::Navigate(Screen::Result);
        }
        Event::None
    }

    /// The timeline always runs at timer cadence until it hands off.
    pub fn timers_active(&self) -> bool {
        !self.handed_off
    }
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Contextual data needed to render the reveal screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
    pub elapsed: f32,
}

/// Render the reveal screen. The message type is the app's unit: the
/// screen emits nothing.
pub fn view<'a, Message: 'a + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stage = ctx.state.stage(ctx.now);

    let (headline_key, hint_key) = match stage {
        Stage::Shuffling => ("animation-shuffling-headline", "animation-shuffling-hint"),
        Stage::Revealing => ("animation-revealing-headline", "animation-revealing-hint"),
        Stage::Complete => ("animation-complete-headline", "animation-complete-hint"),
    };

    let guidance = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr(headline_key))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr(hint_key))
                .size(typography::BODY)
                .color(palette::MUTED),
        );

    let chosen = ctx.state.chosen_card(ctx.now);
    let mut spread = Row::new().spacing(spacing::XXS);
    for index in 0..SPREAD_SIZE {
        let is_chosen = chosen == Some(index);
        let scale = if is_chosen { 1.2 } else { 1.0 };
        spread = spread.push(
            CardBack::new(
                sizing::CARD_SM_WIDTH * scale,
                sizing::CARD_SM_HEIGHT * scale,
                ctx.elapsed,
            )
            .agitated(stage == Stage::Shuffling || is_chosen)
            .phase(index as f32 * 0.3)
            .into_element(),
        );
    }

    // Three pulsing dots stand in for the loading indicator.
    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..3 {
        let alpha = 0.4 + 0.6 * ((ctx.elapsed * 2.0 + index as f32 * 0.4).sin() * 0.5 + 0.5);
        dots = dots.push(
            Text::new("●")
                .size(typography::CAPTION)
                .color(iced::Color {
                    a: alpha,
                    ..palette::GOLD
                }),
        );
    }

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(guidance)
        .push(Container::new(spread).padding(spacing::LG))
        .push(dots);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn stages_follow_the_timeline() {
        let start = Instant::now();
        let state = State::new(start);
        assert_eq!(state.stage(start), Stage::Shuffling);
        assert_eq!(state.stage(start + millis(1_999)), Stage::Shuffling);
        assert_eq!(state.stage(start + millis(2_000)), Stage::Revealing);
        assert_eq!(state.stage(start + millis(3_999)), Stage::Revealing);
        assert_eq!(state.stage(start + millis(4_000)), Stage::Complete);
    }

    #[test]
    fn center_card_is_chosen_once_revealing() {
        let start = Instant::now();
        let state = State::new(start);
        assert_eq!(state.chosen_card(start), None);
        assert_eq!(state.chosen_card(start + millis(2_500)), Some(CHOSEN_INDEX));
        assert_eq!(state.chosen_card(start + millis(5_000)), Some(CHOSEN_INDEX));
    }

    #[test]
    fn hand_off_fires_exactly_once() {
        let start = Instant::now();
        let mut state = State::new(start);
        assert!(matches!(state.tick(start + millis(5_000)), Event::None));
        assert!(matches!(
            state.tick(start + millis(5_500)),
            Event::Navigate(Screen::Result)
        ));
        assert!(matches!(state.tick(start + millis(6_000)), Event::None));
        assert!(!state.timers_active());
    }

    #[test]
    fn reveal_view_renders_in_each_stage() {
        let i18n = I18n::default();
        let start = Instant::now();
        let state = State::new(start);
        for offset in [0, 2_500, 4_500] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                state: &state,
                now: start + millis(offset),
                elapsed: offset as f32 / 1_000.0,
            });
        }
    }
}
