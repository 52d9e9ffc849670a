// SPDX-License-Identifier: MPL-2.0
//! Draw screen.
//!
//! Seven face-down cards are fanned out; the first tap locks the choice,
//! later taps are no-ops, and the reading opens after a short reveal delay.

use crate::app::config::DRAW_REVEAL_MS;
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

/// Number of cards in the fan.
pub const FAN_SIZE: usize = 7;

/// Per-visit state. Dropped when the screen is left, which cancels the
/// pending reveal.
#[derive(Debug, Clone)]
pub struct State {
    selected: Option<usize>,
    locked_at: Option<Instant>,
}

impl State {
    pub fn new() -> Self {
        Self {
            selected: None,
            locked_at: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a choice has been made and input is locked.
    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the pending reveal still needs timer-cadence ticks.
    pub fn timers_active(&self) -> bool {
        self.locked_at.is_some()
    }

    /// Advances the reveal timer. Returns the navigation event once the
    /// delay has passed.
    pub fn tick(&mut self, now: Instant) -> Event {
        if let Some(locked_at) = self.locked_at {
            if now.saturating_duration_since(locked_at) >= Duration::from_millis(DRAW_REVEAL_MS)
            {
                self.locked_at = None;
                return Event::Navigate(Screen::Result);
            }
        }
        Event::None
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the draw screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Select(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a draw screen message.
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Shuffle),
        Message::Select(index) => {
            if state.selected.is_none() && index < FAN_SIZE {
                state.selected = Some(index);
                state.locked_at = Some(now);
            }
            Event::None
        }
    }
}

/// Contextual data needed to render the draw screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub elapsed: f32,
}

/// Render the draw screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(ctx.i18n.tr("draw-reshuffle-button")).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("draw-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    let guidance = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("draw-headline"))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr("draw-hint"))
                .size(typography::BODY)
                .color(palette::MUTED),
        );

    let mut fan = Row::new().spacing(spacing::XXS);
    for index in 0..FAN_SIZE {
        // The arc of the fan: outer cards sit lower than the center one.
        let arc_drop = (index as f32 - 3.0).abs() * 10.0;
        let is_chosen = ctx.state.selected == Some(index);
        let scale = if is_chosen { 1.15 } else { 1.0 };

        let card = CardBack::new(
            sizing::CARD_SM_WIDTH * scale,
            sizing::CARD_SM_HEIGHT * scale,
            ctx.elapsed,
        )
        .agitated(is_chosen)
        .phase(index as f32 * 0.5)
        .into_element();

        let slot: Element<'_, Message> = if ctx.state.is_locked() {
            // Input is locked; remaining cards are inert.
            Container::new(card).padding([arc_drop, 0.0]).into()
        } else {
            button(card)
                .on_press(Message::Select(index))
                .padding([arc_drop, 0.0])
                .style(styles::button::ghost)
                .into()
        };
        fan = fan.push(slot);
    }

    let hint_key = if ctx.state.is_locked() {
        "draw-locked-hint"
    } else {
        "draw-waiting-hint"
    };
    let footer = Text::new(ctx.i18n.tr(hint_key))
        .size(typography::BODY)
        .color(palette::MUTED);

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(header)
        .push(guidance)
        .push(Container::new(fan).padding(spacing::LG))
        .push(footer);

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
    fn first_selection_locks_input() {
        let mut state = State::new();
        let now = Instant::now();

        let _ = update(&mut state, Message::Select(2), now);
        assert_eq!(state.selected(), Some(2));
        assert!(state.is_locked());

        // Subsequent taps are no-ops.
        let _ = update(&mut state, Message::Select(5), now + millis(100));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut state = State::new();
        let _ = update(&mut state, Message::Select(FAN_SIZE), Instant::now());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn reveal_fires_after_the_delay() {
        let mut state = State::new();
        let now = Instant::now();
        let _ = update(&mut state, Message::Select(2), now);

        assert!(matches!(state.tick(now + millis(500)), Event::None));
        assert!(matches!(
            state.tick(now + millis(800)),
            Event::Navigate(Screen::Result)
        ));
        // The timer is consumed; further ticks are quiet.
        assert!(matches!(state.tick(now + millis(900)), Event::None));
        assert!(!state.timers_active());
    }

    #[test]
    fn tick_without_selection_is_quiet() {
        let mut state = State::new();
        assert!(matches!(state.tick(Instant::now()), Event::None));
        assert!(!state.timers_active());
    }

    #[test]
    fn back_returns_to_shuffle() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::Back, Instant::now()),
            Event::Navigate(Screen::Shuffle)
        ));
    }

    #[test]
    fn draw_view_renders_locked_and_unlocked() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _unlocked = view(ViewContext {
            i18n: &i18n,
            state: &state,
            elapsed: 0.0,
        });
        drop(_unlocked);
        let _ = update(&mut state, Message::Select(3), Instant::now());
        let _locked = view(ViewContext {
            i18n: &i18n,
            state: &state,
            elapsed: 1.0,
        });
    }
}
