// SPDX-License-Identifier: MPL-2.0
//! Daily card screen.
//!
//! Shows today's date and either the draw invitation (with the face-down
//! mystery card) or, once drawn, the day's card summary with a link to the
//! history calendar.

use crate::app::Screen;
use crate::divination::card;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::CardBack;
use chrono::{Datelike, Local, NaiveDate};
use fluent_bundle::FluentArgs;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Per-visit state.
#[derive(Debug, Clone)]
pub struct State {
    today: NaiveDate,
    has_drawn_today: bool,
}

impl State {
    pub fn new() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            today,
            has_drawn_today: false,
        }
    }

    pub fn has_drawn_today(&self) -> bool {
        self.has_drawn_today
    }

    /// Marks today's draw as done (set when the reveal animation starts).
    pub fn mark_drawn(&mut self) {
        self.has_drawn_today = true;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the daily screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    DrawCard,
    OpenCalendar,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a daily screen message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::DrawCard => {
            state.mark_drawn();
            Event::Navigate(Screen::CardAnimation)
        }
        Message::OpenCalendar => Event::Navigate(Screen::Calendar),
    }
}

/// Contextual data needed to render the daily screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub elapsed: f32,
}

/// Render the daily screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(ctx.i18n.tr("back-button")).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("daily-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    let mut args = FluentArgs::new();
    args.set("year", ctx.state.today.year());
    args.set("month", ctx.state.today.month());
    args.set("day", ctx.state.today.day());
    let date_line = Row::new()
        .spacing(spacing::XS)
        .push(Text::new("✦").color(palette::GOLD))
        .push(
            Text::new(ctx.i18n.tr_with("daily-date", &args))
                .size(typography::BODY)
                .color(palette::GOLD),
        )
        .push(Text::new("✦").color(palette::GOLD));

    let headline = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(date_line)
        .push(
            Text::new(ctx.i18n.tr("daily-headline"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        );

    let body: Element<'_, Message> = if ctx.state.has_drawn_today() {
        view_drawn(&ctx)
    } else {
        view_invitation(&ctx)
    };

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(headline)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn view_invitation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mystery_card = Container::new(
        CardBack::new(
            sizing::CARD_LG_WIDTH * 0.9,
            sizing::CARD_LG_HEIGHT * 0.9,
            ctx.elapsed,
        )
        .into_element(),
    )
    .padding(spacing::SM)
    .style(styles::container::mystical_card);

    let hints = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("daily-meditate-hint"))
                .size(typography::BODY)
                .color(palette::MUTED),
        )
        .push(
            Text::new(ctx.i18n.tr("daily-tap-hint"))
                .size(typography::CAPTION)
                .color(palette::MUTED),
        );

    let draw_button = button(
        Text::new(ctx.i18n.tr("daily-draw-button"))
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::DrawCard)
    .style(styles::button::gold)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .width(Length::Fixed(220.0));

    let tips = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(ctx.i18n.tr("daily-tips-title"))
                    .size(typography::BODY)
                    .color(palette::GOLD),
            )
            .push(tip_line(ctx.i18n, "daily-tip-1"))
            .push(tip_line(ctx.i18n, "daily-tip-2"))
            .push(tip_line(ctx.i18n, "daily-tip-3")),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(320.0))
    .style(styles::container::mystical_card);

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .push(mystery_card)
        .push(hints)
        .push(draw_button)
        .push(tips)
        .into()
}

fn view_drawn<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let summary = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XS)
            .push(
                Text::new(format!(
                    "{} ({})",
                    ctx.i18n.tr(card::READING_CARD.name_key()),
                    card::READING_CARD.card().english_name
                ))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
            )
            .push(
                Text::new(ctx.i18n.tr(card::READING_SUMMARY_KEY))
                    .size(typography::BODY)
                    .color(palette::MUTED),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(320.0))
    .style(styles::container::mystical_card);

    let history_button = button(
        Text::new(ctx.i18n.tr("daily-history-button"))
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::OpenCalendar)
    .style(styles::button::outline)
    .width(Length::Fixed(220.0));

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .push(
            Text::new(ctx.i18n.tr("daily-drawn-headline"))
                .size(typography::BODY)
                .color(palette::MUTED),
        )
        .push(summary)
        .push(history_button)
        .into()
}

fn tip_line<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    Text::new(format!("• {}", i18n.tr(key)))
        .size(typography::CAPTION)
        .color(palette::MUTED)
        .into()
}
