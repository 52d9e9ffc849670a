// SPDX-License-Identifier: MPL-2.0
//! Home screen: the app title, the glowing main card, and the entry points
//! into the reading flows.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{CardBack, FloatingOrb};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Seconds since the decorative animation epoch.
    pub elapsed: f32,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    StartReading,
    OpenDaily,
    OpenChat,
    OpenCalendar,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a home screen message.
pub fn update(message: Message) -> Event {
    match message {
        Message::StartReading => Event::Navigate(Screen::Shuffle),
        Message::OpenDaily => Event::Navigate(Screen::Daily),
        Message::OpenChat => Event::Navigate(Screen::Chat),
        Message::OpenCalendar => Event::Navigate(Screen::Calendar),
    }
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("home-title"))
                .size(typography::TITLE_LG)
                .color(palette::GOLD),
        )
        .push(
            Text::new(ctx.i18n.tr("home-subtitle"))
                .size(typography::BODY)
                .color(palette::MUTED),
        );

    let main_card = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::SM)
            .push(
                CardBack::new(
                    sizing::CARD_LG_WIDTH * 0.8,
                    sizing::CARD_LG_HEIGHT * 0.8,
                    ctx.elapsed,
                )
                .into_element(),
            )
            .push(
                Text::new(ctx.i18n.tr("home-card-title"))
                    .size(typography::TITLE_SM)
                    .color(palette::GOLD),
            )
            .push(
                Text::new(ctx.i18n.tr("home-card-subtitle"))
                    .size(typography::BODY)
                    .color(palette::MUTED),
            ),
    )
    .padding(spacing::MD)
    .style(styles::container::glass_card);

    let start_button = button(
        Text::new(ctx.i18n.tr("home-start-button"))
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::StartReading)
    .style(styles::button::gold)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .width(Length::Fill);

    let daily_button = button(
        Text::new(ctx.i18n.tr("home-daily-button"))
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::OpenDaily)
    .style(styles::button::glass)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .width(Length::Fill);

    let quick_actions = Row::new()
        .spacing(spacing::XL)
        .push(quick_action(ctx.i18n, "💬", "home-chat-button", Message::OpenChat))
        .push(quick_action(
            ctx.i18n,
            "📅",
            "home-calendar-button",
            Message::OpenCalendar,
        ));

    let orbs = Row::new()
        .width(Length::Fill)
        .push(
            FloatingOrb::new(sizing::ORB_SM, ctx.elapsed)
                .color(palette::NEON_PURPLE)
                .into_element(),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            FloatingOrb::new(sizing::ORB_SM * 0.75, ctx.elapsed)
                .phase(2.0)
                .color(palette::NEON_BLUE)
                .into_element(),
        );

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(orbs)
        .push(title)
        .push(main_card)
        .push(start_button)
        .push(daily_button)
        .push(quick_actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn quick_action<'a>(
    i18n: &'a I18n,
    glyph: &'a str,
    label_key: &str,
    message: Message,
) -> Element<'a, Message> {
    button(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(Text::new(glyph).size(sizing::ICON_MD))
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY)),
    )
    .on_press(message)
    .padding(spacing::MD)
    .style(styles::button::glass)
    .into()
}
